// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use crate::acquire::{CANVAS_HEIGHT, CANVAS_WIDTH, acquire};
use crate::annotate::overlay_image;
use crate::cli::args::OverlayArgs;
use crate::download::ensure_model;
use crate::{OverlayConfig, PoseModel, VERSION};
use crate::{error, info, verbose};
#[cfg(not(feature = "visualize"))]
use crate::warn;

/// Run pose estimation and skeleton overlay on one image.
pub fn run_overlay(args: &OverlayArgs) {
    crate::cli::logging::set_verbose(args.verbose);

    let model_path = match ensure_model(&args.model) {
        Ok(path) => path,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let config = OverlayConfig::new()
        .with_min_score(args.conf)
        .with_canvas(CANVAS_WIDTH, CANVAS_HEIGHT);

    let mut model = match PoseModel::load_with_config(&model_path, config.clone()) {
        Ok(m) => m,
        Err(e) => {
            error!("Error loading model: {e}");
            process::exit(1);
        }
    };

    println!("pose-overlay {VERSION} 🚀 Rust ONNX");

    let acquired = match acquire(&args.source) {
        Ok(a) => a,
        Err(e) => {
            error!("Error acquiring image: {e}");
            process::exit(1);
        }
    };
    verbose!(
        "Resized {} to {}x{} at {}",
        args.source,
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        acquired.uri.display()
    );

    let source_id = acquired.uri.to_string_lossy().to_string();
    let estimate = match model.estimate(&acquired.image, source_id) {
        Ok(est) => est,
        Err(e) => {
            error!("Error estimating pose: {e}");
            process::exit(1);
        }
    };

    verbose!(
        "image 1/1 {}: {}x{} {}{:.1}ms",
        estimate.path,
        estimate.canvas.0,
        estimate.canvas.1,
        estimate.verbose(config.min_score),
        estimate.elapsed_ms
    );

    let overlaid = overlay_image(&acquired.image, &estimate, &config);

    if args.save {
        let dir = next_run_dir("runs", "overlay");
        if let Err(e) = fs::create_dir_all(&dir) {
            error!("Failed to create save directory: {e}");
            process::exit(1);
        }

        let filename = Path::new(&args.source)
            .file_name()
            .map_or_else(|| "overlay.jpg".to_string(), |f| f.to_string_lossy().to_string());
        let save_path = PathBuf::from(&dir).join(filename);

        match overlaid.to_rgb8().save(&save_path) {
            Ok(()) => verbose!("Results saved to {}", save_path.display()),
            Err(e) => error!("Failed to save result: {e}"),
        }
    }

    info!("Model eval time: {:.0} ms", estimate.elapsed_ms);

    #[cfg(feature = "visualize")]
    if args.show {
        if let Err(e) = crate::viewer::show("pose-overlay", &overlaid) {
            error!("{e}");
        }
    }

    #[cfg(not(feature = "visualize"))]
    if args.show {
        warn!("--show requires the 'visualize' feature. Compile with --features visualize.");
    }
}

/// Find the next available run directory (overlay, overlay2, overlay3, etc.)
fn next_run_dir(base: &str, prefix: &str) -> String {
    let base_path = Path::new(base);

    // First try without number
    let first = base_path.join(prefix);
    if !first.exists() {
        return first.to_string_lossy().to_string();
    }

    // Try with incrementing numbers
    for i in 2.. {
        let numbered = base_path.join(format!("{prefix}{i}"));
        if !numbered.exists() {
            return numbered.to_string_lossy().to_string();
        }
    }

    // Fallback (should never reach here)
    base_path.join(prefix).to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_run_dir_increments() {
        let base = std::env::temp_dir().join("pose-overlay-test-runs");
        let _ = fs::remove_dir_all(&base);
        fs::create_dir_all(&base).unwrap();
        let base_str = base.to_string_lossy().to_string();

        let first = next_run_dir(&base_str, "overlay");
        assert!(first.ends_with("overlay"));

        fs::create_dir_all(&first).unwrap();
        let second = next_run_dir(&base_str, "overlay");
        assert!(second.ends_with("overlay2"));

        let _ = fs::remove_dir_all(&base);
    }
}
