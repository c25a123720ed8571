// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use crate::download::DEFAULT_MODEL;
use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Overlay Options:
    --model, -m <MODEL>    Path to ONNX pose model [default: movenet_singlepose_lightning_4.onnx]
    --source, -s <SOURCE>  Input image to overlay
    --conf <CONF>          Keypoint confidence threshold [default: 0.5]
    --save                 Save the overlaid image to runs/overlay
    --show                 Display the overlaid image in a window
    --verbose              Show verbose output

Examples:
    pose-overlay overlay --source photo.jpg
    pose-overlay overlay --model movenet_singlepose_lightning_4.onnx --source photo.jpg --save
    pose-overlay overlay -s photo.jpg --conf 0.3 --show"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate a pose and overlay its skeleton on the image
    Overlay(OverlayArgs),
}

/// Arguments for the overlay command.
#[derive(Args, Debug)]
pub struct OverlayArgs {
    /// Path to ONNX pose model file
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Input image to overlay
    #[arg(short, long)]
    pub source: String,

    /// Keypoint confidence threshold
    #[arg(long, default_value_t = 0.5)]
    pub conf: f32,

    /// Save the overlaid image to runs/overlay
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Display the overlaid image in a window
    #[arg(long, default_value_t = false)]
    pub show: bool,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overlay_args_defaults() {
        let args = Cli::parse_from(["app", "overlay", "--source", "photo.jpg"]);
        match args.command {
            Commands::Overlay(overlay_args) => {
                assert_eq!(overlay_args.model, DEFAULT_MODEL);
                assert_eq!(overlay_args.source, "photo.jpg");
                assert!((overlay_args.conf - 0.5).abs() < f32::EPSILON);
                assert!(!overlay_args.save);
                assert!(!overlay_args.show);
                assert!(overlay_args.verbose);
            }
        }
    }

    #[test]
    fn test_overlay_args_custom() {
        let args = Cli::parse_from([
            "app",
            "overlay",
            "--model",
            "custom.onnx",
            "--source",
            "test.jpg",
            "--conf",
            "0.3",
            "--save",
            "--verbose",
            "false",
        ]);
        match args.command {
            Commands::Overlay(overlay_args) => {
                assert_eq!(overlay_args.model, "custom.onnx");
                assert_eq!(overlay_args.source, "test.jpg");
                assert!((overlay_args.conf - 0.3).abs() < f32::EPSILON);
                assert!(overlay_args.save);
                assert!(!overlay_args.verbose);
            }
        }
    }
}
