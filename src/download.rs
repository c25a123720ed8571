// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Model downloading utilities.
//!
//! Fetches the default MoveNet model on first run when it is not found
//! locally. Downloads stream to a temporary file and are moved into place
//! atomically so an interrupted transfer never leaves a corrupt model
//! behind.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{OverlayError, Result};

/// Default pose model name.
pub const DEFAULT_MODEL: &str = "movenet_singlepose_lightning_4.onnx";

/// URL for downloading the default pose model.
const DEFAULT_MODEL_URL: &str =
    "https://github.com/Kazuhito00/MoveNet-Python-Example/raw/main/onnx/movenet_singlepose_lightning_4.onnx";

/// Connection timeout in seconds.
const CONNECT_TIMEOUT: u64 = 30;

/// Read timeout in seconds.
const READ_TIMEOUT: u64 = 300;

/// Ensure the model file exists, downloading the default if necessary.
///
/// Only the well-known default model is fetched automatically; any other
/// missing path is reported as an error so a typo never triggers a network
/// round trip.
///
/// # Arguments
///
/// * `model` - Model path or name from the CLI.
///
/// # Returns
///
/// * The path to an existing model file.
///
/// # Errors
///
/// Returns an error if the file is missing and can't be downloaded.
pub fn ensure_model(model: &str) -> Result<PathBuf> {
    let path = PathBuf::from(model);
    if path.exists() {
        return Ok(path);
    }

    if model != DEFAULT_MODEL {
        return Err(OverlayError::ModelLoad(format!(
            "Model file not found: {model}"
        )));
    }

    println!("Downloading {DEFAULT_MODEL_URL} to {model}");
    download_file(DEFAULT_MODEL_URL, &path)?;
    Ok(path)
}

/// Download a file from URL to the specified path.
///
/// Uses streaming download to a temporary file, then atomic rename to
/// prevent corrupted files from partial downloads.
fn download_file(url: &str, dest: &Path) -> Result<()> {
    let config = ureq::Agent::config_builder()
        .timeout_connect(Some(Duration::from_secs(CONNECT_TIMEOUT)))
        .timeout_recv_body(Some(Duration::from_secs(READ_TIMEOUT)))
        .build();
    let agent = ureq::Agent::new_with_config(config);

    let response = agent.get(url).call().map_err(|e| {
        let msg = match &e {
            ureq::Error::Timeout(_) => format!("Connection timed out while downloading {url}"),
            ureq::Error::Io(io_err) => format!("Network error downloading {url}: {io_err}"),
            _ => format!("Failed to download {url}: {e}"),
        };
        OverlayError::Download(msg)
    })?;

    let tmp = dest.with_extension("tmp");
    let file = File::create(&tmp)
        .map_err(|e| OverlayError::Download(format!("Failed to create {}: {e}", tmp.display())))?;

    let mut reader = response.into_body().into_reader();
    let mut writer = BufWriter::new(file);
    if let Err(e) = io::copy(&mut reader, &mut writer) {
        let _ = fs::remove_file(&tmp);
        return Err(OverlayError::Download(format!(
            "Failed to download {url}: {e}"
        )));
    }
    drop(writer);

    fs::rename(&tmp, dest).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        OverlayError::Download(format!("Failed to move download into place: {e}"))
    })?;

    Ok(())
}
