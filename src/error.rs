// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the overlay library.
//!
//! The skeleton renderer itself has no error conditions: absent or empty
//! pose data degenerates to an empty primitive sequence. Everything fallible
//! lives in the collaborator modules (model loading, image decoding, I/O).

use std::fmt;

/// Result type alias for overlay operations.
pub type Result<T> = std::result::Result<T, OverlayError>;

/// Main error type for the overlay library.
#[derive(Debug)]
pub enum OverlayError {
    /// Error loading the ONNX pose model.
    ModelLoad(String),
    /// Error during model inference.
    Inference(String),
    /// Error decoding, resizing, or encoding images.
    Image(String),
    /// Invalid configuration provided.
    Config(String),
    /// Error downloading the default model.
    Download(String),
    /// Wrapped `std::io::Error`.
    Io(std::io::Error),
    /// Window display error.
    Visualizer(String),
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelLoad(msg) => write!(f, "Model load error: {msg}"),
            Self::Inference(msg) => write!(f, "Inference error: {msg}"),
            Self::Image(msg) => write!(f, "Image error: {msg}"),
            Self::Config(msg) => write!(f, "Config error: {msg}"),
            Self::Download(msg) => write!(f, "Download error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::Visualizer(msg) => write!(f, "Visualizer error: {msg}"),
        }
    }
}

impl std::error::Error for OverlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OverlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for OverlayError {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OverlayError::ModelLoad("test".to_string());
        assert_eq!(err.to_string(), "Model load error: test");

        let err = OverlayError::Image("bad jpeg".to_string());
        assert_eq!(err.to_string(), "Image error: bad jpeg");
    }

    #[test]
    fn test_io_error_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = OverlayError::from(io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
