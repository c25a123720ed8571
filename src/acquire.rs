// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Image acquisition.
//!
//! Decodes a picked image, resizes it to the fixed 400×600 overlay canvas,
//! and caches the resized copy so downstream stages (estimation, drawing,
//! display) all operate on one canvas-sized file addressed by URI.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::{DynamicImage, imageops::FilterType};

use crate::error::{OverlayError, Result};

/// Overlay canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 400;

/// Overlay canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 600;

/// A picked image, resized to the canvas and cached on disk.
#[derive(Debug, Clone)]
pub struct AcquiredImage {
    /// URI of the cached, canvas-sized copy.
    pub uri: PathBuf,
    /// The canvas-sized image.
    pub image: DynamicImage,
}

/// Acquire an image for overlay: decode, resize to the fixed canvas, cache.
///
/// # Arguments
///
/// * `path` - Path to the picked image file.
///
/// # Returns
///
/// * An [`AcquiredImage`] holding the 400×600 image and the cached file URI.
///
/// # Errors
///
/// Returns an error if the image can't be decoded or the cache copy can't be
/// written.
pub fn acquire<P: AsRef<Path>>(path: P) -> Result<AcquiredImage> {
    let path = path.as_ref();

    let decoded = load_image(path).map_err(|e| {
        OverlayError::Image(format!("Failed to load image {}: {e}", path.display()))
    })?;
    let image = decoded.resize_exact(CANVAS_WIDTH, CANVAS_HEIGHT, FilterType::Triangle);

    let cache_dir = cache_dir()?;
    fs::create_dir_all(&cache_dir)?;

    let stem = path
        .file_stem()
        .map_or_else(|| "image".to_string(), |s| s.to_string_lossy().to_string());
    let uri = cache_dir.join(format!("{stem}_{CANVAS_WIDTH}x{CANVAS_HEIGHT}.jpg"));

    image
        .to_rgb8()
        .save(&uri)
        .map_err(|e| OverlayError::Image(format!("Failed to cache resized image: {e}")))?;

    Ok(AcquiredImage { uri, image })
}

/// Resolve the cache directory for resized images.
fn cache_dir() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|d| d.join("pose-overlay"))
        .ok_or_else(|| OverlayError::Io(std::io::Error::other("No cache directory available")))
}

/// Load image helper to bypass zune-jpeg stride issues.
pub fn load_image(path: &Path) -> image::ImageResult<DynamicImage> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    if let Some("jpg") | Some("jpeg") = ext.as_deref() {
        if let Ok(file) = File::open(path) {
            let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
            if let Ok(pixels) = decoder.decode() {
                if let Some(metadata) = decoder.info() {
                    let width = u32::from(metadata.width);
                    let height = u32::from(metadata.height);
                    match metadata.pixel_format {
                        jpeg_decoder::PixelFormat::RGB24 => {
                            if let Some(buffer) =
                                image::ImageBuffer::from_raw(width, height, pixels)
                            {
                                return Ok(DynamicImage::ImageRgb8(buffer));
                            }
                        }
                        jpeg_decoder::PixelFormat::L8 => {
                            if let Some(buffer) =
                                image::ImageBuffer::from_raw(width, height, pixels)
                            {
                                return Ok(DynamicImage::ImageLuma8(buffer));
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }
    // Fallback
    image::open(path)
}
