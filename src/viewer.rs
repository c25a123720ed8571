// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Window display for the overlaid canvas.

use image::DynamicImage;
use minifb::{Key, Window, WindowOptions};

use crate::error::{OverlayError, Result};

/// Display an image in a window until it is closed or Escape/Q is pressed.
///
/// The window is sized to the image; for the overlay flow that is the fixed
/// 400×600 canvas, so no resize handling is needed.
///
/// # Arguments
///
/// * `title` - Window title.
/// * `image` - The image to display.
///
/// # Errors
///
/// Returns an error if the window can't be created or updated.
pub fn show(title: &str, image: &DynamicImage) -> Result<()> {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    let mut window = Window::new(title, width, height, WindowOptions::default())
        .map_err(|e| OverlayError::Visualizer(format!("Failed to create window: {e}")))?;
    window.set_target_fps(60);

    // Pack pixels as 0x00RRGGBB for minifb.
    let buffer: Vec<u32> = rgb
        .pixels()
        .map(|p| (u32::from(p[0]) << 16) | (u32::from(p[1]) << 8) | u32::from(p[2]))
        .collect();

    while window.is_open() && !window.is_key_down(Key::Escape) && !window.is_key_down(Key::Q) {
        window
            .update_with_buffer(&buffer, width, height)
            .map_err(|e| OverlayError::Visualizer(format!("Failed to update window: {e}")))?;
    }

    Ok(())
}
