// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Raster drawing surface for the skeleton overlay.
//!
//! Consumes the renderer's primitive sequence and draws it over the acquired
//! image: filled, outlined circles for keypoint markers and stroked line
//! segments for skeleton edges. Primitives falling outside the canvas are
//! clipped by the drawing ops rather than rejected.

use image::{DynamicImage, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut};

use crate::config::OverlayConfig;
use crate::estimator::Estimate;
use crate::render::{Primitive, render};
use crate::skeleton::CONNECTIONS;

/// Draw a primitive sequence onto an RGB canvas.
///
/// # Arguments
///
/// * `canvas` - The image to draw on.
/// * `primitives` - Any primitive sequence, typically from [`render`].
/// * `config` - Marker and stroke styling.
pub fn draw_primitives<I>(canvas: &mut RgbImage, primitives: I, config: &OverlayConfig)
where
    I: IntoIterator<Item = Primitive>,
{
    for primitive in primitives {
        match primitive {
            Primitive::Point { x, y } => draw_point(canvas, x, y, config),
            Primitive::Segment { x1, y1, x2, y2 } => {
                draw_segment(canvas, (x1, y1), (x2, y2), config);
            }
        }
    }
}

/// Draw one keypoint marker: a filled circle with an outline ring.
#[allow(clippy::cast_possible_truncation)]
fn draw_point(canvas: &mut RgbImage, x: f32, y: f32, config: &OverlayConfig) {
    let center = (x.round() as i32, y.round() as i32);
    draw_filled_circle_mut(canvas, center, config.point_radius, config.point_fill.to_rgb());

    // Outline thickness as concentric rings, outward from the fill edge.
    for t in 0..config.point_outline_width {
        #[allow(clippy::cast_possible_wrap)]
        let radius = config.point_radius + t as i32;
        draw_hollow_circle_mut(canvas, center, radius, config.point_outline.to_rgb());
    }
}

/// Draw one skeleton segment with the configured stroke width.
///
/// Width is built from parallel one-pixel segments offset along the minor
/// axis, the same way box edges get their thickness from stacked rectangles.
fn draw_segment(canvas: &mut RgbImage, start: (f32, f32), end: (f32, f32), config: &OverlayConfig) {
    let color = config.segment_color.to_rgb();
    let width = config.segment_width.max(1);

    let dx = (end.0 - start.0).abs();
    let dy = (end.1 - start.1).abs();

    #[allow(clippy::cast_possible_wrap)]
    let half = (width as i32) / 2;
    for t in -half..=(width as i32 - 1 - half) {
        #[allow(clippy::cast_precision_loss)]
        let offset = t as f32;
        // Offset perpendicular to the dominant direction so strokes stay
        // contiguous at any slope.
        let (s, e) = if dx >= dy {
            ((start.0, start.1 + offset), (end.0, end.1 + offset))
        } else {
            ((start.0 + offset, start.1), (end.0 + offset, end.1))
        };
        draw_line_segment_mut(canvas, s, e, color);
    }
}

/// Overlay the first detected pose's skeleton on a copy of the image.
///
/// No detection, or nothing above the confidence threshold, returns the
/// image unchanged, the fail-soft "no overlay" path.
///
/// # Arguments
///
/// * `image` - The canvas-sized source image.
/// * `estimate` - The estimation snapshot to visualize.
/// * `config` - Threshold and styling.
///
/// # Returns
///
/// * A new image with the skeleton drawn over it.
#[must_use]
pub fn overlay_image(
    image: &DynamicImage,
    estimate: &Estimate,
    config: &OverlayConfig,
) -> DynamicImage {
    let mut canvas = image.to_rgb8();
    let primitives = render(estimate.first_pose(), &CONNECTIONS, config.min_score);
    draw_primitives(&mut canvas, primitives, config);
    DynamicImage::ImageRgb8(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Color;
    use crate::keypoint::{Keypoint, KeypointName, Pose};

    fn blank(width: u32, height: u32) -> RgbImage {
        RgbImage::new(width, height)
    }

    fn estimate_with(pose: Option<Pose>) -> Estimate {
        Estimate {
            path: "test.jpg".to_string(),
            canvas: (100, 100),
            poses: pose.into_iter().collect(),
            elapsed_ms: 0.0,
        }
    }

    #[test]
    fn test_point_marks_fill_color() {
        let mut canvas = blank(100, 100);
        let config = OverlayConfig::default();
        draw_primitives(
            &mut canvas,
            [Primitive::Point { x: 50.0, y: 50.0 }],
            &config,
        );
        assert_eq!(*canvas.get_pixel(50, 50), Color::OVERLAY_BLUE.to_rgb());
    }

    #[test]
    fn test_segment_marks_midpoint() {
        let mut canvas = blank(100, 100);
        let config = OverlayConfig::default();
        draw_primitives(
            &mut canvas,
            [Primitive::Segment {
                x1: 10.0,
                y1: 50.0,
                x2: 90.0,
                y2: 50.0,
            }],
            &config,
        );
        assert_eq!(*canvas.get_pixel(50, 50), Color::OVERLAY_BLUE.to_rgb());
    }

    #[test]
    fn test_out_of_canvas_primitives_are_clipped() {
        let mut canvas = blank(50, 50);
        let config = OverlayConfig::default();
        // Must not panic, and pixels inside stay untouched black for a
        // primitive fully outside the canvas.
        draw_primitives(
            &mut canvas,
            [
                Primitive::Point { x: -200.0, y: -200.0 },
                Primitive::Segment {
                    x1: 500.0,
                    y1: 500.0,
                    x2: 600.0,
                    y2: 600.0,
                },
            ],
            &config,
        );
        assert_eq!(*canvas.get_pixel(25, 25), image::Rgb([0, 0, 0]));
    }

    #[test]
    fn test_overlay_without_pose_is_identity() {
        let image = DynamicImage::ImageRgb8(blank(100, 100));
        let config = OverlayConfig::default();
        let out = overlay_image(&image, &estimate_with(None), &config);
        assert_eq!(out.to_rgb8(), image.to_rgb8());
    }

    #[test]
    fn test_overlay_draws_visible_keypoints() {
        let image = DynamicImage::ImageRgb8(blank(100, 100));
        let config = OverlayConfig::default();
        let pose = Pose::new(vec![Keypoint::new(KeypointName::Nose, 30.0, 40.0, 0.9)]);
        let out = overlay_image(&image, &estimate_with(Some(pose)), &config).to_rgb8();
        assert_eq!(*out.get_pixel(30, 40), Color::OVERLAY_BLUE.to_rgb());
    }

    #[test]
    fn test_overlay_skips_low_confidence() {
        let image = DynamicImage::ImageRgb8(blank(100, 100));
        let config = OverlayConfig::default();
        let pose = Pose::new(vec![Keypoint::new(KeypointName::Nose, 30.0, 40.0, 0.2)]);
        let out = overlay_image(&image, &estimate_with(Some(pose)), &config).to_rgb8();
        assert_eq!(*out.get_pixel(30, 40), image::Rgb([0, 0, 0]));
    }
}
