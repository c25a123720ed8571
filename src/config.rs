// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Overlay configuration and common types.
//!
//! This module defines the [`OverlayConfig`] struct, which controls the
//! confidence threshold, canvas dimensions, and drawing style used when
//! rendering and rasterizing the skeleton overlay.

use crate::render::DEFAULT_MIN_SCORE;

/// Color type for overlay drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// The overlay's marker and segment color (#0000AA).
    pub const OVERLAY_BLUE: Color = Color(0, 0, 170);
    /// White color.
    pub const WHITE: Color = Color(255, 255, 255);
    /// Black color.
    pub const BLACK: Color = Color(0, 0, 0);

    /// Create a new color from RGB values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Convert to the `image` crate's RGB pixel type.
    #[must_use]
    pub const fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.0, self.1, self.2])
    }
}

/// Configuration for skeleton overlay rendering.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use pose_overlay::OverlayConfig;
///
/// let config = OverlayConfig::new()
///     .with_min_score(0.6)
///     .with_canvas(400, 600)
///     .with_segment_width(3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    /// Confidence threshold for keypoint visibility (0.0 to 1.0).
    /// Keypoints at or below this score are excluded from points and
    /// segments alike.
    pub min_score: f32,
    /// Canvas size as (width, height). The overlay is drawn inside this
    /// fixed canvas, co-located with the displayed image.
    pub canvas: (u32, u32),
    /// Keypoint marker radius in pixels.
    pub point_radius: i32,
    /// Keypoint marker outline width in pixels.
    pub point_outline_width: u32,
    /// Skeleton segment stroke width in pixels.
    pub segment_width: u32,
    /// Keypoint marker fill color.
    pub point_fill: Color,
    /// Keypoint marker outline color.
    pub point_outline: Color,
    /// Skeleton segment color.
    pub segment_color: Color,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            canvas: (400, 600),
            point_radius: 4,
            point_outline_width: 2,
            segment_width: 3,
            point_fill: Color::OVERLAY_BLUE,
            point_outline: Color::WHITE,
            segment_color: Color::OVERLAY_BLUE,
        }
    }
}

impl OverlayConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confidence threshold.
    ///
    /// Keypoints with a score at or below this threshold are excluded
    /// entirely from the rendered skeleton.
    #[must_use]
    pub const fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = min_score;
        self
    }

    /// Set the canvas size as (width, height).
    #[must_use]
    pub const fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas = (width, height);
        self
    }

    /// Set the keypoint marker radius.
    #[must_use]
    pub const fn with_point_radius(mut self, radius: i32) -> Self {
        self.point_radius = radius;
        self
    }

    /// Set the skeleton segment stroke width.
    #[must_use]
    pub const fn with_segment_width(mut self, width: u32) -> Self {
        self.segment_width = width;
        self
    }

    /// Set the marker fill, marker outline, and segment colors.
    #[must_use]
    pub const fn with_colors(mut self, fill: Color, outline: Color, segment: Color) -> Self {
        self.point_fill = fill;
        self.point_outline = outline;
        self.segment_color = segment;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = OverlayConfig::default();
        assert!((config.min_score - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.canvas, (400, 600));
        assert_eq!(config.point_radius, 4);
        assert_eq!(config.segment_width, 3);
        assert_eq!(config.point_fill, Color::OVERLAY_BLUE);
        assert_eq!(config.point_outline, Color::WHITE);
    }

    #[test]
    fn test_config_builder() {
        let config = OverlayConfig::new()
            .with_min_score(0.7)
            .with_canvas(800, 1200)
            .with_point_radius(6)
            .with_segment_width(5);

        assert!((config.min_score - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.canvas, (800, 1200));
        assert_eq!(config.point_radius, 6);
        assert_eq!(config.segment_width, 5);
    }

    #[test]
    fn test_color_to_rgb() {
        assert_eq!(Color::OVERLAY_BLUE.to_rgb(), image::Rgb([0, 0, 170]));
    }
}
