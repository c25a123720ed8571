// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]

//! # Pose Overlay Library
//!
//! Single-pose skeleton overlay for photos, written in Rust: pick an image,
//! run the on-device MoveNet SinglePose Lightning model against it through
//! ONNX Runtime, and draw the detected skeleton (confident keypoints and
//! the segments connecting anatomically adjacent joints) over a fixed
//! 400×600 canvas.
//!
//! ## Features
//!
//! - **Stateless core** - The skeleton renderer is a pure transform from an
//!   immutable pose snapshot to a lazy primitive sequence
//! - **Fail-soft overlay** - A missing or low-confidence detection renders
//!   no overlay instead of failing the pass
//! - **ONNX Runtime** - MoveNet inference with a single fixed-size input
//! - **CLI** - Acquire, estimate, overlay, save, and display in one command
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use pose_overlay::{CONNECTIONS, OverlayConfig, PoseModel, overlay_image, render};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = OverlayConfig::default();
//!     let mut model = PoseModel::load("movenet_singlepose_lightning_4.onnx")?;
//!
//!     let acquired = pose_overlay::acquire("photo.jpg")?;
//!     let estimate = model.estimate(&acquired.image, "photo.jpg".to_string())?;
//!
//!     // Inspect the primitives...
//!     let primitives: Vec<_> =
//!         render(estimate.first_pose(), &CONNECTIONS, config.min_score).collect();
//!     println!("{} primitives in {:.0} ms", primitives.len(), estimate.elapsed_ms);
//!
//!     // ...or draw them straight onto the canvas.
//!     let overlaid = overlay_image(&acquired.image, &estimate, &config);
//!     overlaid.save("overlaid.jpg")?;
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Overlay a photo (auto-downloads the default model)
//! pose-overlay overlay --source photo.jpg
//!
//! # Custom threshold, save and display the result
//! pose-overlay overlay -s photo.jpg --conf 0.3 --save --show
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`keypoint`] | Keypoint vocabulary and pose data model |
//! | [`skeleton`] | Directed adjacency table for skeleton drawing |
//! | [`render`](mod@render) | The skeleton renderer ([`render()`](fn@render::render), [`Primitive`]) |
//! | [`config`] | [`OverlayConfig`] threshold, canvas, and styling |
//! | [`estimator`] | [`PoseModel`] MoveNet session and [`Estimate`] snapshots |
//! | [`acquire`](mod@acquire) | Image acquisition at the fixed canvas size |
//! | [`annotate`] | Raster drawing surface consuming primitives |
//! | [`download`] | Default model fetching |
//! | [`error`] | Error types ([`OverlayError`], [`Result`]) |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `visualize` | Window display of the overlaid canvas (default) |

// Modules
pub mod acquire;
pub mod annotate;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod estimator;
pub mod keypoint;
pub mod render;
pub mod skeleton;
#[cfg(feature = "visualize")]
pub mod viewer;

// Re-export main types for convenience
pub use acquire::{AcquiredImage, CANVAS_HEIGHT, CANVAS_WIDTH, acquire};
pub use annotate::{draw_primitives, overlay_image};
pub use config::{Color, OverlayConfig};
pub use error::{OverlayError, Result};
pub use estimator::{Estimate, PoseModel};
pub use keypoint::{Keypoint, KeypointName, Pose};
pub use render::{DEFAULT_MIN_SCORE, Primitive, Primitives, render};
pub use skeleton::{AdjacencyTable, CONNECTIONS};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
