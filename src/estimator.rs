// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! MoveNet pose model loading and inference.
//!
//! This module wraps an ONNX Runtime session around the MoveNet SinglePose
//! Lightning model and exposes a single `estimate` operation: image in,
//! immutable [`Estimate`] snapshot out. The snapshot carries zero or more
//! poses plus the inference wall-clock time; callers pass it to the renderer
//! instead of sharing any mutable state with it.

use std::path::Path;
use std::time::Instant;

use image::{DynamicImage, GenericImageView, imageops::FilterType};
use ndarray::Array4;
use ort::session::Session;
use ort::value::TensorRef;

use crate::config::OverlayConfig;
use crate::error::{OverlayError, Result};
use crate::keypoint::{Keypoint, KeypointName, Pose};

/// MoveNet input frame side length in pixels.
pub const MODEL_INPUT_SIZE: usize = 192;

/// Values per keypoint row in the model output (y, x, score).
const OUTPUT_ROW: usize = 3;

/// MoveNet pose model for single-subject keypoint estimation.
///
/// # Example
///
/// ```no_run
/// use pose_overlay::PoseModel;
///
/// let mut model = PoseModel::load("movenet-singlepose-lightning.onnx").unwrap();
/// let image = image::open("photo.jpg").unwrap();
/// let estimate = model.estimate(&image, "photo.jpg".to_string()).unwrap();
/// println!("{} ms", estimate.elapsed_ms);
/// ```
pub struct PoseModel {
    /// ONNX Runtime session.
    session: Session,
    /// Input tensor name.
    input_name: String,
    /// Output tensor name.
    output_name: String,
    /// Overlay configuration (threshold, canvas).
    config: OverlayConfig,
}

impl PoseModel {
    /// Load the pose model from an ONNX file with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the model file doesn't exist or the session can't
    /// be built.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_config(path, OverlayConfig::default())
    }

    /// Load the pose model with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the ONNX model file.
    /// * `config` - Overlay configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the model file doesn't exist or the session can't
    /// be built.
    pub fn load_with_config<P: AsRef<Path>>(path: P, config: OverlayConfig) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(OverlayError::ModelLoad(format!(
                "Model file not found: {}",
                path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| {
                OverlayError::ModelLoad(format!("Failed to create session builder: {e}"))
            })?
            .with_optimization_level(ort::session::builder::GraphOptimizationLevel::Level3)
            .map_err(|e| {
                OverlayError::ModelLoad(format!("Failed to set optimization level: {e}"))
            })?
            .commit_from_file(path)
            .map_err(|e| OverlayError::ModelLoad(format!("Failed to load model: {e}")))?;

        let input_name = session
            .inputs()
            .first()
            .map(|i| i.name().to_string())
            .unwrap_or_else(|| "input".to_string());

        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .unwrap_or_else(|| "output_0".to_string());

        Ok(Self {
            session,
            input_name,
            output_name,
            config,
        })
    }

    /// Estimate the pose in an image.
    ///
    /// The image is resized to the model's 192×192 input frame; detected
    /// keypoint positions are mapped back into the image's own pixel space,
    /// so an image acquired at the 400×600 canvas size yields canvas
    /// coordinates directly.
    ///
    /// # Arguments
    ///
    /// * `image` - The image to estimate against.
    /// * `path` - Path/identifier recorded in the snapshot.
    ///
    /// # Returns
    ///
    /// An [`Estimate`] snapshot with zero or more poses and the inference
    /// time in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if inference fails or the model output has an
    /// unexpected shape.
    pub fn estimate(&mut self, image: &DynamicImage, path: String) -> Result<Estimate> {
        let (width, height) = image.dimensions();
        let input = input_tensor(image);

        let start = Instant::now();
        let (data, shape) = self.run_inference(&input)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        if data.len() < KeypointName::COUNT * OUTPUT_ROW {
            return Err(OverlayError::Inference(format!(
                "Unexpected output shape {shape:?}: expected at least {} values",
                KeypointName::COUNT * OUTPUT_ROW
            )));
        }

        #[allow(clippy::cast_precision_loss)]
        let pose = pose_from_output(&data, width as f32, height as f32);

        Ok(Estimate {
            path,
            canvas: (width, height),
            poses: vec![pose],
            elapsed_ms,
        })
    }

    /// Run the ONNX model inference.
    fn run_inference(&mut self, input: &Array4<f32>) -> Result<(Vec<f32>, Vec<usize>)> {
        let input_contiguous = input.as_standard_layout();
        let input_tensor = TensorRef::from_array_view(&input_contiguous).map_err(|e| {
            OverlayError::Inference(format!("Failed to create input tensor: {e}"))
        })?;

        let inputs = ort::inputs![&self.input_name => input_tensor];

        let outputs = self
            .session
            .run(inputs)
            .map_err(|e| OverlayError::Inference(format!("Inference failed: {e}")))?;

        let output = outputs.get(self.output_name.as_str()).ok_or_else(|| {
            OverlayError::Inference(format!("Output '{}' not found", self.output_name))
        })?;

        let (shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| OverlayError::Inference(format!("Failed to extract output: {e}")))?;

        #[allow(clippy::cast_sign_loss)]
        let shape_vec: Vec<usize> = shape.iter().map(|&d| d as usize).collect();

        Ok((data.to_vec(), shape_vec))
    }

    /// Get the overlay configuration.
    #[must_use]
    pub const fn config(&self) -> &OverlayConfig {
        &self.config
    }
}

impl std::fmt::Debug for PoseModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoseModel")
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .field("min_score", &self.config.min_score)
            .finish()
    }
}

/// Build the MoveNet input tensor from an image.
///
/// Resizes to 192×192 and lays the RGB pixels out as a `[1, 192, 192, 3]`
/// NHWC f32 tensor in the 0–255 range the model expects.
#[must_use]
pub fn input_tensor(image: &DynamicImage) -> Array4<f32> {
    #[allow(clippy::cast_possible_truncation)]
    let side = MODEL_INPUT_SIZE as u32;
    let resized = image.resize_exact(side, side, FilterType::Triangle).to_rgb8();

    let mut tensor = Array4::<f32>::zeros((1, MODEL_INPUT_SIZE, MODEL_INPUT_SIZE, 3));
    for (x, y, pixel) in resized.enumerate_pixels() {
        let (x, y) = (x as usize, y as usize);
        tensor[[0, y, x, 0]] = f32::from(pixel[0]);
        tensor[[0, y, x, 1]] = f32::from(pixel[1]);
        tensor[[0, y, x, 2]] = f32::from(pixel[2]);
    }

    tensor
}

/// Parse the flattened `[1, 1, 17, 3]` MoveNet output into a pose.
///
/// Each row is `(y, x, score)` with coordinates normalized to the input
/// frame; positions are scaled into `width`×`height` pixel space. Keypoints
/// arrive in model output order, which the pose preserves.
fn pose_from_output(data: &[f32], width: f32, height: f32) -> Pose {
    let keypoints = (0..KeypointName::COUNT)
        .filter_map(|i| {
            let row = &data[i * OUTPUT_ROW..(i + 1) * OUTPUT_ROW];
            KeypointName::from_index(i)
                .map(|name| Keypoint::new(name, row[1] * width, row[0] * height, row[2]))
        })
        .collect();
    Pose::new(keypoints)
}

/// Immutable result snapshot of one estimation pass.
///
/// Replaces any mutable "current poses / current timing" component state:
/// the UI layer owns its own view state and passes this snapshot into the
/// renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Path to the source image.
    pub path: String,
    /// Source image dimensions (width, height).
    pub canvas: (u32, u32),
    /// Detected poses, possibly empty. Only the first is overlaid.
    pub poses: Vec<Pose>,
    /// Model inference wall-clock time in milliseconds.
    pub elapsed_ms: f64,
}

impl Estimate {
    /// The highest-priority pose, if any was detected.
    #[must_use]
    pub fn first_pose(&self) -> Option<&Pose> {
        self.poses.first()
    }

    /// Number of detected poses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Check if nothing was detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Generate a verbose log string describing the estimate
    /// (e.g., "1 pose, 13/17 keypoints, ").
    #[must_use]
    pub fn verbose(&self, min_score: f32) -> String {
        match self.first_pose() {
            None => "(no pose), ".to_string(),
            Some(pose) => format!(
                "{} pose{}, {}/{} keypoints, ",
                self.poses.len(),
                if self.poses.len() > 1 { "s" } else { "" },
                pose.visible_count(min_score),
                pose.len()
            ),
        }
    }
}
