// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Keypoint and pose data model.
//!
//! MoveNet emits 17 named anatomical landmarks per detected subject. The
//! types here are immutable value types scoped to a single render pass:
//! produced once per inference call, consumed by the skeleton renderer,
//! never mutated.

use std::fmt;
use std::str::FromStr;

/// The 17 MoveNet/COCO keypoint names, in model output order.
///
/// The discriminant of each variant is its row index in the model's
/// `[1, 1, 17, 3]` output tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum KeypointName {
    /// Nose.
    Nose = 0,
    /// Left eye.
    LeftEye = 1,
    /// Right eye.
    RightEye = 2,
    /// Left ear.
    LeftEar = 3,
    /// Right ear.
    RightEar = 4,
    /// Left shoulder.
    LeftShoulder = 5,
    /// Right shoulder.
    RightShoulder = 6,
    /// Left elbow.
    LeftElbow = 7,
    /// Right elbow.
    RightElbow = 8,
    /// Left wrist.
    LeftWrist = 9,
    /// Right wrist.
    RightWrist = 10,
    /// Left hip.
    LeftHip = 11,
    /// Right hip.
    RightHip = 12,
    /// Left knee.
    LeftKnee = 13,
    /// Right knee.
    RightKnee = 14,
    /// Left ankle.
    LeftAnkle = 15,
    /// Right ankle.
    RightAnkle = 16,
}

impl KeypointName {
    /// Number of keypoints in the vocabulary.
    pub const COUNT: usize = 17;

    /// Returns the snake_case wire name (e.g. `"left_shoulder"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }

    /// Get the keypoint name for a model output row index.
    ///
    /// # Arguments
    ///
    /// * `index` - Row index in the model output (0..17).
    ///
    /// # Returns
    ///
    /// * `Some` name for indices 0..17, otherwise `None`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Nose),
            1 => Some(Self::LeftEye),
            2 => Some(Self::RightEye),
            3 => Some(Self::LeftEar),
            4 => Some(Self::RightEar),
            5 => Some(Self::LeftShoulder),
            6 => Some(Self::RightShoulder),
            7 => Some(Self::LeftElbow),
            8 => Some(Self::RightElbow),
            9 => Some(Self::LeftWrist),
            10 => Some(Self::RightWrist),
            11 => Some(Self::LeftHip),
            12 => Some(Self::RightHip),
            13 => Some(Self::LeftKnee),
            14 => Some(Self::RightKnee),
            15 => Some(Self::LeftAnkle),
            16 => Some(Self::RightAnkle),
            _ => None,
        }
    }

    /// Row index of this keypoint in the model output.
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for KeypointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KeypointName {
    type Err = KeypointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nose" => Ok(Self::Nose),
            "left_eye" => Ok(Self::LeftEye),
            "right_eye" => Ok(Self::RightEye),
            "left_ear" => Ok(Self::LeftEar),
            "right_ear" => Ok(Self::RightEar),
            "left_shoulder" => Ok(Self::LeftShoulder),
            "right_shoulder" => Ok(Self::RightShoulder),
            "left_elbow" => Ok(Self::LeftElbow),
            "right_elbow" => Ok(Self::RightElbow),
            "left_wrist" => Ok(Self::LeftWrist),
            "right_wrist" => Ok(Self::RightWrist),
            "left_hip" => Ok(Self::LeftHip),
            "right_hip" => Ok(Self::RightHip),
            "left_knee" => Ok(Self::LeftKnee),
            "right_knee" => Ok(Self::RightKnee),
            "left_ankle" => Ok(Self::LeftAnkle),
            "right_ankle" => Ok(Self::RightAnkle),
            _ => Err(KeypointParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown keypoint name.
#[derive(Debug, Clone)]
pub struct KeypointParseError(String);

impl fmt::Display for KeypointParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown keypoint name '{}'", self.0)
    }
}

impl std::error::Error for KeypointParseError {}

/// A single detected keypoint: a named anatomical landmark with 2D position
/// and detection confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    /// Anatomical name.
    pub name: KeypointName,
    /// X position in canvas pixels.
    pub x: f32,
    /// Y position in canvas pixels.
    pub y: f32,
    /// Detection confidence in [0, 1].
    pub score: f32,
}

impl Keypoint {
    /// Create a new keypoint.
    #[must_use]
    pub const fn new(name: KeypointName, x: f32, y: f32, score: f32) -> Self {
        Self { name, x, y, score }
    }

    /// Whether the keypoint strictly clears the confidence threshold.
    ///
    /// Keypoints at or below the threshold are excluded from both point and
    /// segment generation.
    #[must_use]
    pub fn is_visible(&self, min_score: f32) -> bool {
        self.score > min_score
    }
}

/// The full set of keypoints attributed to one detected subject.
///
/// Iteration order is the model emission order and is part of the renderer
/// contract: point primitives are emitted in this order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pose {
    keypoints: Vec<Keypoint>,
}

impl Pose {
    /// Create a pose from an ordered keypoint sequence.
    #[must_use]
    pub const fn new(keypoints: Vec<Keypoint>) -> Self {
        Self { keypoints }
    }

    /// Number of keypoints in the pose.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    /// Check if the pose has no keypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }

    /// Iterate the keypoints in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Keypoint> {
        self.keypoints.iter()
    }

    /// Look up a keypoint by name, irrespective of confidence.
    ///
    /// # Returns
    ///
    /// * The first keypoint with that name, or `None`.
    #[must_use]
    pub fn get(&self, name: KeypointName) -> Option<&Keypoint> {
        self.keypoints.iter().find(|k| k.name == name)
    }

    /// Count the keypoints strictly above the confidence threshold.
    #[must_use]
    pub fn visible_count(&self, min_score: f32) -> usize {
        self.keypoints.iter().filter(|k| k.is_visible(min_score)).count()
    }
}

impl<'a> IntoIterator for &'a Pose {
    type Item = &'a Keypoint;
    type IntoIter = std::slice::Iter<'a, Keypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_index_round_trip() {
        for i in 0..KeypointName::COUNT {
            let name = KeypointName::from_index(i).unwrap();
            assert_eq!(name.index(), i);
        }
        assert_eq!(KeypointName::from_index(17), None);
    }

    #[test]
    fn test_name_str_round_trip() {
        assert_eq!(
            "left_shoulder".parse::<KeypointName>().unwrap(),
            KeypointName::LeftShoulder
        );
        assert_eq!(KeypointName::RightAnkle.to_string(), "right_ankle");
        assert!("left_pinky".parse::<KeypointName>().is_err());
    }

    #[test]
    fn test_visibility_is_strict() {
        let kp = Keypoint::new(KeypointName::Nose, 1.0, 2.0, 0.5);
        // A score exactly at the threshold does not count as visible.
        assert!(!kp.is_visible(0.5));
        assert!(kp.is_visible(0.49));
    }

    #[test]
    fn test_pose_lookup() {
        let pose = Pose::new(vec![
            Keypoint::new(KeypointName::Nose, 10.0, 20.0, 0.9),
            Keypoint::new(KeypointName::LeftEye, 12.0, 18.0, 0.2),
        ]);
        assert_eq!(pose.len(), 2);
        assert_eq!(pose.get(KeypointName::LeftEye).unwrap().score, 0.2);
        assert!(pose.get(KeypointName::LeftHip).is_none());
        assert_eq!(pose.visible_count(0.5), 1);
    }

    #[test]
    fn test_empty_pose() {
        let pose = Pose::default();
        assert!(pose.is_empty());
        assert_eq!(pose.visible_count(0.0), 0);
    }
}
