// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Skeleton adjacency table.
//!
//! Defines which keypoint pairs are visually connected when drawing the
//! skeleton. The table is a DIRECTED edge list: an entry `(a, [b, c])` draws
//! segments a→b and a→c, and nothing is implied in the reverse direction.
//! The table is intentionally not symmetrized: the face keypoints (nose,
//! eyes, ears) appear in no entry, and the knees are reachable only as
//! targets. Symmetrizing would change the number of segments emitted.

use crate::keypoint::KeypointName;

/// Static mapping from a keypoint name to the keypoint names it connects to.
///
/// Entry order and per-entry target order are fixed at compile time and
/// determine segment emission order, so both are part of the renderer
/// contract.
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyTable {
    entries: &'static [(KeypointName, &'static [KeypointName])],
}

impl AdjacencyTable {
    /// Create a table over a static edge list.
    #[must_use]
    pub const fn new(entries: &'static [(KeypointName, &'static [KeypointName])]) -> Self {
        Self { entries }
    }

    /// The table entries in iteration order.
    #[must_use]
    pub const fn entries(&self) -> &'static [(KeypointName, &'static [KeypointName])] {
        self.entries
    }

    /// Number of source entries in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Targets connected from a source keypoint.
    ///
    /// # Returns
    ///
    /// * The target list for `source`, or an empty slice if `source` has no
    ///   entry (the lookup is directed; targets are not sources).
    #[must_use]
    pub fn targets(&self, source: KeypointName) -> &'static [KeypointName] {
        self.entries
            .iter()
            .find(|(name, _)| *name == source)
            .map_or(&[], |(_, targets)| targets)
    }

    /// Whether the directed edge `source → target` exists.
    #[must_use]
    pub fn has_edge(&self, source: KeypointName, target: KeypointName) -> bool {
        self.targets(source).contains(&target)
    }

    /// Total number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|(_, targets)| targets.len()).sum()
    }
}

/// The fixed skeleton connection table.
///
/// Torso and limbs only; face keypoints get markers but no segments. Entry
/// order determines segment emission order.
pub const CONNECTIONS: AdjacencyTable = AdjacencyTable::new(&[
    (
        KeypointName::LeftShoulder,
        &[
            KeypointName::RightShoulder,
            KeypointName::LeftHip,
            KeypointName::LeftElbow,
        ],
    ),
    (KeypointName::LeftElbow, &[KeypointName::LeftWrist]),
    (
        KeypointName::RightShoulder,
        &[KeypointName::RightElbow, KeypointName::RightHip],
    ),
    (KeypointName::RightElbow, &[KeypointName::RightWrist]),
    (
        KeypointName::LeftHip,
        &[KeypointName::LeftKnee, KeypointName::RightHip],
    ),
    (KeypointName::RightHip, &[KeypointName::RightKnee]),
    (KeypointName::LeftKnee, &[KeypointName::LeftAnkle]),
    (KeypointName::RightKnee, &[KeypointName::RightAnkle]),
]);
