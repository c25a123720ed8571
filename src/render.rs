// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Skeleton renderer.
//!
//! Turns one detected pose plus the adjacency table into a lazy sequence of
//! drawable primitives: one point per confidently detected keypoint, then
//! one segment per adjacency edge whose endpoints are both confidently
//! detected. A missing or empty pose yields an empty sequence rather than an
//! error, so a partial detection still renders whatever cleared the
//! threshold and a failed detection renders no overlay at all.
//!
//! The renderer is a pure synchronous transform: it reads its inputs, owns
//! its output, and keeps no state between passes.

use std::collections::HashMap;

use crate::keypoint::{Keypoint, KeypointName, Pose};
use crate::skeleton::AdjacencyTable;

/// Default confidence threshold for keypoint visibility.
pub const DEFAULT_MIN_SCORE: f32 = 0.5;

/// An abstract point or line segment instruction consumed by a drawing
/// surface. Produced fresh each render pass, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// A keypoint marker at (x, y) in canvas pixels.
    Point {
        /// X position.
        x: f32,
        /// Y position.
        y: f32,
    },
    /// A skeleton segment between two keypoint positions.
    Segment {
        /// Source X position.
        x1: f32,
        /// Source Y position.
        y1: f32,
        /// Target X position.
        x2: f32,
        /// Target Y position.
        y2: f32,
    },
}

impl Primitive {
    /// Whether this primitive is a point marker.
    #[must_use]
    pub const fn is_point(&self) -> bool {
        matches!(self, Self::Point { .. })
    }

    /// Whether this primitive is a segment.
    #[must_use]
    pub const fn is_segment(&self) -> bool {
        matches!(self, Self::Segment { .. })
    }
}

/// Render the visible skeleton of a pose as drawable primitives.
///
/// Keypoints with `score > min_score` form the visible set. The sequence
/// yields one [`Primitive::Point`] per visible keypoint in pose iteration
/// order, followed by one [`Primitive::Segment`] per adjacency edge whose
/// source and target are both visible, in table iteration order then
/// per-target order. The adjacency lookup is directed: `a → b` draws a
/// segment only if `b` is listed under `a`.
///
/// `None` (no detection) and an empty pose both yield an empty sequence:
/// best-effort visualization, not an error.
///
/// # Arguments
///
/// * `pose` - The detected pose, if any.
/// * `table` - The skeleton adjacency table.
/// * `min_score` - Confidence threshold; keypoints at or below it are
///   excluded entirely.
///
/// # Returns
///
/// * A lazy [`Primitives`] iterator. Deterministic for identical inputs;
///   construction is O(V), iteration O(V + E).
#[must_use]
pub fn render(pose: Option<&Pose>, table: &AdjacencyTable, min_score: f32) -> Primitives {
    let visible: Vec<Keypoint> = pose
        .map(|p| p.iter().filter(|k| k.is_visible(min_score)).copied().collect())
        .unwrap_or_default();

    // Name lookup over the visible set only. Probe-only: its iteration order
    // is never observed. A duplicated name keeps the later keypoint.
    let mut lookup: HashMap<KeypointName, (f32, f32)> =
        HashMap::with_capacity(visible.len());
    for k in &visible {
        lookup.insert(k.name, (k.x, k.y));
    }

    Primitives {
        visible,
        lookup,
        entries: table.entries(),
        point_idx: 0,
        entry_idx: 0,
        target_idx: 0,
    }
}

/// Lazy primitive sequence produced by [`render`].
///
/// Points are yielded first, then segments.
#[derive(Debug, Clone)]
pub struct Primitives {
    visible: Vec<Keypoint>,
    lookup: HashMap<KeypointName, (f32, f32)>,
    entries: &'static [(KeypointName, &'static [KeypointName])],
    point_idx: usize,
    entry_idx: usize,
    target_idx: usize,
}

impl Iterator for Primitives {
    type Item = Primitive;

    fn next(&mut self) -> Option<Primitive> {
        if self.point_idx < self.visible.len() {
            let k = self.visible[self.point_idx];
            self.point_idx += 1;
            return Some(Primitive::Point { x: k.x, y: k.y });
        }

        while self.entry_idx < self.entries.len() {
            let (source, targets) = self.entries[self.entry_idx];
            if let Some(&(x1, y1)) = self.lookup.get(&source) {
                while self.target_idx < targets.len() {
                    let target = targets[self.target_idx];
                    self.target_idx += 1;
                    if let Some(&(x2, y2)) = self.lookup.get(&target) {
                        return Some(Primitive::Segment { x1, y1, x2, y2 });
                    }
                }
            }
            self.entry_idx += 1;
            self.target_idx = 0;
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let points_left = self.visible.len() - self.point_idx;
        let edges_left: usize = self
            .entries
            .iter()
            .skip(self.entry_idx)
            .map(|(_, targets)| targets.len())
            .sum::<usize>()
            .saturating_sub(self.target_idx);
        (points_left, Some(points_left + edges_left))
    }
}
