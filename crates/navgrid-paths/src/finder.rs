//! Directional finder-rectangle pre-filter.
//!
//! Before a neighbor is considered, its offset from the current node is
//! projected into a local frame whose forward axis points at the goal. The
//! candidate survives only if the forward projection lies in
//! `[-EPS, forward]` and the lateral projection in `[-lateral, +lateral]`.
//! This biases expansion toward the goal and bounds beam width. Extents of
//! at least `max(width, height)` cells disable the filter entirely (see
//! [`FinderRect::constrains`]): a window that big was asked to not prune,
//! and the directional test would still reject backward steps that
//! detours around obstacles may need.

use navgrid_core::Point;

/// Tolerance on the forward projection, so purely lateral steps are not
/// rejected by floating-point noise.
const FORWARD_EPS: f32 = 1e-6;

/// Half-extents of the finder rectangle, in cells.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinderRect {
    /// Lateral half-extent, perpendicular to the goal direction.
    pub lateral: f32,
    /// Forward extent, along the goal direction.
    pub forward: f32,
}

impl FinderRect {
    /// Create a finder rectangle from its lateral and forward extents.
    pub const fn new(lateral: f32, forward: f32) -> Self {
        Self { lateral, forward }
    }

    /// Whether extents this size still constrain a `width`×`height` grid.
    ///
    /// Once both extents reach `max(width, height)` the window covers any
    /// step the grid can offer, and the search must skip the filter
    /// rather than keep its backward-rejecting forward window.
    pub fn constrains(&self, width: i32, height: i32) -> bool {
        let max_dim = width.max(height) as f32;
        self.lateral < max_dim || self.forward < max_dim
    }

    /// Whether the step `from → to` stays inside the rectangle oriented
    /// toward `goal`. Always true when `from == goal`.
    pub fn admits(&self, from: Point, to: Point, goal: Point) -> bool {
        let g = goal - from;
        let norm = ((g.x * g.x + g.y * g.y) as f32).sqrt();
        if norm == 0.0 {
            return true;
        }
        let fx = g.x as f32 / norm;
        let fy = g.y as f32 / norm;

        let o = to - from;
        let forward = o.x as f32 * fx + o.y as f32 * fy;
        // Lateral axis is the 90° rotation (-fy, fx) of the forward axis.
        let lateral = o.x as f32 * -fy + o.y as f32 * fx;

        forward >= -FORWARD_EPS && forward <= self.forward && lateral.abs() <= self.lateral
    }
}
