//! Per-call cost oracle: dynamic layers rasterized into dense overlays.
//!
//! Rectangle cover tests and field falloff sums are linear in the layer
//! size, which is too slow inside the expansion loop. At the start of each
//! `calculate` the hybrid rectangles are rasterized into a blocked-overlay
//! bitset and the uncertainty fields accumulated into a dense per-cell
//! float grid, so the hot path pays O(1) per lookup.

use navgrid_core::{BitGrid, Grid, HybridObstacle, Point, UncertaintyField};

use crate::distance::step_len;

/// Rasterized view of the dynamic layers over one grid, valid for a single
/// search. Buffers are allocated once and reset on rebuild.
pub(crate) struct CostField {
    hybrid_blocked: BitGrid,
    uncertainty: Vec<f32>,
}

impl CostField {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            hybrid_blocked: BitGrid::new(len),
            uncertainty: vec![0.0; len],
        }
    }

    /// Re-rasterize both layers. Called once per search.
    pub(crate) fn rebuild(
        &mut self,
        grid: &Grid,
        hybrids: &[HybridObstacle],
        fields: &[UncertaintyField],
    ) {
        self.hybrid_blocked.clear_all();
        self.uncertainty.fill(0.0);

        let (w, h) = (grid.width(), grid.height());
        for rect in hybrids {
            let (xs, ys) = rect.cell_span(w, h);
            for y in ys {
                for x in xs.clone() {
                    let idx = y as usize * w as usize + x as usize;
                    self.hybrid_blocked.set(idx);
                }
            }
        }
        for field in fields {
            let (xs, ys) = field.cell_span(w, h);
            for y in ys {
                for x in xs.clone() {
                    let idx = y as usize * w as usize + x as usize;
                    self.uncertainty[idx] += field.value_at(Point::new(x, y));
                }
            }
        }
    }

    /// Whether the cell at `idx` is blocked by any layer.
    #[inline]
    pub(crate) fn blocked(&self, grid: &Grid, idx: usize) -> bool {
        grid.is_static_blocked_idx(idx) || self.hybrid_blocked.get(idx)
    }

    /// Accumulated uncertainty at the cell at `idx`.
    #[inline]
    pub(crate) fn uncertainty_at(&self, idx: usize) -> f32 {
        self.uncertainty[idx]
    }

    /// Mean uncertainty over the edge `(from_idx → to_idx)`.
    #[inline]
    pub(crate) fn edge_uncertainty(&self, from_idx: usize, to_idx: usize) -> f32 {
        0.5 * (self.uncertainty_at(from_idx) + self.uncertainty_at(to_idx))
    }

    /// Full edge cost: geometric step length plus weighted mean uncertainty.
    #[inline]
    pub(crate) fn step_cost(&self, from: Point, to: Point, edge_u: f32, avg_cost: f32) -> f32 {
        step_len(from, to) + avg_cost * edge_u
    }
}
