//! The A* search loop.
//!
//! Classic best-first search over the cell arena in
//! [`SearchBuffers`](crate::buffers::SearchBuffers). Improved g-scores
//! reinsert a second heap entry; stale pops are discarded against the
//! arena's generation and open flags. The heuristic never counts
//! uncertainty, so it stays admissible and consistent for both
//! connectivity policies.

use navgrid_core::Point;
use ordered_float::OrderedFloat;

use crate::buffers::NodeRef;
use crate::distance::{manhattan, octile};
use crate::finder::FinderRect;
use crate::pathfinder::Pathfinder;
use crate::policy::NodePickStyle;

/// Heuristic matching the step geometry of the active policy.
#[inline]
fn heuristic(style: NodePickStyle, a: Point, b: Point) -> f32 {
    match style {
        NodePickStyle::All => octile(a, b),
        NodePickStyle::Sides => manhattan(a, b) as f32,
    }
}

impl Pathfinder {
    /// Run one search between two validated, unblocked, distinct cells.
    ///
    /// Overlays must have been rebuilt by the caller. Returns the
    /// reconstructed path and the number of expanded nodes, or `None` if
    /// the goal is unreachable.
    pub(crate) fn search(&mut self, start: Point, end: Point) -> Option<(Vec<Point>, usize)> {
        let start_idx = self.grid.idx(start)?;
        let goal_idx = self.grid.idx(end)?;

        let cfg = self.config;
        let finder = FinderRect::new(cfg.finder_relative_w, cfg.finder_relative_h);
        // Grid-sized extents mean "no pruning": skip the window instead of
        // letting its forward interval reject backward detour steps.
        let finder_active = finder.constrains(self.grid.width(), self.grid.height());

        let cur_gen = self.buffers.begin_search();
        let start_h = heuristic(cfg.pick_style, start, end);
        {
            let node = &mut self.buffers.nodes[start_idx];
            node.g = 0.0;
            node.f = start_h;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        // The heap lives in the buffers so its backing storage survives
        // across calls; `begin_search` has emptied it.
        let mut open = std::mem::take(&mut self.buffers.open);
        open.push(NodeRef {
            idx: start_idx,
            f: OrderedFloat(start_h),
            h: OrderedFloat(start_h),
        });

        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Skip stale entries.
            if self.buffers.nodes[ci].generation != cur_gen || !self.buffers.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.buffers.nodes[ci].open = false;
            expanded += 1;
            let current_g = self.buffers.nodes[ci].g;
            let cp = self.grid.point(ci);

            for &offset in cfg.pick_style.offsets() {
                let np = cp + offset;
                let Some(ni) = self.grid.idx(np) else {
                    continue;
                };
                if self.cost.blocked(&self.grid, ni) {
                    continue;
                }

                // No corner-cutting: a diagonal step needs both flanking
                // orthogonal cells free. Both flanks are in bounds whenever
                // `cp` and `np` are.
                if offset.is_diagonal() {
                    let fx = Point::new(cp.x + offset.x, cp.y);
                    let fy = Point::new(cp.x, cp.y + offset.y);
                    let fx_blocked = self
                        .grid
                        .idx(fx)
                        .is_none_or(|i| self.cost.blocked(&self.grid, i));
                    let fy_blocked = self
                        .grid
                        .idx(fy)
                        .is_none_or(|i| self.cost.blocked(&self.grid, i));
                    if fx_blocked || fy_blocked {
                        continue;
                    }
                }

                if finder_active && !finder.admits(cp, np, end) {
                    continue;
                }

                let edge_u = self.cost.edge_uncertainty(ci, ni);
                if cfg.do_absolute_discard && edge_u > cfg.avg_distance_min_discard_threshold {
                    continue;
                }

                let tentative_g =
                    current_g + self.cost.step_cost(cp, np, edge_u, cfg.avg_distance_cost);

                let n = &mut self.buffers.nodes[ni];
                if n.generation == cur_gen {
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                let h = heuristic(cfg.pick_style, np, end);
                n.g = tentative_g;
                n.f = tentative_g + h;
                n.parent = ci;
                n.open = true;

                open.push(NodeRef {
                    idx: ni,
                    f: OrderedFloat(tentative_g + h),
                    h: OrderedFloat(h),
                });
            }
        };

        self.buffers.open = open;

        if !found {
            return None;
        }

        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.grid.point(ci));
            ci = self.buffers.nodes[ci].parent;
        }
        path.reverse();
        Some((path, expanded))
    }
}
