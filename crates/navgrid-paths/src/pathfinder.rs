//! The pathfinder facade: one long-lived planner per grid.

use navgrid_core::{Grid, HybridObstacle, LayerError, Point, UncertaintyField, layers};

use crate::buffers::SearchBuffers;
use crate::distance::step_len;
use crate::overlay::CostField;
use crate::policy::NodePickStyle;

/// Tunable search parameters, hot-swappable for the life of a
/// [`Pathfinder`]. Only the grid geometry is fixed at construction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathfinderConfig {
    /// 8- or 4-connected successor enumeration.
    pub pick_style: NodePickStyle,
    /// Lateral half-extent of the finder rectangle, in cells.
    pub finder_relative_w: f32,
    /// Forward extent of the finder rectangle, in cells.
    pub finder_relative_h: f32,
    /// Reject edges whose mean uncertainty exceeds the threshold, instead
    /// of merely penalizing them through the cost.
    pub do_absolute_discard: bool,
    /// Mean edge uncertainty beyond which discarding applies.
    pub avg_distance_min_discard_threshold: f32,
    /// Multiplier converting mean edge uncertainty into g-score cost.
    pub avg_distance_cost: f32,
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            pick_style: NodePickStyle::All,
            // Infinite extents disable the finder filter.
            finder_relative_w: f32::INFINITY,
            finder_relative_h: f32::INFINITY,
            do_absolute_discard: false,
            avg_distance_min_discard_threshold: 0.0,
            avg_distance_cost: 0.0,
        }
    }
}

/// A real-time planner over one hybrid occupancy grid.
///
/// Owns the grid, the mutable dynamic layers, and all per-search scratch
/// memory. Not safe for concurrent use of a single instance (`&mut self`
/// enforces this); independent instances may run on separate threads.
///
/// Layer mutation is deferred work between searches: it never touches the
/// static grid and is O(n) in the layer size. Destruction releases all
/// layer and scratch memory (no explicit close).
pub struct Pathfinder {
    pub(crate) grid: Grid,
    pub(crate) config: PathfinderConfig,
    hybrids: Vec<HybridObstacle>,
    fields: Vec<UncertaintyField>,
    pub(crate) buffers: SearchBuffers,
    pub(crate) cost: CostField,
}

impl Pathfinder {
    /// Create a planner for `grid` with the given tunables. All scratch
    /// buffers are sized here and reused across calls.
    pub fn new(grid: Grid, config: PathfinderConfig) -> Self {
        let len = grid.len();
        Self {
            grid,
            config,
            hybrids: Vec::new(),
            fields: Vec::new(),
            buffers: SearchBuffers::new(len),
            cost: CostField::new(len),
        }
    }

    /// The grid this planner is bound to.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current tunables.
    pub fn config(&self) -> PathfinderConfig {
        self.config
    }

    /// Swap the tunables without rebuilding the grid or scratch memory.
    pub fn set_config(&mut self, config: PathfinderConfig) {
        self.config = config;
    }

    /// The current hybrid-obstacle layer.
    pub fn hybrid_obstacles(&self) -> &[HybridObstacle] {
        &self.hybrids
    }

    /// The current uncertainty-field layer.
    pub fn uncertainty_fields(&self) -> &[UncertaintyField] {
        &self.fields
    }

    /// Append hybrid obstacles given as a flat `x,y,w,h` quadruple array.
    ///
    /// On a malformed array the layer is left unchanged.
    pub fn add_hybrid_objects(&mut self, data: &[f32]) -> Result<(), LayerError> {
        let parsed = HybridObstacle::from_flat(data)?;
        self.hybrids.extend(parsed);
        Ok(())
    }

    /// Append a single hybrid obstacle.
    pub fn add_hybrid_obstacle(&mut self, rect: HybridObstacle) {
        self.hybrids.push(rect);
    }

    /// Empty the hybrid-obstacle layer.
    pub fn clear_hybrid_objects(&mut self) {
        self.hybrids.clear();
    }

    /// Append an uncertainty field.
    pub fn add_uncertainty_field(&mut self, center: (f32, f32), radius: f32, intensity: f32) {
        self.fields
            .push(UncertaintyField::new(center.0, center.1, radius, intensity));
    }

    /// Empty the uncertainty-field layer.
    pub fn clear_uncertainty_fields(&mut self) {
        self.fields.clear();
    }

    /// Compute a shortest path from `start` to `end` under the current
    /// layers and tunables.
    ///
    /// Returns the cell sequence from `start` to `end` inclusive, or an
    /// empty vector when no path exists, when either endpoint is out of
    /// bounds, or when either endpoint is blocked. `start == end` on a
    /// free cell yields that single cell. Never allocates scratch beyond
    /// warm-up.
    pub fn calculate(&mut self, start: Point, end: Point) -> Vec<Point> {
        let (Some(start_idx), Some(goal_idx)) = (self.grid.idx(start), self.grid.idx(end)) else {
            return Vec::new();
        };

        self.cost.rebuild(&self.grid, &self.hybrids, &self.fields);

        if self.cost.blocked(&self.grid, start_idx) || self.cost.blocked(&self.grid, goal_idx) {
            return Vec::new();
        }
        if start_idx == goal_idx {
            return vec![start];
        }

        match self.search(start, end) {
            Some((path, expanded)) => {
                log::debug!(
                    "path {start} -> {end}: {} cells, {expanded} nodes expanded",
                    path.len()
                );
                path
            }
            None => {
                log::debug!("no path {start} -> {end}");
                Vec::new()
            }
        }
    }

    /// [`calculate`](Self::calculate) with the flat `x,y` pair output of
    /// the wire contract. Empty on failure.
    pub fn calculate_flat(&mut self, start: Point, end: Point) -> Vec<i32> {
        let path = self.calculate(start, end);
        let mut flat = Vec::with_capacity(path.len() * 2);
        for p in path {
            flat.push(p.x);
            flat.push(p.y);
        }
        flat
    }

    /// Total cost of a path under the current layers and tunables: the sum
    /// of per-edge step costs as the search would have accumulated them.
    pub fn total_cost(&self, path: &[Point]) -> f32 {
        path.windows(2)
            .map(|w| {
                let u = 0.5
                    * (layers::uncertainty_at(&self.fields, w[0])
                        + layers::uncertainty_at(&self.fields, w[1]));
                step_len(w[0], w[1]) + self.config.avg_distance_cost * u
            })
            .sum()
    }
}
