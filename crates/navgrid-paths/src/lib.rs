//! **navgrid-paths** — A* search over hybrid occupancy grids.
//!
//! The entry point is [`Pathfinder`], a long-lived planner bound to one
//! [`Grid`](navgrid_core::Grid). Each [`Pathfinder::calculate`] call runs a
//! single-threaded A* search whose cost function composes three layers:
//!
//! - static obstacles fixed at grid construction,
//! - hybrid rectangles refreshed by the caller between calls,
//! - additive uncertainty fields that penalize but never block.
//!
//! Search specifics:
//!
//! - 8- or 4-connectivity via [`NodePickStyle`], with a mandatory
//!   no-corner-cutting rule for diagonal steps,
//! - a directional [finder rectangle](FinderRect) pre-filter that bounds
//!   how laterally the search may spread around the goal direction,
//! - optional absolute discarding of edges whose mean uncertainty exceeds
//!   a threshold.
//!
//! All scratch state (node arena, overlays, neighbor buffers) is allocated
//! once at construction and reset per call, so repeated queries incur no
//! steady-state allocation.

mod astar;
mod buffers;
mod distance;
mod finder;
mod overlay;
mod pathfinder;
mod policy;

pub use distance::{manhattan, octile};
pub use finder::FinderRect;
pub use pathfinder::{Pathfinder, PathfinderConfig};
pub use policy::NodePickStyle;
