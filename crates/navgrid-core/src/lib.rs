//! **navgrid-core** — grid model and dynamic layers for hybrid-grid pathfinding.
//!
//! This crate provides the data model consumed by the search engine in
//! `navgrid-paths`:
//!
//! - [`Point`] — 2D integer cell coordinate.
//! - [`BitGrid`] — dense bitset over cell indices.
//! - [`Grid`] — immutable geometry plus the static-obstacle bitmap.
//! - [`HybridObstacle`] — mutable axis-aligned blocking rectangle.
//! - [`UncertaintyField`] — circular scalar field adding traversal cost
//!   without blocking.
//!
//! Occupancy composes as a monotone OR of the static bitmap and the hybrid
//! rectangles; uncertainty is additive cost on top.

pub mod bits;
pub mod geom;
pub mod grid;
pub mod layers;

pub use bits::BitGrid;
pub use geom::Point;
pub use grid::{Grid, GridError};
pub use layers::{HybridObstacle, LayerError, UncertaintyField};
