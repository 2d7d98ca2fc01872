//! Immutable grid geometry and the static-obstacle bitmap.

use std::fmt;

use crate::bits::BitGrid;
use crate::geom::Point;

/// Errors that can occur while constructing a [`Grid`].
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Width or height is zero or negative.
    NonPositiveSize { width: i32, height: i32 },
    /// `width * height` does not fit in a signed 32-bit integer.
    SizeOverflow { width: i32, height: i32 },
    /// The flat static-obstacle array has an odd number of entries.
    OddObstacleArray { len: usize },
    /// A static obstacle lies outside the grid.
    ObstacleOutOfBounds { pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSize { width, height } => {
                write!(f, "grid size must be positive, got {width}x{height}")
            }
            Self::SizeOverflow { width, height } => {
                write!(f, "grid size {width}x{height} overflows cell indexing")
            }
            Self::OddObstacleArray { len } => {
                write!(
                    f,
                    "static obstacle array must hold x,y pairs, got {len} entries"
                )
            }
            Self::ObstacleOutOfBounds { pos } => {
                write!(f, "static obstacle {pos} lies outside the grid")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Immutable grid geometry plus the static-obstacle bitmap.
///
/// Coordinates are cells: `0 ≤ x < width`, `0 ≤ y < height`, addressed by
/// the linear index `y * width + x`. Geometry never changes after
/// construction; the mutable hybrid/uncertainty layers live with the
/// pathfinder, not here.
#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    center: Point,
    square_size_m: f32,
    static_blocked: BitGrid,
}

impl Grid {
    /// Build a grid from its dimensions and a flat array of `x,y`
    /// static-obstacle pairs. Duplicate obstacles are idempotent.
    pub fn new(
        width: i32,
        height: i32,
        center: Point,
        square_size_m: f32,
        static_obstacles: &[i32],
    ) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::NonPositiveSize { width, height });
        }
        if (width as i64) * (height as i64) > i32::MAX as i64 {
            return Err(GridError::SizeOverflow { width, height });
        }
        if static_obstacles.len() % 2 != 0 {
            return Err(GridError::OddObstacleArray {
                len: static_obstacles.len(),
            });
        }

        let mut grid = Self {
            width,
            height,
            center,
            square_size_m,
            static_blocked: BitGrid::new(width as usize * height as usize),
        };
        for pair in static_obstacles.chunks_exact(2) {
            let p = Point::new(pair[0], pair[1]);
            let idx = grid
                .idx(p)
                .ok_or(GridError::ObstacleOutOfBounds { pos: p })?;
            grid.static_blocked.set(idx);
        }
        Ok(grid)
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Nominal grid center cell (metadata for the embedding loop).
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Edge length of one cell, in meters.
    #[inline]
    pub fn square_size_m(&self) -> f32 {
        self.square_size_m
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the grid has zero cells. Construction forbids this; kept for
    /// `len`/`is_empty` pairing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Convert a point to its linear index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Convert a linear index back to a point.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Whether `p` is a static obstacle. Out-of-bounds points are not.
    #[inline]
    pub fn is_static_blocked(&self, p: Point) -> bool {
        match self.idx(p) {
            Some(i) => self.static_blocked.get(i),
            None => false,
        }
    }

    /// Whether the cell at linear index `idx` is a static obstacle.
    #[inline]
    pub fn is_static_blocked_idx(&self, idx: usize) -> bool {
        self.static_blocked.get(idx)
    }

    /// Number of statically blocked cells.
    pub fn static_obstacle_count(&self) -> usize {
        self.static_blocked.count_ones()
    }
}
