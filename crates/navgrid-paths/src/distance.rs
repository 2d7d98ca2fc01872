use navgrid_core::Point;

pub(crate) const SQRT_2: f32 = std::f32::consts::SQRT_2;

/// Manhattan (L1) distance between two points. Admissible for 4-connected
/// grids.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Octile distance: `max(dx, dy) + (√2 − 1) · min(dx, dy)`. Admissible for
/// 8-connected grids with diagonal step cost √2.
#[inline]
pub fn octile(a: Point, b: Point) -> f32 {
    let dx = (a.x - b.x).abs() as f32;
    let dy = (a.y - b.y).abs() as f32;
    dx.max(dy) + (SQRT_2 - 1.0) * dx.min(dy)
}

/// Geometric length of one step: 1 for orthogonal, √2 for diagonal.
#[inline]
pub(crate) fn step_len(from: Point, to: Point) -> f32 {
    if (to - from).is_diagonal() { SQRT_2 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, 4)), 7);
        assert_eq!(manhattan(Point::new(3, 4), Point::new(0, 0)), 7);
        assert_eq!(manhattan(Point::new(2, 2), Point::new(2, 2)), 0);
    }

    #[test]
    fn octile_distance() {
        // Pure diagonal.
        assert!((octile(Point::new(0, 0), Point::new(5, 5)) - 5.0 * SQRT_2).abs() < 1e-5);
        // Pure straight.
        assert_eq!(octile(Point::new(0, 0), Point::new(7, 0)), 7.0);
        // Mixed: 9 diagonal + 0... max(9,8)=9, min=8.
        let d = octile(Point::new(0, 0), Point::new(9, 8));
        assert!((d - (9.0 + (SQRT_2 - 1.0) * 8.0)).abs() < 1e-5);
    }

    #[test]
    fn step_lengths() {
        assert_eq!(step_len(Point::new(1, 1), Point::new(2, 1)), 1.0);
        assert_eq!(step_len(Point::new(1, 1), Point::new(1, 0)), 1.0);
        assert_eq!(step_len(Point::new(1, 1), Point::new(2, 2)), SQRT_2);
    }
}
