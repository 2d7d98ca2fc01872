//! Mutable dynamic layers: hybrid obstacles and uncertainty fields.
//!
//! Both layers are owned by the pathfinder and refreshed by the caller
//! between searches. Hybrid rectangles block every cell they cover;
//! uncertainty fields only raise traversal cost.

use std::fmt;
use std::ops::Range;

use crate::geom::Point;

/// Errors from dynamic-layer mutation. A failed mutation leaves the layer
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerError {
    /// The flat hybrid-obstacle array length is not a multiple of 4.
    MisalignedHybridArray { len: usize },
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MisalignedHybridArray { len } => {
                write!(
                    f,
                    "hybrid obstacle array must hold x,y,w,h quadruples, got {len} entries"
                )
            }
        }
    }
}

impl std::error::Error for LayerError {}

/// An axis-aligned blocking rectangle in cell units.
///
/// A cell `(cx, cy)` is covered iff `x ≤ cx < x+w` and `y ≤ cy < y+h`
/// (half-open), so zero-size rectangles cover nothing.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HybridObstacle {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl HybridObstacle {
    /// Create a rectangle from its min corner and extents.
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Parse a flat `x,y,w,h` quadruple array into rectangles.
    pub fn from_flat(data: &[f32]) -> Result<Vec<Self>, LayerError> {
        if data.len() % 4 != 0 {
            return Err(LayerError::MisalignedHybridArray { len: data.len() });
        }
        Ok(data
            .chunks_exact(4)
            .map(|q| Self::new(q[0], q[1], q[2], q[3]))
            .collect())
    }

    /// Whether the rectangle covers cell `p`.
    #[inline]
    pub fn covers(&self, p: Point) -> bool {
        let cx = p.x as f32;
        let cy = p.y as f32;
        self.x <= cx && cx < self.x + self.w && self.y <= cy && cy < self.y + self.h
    }

    /// The covered cell columns and rows, clamped to a `width`×`height` grid.
    /// Either range may be empty.
    pub fn cell_span(&self, width: i32, height: i32) -> (Range<i32>, Range<i32>) {
        // Smallest integer >= x is the first covered column; the half-open
        // right edge excludes x+w itself.
        let x0 = (self.x.ceil() as i32).max(0);
        let x1 = (((self.x + self.w).ceil() as i32) - 1).min(width - 1) + 1;
        let y0 = (self.y.ceil() as i32).max(0);
        let y1 = (((self.y + self.h).ceil() as i32) - 1).min(height - 1) + 1;
        (x0..x1.max(x0), y0..y1.max(y0))
    }
}

/// A circular scalar field adding traversal cost, not blocking.
///
/// Contribution at distance `d` from the center is
/// `intensity * (1 - d/radius)` inside the radius and 0 outside: peak
/// `intensity` at the center, linear falloff to 0 at the rim. A
/// zero-radius field contributes `intensity` exactly at its center point.
/// Overlapping fields are additive.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UncertaintyField {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    pub intensity: f32,
}

impl UncertaintyField {
    /// Create a field from its center, radius and peak intensity.
    pub const fn new(center_x: f32, center_y: f32, radius: f32, intensity: f32) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            intensity,
        }
    }

    /// The field's contribution at cell `p`.
    pub fn value_at(&self, p: Point) -> f32 {
        let dx = p.x as f32 - self.center_x;
        let dy = p.y as f32 - self.center_y;
        let d = (dx * dx + dy * dy).sqrt();
        if d > self.radius {
            0.0
        } else if self.radius == 0.0 {
            self.intensity
        } else {
            self.intensity * (1.0 - d / self.radius)
        }
    }

    /// Cell columns and rows possibly inside the field, clamped to a
    /// `width`×`height` grid.
    pub fn cell_span(&self, width: i32, height: i32) -> (Range<i32>, Range<i32>) {
        let x0 = ((self.center_x - self.radius).floor() as i32).max(0);
        let x1 = (((self.center_x + self.radius).ceil() as i32) + 1).min(width);
        let y0 = ((self.center_y - self.radius).floor() as i32).max(0);
        let y1 = (((self.center_y + self.radius).ceil() as i32) + 1).min(height);
        (x0..x1.max(x0), y0..y1.max(y0))
    }
}

/// Sum of all field contributions at cell `p`.
pub fn uncertainty_at(fields: &[UncertaintyField], p: Point) -> f32 {
    fields.iter().map(|f| f.value_at(p)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hybrid_cover_is_half_open() {
        let r = HybridObstacle::new(3.0, 0.0, 1.0, 10.0);
        assert!(r.covers(Point::new(3, 0)));
        assert!(r.covers(Point::new(3, 9)));
        assert!(!r.covers(Point::new(4, 0)));
        assert!(!r.covers(Point::new(2, 0)));
        assert!(!r.covers(Point::new(3, 10)));
    }

    #[test]
    fn zero_size_rect_covers_nothing() {
        let r = HybridObstacle::new(3.0, 3.0, 0.0, 0.0);
        assert!(!r.covers(Point::new(3, 3)));
        let (xs, ys) = r.cell_span(10, 10);
        assert!(xs.is_empty() || ys.is_empty());
    }

    #[test]
    fn fractional_rect_cover() {
        let r = HybridObstacle::new(2.5, 2.5, 1.0, 1.0);
        // Only (3, 3) satisfies 2.5 <= c < 3.5 on both axes.
        assert!(r.covers(Point::new(3, 3)));
        assert!(!r.covers(Point::new(2, 3)));
        assert!(!r.covers(Point::new(4, 3)));
    }

    #[test]
    fn cell_span_matches_cover() {
        let cases = [
            HybridObstacle::new(3.0, 0.0, 1.0, 10.0),
            HybridObstacle::new(2.5, 2.5, 1.0, 1.0),
            HybridObstacle::new(-2.0, -2.0, 5.0, 3.5),
            HybridObstacle::new(8.0, 8.0, 4.0, 4.0),
        ];
        for r in cases {
            let (xs, ys) = r.cell_span(10, 10);
            for y in 0..10 {
                for x in 0..10 {
                    let p = Point::new(x, y);
                    let in_span = xs.contains(&x) && ys.contains(&y);
                    assert_eq!(r.covers(p), in_span, "rect {r:?} cell {p}");
                }
            }
        }
    }

    #[test]
    fn field_linear_falloff() {
        let f = UncertaintyField::new(5.0, 5.0, 4.0, 8.0);
        assert_eq!(f.value_at(Point::new(5, 5)), 8.0);
        // Halfway to the rim.
        assert!((f.value_at(Point::new(7, 5)) - 4.0).abs() < 1e-6);
        // Exactly at the rim.
        assert!(f.value_at(Point::new(9, 5)).abs() < 1e-6);
        // Outside.
        assert_eq!(f.value_at(Point::new(0, 5)), 0.0);
    }

    #[test]
    fn zero_radius_field_hits_center_only() {
        let f = UncertaintyField::new(4.0, 4.0, 0.0, 3.0);
        assert_eq!(f.value_at(Point::new(4, 4)), 3.0);
        assert_eq!(f.value_at(Point::new(5, 4)), 0.0);
    }

    #[test]
    fn fields_are_additive() {
        let fields = [
            UncertaintyField::new(5.0, 5.0, 4.0, 8.0),
            UncertaintyField::new(5.0, 5.0, 2.0, 1.0),
        ];
        assert!((uncertainty_at(&fields, Point::new(5, 5)) - 9.0).abs() < 1e-6);
    }

    #[test]
    fn from_flat_rejects_misaligned() {
        let err = HybridObstacle::from_flat(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, LayerError::MisalignedHybridArray { len: 3 });
        let obs = HybridObstacle::from_flat(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(obs, vec![HybridObstacle::new(1.0, 2.0, 3.0, 4.0)]);
    }

    #[test]
    fn field_span_contains_support() {
        let f = UncertaintyField::new(5.0, 5.0, 3.0, 1.0);
        let (xs, ys) = f.cell_span(10, 10);
        for y in 0..10 {
            for x in 0..10 {
                let p = Point::new(x, y);
                if f.value_at(p) > 0.0 {
                    assert!(xs.contains(&x) && ys.contains(&y), "cell {p}");
                }
            }
        }
    }
}
