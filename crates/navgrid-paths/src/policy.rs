use navgrid_core::Point;

/// Successor-enumeration policy: 8-connected or 4-connected movement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodePickStyle {
    /// All eight neighbors (cardinal + diagonal).
    #[default]
    All,
    /// The four cardinal neighbors only.
    Sides,
}

const ALL_OFFSETS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(1, 1),
];

const SIDE_OFFSETS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, 1),
];

impl NodePickStyle {
    /// The candidate successor offsets for this policy.
    #[inline]
    pub fn offsets(self) -> &'static [Point] {
        match self {
            Self::All => &ALL_OFFSETS,
            Self::Sides => &SIDE_OFFSETS,
        }
    }

    /// Whether `offset` is a legal single step under this policy.
    pub fn is_legal_step(self, offset: Point) -> bool {
        self.offsets().contains(&offset)
    }
}
