//! Axial hex coordinates.
//!
//! Pointy-top axial layout: `q` runs along the horizontal axis, `r` along
//! the axis rotated by 60°. The cartesian image of `(q, r)` in units of the
//! center-to-center spacing is `(q + r/2, r·√3/2)`.

use std::ops::Add;

/// Integer position of a hexagon in the tiling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct AxialCoord {
    pub q: i32,
    pub r: i32,
}

/// Offsets of the six edge-adjacent hexagons, counter-clockwise from east
/// in grid space (y up).
pub const NEIGHBOR_OFFSETS: [AxialCoord; 6] = [
    AxialCoord::new(1, 0),
    AxialCoord::new(1, -1),
    AxialCoord::new(0, -1),
    AxialCoord::new(-1, 0),
    AxialCoord::new(-1, 1),
    AxialCoord::new(0, 1),
];

impl AxialCoord {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The six edge-adjacent coordinates
    pub fn neighbors(self) -> impl Iterator<Item = AxialCoord> {
        NEIGHBOR_OFFSETS.into_iter().map(move |offset| self + offset)
    }

    /// Hex distance (number of steps) from the origin
    pub fn ring(self) -> i32 {
        (self.q.abs() + self.r.abs() + (self.q + self.r).abs()) / 2
    }

    /// Cartesian position in units of the center spacing, y growing with `r`
    pub fn to_cartesian(self) -> (f64, f64) {
        let (x, y) = (self.q as f64, self.r as f64);
        (x + y / 2.0, y * 3f64.sqrt() / 2.0)
    }
}

impl Add for AxialCoord {
    type Output = AxialCoord;

    fn add(self, other: AxialCoord) -> AxialCoord {
        AxialCoord::new(self.q + other.q, self.r + other.r)
    }
}
