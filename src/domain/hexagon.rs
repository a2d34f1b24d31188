use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_6};

use super::{AxialCoord, Cell};

/// Vertex angle of the first point: pointy-top orientation
pub const POINTY_TOP: f64 = FRAC_PI_2;

/// A vertex in integer pixel space
pub type Point = (i32, i32);

/// Hexagon is one cell of the board: six pixel vertices plus its state.
///
/// The vertices are kept in drawing order and handed to the renderer as-is.
/// Center and radii are derived from them on demand.
#[derive(Clone, Debug, PartialEq)]
pub struct Hexagon {
    points: [Point; 6],
    pub cell: Cell,
    coord: Option<AxialCoord>,
}

impl Hexagon {
    /// Wrap six vertices into a dead hexagon
    pub fn new(points: [Point; 6]) -> Self {
        Self {
            points,
            cell: Cell::Dead,
            coord: None,
        }
    }

    /// Regular hexagon around `center` with circumradius `radius`.
    ///
    /// Vertex `k` sits at angle `phase + k·60°`. Coordinates are rounded to
    /// the nearest pixel, which keeps opposite vertices symmetric around the
    /// center.
    pub fn regular(center: (f64, f64), radius: f64, phase: f64) -> Self {
        let points = std::array::from_fn(|k| {
            let angle = phase + k as f64 * FRAC_PI_3;
            (
                (center.0 + radius * angle.cos()).round() as i32,
                (center.1 + radius * angle.sin()).round() as i32,
            )
        });
        Self::new(points)
    }

    /// Attach the axial coordinate the layout placed this hexagon at
    pub fn with_coord(mut self, coord: AxialCoord) -> Self {
        self.coord = Some(coord);
        self
    }

    pub fn points(&self) -> &[Point; 6] {
        &self.points
    }

    pub fn coord(&self) -> Option<AxialCoord> {
        self.coord
    }

    pub fn is_alive(&self) -> bool {
        self.cell.is_alive()
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.cell = Cell::from_alive(alive);
    }

    pub fn toggle(&mut self) {
        self.cell = self.cell.toggle();
    }

    /// Mean of the six vertices
    pub fn center(&self) -> (f64, f64) {
        let (sx, sy) = self
            .points
            .iter()
            .fold((0i64, 0i64), |(sx, sy), &(x, y)| (sx + x as i64, sy + y as i64));
        (sx as f64 / 6.0, sy as f64 / 6.0)
    }

    /// Circumradius: distance from the center to the first vertex
    pub fn upper_radius(&self) -> f64 {
        let (x, y) = self.points[0];
        distance(self.center(), (x as f64, y as f64))
    }

    /// Inradius (apothem)
    pub fn lower_radius(&self) -> f64 {
        self.upper_radius() * FRAC_PI_6.cos()
    }

    /// Inscribed-circle hit test.
    ///
    /// Points inside the hexagon but outside its inscribed circle (near the
    /// corners) are reported as outside.
    pub fn contains(&self, point: (f64, f64)) -> bool {
        distance(self.center(), point) <= self.lower_radius()
    }
}

/// Euclidean distance between two points
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}
