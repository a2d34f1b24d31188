//! Grid layouts.
//!
//! Both layouts walk axial coordinates and convert them to pixel centers, so
//! the same coordinate always lands on the same pixel for a given window and
//! layer count.

use std::f64::consts::FRAC_PI_6;

use super::hexagon::POINTY_TOP;
use super::{AxialCoord, Hexagon};

/// Directions walked around each spiral ring, in screen space (y down):
/// 120°, 180°, 240°, 300°, 0°, 60°.
const RING_DIRECTIONS: [AxialCoord; 6] = [
    AxialCoord::new(-1, 1),
    AxialCoord::new(-1, 0),
    AxialCoord::new(0, -1),
    AxialCoord::new(1, -1),
    AxialCoord::new(1, 0),
    AxialCoord::new(0, 1),
];

const EAST: AxialCoord = AxialCoord::new(1, 0);

/// Tiling strategy used to fill the window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Layout {
    /// Ring by ring around the window center
    #[default]
    Spiral,
    /// Row-major over a hexagon-shaped block of axial coordinates
    Rectangle,
}

impl Layout {
    pub fn all() -> Vec<Layout> {
        vec![Layout::Spiral, Layout::Rectangle]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Layout::Spiral => "Spiral",
            Layout::Rectangle => "Rectangle",
        }
    }

    /// The other layout (cycled from the keyboard)
    pub fn next(self) -> Self {
        match self {
            Layout::Spiral => Layout::Rectangle,
            Layout::Rectangle => Layout::Spiral,
        }
    }

    pub fn generate(self, width: u32, height: u32, layers: u32) -> Vec<Hexagon> {
        match self {
            Layout::Spiral => generate_spiral(width, height, layers),
            Layout::Rectangle => generate_rectangle(width, height, layers),
        }
    }
}

/// Largest layer count whose axial coordinates fit in `i32`
pub const MAX_COORD_LAYERS: u32 = i32::MAX as u32;

/// Number of hexagons a non-degenerate grid of `layers` holds, saturating
pub const fn hexagon_count(layers: u32) -> usize {
    let l = layers as usize;
    if l == 0 {
        0
    } else {
        3usize.saturating_mul(l).saturating_mul(l - 1).saturating_add(1)
    }
}

/// Center-to-center distance of edge-adjacent hexagons
pub fn center_spacing(radius: f64) -> f64 {
    2.0 * radius * FRAC_PI_6.cos()
}

/// Axial coordinates in spiral order: the origin, then each ring starting
/// one step east of the previous ring's start.
pub fn spiral_coords(layers: u32) -> Vec<AxialCoord> {
    let mut coords = Vec::new();
    if layers == 0 || layers > MAX_COORD_LAYERS {
        return coords;
    }

    let mut current = AxialCoord::ORIGIN;
    coords.push(current);

    for turn in 1..layers {
        current = current + EAST;
        for direction in RING_DIRECTIONS {
            for _ in 0..turn {
                current = current + direction;
                coords.push(current);
            }
        }
    }
    coords
}

/// Axial coordinates of the hexagon-shaped block spanning `2·layers − 1` rows,
/// in row-major order.
pub fn rectangle_coords(layers: u32) -> Vec<AxialCoord> {
    let mut coords = Vec::new();
    if layers == 0 || layers > MAX_COORD_LAYERS {
        return coords;
    }

    // row indices reach 2·layers − 2, past i32 for the largest layer counts
    let n = 2 * i64::from(layers) - 1;
    let half = n / 2;

    for row in 0..n {
        let d1 = (-row).max(-half);
        let d2 = half.min(n - row - 1);
        let r = (row - half) as i32;
        coords.extend((d1..=d2).map(|col| AxialCoord::new(col as i32, r)));
    }
    coords
}

/// Spiral tiling: `radius = floor(min(w, h) / layers / 4)`.
pub fn generate_spiral(width: u32, height: u32, layers: u32) -> Vec<Hexagon> {
    let layers = layers.max(1);
    let radius = width.min(height) / layers / 4;
    if radius == 0 {
        return Vec::new();
    }

    let radius = radius as f64;
    let step = center_spacing(radius);
    let origin = window_center(width, height);

    spiral_coords(layers)
        .into_iter()
        .map(|coord| {
            let (x, y) = coord.to_cartesian();
            let center = (origin.0 + x * step, origin.1 + y * step);
            Hexagon::regular(center, radius, POINTY_TOP).with_coord(coord)
        })
        .collect()
}

/// Rectangular tiling: the block is `2·layers − 1` hexagons wide, sized so
/// its widest row spans the shorter window side. Grid y grows upward.
pub fn generate_rectangle(width: u32, height: u32, layers: u32) -> Vec<Hexagon> {
    let layers = layers.max(1);
    let n = 2.0 * f64::from(layers) - 1.0;
    let radius = (width.min(height) as f64 / n / 3f64.sqrt()).floor();
    if radius <= 0.0 {
        return Vec::new();
    }

    let step = center_spacing(radius);
    let origin = window_center(width, height);

    rectangle_coords(layers)
        .into_iter()
        .map(|coord| {
            let (x, y) = coord.to_cartesian();
            let center = (origin.0 + x * step, origin.1 - y * step);
            Hexagon::regular(center, radius, POINTY_TOP).with_coord(coord)
        })
        .collect()
}

fn window_center(width: u32, height: u32) -> (f64, f64) {
    (width as f64 / 2.0, height as f64 / 2.0)
}
