//! Neighbor detection and the per-step update.
//!
//! Adjacency is resolved once per grid into a [`NeighborTable`]; a step then
//! only reads the table, so it costs O(n·6) regardless of how the table was
//! built.

use std::collections::HashMap;

use rayon::prelude::*;

use super::hexagon::distance;
use super::{AxialCoord, GrowthRule, Hexagon, Rule};

/// How neighbors are detected when a grid is (re)built
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Neighborhood {
    /// Center distance within the summed circumradii. Tolerant to pixel
    /// rounding, O(n²) to build (rows resolved on rayon's pool).
    #[default]
    Radius,
    /// The six canonical axial offsets, looked up by coordinate. Exact,
    /// O(n) to build.
    Axial,
}

impl Neighborhood {
    pub fn all() -> Vec<Neighborhood> {
        vec![Neighborhood::Radius, Neighborhood::Axial]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Neighborhood::Radius => "Radius",
            Neighborhood::Axial => "Axial",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Neighborhood::Radius => Neighborhood::Axial,
            Neighborhood::Axial => Neighborhood::Radius,
        }
    }
}

/// Two hexagons are neighbors when their centers are no further apart than
/// the sum of their circumradii.
pub fn are_neighbors(h1: &Hexagon, h2: &Hexagon) -> bool {
    distance(h1.center(), h2.center()) <= h1.upper_radius() + h2.upper_radius()
}

/// Neighbor indices for every hexagon of a grid, in grid order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NeighborTable {
    neighbors: Vec<Vec<usize>>,
}

impl NeighborTable {
    /// Resolve adjacency for `hexagons`.
    ///
    /// `Axial` needs every hexagon to carry a coordinate; hand-built
    /// hexagons without one fall back to `Radius`.
    pub fn build(hexagons: &[Hexagon], neighborhood: Neighborhood) -> Self {
        match neighborhood {
            Neighborhood::Axial if hexagons.iter().all(|h| h.coord().is_some()) => {
                Self::by_axial(hexagons)
            }
            _ => Self::by_radius(hexagons),
        }
    }

    fn by_radius(hexagons: &[Hexagon]) -> Self {
        // center and radius are derived; compute each once
        let shapes: Vec<((f64, f64), f64)> = hexagons
            .iter()
            .map(|h| (h.center(), h.upper_radius()))
            .collect();

        let neighbors = shapes
            .par_iter()
            .enumerate()
            .map(|(i, &(c1, r1))| {
                shapes
                    .iter()
                    .enumerate()
                    .filter(|&(j, &(c2, r2))| i != j && distance(c1, c2) <= r1 + r2)
                    .map(|(j, _)| j)
                    .collect()
            })
            .collect();

        Self { neighbors }
    }

    fn by_axial(hexagons: &[Hexagon]) -> Self {
        let index: HashMap<AxialCoord, usize> = hexagons
            .iter()
            .enumerate()
            .filter_map(|(i, h)| h.coord().map(|c| (c, i)))
            .collect();

        let neighbors = hexagons
            .iter()
            .map(|h| {
                h.coord()
                    .into_iter()
                    .flat_map(AxialCoord::neighbors)
                    .filter_map(|c| index.get(&c).copied())
                    .collect()
            })
            .collect();

        Self { neighbors }
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn neighbors_of(&self, index: usize) -> &[usize] {
        self.neighbors
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Alive neighbors of hexagon `index`, saturating at `u8::MAX`
    pub fn alive_neighbors(&self, hexagons: &[Hexagon], index: usize) -> u8 {
        let count = self
            .neighbors_of(index)
            .iter()
            .filter(|&&j| hexagons[j].is_alive())
            .count();
        count.min(u8::MAX as usize) as u8
    }
}

/// Apply `rule` once to every hexagon, in place and in grid order.
///
/// A hexagon updated earlier in the pass is already in its new state when
/// later hexagons count their neighbors, so a birth can cascade within one
/// step. Returns the number of hexagons whose state changed.
pub fn step(hexagons: &mut [Hexagon], table: &NeighborTable, rule: &dyn Rule) -> usize {
    debug_assert_eq!(hexagons.len(), table.len());

    let mut changed = 0;
    for i in 0..hexagons.len() {
        let neighbors = table.alive_neighbors(hexagons, i);
        let next = rule.evolve(hexagons[i].cell, neighbors);
        if hexagons[i].cell != next {
            hexagons[i].cell = next;
            changed += 1;
        }
    }
    changed
}

/// One growth step over hand-assembled hexagons, resolving adjacency by radius
pub fn step_once(hexagons: &mut [Hexagon]) -> usize {
    let table = NeighborTable::build(hexagons, Neighborhood::Radius);
    step(hexagons, &table, &GrowthRule)
}
