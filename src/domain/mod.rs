mod cell;
mod coord;
mod rules;
pub mod adjacency;
pub mod hexagon;
pub mod layout;

pub use cell::Cell;
pub use coord::{AxialCoord, NEIGHBOR_OFFSETS};
pub use rules::{Rule, GrowthRule, BIRTH_THRESHOLD, default_rule};
pub use hexagon::{Hexagon, Point};
pub use layout::{Layout, generate_spiral, generate_rectangle};
pub use adjacency::{Neighborhood, NeighborTable, are_neighbors};
