mod simulation;

pub use simulation::{GridSimulation, DEFAULT_LAYERS};
