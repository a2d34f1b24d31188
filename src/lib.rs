// Domain layer - hexagon geometry, layouts and the update rule
pub mod domain;

// Application layer - simulation orchestration
pub mod application;

// Infrastructure layer - configuration, rendering, input
pub mod config;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Hexagon, Layout, Neighborhood, Rule, GrowthRule};
pub use application::GridSimulation;
pub use config::{Config, ConfigError};
