//! Command-line configuration.

use clap::Parser;
use thiserror::Error;

use crate::application::DEFAULT_LAYERS;
use crate::domain::{Layout, Neighborhood};

/// Smallest window side that still fits a single hexagon
pub const MIN_WINDOW_SIDE: u32 = 64;

/// Largest layer count accepted at startup
pub const MAX_LAYERS: u32 = 200;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("window must be at least {min}x{min} pixels, got {width}x{height}")]
    WindowTooSmall { width: u32, height: u32, min: u32 },

    #[error("layers must be between 1 and {max}, got {layers}")]
    LayersOutOfRange { layers: u32, max: u32 },

    #[error("{layers} layers leave no room for hexagons in a {width}x{height} window")]
    GridTooDense { width: u32, height: u32, layers: u32 },
}

/// Hexagonal growth automaton
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Config {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Number of layers (rings) in the grid
    #[arg(short, long, default_value_t = DEFAULT_LAYERS)]
    pub layers: u32,

    /// Tiling used to fill the window
    #[arg(long, value_enum, default_value_t = Layout::Spiral)]
    pub layout: Layout,

    /// How neighbors are detected
    #[arg(long, value_enum, default_value_t = Neighborhood::Radius)]
    pub neighborhood: Neighborhood,

    /// Start with the automaton running
    #[arg(long)]
    pub running: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            layers: DEFAULT_LAYERS,
            layout: Layout::default(),
            neighborhood: Neighborhood::default(),
            running: false,
        }
    }
}

impl Config {
    /// Reject settings that would start on an empty or unusable board
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height, layers) = (self.width, self.height, self.layers);

        if width < MIN_WINDOW_SIDE || height < MIN_WINDOW_SIDE {
            return Err(ConfigError::WindowTooSmall {
                width,
                height,
                min: MIN_WINDOW_SIDE,
            });
        }
        if !(1..=MAX_LAYERS).contains(&layers) {
            return Err(ConfigError::LayersOutOfRange { layers, max: MAX_LAYERS });
        }
        if self.layout.generate(width, height, layers).is_empty() {
            return Err(ConfigError::GridTooDense { width, height, layers });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
        let parsed = Config::parse_from(["hex_life"]);
        assert_eq!(parsed.width, 1000);
        assert_eq!(parsed.layers, DEFAULT_LAYERS);
        assert_eq!(parsed.layout, Layout::Spiral);
    }

    #[test]
    fn test_parses_enums() {
        let config = Config::parse_from([
            "hex_life",
            "--layout",
            "rectangle",
            "--neighborhood",
            "axial",
            "-l",
            "7",
            "--running",
        ]);
        assert_eq!(config.layout, Layout::Rectangle);
        assert_eq!(config.neighborhood, Neighborhood::Axial);
        assert_eq!(config.layers, 7);
        assert!(config.running);
    }

    #[test]
    fn test_rejects_tiny_window() {
        let config = Config { width: 10, ..Config::default() };
        assert!(matches!(config.validate(), Err(ConfigError::WindowTooSmall { .. })));
    }

    #[test]
    fn test_rejects_zero_layers() {
        let config = Config { layers: 0, ..Config::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::LayersOutOfRange { layers: 0, max: MAX_LAYERS })
        );
    }

    #[test]
    fn test_rejects_dense_grid() {
        let config = Config { width: 100, height: 100, layers: 50, ..Config::default() };
        assert!(matches!(config.validate(), Err(ConfigError::GridTooDense { .. })));
    }
}
