use clap::Parser;
use thiserror::Error;

use super::camera::CELL_SIZE;

/// Accepted pixels per cell at zoom 1.0
pub const CELL_SIZE_RANGE: std::ops::RangeInclusive<f32> = 1.0..=1000.0;

/// Reasons a configuration is rejected before the window opens
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("window size must be positive, got {width}x{height}")]
    WindowSize { width: i32, height: i32 },
    #[error("cell size must be within [1, 1000] pixels, got {0}")]
    CellSize(f32),
    #[error("fps ceiling must be at least 1, got {0}")]
    MaxFps(u32),
    #[error("tick rate must be positive, got {0}")]
    TickRate(f32),
    #[error("soup density must be within [0, 1], got {0}")]
    Density(f64),
}

/// Command line configuration of the visualizer
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "infinite_life", about = "Conway's Game of Life on an unbounded grid")]
pub struct Config {
    /// Window width in pixels
    #[arg(long, default_value_t = 1400)]
    pub width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = 900)]
    pub height: i32,

    /// Pixels per cell at zoom 1.0
    #[arg(long, default_value_t = CELL_SIZE)]
    pub cell_size: f32,

    /// Frame rate ceiling
    #[arg(long, default_value_t = 1000)]
    pub max_fps: u32,

    /// Generations per second; one generation per frame when unset
    #[arg(long)]
    pub tps: Option<f32>,

    /// Fraction of cells alive in a random soup
    #[arg(long, default_value_t = 0.3)]
    pub density: f64,

    /// Seed for random soups
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with the simulation running
    #[arg(long)]
    pub running: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::WindowSize { width: self.width, height: self.height });
        }
        if !CELL_SIZE_RANGE.contains(&self.cell_size) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if self.max_fps == 0 {
            return Err(ConfigError::MaxFps(self.max_fps));
        }
        if let Some(tps) = self.tps.filter(|t| !(t.is_finite() && *t > 0.0)) {
            return Err(ConfigError::TickRate(tps));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::Density(self.density));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 900,
            cell_size: CELL_SIZE,
            max_fps: 1000,
            tps: None,
            density: 0.3,
            seed: None,
            running: false,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_and_validate() {
        let config = Config::try_parse_from(["infinite_life"]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_flags_parse() {
        let config = Config::try_parse_from([
            "infinite_life", "--width", "800", "--tps", "12.5", "--seed", "9", "--running", "-v",
        ])
        .unwrap();
        assert_eq!(config.width, 800);
        assert_eq!(config.tps, Some(12.5));
        assert_eq!(config.seed, Some(9));
        assert!(config.running);
        assert!(config.verbose);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let cases = [
            (Config { width: 0, ..Config::default() }, ConfigError::WindowSize { width: 0, height: 900 }),
            (Config { cell_size: -1.0, ..Config::default() }, ConfigError::CellSize(-1.0)),
            (Config { max_fps: 0, ..Config::default() }, ConfigError::MaxFps(0)),
            (Config { tps: Some(0.0), ..Config::default() }, ConfigError::TickRate(0.0)),
            (Config { density: 1.5, ..Config::default() }, ConfigError::Density(1.5)),
        ];

        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected));
        }
    }

    #[test]
    fn test_cell_size_bounds() {
        let with_cell_size = |cell_size| Config { cell_size, ..Config::default() };

        assert_eq!(with_cell_size(1.0).validate(), Ok(()));
        assert_eq!(with_cell_size(1000.0).validate(), Ok(()));
        assert_eq!(with_cell_size(0.99).validate(), Err(ConfigError::CellSize(0.99)));
        assert_eq!(with_cell_size(1e-30).validate(), Err(ConfigError::CellSize(1e-30)));
        assert_eq!(with_cell_size(1000.5).validate(), Err(ConfigError::CellSize(1000.5)));
        assert_eq!(with_cell_size(f32::INFINITY).validate(), Err(ConfigError::CellSize(f32::INFINITY)));
    }

    #[test]
    fn test_nan_cell_size_rejected() {
        let config = Config { cell_size: f32::NAN, ..Config::default() };
        assert!(matches!(config.validate(), Err(ConfigError::CellSize(_))));
    }
}
