//! Simulator configuration, loadable from TOML.
//!
//! ```toml
//! [grid]
//! width = 5
//! height = 5
//!
//! [session]
//! prompt = ">> "
//! frame_delay_ms = 250
//! ```

use crate::error::{Result, SimError};
use crate::robot::Grid;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Top-level configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SimulatorConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Table dimensions.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct GridConfig {
    /// Number of columns (default: 5)
    #[serde(default = "default_grid_size")]
    pub width: i32,

    /// Number of rows (default: 5)
    #[serde(default = "default_grid_size")]
    pub height: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: default_grid_size(),
            height: default_grid_size(),
        }
    }
}

impl From<GridConfig> for Grid {
    fn from(c: GridConfig) -> Self {
        Grid::new(c.width, c.height)
    }
}

/// Command loop settings.
#[derive(Clone, Debug, Deserialize)]
pub struct SessionConfig {
    /// Prompt written before each interactive read (default: ">> ")
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Pause after each redraw in batch mode, in milliseconds (default: 250)
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            frame_delay_ms: default_frame_delay_ms(),
        }
    }
}

impl SessionConfig {
    /// [`frame_delay_ms`](Self::frame_delay_ms) as a [`Duration`].
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

fn default_grid_size() -> i32 {
    5
}
fn default_prompt() -> String {
    ">> ".to_string()
}
fn default_frame_delay_ms() -> u64 {
    250
}

impl SimulatorConfig {
    /// Reads and validates a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses and validates TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: SimulatorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects grids smaller than 1x1.
    pub fn validate(&self) -> Result<()> {
        if self.grid.width < 1 || self.grid.height < 1 {
            return Err(SimError::Config(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid.width, self.grid.height
            )));
        }
        Ok(())
    }
}
