//! Configuration management for run parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! a `config.toml` file. Missing sections and keys fall back to the defaults
//! below, which mirror the stock control panel: ten cleaners on a 10x10
//! wrap-around floor with 10% stain density and a 100 tick budget.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [grid]
//! width = 10
//! height = 10
//! torus = true
//! origin = [1, 1]
//!
//! [population]
//! cleaners = 10
//! stain_density = 10
//!
//! [schedule]
//! max_ticks = 100
//! seed = 42
//! ```

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use sweep_data::Position;

/// Floor geometry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GridConfig {
    pub width: u16,
    pub height: u16,
    /// Neighborhoods wrap around the edges when set.
    pub torus: bool,
    /// Cell every cleaner starts on.
    pub origin: (u16, u16),
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            torus: true,
            origin: (1, 1),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PopulationConfig {
    pub cleaners: usize,
    /// Percentage of cells that start stained, 0..=100.
    pub stain_density: u8,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            cleaners: 10,
            stain_density: 10,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScheduleConfig {
    pub max_ticks: u64,
    /// Fixed seed for reproducible runs; drawn from entropy when absent.
    pub seed: Option<u64>,
    /// Emit an info-level metrics line every this many ticks (0 disables).
    pub metrics_log_interval: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            max_ticks: 100,
            seed: None,
            metrics_log_interval: 10,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RunConfig {
    pub grid: GridConfig,
    pub population: PopulationConfig,
    pub schedule: ScheduleConfig,
}

impl RunConfig {
    /// Builds a config from the five construction parameters, keeping the
    /// remaining settings at their defaults.
    #[must_use]
    pub fn with_params(
        cleaners: usize,
        width: u16,
        height: u16,
        stain_density: u8,
        max_ticks: u64,
    ) -> Self {
        Self {
            grid: GridConfig {
                width,
                height,
                ..GridConfig::default()
            },
            population: PopulationConfig {
                cleaners,
                stain_density,
            },
            schedule: ScheduleConfig {
                max_ticks,
                ..ScheduleConfig::default()
            },
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    #[must_use]
    pub fn origin(&self) -> Position {
        Position::from(self.grid.origin)
    }

    /// floor(width * height * density / 100), in exact integer arithmetic.
    #[must_use]
    pub fn stain_count(&self) -> usize {
        self.cell_count() * usize::from(self.population.stain_density) / 100
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        usize::from(self.grid.width) * usize::from(self.grid.height)
    }

    pub fn validate(&self) -> Result<()> {
        let GridConfig {
            width,
            height,
            origin: (ox, oy),
            ..
        } = self.grid;
        if width < 2 || height < 2 {
            return Err(ConfigError::GridTooSmall { width, height });
        }
        if self.population.cleaners == 0 {
            return Err(ConfigError::NoCleaners);
        }
        if self.population.stain_density > 100 {
            return Err(ConfigError::DensityOutOfRange(
                self.population.stain_density,
            ));
        }
        if self.schedule.max_ticks == 0 {
            return Err(ConfigError::ZeroMaxTicks);
        }
        if ox >= width || oy >= height {
            return Err(ConfigError::OriginOutOfBounds {
                x: ox,
                y: oy,
                width,
                height,
            });
        }
        // The origin cell is taken by the cleaners before stains are placed.
        let capacity = self.cell_count() - 1;
        let stains = self.stain_count();
        if stains > capacity {
            return Err(ConfigError::TooManyStains { stains, capacity });
        }
        let entities = self.population.cleaners.saturating_add(stains);
        if u32::try_from(entities).is_err() {
            return Err(ConfigError::PopulationTooLarge {
                entities,
                limit: u32::MAX,
            });
        }
        Ok(())
    }
}
