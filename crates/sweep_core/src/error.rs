//! Error types for run construction.
//!
//! Every failure the core can produce happens while validating or loading a
//! configuration. Once a run is built, stepping it cannot fail.

use thiserror::Error;

/// Invalid or unreadable run configuration. Fatal at construction.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("grid must be at least 2x2, got {width}x{height}")]
    GridTooSmall { width: u16, height: u16 },

    #[error("at least one cleaner is required")]
    NoCleaners,

    #[error("stain density must be within 0..=100 percent, got {0}")]
    DensityOutOfRange(u8),

    #[error("max_ticks must be at least 1")]
    ZeroMaxTicks,

    #[error("origin ({x}, {y}) lies outside a {width}x{height} grid")]
    OriginOutOfBounds {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },

    /// More stains requested than there are free cells to hold them.
    #[error("{stains} stains do not fit into {capacity} free cells")]
    TooManyStains { stains: usize, capacity: usize },

    /// Cleaners plus stains exceed the `u32` entity id space.
    #[error("{entities} entities exceed the id limit of {limit}")]
    PopulationTooLarge { entities: usize, limit: u32 },

    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for sweep_core operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
