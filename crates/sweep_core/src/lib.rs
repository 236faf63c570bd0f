//! # Sweep Core
//!
//! The deterministic simulation core for sweep: cleaner agents wandering a
//! grid and removing the stains they step on.
//!
//! This crate contains:
//! - The multi-occupancy grid with toroidal or bounded neighborhoods
//! - The entity population (cleaners and stains)
//! - The random-order activation scheduler
//! - Cleaner activation and reporter computation systems
//! - Configuration, error types, metrics collection and logging setup
//!
//! Randomness is never global: callers hand a seeded generator to every
//! operation that needs one, so a fixed seed reproduces a run exactly.
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use sweep_core::grid::MultiGrid;
//! use sweep_core::population::Population;
//! use sweep_core::systems::cleaning;
//! use sweep_data::Position;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut grid = MultiGrid::new(5, 5, true)?;
//! let mut population = Population::new();
//! let cleaner = population.spawn_cleaner();
//! grid.place(cleaner, Position::new(1, 1));
//!
//! let outcome = cleaning::activate(cleaner, &mut grid, &mut population, &mut rng);
//! assert!(outcome.is_some());
//! # Ok::<(), sweep_core::error::ConfigError>(())
//! ```

/// Configuration management for run parameters
pub mod config;
/// Construction-time error taxonomy
pub mod error;
/// Multi-occupancy grid and neighborhoods
pub mod grid;
/// Metric history, collection and logging setup
pub mod metrics;
/// Entity storage indexed by id
pub mod population;
/// Random-order activation scheduler
pub mod scheduler;
/// Per-tick systems (cleaner activation, reporters)
pub mod systems;

pub use config::RunConfig;
pub use error::ConfigError;
pub use metrics::{init_logging, MetricsCollector, MetricsHistory};
