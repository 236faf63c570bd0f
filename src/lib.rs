//! Cleaner-and-stain grid simulation.
//!
//! [`SimulationRun`] owns one run end to end. Renderers read
//! [`SimulationRun::snapshot`]; chart and report consumers read
//! [`SimulationRun::metrics_history`].

pub mod model;

pub use model::world::{RunSummary, SimulationRun, TerminationReason};
pub use sweep_core::{ConfigError, RunConfig};
