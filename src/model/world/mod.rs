use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use sweep_core::config::RunConfig;
use sweep_core::grid::MultiGrid;
use sweep_core::metrics::MetricsCollector;
use sweep_core::population::Population;
use sweep_core::scheduler::RandomActivation;
use sweep_data::MetricRecord;
use uuid::Uuid;

pub mod init;
pub mod state;
pub mod update;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// Every stain was cleaned (vacuously so when there were none).
    AllStainsClean,
    /// The tick budget ran out first.
    TickBudget,
}

/// End-of-run report for drivers and exporters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub ticks: u64,
    pub records: usize,
    pub termination: Option<TerminationReason>,
    pub last: Option<MetricRecord>,
}

/// One simulation run: the floor, the cleaners and stains on it, the
/// activation schedule and the metric history.
///
/// The run is the only writer of its grid. Drivers call [`advance`] once per
/// tick until [`is_running`] turns false, then read the snapshot and history.
///
/// [`advance`]: SimulationRun::advance
/// [`is_running`]: SimulationRun::is_running
pub struct SimulationRun {
    pub run_id: Uuid,
    pub config: RunConfig,
    grid: MultiGrid,
    population: Population,
    scheduler: RandomActivation,
    collector: MetricsCollector,
    rng: ChaCha8Rng,
    running: bool,
    termination: Option<TerminationReason>,
}
