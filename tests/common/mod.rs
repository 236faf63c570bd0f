pub mod macros;

use sweep_lib::model::config::RunConfig;
use sweep_lib::SimulationRun;

#[allow(dead_code)]
pub struct RunBuilder {
    config: RunConfig,
}

#[allow(dead_code)]
impl RunBuilder {
    pub fn new() -> Self {
        let mut config = RunConfig::default();
        config.schedule.seed = Some(42);
        config.schedule.metrics_log_interval = 0;
        Self { config }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.schedule.seed = Some(seed);
        self
    }

    pub fn with_grid(mut self, width: u16, height: u16) -> Self {
        self.config.grid.width = width;
        self.config.grid.height = height;
        self
    }

    pub fn bounded(mut self) -> Self {
        self.config.grid.torus = false;
        self
    }

    pub fn with_origin(mut self, x: u16, y: u16) -> Self {
        self.config.grid.origin = (x, y);
        self
    }

    pub fn with_cleaners(mut self, n: usize) -> Self {
        self.config.population.cleaners = n;
        self
    }

    pub fn with_density(mut self, percent: u8) -> Self {
        self.config.population.stain_density = percent;
        self
    }

    pub fn with_max_ticks(mut self, ticks: u64) -> Self {
        self.config.schedule.max_ticks = ticks;
        self
    }

    pub fn config(&self) -> RunConfig {
        self.config.clone()
    }

    pub fn build(self) -> SimulationRun {
        SimulationRun::new(self.config).expect("Failed to create run in test builder")
    }
}

/// Drives `run` to the end, calling `check` after every advance.
#[allow(dead_code)]
pub fn drive<F: FnMut(&SimulationRun)>(run: &mut SimulationRun, mut check: F) {
    check(run);
    while run.advance() {
        check(run);
    }
    check(run);
}
