use crate::model::world::SimulationRun;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sweep_core::config::RunConfig;
use sweep_core::error::Result;
use sweep_core::grid::MultiGrid;
use sweep_core::metrics::MetricsCollector;
use sweep_core::population::Population;
use sweep_core::scheduler::RandomActivation;
use uuid::Uuid;

impl SimulationRun {
    /// Builds a run, seeding its generator from `config.schedule.seed` or,
    /// without one, from entropy.
    pub fn new(config: RunConfig) -> Result<Self> {
        let rng = if let Some(seed) = config.schedule.seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self::with_rng(config, rng)
    }

    /// Shorthand for the five construction parameters on an otherwise
    /// default configuration.
    pub fn from_params(
        cleaners: usize,
        width: u16,
        height: u16,
        stain_density: u8,
        max_ticks: u64,
        seed: Option<u64>,
    ) -> Result<Self> {
        let mut config = RunConfig::with_params(cleaners, width, height, stain_density, max_ticks);
        config.schedule.seed = seed;
        Self::new(config)
    }

    pub fn with_rng(config: RunConfig, mut rng: ChaCha8Rng) -> Result<Self> {
        config.validate()?;
        let run_id = Uuid::from_u128(rng.gen::<u128>());

        let mut grid = MultiGrid::new(config.grid.width, config.grid.height, config.grid.torus)?;
        let mut population = Population::new();
        let mut scheduler = RandomActivation::new();

        let origin = config.origin();
        for _ in 0..config.population.cleaners {
            let id = population.spawn_cleaner();
            grid.place(id, origin);
            scheduler.add(id);
        }

        // One stain per empty cell, each drawn uniformly from what is still
        // free. validate() guarantees enough free cells.
        let stain_count = config.stain_count();
        let mut free = grid.empty_cells();
        for _ in 0..stain_count {
            let cell = free.swap_remove(rng.gen_range(0..free.len()));
            let id = population.spawn_stain();
            grid.place(id, cell);
        }

        tracing::info!(
            %run_id,
            width = grid.width(),
            height = grid.height(),
            torus = grid.is_torus(),
            cleaners = scheduler.agent_count(),
            stains = stain_count,
            max_ticks = config.schedule.max_ticks,
            seed = ?config.schedule.seed,
            "Run initialized"
        );

        Ok(Self {
            run_id,
            collector: MetricsCollector::new(config.schedule.metrics_log_interval),
            config,
            grid,
            population,
            scheduler,
            rng,
            running: true,
            termination: None,
        })
    }
}
