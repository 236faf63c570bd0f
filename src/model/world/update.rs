use crate::model::world::{SimulationRun, TerminationReason};
use sweep_core::systems::cleaning;

impl SimulationRun {
    /// Advances the run by one tick.
    ///
    /// Records the current metrics first, so tick 0 is always captured. If
    /// every stain is clean or the tick budget is spent the run turns
    /// terminal and no cleaner activates; otherwise every cleaner activates
    /// once in a freshly shuffled order and the tick counter moves on.
    ///
    /// Once terminal this is a no-op that records nothing.
    ///
    /// # Returns
    /// Whether the run is still running afterwards.
    pub fn advance(&mut self) -> bool {
        if !self.running {
            return false;
        }

        let tick = self.scheduler.steps();
        self.collector.collect(tick, &self.population);

        if let Some(reason) = self.termination_due(tick) {
            self.running = false;
            self.termination = Some(reason);
            tracing::info!(run_id = %self.run_id, tick, ?reason, "Run terminated");
            return false;
        }

        let grid = &mut self.grid;
        let population = &mut self.population;
        self.scheduler.step(&mut self.rng, |id, rng| {
            if cleaning::activate(id, grid, population, rng).is_none() {
                tracing::warn!(cleaner = %id, "scheduled id is not a placed cleaner");
            }
        });
        true
    }

    /// Calls [`advance`](Self::advance) until the run is terminal and returns
    /// the number of recorded ticks.
    pub fn run_to_completion(&mut self) -> usize {
        while self.advance() {}
        self.collector.history().len()
    }

    /// A clean floor wins over an exhausted budget when both hold.
    fn termination_due(&self, tick: u64) -> Option<TerminationReason> {
        if self.population.all_stains_clean() {
            Some(TerminationReason::AllStainsClean)
        } else if tick + 1 >= self.config.schedule.max_ticks {
            Some(TerminationReason::TickBudget)
        } else {
            None
        }
    }
}
