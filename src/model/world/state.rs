use crate::model::world::{RunSummary, SimulationRun, TerminationReason};
use sweep_core::grid::MultiGrid;
use sweep_core::metrics::MetricsHistory;
use sweep_core::population::Population;
use sweep_data::{CleanerView, EntityKind, RunSnapshot, StainView};

impl SimulationRun {
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Completed activation ticks.
    #[inline]
    pub fn tick(&self) -> u64 {
        self.scheduler.steps()
    }

    pub fn termination(&self) -> Option<TerminationReason> {
        self.termination
    }

    pub fn metrics_history(&self) -> &MetricsHistory {
        self.collector.history()
    }

    pub fn grid(&self) -> &MultiGrid {
        &self.grid
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn all_stains_clean(&self) -> bool {
        self.population.all_stains_clean()
    }

    /// Grid and population agree: every entity is placed exactly once and
    /// every grid occupant is a known entity.
    pub fn check_invariants(&self) -> bool {
        self.grid.is_consistent()
            && self.grid.occupant_count() == self.population.len()
            && self
                .population
                .entities()
                .iter()
                .all(|e| self.grid.position_of(e.id).is_some())
    }

    /// Positions and per-entity state of everything on the floor, in id
    /// order.
    pub fn snapshot(&self) -> RunSnapshot {
        let mut cleaners = Vec::new();
        let mut stains = Vec::new();
        for e in self.population.entities() {
            let Some(position) = self.grid.position_of(e.id) else {
                continue;
            };
            match e.kind {
                EntityKind::Cleaner(c) => cleaners.push(CleanerView {
                    id: e.id,
                    position,
                    steps: c.steps,
                    overlaps: c.overlaps,
                }),
                EntityKind::Stain(s) => stains.push(StainView {
                    id: e.id,
                    position,
                    cleaned: s.is_cleaned(),
                }),
            }
        }
        RunSnapshot {
            run_id: self.run_id,
            tick: self.tick(),
            running: self.running,
            width: self.grid.width(),
            height: self.grid.height(),
            cleaners,
            stains,
        }
    }

    pub fn summary(&self) -> RunSummary {
        let history = self.metrics_history();
        RunSummary {
            run_id: self.run_id,
            ticks: self.tick(),
            records: history.len(),
            termination: self.termination,
            last: history.last().copied(),
        }
    }
}
