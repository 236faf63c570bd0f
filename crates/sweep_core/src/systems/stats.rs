use crate::population::Population;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use sweep_data::{Entity, EntityKind, MetricRecord};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    cleaners: u64,
    steps: u64,
    overlaps: u64,
    stains: u64,
    cleaned: u64,
}

impl Tally {
    fn merge(self, other: Tally) -> Tally {
        Tally {
            cleaners: self.cleaners + other.cleaners,
            steps: self.steps + other.steps,
            overlaps: self.overlaps + other.overlaps,
            stains: self.stains + other.stains,
            cleaned: self.cleaned + other.cleaned,
        }
    }

    fn of(entity: &Entity) -> Tally {
        match entity.kind {
            EntityKind::Cleaner(c) => Tally {
                cleaners: 1,
                steps: c.steps,
                overlaps: c.overlaps,
                ..Tally::default()
            },
            EntityKind::Stain(s) => Tally {
                stains: 1,
                cleaned: u64::from(s.is_cleaned()),
                ..Tally::default()
            },
        }
    }
}

fn tally(population: &Population) -> Tally {
    #[cfg(feature = "parallel")]
    {
        population
            .entities()
            .par_iter()
            .map(Tally::of)
            .reduce(Tally::default, Tally::merge)
    }
    #[cfg(not(feature = "parallel"))]
    {
        population
            .entities()
            .iter()
            .map(Tally::of)
            .fold(Tally::default(), Tally::merge)
    }
}

/// Computes all reporters from scratch over the live population.
pub fn compute_record(tick: u64, population: &Population) -> MetricRecord {
    let t = tally(population);
    let mean_overlaps = if t.cleaners > 0 {
        t.overlaps as f64 / t.cleaners as f64
    } else {
        0.0
    };
    let percent_stains_clean = if t.stains > 0 {
        t.cleaned as f64 / t.stains as f64 * 100.0
    } else {
        0.0
    };
    MetricRecord {
        tick,
        total_steps: t.steps,
        mean_overlaps,
        percent_stains_clean,
    }
}
