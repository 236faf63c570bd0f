//! Per-tick cleaner behavior.
//!
//! One activation is: look for a dirty stain underfoot and clean it, or else
//! step to a uniformly chosen neighbor cell; then count the step and check
//! whether another cleaner shares the cell it ended up on.

use crate::grid::MultiGrid;
use crate::population::Population;
use rand::seq::SliceRandom;
use rand::Rng;
use sweep_data::{EntityId, Position};

/// What a cleaner did during its activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Cleaning { stain: EntityId },
    Moving { from: Position, to: Position },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationOutcome {
    pub cleaner: EntityId,
    pub activity: Activity,
    pub overlapped: bool,
}

/// First uncleaned stain at `pos`, in the cell's occupant order.
pub fn dirty_stain_at(grid: &MultiGrid, population: &Population, pos: Position) -> Option<EntityId> {
    grid.occupants_at(pos)
        .iter()
        .copied()
        .find(|&id| population.get(id).is_some_and(|e| e.is_dirty_stain()))
}

/// True when a cleaner other than `me` stands at `pos`.
pub fn shares_cell_with_cleaner(
    grid: &MultiGrid,
    population: &Population,
    me: EntityId,
    pos: Position,
) -> bool {
    grid.occupants_at(pos)
        .iter()
        .any(|&id| id != me && population.get(id).is_some_and(|e| e.is_cleaner()))
}

/// Runs one activation for `cleaner`.
///
/// Returns `None` if `cleaner` is not a placed cleaner, which cannot happen
/// for ids handed out by the run's scheduler.
pub fn activate<R: Rng + ?Sized>(
    cleaner: EntityId,
    grid: &mut MultiGrid,
    population: &mut Population,
    rng: &mut R,
) -> Option<ActivationOutcome> {
    if !population.get(cleaner)?.is_cleaner() {
        return None;
    }
    let here = grid.position_of(cleaner)?;

    let activity = match dirty_stain_at(grid, population, here) {
        Some(stain) => {
            if let Some(s) = population.get_mut(stain).and_then(|e| e.as_stain_mut()) {
                s.clean();
            }
            tracing::trace!(%cleaner, %stain, at = %here, "stain cleaned");
            Activity::Cleaning { stain }
        }
        None => {
            let to = *grid.neighbors(here, false).choose(rng)?;
            grid.move_entity(cleaner, to);
            tracing::trace!(%cleaner, from = %here, %to, "cleaner moved");
            Activity::Moving { from: here, to }
        }
    };

    let now = grid.position_of(cleaner)?;
    let overlapped = shares_cell_with_cleaner(grid, population, cleaner, now);
    let counters = population.get_mut(cleaner)?.as_cleaner_mut()?;
    counters.steps += 1;
    if overlapped {
        counters.overlaps += 1;
        tracing::trace!(%cleaner, at = %now, overlaps = counters.overlaps, "overlap");
    }

    Some(ActivationOutcome {
        cleaner,
        activity,
        overlapped,
    })
}
