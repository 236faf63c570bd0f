//! Agent activation order.
//!
//! Mirrors a random-activation schedule: every registered agent acts exactly
//! once per step, in an order reshuffled from the run's generator.

use rand::seq::SliceRandom;
use rand::Rng;
use sweep_data::EntityId;

/// Activates every registered agent once per step, in a fresh random order
/// each step.
#[derive(Debug, Clone, Default)]
pub struct RandomActivation {
    agents: Vec<EntityId>,
    steps: u64,
}

impl RandomActivation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: EntityId) {
        self.agents.push(id);
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Completed steps so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Shuffles the agents with `rng`, then hands each one to `activate`
    /// together with the same generator. Each activation runs to completion
    /// before the next starts.
    pub fn step<R, F>(&mut self, rng: &mut R, mut activate: F)
    where
        R: Rng + ?Sized,
        F: FnMut(EntityId, &mut R),
    {
        self.agents.shuffle(rng);
        for &id in &self.agents {
            activate(id, rng);
        }
        self.steps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_every_agent_activates_once_per_step() {
        let mut sched = RandomActivation::new();
        for i in 0..20 {
            sched.add(EntityId(i));
        }
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = Vec::new();
        sched.step(&mut rng, |id, _| seen.push(id));
        seen.sort();
        assert_eq!(seen, (0..20).map(EntityId).collect::<Vec<_>>());
        assert_eq!(sched.agent_count(), 20);
        assert_eq!(sched.steps(), 1);
    }

    #[test]
    fn test_order_reshuffles_between_steps() {
        let mut sched = RandomActivation::new();
        for i in 0..20 {
            sched.add(EntityId(i));
        }
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut orders = Vec::new();
        for _ in 0..3 {
            let mut order = Vec::new();
            sched.step(&mut rng, |id, _| order.push(id));
            orders.push(order);
        }
        assert!(orders[0] != orders[1] || orders[1] != orders[2]);
        assert_eq!(sched.steps(), 3);
    }

    #[test]
    fn test_same_seed_same_order() {
        let order_for = |seed| {
            let mut sched = RandomActivation::new();
            for i in 0..10 {
                sched.add(EntityId(i));
            }
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut order = Vec::new();
            sched.step(&mut rng, |id, _| order.push(id));
            order
        };
        assert_eq!(order_for(3), order_for(3));
    }

    #[test]
    fn test_empty_scheduler_still_counts_steps() {
        let mut sched = RandomActivation::new();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        sched.step(&mut rng, |_, _| unreachable!());
        assert_eq!(sched.steps(), 1);
    }
}
