mod common;

use proptest::prelude::*;
use std::collections::HashSet;
use sweep_lib::model::config::RunConfig;
use sweep_lib::model::state::{EntityId, Reporter};
use sweep_lib::SimulationRun;

prop_compose! {
    fn arb_config()(
        seed in any::<u64>(),
        cleaners in 1usize..6,
        width in 2u16..8,
        height in 2u16..8,
        density in 0u8..60,
        max_ticks in 1u64..40,
        torus in any::<bool>()
    ) -> RunConfig {
        let mut config = RunConfig::with_params(cleaners, width, height, density, max_ticks);
        config.grid.torus = torus;
        config.grid.origin = (0, 0);
        config.schedule.seed = Some(seed);
        config.schedule.metrics_log_interval = 0;
        config
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_run_invariants(config in arb_config()) {
        let cleaners = config.population.cleaners as u64;
        let max_ticks = config.schedule.max_ticks;
        let mut run = SimulationRun::new(config).unwrap();
        let mut cleaned: HashSet<EntityId> = HashSet::new();

        loop {
            prop_assert!(run.check_invariants());
            for s in run.snapshot().stains {
                if cleaned.contains(&s.id) {
                    prop_assert!(s.cleaned);
                }
                if s.cleaned {
                    cleaned.insert(s.id);
                }
            }
            if !run.advance() {
                break;
            }
        }

        prop_assert!(!run.is_running());
        prop_assert!(run.tick() <= max_ticks - 1);
        prop_assert_eq!(run.metrics_history().len() as u64, run.tick() + 1);

        for rec in run.metrics_history().records() {
            prop_assert_eq!(rec.total_steps, cleaners * rec.tick);
        }
        let pct = run.metrics_history().series(Reporter::PercentStainsClean);
        prop_assert!(pct.windows(2).all(|w| w[0] <= w[1]));
        if let Some(&last) = pct.last() {
            let stains = run.snapshot().stains.len();
            prop_assert_eq!(last == 100.0, stains > 0 && run.all_stains_clean());
        }

        prop_assert!(!run.advance());
        prop_assert_eq!(run.metrics_history().len() as u64, run.tick() + 1);
    }

    #[test]
    fn test_neighbors_are_distinct_adjacent_cells(
        width in 2u16..12,
        height in 2u16..12,
        x in 0u16..12,
        y in 0u16..12,
        torus in any::<bool>()
    ) {
        let grid = sweep_lib::model::grid::MultiGrid::new(width, height, torus).unwrap();
        let pos = sweep_lib::model::state::Position::new(x % width, y % height);
        let n = grid.neighbors(pos, false);
        prop_assert!(!n.is_empty() && n.len() <= 8);
        prop_assert!(!n.contains(&pos));
        let unique: HashSet<_> = n.iter().copied().collect();
        prop_assert_eq!(unique.len(), n.len());
        for cell in n {
            prop_assert!(grid.contains(cell));
            let dx = (i32::from(cell.x) - i32::from(pos.x)).rem_euclid(i32::from(width));
            let dy = (i32::from(cell.y) - i32::from(pos.y)).rem_euclid(i32::from(height));
            let near = |d: i32, size: i32| d <= 1 || d >= size - 1;
            prop_assert!(near(dx, i32::from(width)) && near(dy, i32::from(height)));
        }
    }
}
