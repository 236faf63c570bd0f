mod common;

use common::RunBuilder;
use sweep_lib::model::config::RunConfig;
use sweep_lib::model::state::Position;
use sweep_lib::{ConfigError, SimulationRun};

fn build(config: RunConfig) -> Result<SimulationRun, ConfigError> {
    SimulationRun::new(config)
}

#[test]
fn test_rejects_degenerate_grids() {
    for (w, h) in [(1, 1), (1, 10), (10, 1), (0, 0)] {
        let err = build(RunBuilder::new().with_grid(w, h).with_density(0).config());
        assert!(
            matches!(err, Err(ConfigError::GridTooSmall { .. })),
            "{w}x{h} should be rejected"
        );
    }
}

#[test]
fn test_rejects_bad_counts() {
    assert!(matches!(
        build(RunBuilder::new().with_cleaners(0).config()),
        Err(ConfigError::NoCleaners)
    ));
    assert!(matches!(
        build(RunBuilder::new().with_max_ticks(0).config()),
        Err(ConfigError::ZeroMaxTicks)
    ));
    assert!(matches!(
        build(RunBuilder::new().with_density(150).config()),
        Err(ConfigError::DensityOutOfRange(150))
    ));
}

#[test]
fn test_full_density_is_a_config_error_not_a_hang() {
    let err = build(RunBuilder::new().with_grid(10, 10).with_density(100).config());
    assert!(matches!(
        err,
        Err(ConfigError::TooManyStains {
            stains: 100,
            capacity: 99
        })
    ));
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_population_beyond_id_space_is_rejected_before_spawning() {
    let err = build(RunBuilder::new().with_cleaners(u32::MAX as usize + 1).config());
    assert!(matches!(err, Err(ConfigError::PopulationTooLarge { .. })));
}

#[test]
fn test_near_full_density_fills_every_free_cell() {
    let run = RunBuilder::new()
        .with_grid(10, 10)
        .with_density(99)
        .build();
    let snap = run.snapshot();
    assert_eq!(snap.stains.len(), 99);
    assert!(run.grid().empty_cells().is_empty());
    assert!(snap.stains.iter().all(|s| s.position != Position::new(1, 1)));
}

#[test]
fn test_smallest_grid_runs() {
    for torus in [true, false] {
        let mut b = RunBuilder::new()
            .with_grid(2, 2)
            .with_origin(0, 0)
            .with_cleaners(2)
            .with_density(75)
            .with_max_ticks(500);
        if !torus {
            b = b.bounded();
        }
        let mut run = b.build();
        assert_eq!(run.snapshot().stains.len(), 3);
        run.run_to_completion();
        assert!(!run.is_running());
        assert_consistent!(run);
    }
}

#[test]
fn test_origin_outside_grid_rejected() {
    let err = build(RunBuilder::new().with_grid(5, 5).with_origin(5, 2).config());
    assert!(matches!(err, Err(ConfigError::OriginOutOfBounds { .. })));
}

#[test]
fn test_custom_origin_is_where_cleaners_start() {
    let run = RunBuilder::new()
        .with_grid(6, 4)
        .with_origin(5, 3)
        .with_cleaners(3)
        .build();
    assert!(run
        .snapshot()
        .cleaners
        .iter()
        .all(|c| c.position == Position::new(5, 3)));
}

#[test]
fn test_config_error_messages_are_readable() {
    let err = build(RunBuilder::new().with_grid(1, 4).config()).err().unwrap();
    assert_eq!(err.to_string(), "grid must be at least 2x2, got 1x4");
}
