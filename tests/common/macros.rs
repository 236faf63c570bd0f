/// Asserts that grid occupancy and entity positions agree.
#[macro_export]
macro_rules! assert_consistent {
    ($run:expr) => {
        assert!(
            $run.check_invariants(),
            "grid/population invariant broken at tick {}",
            $run.tick()
        );
    };
}

/// Asserts that the run is terminal for the given reason.
#[macro_export]
macro_rules! assert_terminated {
    ($run:expr, $reason:expr) => {
        assert!(!$run.is_running(), "run should be terminal");
        assert_eq!($run.termination(), Some($reason), "termination reason mismatch");
    };
}

/// Asserts that every recorded tick reports N steps per cleaner per tick.
#[macro_export]
macro_rules! assert_steps_per_tick {
    ($run:expr, $cleaners:expr) => {
        for rec in $run.metrics_history().records() {
            assert_eq!(
                rec.total_steps,
                $cleaners as u64 * rec.tick,
                "totalSteps mismatch at tick {}",
                rec.tick
            );
        }
    };
}
