pub mod config {
    pub use sweep_core::config::*;
}
pub mod error {
    pub use sweep_core::error::*;
}
pub mod grid {
    pub use sweep_core::grid::*;
}
pub mod metrics {
    pub use sweep_core::metrics::*;
}
pub mod population {
    pub use sweep_core::population::*;
}
pub mod scheduler {
    pub use sweep_core::scheduler::*;
}
pub mod systems {
    pub use sweep_core::systems::*;
}

pub mod state {
    pub use sweep_data::*;
}

pub mod world;
