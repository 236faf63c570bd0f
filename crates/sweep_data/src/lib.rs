//! Plain data types shared by the sweep simulation crates.
//!
//! Nothing in here owns behavior beyond small state transitions on a single
//! value; the grid, scheduler and run logic live in `sweep_core`.

pub mod data;

pub use data::entity::{Cleaner, Entity, EntityId, EntityKind, Stain};
pub use data::grid::Position;
pub use data::metrics::{MetricRecord, Reporter};
pub use data::snapshot::{CleanerView, RunSnapshot, StainView};
