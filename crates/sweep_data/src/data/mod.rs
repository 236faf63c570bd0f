//! Core data structures for the sweep simulation.

pub mod entity;
pub mod grid;
pub mod metrics;
pub mod snapshot;
