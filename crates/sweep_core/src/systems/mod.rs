//! Per-tick simulation systems: cleaner activation and reporter computation.

pub mod cleaning;
pub mod stats;
