use super::entity::EntityId;
use super::grid::Position;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanerView {
    pub id: EntityId,
    pub position: Position,
    pub steps: u64,
    pub overlaps: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StainView {
    pub id: EntityId,
    pub position: Position,
    pub cleaned: bool,
}

/// Read-only view of a run handed to renderers. Cleaners and stains are
/// listed in id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSnapshot {
    pub run_id: Uuid,
    pub tick: u64,
    pub running: bool,
    pub width: u16,
    pub height: u16,
    pub cleaners: Vec<CleanerView>,
    pub stains: Vec<StainView>,
}
