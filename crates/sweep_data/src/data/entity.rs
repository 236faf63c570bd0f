use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of an entity inside a run.
///
/// Ids are dense and assigned in creation order, so they double as indices
/// into the population and the grid's position table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-cleaner counters. Both only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cleaner {
    pub steps: u64,
    pub overlaps: u64,
}

/// A stain marker. Once cleaned it stays cleaned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stain {
    cleaned: bool,
}

impl Stain {
    #[must_use]
    pub const fn new() -> Self {
        Self { cleaned: false }
    }

    #[inline]
    #[must_use]
    pub const fn is_cleaned(&self) -> bool {
        self.cleaned
    }

    /// Marks the stain as cleaned. Returns `true` only on the false -> true
    /// transition; cleaning an already clean stain changes nothing.
    pub fn clean(&mut self) -> bool {
        let transitioned = !self.cleaned;
        self.cleaned = true;
        transitioned
    }
}

/// The two kinds of entity a run holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EntityKind {
    Cleaner(Cleaner),
    Stain(Stain),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
}

impl Entity {
    #[must_use]
    pub const fn cleaner(id: EntityId) -> Self {
        Self {
            id,
            kind: EntityKind::Cleaner(Cleaner {
                steps: 0,
                overlaps: 0,
            }),
        }
    }

    #[must_use]
    pub const fn stain(id: EntityId) -> Self {
        Self {
            id,
            kind: EntityKind::Stain(Stain::new()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_cleaner(&self) -> bool {
        matches!(self.kind, EntityKind::Cleaner(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_stain(&self) -> bool {
        matches!(self.kind, EntityKind::Stain(_))
    }

    #[must_use]
    pub fn as_cleaner(&self) -> Option<&Cleaner> {
        match &self.kind {
            EntityKind::Cleaner(c) => Some(c),
            EntityKind::Stain(_) => None,
        }
    }

    pub fn as_cleaner_mut(&mut self) -> Option<&mut Cleaner> {
        match &mut self.kind {
            EntityKind::Cleaner(c) => Some(c),
            EntityKind::Stain(_) => None,
        }
    }

    #[must_use]
    pub fn as_stain(&self) -> Option<&Stain> {
        match &self.kind {
            EntityKind::Stain(s) => Some(s),
            EntityKind::Cleaner(_) => None,
        }
    }

    pub fn as_stain_mut(&mut self) -> Option<&mut Stain> {
        match &mut self.kind {
            EntityKind::Stain(s) => Some(s),
            EntityKind::Cleaner(_) => None,
        }
    }

    /// True for a stain that still needs cleaning.
    #[inline]
    #[must_use]
    pub fn is_dirty_stain(&self) -> bool {
        self.as_stain().is_some_and(|s| !s.is_cleaned())
    }
}
