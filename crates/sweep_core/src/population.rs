//! Entity storage for a run.

use sweep_data::{Cleaner, Entity, EntityId, Stain};

/// Every entity of a run, indexed by [`EntityId`].
///
/// Entities are created once during run construction and never removed, so
/// ids stay dense and stable for the lifetime of the run.
#[derive(Debug, Clone, Default)]
pub struct Population {
    entities: Vec<Entity>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn_cleaner(&mut self) -> EntityId {
        let id = self.next_id();
        self.entities.push(Entity::cleaner(id));
        id
    }

    pub fn spawn_stain(&mut self) -> EntityId {
        let id = self.next_id();
        self.entities.push(Entity::stain(id));
        id
    }

    /// Ids are `u32`; [`RunConfig::validate`](crate::config::RunConfig::validate)
    /// caps the entity count so they never run out.
    fn next_id(&self) -> EntityId {
        debug_assert!(
            u32::try_from(self.entities.len()).is_ok(),
            "entity id space exhausted"
        );
        EntityId(self.entities.len() as u32)
    }

    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn cleaners(&self) -> impl Iterator<Item = (EntityId, &Cleaner)> + '_ {
        self.entities
            .iter()
            .filter_map(|e| e.as_cleaner().map(|c| (e.id, c)))
    }

    pub fn stains(&self) -> impl Iterator<Item = (EntityId, &Stain)> + '_ {
        self.entities
            .iter()
            .filter_map(|e| e.as_stain().map(|s| (e.id, s)))
    }

    /// Vacuously true when there are no stains.
    pub fn all_stains_clean(&self) -> bool {
        self.stains().all(|(_, s)| s.is_cleaned())
    }
}
