//! Ordered actor registry.
//!
//! The ECS world owns actor data; [`ActorRegistry`] owns the insertion order
//! and hands out stable [`ActorId`]s. Index 0 is the player. The registry is
//! append-only for the lifetime of a session.
//!
//! Appending is all-or-nothing: capacity is secured before the actor is
//! spawned, so a rejected append spawns nothing and leaves the existing entries
//! untouched.

use bevy_ecs::prelude::*;
use std::collections::TryReserveError;
use thiserror::Error;

/// Stable insertion index of an actor. Also attached to the actor entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub usize);

impl ActorId {
    pub const PLAYER: ActorId = ActorId(0);

    /// Key of the texture exclusively owned by this actor.
    pub fn texture_key(self) -> String {
        format!("actor-{}", self.0)
    }
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("actor registry is full ({limit} actors)")]
    Full { limit: usize },
    #[error("could not grow actor registry: {0}")]
    Alloc(#[from] TryReserveError),
}

#[derive(Resource, Debug, Clone)]
pub struct ActorRegistry {
    entries: Vec<Entity>,
    limit: usize,
}

impl Default for ActorRegistry {
    fn default() -> Self {
        Self::with_limit(usize::MAX)
    }
}

impl ActorRegistry {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Id the next successful append will receive.
    pub fn next_id(&self) -> ActorId {
        ActorId(self.entries.len())
    }

    /// Append an actor created by `spawn`.
    ///
    /// `spawn` runs only after room for the entry is secured and receives the
    /// id the actor will be registered under. On error it is not called.
    pub fn try_register_with(
        &mut self,
        spawn: impl FnOnce(ActorId) -> Entity,
    ) -> Result<ActorId, RegistryError> {
        if self.is_full() {
            return Err(RegistryError::Full { limit: self.limit });
        }
        self.entries.try_reserve(1)?;
        let id = self.next_id();
        let entity = spawn(id);
        self.entries.push(entity);
        Ok(id)
    }

    pub fn get(&self, id: ActorId) -> Option<Entity> {
        self.entries.get(id.0).copied()
    }

    /// The controlled actor: the first one registered.
    pub fn player(&self) -> Option<Entity> {
        self.entries.first().copied()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.limit
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Entities in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (ActorId, Entity)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (ActorId(i), *e))
    }
}

/// Pending requests to append a wandering actor.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SpawnRequests {
    pub pending: u32,
}

impl SpawnRequests {
    pub fn request(&mut self) {
        self.pending = self.pending.saturating_add(1);
    }

    pub fn take(&mut self) -> u32 {
        std::mem::take(&mut self.pending)
    }
}
