use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Loaded sprite sheets keyed by [`ActorId::texture_key`](crate::resources::actorregistry::ActorId::texture_key).
///
/// Each actor owns exactly one texture. Replacing an entry drops the previous
/// texture, which unloads it from the GPU.
#[derive(Resource, Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        // Dropping the old texture releases it.
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}
