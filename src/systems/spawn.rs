//! Spawning of wandering actors on request.
use bevy_ecs::prelude::*;
use log::{error, info, warn};

use crate::game::{load_sheet, wanderer_bundle};
use crate::resources::actorregistry::{ActorRegistry, SpawnRequests};
use crate::resources::gameconfig::GameConfig;
use crate::resources::screensize::ScreenSize;
use crate::resources::species::SpeciesRoster;
use crate::resources::texturestore::TextureStore;

/// Serve pending [`SpawnRequests`]: each new actor gets its own copy of the
/// current species' sheet and a random position. A full registry or a failed
/// load drops the request.
pub fn spawn_requested_actors(
    mut commands: Commands,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut requests: ResMut<SpawnRequests>,
    mut registry: ResMut<ActorRegistry>,
    mut textures: ResMut<TextureStore>,
    roster: Res<SpeciesRoster>,
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
) {
    let mut rng = fastrand::Rng::new();
    for _ in 0..requests.take() {
        if registry.is_full() {
            warn!("Actor limit of {} reached", registry.limit());
            break;
        }
        let species = roster.current();
        let (texture, sheet) = match load_sheet(&mut rl, &th, &species.sheet) {
            Ok(loaded) => loaded,
            Err(e) => {
                error!("Could not spawn {}: {}", species.name, e);
                continue;
            }
        };
        let result = registry.try_register_with(|id| {
            commands
                .spawn(wanderer_bundle(id, sheet, &config, *screen, &mut rng))
                .id()
        });
        match result {
            Ok(id) => {
                textures.insert(id.texture_key(), texture);
                info!("Spawned {} as actor {}", species.name, id.0);
            }
            Err(e) => warn!("Could not spawn {}: {}", species.name, e),
        }
    }
}
