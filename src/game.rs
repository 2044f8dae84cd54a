//! Actor setup helpers.
//!
//! - [`load_sheet`] loads a sprite sheet texture and derives its geometry.
//! - [`ActorBundle`] groups the components every actor carries.
//! - [`spawn_player`] registers the controlled actor at startup.
//! - [`wanderer_bundle`] builds a non-player actor at a random position.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;
use std::path::Path;

use crate::components::animation::WalkCycle;
use crate::components::inputcontrolled::{InputControlled, MoveIntent, Player};
use crate::components::mapposition::MapPosition;
use crate::components::sprite::{SheetGeometry, Sprite};
use crate::components::wander::Wander;
use crate::error::AppError;
use crate::resources::actorregistry::{ActorId, ActorRegistry};
use crate::resources::gameconfig::GameConfig;
use crate::resources::screensize::ScreenSize;
use crate::resources::species::SpeciesRoster;
use crate::resources::texturestore::TextureStore;

/// Load a sprite sheet and derive its frame grid from the texture size.
pub fn load_sheet(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<(Texture2D, SheetGeometry), AppError> {
    if !path.is_file() {
        return Err(AppError::asset(path, "file not found"));
    }
    let path_str = path
        .to_str()
        .ok_or_else(|| AppError::asset(path, "path is not valid UTF-8"))?;
    let texture = rl
        .load_texture(thread, path_str)
        .map_err(|e| AppError::asset(path, e))?;
    let geometry = SheetGeometry::from_texture_size(texture.width, texture.height)
        .map_err(|e| AppError::asset(path, e))?;
    info!(
        "Loaded sheet {} ({}x{}, frame {}x{})",
        path.display(),
        geometry.sheet_width,
        geometry.sheet_height,
        geometry.frame_width,
        geometry.frame_height
    );
    Ok((texture, geometry))
}

/// Components shared by every actor.
#[derive(Bundle)]
pub struct ActorBundle {
    pub id: ActorId,
    pub position: MapPosition,
    pub sprite: Sprite,
    pub cycle: WalkCycle,
    pub intent: MoveIntent,
    pub controlled: InputControlled,
}

impl ActorBundle {
    /// Actor `id` using `sheet`, placed by `place` from its on-screen size.
    pub fn new(
        id: ActorId,
        sheet: SheetGeometry,
        config: &GameConfig,
        place: impl FnOnce(&Sprite) -> MapPosition,
    ) -> Self {
        let sprite = Sprite::new(id.texture_key(), sheet, config.scale);
        let position = place(&sprite);
        Self {
            id,
            position,
            sprite,
            cycle: WalkCycle::new(),
            intent: MoveIntent::default(),
            controlled: InputControlled::new(config.speed),
        }
    }
}

/// Top-left position that centers `sprite` on the screen.
pub fn centered(sprite: &Sprite, screen: ScreenSize) -> MapPosition {
    let (w, h) = screen.as_f32();
    let mut position = MapPosition::new((w - sprite.width) / 2.0, (h - sprite.height) / 2.0);
    position.clamp_to(
        Vector2 {
            x: sprite.width,
            y: sprite.height,
        },
        w,
        h,
    );
    position
}

/// Random top-left position that keeps `sprite` fully on screen.
pub fn random_position(sprite: &Sprite, screen: ScreenSize, rng: &mut fastrand::Rng) -> MapPosition {
    let (w, h) = screen.as_f32();
    MapPosition::new(
        rng.f32() * (w - sprite.width).max(0.0),
        rng.f32() * (h - sprite.height).max(0.0),
    )
}

/// A wandering, non-player actor.
pub fn wanderer_bundle(
    id: ActorId,
    sheet: SheetGeometry,
    config: &GameConfig,
    screen: ScreenSize,
    rng: &mut fastrand::Rng,
) -> (ActorBundle, Wander) {
    let bundle = ActorBundle::new(id, sheet, config, |sprite| {
        random_position(sprite, screen, rng)
    });
    (bundle, Wander::new(config.wander_interval))
}

/// Register the player at the center of the screen with a sheet of geometry
/// `sheet`. Must be the first actor registered.
pub fn register_player(world: &mut World, sheet: SheetGeometry) -> Result<ActorId, AppError> {
    let config = world.resource::<GameConfig>().clone();
    let screen = *world.resource::<ScreenSize>();
    world
        .resource_scope(|world, mut registry: Mut<ActorRegistry>| {
            registry.try_register_with(|id| {
                let bundle = ActorBundle::new(id, sheet, &config, |sprite| centered(sprite, screen));
                world.spawn((bundle, Player)).id()
            })
        })
        .map_err(|e| AppError::Init(format!("could not register player: {}", e)))
}

/// Load the current species' sheet and spawn the player with it.
pub fn spawn_player(
    world: &mut World,
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
) -> Result<ActorId, AppError> {
    let species = world.resource::<SpeciesRoster>().current().clone();
    let (texture, sheet) = load_sheet(rl, thread, &species.sheet)?;
    let id = register_player(world, sheet)?;
    world
        .resource_mut::<TextureStore>()
        .insert(id.texture_key(), texture);
    info!("Player spawned as {}", species.name);
    Ok(id)
}
