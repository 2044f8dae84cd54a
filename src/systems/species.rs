//! Species switching.
//!
//! When the roster has a pending switch, [`apply_species_switch`] loads the
//! new species' sheet, hands it to the player (the old texture is dropped and
//! unloaded) and rebuilds the player's geometry with [`swap_sheet`]. If the
//! sheet cannot be loaded the player keeps its current one.
use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::Vector2;

use crate::components::animation::WalkCycle;
use crate::components::inputcontrolled::Player;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::{SheetGeometry, Sprite};
use crate::game::load_sheet;
use crate::resources::actorregistry::ActorId;
use crate::resources::screensize::ScreenSize;
use crate::resources::species::SpeciesRoster;
use crate::resources::texturestore::TextureStore;

/// Put a freshly loaded sheet on an actor: new geometry and size, walk cycle
/// from the start, position snapped back inside the screen.
pub fn swap_sheet(
    sprite: &mut Sprite,
    cycle: &mut WalkCycle,
    position: &mut MapPosition,
    sheet: SheetGeometry,
    screen: ScreenSize,
) {
    sprite.replace_sheet(sheet);
    cycle.restart();
    let (w, h) = screen.as_f32();
    position.clamp_to(
        Vector2 {
            x: sprite.width,
            y: sprite.height,
        },
        w,
        h,
    );
}

pub fn apply_species_switch(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut roster: ResMut<SpeciesRoster>,
    mut textures: ResMut<TextureStore>,
    screen: Res<ScreenSize>,
    mut query: Query<(&ActorId, &mut Sprite, &mut WalkCycle, &mut MapPosition), With<Player>>,
) {
    if !roster.take_pending_switch() {
        return;
    }
    let species = roster.current().clone();
    let Ok((id, mut sprite, mut cycle, mut position)) = query.single_mut() else {
        warn!("No player to switch to {}", species.name);
        return;
    };

    match load_sheet(&mut rl, &th, &species.sheet) {
        Ok((texture, sheet)) => {
            textures.insert(id.texture_key(), texture);
            swap_sheet(&mut sprite, &mut cycle, &mut position, sheet, *screen);
            info!("Switched to {}", species.name);
        }
        Err(e) => warn!("Keeping current sheet: {}", e),
    }
}
