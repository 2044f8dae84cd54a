use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animation::WalkCycle;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::actorregistry::ActorRegistry;
use crate::resources::rowlayout::RowLayout;
use crate::resources::species::SpeciesRoster;
use crate::resources::texturestore::TextureStore;

/// Clear, draw every registered actor, present.
///
/// Actors are drawn in registry order with the player last so it stays on
/// top. Presenting happens when the draw handle is dropped.
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    textures: Res<TextureStore>,
    layout: Res<RowLayout>,
    registry: Res<ActorRegistry>,
    roster: Res<SpeciesRoster>,
    query: Query<(&Sprite, &WalkCycle, &MapPosition)>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);

    let order = registry.iter().skip(1).chain(registry.iter().take(1));
    for (_, entity) in order {
        let Ok((sprite, cycle, position)) = query.get(entity) else {
            continue;
        };
        if let Some(tex) = textures.get(&sprite.tex_key) {
            let src = sprite.source_rect(cycle, &layout);
            let dest = sprite.dest_rect(position.pos);
            d.draw_texture_pro(tex, src, dest, Vector2 { x: 0.0, y: 0.0 }, 0.0, Color::WHITE);
        }
    }

    d.draw_text(&roster.current().name, 10, 10, 20, Color::RAYWHITE);
}
