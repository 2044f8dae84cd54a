//! Engine tick integration tests: input commands, movement, animation, pause
//! and the actor registry, run through a real `Schedule` without a window.

use bevy_ecs::prelude::*;

use critterwalk::components::animation::{Facing, WalkCycle};
use critterwalk::components::inputcontrolled::{Direction, MoveIntent};
use critterwalk::components::mapposition::MapPosition;
use critterwalk::components::sprite::{SheetGeometry, Sprite};
use critterwalk::components::wander::Wander;
use critterwalk::events::command::{AppCommand, observe_app_command};
use critterwalk::game::{ActorBundle, random_position, register_player};
use critterwalk::resources::actorregistry::{ActorId, ActorRegistry, RegistryError, SpawnRequests};
use critterwalk::resources::gameconfig::GameConfig;
use critterwalk::resources::gamestate::{GameState, GameStates};
use critterwalk::resources::input::InputState;
use critterwalk::resources::rowlayout::RowLayout;
use critterwalk::resources::screensize::ScreenSize;
use critterwalk::resources::species::SpeciesRoster;
use critterwalk::resources::worldtime::WorldTime;
use critterwalk::systems::animation::animation;
use critterwalk::systems::gamestate::state_is_running;
use critterwalk::systems::input::{dispatch_input_commands, player_intent};
use critterwalk::systems::movement::movement;
use critterwalk::systems::species::swap_sheet;
use critterwalk::systems::time::update_world_time;
use critterwalk::systems::wander::wander;

const EPSILON: f32 = 1e-4;
const SCREEN: ScreenSize = ScreenSize { w: 800, h: 600 };

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// 128x416 sheet: 32x32 frames, 64x64 on screen at the default scale of 2.
fn sheet() -> SheetGeometry {
    SheetGeometry::from_texture_size(128, 416).unwrap()
}

fn roster() -> SpeciesRoster {
    SpeciesRoster::from_json(
        r#"[{"name": "cat", "sheet": "cat.png"}, {"name": "dog", "sheet": "dog.png"}]"#,
    )
    .unwrap()
}

/// A world plus the windowless part of the main schedule.
struct Session {
    world: World,
    schedule: Schedule,
    now_ms: u64,
    player: Entity,
}

impl Session {
    fn new() -> Self {
        Self::with_limit(8)
    }

    fn with_limit(max_actors: usize) -> Self {
        let mut world = World::new();
        let config = GameConfig::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(SCREEN);
        world.insert_resource(RowLayout::default());
        world.insert_resource(ActorRegistry::with_limit(max_actors));
        world.insert_resource(config);
        world.insert_resource(roster());
        world.insert_resource(InputState::default());
        world.insert_resource(GameState::new());
        world.insert_resource(SpawnRequests::default());
        world.add_observer(observe_app_command);
        world.flush();

        let id = register_player(&mut world, sheet()).unwrap();
        assert_eq!(id, ActorId::PLAYER);
        let player = world.resource::<ActorRegistry>().player().unwrap();

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                dispatch_input_commands,
                (player_intent, wander, movement, animation)
                    .chain()
                    .run_if(state_is_running),
            )
                .chain(),
        );

        // First clock reading only establishes the baseline.
        update_world_time(&mut world, 0);

        Self {
            world,
            schedule,
            now_ms: 0,
            player,
        }
    }

    fn tick(&mut self, step_ms: u64) {
        self.now_ms += step_ms;
        update_world_time(&mut self.world, self.now_ms);
        self.schedule.run(&mut self.world);
    }

    fn hold(&mut self, intent: MoveIntent) {
        self.world.resource_mut::<InputState>().set_held(intent);
    }

    fn press(&mut self, command: AppCommand) {
        self.world.resource_mut::<InputState>().push_command(command);
    }

    fn position(&self) -> MapPosition {
        *self.world.get::<MapPosition>(self.player).unwrap()
    }

    fn cycle(&self) -> WalkCycle {
        self.world.get::<WalkCycle>(self.player).unwrap().clone()
    }

    fn state(&self) -> GameStates {
        self.world.resource::<GameState>().get()
    }
}

#[test]
fn player_starts_centered_and_idle() {
    let session = Session::new();
    let pos = session.position();
    assert!(approx_eq(pos.pos.x, (800.0 - 64.0) / 2.0));
    assert!(approx_eq(pos.pos.y, (600.0 - 64.0) / 2.0));
    assert_eq!(session.cycle().facing, Facing::Idle);
}

#[test]
fn holding_right_moves_by_speed_times_delta() {
    let mut session = Session::new();
    let start = session.position();
    session.hold(MoveIntent::only(Direction::Right));

    session.tick(250);

    let pos = session.position();
    assert!(approx_eq(pos.pos.x, start.pos.x + 300.0 * 0.25));
    assert!(approx_eq(pos.pos.y, start.pos.y));
    assert_eq!(session.cycle().facing, Facing::MovingRight);
}

#[test]
fn movement_snaps_to_screen_edge() {
    let mut session = Session::new();
    session.hold(MoveIntent::only(Direction::Right));
    for _ in 0..20 {
        session.tick(250);
    }
    assert!(approx_eq(session.position().pos.x, 800.0 - 64.0));

    session.hold(MoveIntent::only(Direction::Up));
    for _ in 0..20 {
        session.tick(250);
    }
    assert!(approx_eq(session.position().pos.y, 0.0));
    assert!(approx_eq(session.position().pos.x, 800.0 - 64.0));
}

#[test]
fn one_huge_tick_still_stays_in_bounds() {
    let mut session = Session::new();
    session.hold(MoveIntent::only(Direction::Down));
    session.tick(60_000);
    let pos = session.position();
    assert!(approx_eq(pos.pos.y, 600.0 - 64.0));
}

#[test]
fn right_and_up_held_only_moves_x() {
    let mut session = Session::new();
    let start = session.position();
    session.hold(MoveIntent {
        right: true,
        up: true,
        ..Default::default()
    });

    session.tick(100);

    let pos = session.position();
    assert!(pos.pos.x > start.pos.x);
    assert!(approx_eq(pos.pos.y, start.pos.y));
    assert_eq!(session.cycle().facing, Facing::MovingRight);
}

#[test]
fn releasing_keys_goes_idle_without_moving() {
    let mut session = Session::new();
    session.hold(MoveIntent::only(Direction::Left));
    for _ in 0..4 {
        session.tick(250);
    }
    assert_eq!(session.cycle().animation_key, 1);

    session.hold(MoveIntent::default());
    let before = session.position();
    session.tick(250);

    let cycle = session.cycle();
    assert_eq!(cycle.facing, Facing::Idle);
    assert_eq!(cycle.animation_key, 0);
    assert!(approx_eq(session.position().pos.x, before.pos.x));
}

#[test]
fn standing_still_shows_last_walked_direction() {
    let mut session = Session::new();
    session.hold(MoveIntent::only(Direction::Left));
    for _ in 0..4 {
        session.tick(250);
    }
    session.hold(MoveIntent::default());
    session.tick(250);

    let cycle = session.cycle();
    let sprite = session.world.get::<Sprite>(session.player).unwrap();
    let layout = session.world.resource::<RowLayout>();
    let src = sprite.source_rect(&cycle, layout);
    assert!(approx_eq(src.y, 7.0 * 32.0));
}

#[test]
fn walk_cycle_toggles_key_each_time_the_column_wraps() {
    let mut session = Session::new();
    session.hold(MoveIntent::only(Direction::Right));

    session.tick(250);
    let cycle = session.cycle();
    assert_eq!(cycle.frame_column, 1);
    assert_eq!(cycle.elapsed_time, 0.0);
    assert_eq!(cycle.animation_key, 0);

    for _ in 0..3 {
        session.tick(250);
    }
    let cycle = session.cycle();
    assert_eq!(cycle.frame_column, 0);
    assert_eq!(cycle.animation_key, 1);

    for _ in 0..4 {
        session.tick(250);
    }
    assert_eq!(session.cycle().animation_key, 0);
}

#[test]
fn zero_delta_ticks_do_not_animate() {
    let mut session = Session::new();
    session.hold(MoveIntent::only(Direction::Up));
    for _ in 0..50 {
        session.tick(0);
    }
    let cycle = session.cycle();
    assert_eq!(cycle.frame_column, 0);
    assert_eq!(cycle.animation_key, 0);
}

#[test]
fn source_rect_samples_row_of_current_direction() {
    let mut session = Session::new();
    session.hold(MoveIntent::only(Direction::Right));
    session.tick(250);

    let sprite = session.world.get::<Sprite>(session.player).unwrap();
    let layout = session.world.resource::<RowLayout>();
    let src = sprite.source_rect(&session.cycle(), layout);
    assert!(approx_eq(src.x, 32.0));
    assert!(approx_eq(src.y, 9.0 * 32.0));
}

#[test]
fn pause_freezes_position_and_animation() {
    let mut session = Session::new();
    session.hold(MoveIntent::only(Direction::Down));
    session.tick(100);

    session.press(AppCommand::TogglePause);
    session.tick(100);
    assert_eq!(session.state(), GameStates::Paused);
    let frozen_pos = session.position();
    let frozen_cycle = session.cycle();

    for _ in 0..10 {
        session.tick(250);
    }
    assert!(approx_eq(session.position().pos.y, frozen_pos.pos.y));
    assert_eq!(session.cycle().frame_column, frozen_cycle.frame_column);
    assert_eq!(session.cycle().animation_key, frozen_cycle.animation_key);

    session.press(AppCommand::TogglePause);
    session.tick(100);
    session.tick(100);
    assert_eq!(session.state(), GameStates::Running);
    assert!(session.position().pos.y > frozen_pos.pos.y);
}

#[test]
fn quit_from_paused_is_terminal() {
    let mut session = Session::new();
    session.press(AppCommand::TogglePause);
    session.tick(16);
    session.press(AppCommand::Quit);
    session.tick(16);
    assert_eq!(session.state(), GameStates::Quit);

    session.press(AppCommand::TogglePause);
    session.tick(16);
    assert_eq!(session.state(), GameStates::Quit);
}

#[test]
fn commands_are_drained_every_tick() {
    let mut session = Session::new();
    session.press(AppCommand::NextSpecies);
    session.tick(16);
    assert!(session.world.resource::<InputState>().pending.is_empty());
}

#[test]
fn species_commands_cycle_roster_while_running() {
    let mut session = Session::new();
    session.press(AppCommand::NextSpecies);
    session.tick(16);
    {
        let mut roster = session.world.resource_mut::<SpeciesRoster>();
        assert_eq!(roster.current().name, "dog");
        assert!(roster.take_pending_switch());
    }

    session.press(AppCommand::PreviousSpecies);
    session.tick(16);
    assert_eq!(session.world.resource::<SpeciesRoster>().current().name, "cat");
}

#[test]
fn gameplay_commands_ignored_while_paused() {
    let mut session = Session::new();
    session.press(AppCommand::TogglePause);
    session.press(AppCommand::NextSpecies);
    session.press(AppCommand::SpawnActor);
    session.tick(16);

    assert_eq!(session.state(), GameStates::Paused);
    {
        let mut roster = session.world.resource_mut::<SpeciesRoster>();
        assert_eq!(roster.current().name, "cat");
        assert!(!roster.take_pending_switch());
    }
    assert_eq!(session.world.resource::<SpawnRequests>().pending, 0);
}

#[test]
fn spawn_command_queues_request() {
    let mut session = Session::new();
    session.press(AppCommand::SpawnActor);
    session.press(AppCommand::SpawnActor);
    session.tick(16);
    assert_eq!(session.world.resource::<SpawnRequests>().pending, 2);
}

fn register_wanderer(session: &mut Session, seed: u64) -> Result<ActorId, RegistryError> {
    let config = session.world.resource::<GameConfig>().clone();
    let mut rng = fastrand::Rng::with_seed(seed);
    session
        .world
        .resource_scope(|world, mut registry: Mut<ActorRegistry>| {
            registry.try_register_with(|id| {
                let bundle = ActorBundle::new(id, sheet(), &config, |sprite| {
                    random_position(sprite, SCREEN, &mut rng)
                });
                world.spawn((bundle, Wander::with_seed(0.5, seed))).id()
            })
        })
}

#[test]
fn registry_full_leaves_existing_actors_untouched() {
    let mut session = Session::with_limit(3);
    let a = register_wanderer(&mut session, 1).unwrap();
    let b = register_wanderer(&mut session, 2).unwrap();
    assert_eq!((a, b), (ActorId(1), ActorId(2)));
    let before: Vec<_> = session.world.resource::<ActorRegistry>().iter().collect();
    let actors_before = session
        .world
        .query::<&ActorId>()
        .iter(&session.world)
        .count();

    let result = register_wanderer(&mut session, 3);

    assert!(matches!(result, Err(RegistryError::Full { limit: 3 })));
    let registry = session.world.resource::<ActorRegistry>();
    assert_eq!(registry.iter().collect::<Vec<_>>(), before);
    assert_eq!(registry.player(), Some(session.player));
    let actors_after = session
        .world
        .query::<&ActorId>()
        .iter(&session.world)
        .count();
    assert_eq!(actors_after, actors_before);
}

#[test]
fn wanderers_move_independently_and_stay_in_bounds() {
    let mut session = Session::new();
    let ids: Vec<ActorId> = (10..14)
        .map(|seed| register_wanderer(&mut session, seed).unwrap())
        .collect();
    let entities: Vec<Entity> = {
        let registry = session.world.resource::<ActorRegistry>();
        ids.iter().map(|id| registry.get(*id).unwrap()).collect()
    };

    let player_start = session.position();
    for _ in 0..400 {
        session.tick(50);
        for entity in &entities {
            let pos = session.world.get::<MapPosition>(*entity).unwrap();
            assert!(pos.pos.x >= 0.0 && pos.pos.x <= 800.0 - 64.0);
            assert!(pos.pos.y >= 0.0 && pos.pos.y <= 600.0 - 64.0);
            let cycle = session.world.get::<WalkCycle>(*entity).unwrap();
            assert!(cycle.frame_column < 4);
        }
    }

    // Nothing is held, so the player never moved.
    assert!(approx_eq(session.position().pos.x, player_start.pos.x));
    assert!(approx_eq(session.position().pos.y, player_start.pos.y));
}

#[test]
fn swapping_sheet_rebuilds_geometry_and_reclamps() {
    let mut session = Session::new();
    session.hold(MoveIntent::only(Direction::Right));
    for _ in 0..20 {
        session.tick(250);
    }
    assert!(approx_eq(session.position().pos.x, 800.0 - 64.0));

    let bigger = SheetGeometry::from_texture_size(256, 832).unwrap();
    let player = session.player;
    let mut entity = session.world.entity_mut(player);
    let mut sprite = entity.get::<Sprite>().unwrap().clone();
    let mut cycle = entity.get::<WalkCycle>().unwrap().clone();
    let mut position = *entity.get::<MapPosition>().unwrap();

    swap_sheet(&mut sprite, &mut cycle, &mut position, bigger, SCREEN);

    assert_eq!(sprite.sheet, bigger);
    assert!(approx_eq(sprite.width, 128.0));
    assert!(approx_eq(position.pos.x, 800.0 - 128.0));
    assert_eq!(cycle.frame_column, 0);
    assert_eq!(cycle.facing, Facing::Idle);
    assert_eq!(sprite.tex_key, ActorId::PLAYER.texture_key());

    entity.insert((sprite, cycle, position));
}
