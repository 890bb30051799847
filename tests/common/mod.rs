#![allow(dead_code)]

use bevy_ecs::{entity::Entity, event::Events, world::World};
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use paloma::{
    asset::AssetTracker,
    bounds::{TerrainExtents, WorldBounds},
    constants::collider::PICKUP_RADIUS,
    error::GameError,
    events::{GameEvent, PickupEvent, TheftEvent},
    game::{Collaborators, Game, SimStatus},
    input::InputSnapshot,
    render::SceneKind,
    systems::{
        respawn_observer, Attitude, AudioEvent, AudioState, CameraState, Collectible, CollectibleKind, Collider,
        DeltaTime, Flamingo, FlightSpeed, FloatAnim, GameRng, GameStage, GlobalState, Hunger, ItemCollider,
        PlayerCollider, PlayerControlled, Position, RingAnim, ScoreResource, SimClock, SpeedBoost, VerticalVelocity,
        Visual, Yaw,
    },
};

/// One 60 Hz frame.
pub const DT: f32 = 1.0 / 60.0;

pub fn test_bounds() -> WorldBounds {
    WorldBounds::from_terrain(TerrainExtents::centered(300.0)).expect("finite test terrain")
}

/// Creates a basic test world with required resources for ECS systems
pub fn create_test_world() -> World {
    let mut world = World::new();

    world.insert_resource(Events::<GameEvent>::default());
    world.insert_resource(Events::<GameError>::default());
    world.insert_resource(Events::<AudioEvent>::default());
    world.insert_resource(Events::<PickupEvent>::default());
    world.insert_resource(Events::<TheftEvent>::default());

    world.add_observer(respawn_observer);

    world.insert_resource(test_bounds());
    world.insert_resource(GlobalState { exit: false });
    world.insert_resource(GameStage::default());
    world.insert_resource(ScoreResource(0));
    world.insert_resource(Hunger::default());
    world.insert_resource(SpeedBoost::default());
    world.insert_resource(SimClock::default());
    world.insert_resource(InputSnapshot::default());
    world.insert_resource(CameraState::default());
    world.insert_resource(AudioState::default());
    world.insert_resource(AssetTracker::default());
    world.insert_resource(DeltaTime { seconds: DT }); // 60 FPS
    world.insert_resource(GameRng(SmallRng::seed_from_u64(7)));

    world
}

/// Spawns a controllable test player entity
pub fn spawn_test_player(world: &mut World, position: Vec3) -> Entity {
    world
        .spawn((
            PlayerControlled,
            Position(position),
            Yaw(0.0),
            Attitude::default(),
            FlightSpeed { current: 24.0 },
            VerticalVelocity::default(),
            PlayerCollider,
            Visual(SceneKind::Pigeon),
        ))
        .id()
}

/// Spawns a test collectible of the given kind at the position
pub fn spawn_test_collectible(world: &mut World, kind: CollectibleKind, position: Vec3) -> Entity {
    let collectible = match kind {
        CollectibleKind::Donut => Collectible::Donut(FloatAnim {
            phase: 0.0,
            spin_speed: 1.0,
            base_height: position.y,
        }),
        CollectibleKind::GoldenDonut => Collectible::Golden(FloatAnim {
            phase: 0.0,
            spin_speed: 1.0,
            base_height: position.y,
        }),
        CollectibleKind::SpeedRing => Collectible::Ring(RingAnim {
            phase: 0.0,
            base_height: position.y,
            facing: 0.0,
        }),
    };

    world
        .spawn((
            collectible,
            Position(position),
            Yaw(0.0),
            Collider { radius: PICKUP_RADIUS },
            ItemCollider,
            Visual(collectible.scene_kind()),
        ))
        .id()
}

/// Spawns a test flamingo with no current target
pub fn spawn_test_flamingo(world: &mut World, position: Vec3, speed: f32) -> Entity {
    world
        .spawn((
            Flamingo { speed, target: None },
            Position(position),
            Yaw(0.0),
            Visual(SceneKind::Flamingo),
        ))
        .id()
}

/// Queues a pickup event as the collision system would
pub fn send_pickup_event(world: &mut World, collectible: Entity) {
    world.resource_mut::<Events<PickupEvent>>().send(PickupEvent { collectible });
}

/// Queues a theft event as the flamingo AI would
pub fn send_theft_event(world: &mut World, flamingo: Entity, donut: Entity) {
    world.resource_mut::<Events<TheftEvent>>().send(TheftEvent { flamingo, donut });
}

pub fn count_collectibles(world: &mut World, kind: CollectibleKind) -> usize {
    world
        .query::<&Collectible>()
        .iter(world)
        .filter(|collectible| collectible.kind() == kind)
        .count()
}

pub fn drained_audio_events(world: &mut World) -> Vec<AudioEvent> {
    world.resource_mut::<Events<AudioEvent>>().drain().collect()
}

/// Builds a deterministic full game against null collaborators.
pub fn create_test_game(seed: u64) -> Game {
    Game::new_seeded(Collaborators::headless(), TerrainExtents::centered(300.0), seed).expect("game init")
}

/// Ticks the game at 60 Hz for the given duration, returning the first
/// terminal status or the last status seen.
pub fn tick_for(game: &mut Game, seconds: f32) -> SimStatus {
    let frames = (seconds / DT).ceil() as usize;
    let mut status = SimStatus::Running;
    for _ in 0..frames {
        status = game.tick(DT);
        if status.is_terminal() {
            break;
        }
    }
    status
}

pub fn game_collectible_count(game: &mut Game, kind: CollectibleKind) -> usize {
    count_collectibles(&mut game.world, kind)
}

/// Empties the collectible pool so no pickup can fire.
pub fn despawn_all_items(game: &mut Game) {
    let items: Vec<Entity> = game
        .world
        .query_filtered::<Entity, bevy_ecs::query::With<ItemCollider>>()
        .iter(&game.world)
        .collect();
    for item in items {
        game.world.despawn(item);
    }
}

pub fn player_position(game: &mut Game) -> Vec3 {
    let mut query = game.world.query_filtered::<&Position, bevy_ecs::query::With<PlayerControlled>>();
    query.single(&game.world).expect("one player").0
}
