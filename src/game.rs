//! This module contains the main game logic and state.

use std::f32::consts::TAU;

use bevy_ecs::event::{EventReader, EventRegistry, EventWriter};
use bevy_ecs::observer::Trigger;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::system::{Res, ResMut};
use bevy_ecs::world::{Mut, World};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info};

use crate::asset::AssetTracker;
use crate::audio::{AudioOutput, NullAudio};
use crate::bounds::{TerrainExtents, WorldBounds};
use crate::constants::{mechanics, player, spawn};
use crate::error::{GameError, GameResult};
use crate::events::{GameCommand, GameEvent, PickupEvent, TheftEvent};
use crate::hud::{HudSink, NullHud};
use crate::input::InputSnapshot;
use crate::render::{NullRenderer, RendererResource, SceneKind, SceneRenderer};
use crate::systems::{
    self, asset_watch_system, audio_system, boost_timer_system, camera_follow_system, collision_system,
    effect_lifecycle_system, flamingo_ai_system, hud_system, hunger_system, idle_animation_system, make_collectible,
    pickup_system, player_movement_system, scene_attach_system, scene_detach_system, scene_sync_system,
    trail_emission_system, AudioEvent, AudioOutputResource, AudioState, CameraState, CollectibleKind, DeltaTime,
    Flamingo, FlamingoBundle, FlightSpeed, GameRng, GameStage, GlobalState, HudResource, PlayerBundle, Position,
    SceneIndex, ScoreResource, SimClock, SpeedBoost, Visual, Yaw,
};

/// System set for all gameplay systems, gated off once the game is over.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum GameplaySet {
    /// Timers, kinematics, AI and proximity detection.
    Update,
    /// Event resolution that mutates score, hunger and the entity pool.
    Resolve,
}

/// System set for everything downstream of gameplay: effects, camera, and
/// the pushes out to the collaborator seams.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum ViewSet {
    Effects,
    Push,
}

/// The pluggable external collaborators the simulation pushes state into.
pub struct Collaborators {
    pub renderer: Box<dyn SceneRenderer>,
    pub audio: Box<dyn AudioOutput>,
    pub hud: Box<dyn HudSink>,
}

impl Collaborators {
    /// Null collaborators for the headless driver and tests.
    pub fn headless() -> Self {
        Self {
            renderer: Box::new(NullRenderer::default()),
            audio: Box::new(NullAudio::default()),
            hud: Box::new(NullHud::default()),
        }
    }
}

/// What the driver loop should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimStatus {
    Running,
    /// Hunger hit zero. Terminal: the world must be rebuilt to play again.
    GameOver { score: u32 },
    /// An exit command was received.
    Exit,
}

impl SimStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SimStatus::Running)
    }
}

/// Core game state manager built on the Bevy ECS architecture.
///
/// Orchestrates all game systems through a centralized `World` containing
/// entities, components, and resources, while a `Schedule` defines system
/// execution order. Collaborator trait objects are stored as `NonSend`
/// resources since real backends hold main-thread-affine handles.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Initializes the complete game state: derives the playable bounds from
    /// the terrain, registers events and observers, inserts resources, spawns
    /// the player, the collectible pools and the flamingos, and configures
    /// the system execution schedule.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Bounds` if the terrain extents are not finite.
    pub fn new(collaborators: Collaborators, terrain: TerrainExtents) -> GameResult<Game> {
        Self::build(collaborators, terrain, SmallRng::from_os_rng())
    }

    /// Like [`Game::new`] but with deterministic randomness, for tests and
    /// replays.
    pub fn new_seeded(collaborators: Collaborators, terrain: TerrainExtents, seed: u64) -> GameResult<Game> {
        Self::build(collaborators, terrain, SmallRng::seed_from_u64(seed))
    }

    fn build(collaborators: Collaborators, terrain: TerrainExtents, mut rng: SmallRng) -> GameResult<Game> {
        info!("Starting game initialization");

        let bounds = WorldBounds::from_terrain(terrain)?;

        debug!("Initializing ECS world and system schedule");
        let mut world = World::default();
        let mut schedule = Schedule::default();

        debug!("Setting up ECS event registry and observers");
        Self::setup_ecs(&mut world);

        debug!("Configuring system execution schedule");
        Self::configure_schedule(&mut schedule);

        info!("Spawning game entities");
        Self::spawn_world(&mut world, &bounds, &mut rng);

        debug!("Inserting resources into ECS world");
        Self::insert_resources(&mut world, bounds, rng, collaborators);

        info!("Game initialization completed successfully");
        Ok(Game { world, schedule })
    }

    fn setup_ecs(world: &mut World) {
        EventRegistry::register_event::<GameError>(world);
        EventRegistry::register_event::<GameEvent>(world);
        EventRegistry::register_event::<AudioEvent>(world);
        EventRegistry::register_event::<PickupEvent>(world);
        EventRegistry::register_event::<TheftEvent>(world);

        world.add_observer(
            |event: Trigger<GameEvent>,
             mut state: ResMut<GlobalState>,
             mut audio_state: ResMut<AudioState>,
             mut audio: EventWriter<AudioEvent>| match *event {
                GameEvent::Command(GameCommand::Exit) => state.exit = true,
                GameEvent::Command(GameCommand::MuteAudio) => audio_state.muted = !audio_state.muted,
                GameEvent::Command(GameCommand::StartMusic) => {
                    audio.write(AudioEvent::StartMusic);
                }
            },
        );

        world.add_observer(systems::respawn_observer);
    }

    fn insert_resources(world: &mut World, bounds: WorldBounds, rng: SmallRng, collaborators: Collaborators) {
        world.insert_resource(bounds);
        world.insert_resource(GlobalState { exit: false });
        world.insert_resource(GameStage::default());
        world.insert_resource(ScoreResource::default());
        world.insert_resource(systems::Hunger::default());
        world.insert_resource(SpeedBoost::default());
        world.insert_resource(DeltaTime { seconds: 0.0 });
        world.insert_resource(SimClock::default());
        world.insert_resource(InputSnapshot::default());
        world.insert_resource(CameraState::default());
        world.insert_resource(AudioState::default());
        world.insert_resource(AssetTracker::default());
        world.insert_resource(SceneIndex::default());
        world.insert_resource(GameRng(rng));

        world.insert_non_send_resource(RendererResource(collaborators.renderer));
        world.insert_non_send_resource(AudioOutputResource(collaborators.audio));
        world.insert_non_send_resource(HudResource(collaborators.hud));
    }

    fn spawn_world(world: &mut World, bounds: &WorldBounds, rng: &mut SmallRng) {
        // The terrain is a single static scene object.
        world.spawn((Position(glam::Vec3::ZERO), Visual(SceneKind::Terrain)));

        debug!("Spawning player entity");
        world.spawn(PlayerBundle {
            player: systems::PlayerControlled,
            position: Position(glam::Vec3::new(0.0, player::START_ALTITUDE, 0.0)),
            yaw: Yaw(0.0),
            attitude: systems::Attitude::default(),
            speed: FlightSpeed {
                current: mechanics::BASE_SPEED,
            },
            vertical: systems::VerticalVelocity::default(),
            player_collider: systems::PlayerCollider,
            visual: Visual(SceneKind::Pigeon),
        });

        let pools = [
            (CollectibleKind::Donut, spawn::DONUT_COUNT),
            (CollectibleKind::GoldenDonut, spawn::GOLDEN_DONUT_COUNT),
            (CollectibleKind::SpeedRing, spawn::RING_COUNT),
        ];
        for (kind, count) in pools {
            debug!(?kind, count, "Spawning collectible pool");
            for _ in 0..count {
                world.spawn(make_collectible(bounds, kind, rng));
            }
        }

        debug!(count = spawn::FLAMINGO_COUNT, "Spawning flamingos");
        for _ in 0..spawn::FLAMINGO_COUNT {
            let point = systems::random_spawn_point(bounds, CollectibleKind::Donut, rng);
            world.spawn(FlamingoBundle {
                flamingo: Flamingo {
                    speed: rng.random_range(spawn::FLAMINGO_SPEED.0..spawn::FLAMINGO_SPEED.1),
                    target: None,
                },
                position: Position(glam::Vec3::new(point.x, spawn::FLAMINGO_ALTITUDE, point.z)),
                yaw: Yaw(rng.random_range(0.0..TAU)),
                visual: Visual(SceneKind::Flamingo),
            });
        }
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule
            .add_systems((
                // The boost timer runs before the pickup resolver so a ring
                // collected this frame keeps its full duration.
                (
                    boost_timer_system,
                    player_movement_system,
                    idle_animation_system,
                    flamingo_ai_system,
                    collision_system,
                )
                    .chain()
                    .in_set(GameplaySet::Update),
                (pickup_system, hunger_system).chain().in_set(GameplaySet::Resolve),
                (camera_follow_system, trail_emission_system, effect_lifecycle_system)
                    .chain()
                    .in_set(ViewSet::Effects),
                (
                    scene_attach_system,
                    scene_detach_system,
                    scene_sync_system,
                    asset_watch_system,
                    hud_system,
                    audio_system,
                    error_report_system,
                )
                    .chain()
                    .in_set(ViewSet::Push),
            ))
            .configure_sets(
                (
                    GameplaySet::Update.run_if(|stage: Res<GameStage>| stage.is_playing()),
                    GameplaySet::Resolve.run_if(|stage: Res<GameStage>| stage.is_playing()),
                    ViewSet::Effects,
                    ViewSet::Push,
                )
                    .chain(),
            );
    }

    /// Executes one frame of game logic by running all scheduled ECS systems.
    ///
    /// Updates the world's delta time and simulation clock, then runs the
    /// complete pipeline: timers, kinematics, AI, proximity detection, event
    /// resolution, effects, and the pushes into the renderer, HUD and audio
    /// collaborators.
    ///
    /// Once a terminal status has been returned, further calls are no-ops
    /// that return the same status; the world is frozen in its final state.
    ///
    /// # Arguments
    ///
    /// * `dt` - Frame delta time in seconds
    pub fn tick(&mut self, dt: f32) -> SimStatus {
        if let Some(status) = self.terminal_status() {
            return status;
        }

        self.world.insert_resource(DeltaTime { seconds: dt });
        self.world.resource_mut::<SimClock>().elapsed += dt;

        self.schedule.run(&mut self.world);

        self.terminal_status().unwrap_or(SimStatus::Running)
    }

    /// Delivers a discrete frontend command (exit, mute, music start).
    pub fn send_command(&mut self, command: GameCommand) {
        self.world.trigger(GameEvent::from(command));
    }

    /// Mutable access to the input snapshot the frontend writes each frame.
    pub fn input_mut(&mut self) -> Mut<'_, InputSnapshot> {
        self.world.resource_mut::<InputSnapshot>()
    }

    pub fn score(&self) -> u32 {
        self.world.resource::<ScoreResource>().0
    }

    fn terminal_status(&self) -> Option<SimStatus> {
        if self.world.resource::<GlobalState>().exit {
            return Some(SimStatus::Exit);
        }
        if !self.world.resource::<GameStage>().is_playing() {
            return Some(SimStatus::GameOver { score: self.score() });
        }
        None
    }
}

/// Drains non-fatal [`GameError`] events into the log so a problem inside a
/// frame is visible without unwinding the simulation.
fn error_report_system(mut errors: EventReader<GameError>) {
    for game_error in errors.read() {
        error!(%game_error, "Non-fatal error reported");
    }
}
