//! The Entity-Component-System (ECS) module.
//!
//! This module contains all the ECS-related logic, including components,
//! systems, and resources.

pub mod audio;
pub mod boost;
pub mod collision;
pub mod components;
pub mod effects;
pub mod flamingo;
pub mod hud;
pub mod hunger;
pub mod movement;
pub mod pickup;
pub mod render;
pub mod spawn;

pub use audio::{audio_system, AudioEvent, AudioOutputResource, AudioState};
pub use boost::boost_timer_system;
pub use collision::collision_system;
pub use components::{
    Attitude, CameraState, Collectible, CollectibleBundle, CollectibleKind, Collider, DeltaTime, Fade, Flamingo,
    FlamingoBundle, FlightSpeed, FloatAnim, GameRng, GameStage, GlobalState, Hunger, ItemCollider, Particle,
    PlayerBundle, PlayerCollider, PlayerControlled, Position, RingAnim, SceneNode, ScoreResource, SimClock, SpeedBoost,
    VerticalVelocity, Visual, Yaw,
};
pub use effects::{effect_lifecycle_system, spawn_burst, trail_emission_system};
pub use flamingo::flamingo_ai_system;
pub use hud::{hud_system, HudResource};
pub use hunger::hunger_system;
pub use movement::{camera_follow_system, player_movement_system};
pub use pickup::pickup_system;
pub use render::{asset_watch_system, scene_attach_system, scene_detach_system, scene_sync_system, SceneIndex};
pub use spawn::{idle_animation_system, make_collectible, random_spawn_point, respawn_observer, RespawnTrigger};
