use bevy_ecs::{bundle::Bundle, component::Component, entity::Entity, resource::Resource};
use glam::Vec3;
use rand::rngs::SmallRng;
use strum_macros::EnumIter;

use crate::audio::Sound;
use crate::constants::{boost, hunger as hunger_consts, score};
use crate::render::SceneKind;

/// A tag component for the entity controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// World-space position.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec3);

/// Horizontal facing angle in radians. Yaw 0 faces +Z, positive is
/// counter-clockwise.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Yaw(pub f32);

/// Cosmetic pitch/roll, derived each frame from motion. Never simulated.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Attitude {
    pub pitch: f32,
    pub roll: f32,
}

/// Current forward speed, exponentially smoothed toward the cruise target.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FlightSpeed {
    pub current: f32,
}

/// Vertical velocity with air damping; the lift half of the flight model.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct VerticalVelocity(pub f32);

/// Randomized idle-animation state for floating collectibles, fixed at
/// spawn time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatAnim {
    /// Phase offset so entities never bob in lockstep.
    pub phase: f32,
    /// Spin rate around the vertical axis, radians per second.
    pub spin_speed: f32,
    /// Height the bob oscillates around.
    pub base_height: f32,
}

/// Idle-animation state for speed rings, which face the world center
/// instead of spinning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingAnim {
    pub phase: f32,
    pub base_height: f32,
    /// Fixed yaw facing the world origin, set at spawn.
    pub facing: f32,
}

/// The kind tag used for respawn triggers and population accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum CollectibleKind {
    Donut,
    GoldenDonut,
    SpeedRing,
}

/// A collectible in the world. One variant per kind, each with its own
/// fixed field set; dispatch is by sum type, not by optional-field probing.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum Collectible {
    Donut(FloatAnim),
    Golden(FloatAnim),
    Ring(RingAnim),
}

impl Collectible {
    pub fn kind(&self) -> CollectibleKind {
        match self {
            Collectible::Donut(_) => CollectibleKind::Donut,
            Collectible::Golden(_) => CollectibleKind::GoldenDonut,
            Collectible::Ring(_) => CollectibleKind::SpeedRing,
        }
    }

    /// Flamingos only ever steal regular donuts.
    pub fn is_plain_donut(&self) -> bool {
        matches!(self, Collectible::Donut(_))
    }

    /// Base score awarded on pickup, before the boost multiplier.
    pub fn score_value(&self) -> u32 {
        match self {
            Collectible::Donut(_) => score::DONUT_POINTS,
            Collectible::Golden(_) => score::GOLDEN_POINTS,
            Collectible::Ring(_) => 0,
        }
    }

    /// Hunger restored on pickup.
    pub fn hunger_restore(&self) -> f32 {
        match self {
            Collectible::Donut(_) => hunger_consts::DONUT_RESTORE,
            Collectible::Golden(_) => hunger_consts::GOLDEN_RESTORE,
            Collectible::Ring(_) => 0.0,
        }
    }

    pub fn pickup_sound(&self) -> Sound {
        match self {
            Collectible::Donut(_) => Sound::Pickup,
            Collectible::Golden(_) => Sound::GoldenPickup,
            Collectible::Ring(_) => Sound::Boost,
        }
    }

    pub fn scene_kind(&self) -> SceneKind {
        match self {
            Collectible::Donut(_) => SceneKind::Donut,
            Collectible::Golden(_) => SceneKind::GoldenDonut,
            Collectible::Ring(_) => SceneKind::SpeedRing,
        }
    }
}

/// An autonomous donut-stealing agent. Population is fixed at world init;
/// flamingos are never despawned or respawned.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Flamingo {
    /// Pursuit speed, randomized at spawn and fixed for the agent's
    /// lifetime.
    pub speed: f32,
    /// Remembered target donut. Generational ids make stale references
    /// detectable; the AI re-validates before every dereference.
    pub target: Option<Entity>,
}

/// Distance threshold below which proximity to the player counts as a
/// pickup.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub radius: f32,
}

/// Marker components for collision filtering.
#[derive(Component)]
pub struct PlayerCollider;

#[derive(Component)]
pub struct ItemCollider;

/// Short-lived visual feedback entity. Not gameplay-authoritative.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub velocity: Vec3,
    /// Downward acceleration; zero for drifting trail particles.
    pub gravity: f32,
}

/// Remaining opacity of an effect entity; despawned at zero.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub opacity: f32,
    /// Opacity lost per second.
    pub rate: f32,
}

/// What the renderer should draw for this entity. The scene-attach system
/// turns this into a live scene object.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visual(pub SceneKind);

/// Handle of this entity's object in the external scene graph.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneNode(pub crate::render::SceneId);

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub yaw: Yaw,
    pub attitude: Attitude,
    pub speed: FlightSpeed,
    pub vertical: VerticalVelocity,
    pub player_collider: PlayerCollider,
    pub visual: Visual,
}

#[derive(Bundle)]
pub struct CollectibleBundle {
    pub collectible: Collectible,
    pub position: Position,
    pub yaw: Yaw,
    pub collider: Collider,
    pub item_collider: ItemCollider,
    pub visual: Visual,
}

#[derive(Bundle)]
pub struct FlamingoBundle {
    pub flamingo: Flamingo,
    pub position: Position,
    pub yaw: Yaw,
    pub visual: Visual,
}

#[derive(Resource)]
pub struct GlobalState {
    pub exit: bool,
}

/// High-level stage of the simulation. `GameOver` is terminal: the loop
/// stops re-arming and the world must be rebuilt to play again.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStage {
    #[default]
    Playing,
    GameOver,
}

impl GameStage {
    pub fn is_playing(&self) -> bool {
        matches!(self, GameStage::Playing)
    }
}

/// Monotonically non-decreasing score. Displayed, never consulted by
/// gameplay logic.
#[derive(Resource, Debug, Default)]
pub struct ScoreResource(pub u32);

/// Elapsed real time of the current frame, the only simulation clock.
#[derive(Resource, Debug, Clone, Copy)]
pub struct DeltaTime {
    pub seconds: f32,
}

/// Total elapsed simulation time; drives closed-form idle animations.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SimClock {
    pub elapsed: f32,
}

/// The depleting survival resource.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Hunger {
    pub value: f32,
}

impl Default for Hunger {
    fn default() -> Self {
        Self {
            value: hunger_consts::MAX_HUNGER,
        }
    }
}

impl Hunger {
    /// Adds (or removes, for negative `amount`) hunger, clamped to the
    /// meter range.
    pub fn add(&mut self, amount: f32) {
        self.value = (self.value + amount).clamp(0.0, hunger_consts::MAX_HUNGER);
    }

    pub fn percent(&self) -> f32 {
        self.value / hunger_consts::MAX_HUNGER * 100.0
    }

    pub fn is_depleted(&self) -> bool {
        self.value <= 0.0
    }
}

/// The speed-boost countdown. Active exactly while `remaining > 0`.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SpeedBoost {
    pub remaining: f32,
}

impl SpeedBoost {
    /// Resets the countdown to the full duration. Re-triggering while
    /// active resets rather than stacks.
    pub fn activate(&mut self) {
        self.remaining = boost::DURATION;
    }

    pub fn active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Counts down, clamped at zero.
    pub fn tick(&mut self, delta: f32) {
        self.remaining = (self.remaining - delta).max(0.0);
    }
}

/// Seedable RNG for all gameplay randomness, so tests are deterministic.
#[derive(Resource)]
pub struct GameRng(pub SmallRng);

/// Chase-camera state, written by the camera system and pushed to the
/// renderer by the scene-sync system.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct CameraState(pub crate::render::CameraPose);
