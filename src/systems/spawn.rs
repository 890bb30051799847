//! The entity pool: randomized spawning, constant-population respawns, and
//! the idle float/spin animation of collectibles.

use std::f32::consts::TAU;

use bevy_ecs::{
    event::Event,
    observer::Trigger,
    system::{Commands, Query, Res, ResMut},
};
use glam::Vec3;
use rand::Rng;
use tracing::debug;

use crate::bounds::WorldBounds;
use crate::constants::{collider::PICKUP_RADIUS, spawn};
use crate::systems::components::{
    Collectible, CollectibleBundle, CollectibleKind, Collider, FloatAnim, GameRng, ItemCollider, Position, RingAnim, SimClock,
    Visual, Yaw,
};

/// Fired whenever a collectible is removed, so the pool spawns exactly one
/// replacement of the same kind. This pairing is what keeps populations
/// constant and the world feeling infinite.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RespawnTrigger {
    pub kind: CollectibleKind,
}

/// Samples a spawn position within the configured fraction of the bounds
/// rectangle and the kind's height band.
pub fn random_spawn_point(bounds: &WorldBounds, kind: CollectibleKind, rng: &mut impl Rng) -> Vec3 {
    let (min_h, max_h) = match kind {
        CollectibleKind::Donut | CollectibleKind::GoldenDonut => spawn::DONUT_HEIGHT,
        CollectibleKind::SpeedRing => spawn::RING_HEIGHT,
    };

    let half_w = bounds.width() * 0.5 * spawn::AREA_FRACTION;
    let half_d = bounds.depth() * 0.5 * spawn::AREA_FRACTION;
    let center_x = (bounds.min_x + bounds.max_x) * 0.5;
    let center_z = (bounds.min_z + bounds.max_z) * 0.5;

    Vec3::new(
        center_x + rng.random_range(-half_w..half_w),
        rng.random_range(min_h..max_h),
        center_z + rng.random_range(-half_d..half_d),
    )
}

/// Builds a freshly randomized collectible of the given kind.
pub fn make_collectible(bounds: &WorldBounds, kind: CollectibleKind, rng: &mut impl Rng) -> CollectibleBundle {
    let position = random_spawn_point(bounds, kind, rng);
    let phase = rng.random_range(0.0..TAU);

    let collectible = match kind {
        CollectibleKind::Donut => Collectible::Donut(FloatAnim {
            phase,
            spin_speed: rng.random_range(spawn::SPIN_SPEED.0..spawn::SPIN_SPEED.1),
            base_height: position.y,
        }),
        CollectibleKind::GoldenDonut => Collectible::Golden(FloatAnim {
            phase,
            spin_speed: rng.random_range(spawn::SPIN_SPEED.0..spawn::SPIN_SPEED.1),
            base_height: position.y,
        }),
        // Rings face the world center so the player flies through them.
        CollectibleKind::SpeedRing => Collectible::Ring(RingAnim {
            phase,
            base_height: position.y,
            facing: position.x.atan2(position.z),
        }),
    };

    let visual = Visual(collectible.scene_kind());
    CollectibleBundle {
        collectible,
        position: Position(position),
        yaw: Yaw(phase),
        collider: Collider { radius: PICKUP_RADIUS },
        item_collider: ItemCollider,
        visual,
    }
}

/// Observer spawning one replacement collectible per removal.
pub fn respawn_observer(
    trigger: Trigger<RespawnTrigger>,
    mut commands: Commands,
    bounds: Res<WorldBounds>,
    mut rng: ResMut<GameRng>,
) {
    let kind = trigger.kind;
    let bundle = make_collectible(&bounds, kind, &mut rng.0);
    let entity = commands.spawn(bundle).id();
    debug!(?kind, entity = ?entity, "Respawned collectible");
}

/// Drives the idle float/spin animation of every collectible as a closed
/// form of the sim clock and the entity's stored phase, so the motion is
/// periodic with no incremental drift.
pub fn idle_animation_system(clock: Res<SimClock>, mut items: Query<(&Collectible, &mut Position, &mut Yaw)>) {
    let t = clock.elapsed;
    for (collectible, mut position, mut yaw) in items.iter_mut() {
        match collectible {
            Collectible::Donut(anim) | Collectible::Golden(anim) => {
                position.0.y = anim.base_height + (t * spawn::FLOAT_FREQUENCY + anim.phase).sin() * spawn::FLOAT_AMPLITUDE;
                yaw.0 = anim.phase + t * anim.spin_speed;
            }
            Collectible::Ring(anim) => {
                position.0.y = anim.base_height + (t * spawn::FLOAT_FREQUENCY + anim.phase).sin() * spawn::FLOAT_AMPLITUDE;
                yaw.0 = anim.facing;
            }
        }
    }
}
