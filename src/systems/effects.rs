//! Short-lived visual feedback entities: pickup bursts and the boost
//! trail. They share the per-frame tick but never feed back into gameplay.

use std::f32::consts::TAU;

use bevy_ecs::{
    entity::Entity,
    query::With,
    system::{Commands, Query, Res, ResMut},
};
use glam::Vec3;
use rand::Rng;
use smallvec::SmallVec;

use crate::constants::effects;
use crate::helpers::forward;
use crate::render::SceneKind;
use crate::systems::components::{
    DeltaTime, Fade, GameRng, Particle, PlayerControlled, Position, SpeedBoost, Visual, Yaw,
};

/// Spawns an explosion burst of particles at a pickup or theft site.
pub fn spawn_burst(commands: &mut Commands, rng: &mut impl Rng, position: Vec3, golden: bool) {
    let kind = if golden {
        SceneKind::GoldenBurstParticle
    } else {
        SceneKind::BurstParticle
    };

    // Build the whole burst before spawning; the count is small and fixed.
    let velocities: SmallVec<[Vec3; effects::BURST_PARTICLES]> = (0..effects::BURST_PARTICLES)
        .map(|_| {
            let angle = rng.random_range(0.0..TAU);
            let pitch = rng.random_range(-0.4..1.0f32);
            Vec3::new(angle.cos() * pitch.cos(), pitch.sin(), angle.sin() * pitch.cos()) * effects::BURST_SPEED
        })
        .collect();

    for velocity in velocities {
        commands.spawn((
            Position(position),
            Particle {
                velocity,
                gravity: effects::GRAVITY,
            },
            Fade {
                opacity: 1.0,
                rate: effects::BURST_FADE_RATE,
            },
            Visual(kind),
        ));
    }
}

/// Emits trail particles behind the player while the boost is active.
/// Purely a view-layer reaction keyed off the boost flag.
pub fn trail_emission_system(
    mut commands: Commands,
    boost: Res<SpeedBoost>,
    mut rng: ResMut<GameRng>,
    players: Query<(&Position, &Yaw), With<PlayerControlled>>,
) {
    if !boost.active() {
        return;
    }
    let Ok((position, yaw)) = players.single() else {
        return;
    };

    if rng.0.random_bool(crate::constants::boost::TRAIL_EMISSION_PROBABILITY) {
        let jitter = Vec3::new(
            rng.0.random_range(-0.3..0.3),
            rng.0.random_range(-0.3..0.3),
            rng.0.random_range(-0.3..0.3),
        );
        commands.spawn((
            Position(position.0 - forward(yaw.0) * 1.2 + jitter),
            Particle {
                velocity: jitter * effects::TRAIL_DRIFT_SPEED,
                gravity: 0.0,
            },
            Fade {
                opacity: 1.0,
                rate: effects::TRAIL_FADE_RATE,
            },
            Visual(SceneKind::TrailParticle),
        ));
    }
}

/// Integrates particle motion and opacity decay, despawning effects whose
/// opacity has run out.
pub fn effect_lifecycle_system(
    mut commands: Commands,
    delta_time: Res<DeltaTime>,
    mut effects: Query<(Entity, &mut Position, &mut Particle, &mut Fade)>,
) {
    let dt = delta_time.seconds;
    for (entity, mut position, mut particle, mut fade) in effects.iter_mut() {
        let gravity = particle.gravity;
        particle.velocity.y += gravity * dt;
        position.0 += particle.velocity * dt;

        fade.opacity -= fade.rate * dt;
        if fade.opacity <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}
