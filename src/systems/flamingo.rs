//! Flamingo pursuit-and-theft AI.
//!
//! Each agent remembers one target donut, steers toward it with a bounded
//! turn rate, and advances along its own facing, producing the curved
//! pursuit paths the game wants. Targets are generational entity ids, so a
//! donut removed by the player or another agent is detected as stale on
//! the next read and simply re-resolved; no global invalidation sweep is
//! needed.

use bevy_ecs::{
    entity::Entity,
    event::EventWriter,
    query::{With, Without},
    system::{Query, Res},
};
use glam::Vec3;
use tracing::trace;

use crate::bounds::WorldBounds;
use crate::constants::{collider::EAT_RADIUS, spawn};
use crate::events::TheftEvent;
use crate::helpers::{forward, turn_towards};
use crate::systems::components::{Collectible, DeltaTime, Flamingo, ItemCollider, Position, Yaw};

/// Linear scan for the closest plain donut. First encountered minimum wins
/// on ties, which is stable and good enough for pursuit.
fn find_nearest(
    donuts: &Query<(Entity, &Position, &Collectible), With<ItemCollider>>,
    from: Vec3,
) -> Option<Entity> {
    let mut best: Option<(Entity, f32)> = None;
    for (entity, position, collectible) in donuts.iter() {
        if !collectible.is_plain_donut() {
            continue;
        }
        let distance = from.distance_squared(position.0);
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((entity, distance));
        }
    }
    best.map(|(entity, _)| entity)
}

/// One AI step per flamingo per frame: validate or re-acquire the target,
/// steer and advance, and fire a theft once within eat range.
pub fn flamingo_ai_system(
    delta_time: Res<DeltaTime>,
    bounds: Res<WorldBounds>,
    donuts: Query<(Entity, &Position, &Collectible), With<ItemCollider>>,
    mut flamingos: Query<(Entity, &mut Flamingo, &mut Position, &mut Yaw), Without<ItemCollider>>,
    mut thefts: EventWriter<TheftEvent>,
) {
    let dt = delta_time.seconds;

    for (agent, mut flamingo, mut position, mut yaw) in flamingos.iter_mut() {
        // A remembered target may have been eaten by the player or another
        // flamingo since last frame; drop it before dereferencing.
        let mut target = flamingo
            .target
            .filter(|&e| donuts.get(e).is_ok_and(|(_, _, c)| c.is_plain_donut()));

        if target.is_none() {
            target = find_nearest(&donuts, position.0);
            if let Some(entity) = target {
                trace!(flamingo = ?agent, target = ?entity, "Flamingo acquired target");
            }
        }

        match target {
            None => {
                // No donuts anywhere: wander so the agent stays visibly
                // alive instead of freezing in place.
                yaw.0 += spawn::FLAMINGO_WANDER_YAW_RATE * dt;
                position.0 += forward(yaw.0) * flamingo.speed * dt;
            }
            Some(entity) => {
                let Ok((_, donut_pos, _)) = donuts.get(entity) else {
                    flamingo.target = None;
                    continue;
                };

                let to_target = donut_pos.0 - position.0;
                let desired_yaw = to_target.x.atan2(to_target.z);
                yaw.0 = turn_towards(yaw.0, desired_yaw, spawn::FLAMINGO_TURN_RATE * dt);

                // Advance along the agent's own facing, not toward the
                // target; the curve is intentional.
                position.0 += forward(yaw.0) * flamingo.speed * dt;

                if position.0.distance(donut_pos.0) < EAT_RADIUS {
                    thefts.write(TheftEvent {
                        flamingo: agent,
                        donut: entity,
                    });
                    target = None;
                }
            }
        }

        position.0 = bounds.clamp(position.0);
        flamingo.target = target;
    }
}
