//! Player-to-collectible proximity detection.

use bevy_ecs::entity::Entity;
use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::Query;
use tracing::trace;

use crate::events::PickupEvent;
use crate::systems::components::{Collider, ItemCollider, PlayerCollider, Position};

/// Tests the player against every live collectible once per frame and
/// emits a `PickupEvent` for each one within pickup range.
///
/// Several collectibles can be in range in the same frame; an event fires
/// for each, with no priority between kinds. Removal happens later in the
/// pickup system, so iteration here never observes a mutating collection.
pub fn collision_system(
    players: Query<&Position, With<PlayerCollider>>,
    items: Query<(Entity, &Position, &Collider), With<ItemCollider>>,
    mut pickups: EventWriter<PickupEvent>,
) {
    for player_pos in players.iter() {
        for (entity, item_pos, collider) in items.iter() {
            let distance = player_pos.0.distance(item_pos.0);
            if distance < collider.radius {
                trace!(collectible = ?entity, distance, "Collectible within pickup range");
                pickups.write(PickupEvent { collectible: entity });
            }
        }
    }
}
