//! Resolution of pickups and thefts: scoring, hunger, boost activation,
//! feedback effects, and the removal/respawn pairing that keeps
//! populations constant.

use bevy_ecs::{
    entity::Entity,
    event::{EventReader, EventWriter},
    query::With,
    system::{Commands, Query, ResMut},
};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::constants::score::BOOST_MULTIPLIER;
use crate::events::{PickupEvent, TheftEvent};
use crate::systems::audio::AudioEvent;
use crate::systems::components::{Collectible, GameRng, Hunger, ItemCollider, Position, ScoreResource, SpeedBoost};
use crate::systems::effects::spawn_burst;
use crate::systems::spawn::RespawnTrigger;

/// Applies the side effects of every pickup and theft reported this frame.
///
/// Each removal is paired with exactly one respawn trigger of the same
/// kind. A collectible can surface in more than one event in a single
/// frame (a theft racing a player pickup); the handled list makes sure it
/// is only resolved once.
#[allow(clippy::too_many_arguments)]
pub fn pickup_system(
    mut commands: Commands,
    mut pickups: EventReader<PickupEvent>,
    mut thefts: EventReader<TheftEvent>,
    mut score: ResMut<ScoreResource>,
    mut hunger: ResMut<Hunger>,
    mut boost: ResMut<SpeedBoost>,
    mut rng: ResMut<GameRng>,
    items: Query<(&Collectible, &Position), With<ItemCollider>>,
    mut audio: EventWriter<AudioEvent>,
) {
    let mut handled: SmallVec<[Entity; 8]> = SmallVec::new();

    for event in pickups.read() {
        let entity = event.collectible;
        if handled.contains(&entity) {
            continue;
        }
        let Ok((collectible, position)) = items.get(entity) else {
            // Already gone; a stale event from a prior resolution.
            continue;
        };
        handled.push(entity);

        let multiplier = if boost.active() { BOOST_MULTIPLIER } else { 1 };
        let points = collectible.score_value() * multiplier;
        score.0 += points;
        hunger.add(collectible.hunger_restore());

        if let Collectible::Ring(_) = collectible {
            boost.activate();
            debug!(remaining = boost.remaining, "Speed boost activated");
        }

        trace!(
            collectible = ?entity,
            kind = ?collectible.kind(),
            points,
            new_score = score.0,
            hunger = hunger.value,
            "Collectible picked up"
        );

        audio.write(AudioEvent::Play(collectible.pickup_sound()));
        spawn_burst(&mut commands, &mut rng.0, position.0, matches!(collectible, Collectible::Golden(_)));

        commands.entity(entity).despawn();
        commands.trigger(RespawnTrigger {
            kind: collectible.kind(),
        });
    }

    for event in thefts.read() {
        let entity = event.donut;
        if handled.contains(&entity) {
            continue;
        }
        let Ok((collectible, position)) = items.get(entity) else {
            continue;
        };
        handled.push(entity);

        debug!(donut = ?entity, flamingo = ?event.flamingo, "Donut stolen by flamingo");

        audio.write(AudioEvent::Play(crate::audio::Sound::Theft));
        spawn_burst(&mut commands, &mut rng.0, position.0, false);

        commands.entity(entity).despawn();
        commands.trigger(RespawnTrigger {
            kind: collectible.kind(),
        });
    }
}
