//! The hunger/survival state machine.

use bevy_ecs::{
    event::EventWriter,
    system::{Res, ResMut},
};
use tracing::info;

use crate::audio::Sound;
use crate::constants::hunger::DEPLETION_RATE;
use crate::systems::audio::AudioEvent;
use crate::systems::components::{DeltaTime, GameStage, Hunger, ScoreResource};

/// Depletes hunger at the fixed per-second rate and fires the one-way
/// `Playing -> GameOver` transition the instant the meter reaches zero.
///
/// The transition is structural, not advisory: gameplay sets are gated on
/// `GameStage::Playing` and the driver stops re-arming the loop once the
/// tick reports a terminal status, so no further depletion, movement or AI
/// can run.
pub fn hunger_system(
    delta_time: Res<DeltaTime>,
    mut hunger: ResMut<Hunger>,
    mut stage: ResMut<GameStage>,
    score: Res<ScoreResource>,
    mut audio: EventWriter<AudioEvent>,
) {
    if !stage.is_playing() {
        return;
    }

    hunger.add(-DEPLETION_RATE * delta_time.seconds);

    if hunger.is_depleted() {
        *stage = GameStage::GameOver;
        info!(final_score = score.0, "Hunger depleted, game over");
        audio.write(AudioEvent::Play(Sound::GameOver));
    }
}
