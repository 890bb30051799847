//! Pushes simulation state out to the HUD collaborator each frame.

use bevy_ecs::change_detection::DetectChanges;
use bevy_ecs::system::{Local, NonSendMut, Res};

use crate::hud::{HudSink, HungerColor};
use crate::systems::components::{GameStage, Hunger, ScoreResource, SpeedBoost};

/// Non-send resource wrapper for the HUD collaborator.
pub struct HudResource(pub Box<dyn HudSink>);

/// Mirrors score, hunger and transient notices into the HUD.
///
/// The HUD is push-only; nothing here reads back into gameplay. Edge
/// detection for the boost text and the game-over screen lives in locals so
/// each fires once per activation/transition.
pub fn hud_system(
    score: Res<ScoreResource>,
    hunger: Res<Hunger>,
    boost: Res<SpeedBoost>,
    stage: Res<GameStage>,
    mut boost_was_active: Local<bool>,
    mut game_over_shown: Local<bool>,
    mut hud: NonSendMut<HudResource>,
) {
    if score.is_changed() {
        hud.0.set_score(score.0);
    }

    let percent = hunger.percent();
    hud.0.set_hunger(percent, HungerColor::from_percent(percent));

    let boost_active = boost.active();
    if boost_active && !*boost_was_active {
        hud.0.show_boost_text();
    }
    *boost_was_active = boost_active;

    if !stage.is_playing() && !*game_over_shown {
        hud.0.show_game_over(score.0);
        *game_over_shown = true;
    }
}
