//! HUD collaborator seam: score display, hunger meter, transient text.

/// Color bucket for the hunger meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HungerColor {
    Green,
    Yellow,
    Red,
}

impl HungerColor {
    /// Threshold mapping: green at 50% and above, yellow at 20%, red below.
    pub fn from_percent(percent: f32) -> Self {
        if percent >= 50.0 {
            HungerColor::Green
        } else if percent >= 20.0 {
            HungerColor::Yellow
        } else {
            HungerColor::Red
        }
    }
}

/// The HUD collaborator. All methods are push-only; the HUD never feeds
/// state back into the simulation.
pub trait HudSink {
    fn set_score(&mut self, score: u32);
    fn set_hunger(&mut self, percent: f32, color: HungerColor);
    /// Transient floating text shown when a speed boost activates.
    fn show_boost_text(&mut self);
    /// Final report once the game is over. The world must be rebuilt to
    /// play again; there is no in-place resume.
    fn show_game_over(&mut self, final_score: u32);
}

/// Recording sink for the headless driver and tests.
#[derive(Debug, Default)]
pub struct NullHud {
    pub score: u32,
    pub hunger_percent: f32,
    pub hunger_color: Option<HungerColor>,
    pub boost_texts: u32,
    pub game_over_score: Option<u32>,
}

impl HudSink for NullHud {
    fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    fn set_hunger(&mut self, percent: f32, color: HungerColor) {
        self.hunger_percent = percent;
        self.hunger_color = Some(color);
    }

    fn show_boost_text(&mut self) {
        self.boost_texts += 1;
    }

    fn show_game_over(&mut self, final_score: u32) {
        self.game_over_score = Some(final_score);
    }
}
