//! Audio collaborator seam.
//!
//! Two fire-and-forget operations: one-shot effects and a looping music
//! playlist. Failures (autoplay policy, missing device) are returned to the
//! audio system, which logs and swallows them; they never reach gameplay.

use strum_macros::Display;

use crate::error::AudioError;

/// One-shot sound effects the simulation can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Sound {
    Pickup,
    GoldenPickup,
    Boost,
    Theft,
    GameOver,
}

/// The audio output collaborator.
pub trait AudioOutput {
    fn play(&mut self, sound: Sound) -> Result<(), AudioError>;

    /// Starts the looping background playlist. Called once per explicit
    /// user gesture; implementations should not retry internally.
    fn start_music(&mut self) -> Result<(), AudioError>;
}

/// Silent output for the headless driver and tests.
#[derive(Debug, Default)]
pub struct NullAudio {
    pub played: Vec<Sound>,
    pub music_started: bool,
}

impl AudioOutput for NullAudio {
    fn play(&mut self, sound: Sound) -> Result<(), AudioError> {
        self.played.push(sound);
        Ok(())
    }

    fn start_music(&mut self) -> Result<(), AudioError> {
        self.music_started = true;
        Ok(())
    }
}
