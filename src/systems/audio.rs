//! Sound effect dispatch.
//!
//! Gameplay systems never talk to the output device; they emit
//! [`AudioEvent`]s and this system forwards them to whatever backend was
//! plugged in at startup. Playback failures are logged and swallowed so a
//! blocked or missing device never stalls the simulation.

use bevy_ecs::{
    event::{Event, EventReader},
    resource::Resource,
    system::{NonSendMut, ResMut},
};
use tracing::{debug, warn};

use crate::audio::{AudioOutput, Sound};

/// An event for queuing audio, processed by the [`audio_system`].
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    /// Play a one-shot sound effect.
    Play(Sound),
    /// Begin background music, once.
    StartMusic,
}

/// Mutable audio flags, owned by the ECS.
#[derive(Resource, Debug, Default)]
pub struct AudioState {
    /// When set, `Play` events are dropped without touching the backend.
    pub muted: bool,
    /// Set after a failed music start so it is not retried every frame.
    pub music_failed: bool,
}

/// Wrapper around the audio backend. Backends may hold device handles that
/// are not `Send`, so this lives in the world as a non-send resource.
pub struct AudioOutputResource(pub Box<dyn AudioOutput>);

/// Drains queued [`AudioEvent`]s into the backend.
pub fn audio_system(
    mut events: EventReader<AudioEvent>,
    mut state: ResMut<AudioState>,
    mut output: NonSendMut<AudioOutputResource>,
) {
    for event in events.read() {
        match event {
            AudioEvent::Play(sound) => {
                if state.muted {
                    continue;
                }
                if let Err(error) = output.0.play(*sound) {
                    warn!(?sound, %error, "Failed to play sound");
                }
            }
            AudioEvent::StartMusic => {
                if state.music_failed {
                    continue;
                }
                match output.0.start_music() {
                    Ok(()) => debug!("Background music started"),
                    Err(error) => {
                        // Typically an autoplay block; the frontend should
                        // re-send on the next user gesture.
                        warn!(%error, "Failed to start music");
                        state.music_failed = true;
                    }
                }
            }
        }
    }
}
