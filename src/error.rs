//! Centralized error types for the game.
//!
//! This module defines all error types used throughout the application,
//! providing a consistent error handling approach.

use bevy_ecs::event::Event;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
/// It derives `Event` so systems can report non-fatal problems through an
/// ECS event channel instead of panicking mid-frame.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    #[error("World bounds error: {0}")]
    Bounds(#[from] BoundsError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors related to loading external 3D model assets.
///
/// Asset failures are always non-fatal: the simulation keeps running with a
/// placeholder primitive standing in for the missing model.
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset {asset}: {reason}")]
    LoadFailed { asset: String, reason: String },
}

/// Errors raised by the audio collaborator (autoplay policy, missing device).
///
/// These are swallowed by the audio system after logging; they never
/// propagate into gameplay.
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    #[error("Playback blocked: {0}")]
    PlaybackBlocked(String),

    #[error("Audio device unavailable: {0}")]
    DeviceUnavailable(String),
}

/// Errors related to deriving the playable world bounds from terrain.
#[derive(thiserror::Error, Debug)]
pub enum BoundsError {
    #[error("Terrain extents are not finite: min {min:?}, max {max:?}")]
    NonFiniteExtents { min: [f32; 3], max: [f32; 3] },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
