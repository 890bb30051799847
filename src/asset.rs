//! External 3D model asset identifiers and load-state tracking.
//!
//! Model loading is asynchronous and owned by the renderer collaborator;
//! the simulation only polls states so it can log degradations. Gameplay
//! never depends on whether a model has resolved: collision radii and
//! speeds are independent of the visual mesh, and a failed load leaves a
//! placeholder primitive standing in.

use std::collections::HashMap;

use bevy_ecs::resource::Resource;
use strum_macros::{Display, EnumIter};

/// Identifier of an external 3D model asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ModelAsset {
    Pigeon,
    Donut,
    GoldenDonut,
    SpeedRing,
    Flamingo,
    Terrain,
}

/// Where an asynchronous model load currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Load in flight; a placeholder primitive is rendered meanwhile.
    #[default]
    Pending,
    /// Model resolved and swapped in for the placeholder.
    Ready,
    /// Load failed; the placeholder stays. Non-fatal.
    Failed,
}

/// Tracks the last observed load state per asset so transitions are logged
/// exactly once.
#[derive(Resource, Debug, Default)]
pub struct AssetTracker {
    states: HashMap<ModelAsset, LoadState>,
}

impl AssetTracker {
    /// Records a polled state. Returns `Some(state)` when it changed since
    /// the last poll, `None` otherwise.
    pub fn observe(&mut self, asset: ModelAsset, state: LoadState) -> Option<LoadState> {
        let previous = self.states.insert(asset, state);
        (previous != Some(state)).then_some(state)
    }

    pub fn state(&self, asset: ModelAsset) -> LoadState {
        self.states.get(&asset).copied().unwrap_or_default()
    }
}
