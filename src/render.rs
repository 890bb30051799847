//! Renderer / scene-graph collaborator seam.
//!
//! The simulation treats rendering as a black box: it creates named scene
//! objects, pushes poses and opacities at the end of every tick, and hands
//! over a camera pose. Model loading is asynchronous inside the renderer;
//! until (or unless) a model resolves, each object is a colored primitive
//! placeholder.

use glam::Vec3;

use crate::asset::{LoadState, ModelAsset};

/// Opaque handle to an object in the external scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneId(pub u64);

/// What an object in the scene represents, so the renderer can pick a
/// model asset and a placeholder primitive for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    Pigeon,
    Donut,
    GoldenDonut,
    SpeedRing,
    Flamingo,
    Terrain,
    BurstParticle,
    GoldenBurstParticle,
    TrailParticle,
}

impl SceneKind {
    /// The model asset backing this kind of object, if any. Particles are
    /// always primitives.
    pub fn model(self) -> Option<ModelAsset> {
        match self {
            SceneKind::Pigeon => Some(ModelAsset::Pigeon),
            SceneKind::Donut => Some(ModelAsset::Donut),
            SceneKind::GoldenDonut => Some(ModelAsset::GoldenDonut),
            SceneKind::SpeedRing => Some(ModelAsset::SpeedRing),
            SceneKind::Flamingo => Some(ModelAsset::Flamingo),
            SceneKind::Terrain => Some(ModelAsset::Terrain),
            SceneKind::BurstParticle | SceneKind::GoldenBurstParticle | SceneKind::TrailParticle => None,
        }
    }
}

/// Chase-camera pose handed to the renderer once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
    /// View-layer reaction to the speed boost: widen the field of view.
    pub fov_wide: bool,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 8.0, -10.0),
            look_at: Vec3::ZERO,
            fov_wide: false,
        }
    }
}

/// The renderer collaborator.
pub trait SceneRenderer {
    /// Creates a scene object, immediately visible as a placeholder. Model
    /// resolution happens asynchronously inside the renderer.
    fn create_object(&mut self, kind: SceneKind) -> SceneId;

    fn remove_object(&mut self, id: SceneId);

    fn set_pose(&mut self, id: SceneId, position: Vec3, yaw: f32, pitch: f32, roll: f32);

    fn set_opacity(&mut self, id: SceneId, opacity: f32);

    fn set_camera(&mut self, camera: &CameraPose);

    /// Polls the load state of a model asset. Must never block.
    fn asset_state(&self, asset: ModelAsset) -> LoadState;
}

/// Non-send resource wrapper for the renderer collaborator.
///
/// Scene-graph handles are main-thread affine in every real backend, so the
/// trait object is stored as a non-send resource, mirroring how the rest of
/// the collaborators are held.
pub struct RendererResource(pub Box<dyn SceneRenderer>);

/// Renderer that records object counts and otherwise does nothing. Used by
/// the headless driver and the test suite.
#[derive(Debug, Default)]
pub struct NullRenderer {
    next_id: u64,
    pub live_objects: u64,
    pub camera: CameraPose,
}

impl SceneRenderer for NullRenderer {
    fn create_object(&mut self, _kind: SceneKind) -> SceneId {
        self.next_id += 1;
        self.live_objects += 1;
        SceneId(self.next_id)
    }

    fn remove_object(&mut self, _id: SceneId) {
        self.live_objects = self.live_objects.saturating_sub(1);
    }

    fn set_pose(&mut self, _id: SceneId, _position: Vec3, _yaw: f32, _pitch: f32, _roll: f32) {}

    fn set_opacity(&mut self, _id: SceneId, _opacity: f32) {}

    fn set_camera(&mut self, camera: &CameraPose) {
        self.camera = *camera;
    }

    fn asset_state(&self, _asset: ModelAsset) -> LoadState {
        // Headless: nothing ever resolves, everything stays a placeholder.
        LoadState::Pending
    }
}
