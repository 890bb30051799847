//! Bridge between the ECS and the scene-graph collaborator.
//!
//! Entities declare what they look like with a [`Visual`] component; these
//! systems create the backing scene objects, push poses and opacities every
//! frame, and tear objects down when the entity goes away. Despawned
//! entities can no longer be queried for their handle, so a side index maps
//! entities to scene ids for the teardown path.

use std::collections::HashMap;

use bevy_ecs::{
    entity::Entity,
    query::Without,
    removal_detection::RemovedComponents,
    resource::Resource,
    system::{Commands, NonSend, NonSendMut, Query, Res, ResMut},
};
use strum::IntoEnumIterator;
use tracing::{debug, warn};

use crate::asset::{AssetTracker, LoadState, ModelAsset};
use crate::render::{RendererResource, SceneId};
use crate::systems::components::{Attitude, CameraState, Fade, Position, SceneNode, Visual, Yaw};

/// Entity-to-scene-object mapping, maintained by attach/detach below.
#[derive(Resource, Debug, Default)]
pub struct SceneIndex(pub HashMap<Entity, SceneId>);

/// Creates a scene object for every entity that has a [`Visual`] but no
/// [`SceneNode`] yet (i.e. everything spawned since last frame).
pub fn scene_attach_system(
    mut commands: Commands,
    mut index: ResMut<SceneIndex>,
    mut renderer: NonSendMut<RendererResource>,
    pending: Query<(Entity, &Visual), Without<SceneNode>>,
) {
    for (entity, visual) in pending.iter() {
        let id = renderer.0.create_object(visual.0);
        index.0.insert(entity, id);
        commands.entity(entity).insert(SceneNode(id));
    }
}

/// Pushes per-object poses and the camera into the renderer. Runs after all
/// gameplay mutation for the frame.
pub fn scene_sync_system(
    camera: Res<CameraState>,
    mut renderer: NonSendMut<RendererResource>,
    objects: Query<(&SceneNode, &Position, Option<&Yaw>, Option<&Attitude>, Option<&Fade>)>,
) {
    for (node, position, yaw, attitude, fade) in objects.iter() {
        let yaw = yaw.map_or(0.0, |y| y.0);
        let (pitch, roll) = attitude.map_or((0.0, 0.0), |a| (a.pitch, a.roll));
        renderer.0.set_pose(node.0, position.0, yaw, pitch, roll);
        if let Some(fade) = fade {
            renderer.0.set_opacity(node.0, fade.opacity.max(0.0));
        }
    }

    renderer.0.set_camera(&camera.0);
}

/// Removes scene objects whose entity despawned this frame.
pub fn scene_detach_system(
    mut removed: RemovedComponents<SceneNode>,
    mut index: ResMut<SceneIndex>,
    mut renderer: NonSendMut<RendererResource>,
) {
    for entity in removed.read() {
        if let Some(id) = index.0.remove(&entity) {
            renderer.0.remove_object(id);
        }
    }
}

/// Polls model load states and logs each transition once. A failed load is
/// a cosmetic degradation, never an error: the placeholder primitive stays.
pub fn asset_watch_system(mut tracker: ResMut<AssetTracker>, renderer: NonSend<RendererResource>) {
    for asset in ModelAsset::iter() {
        let state = renderer.0.asset_state(asset);
        match tracker.observe(asset, state) {
            Some(LoadState::Ready) => debug!(%asset, "Model loaded"),
            Some(LoadState::Failed) => warn!(%asset, "Model failed to load, keeping placeholder"),
            _ => {}
        }
    }
}
