//! The host scene as seen by the coordinator.
//!
//! The coordinator never walks a scene graph itself. Everything it needs
//! (live camera pose, scene bounds, camera and light lists, frame-steppable
//! animation objects) is reached through the narrow [`Scene`] trait. Collections are returned as typed snapshots; ids stay
//! valid across snapshots so a caller can notice entries that disappeared.

pub mod memory;
pub mod stepped;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::pose::ViewpointPose;

/// Stable identifier of a camera in the scene.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CameraId(pub u32);

/// Stable identifier of a light in the scene.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LightId(pub u32);

/// Stable identifier of a frame-steppable animation object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct AnimationId(pub u32);

/// Sphere enclosing the scene contents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingSphere {
    /// Sphere center in world space.
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
}

impl Default for BoundingSphere {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: 1.0,
        }
    }
}

/// One camera of the scene's camera collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraEntry {
    /// Camera id.
    pub id: CameraId,
    /// Interpolable pose, or `None` when the camera is of a kind that does
    /// not carry the full pose field set.
    pub pose: Option<ViewpointPose>,
    /// Whether a viewport (or the cycler) has claimed this camera.
    pub in_use: bool,
}

impl CameraEntry {
    /// Whether a cycler may move to this camera.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        !self.in_use && self.pose.is_some()
    }
}

/// One light of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightEntry {
    /// Light id.
    pub id: LightId,
    /// Light position in world space.
    pub position: Vec3,
    /// Direction the light shines in.
    pub direction: Vec3,
}

/// One frame-steppable animation object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationEntry {
    /// Animation id.
    pub id: AnimationId,
    /// Object name, used to recognize viewpoint-bound animations.
    pub name: String,
}

/// Result of driving an animation object to a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStep {
    /// Whether the displayed frame changed.
    pub changed: bool,
    /// Whether the object still reports itself as running.
    pub running: bool,
}

/// Read/write contract between the coordinator and the host scene.
pub trait Scene {
    /// Current pose of the live camera.
    fn camera_pose(&self) -> ViewpointPose;

    /// Overwrite the live camera pose.
    fn set_camera_pose(&mut self, pose: &ViewpointPose);

    /// Sphere enclosing everything in the scene.
    fn bounding_sphere(&self) -> BoundingSphere;

    /// Snapshot of the scene's camera collection, in scene order.
    fn cameras(&self) -> Vec<CameraEntry>;

    /// Set or clear a camera's "in use" marker. Unknown ids are ignored.
    fn set_camera_in_use(&mut self, id: CameraId, in_use: bool);

    /// Snapshot of the scene's lights.
    fn lights(&self) -> Vec<LightEntry>;

    /// Snapshot of every frame-steppable animation object.
    fn frame_animations(&self) -> Vec<AnimationEntry>;

    /// Drive an animation object to `step`. `None` if the object no longer
    /// exists.
    fn step_animation(&mut self, id: AnimationId, step: u32) -> Option<FrameStep>;

    /// Process-wide default vertical field of view, in radians.
    fn default_fov(&self) -> f32;
}
