//! In-memory scene used by tests and the demo host.

use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::stepped::SteppedAnimation;
use super::{
    AnimationEntry, AnimationId, BoundingSphere, CameraEntry, CameraId,
    FrameStep, LightEntry, LightId, Scene,
};
use crate::camera::pose::ViewpointPose;
use crate::error::VantageError;

/// Kind of a scene camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraKind {
    /// Perspective camera carrying the full interpolable pose.
    #[default]
    Perspective,
    /// Orthographic camera; not pose-compatible with the live camera.
    Orthographic,
}

#[derive(Debug, Clone, PartialEq)]
struct SceneCamera {
    id: CameraId,
    kind: CameraKind,
    pose: ViewpointPose,
}

#[derive(Debug, Clone, PartialEq)]
struct SceneAnimation {
    id: AnimationId,
    animation: SteppedAnimation,
}

/// A flat scene: one live camera, a camera list, lights, and stepped
/// animations.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryScene {
    camera: ViewpointPose,
    bounds: BoundingSphere,
    default_fov: f32,
    cameras: Vec<SceneCamera>,
    in_use: FxHashSet<CameraId>,
    lights: Vec<LightEntry>,
    animations: Vec<SceneAnimation>,
    next_id: u32,
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new(ViewpointPose::default(), BoundingSphere::default())
    }
}

impl MemoryScene {
    /// Empty scene with the given live camera and bounds.
    #[must_use]
    pub fn new(camera: ViewpointPose, bounds: BoundingSphere) -> Self {
        Self {
            default_fov: camera.fov_y,
            camera,
            bounds,
            cameras: Vec::new(),
            in_use: FxHashSet::default(),
            lights: Vec::new(),
            animations: Vec::new(),
            next_id: 0,
        }
    }

    /// Parse a scene description from TOML.
    pub fn from_toml(content: &str) -> Result<Self, VantageError> {
        let file: SceneFile = toml::from_str(content)
            .map_err(|e| VantageError::SceneParse(e.to_string()))?;
        Ok(file.into_scene())
    }

    /// Load a scene description from a TOML file.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Set the process-wide default field of view (radians).
    pub fn set_default_fov(&mut self, fov_y: f32) {
        self.default_fov = fov_y;
    }

    /// Replace the scene bounds.
    pub fn set_bounds(&mut self, bounds: BoundingSphere) {
        self.bounds = bounds;
    }

    /// Append a camera.
    pub fn add_camera(&mut self, kind: CameraKind, pose: ViewpointPose) -> CameraId {
        let id = CameraId(self.next_id());
        self.cameras.push(SceneCamera {
            id,
            kind,
            pose: pose.sanitized(),
        });
        id
    }

    /// Remove a camera. Returns whether it existed.
    pub fn remove_camera(&mut self, id: CameraId) -> bool {
        let before = self.cameras.len();
        self.cameras.retain(|c| c.id != id);
        let _ = self.in_use.remove(&id);
        self.cameras.len() != before
    }

    /// Whether a camera's "in use" marker is set.
    #[must_use]
    pub fn is_camera_in_use(&self, id: CameraId) -> bool {
        self.in_use.contains(&id)
    }

    /// Append a light.
    pub fn add_light(&mut self, position: glam::Vec3, direction: glam::Vec3) -> LightId {
        let id = LightId(self.next_id());
        self.lights.push(LightEntry {
            id,
            position,
            direction,
        });
        id
    }

    /// Append an animation object.
    pub fn add_animation(&mut self, animation: SteppedAnimation) -> AnimationId {
        let id = AnimationId(self.next_id());
        self.animations.push(SceneAnimation { id, animation });
        id
    }

    /// Remove an animation object. Returns whether it existed.
    pub fn remove_animation(&mut self, id: AnimationId) -> bool {
        let before = self.animations.len();
        self.animations.retain(|a| a.id != id);
        self.animations.len() != before
    }

    /// Look up an animation object.
    #[must_use]
    pub fn animation(&self, id: AnimationId) -> Option<&SteppedAnimation> {
        self.animations
            .iter()
            .find(|a| a.id == id)
            .map(|a| &a.animation)
    }
}

impl Scene for MemoryScene {
    fn camera_pose(&self) -> ViewpointPose {
        self.camera
    }

    fn set_camera_pose(&mut self, pose: &ViewpointPose) {
        self.camera = *pose;
    }

    fn bounding_sphere(&self) -> BoundingSphere {
        self.bounds
    }

    fn cameras(&self) -> Vec<CameraEntry> {
        self.cameras
            .iter()
            .map(|c| CameraEntry {
                id: c.id,
                pose: (c.kind == CameraKind::Perspective).then_some(c.pose),
                in_use: self.in_use.contains(&c.id),
            })
            .collect()
    }

    fn set_camera_in_use(&mut self, id: CameraId, in_use: bool) {
        if !self.cameras.iter().any(|c| c.id == id) {
            return;
        }
        if in_use {
            let _ = self.in_use.insert(id);
        } else {
            let _ = self.in_use.remove(&id);
        }
    }

    fn lights(&self) -> Vec<LightEntry> {
        self.lights.clone()
    }

    fn frame_animations(&self) -> Vec<AnimationEntry> {
        self.animations
            .iter()
            .map(|a| AnimationEntry {
                id: a.id,
                name: a.animation.name.clone(),
            })
            .collect()
    }

    fn step_animation(&mut self, id: AnimationId, step: u32) -> Option<FrameStep> {
        let entry = self.animations.iter_mut().find(|a| a.id == id)?;
        let changed = entry.animation.set_frame(step);
        Some(FrameStep {
            changed,
            running: entry.animation.is_running(),
        })
    }

    fn default_fov(&self) -> f32 {
        self.default_fov
    }
}

// ── TOML description ────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SceneFile {
    camera: ViewpointPose,
    bounds: BoundingSphere,
    default_fov_degrees: Option<f32>,
    cameras: Vec<CameraSpec>,
    lights: Vec<LightSpec>,
    animations: Vec<SteppedAnimation>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CameraSpec {
    kind: CameraKind,
    pose: ViewpointPose,
    in_use: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LightSpec {
    position: glam::Vec3,
    direction: glam::Vec3,
}

impl SceneFile {
    fn into_scene(self) -> MemoryScene {
        let mut scene = MemoryScene::new(self.camera.sanitized(), self.bounds);
        if let Some(deg) = self.default_fov_degrees {
            scene.set_default_fov(deg.to_radians());
        }
        for spec in self.cameras {
            let id = scene.add_camera(spec.kind, spec.pose);
            if spec.in_use {
                scene.set_camera_in_use(id, true);
            }
        }
        for light in self.lights {
            let _ = scene.add_light(light.position, light.direction);
        }
        for animation in self.animations {
            let _ = scene.add_animation(animation);
        }
        scene
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;

    #[test]
    fn orthographic_cameras_have_no_pose() {
        let mut scene = MemoryScene::default();
        let persp = scene.add_camera(CameraKind::Perspective, ViewpointPose::default());
        let ortho = scene.add_camera(CameraKind::Orthographic, ViewpointPose::default());
        let cams = scene.cameras();
        assert_eq!(cams.len(), 2);
        assert_eq!(cams[0].id, persp);
        assert!(cams[0].is_eligible());
        assert_eq!(cams[1].id, ortho);
        assert!(!cams[1].is_eligible());
    }

    #[test]
    fn in_use_marker_round_trips() {
        let mut scene = MemoryScene::default();
        let id = scene.add_camera(CameraKind::Perspective, ViewpointPose::default());
        scene.set_camera_in_use(id, true);
        assert!(scene.is_camera_in_use(id));
        assert!(!scene.cameras()[0].is_eligible());
        scene.set_camera_in_use(id, false);
        assert!(!scene.is_camera_in_use(id));

        // Unknown ids are ignored
        scene.set_camera_in_use(CameraId(99), true);
        assert!(!scene.is_camera_in_use(CameraId(99)));
    }

    #[test]
    fn removed_animation_steps_to_none() {
        let mut scene = MemoryScene::default();
        let id = scene.add_animation(SteppedAnimation::new("a", 3));
        assert_eq!(
            scene.step_animation(id, 1),
            Some(FrameStep {
                changed: true,
                running: true
            })
        );
        assert!(scene.remove_animation(id));
        assert_eq!(scene.step_animation(id, 2), None);
    }

    #[test]
    fn parses_scene_description() {
        let scene = MemoryScene::from_toml(
            r#"
default_fov_degrees = 50.0

[camera]
position = [0.0, 0.0, 20.0]
orientation = [0.0, 0.0, 0.0, 1.0]

[bounds]
center = [1.0, 0.0, 0.0]
radius = 5.0

[[cameras]]
pose = { position = [10.0, 0.0, 0.0], orientation = [0.0, 0.0, 0.0, 1.0] }

[[cameras]]
kind = "orthographic"
in_use = false

[[lights]]
position = [0.0, 10.0, 0.0]
direction = [0.0, -1.0, 0.0]

[[animations]]
name = "ViewStateAnimation"
frame_count = 30
"#,
        )
        .unwrap();

        assert!((scene.default_fov() - 50.0_f32.to_radians()).abs() < 1e-6);
        assert_eq!(scene.camera_pose().position, Vec3::new(0.0, 0.0, 20.0));
        assert_eq!(scene.camera_pose().orientation, Quat::IDENTITY);
        assert_eq!(scene.bounding_sphere().radius, 5.0);
        assert_eq!(scene.cameras().len(), 2);
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.frame_animations()[0].name, "ViewStateAnimation");
    }

    #[test]
    fn bad_scene_description_is_a_scene_error() {
        let err = MemoryScene::from_toml("cameras = 3").unwrap_err();
        assert!(matches!(err, VantageError::SceneParse(_)));
    }

    #[test]
    fn bundled_tour_scene_parses() {
        let scene =
            MemoryScene::from_toml(include_str!("../../assets/scenes/tour.toml")).unwrap();
        let cams = scene.cameras();
        assert_eq!(cams.len(), 3);
        assert!(cams[0].is_eligible());
        assert!(!cams[1].is_eligible());
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.frame_animations().len(), 2);
        assert!(scene.camera_pose().is_valid());
    }
}
