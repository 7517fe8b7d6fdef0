//! Tick dispatcher and message routing.
//!
//! [`ViewEngine`] owns every coordinator component and is the only type a
//! host needs. Each periodic tick advances, in order, the camera transition
//! (or orbit), the camera cycler, and the animation stepper, then feeds
//! their settled signals through the completion latch. Outbound events are
//! queued as [`Notification`]s for the host to drain.

pub mod command;

use std::path::Path;

use web_time::Instant;

pub use self::command::ViewCommand;
use crate::animation::completion::CompletionCoordinator;
use crate::animation::stepper::AnimationStepper;
use crate::camera::cycler::ViewpointCycler;
use crate::camera::framing;
use crate::camera::pose::ViewpointPose;
use crate::camera::transition::TransitionEngine;
use crate::error::VantageError;
use crate::options::Options;
use crate::scene::{BoundingSphere, Scene};

/// Event emitted toward the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Something visible changed on this tick; redraw.
    ElementsMoved,
    /// Every camera and viewpoint-bound animation stream has settled.
    AnimationSettled,
}

/// The camera and scene animation coordinator.
pub struct ViewEngine {
    options: Options,
    camera: TransitionEngine,
    cycler: ViewpointCycler,
    stepper: AnimationStepper,
    completion: CompletionCoordinator,
    notifications: Vec<Notification>,
}

impl Default for ViewEngine {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl ViewEngine {
    /// Idle coordinator with the given tunables.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            camera: TransitionEngine::new(&options.camera),
            cycler: ViewpointCycler::new(options.camera.cycle_pause()),
            stepper: AnimationStepper::new(options.animation.viewpoint_step_ceiling),
            completion: CompletionCoordinator::new(),
            notifications: Vec::new(),
            options,
        }
    }

    /// Current tunables.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the tunables. In-flight moves keep their computed duration.
    pub fn set_options(&mut self, options: Options) {
        self.camera.configure(&options.camera);
        self.cycler.set_pause(options.camera.cycle_pause());
        self.stepper
            .set_ceiling(options.animation.viewpoint_step_ceiling);
        self.options = options;
    }

    /// Apply a single option addressed as `section.field`.
    /// Returns true if the option was recognized and applied.
    pub fn set_option(
        &mut self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> bool {
        match self.options.with_field(section, field, value) {
            Ok(options) => {
                self.set_options(options);
                true
            }
            Err(e) => {
                log::debug!("option {section}.{field} not applied: {e}");
                false
            }
        }
    }

    /// Load a named options preset from `presets_dir`.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path) {
            Ok(options) => {
                log::info!("loaded options preset '{name}'");
                self.set_options(options);
                true
            }
            Err(e) => {
                log::error!("failed to load options preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset in `presets_dir`.
    /// Returns true on success.
    pub fn save_preset(&self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("saved options preset '{name}'");
                true
            }
            Err(e) => {
                log::error!("failed to save options preset '{name}': {e}");
                false
            }
        }
    }

    /// Camera transition state.
    #[must_use]
    pub fn camera(&self) -> &TransitionEngine {
        &self.camera
    }

    /// Camera tour state.
    #[must_use]
    pub fn cycler(&self) -> &ViewpointCycler {
        &self.cycler
    }

    /// Animation stream state.
    #[must_use]
    pub fn stepper(&self) -> &AnimationStepper {
        &self.stepper
    }

    /// Settled-signal latch.
    #[must_use]
    pub fn completion(&self) -> &CompletionCoordinator {
        &self.completion
    }

    /// Whether any component will do work on the next tick.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.camera.is_moving()
            || self.camera.is_orbiting()
            || self.cycler.is_enabled()
            || self.stepper.is_active()
    }

    /// Take every queued notification, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Parse and execute a textual message.
    pub fn handle_message<S: Scene + ?Sized>(
        &mut self,
        scene: &mut S,
        name: &str,
        params: &[&str],
        now: Instant,
    ) -> Result<(), VantageError> {
        let cmd = ViewCommand::from_message(name, params)?;
        self.execute(scene, cmd, now);
        Ok(())
    }

    /// Execute a command. Requests that cannot be satisfied by the current
    /// scene are ignored with a warning.
    pub fn execute<S: Scene + ?Sized>(
        &mut self,
        scene: &mut S,
        cmd: ViewCommand,
        now: Instant,
    ) {
        log::debug!("execute {}", cmd.name());
        let near_fraction = self.options.camera.near_fraction;
        let current = scene.camera_pose();

        match cmd {
            ViewCommand::OrientToPoint { center, radius } => {
                let sphere = BoundingSphere { center, radius };
                let target = framing::zoom_to_sphere(&current, sphere, near_fraction);
                self.move_to(scene, target, now);
            }
            ViewCommand::OrientToDirection(direction) => {
                let target = framing::orient_to_direction(
                    &current,
                    direction,
                    scene.bounding_sphere(),
                    near_fraction,
                );
                self.move_to(scene, target, now);
            }
            ViewCommand::MoveToMatrix(matrix) => {
                match framing::from_matrix(
                    &current,
                    matrix,
                    scene.default_fov(),
                    scene.bounding_sphere(),
                    near_fraction,
                ) {
                    Some(target) => self.move_to(scene, target, now),
                    None => log::warn!("move-to-matrix ignored: degenerate matrix"),
                }
            }
            ViewCommand::FitToScene => {
                let target = framing::zoom_to_sphere(
                    &current,
                    scene.bounding_sphere(),
                    near_fraction,
                );
                self.move_to(scene, target, now);
            }
            ViewCommand::ZoomToRegion(region) => {
                match framing::zoom_to_region(&current, region) {
                    Some(target) => self.move_to(scene, target, now),
                    None => log::warn!("zoom-to-region ignored: empty region"),
                }
            }
            ViewCommand::MoveToCamera { index } => {
                match scene.cameras().get(index).and_then(|c| c.pose) {
                    Some(target) => self.move_to(scene, target, now),
                    None => log::warn!(
                        "move-to-camera ignored: no compatible camera at index {index}"
                    ),
                }
            }
            ViewCommand::MoveToLight { index } => {
                let target = scene.lights().get(index).and_then(|light| {
                    framing::from_light(
                        &current,
                        light.position,
                        light.direction,
                        scene.bounding_sphere(),
                        near_fraction,
                    )
                });
                match target {
                    Some(target) => self.move_to(scene, target, now),
                    None => log::warn!("move-to-light ignored: no usable light at index {index}"),
                }
            }
            ViewCommand::SetOrbit { axis, enabled } => {
                self.camera.set_orbit_axis(axis, enabled);
            }
            ViewCommand::SetCycling(enable) => {
                let _ = self
                    .cycler
                    .set_cycling(enable, &mut self.camera, scene, now);
            }
            ViewCommand::CancelAll => self.cancel_all(scene),
            ViewCommand::LoadAnimationSet => {
                self.stepper
                    .load_animation_set(scene, &self.options.animation);
                if self
                    .completion
                    .animation_set_loaded(self.stepper.has_viewpoint_streams())
                {
                    log::debug!("all animation activity settled on reload");
                    self.notifications.push(Notification::AnimationSettled);
                }
            }
            ViewCommand::PlayAnimation => self.stepper.play(),
            ViewCommand::PauseAnimation => self.stepper.pause(),
            ViewCommand::StopAnimation => self.stepper.stop(),
        }
    }

    /// Stop orbiting, moving, and cycling without reporting completion.
    pub fn cancel_all<S: Scene + ?Sized>(&mut self, scene: &mut S) {
        self.camera.cancel_all();
        self.cycler.stop(scene);
        log::debug!("all camera modes cancelled");
    }

    /// Advance every component by one tick. Returns whether a redraw is
    /// needed, which holds on every tick the camera moved or an animation
    /// stream was active, even if no frame changed.
    pub fn tick<S: Scene + ?Sized>(&mut self, scene: &mut S, now: Instant) -> bool {
        let cam = self.camera.tick(scene, now);
        let mut settled = cam.finished
            && self
                .completion
                .camera_finished(self.stepper.has_viewpoint_streams());

        let _ = self.cycler.tick(&mut self.camera, scene, now);

        let streaming = self.stepper.is_active();
        let anim = self.stepper.tick(scene);
        if anim.parts_settled {
            settled |= self.completion.parts_settled();
        }

        let redraw = cam.redraw || anim.redraw || streaming;
        if redraw {
            self.notifications.push(Notification::ElementsMoved);
        }
        if settled {
            log::debug!("all animation activity settled");
            self.notifications.push(Notification::AnimationSettled);
        }
        redraw
    }

    fn move_to<S: Scene + ?Sized>(
        &mut self,
        scene: &mut S,
        target: ViewpointPose,
        now: Instant,
    ) {
        let _ = self.camera.begin_move_to(scene, target, now);
    }
}
