//! Timed camera transitions and continuous orbiting.
//!
//! The engine has three externally visible modes: idle, orbiting, and
//! moving toward a target pose. Starting one active mode cancels the other,
//! so the live camera only ever has a single writer.
//!
//! A move captures the live pose as its start, sizes its duration with the
//! [`DurationEstimator`], and on each tick eases the progress through the
//! configured curve before interpolating start→target. A move that runs to
//! completion reports `finished` exactly once; superseded or cancelled moves
//! never do.

use web_time::{Duration, Instant};

use super::duration::{estimate, DurationEstimator};
use super::orbit::{orbit_step, OrbitAxes, OrbitAxis};
use super::pose::ViewpointPose;
use crate::options::CameraOptions;
use crate::scene::Scene;
use crate::util::easing::EasingFunction;
use crate::util::stopwatch::Stopwatch;

/// Externally observable camera mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// Nothing is driving the camera.
    Idle,
    /// Rotating about the focus pivot every tick.
    Orbiting,
    /// Interpolating toward a target pose.
    MovingTo,
}

/// Outcome of one camera tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraTick {
    /// The live camera was written and needs a redraw.
    pub redraw: bool,
    /// A move reached its target on this tick.
    pub finished: bool,
}

/// Camera transition state machine.
#[derive(Debug, Clone)]
pub struct TransitionEngine {
    estimator: DurationEstimator,
    easing: EasingFunction,
    orbit_angle: f32,
    orbit: OrbitAxes,
    start: ViewpointPose,
    target: ViewpointPose,
    /// Runs iff a move is in flight.
    clock: Stopwatch,
    factor: f32,
    duration: Duration,
}

impl TransitionEngine {
    /// Idle engine configured from `options`.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            estimator: DurationEstimator::new(options.base_duration()),
            easing: options.easing,
            orbit_angle: options.orbit_step(),
            orbit: OrbitAxes::NONE,
            start: ViewpointPose::default(),
            target: ViewpointPose::default(),
            clock: Stopwatch::new(),
            factor: 0.0,
            duration: Duration::ZERO,
        }
    }

    /// Apply new tunables. An in-flight move keeps its computed duration.
    pub fn configure(&mut self, options: &CameraOptions) {
        self.estimator = DurationEstimator::new(options.base_duration());
        self.easing = options.easing;
        self.orbit_angle = options.orbit_step();
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        if self.clock.is_running() {
            CameraMode::MovingTo
        } else if self.orbit.is_active() {
            CameraMode::Orbiting
        } else {
            CameraMode::Idle
        }
    }

    /// Whether a move is in flight.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.clock.is_running()
    }

    /// Whether any orbit axis is enabled.
    #[must_use]
    pub fn is_orbiting(&self) -> bool {
        self.orbit.is_active()
    }

    /// Enabled orbit axes.
    #[must_use]
    pub fn orbit_axes(&self) -> OrbitAxes {
        self.orbit
    }

    /// Jump-size factor of the current (or last) move, in `[0, 1]`.
    #[must_use]
    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Duration of the current (or last) move.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Target of the current (or last) move.
    #[must_use]
    pub fn target(&self) -> &ViewpointPose {
        &self.target
    }

    /// Raw progress of the current move in `[0, 1]`; 0 when idle.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if !self.clock.is_running() {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.clock.elapsed(now).as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Start moving from the live camera pose to `target`.
    ///
    /// Cancels any orbit and silently supersedes an in-flight move.
    /// Returns the computed transition duration.
    pub fn begin_move_to<S: Scene + ?Sized>(
        &mut self,
        scene: &S,
        target: ViewpointPose,
        now: Instant,
    ) -> Duration {
        if self.orbit.is_active() {
            log::debug!("move-to cancels orbit (axes {:#05b})", self.orbit.bits());
            self.orbit = OrbitAxes::NONE;
        }

        self.start = scene.camera_pose();
        self.target = target.sanitized();
        self.factor = estimate(&self.start, &self.target);
        self.duration = self.estimator.base().mul_f32(self.factor);
        self.clock.start(now);

        log::debug!(
            "camera move begins: factor {:.3}, duration {:?}",
            self.factor,
            self.duration
        );
        self.duration
    }

    /// Enable or disable each axis in `axes`.
    ///
    /// If an orbit is active afterwards, an in-flight move is cancelled
    /// without reporting completion.
    pub fn begin_orbit(&mut self, axes: OrbitAxes, enable: bool) {
        for axis in OrbitAxis::ALL {
            if axes.contains(axis) {
                self.orbit.set(axis, enable);
            }
        }
        if self.orbit.is_active() && self.clock.is_running() {
            log::debug!("orbit supersedes in-flight camera move");
            self.clock.stop();
        }
        log::debug!("orbit axes now {:#05b}", self.orbit.bits());
    }

    /// Enable or disable a single orbit axis.
    pub fn set_orbit_axis(&mut self, axis: OrbitAxis, enable: bool) {
        let mut axes = OrbitAxes::NONE;
        axes.set(axis, true);
        self.begin_orbit(axes, enable);
    }

    /// Stop an in-flight move without reporting completion.
    pub fn cancel_move(&mut self) {
        self.clock.stop();
    }

    /// Stop every mode without reporting completion.
    pub fn cancel_all(&mut self) {
        self.orbit = OrbitAxes::NONE;
        self.clock.stop();
    }

    /// Advance the active mode and write the live camera.
    pub fn tick<S: Scene + ?Sized>(&mut self, scene: &mut S, now: Instant) -> CameraTick {
        if self.clock.is_running() {
            return self.step_move(scene, now);
        }
        if self.orbit.is_active() {
            let pose = orbit_step(&scene.camera_pose(), self.orbit, self.orbit_angle);
            scene.set_camera_pose(&pose);
            return CameraTick {
                redraw: true,
                finished: false,
            };
        }
        CameraTick::default()
    }

    fn step_move<S: Scene + ?Sized>(&mut self, scene: &mut S, now: Instant) -> CameraTick {
        let elapsed = self.clock.elapsed(now);
        if elapsed >= self.duration {
            scene.set_camera_pose(&self.target);
            self.clock.stop();
            log::debug!("camera move finished after {elapsed:?}");
            return CameraTick {
                redraw: true,
                finished: true,
            };
        }

        let u = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let pose = self.start.interpolate(&self.target, self.easing.evaluate(u));
        scene.set_camera_pose(&pose);
        CameraTick {
            redraw: true,
            finished: false,
        }
    }
}
