//! Automatic tour through the scene's cameras.
//!
//! Cycling alternates a timed move to an eligible camera with a fixed
//! pause. A camera is eligible when no viewport has claimed it and it
//! carries the full pose field set. The cycler claims the camera it is
//! showing and releases it before picking the next one.

use web_time::{Duration, Instant};

use super::transition::TransitionEngine;
use crate::scene::{CameraEntry, CameraId, Scene};
use crate::util::stopwatch::Stopwatch;

/// Index of the first eligible camera at or after `start`, wrapping around.
#[must_use]
pub fn find_next(cameras: &[CameraEntry], start: usize) -> Option<usize> {
    let n = cameras.len();
    if n == 0 {
        return None;
    }
    (0..n)
        .map(|offset| (start + offset) % n)
        .find(|&idx| cameras[idx].is_eligible())
}

/// Camera tour driven by the periodic tick.
#[derive(Debug, Clone)]
pub struct ViewpointCycler {
    enabled: bool,
    pause: Duration,
    pause_clock: Stopwatch,
    /// Index and id of the camera most recently moved to.
    last: Option<(usize, CameraId)>,
}

impl ViewpointCycler {
    /// Disabled cycler with the given pause between legs.
    #[must_use]
    pub fn new(pause: Duration) -> Self {
        Self {
            enabled: false,
            pause,
            pause_clock: Stopwatch::new(),
            last: None,
        }
    }

    /// Change the pause between legs.
    pub fn set_pause(&mut self, pause: Duration) {
        self.pause = pause;
    }

    /// Whether cycling is active.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Camera currently claimed by the tour.
    #[must_use]
    pub fn current_camera(&self) -> Option<CameraId> {
        self.last.map(|(_, id)| id)
    }

    /// Turn cycling on or off. Returns whether cycling is active afterwards.
    ///
    /// Enabling scans from the first camera; if nothing is eligible the
    /// request is ignored. Disabling cancels an in-flight move without
    /// reporting completion.
    pub fn set_cycling<S: Scene + ?Sized>(
        &mut self,
        enable: bool,
        engine: &mut TransitionEngine,
        scene: &mut S,
        now: Instant,
    ) -> bool {
        if !enable {
            if self.enabled {
                log::info!("camera cycling off");
                engine.cancel_move();
            }
            self.stop(scene);
            return false;
        }
        if self.enabled {
            return true;
        }

        self.release(scene);
        if self.begin_leg(0, engine, scene, now) {
            log::info!("camera cycling on");
            self.enabled = true;
        } else {
            log::warn!("camera cycling requested but no eligible camera");
        }
        self.enabled
    }

    /// Advance the pause timer and start the next leg when it elapses.
    /// Returns whether a new leg started.
    pub fn tick<S: Scene + ?Sized>(
        &mut self,
        engine: &mut TransitionEngine,
        scene: &mut S,
        now: Instant,
    ) -> bool {
        if !self.enabled || engine.is_moving() {
            return false;
        }
        if !self.pause_clock.is_running() {
            self.pause_clock.start(now);
        }
        if self.pause_clock.elapsed(now) < self.pause {
            return false;
        }
        self.pause_clock.stop();

        let start = self.resume_index(&scene.cameras());
        self.release(scene);
        if self.begin_leg(start, engine, scene, now) {
            true
        } else {
            log::debug!("camera cycling stopped: no further eligible camera");
            self.enabled = false;
            self.last = None;
            false
        }
    }

    /// Turn cycling off and release the claimed camera. No engine access.
    pub fn stop<S: Scene + ?Sized>(&mut self, scene: &mut S) {
        self.enabled = false;
        self.pause_clock.stop();
        self.release(scene);
        self.last = None;
    }

    /// Where the next search starts: just after the last camera, or at its
    /// old index if it has since been removed from the scene.
    fn resume_index(&self, cameras: &[CameraEntry]) -> usize {
        match self.last {
            None => 0,
            Some((old_idx, id)) => cameras
                .iter()
                .position(|c| c.id == id)
                .map_or(old_idx, |idx| idx + 1),
        }
    }

    fn release<S: Scene + ?Sized>(&self, scene: &mut S) {
        if let Some((_, id)) = self.last {
            scene.set_camera_in_use(id, false);
        }
    }

    fn begin_leg<S: Scene + ?Sized>(
        &mut self,
        start: usize,
        engine: &mut TransitionEngine,
        scene: &mut S,
        now: Instant,
    ) -> bool {
        let cameras = scene.cameras();
        let Some(idx) = find_next(&cameras, start) else {
            return false;
        };
        let entry = cameras[idx];
        let Some(pose) = entry.pose else {
            return false;
        };

        scene.set_camera_in_use(entry.id, true);
        self.last = Some((idx, entry.id));
        let duration = engine.begin_move_to(scene, pose, now);
        log::debug!(
            "cycling to camera {:?} (index {idx}) over {duration:?}",
            entry.id
        );
        true
    }
}
