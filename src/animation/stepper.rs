//! Frame stepping for the scene's keyframed animation objects.
//!
//! Objects are split into two disjoint streams when the animation set is
//! loaded. General streams follow a shared transport counter (play, pause,
//! stop). Viewpoint-bound streams run on their own counter from the moment
//! they are loaded, and are forced to stop once that counter passes a
//! ceiling even if the object never reports itself finished.

use crate::options::AnimationOptions;
use crate::scene::{AnimationId, Scene};

/// Outcome of one stepper tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationTick {
    /// Some object displayed a new frame.
    pub redraw: bool,
    /// Every viewpoint-bound stream stopped on this tick and the set was
    /// cleared.
    pub parts_settled: bool,
}

/// Drives the general and viewpoint-bound animation streams.
#[derive(Debug, Clone)]
pub struct AnimationStepper {
    general: Vec<AnimationId>,
    general_step: u32,
    general_running: bool,
    viewpoint: Vec<AnimationId>,
    viewpoint_step: u32,
    ceiling: u32,
}

impl AnimationStepper {
    /// Empty stepper with the given viewpoint-bound step ceiling.
    #[must_use]
    pub fn new(ceiling: u32) -> Self {
        Self {
            general: Vec::new(),
            general_step: 0,
            general_running: false,
            viewpoint: Vec::new(),
            viewpoint_step: 1,
            ceiling,
        }
    }

    /// Change the viewpoint-bound step ceiling.
    pub fn set_ceiling(&mut self, ceiling: u32) {
        self.ceiling = ceiling;
    }

    /// Snapshot the scene's animation objects and partition them by name
    /// tag. Both counters return to their initial values and the general
    /// transport stops.
    ///
    /// Objects added to the scene later are not seen until the next load.
    pub fn load_animation_set<S: Scene + ?Sized>(
        &mut self,
        scene: &S,
        options: &AnimationOptions,
    ) {
        let (viewpoint, general): (Vec<_>, Vec<_>) = scene
            .frame_animations()
            .into_iter()
            .partition(|entry| options.is_viewpoint_bound(&entry.name));

        self.general = general.into_iter().map(|e| e.id).collect();
        self.viewpoint = viewpoint.into_iter().map(|e| e.id).collect();
        self.general_step = 0;
        self.general_running = false;
        self.viewpoint_step = 1;
        self.ceiling = options.viewpoint_step_ceiling;

        log::debug!(
            "animation set loaded: {} general, {} viewpoint-bound",
            self.general.len(),
            self.viewpoint.len()
        );
    }

    /// Start the general streams from the first step.
    pub fn play(&mut self) {
        self.general_step = 1;
        self.general_running = true;
        log::info!("animation play ({} objects)", self.general.len());
    }

    /// Toggle the general transport without touching the counter.
    ///
    /// Ignored while the transport is rewound (before the first play or
    /// after a stop), so step 0 is never driven.
    pub fn pause(&mut self) {
        if self.general_step == 0 {
            log::debug!("pause ignored: animation not started");
            return;
        }
        self.general_running = !self.general_running;
        log::info!(
            "animation {} at step {}",
            if self.general_running { "resumed" } else { "paused" },
            self.general_step
        );
    }

    /// Stop the general streams and rewind the counter.
    pub fn stop(&mut self) {
        self.general_step = 0;
        self.general_running = false;
        log::info!("animation stopped");
    }

    /// Whether the general transport is running.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.general_running
    }

    /// Next step the general streams will be driven to.
    #[must_use]
    pub fn general_step(&self) -> u32 {
        self.general_step
    }

    /// Next step the viewpoint-bound streams will be driven to.
    #[must_use]
    pub fn viewpoint_step(&self) -> u32 {
        self.viewpoint_step
    }

    /// Tracked general animation objects.
    #[must_use]
    pub fn general_set(&self) -> &[AnimationId] {
        &self.general
    }

    /// Tracked viewpoint-bound animation objects.
    #[must_use]
    pub fn viewpoint_set(&self) -> &[AnimationId] {
        &self.viewpoint
    }

    /// Whether viewpoint-bound streams are still pending.
    #[must_use]
    pub fn has_viewpoint_streams(&self) -> bool {
        !self.viewpoint.is_empty()
    }

    /// Whether either stream will do work on the next tick.
    #[must_use]
    pub fn is_active(&self) -> bool {
        (self.general_running && !self.general.is_empty()) || !self.viewpoint.is_empty()
    }

    /// Advance both streams by one step.
    pub fn tick<S: Scene + ?Sized>(&mut self, scene: &mut S) -> AnimationTick {
        let mut out = AnimationTick::default();
        if self.general_running && !self.general.is_empty() {
            out.redraw |= self.step_general(scene);
        }
        if !self.viewpoint.is_empty() {
            let (redraw, settled) = self.step_viewpoint(scene);
            out.redraw |= redraw;
            out.parts_settled = settled;
        }
        out
    }

    fn step_general<S: Scene + ?Sized>(&mut self, scene: &mut S) -> bool {
        let step = self.general_step;
        let mut changed = false;
        let mut any_running = false;
        for &id in &self.general {
            if let Some(frame) = scene.step_animation(id, step) {
                changed |= frame.changed;
                any_running |= frame.running;
            }
        }
        self.general_step = self.general_step.saturating_add(1);

        if !any_running {
            log::debug!("general animations finished at step {step}");
            self.general_running = false;
        }
        changed
    }

    fn step_viewpoint<S: Scene + ?Sized>(&mut self, scene: &mut S) -> (bool, bool) {
        let step = self.viewpoint_step;
        let forced = step > self.ceiling;
        let mut changed = false;
        let mut all_stopped = true;
        for &id in &self.viewpoint {
            let stopped = match scene.step_animation(id, step) {
                Some(frame) => {
                    changed |= frame.changed;
                    !frame.running || forced
                }
                None => true,
            };
            all_stopped &= stopped;
        }
        self.viewpoint_step = self.viewpoint_step.saturating_add(1);

        if all_stopped {
            log::debug!(
                "viewpoint-bound animations settled at step {step}{}",
                if forced { " (ceiling)" } else { "" }
            );
            self.viewpoint.clear();
            self.viewpoint_step = 1;
        }
        (changed, all_stopped)
    }
}
