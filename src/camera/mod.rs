//! Camera pose math and the camera-side state machines.
//!
//! Poses are plain values. The [`transition::TransitionEngine`] owns the
//! only writer of the live camera; the [`cycler::ViewpointCycler`] drives
//! it through a sequence of scene cameras.

/// Automatic cycling through eligible scene cameras.
pub mod cycler;
/// Heuristic sizing of a transition between two poses.
pub mod duration;
/// Target-pose construction for framing requests.
pub mod framing;
/// Orbit axes and per-tick pivot rotation.
pub mod orbit;
/// The interpolable camera pose.
pub mod pose;
/// Timed move-to transitions and orbiting.
pub mod transition;
