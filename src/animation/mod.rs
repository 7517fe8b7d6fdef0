//! Scene animation stepping and the settled-signal fan-in.

/// Completion latch for camera and viewpoint-bound animations.
pub mod completion;
/// General and viewpoint-bound animation streams.
pub mod stepper;
