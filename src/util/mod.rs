//! Shared utilities for the coordinator.
//!
//! Helpers for easing curves, elapsed-time clocks, and host tick pacing.

pub mod easing;
pub mod stopwatch;
pub mod tick_timing;
