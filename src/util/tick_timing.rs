//! Fixed-rate pacing for host-driven tick loops.

use web_time::{Duration, Instant};

/// Fixed-rate tick pacing with a smoothed tick-rate readout.
///
/// Drives the periodic "tick" event for hosts that own their own loop.
pub struct TickPacer {
    /// Target ticks per second (0 = unlimited)
    target_rate: u32,
    /// Minimum interval between ticks based on the target rate
    min_interval: Duration,
    /// Last tick timestamp
    last_tick: Instant,
    /// Smoothed rate using exponential moving average
    smoothed_rate: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl TickPacer {
    /// Create a new pacer with the given tick-rate target (0 = unlimited).
    #[must_use]
    pub fn new(target_rate: u32) -> Self {
        Self::starting_at(target_rate, Instant::now())
    }

    /// Create a pacer whose first interval begins at `now`.
    #[must_use]
    pub fn starting_at(target_rate: u32, now: Instant) -> Self {
        let min_interval = if target_rate > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_rate))
        } else {
            Duration::ZERO
        };

        Self {
            target_rate,
            min_interval,
            last_tick: now,
            smoothed_rate: target_rate.max(1) as f32,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last tick.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        if self.target_rate == 0 {
            return true;
        }
        now.saturating_duration_since(self.last_tick) >= self.min_interval
    }

    /// Time left until the next tick is due.
    #[must_use]
    pub fn until_due(&self, now: Instant) -> Duration {
        self.min_interval
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Record that a tick happened at `now`.
    pub fn mark_tick(&mut self, now: Instant) {
        let interval = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        let secs = interval.as_secs_f32();
        if secs > 0.0 {
            self.smoothed_rate = self.smoothed_rate * (1.0 - self.smoothing)
                + (1.0 / secs) * self.smoothing;
        }
    }

    /// Smoothed ticks per second.
    #[must_use]
    pub fn rate(&self) -> f32 {
        self.smoothed_rate
    }
}
