//! Elapsed-time clock used by the camera state machines.

use web_time::{Duration, Instant};

/// Elapsed-time clock owned by a mode flag.
///
/// A stopped stopwatch reports zero elapsed time. Callers pass `now`
/// explicitly so the clock can be driven deterministically.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
}

impl Stopwatch {
    /// A stopped stopwatch.
    #[must_use]
    pub const fn new() -> Self {
        Self { started: None }
    }

    /// Start (or restart) timing from `now`.
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
    }

    /// Stop timing. Elapsed time resets to zero.
    pub fn stop(&mut self) {
        self.started = None;
    }

    /// Whether the clock is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Time since the last start, or zero when stopped.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.started
            .map_or(Duration::ZERO, |start| now.saturating_duration_since(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_clock_reports_zero() {
        let watch = Stopwatch::new();
        assert!(!watch.is_running());
        assert_eq!(watch.elapsed(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn elapsed_tracks_now() {
        let start = Instant::now();
        let mut watch = Stopwatch::new();
        watch.start(start);
        assert!(watch.is_running());
        assert_eq!(
            watch.elapsed(start + Duration::from_millis(250)),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn now_before_start_saturates() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut watch = Stopwatch::new();
        watch.start(start);
        assert_eq!(watch.elapsed(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn stop_resets() {
        let start = Instant::now();
        let mut watch = Stopwatch::new();
        watch.start(start);
        watch.stop();
        assert!(!watch.is_running());
        assert_eq!(watch.elapsed(start + Duration::from_secs(3)), Duration::ZERO);
    }
}
