//! Frame-steppable keyframe animation object.
//!
//! Maps an external step counter onto a frame index, honoring speed, loop
//! count, loop style, and direction. The object itself keeps no clock; it
//! is driven purely by `set_frame(step)`.

use serde::{Deserialize, Serialize};

/// What happens when an animation reaches its last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopStyle {
    /// Jump back to the first frame.
    #[default]
    Loop,
    /// Reverse direction (ping-pong).
    Swing,
}

/// Playback direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayDirection {
    /// First frame to last.
    #[default]
    Forward,
    /// Last frame to first.
    Backward,
}

/// A keyframed animation stepped by an external counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteppedAnimation {
    /// Object name.
    pub name: String,
    /// Number of frames (at least one).
    pub frame_count: u32,
    /// Frames advanced per step.
    pub speed: f32,
    /// Number of passes before stopping; 0 loops forever.
    pub loop_count: u32,
    /// Behavior at the end of a pass.
    pub loop_style: LoopStyle,
    /// Playback direction.
    pub direction: PlayDirection,
    #[serde(skip)]
    frame: u32,
    #[serde(skip, default = "running_default")]
    running: bool,
}

fn running_default() -> bool {
    true
}

impl Default for SteppedAnimation {
    fn default() -> Self {
        Self::new("", 1)
    }
}

impl SteppedAnimation {
    /// One-pass forward animation at one frame per step.
    #[must_use]
    pub fn new(name: impl Into<String>, frame_count: u32) -> Self {
        Self {
            name: name.into(),
            frame_count,
            speed: 1.0,
            loop_count: 1,
            loop_style: LoopStyle::Loop,
            direction: PlayDirection::Forward,
            frame: 0,
            running: true,
        }
    }

    /// Set frames advanced per step.
    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the pass count (0 = forever).
    #[must_use]
    pub fn with_loops(mut self, loop_count: u32, style: LoopStyle) -> Self {
        self.loop_count = loop_count;
        self.loop_style = style;
        self
    }

    /// Set the playback direction.
    #[must_use]
    pub fn with_direction(mut self, direction: PlayDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Frame currently displayed.
    #[must_use]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Whether the animation has passes left.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Display the frame for `step`. Returns whether the frame changed.
    pub fn set_frame(&mut self, step: u32) -> bool {
        let last = self.frame_count.saturating_sub(1);
        let advanced = if self.speed.is_finite() && self.speed > 0.0 {
            (f64::from(step) * f64::from(self.speed)).floor() as u64
        } else {
            0
        };

        let (pos, running) = self.position(advanced, u64::from(last));
        let frame = match self.direction {
            PlayDirection::Forward => pos,
            PlayDirection::Backward => last - pos,
        };

        self.running = running;
        let changed = frame != self.frame;
        self.frame = frame;
        changed
    }

    /// Position within a forward pass, and whether passes remain.
    fn position(&self, advanced: u64, last: u64) -> (u32, bool) {
        let infinite = self.loop_count == 0;
        if last == 0 {
            return (0, infinite);
        }

        let (period, forward_end) = match self.loop_style {
            LoopStyle::Loop => (last + 1, true),
            // A swing pass ends on the opposite endpoint
            LoopStyle::Swing => (last, self.loop_count % 2 == 1),
        };
        let pass = advanced / period;
        let offset = advanced % period;

        if !infinite && pass >= u64::from(self.loop_count) {
            let end = if forward_end { last } else { 0 };
            return (end as u32, false);
        }

        let pos = match self.loop_style {
            LoopStyle::Swing if pass % 2 == 1 => last - offset,
            _ => offset,
        };
        (pos as u32, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(anim: &mut SteppedAnimation, steps: std::ops::RangeInclusive<u32>) -> Vec<u32> {
        steps
            .map(|s| {
                let _ = anim.set_frame(s);
                anim.frame()
            })
            .collect()
    }

    #[test]
    fn single_pass_stops_on_last_frame() {
        let mut anim = SteppedAnimation::new("door", 4);
        assert_eq!(frames(&mut anim, 0..=3), vec![0, 1, 2, 3]);
        assert!(anim.is_running());
        assert!(!anim.set_frame(4));
        assert_eq!(anim.frame(), 3);
        assert!(!anim.is_running());
    }

    #[test]
    fn loop_wraps_to_first_frame() {
        let mut anim = SteppedAnimation::new("spin", 3).with_loops(2, LoopStyle::Loop);
        assert_eq!(frames(&mut anim, 0..=6), vec![0, 1, 2, 0, 1, 2, 2]);
        assert!(!anim.is_running());
    }

    #[test]
    fn swing_ping_pongs() {
        let mut anim = SteppedAnimation::new("arm", 3).with_loops(3, LoopStyle::Swing);
        assert_eq!(
            frames(&mut anim, 0..=7),
            vec![0, 1, 2, 1, 0, 1, 2, 2]
        );
        assert!(!anim.is_running());
    }

    #[test]
    fn even_swing_count_ends_at_start() {
        let mut anim = SteppedAnimation::new("arm", 3).with_loops(2, LoopStyle::Swing);
        let _ = anim.set_frame(10);
        assert_eq!(anim.frame(), 0);
        assert!(!anim.is_running());
    }

    #[test]
    fn infinite_loop_never_stops() {
        let mut anim = SteppedAnimation::new("fan", 5).with_loops(0, LoopStyle::Loop);
        let _ = anim.set_frame(1_000_003);
        assert!(anim.is_running());
        assert_eq!(anim.frame(), 3);
    }

    #[test]
    fn backward_reverses_frames() {
        let mut anim =
            SteppedAnimation::new("lift", 4).with_direction(PlayDirection::Backward);
        assert_eq!(frames(&mut anim, 0..=4), vec![3, 2, 1, 0, 0]);
    }

    #[test]
    fn speed_scales_steps() {
        let mut anim = SteppedAnimation::new("slow", 10).with_speed(0.5);
        assert_eq!(frames(&mut anim, 0..=4), vec![0, 0, 1, 1, 2]);
    }

    #[test]
    fn changed_reports_frame_changes_only() {
        let mut anim = SteppedAnimation::new("slow", 10).with_speed(0.5);
        assert!(!anim.set_frame(1));
        assert!(anim.set_frame(2));
        assert!(!anim.set_frame(3));
    }

    #[test]
    fn single_frame_finishes_immediately() {
        let mut anim = SteppedAnimation::new("still", 1);
        assert!(!anim.set_frame(1));
        assert!(!anim.is_running());
    }

    #[test]
    fn deserializes_with_defaults() {
        let anim: SteppedAnimation = toml::from_str(
            r#"
name = "ViewStateAnimation"
frame_count = 30
loop_style = "swing"
"#,
        )
        .unwrap();
        assert_eq!(anim.speed, 1.0);
        assert_eq!(anim.loop_count, 1);
        assert_eq!(anim.loop_style, LoopStyle::Swing);
        assert!(anim.is_running());
    }
}
