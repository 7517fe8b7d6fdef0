//! Heuristic sizing of camera jumps.
//!
//! Every sub-factor lies in `[0, 1]` and the overall estimate is their
//! running maximum, so a single large change (a quarter turn, a jump of one
//! focus distance, a 25% change in a clip distance or window size) forces a
//! full-length transition. Window offset, window region, and field of view
//! are not considered.

use std::f32::consts::FRAC_PI_2;

use web_time::Duration;

use super::pose::ViewpointPose;

/// Relative change at which a deviation sub-factor saturates.
const DEVIATION_SATURATION: f32 = 0.25;

/// Below this, two orientations count as identical.
const ORIENTATION_EPSILON: f32 = 1e-6;

/// Scales a base duration by the size of the jump between two poses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationEstimator {
    base: Duration,
}

impl DurationEstimator {
    /// Estimator for the given full-scale transition length.
    #[must_use]
    pub const fn new(base: Duration) -> Self {
        Self { base }
    }

    /// Full-scale transition length.
    #[must_use]
    pub const fn base(&self) -> Duration {
        self.base
    }

    /// Transition length for a jump from `start` to `target`.
    #[must_use]
    pub fn duration(&self, start: &ViewpointPose, target: &ViewpointPose) -> Duration {
        self.base.mul_f32(estimate(start, target))
    }
}

/// Size of the jump between two poses, in `[0, 1]`.
#[must_use]
pub fn estimate(start: &ViewpointPose, target: &ViewpointPose) -> f32 {
    let mut factor = orientation_factor(start, target);
    factor = factor.max(position_factor(start, target));

    let deviations = [
        (start.near, target.near),
        (start.focus, target.focus),
        (start.far, target.far),
        (start.window_size.x, target.window_size.x),
        (start.window_size.y, target.window_size.y),
    ];
    for (a, b) in deviations {
        // Running maximum as lower bound: a deviation can only raise the
        // estimate.
        factor = deviation(a, b).max(factor).min(1.0);
    }
    factor
}

/// Rotation angle between the two orientations over a quarter turn.
fn orientation_factor(start: &ViewpointPose, target: &ViewpointPose) -> f32 {
    let dot = start.orientation.dot(target.orientation).abs();
    if !dot.is_finite() {
        return 1.0;
    }
    if dot >= 1.0 - ORIENTATION_EPSILON {
        return 0.0;
    }
    let angle = 2.0 * dot.min(1.0).acos();
    (angle / FRAC_PI_2).clamp(0.0, 1.0)
}

/// Eye travel distance over the mean focus distance.
fn position_factor(start: &ViewpointPose, target: &ViewpointPose) -> f32 {
    let distance = start.position.distance(target.position);
    let mean_focus = 0.5 * (start.focus + target.focus);
    ratio_factor(distance, mean_focus)
}

/// `|1 - max/min| / 0.25`, unclamped above.
fn deviation(a: f32, b: f32) -> f32 {
    let (lo, hi) = (a.min(b).abs(), a.max(b).abs());
    if lo == hi {
        return 0.0;
    }
    ratio_factor((1.0 - hi / lo).abs(), DEVIATION_SATURATION)
}

fn ratio_factor(value: f32, scale: f32) -> f32 {
    if value == 0.0 {
        return 0.0;
    }
    let ratio = value / scale;
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec2, Vec3};

    use super::*;

    fn pose() -> ViewpointPose {
        ViewpointPose::new(
            Vec3::new(0.0, 0.0, 10.0),
            Quat::IDENTITY,
            1.0,
            10.0,
            100.0,
            0.8,
        )
    }

    #[test]
    fn identical_poses_estimate_zero() {
        let a = pose();
        assert_eq!(estimate(&a, &a), 0.0);
        let est = DurationEstimator::new(Duration::from_secs(3));
        assert!(est.duration(&a, &a).is_zero());
    }

    #[test]
    fn doubled_near_saturates() {
        let a = pose();
        let mut b = a;
        b.near = 2.0;
        assert_eq!(estimate(&a, &b), 1.0);
    }

    #[test]
    fn small_near_change_is_proportional() {
        let a = pose();
        let mut b = a;
        b.near = 1.05; // 5% of a 25% saturation
        assert!((estimate(&a, &b) - 0.2).abs() < 1e-4);
    }

    #[test]
    fn quarter_turn_saturates_and_eighth_is_half() {
        let a = pose();
        let mut b = a;
        b.orientation = Quat::from_rotation_y(FRAC_PI_2);
        assert!((estimate(&a, &b) - 1.0).abs() < 1e-5);

        b.orientation = Quat::from_rotation_y(FRAC_PI_2 * 0.5);
        assert!((estimate(&a, &b) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn position_scales_by_mean_focus() {
        let a = pose();
        let mut b = a;
        b.position += Vec3::new(5.0, 0.0, 0.0);
        assert!((estimate(&a, &b) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn largest_factor_dominates() {
        let a = pose();
        let mut b = a;
        b.position += Vec3::new(2.0, 0.0, 0.0); // 0.2
        b.window_size = Vec2::new(1.1, 1.0); // 0.4
        assert!((estimate(&a, &b) - 0.4).abs() < 1e-4);
    }

    #[test]
    fn window_offset_and_region_are_ignored() {
        let a = pose();
        let mut b = a;
        b.window_offset = Vec2::new(0.4, 0.4);
        b.window_region.lower_left = Vec2::new(0.3, 0.3);
        assert_eq!(estimate(&a, &b), 0.0);
    }

    #[test]
    fn zero_distance_against_nonzero_saturates() {
        let a = pose();
        let mut b = a;
        b.near = 0.0;
        assert_eq!(estimate(&a, &b), 1.0);
    }

    #[test]
    fn estimate_is_symmetric() {
        let a = pose();
        let mut b = a;
        b.orientation = Quat::from_rotation_x(0.3);
        b.position += Vec3::new(1.0, 2.0, 0.0);
        b.far = 110.0;
        b.focus = 12.0;
        assert!((estimate(&a, &b) - estimate(&b, &a)).abs() < 1e-6);

        let mut c = a;
        c.near = 1.1;
        assert!((estimate(&a, &c) - estimate(&c, &a)).abs() < 1e-6);
    }

    #[test]
    fn duration_scales_base() {
        let a = pose();
        let mut b = a;
        b.near = 1.125; // factor 0.5
        let est = DurationEstimator::new(Duration::from_secs(2));
        let d = est.duration(&a, &b).as_secs_f32();
        assert!((d - 1.0).abs() < 1e-3);
    }
}
