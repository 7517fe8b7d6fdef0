//! Continuous orbiting about the focus pivot.

use glam::{Quat, Vec3};

use super::pose::ViewpointPose;

/// World axis an orbit can spin around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbitAxis {
    /// World X.
    X,
    /// World Y.
    Y,
    /// World Z.
    Z,
}

impl OrbitAxis {
    /// Every axis, in application order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Case-insensitive lookup by name (`x`, `y`, `z`).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "x" | "X" => Some(Self::X),
            "y" | "Y" => Some(Self::Y),
            "z" | "Z" => Some(Self::Z),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::X => 0b001,
            Self::Y => 0b010,
            Self::Z => 0b100,
        }
    }

    /// Unit vector of this axis.
    #[must_use]
    pub const fn vector(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }
}

/// Set of orbit axes. Orbiting is active iff the set is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct OrbitAxes(u8);

impl OrbitAxes {
    /// No axes.
    pub const NONE: Self = Self(0);

    /// Enable or disable one axis.
    pub fn set(&mut self, axis: OrbitAxis, enabled: bool) {
        if enabled {
            self.0 |= axis.bit();
        } else {
            self.0 &= !axis.bit();
        }
    }

    /// Whether `axis` is enabled.
    #[must_use]
    pub const fn contains(self, axis: OrbitAxis) -> bool {
        self.0 & axis.bit() != 0
    }

    /// Whether any axis is enabled.
    #[must_use]
    pub const fn is_active(self) -> bool {
        self.0 != 0
    }

    /// Raw bitmask (X = 1, Y = 2, Z = 4).
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Combined rotation of `angle` about every enabled axis, applied in
    /// X, Y, Z order.
    #[must_use]
    pub fn rotation(self, angle: f32) -> Quat {
        OrbitAxis::ALL
            .into_iter()
            .filter(|axis| self.contains(*axis))
            .fold(Quat::IDENTITY, |acc, axis| {
                Quat::from_axis_angle(axis.vector(), angle) * acc
            })
    }
}

/// Rotate `pose` by `angle` about every enabled axis, pivoting on the point
/// at its focus distance. The pivot stays fixed.
#[must_use]
pub fn orbit_step(pose: &ViewpointPose, axes: OrbitAxes, angle: f32) -> ViewpointPose {
    if !axes.is_active() || angle == 0.0 {
        return *pose;
    }
    let rotation = axes.rotation(angle);
    let pivot = pose.pivot();

    ViewpointPose {
        position: pivot + rotation * (pose.position - pivot),
        orientation: (rotation * pose.orientation).normalize(),
        ..*pose
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn setting_an_axis_twice_is_idempotent() {
        let mut once = OrbitAxes::NONE;
        once.set(OrbitAxis::Y, true);

        let mut twice = OrbitAxes::NONE;
        twice.set(OrbitAxis::Y, true);
        twice.set(OrbitAxis::Y, true);
        assert_eq!(once, twice);
        assert!(twice.is_active());

        twice.set(OrbitAxis::Y, false);
        assert!(!twice.is_active());
    }

    #[test]
    fn active_iff_mask_nonzero() {
        let mut axes = OrbitAxes::NONE;
        assert!(!axes.is_active());
        axes.set(OrbitAxis::X, true);
        axes.set(OrbitAxis::Z, true);
        assert_eq!(axes.bits(), 0b101);
        axes.set(OrbitAxis::X, false);
        assert!(axes.is_active());
        assert!(axes.contains(OrbitAxis::Z));
        axes.set(OrbitAxis::Z, false);
        assert!(!axes.is_active());
    }

    #[test]
    fn orbit_keeps_pivot_and_distance() {
        let pose = ViewpointPose::new(
            Vec3::new(0.0, 0.0, 10.0),
            Quat::IDENTITY,
            1.0,
            10.0,
            100.0,
            0.8,
        );
        let mut axes = OrbitAxes::NONE;
        axes.set(OrbitAxis::Y, true);

        let turned = orbit_step(&pose, axes, FRAC_PI_2);
        assert!(turned.pivot().length() < 1e-4);
        assert!((turned.position - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-4);
        assert!((turned.forward() - Vec3::NEG_X).length() < 1e-5);
        assert_eq!(turned.focus, pose.focus);
    }

    #[test]
    fn inactive_orbit_is_identity() {
        let pose = ViewpointPose::default();
        assert_eq!(orbit_step(&pose, OrbitAxes::NONE, 0.3), pose);
    }

    #[test]
    fn axis_names_parse() {
        assert_eq!(OrbitAxis::parse("Y"), Some(OrbitAxis::Y));
        assert_eq!(OrbitAxis::parse("w"), None);
    }
}
