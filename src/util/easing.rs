//! Easing curves for camera transitions.
//!
//! Maps normalized transition progress onto an interpolation parameter.
//! All curves pass through (0, 0) and (1, 1).

use std::f32::consts::{FRAC_PI_2, PI};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for transition curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Sine S-curve: `0.5 * (sin(-π/2 + t·π) + 1)`. Zero velocity at both
    /// ends.
    SineInOut,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default camera easing: the sine S-curve.
    pub const DEFAULT: EasingFunction = EasingFunction::SineInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::SineInOut => {
                // Snap the endpoints so sin() rounding never leaks out
                if t >= 1.0 {
                    return 1.0;
                }
                0.5 * ((-FRAC_PI_2 + t * PI).sin() + 1.0)
            }
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_sine_endpoints_and_midpoint() {
        let sine = EasingFunction::SineInOut;
        assert!(sine.evaluate(0.0).abs() < 1e-6);
        assert!((sine.evaluate(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(sine.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_sine_is_monotonic() {
        let sine = EasingFunction::SineInOut;
        let mut prev = sine.evaluate(0.0);
        for i in 1..=100 {
            let v = sine.evaluate(i as f32 / 100.0);
            assert!(v >= prev, "curve decreased at step {i}: {prev} -> {v}");
            prev = v;
        }
    }

    #[test]
    fn test_sine_has_soft_ends() {
        // Near the ends the curve moves slower than linear
        let sine = EasingFunction::SineInOut;
        assert!(sine.evaluate(0.1) < 0.1);
        assert!(sine.evaluate(0.9) > 0.9);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let sine = EasingFunction::SineInOut;
        assert!(sine.evaluate(-3.0).abs() < 1e-6);
        assert_eq!(sine.evaluate(7.0), 1.0);
    }

    #[test]
    fn test_quadratic_curves() {
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
        assert_eq!(EasingFunction::QuadraticOut.evaluate(0.5), 0.75);
    }

    #[test]
    fn test_cubic_hermite_endpoints() {
        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(0.0), 0.0);
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_is_sine() {
        assert_eq!(EasingFunction::default(), EasingFunction::SineInOut);
    }

    #[test]
    fn test_toml_round_trip() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            easing: EasingFunction,
        }
        let text = toml::to_string(&Wrapper {
            easing: EasingFunction::CubicHermite { c1: 0.5, c2: 1.0 },
        })
        .unwrap();
        let back: Wrapper = toml::from_str(&text).unwrap();
        assert_eq!(
            back.easing,
            EasingFunction::CubicHermite { c1: 0.5, c2: 1.0 }
        );
    }
}
