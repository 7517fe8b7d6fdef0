use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera transition, orbit, and cycling parameters.
pub struct CameraOptions {
    /// Length of a full-scale transition in seconds. Smaller jumps scale
    /// this down by the estimated jump size.
    #[schemars(title = "Base Duration", range(min = 0.0, max = 20.0), extend("step" = 0.1))]
    pub base_duration_secs: f32,
    /// Orbit rotation per tick, in degrees.
    #[schemars(title = "Orbit Step", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub orbit_step_degrees: f32,
    /// Pause between cycling legs, in seconds.
    #[schemars(title = "Cycle Pause", range(min = 0.0, max = 30.0), extend("step" = 0.5))]
    pub cycle_pause_secs: f32,
    /// Lower bound for the framing near distance, as a fraction of the
    /// framed radius.
    #[schemars(skip)]
    pub near_fraction: f32,
    /// Curve applied to transition progress.
    pub easing: EasingFunction,
}

impl CameraOptions {
    /// Base transition duration.
    #[must_use]
    pub fn base_duration(&self) -> Duration {
        seconds(self.base_duration_secs)
    }

    /// Pause between cycling legs.
    #[must_use]
    pub fn cycle_pause(&self) -> Duration {
        seconds(self.cycle_pause_secs)
    }

    /// Orbit rotation per tick, in radians.
    #[must_use]
    pub fn orbit_step(&self) -> f32 {
        self.orbit_step_degrees.to_radians()
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            base_duration_secs: 2.5,
            orbit_step_degrees: 1.0,
            cycle_pause_secs: 2.0,
            near_fraction: 0.01,
            easing: EasingFunction::DEFAULT,
        }
    }
}

/// Non-negative finite seconds as a duration; anything else is zero.
fn seconds(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs.max(0.0)).unwrap_or(Duration::ZERO)
}
