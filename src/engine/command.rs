//! The coordinator's message vocabulary.
//!
//! Hosts either construct a [`ViewCommand`] directly or route a textual
//! message (name plus positional parameters) through
//! [`ViewCommand::from_message`]. Either way the command ends up in
//! [`ViewEngine::execute`](super::ViewEngine::execute).

use glam::{Mat4, Vec2, Vec3};

use crate::camera::framing::ViewDirection;
use crate::camera::orbit::OrbitAxis;
use crate::camera::pose::WindowRegion;
use crate::error::VantageError;

/// A single coordinator request.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    // ── Camera moves ────────────────────────────────────────────────
    /// Move to frame a sphere from the current view direction.
    OrientToPoint {
        /// Sphere center in world space.
        center: Vec3,
        /// Sphere radius.
        radius: f32,
    },

    /// Frame the scene bounds from a canonical direction.
    OrientToDirection(ViewDirection),

    /// Move to a camera given as a column-major camera-to-world matrix.
    MoveToMatrix(Mat4),

    /// Frame the whole scene from the current view direction.
    FitToScene,

    /// Zoom into a sub-rectangle of the current window.
    ZoomToRegion(WindowRegion),

    /// Move to the scene camera at `index`.
    MoveToCamera {
        /// Position in the scene's camera list.
        index: usize,
    },

    /// Move to the scene light at `index`, looking along it.
    MoveToLight {
        /// Position in the scene's light list.
        index: usize,
    },

    // ── Continuous modes ────────────────────────────────────────────
    /// Enable or disable orbiting about one axis.
    SetOrbit {
        /// World axis.
        axis: OrbitAxis,
        /// Whether the axis spins.
        enabled: bool,
    },

    /// Enable or disable the automatic camera tour.
    SetCycling(bool),

    /// Stop every camera mode without reporting completion.
    CancelAll,

    // ── Animation transport ─────────────────────────────────────────
    /// Re-scan and partition the scene's animation objects.
    LoadAnimationSet,

    /// Start the general animation streams from the first step.
    PlayAnimation,

    /// Toggle the general animation streams.
    PauseAnimation,

    /// Stop and rewind the general animation streams.
    StopAnimation,
}

impl ViewCommand {
    /// Message name this command is routed under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OrientToPoint { .. } => "orient-to-point",
            Self::OrientToDirection(_) => "orient-to-named-direction",
            Self::MoveToMatrix(_) => "move-to-matrix",
            Self::FitToScene => "fit-to-scene",
            Self::ZoomToRegion(_) => "zoom-to-region",
            Self::MoveToCamera { .. } => "move-to-camera",
            Self::MoveToLight { .. } => "move-to-light",
            Self::SetOrbit { .. } => "orbit",
            Self::SetCycling(_) => "cycle",
            Self::CancelAll => "cancel",
            Self::LoadAnimationSet => "load-animation-set",
            Self::PlayAnimation => "play",
            Self::PauseAnimation => "pause",
            Self::StopAnimation => "stop-animation",
        }
    }

    /// Parse a message name and its positional parameters.
    pub fn from_message(name: &str, params: &[&str]) -> Result<Self, VantageError> {
        let name = name.trim();
        let cmd = match name {
            "orient-to-point" => {
                let [x, y, z, radius] = floats::<4>(name, params)?;
                Self::OrientToPoint {
                    center: Vec3::new(x, y, z),
                    radius,
                }
            }
            "orient-to-named-direction" => {
                let [dir] = exact::<1>(name, params)?;
                let dir = ViewDirection::parse(dir).ok_or_else(|| {
                    VantageError::bad_params(name, format!("unknown direction `{dir}`"))
                })?;
                Self::OrientToDirection(dir)
            }
            "move-to-matrix" => {
                let cols = floats::<16>(name, params)?;
                Self::MoveToMatrix(Mat4::from_cols_array(&cols))
            }
            "fit-to-scene" => {
                let [] = exact::<0>(name, params)?;
                Self::FitToScene
            }
            "zoom-to-region" => {
                let [x0, y0, x1, y1] = floats::<4>(name, params)?;
                Self::ZoomToRegion(WindowRegion::from_corners(
                    Vec2::new(x0, y0),
                    Vec2::new(x1, y1),
                ))
            }
            "move-to-camera" => Self::MoveToCamera {
                index: index(name, params)?,
            },
            "move-to-light" => Self::MoveToLight {
                index: index(name, params)?,
            },
            "orbit" => {
                let [axis, state] = exact::<2>(name, params)?;
                let axis = OrbitAxis::parse(axis).ok_or_else(|| {
                    VantageError::bad_params(name, format!("unknown axis `{axis}`"))
                })?;
                Self::SetOrbit {
                    axis,
                    enabled: switch(name, state)?,
                }
            }
            "cycle" => {
                let [state] = exact::<1>(name, params)?;
                Self::SetCycling(switch(name, state)?)
            }
            "cancel" | "load-animation-set" | "play" | "pause" | "stop-animation" => {
                let [] = exact::<0>(name, params)?;
                match name {
                    "cancel" => Self::CancelAll,
                    "load-animation-set" => Self::LoadAnimationSet,
                    "play" => Self::PlayAnimation,
                    "pause" => Self::PauseAnimation,
                    _ => Self::StopAnimation,
                }
            }
            _ => return Err(VantageError::UnknownCommand(name.to_owned())),
        };
        Ok(cmd)
    }
}

fn exact<'a, const N: usize>(
    name: &str,
    params: &[&'a str],
) -> Result<[&'a str; N], VantageError> {
    <[&str; N]>::try_from(params).map_err(|_| {
        VantageError::bad_params(
            name,
            format!("expected {N} parameters, got {}", params.len()),
        )
    })
}

fn floats<const N: usize>(name: &str, params: &[&str]) -> Result<[f32; N], VantageError> {
    let raw = exact::<N>(name, params)?;
    let mut out = [0.0; N];
    for (slot, text) in out.iter_mut().zip(raw) {
        *slot = text
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| VantageError::bad_params(name, format!("`{text}` is not a number")))?;
    }
    Ok(out)
}

fn index(name: &str, params: &[&str]) -> Result<usize, VantageError> {
    let [text] = exact::<1>(name, params)?;
    text.trim()
        .parse()
        .map_err(|_| VantageError::bad_params(name, format!("`{text}` is not an index")))
}

fn switch(name: &str, text: &str) -> Result<bool, VantageError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err(VantageError::bad_params(name, format!("`{text}` is not on/off"))),
    }
}
