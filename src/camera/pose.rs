//! Interpolable snapshot of a camera.

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned 2D box in normalized viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowRegion {
    /// Lower-left corner.
    pub lower_left: Vec2,
    /// Upper-right corner.
    pub upper_right: Vec2,
}

impl WindowRegion {
    /// The whole viewport, `(0,0)..(1,1)`.
    pub const FULL: Self = Self {
        lower_left: Vec2::ZERO,
        upper_right: Vec2::ONE,
    };

    /// Region from two corners, in any order.
    #[must_use]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            lower_left: a.min(b),
            upper_right: a.max(b),
        }
    }

    /// Width and height.
    #[must_use]
    pub fn extent(&self) -> Vec2 {
        self.upper_right - self.lower_left
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        (self.lower_left + self.upper_right) * 0.5
    }

    /// Map a point given relative to this region (`0..1` on both axes) into
    /// the coordinates this region is expressed in.
    #[must_use]
    pub fn map_point(&self, local: Vec2) -> Vec2 {
        self.lower_left + self.extent() * local
    }
}

impl Default for WindowRegion {
    fn default() -> Self {
        Self::FULL
    }
}

/// The interpolable subset of a camera's state.
///
/// The camera looks down its local −Z axis with local +Y up. Distances are
/// measured along the view direction from `position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewpointPose {
    /// Unit rotation from camera space to world space.
    pub orientation: Quat,
    /// Eye position in world space.
    pub position: Vec3,
    /// Near clipping distance.
    pub near: f32,
    /// Distance to the point of interest (orbit pivot).
    pub focus: f32,
    /// Far clipping distance.
    pub far: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Offset of the visible window from the viewport center.
    pub window_offset: Vec2,
    /// Size of the visible window relative to the viewport.
    pub window_size: Vec2,
    /// Visible sub-rectangle of the viewport.
    pub window_region: WindowRegion,
}

impl Default for ViewpointPose {
    fn default() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            position: Vec3::ZERO,
            near: 0.1,
            focus: 1.0,
            far: 100.0,
            fov_y: 45.0_f32.to_radians(),
            window_offset: Vec2::ZERO,
            window_size: Vec2::ONE,
            window_region: WindowRegion::FULL,
        }
    }
}

impl ViewpointPose {
    /// Pose at `position` looking along `orientation`, with a full-viewport
    /// window. The result is sanitized.
    #[must_use]
    pub fn new(
        position: Vec3,
        orientation: Quat,
        near: f32,
        focus: f32,
        far: f32,
        fov_y: f32,
    ) -> Self {
        Self {
            orientation,
            position,
            near,
            focus,
            far,
            fov_y,
            ..Self::default()
        }
        .sanitized()
    }

    /// Copy with a unit orientation and non-negative distances.
    ///
    /// A degenerate orientation (zero length or non-finite) becomes identity.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if !self.orientation.is_normalized() {
            let len = self.orientation.length();
            self.orientation = if len.is_finite() && len > f32::EPSILON {
                self.orientation / len
            } else {
                Quat::IDENTITY
            };
        }
        self.near = non_negative(self.near);
        self.focus = non_negative(self.focus);
        self.far = non_negative(self.far);
        self
    }

    /// Whether every invariant holds (unit orientation, distances >= 0).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.orientation.is_normalized()
            && self.near >= 0.0
            && self.focus >= 0.0
            && self.far >= 0.0
    }

    /// View direction in world space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Camera up direction in world space.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Point at the focus distance in front of the camera.
    #[must_use]
    pub fn pivot(&self) -> Vec3 {
        self.position + self.forward() * self.focus
    }

    /// Componentwise interpolation toward `target`.
    ///
    /// Orientation uses spherical-linear interpolation, every other field is
    /// linear. `u <= 0` returns `self`, `u >= 1` returns `target` exactly.
    #[must_use]
    pub fn interpolate(&self, target: &Self, u: f32) -> Self {
        if u <= 0.0 {
            return *self;
        }
        if u >= 1.0 {
            return *target;
        }

        Self {
            orientation: self.orientation.slerp(target.orientation, u).normalize(),
            position: self.position.lerp(target.position, u),
            near: lerp(self.near, target.near, u),
            focus: lerp(self.focus, target.focus, u),
            far: lerp(self.far, target.far, u),
            fov_y: lerp(self.fov_y, target.fov_y, u),
            window_offset: self.window_offset.lerp(target.window_offset, u),
            window_size: self.window_size.lerp(target.window_size, u),
            window_region: WindowRegion {
                lower_left: self
                    .window_region
                    .lower_left
                    .lerp(target.window_region.lower_left, u),
                upper_right: self
                    .window_region
                    .upper_right
                    .lerp(target.window_region.upper_right, u),
            },
        }
    }

    /// Copy with the window reset to the full viewport.
    #[must_use]
    pub fn with_full_window(mut self) -> Self {
        self.window_offset = Vec2::ZERO;
        self.window_size = Vec2::ONE;
        self.window_region = WindowRegion::FULL;
        self
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn non_negative(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else if v > 0.0 {
        v
    } else {
        0.0
    }
}
