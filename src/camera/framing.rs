//! Target-pose construction for move-to requests.
//!
//! Each request (frame a sphere, zoom into a window region, jump to a
//! matrix, a light, or a named direction) is turned into a complete
//! [`ViewpointPose`] before a transition starts.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

use super::pose::{ViewpointPose, WindowRegion};
use crate::scene::BoundingSphere;

/// Smallest radius a framing sphere is treated as having.
const MIN_RADIUS: f32 = 1e-3;

/// Canonical viewing directions, named after the side the camera sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewDirection {
    /// Camera on +X, looking along −X.
    Right,
    /// Camera on −X, looking along +X.
    Left,
    /// Camera on +Y, looking along −Y.
    Top,
    /// Camera on −Y, looking along +Y.
    Bottom,
    /// Camera on +Z, looking along −Z.
    Front,
    /// Camera on −Z, looking along +Z.
    Back,
}

impl ViewDirection {
    /// Every direction, in message order.
    pub const ALL: [Self; 6] = [
        Self::Right,
        Self::Left,
        Self::Top,
        Self::Bottom,
        Self::Front,
        Self::Back,
    ];

    /// Case-insensitive lookup by name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Message name of this direction.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Right => "Right",
            Self::Left => "Left",
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Front => "Front",
            Self::Back => "Back",
        }
    }

    /// Camera orientation for this direction.
    #[must_use]
    pub fn orientation(self) -> Quat {
        match self {
            Self::Right => Quat::from_rotation_y(FRAC_PI_2),
            Self::Left => Quat::from_rotation_y(-FRAC_PI_2),
            Self::Top => Quat::from_rotation_x(-FRAC_PI_2),
            Self::Bottom => Quat::from_rotation_x(FRAC_PI_2),
            Self::Front => Quat::IDENTITY,
            Self::Back => Quat::from_rotation_y(PI),
        }
    }
}

/// Rotation whose −Z axis points along `forward`, keeping +Y as close to
/// `up` as possible. `None` if `forward` is degenerate.
#[must_use]
pub fn look_rotation(forward: Vec3, up: Vec3) -> Option<Quat> {
    let back = -forward.try_normalize()?;
    let right = up
        .cross(back)
        .try_normalize()
        // forward parallel to up: fall back to another reference axis
        .or_else(|| Vec3::Z.cross(back).try_normalize())
        .or_else(|| Vec3::X.cross(back).try_normalize())?;
    let true_up = back.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, true_up, back)).normalize())
}

/// Pose looking at `sphere` along `orientation`, far enough back for the
/// sphere to fill the vertical field of view.
#[must_use]
pub fn frame_sphere(
    current: &ViewpointPose,
    orientation: Quat,
    sphere: BoundingSphere,
    near_fraction: f32,
) -> ViewpointPose {
    let radius = sphere.radius.max(MIN_RADIUS);
    let half_fov = (current.fov_y * 0.5).clamp(1e-3, FRAC_PI_2);
    let distance = radius / half_fov.sin();

    let mut pose = ViewpointPose {
        orientation,
        ..*current
    }
    .sanitized()
    .with_full_window();
    pose.position = sphere.center - pose.forward() * distance;
    pose.focus = distance;
    pose.near = (distance - radius).max(radius * near_fraction);
    pose.far = distance + radius;
    pose
}

/// Frame `sphere` from the current view direction.
#[must_use]
pub fn zoom_to_sphere(
    current: &ViewpointPose,
    sphere: BoundingSphere,
    near_fraction: f32,
) -> ViewpointPose {
    frame_sphere(current, current.orientation, sphere, near_fraction)
}

/// Frame `sphere` from a canonical direction.
#[must_use]
pub fn orient_to_direction(
    current: &ViewpointPose,
    direction: ViewDirection,
    sphere: BoundingSphere,
    near_fraction: f32,
) -> ViewpointPose {
    frame_sphere(current, direction.orientation(), sphere, near_fraction)
}

/// Zoom into a sub-rectangle of the current window.
///
/// `region` is relative to the current window (`0..1` on both axes).
/// Returns `None` for an empty region.
#[must_use]
pub fn zoom_to_region(
    current: &ViewpointPose,
    region: WindowRegion,
) -> Option<ViewpointPose> {
    let extent = region.extent();
    if !(extent.x > 0.0 && extent.y > 0.0) {
        return None;
    }

    let mut pose = *current;
    pose.window_region = WindowRegion {
        lower_left: current.window_region.map_point(region.lower_left),
        upper_right: current.window_region.map_point(region.upper_right),
    };
    pose.window_size = current.window_size * extent;
    pose.window_offset = current.window_offset
        + (region.center() - Vec2::splat(0.5)) * current.window_size;
    Some(pose)
}

/// Pose at `position` with `orientation`, with focus and clip distances
/// chosen so that `sphere` lies between the clip planes.
#[must_use]
pub fn place_at(
    current: &ViewpointPose,
    position: Vec3,
    orientation: Quat,
    fov_y: f32,
    sphere: BoundingSphere,
    near_fraction: f32,
) -> ViewpointPose {
    let radius = sphere.radius.max(MIN_RADIUS);
    let focus = position.distance(sphere.center).max(radius * near_fraction);

    let mut pose = ViewpointPose {
        orientation,
        position,
        fov_y,
        ..*current
    }
    .sanitized()
    .with_full_window();
    pose.focus = focus;
    pose.near = (focus - radius).max(radius * near_fraction);
    pose.far = focus + radius;
    pose
}

/// Pose from a column-major camera-to-world matrix. `None` if the matrix
/// carries no usable rotation or translation.
#[must_use]
pub fn from_matrix(
    current: &ViewpointPose,
    matrix: Mat4,
    fov_y: f32,
    sphere: BoundingSphere,
    near_fraction: f32,
) -> Option<ViewpointPose> {
    if !matrix.is_finite() || matrix.determinant().abs() <= f32::EPSILON {
        return None;
    }
    let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
    if scale.min_element().abs() <= f32::EPSILON || !rotation.is_finite() {
        return None;
    }
    Some(place_at(
        current,
        translation,
        rotation,
        fov_y,
        sphere,
        near_fraction,
    ))
}

/// Pose at a light, looking along its direction.
#[must_use]
pub fn from_light(
    current: &ViewpointPose,
    position: Vec3,
    direction: Vec3,
    sphere: BoundingSphere,
    near_fraction: f32,
) -> Option<ViewpointPose> {
    let orientation = look_rotation(direction, current.up())?;
    Some(place_at(
        current,
        position,
        orientation,
        current.fov_y,
        sphere,
        near_fraction,
    ))
}
