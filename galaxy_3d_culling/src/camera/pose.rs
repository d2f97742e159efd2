/// Pose: position + orientation of a frustum-owning entity.
///
/// Axis convention of the hosting engine: local +X is the look
/// direction, local +Z is the normal ("up") direction. The orientation
/// is a `Mat4` whose upper 3x3 block is a rotation; any translation it
/// carries is ignored; the world position is stored separately.
///
/// Poses are externally driven (input, camera sync). A Frustum is a
/// pure function of a Pose and FrustumParams and is never stored here.

use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::engine_bail;

/// Directions shorter than this (squared) are treated as zero.
pub(crate) const DIRECTION_EPSILON: f32 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    orientation: Mat4,
    position: Vec3,
}

impl Pose {
    /// Create a pose from a display/orientation matrix and a world position.
    pub fn new(orientation: Mat4, position: Vec3) -> Self {
        Self { orientation, position }
    }

    /// Identity orientation at the origin (looking along +X, up +Z).
    pub fn identity() -> Self {
        Self::new(Mat4::IDENTITY, Vec3::ZERO)
    }

    /// Build an orthonormal pose from a look and a normal direction.
    ///
    /// The normal is orthogonalized against the look direction.
    ///
    /// # Errors
    ///
    /// `DegenerateOrientation` if either direction is zero-length or
    /// the two are parallel.
    pub fn looking(look: Vec3, normal: Vec3, position: Vec3) -> Result<Self> {
        let (x, z) = orthonormal_axes(look, normal)?;
        let y = z.cross(x);
        let orientation = Mat4::from_cols(
            x.extend(0.0),
            y.extend(0.0),
            z.extend(0.0),
            glam::Vec4::W,
        );
        Ok(Self::new(orientation, position))
    }

    // ===== GETTERS =====

    pub fn orientation(&self) -> &Mat4 {
        &self.orientation
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit look direction (orientation X column); zero if degenerate.
    pub fn look_direction(&self) -> Vec3 {
        self.orientation.x_axis.truncate().normalize_or_zero()
    }

    /// Unit normal direction (orientation Z column); zero if degenerate.
    pub fn normal_direction(&self) -> Vec3 {
        self.orientation.z_axis.truncate().normalize_or_zero()
    }

    /// Unit right direction (`look × normal`); zero if degenerate.
    pub fn right_direction(&self) -> Vec3 {
        self.look_direction().cross(self.normal_direction()).normalize_or_zero()
    }

    // ===== INPUT DELTAS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_orientation(&mut self, orientation: Mat4) {
        self.orientation = orientation;
    }

    /// Translate by a world-space delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Move along the current look direction (negative moves backwards).
    pub fn move_along_look(&mut self, distance: f32) {
        self.position += self.look_direction() * distance;
    }

    /// Rotate the orientation about a world-space axis through the pose position.
    ///
    /// # Errors
    ///
    /// `DegenerateOrientation` if `axis` is zero-length.
    pub fn rotate_about_global(&mut self, axis: Vec3, radians: f32) -> Result<()> {
        if axis.length_squared() < DIRECTION_EPSILON {
            engine_bail!(DegenerateOrientation, "galaxy3d::Pose",
                "rotation axis {:?} is zero-length", axis);
        }
        let rotation = Mat4::from_axis_angle(axis.normalize(), radians);
        self.orientation = rotation * self.orientation;
        Ok(())
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

/// Normalize `look` and orthogonalize `normal` against it.
///
/// Returns `(look, normal)` as unit vectors.
pub(crate) fn orthonormal_axes(look: Vec3, normal: Vec3) -> Result<(Vec3, Vec3)> {
    if look.length_squared() < DIRECTION_EPSILON {
        engine_bail!(DegenerateOrientation, "galaxy3d::Pose",
            "look direction {:?} is zero-length", look);
    }
    if normal.length_squared() < DIRECTION_EPSILON {
        engine_bail!(DegenerateOrientation, "galaxy3d::Pose",
            "normal direction {:?} is zero-length", normal);
    }
    let look = look.normalize();
    let normal = normal.normalize();
    let ortho = normal - look * look.dot(normal);
    if ortho.length_squared() < 1e-8 {
        engine_bail!(DegenerateOrientation, "galaxy3d::Pose",
            "look {:?} and normal {:?} are parallel", look, normal);
    }
    Ok((look, ortho.normalize()))
}

#[cfg(test)]
#[path = "pose_tests.rs"]
mod tests;
