/// Frustum: six bounding planes derived from a pose and optical parameters.
///
/// Each plane is `{ normal, signed_distance }` with a unit, inward-pointing
/// normal. A point P is inside the plane's half-space when
/// `dot(normal, P) >= signed_distance`, and inside the frustum when it is
/// inside all six.
///
/// Frustums are cheap values: rebuild one whenever the pose or the
/// parameters change instead of mutating it.

use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::scene::BoundingBox;
use super::frustum_params::FrustumParams;
use super::pose::{orthonormal_axes, Pose};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Half-space boundary with an inward-pointing unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub signed_distance: f32,
}

impl Plane {
    /// Plane with the given inward normal passing through `point`.
    pub fn through_point(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal,
            signed_distance: normal.dot(point),
        }
    }

    /// `dot(normal, point) >= signed_distance`
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.normal.dot(point) >= self.signed_distance
    }

    /// Conservative box/plane test.
    ///
    /// Returns `true` only if EVERY corner lies outside the half-space.
    /// A single inside corner keeps the box, so boxes straddling the
    /// plane are never rejected.
    #[inline]
    pub fn rejects_corners(&self, corners: &[Vec3; 8]) -> bool {
        !corners.iter().any(|&corner| self.contains_point(corner))
    }
}

/// Six frustum planes: left, right, bottom, top, near, far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Build the six planes from optical parameters and a pose given as vectors.
    ///
    /// Near/far are perpendicular to `look`, offset by the near/far
    /// distances from `position`. The side planes pass through `position`
    /// and are tilted from `look` by half the horizontal (left/right) or
    /// vertical (top/bottom) FOV around the axes built from `normal` and
    /// `look x normal`.
    ///
    /// # Errors
    ///
    /// `InvalidFrustum` if the params are invalid, `DegenerateOrientation`
    /// if `look`/`normal` are zero or parallel.
    pub fn new(params: &FrustumParams, look: Vec3, normal: Vec3, position: Vec3) -> Result<Self> {
        params.validate()?;
        let (look, up) = orthonormal_axes(look, normal)?;
        let right = look.cross(up);

        let half_h = (params.horizontal_fov() * 0.5).to_radians();
        let half_v = (params.vertical_fov() * 0.5).to_radians();
        let (sin_h, cos_h) = half_h.sin_cos();
        let (sin_v, cos_v) = half_v.sin_cos();

        let mut planes = [Plane { normal: Vec3::ZERO, signed_distance: 0.0 }; 6];
        planes[PLANE_LEFT] = Plane::through_point(right * cos_h + look * sin_h, position);
        planes[PLANE_RIGHT] = Plane::through_point(-right * cos_h + look * sin_h, position);
        planes[PLANE_BOTTOM] = Plane::through_point(up * cos_v + look * sin_v, position);
        planes[PLANE_TOP] = Plane::through_point(-up * cos_v + look * sin_v, position);
        planes[PLANE_NEAR] = Plane::through_point(look, position + look * params.near_distance());
        planes[PLANE_FAR] = Plane::through_point(-look, position + look * params.far_distance());

        Ok(Self { planes })
    }

    /// Build the planes for a pose (look = orientation X, normal = orientation Z).
    pub fn from_pose(params: &FrustumParams, pose: &Pose) -> Result<Self> {
        Self::new(params, pose.look_direction(), pose.normal_direction(), pose.position())
    }

    /// Whether a point is inside all six planes.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.contains_point(point))
    }

    /// Containment test for a box given by its 8 world-space corners.
    ///
    /// Outside as soon as one plane rejects every corner; inside otherwise.
    pub fn contains_corners(&self, corners: &[Vec3; 8]) -> bool {
        !self.planes.iter().any(|plane| plane.rejects_corners(corners))
    }

    /// Containment test for a locally axis-aligned box under a world transform.
    ///
    /// A zero-volume box collapses to its position.
    pub fn contains_box(&self, bounds: &BoundingBox, orientation: &Mat4, position: Vec3) -> bool {
        if bounds.is_point() {
            return self.contains_point(position);
        }
        self.contains_corners(&bounds.world_corners(orientation, position))
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
