/// Local-space bounding box of a tracked object.
///
/// Stored as half-extents around the object's origin, taken from the
/// mesh's axis-aligned bounding box. World-space corners are recomputed
/// on every test since the object's pose may change every frame.

use glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    half_extents: Vec3,
}

impl BoundingBox {
    /// Negative components are clamped to zero (zero-volume along that axis).
    pub fn from_half_extents(half_extents: Vec3) -> Self {
        Self {
            half_extents: half_extents.max(Vec3::ZERO),
        }
    }

    /// From full edge lengths (lx, ly, lz).
    pub fn from_extents(extents: Vec3) -> Self {
        Self::from_half_extents(extents * 0.5)
    }

    /// From a mesh AABB. Only its size is kept; the box is centered on the object origin.
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self::from_extents(max - min)
    }

    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    /// Whether the box has collapsed to a single point.
    pub fn is_point(&self) -> bool {
        self.half_extents == Vec3::ZERO
    }

    /// The 8 world-space corners: `orientation * (±hx, ±hy, ±hz) + position`.
    ///
    /// Order is x-major, then y, then z, starting from (-, -, -).
    pub fn world_corners(&self, orientation: &Mat4, position: Vec3) -> [Vec3; 8] {
        let mut corners = [Vec3::ZERO; 8];
        let mut i = 0;
        for sx in [-1.0, 1.0] {
            for sy in [-1.0, 1.0] {
                for sz in [-1.0, 1.0] {
                    let local = Vec3::new(sx, sy, sz) * self.half_extents;
                    corners[i] = orientation.transform_vector3(local) + position;
                    i += 1;
                }
            }
        }
        corners
    }
}

#[cfg(test)]
#[path = "bounding_box_tests.rs"]
mod tests;
