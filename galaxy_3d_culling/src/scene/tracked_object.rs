/// Tracked objects: world entities whose visibility the gate maintains.
///
/// The host keeps ownership of its scene entity; a TrackedObject mirrors
/// only what culling reads (orientation, position, local bounds) and
/// carries the one output the renderer reads back: the visibility flag.

use glam::{Mat4, Vec3};
use slotmap::new_key_type;
use super::bounding_box::BoundingBox;

new_key_type! {
    /// Stable key for a TrackedObject within a DualFrustumGate.
    ///
    /// Keys remain valid even after other objects are deregistered.
    pub struct TrackedObjectKey;
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackedObject {
    orientation: Mat4,
    position: Vec3,
    bounds: BoundingBox,
    visible: bool,
}

impl TrackedObject {
    /// New objects start hidden until their first evaluation.
    pub fn new(orientation: Mat4, position: Vec3, bounds: BoundingBox) -> Self {
        Self {
            orientation,
            position,
            bounds,
            visible: false,
        }
    }

    /// Unrotated object at `position`.
    pub fn at(position: Vec3, bounds: BoundingBox) -> Self {
        Self::new(Mat4::IDENTITY, position, bounds)
    }

    pub fn orientation(&self) -> &Mat4 {
        &self.orientation
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Result of the most recent evaluation.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Copy the host entity's current world transform.
    pub fn set_transform(&mut self, orientation: Mat4, position: Vec3) {
        self.orientation = orientation;
        self.position = position;
    }

    pub fn set_bounds(&mut self, bounds: BoundingBox) {
        self.bounds = bounds;
    }

    /// World-space corners for the current transform.
    pub fn world_corners(&self) -> [Vec3; 8] {
        self.bounds.world_corners(&self.orientation, self.position)
    }

    /// Written only by the gate.
    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
