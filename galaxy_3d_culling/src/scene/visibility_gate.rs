/// Dual-frustum visibility gate.
///
/// Maintains a primary frustum pose (steered by input, e.g. a debug
/// frustum) and a secondary pose synchronized from the live camera each
/// frame. Every registered object is visible when it is inside either
/// frustum.
///
/// Per frame, the caller must sync the secondary pose BEFORE evaluating
/// (`update_frame` does both in that order). Evaluation depends only on
/// the current poses and transforms: no history, no hysteresis.

use glam::{Mat4, Vec3};
use slotmap::SlotMap;
use crate::camera::{Frustum, FrustumParams, Pose};
use crate::error::Result;
use crate::{engine_bail, engine_debug, engine_trace};
use super::bounding_box::BoundingBox;
use super::culling_config::CullingConfig;
use super::tracked_object::{TrackedObject, TrackedObjectKey};

/// Counts from one sweep.
///
/// With culling disabled nothing is tested: `visible == evaluated` and
/// both hit counters stay 0. Otherwise `visible == primary_hits + secondary_only`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityReport {
    /// Objects evaluated
    pub evaluated: usize,
    /// Objects marked visible
    pub visible: usize,
    /// Visible objects inside the primary frustum (0 when culling is disabled)
    pub primary_hits: usize,
    /// Visible objects inside the secondary frustum only (0 when culling is disabled)
    pub secondary_only: usize,
}

impl VisibilityReport {
    /// Objects marked not visible
    pub fn culled(&self) -> usize {
        self.evaluated - self.visible
    }
}

pub struct DualFrustumGate {
    config: CullingConfig,
    primary_pose: Option<Pose>,
    secondary_pose: Option<Pose>,
    objects: SlotMap<TrackedObjectKey, TrackedObject>,
}

impl DualFrustumGate {
    /// Create an empty gate. Both poses start unset.
    ///
    /// # Errors
    ///
    /// `InvalidFrustum` if `config.params` fails validation.
    pub fn new(config: CullingConfig) -> Result<Self> {
        config.params.validate()?;
        Ok(Self {
            config,
            primary_pose: None,
            secondary_pose: None,
            objects: SlotMap::with_key(),
        })
    }

    pub fn config(&self) -> &CullingConfig {
        &self.config
    }

    /// Replace the optical parameters shared by both frustums.
    pub fn set_params(&mut self, params: FrustumParams) -> Result<()> {
        params.validate()?;
        self.config.params = params;
        Ok(())
    }

    pub fn set_culling_enabled(&mut self, enabled: bool) {
        if self.config.culling_enabled != enabled {
            engine_debug!("galaxy3d::DualFrustumGate", "culling {}",
                if enabled { "enabled" } else { "disabled" });
        }
        self.config.culling_enabled = enabled;
    }

    // ===== OBJECTS =====

    /// Start tracking an object. Returns a stable key.
    pub fn register(&mut self, object: TrackedObject) -> TrackedObjectKey {
        let key = self.objects.insert(object);
        engine_debug!("galaxy3d::DualFrustumGate",
            "registered {:?} ({} tracked)", key, self.objects.len());
        key
    }

    /// Stop tracking an object. Returns false if the key is invalid.
    pub fn deregister(&mut self, key: TrackedObjectKey) -> bool {
        let removed = self.objects.remove(key).is_some();
        if removed {
            engine_debug!("galaxy3d::DualFrustumGate",
                "deregistered {:?} ({} tracked)", key, self.objects.len());
        }
        removed
    }

    /// Copy a host entity's world transform. Returns false if the key is invalid.
    pub fn set_transform(&mut self, key: TrackedObjectKey, orientation: Mat4, position: Vec3) -> bool {
        match self.objects.get_mut(key) {
            Some(object) => {
                object.set_transform(orientation, position);
                true
            }
            None => false,
        }
    }

    /// Replace the local bounds of a tracked object.
    ///
    /// # Errors
    ///
    /// `InvalidResource` if the key was deregistered or never issued.
    pub fn set_bounds(&mut self, key: TrackedObjectKey, bounds: BoundingBox) -> Result<()> {
        let Some(object) = self.objects.get_mut(key) else {
            engine_bail!(InvalidResource, "galaxy3d::DualFrustumGate",
                "set_bounds: unknown object key {:?}", key);
        };
        object.set_bounds(bounds);
        Ok(())
    }

    pub fn object(&self, key: TrackedObjectKey) -> Option<&TrackedObject> {
        self.objects.get(key)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Visibility flag from the last sweep, `None` for invalid keys.
    pub fn is_visible(&self, key: TrackedObjectKey) -> Option<bool> {
        self.objects.get(key).map(TrackedObject::is_visible)
    }

    /// Keys of objects marked visible by the last sweep.
    pub fn visible_keys(&self) -> impl Iterator<Item = TrackedObjectKey> + '_ {
        self.objects.iter()
            .filter(|(_, object)| object.is_visible())
            .map(|(key, _)| key)
    }

    // ===== POSES =====

    pub fn set_primary_pose(&mut self, pose: Pose) {
        self.primary_pose = Some(pose);
    }

    pub fn primary_pose(&self) -> Option<&Pose> {
        self.primary_pose.as_ref()
    }

    /// Mutable access for input deltas.
    ///
    /// # Errors
    ///
    /// `PoseNotSet` if the primary pose was never set.
    pub fn primary_pose_mut(&mut self) -> Result<&mut Pose> {
        match self.primary_pose.as_mut() {
            Some(pose) => Ok(pose),
            None => engine_bail!(PoseNotSet, "galaxy3d::DualFrustumGate",
                "primary frustum pose was never set"),
        }
    }

    /// Overwrite the secondary pose with the camera's current pose.
    pub fn sync_secondary(&mut self, camera_pose: &Pose) {
        self.secondary_pose = Some(*camera_pose);
    }

    pub fn secondary_pose(&self) -> Option<&Pose> {
        self.secondary_pose.as_ref()
    }

    // ===== EVALUATION =====

    /// Build the primary and secondary frustums from the current poses.
    ///
    /// # Errors
    ///
    /// `PoseNotSet` if either pose is unset, `DegenerateOrientation` if a
    /// pose has zero or parallel look/normal directions.
    pub fn frustums(&self) -> Result<(Frustum, Frustum)> {
        let Some(primary) = self.primary_pose.as_ref() else {
            engine_bail!(PoseNotSet, "galaxy3d::DualFrustumGate",
                "primary frustum pose was never set");
        };
        let Some(secondary) = self.secondary_pose.as_ref() else {
            engine_bail!(PoseNotSet, "galaxy3d::DualFrustumGate",
                "secondary frustum pose was never synced");
        };
        let params = &self.config.params;
        Ok((Frustum::from_pose(params, primary)?, Frustum::from_pose(params, secondary)?))
    }

    /// Re-evaluate every tracked object and write its visibility flag.
    ///
    /// Both frustums are built before any flag is written, so a failed
    /// sweep leaves every flag from the previous frame untouched.
    pub fn evaluate_all(&mut self) -> Result<VisibilityReport> {
        let mut report = VisibilityReport {
            evaluated: self.objects.len(),
            ..Default::default()
        };

        if !self.config.culling_enabled {
            for object in self.objects.values_mut() {
                object.set_visible(true);
            }
            report.visible = report.evaluated;
            return Ok(report);
        }

        let (primary, secondary) = self.frustums()?;

        for object in self.objects.values_mut() {
            let corners = object.world_corners();
            let visible = if primary.contains_corners(&corners) {
                report.primary_hits += 1;
                true
            } else if secondary.contains_corners(&corners) {
                report.secondary_only += 1;
                true
            } else {
                false
            };
            object.set_visible(visible);
        }
        report.visible = report.primary_hits + report.secondary_only;

        engine_trace!("galaxy3d::DualFrustumGate",
            "sweep: {} evaluated, {} visible ({} primary, {} secondary only), {} culled",
            report.evaluated, report.visible, report.primary_hits,
            report.secondary_only, report.culled());

        Ok(report)
    }

    /// One frame: sync the secondary pose from the camera, then evaluate.
    pub fn update_frame(&mut self, camera_pose: &Pose) -> Result<VisibilityReport> {
        self.sync_secondary(camera_pose);
        self.evaluate_all()
    }
}

#[cfg(test)]
#[path = "visibility_gate_tests.rs"]
mod tests;
