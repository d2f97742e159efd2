//! Scene culling module
//!
//! Tracked objects, their local bounding boxes, and the dual-frustum
//! gate that writes each object's per-frame visibility flag.

mod bounding_box;
mod tracked_object;
mod culling_config;
mod visibility_gate;

pub use bounding_box::BoundingBox;
pub use tracked_object::{TrackedObject, TrackedObjectKey};
pub use culling_config::CullingConfig;
pub use visibility_gate::{DualFrustumGate, VisibilityReport};
