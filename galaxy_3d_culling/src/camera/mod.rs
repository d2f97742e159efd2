//! Camera module: poses, optical parameters, and frustum geometry.
//!
//! A Pose is externally driven (input, camera sync). A Frustum is a pure
//! function of a Pose and FrustumParams, rebuilt whenever either changes.

mod pose;
mod frustum_params;
mod frustum;

pub use pose::Pose;
pub use frustum_params::{
    FovSource, FrustumParams, vertical_fov_from_horizontal, horizontal_fov_from_vertical,
};
pub use frustum::{
    Frustum, Plane,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
