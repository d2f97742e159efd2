/*!
# Galaxy 3D Culling

Per-frame visibility culling for the Galaxy 3D engine.

Given two independently posed frustums and a set of tracked objects
(world transform + local bounding half-extents), the dual-frustum gate
marks each object visible when its box is inside either frustum. The
renderer reads the flag to decide draw submission.

## Architecture

- **Pose**: position + orientation, driven by input or camera sync
- **FrustumParams**: aspect, FOV, near/far with validated invariants
- **Frustum**: six planes derived from a Pose and FrustumParams
- **BoundingBox**: local half-extents, expanded to 8 oriented world corners
- **DualFrustumGate**: registers objects and runs the per-frame sweep

The test is conservative: a box is rejected by a plane only when all
eight corners are outside it, so objects straddling a plane stay visible.
*/

// Internal modules
mod error;
pub mod log;
pub mod camera;
pub mod scene;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and slot control, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_min_severity, min_severity,
        };
    }

    // Camera sub-module: poses and frustum geometry
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module: tracked objects and the visibility gate
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
