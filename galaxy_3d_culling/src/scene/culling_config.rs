/// Configuration handed to a DualFrustumGate.
///
/// Host toggles live here as plain data, passed in at construction,
/// instead of as process-wide flags.

use crate::camera::FrustumParams;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CullingConfig {
    /// Optical parameters shared by the primary and secondary frustums
    pub params: FrustumParams,
    /// When false, every object is marked visible without testing
    pub culling_enabled: bool,
}

impl Default for CullingConfig {
    fn default() -> Self {
        Self {
            params: FrustumParams::default(),
            culling_enabled: true,
        }
    }
}
