//! Error types for the Galaxy3D culling core
//!
//! The culling core is pure geometry, so the taxonomy is narrow:
//! invalid optical parameters, degenerate orientations, missing poses,
//! and stale object keys.

use std::fmt;

/// Result type for culling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Culling errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Frustum parameters violate a precondition (FOV, aspect, near/far)
    InvalidFrustum(String),

    /// Look/normal directions are zero-length or parallel
    DegenerateOrientation(String),

    /// A frustum pose was used before it was ever set
    PoseNotSet(String),

    /// Unknown or stale object key
    InvalidResource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFrustum(msg) => write!(f, "Invalid frustum: {}", msg),
            Error::DegenerateOrientation(msg) => write!(f, "Degenerate orientation: {}", msg),
            Error::PoseNotSet(msg) => write!(f, "Pose not set: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error`] of the given variant and log it at ERROR level.
///
/// ```ignore
/// let err = engine_err!(InvalidFrustum, "galaxy3d::Frustum", "aspect {} <= 0", aspect);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($variant:ident, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::galaxy3d::Error::$variant(message)
    }};
}

/// Log and return an [`Error`] of the given variant from the current function.
#[macro_export]
macro_rules! engine_bail {
    ($variant:ident, $source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($variant, $source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
