//! Unit tests for error.rs
//!
//! Tests Error variants, Display output and the logging error macros.

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_invalid_frustum_display() {
    let err = Error::InvalidFrustum("aspect ratio must be > 0".to_string());
    let display = format!("{}", err);
    assert!(display.starts_with("Invalid frustum"));
    assert!(display.contains("aspect ratio must be > 0"));
}

#[test]
fn test_degenerate_orientation_display() {
    let err = Error::DegenerateOrientation("look parallel to normal".to_string());
    assert_eq!(format!("{}", err), "Degenerate orientation: look parallel to normal");
}

#[test]
fn test_pose_not_set_display() {
    let err = Error::PoseNotSet("primary".to_string());
    assert_eq!(format!("{}", err), "Pose not set: primary");
}

#[test]
fn test_invalid_resource_display() {
    let err = Error::InvalidResource("stale key".to_string());
    assert!(format!("{}", err).contains("stale key"));
}

#[test]
fn test_error_is_std_error() {
    let err = Error::PoseNotSet("secondary".to_string());
    let _: &dyn std::error::Error = &err;
}

// ============================================================================
// MACRO TESTS
// ============================================================================

fn rejects_negative(value: f32) -> Result<f32> {
    if value < 0.0 {
        crate::engine_bail!(InvalidFrustum, "galaxy3d::tests", "value {} < 0", value);
    }
    Ok(value)
}

#[test]
fn test_engine_err_builds_variant() {
    let err = crate::engine_err!(InvalidResource, "galaxy3d::tests", "key {} missing", 7);
    assert_eq!(err, Error::InvalidResource("key 7 missing".to_string()));
}

#[test]
fn test_engine_bail_returns_early() {
    assert_eq!(rejects_negative(2.0), Ok(2.0));
    assert_eq!(
        rejects_negative(-1.0),
        Err(Error::InvalidFrustum("value -1 < 0".to_string())),
    );
}

#[test]
fn test_error_propagation_with_question_mark() {
    fn outer() -> Result<f32> {
        let v = rejects_negative(-3.0)?;
        Ok(v * 2.0)
    }

    assert!(matches!(outer(), Err(Error::InvalidFrustum(_))));
}
