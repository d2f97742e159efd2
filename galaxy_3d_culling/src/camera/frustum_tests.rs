use glam::{Mat4, Vec3};
use crate::error::Error;
use crate::scene::BoundingBox;
use super::*;

/// Debug frustum at the origin, looking +X with +Z up (hfov 50, aspect 3, near 10, far 50)
fn origin_frustum() -> Frustum {
    Frustum::new(&FrustumParams::default(), Vec3::X, Vec3::Z, Vec3::ZERO).unwrap()
}

fn unit_box() -> BoundingBox {
    BoundingBox::from_half_extents(Vec3::ONE)
}

// ============================================================================
// Plane derivation
// ============================================================================

#[test]
fn test_planes_are_normalized() {
    let frustum = origin_frustum();
    for plane in &frustum.planes {
        assert!((plane.normal.length() - 1.0).abs() < 1e-5, "plane normal should be unit length");
    }
}

#[test]
fn test_near_far_planes_perpendicular_to_look() {
    let frustum = origin_frustum();
    let near = frustum.planes[PLANE_NEAR];
    let far = frustum.planes[PLANE_FAR];

    assert!((near.normal - Vec3::X).length() < 1e-6);
    assert!((near.signed_distance - 10.0).abs() < 1e-5);
    assert!((far.normal + Vec3::X).length() < 1e-6);
    assert!((far.signed_distance + 50.0).abs() < 1e-5);
}

#[test]
fn test_side_planes_pass_through_position() {
    let position = Vec3::new(3.0, -7.0, 15.0);
    let frustum = Frustum::new(&FrustumParams::default(), Vec3::X, Vec3::Z, position).unwrap();
    for index in [PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP] {
        let plane = frustum.planes[index];
        assert!((plane.normal.dot(position) - plane.signed_distance).abs() < 1e-4);
    }
}

#[test]
fn test_side_planes_follow_half_fov() {
    let params = FrustumParams::from_horizontal_fov(90.0, 1.0, 1.0, 100.0).unwrap();
    let frustum = Frustum::new(&params, Vec3::X, Vec3::Z, Vec3::ZERO).unwrap();

    // 90° in both directions: the edge rays are the 45° diagonals.
    assert!(frustum.contains_point(Vec3::new(50.0, 49.0, 0.0)));
    assert!(!frustum.contains_point(Vec3::new(50.0, 51.0, 0.0)));
    assert!(frustum.contains_point(Vec3::new(50.0, 0.0, -49.0)));
    assert!(!frustum.contains_point(Vec3::new(50.0, 0.0, -51.0)));
}

#[test]
fn test_vertical_extent_uses_vertical_fov() {
    // hfov 50, aspect 3 → vfov ≈ 17.67°, tan(8.835°) ≈ 0.1554
    let frustum = origin_frustum();
    assert!(frustum.contains_point(Vec3::new(30.0, 0.0, 4.5)));
    assert!(!frustum.contains_point(Vec3::new(30.0, 0.0, 5.0)));
    // Horizontal: tan(25°) ≈ 0.4663 → 13.99 at depth 30
    assert!(frustum.contains_point(Vec3::new(30.0, 13.5, 0.0)));
    assert!(!frustum.contains_point(Vec3::new(30.0, -14.5, 0.0)));
}

#[test]
fn test_from_pose_matches_vectors() {
    let pose = Pose::looking(Vec3::Y, Vec3::Z, Vec3::new(1.0, 2.0, 3.0)).unwrap();
    let params = FrustumParams::default();
    let from_pose = Frustum::from_pose(&params, &pose).unwrap();
    let from_vectors = Frustum::new(&params, Vec3::Y, Vec3::Z, Vec3::new(1.0, 2.0, 3.0)).unwrap();
    for (a, b) in from_pose.planes.iter().zip(from_vectors.planes.iter()) {
        assert!((a.normal - b.normal).length() < 1e-5);
        assert!((a.signed_distance - b.signed_distance).abs() < 1e-4);
    }
}

#[test]
fn test_rejects_parallel_look_and_normal() {
    let result = Frustum::new(&FrustumParams::default(), Vec3::Z, Vec3::Z, Vec3::ZERO);
    assert!(matches!(result, Err(Error::DegenerateOrientation(_))));
}

#[test]
fn test_rejects_degenerate_pose() {
    let pose = Pose::new(Mat4::ZERO, Vec3::ZERO);
    let result = Frustum::from_pose(&FrustumParams::default(), &pose);
    assert!(matches!(result, Err(Error::DegenerateOrientation(_))));
}

// ============================================================================
// Plane / box classifier
// ============================================================================

#[test]
fn test_plane_rejects_only_when_all_corners_outside() {
    let plane = Plane::through_point(Vec3::X, Vec3::new(10.0, 0.0, 0.0));
    let corners_at = |x: f32| unit_box().world_corners(&Mat4::IDENTITY, Vec3::new(x, 0.0, 0.0));

    assert!(plane.rejects_corners(&corners_at(5.0)));
    // straddles x = 10: corners at 9.5..11.5 with one side inside
    assert!(!plane.rejects_corners(&corners_at(10.5)));
    assert!(!plane.rejects_corners(&corners_at(20.0)));
}

#[test]
fn test_plane_boundary_point_is_inside() {
    let plane = Plane::through_point(Vec3::X, Vec3::new(10.0, 0.0, 0.0));
    assert!(plane.contains_point(Vec3::new(10.0, 5.0, -5.0)));
}

// ============================================================================
// Containment
// ============================================================================

#[test]
fn test_box_on_axis_inside() {
    let frustum = origin_frustum();
    assert!(frustum.contains_box(&unit_box(), &Mat4::IDENTITY, Vec3::new(30.0, 0.0, 0.0)));
}

#[test]
fn test_box_beyond_far_plane_outside() {
    let frustum = origin_frustum();
    assert!(!frustum.contains_box(&unit_box(), &Mat4::IDENTITY, Vec3::new(100.0, 0.0, 0.0)));
}

#[test]
fn test_box_far_off_axis_outside() {
    let frustum = origin_frustum();
    assert!(!frustum.contains_box(&unit_box(), &Mat4::IDENTITY, Vec3::new(30.0, 40.0, 0.0)));
}

#[test]
fn test_box_behind_position_outside() {
    let frustum = origin_frustum();
    assert!(!frustum.contains_box(&unit_box(), &Mat4::IDENTITY, Vec3::new(-30.0, 0.0, 0.0)));
}

#[test]
fn test_box_straddling_far_plane_inside() {
    let frustum = origin_frustum();
    assert!(frustum.contains_box(&unit_box(), &Mat4::IDENTITY, Vec3::new(50.0, 0.0, 0.0)));
}

#[test]
fn test_box_straddling_near_plane_inside() {
    let frustum = origin_frustum();
    assert!(frustum.contains_box(&unit_box(), &Mat4::IDENTITY, Vec3::new(10.0, 0.0, 0.0)));
}

#[test]
fn test_rotated_box_reaches_into_frustum() {
    let frustum = origin_frustum();
    // Long thin box just past the far plane: axis-aligned it stays out,
    // rotated so its long axis points back along -X it reaches inside.
    let bounds = BoundingBox::from_half_extents(Vec3::new(0.5, 0.5, 6.0));
    let position = Vec3::new(54.0, 0.0, 0.0);
    assert!(!frustum.contains_box(&bounds, &Mat4::IDENTITY, position));

    let rotation = Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2);
    assert!(frustum.contains_box(&bounds, &rotation, position));
}

#[test]
fn test_zero_volume_box_is_a_point() {
    let frustum = origin_frustum();
    let point = BoundingBox::from_half_extents(Vec3::ZERO);
    assert!(frustum.contains_box(&point, &Mat4::IDENTITY, Vec3::new(30.0, 0.0, 0.0)));
    assert!(!frustum.contains_box(&point, &Mat4::IDENTITY, Vec3::new(50.5, 0.0, 0.0)));
}

#[test]
fn test_plane_constants() {
    assert_eq!(PLANE_LEFT, 0);
    assert_eq!(PLANE_RIGHT, 1);
    assert_eq!(PLANE_BOTTOM, 2);
    assert_eq!(PLANE_TOP, 3);
    assert_eq!(PLANE_NEAR, 4);
    assert_eq!(PLANE_FAR, 5);
}
