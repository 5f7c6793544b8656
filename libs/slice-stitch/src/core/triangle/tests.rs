//! Tests for triangle construction.

use super::*;
use approx::assert_relative_eq;

fn corner(slice: usize, index: usize, position: Vec3) -> Corner {
    Corner {
        slice,
        index,
        position,
    }
}

#[test]
fn normal_points_out_of_ccw_face() {
    let tri = Triangle::new([
        corner(0, 0, Vec3::ZERO),
        corner(0, 1, Vec3::Y),
        corner(1, 0, Vec3::Z),
    ]);
    assert_eq!(tri.normal(), Vec3::X);
}

#[test]
fn normal_is_unit_length_for_large_faces() {
    let tri = Triangle::new([
        corner(0, 0, Vec3::ZERO),
        corner(0, 1, Vec3::new(10.0, 0.0, 0.0)),
        corner(1, 0, Vec3::new(0.0, 10.0, 3.0)),
    ]);
    assert_relative_eq!(tri.normal().length(), 1.0, epsilon = 1e-12);
}

#[test]
fn degenerate_triangle_is_permitted() {
    let p = Vec3::new(1.0, 2.0, 3.0);
    let tri = Triangle::new([corner(0, 0, p), corner(0, 1, p), corner(1, 0, p)]);
    assert!(tri.is_degenerate());
    assert_eq!(tri.normal(), Vec3::ZERO);
    assert_eq!(tri.area(), 0.0);
}

#[test]
fn corner_of_copies_identity_and_position() {
    let slice = Slice::with_id(3, [Vec3::ZERO, Vec3::X, Vec3::Y]).unwrap();
    let c = Corner::of(&slice, &slice.vertices()[2]);
    assert_eq!(c, corner(3, 2, Vec3::Y));
}

#[test]
fn centroid_is_corner_average() {
    let tri = Triangle::new([
        corner(0, 0, Vec3::ZERO),
        corner(0, 1, Vec3::new(3.0, 0.0, 0.0)),
        corner(1, 0, Vec3::new(0.0, 3.0, 0.0)),
    ]);
    assert_eq!(tri.centroid(), Vec3::new(1.0, 1.0, 0.0));
}
