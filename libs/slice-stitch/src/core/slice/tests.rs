//! Tests for slice construction and loop indexing.

use super::*;

fn unit_square() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ]
}

#[test]
fn new_assigns_positional_indices() {
    let slice = Slice::new(unit_square()).unwrap();
    for (i, v) in slice.vertices().iter().enumerate() {
        assert_eq!(v.index, i);
    }
    assert_eq!(slice.id(), 0);
}

#[test]
fn with_id_records_stack_position() {
    let slice = Slice::with_id(7, unit_square()).unwrap();
    assert_eq!(slice.id(), 7);
}

#[test]
fn empty_slice_is_rejected() {
    let err = Slice::new(Vec::<Vec3>::new()).unwrap_err();
    assert_eq!(
        err,
        StitchError::TooFewVertices {
            slice: 0,
            count: 0,
            min: 3
        }
    );
}

#[test]
fn two_point_slice_is_rejected() {
    let err = Slice::with_id(2, [Vec3::ZERO, Vec3::X]).unwrap_err();
    assert!(matches!(
        err,
        StitchError::TooFewVertices { slice: 2, count: 2, .. }
    ));
}

#[test]
fn non_finite_coordinate_is_rejected() {
    let err = Slice::new([Vec3::ZERO, Vec3::new(f64::NAN, 0.0, 0.0), Vec3::Y]).unwrap_err();
    assert_eq!(err, StitchError::NonFiniteCoordinate { slice: 0, index: 1 });
}

#[test]
fn collinear_points_are_accepted() {
    let slice = Slice::new([Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0)]);
    assert!(slice.is_ok());
}

#[test]
fn next_index_wraps_to_start() {
    let slice = Slice::new(unit_square()).unwrap();
    assert_eq!(slice.next_index(0), 1);
    assert_eq!(slice.next_index(3), 0);
}

#[test]
fn edges_close_the_loop() {
    let slice = Slice::new(unit_square()).unwrap();
    let edges: Vec<_> = slice.edges().collect();
    assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
}

#[test]
fn rotated_preserves_cyclic_order() {
    let slice = Slice::new(unit_square()).unwrap();
    let rotated = slice.rotated(2);
    assert_eq!(rotated.len(), 4);
    for k in 0..4 {
        assert_eq!(rotated.position(k), slice.position(2 + k));
        assert_eq!(rotated.vertices()[k].index, k);
    }
}

#[test]
fn vertex_out_of_range_is_none() {
    let slice = Slice::new(unit_square()).unwrap();
    assert!(slice.vertex(3).is_some());
    assert!(slice.vertex(4).is_none());
}

#[test]
fn centroid_of_square() {
    let slice = Slice::new(unit_square()).unwrap();
    assert_eq!(slice.centroid(), Vec3::new(0.5, 0.5, 0.0));
}
