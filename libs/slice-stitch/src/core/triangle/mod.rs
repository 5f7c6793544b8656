//! # Triangles
//!
//! Output triangles of the stitcher. Corners copy their positions so a
//! triangle list outlives the slices it was built from, while keeping the
//! `(slice, index)` identity of each corner for labeling and debugging.

use config::constants::NORMAL_EPSILON;

use crate::core::slice::{Slice, Vertex};
use crate::core::vec3::{triangle_area, triangle_normal_with, Vec3};

/// One corner of a triangle: a vertex of a specific slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    /// Id of the slice the vertex belongs to.
    pub slice: usize,
    /// Index of the vertex within that slice.
    pub index: usize,
    /// Position of the vertex.
    pub position: Vec3,
}

impl Corner {
    /// Creates a corner referring to `vertex` of `slice`.
    #[inline]
    pub fn of(slice: &Slice, vertex: &Vertex) -> Self {
        Self {
            slice: slice.id(),
            index: vertex.index,
            position: vertex.position,
        }
    }
}

/// A triangle with corners in counter-clockwise order as seen from outside
/// the surface, and its outward unit normal.
///
/// # Example
///
/// ```rust
/// use slice_stitch::{Corner, Triangle, Vec3};
///
/// let corner = |index, position| Corner { slice: 0, index, position };
/// let tri = Triangle::new([
///     corner(0, Vec3::ZERO),
///     corner(1, Vec3::X),
///     corner(2, Vec3::Y),
/// ]);
/// assert_eq!(tri.normal(), Vec3::Z);
/// assert_eq!(tri.area(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    corners: [Corner; 3],
    normal: Vec3,
}

impl Triangle {
    /// Creates a triangle and derives its normal from the corner winding.
    ///
    /// Degenerate corners are accepted; their normal is (near) zero.
    pub fn new(corners: [Corner; 3]) -> Self {
        Self::with_normal_epsilon(corners, NORMAL_EPSILON)
    }

    /// Like [`new`](Self::new), but cross products no longer than
    /// `normal_epsilon` are kept unnormalized.
    pub fn with_normal_epsilon(corners: [Corner; 3], normal_epsilon: f64) -> Self {
        let normal = triangle_normal_with(
            corners[0].position,
            corners[1].position,
            corners[2].position,
            normal_epsilon,
        );
        Self { corners, normal }
    }

    /// The three corners in winding order.
    #[inline]
    pub fn corners(&self) -> &[Corner; 3] {
        &self.corners
    }

    /// The three corner positions in winding order.
    #[inline]
    pub fn positions(&self) -> [Vec3; 3] {
        [
            self.corners[0].position,
            self.corners[1].position,
            self.corners[2].position,
        ]
    }

    /// Outward unit normal.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Surface area.
    #[inline]
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.positions();
        triangle_area(a, b, c)
    }

    /// Average of the corner positions, e.g. as an anchor for a label.
    #[inline]
    pub fn centroid(&self) -> Vec3 {
        let [a, b, c] = self.positions();
        (a + b + c) / 3.0
    }

    /// True when the triangle spans zero area.
    pub fn is_degenerate(&self) -> bool {
        config::constants::approx_zero(self.area())
    }
}

#[cfg(test)]
mod tests;
