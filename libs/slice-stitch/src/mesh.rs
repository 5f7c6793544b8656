//! # Render Buffers
//!
//! Flat-shaded, un-indexed triangle buffers built from a stitched triangle
//! list. Each triangle contributes three vertices that all carry its face
//! normal.
//!
//! Geometry stays f64; conversion to f32 happens only when a renderer asks
//! for GPU buffers.

use crate::core::triangle::Triangle;
use crate::core::vec3::{triangle_area, Vec3};

/// Un-indexed triangle soup with one face normal per corner.
///
/// # Example
///
/// ```rust
/// use slice_stitch::{stitch_pair, Mesh, Slice, Vec3};
///
/// let top = Slice::with_id(0, [Vec3::ZERO, Vec3::X, Vec3::Y]).unwrap();
/// let bottom = Slice::with_id(1, [-Vec3::Z, Vec3::X - Vec3::Z, Vec3::Y - Vec3::Z]).unwrap();
/// let mesh = Mesh::from_triangles(&stitch_pair(&top, &bottom).unwrap());
///
/// assert_eq!(mesh.triangle_count(), 6);
/// assert_eq!(mesh.positions_f32().len(), 6 * 3 * 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Corner positions, three per triangle
    positions: Vec<Vec3>,
    /// Face normal repeated for each corner
    normals: Vec<Vec3>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens `triangles` in order.
    pub fn from_triangles(triangles: &[Triangle]) -> Self {
        let mut mesh = Self {
            positions: Vec::with_capacity(triangles.len() * 3),
            normals: Vec::with_capacity(triangles.len() * 3),
        };
        for tri in triangles {
            mesh.push_triangle(tri);
        }
        mesh
    }

    /// Appends one triangle.
    pub fn push_triangle(&mut self, triangle: &Triangle) {
        let normal = triangle.normal();
        for position in triangle.positions() {
            self.positions.push(position);
            self.normals.push(normal);
        }
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of vertices (three per triangle).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Corner positions.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Per-corner normals.
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Positions as a flat `[x, y, z, ...]` f32 buffer.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten_f32(&self.positions)
    }

    /// Normals as a flat `[nx, ny, nz, ...]` f32 buffer.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_f32(&self.normals)
    }

    /// Axis-aligned bounding box as `(min, max)`; both zero when empty.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some((first, rest)) = self.positions.split_first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };
        rest.iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)))
    }

    /// Sum of the triangle areas.
    pub fn total_area(&self) -> f64 {
        self.positions
            .chunks_exact(3)
            .map(|c| triangle_area(c[0], c[1], c[2]))
            .sum()
    }
}

fn flatten_f32(vectors: &[Vec3]) -> Vec<f32> {
    vectors
        .iter()
        .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::slice::Slice;
    use crate::ops::assemble::stitch_pair;
    use approx::assert_relative_eq;

    fn prism() -> Vec<Triangle> {
        let top = Slice::with_id(0, [Vec3::ZERO, Vec3::X, Vec3::Y]).unwrap();
        let bottom = Slice::with_id(1, [-Vec3::Z, Vec3::X - Vec3::Z, Vec3::Y - Vec3::Z]).unwrap();
        stitch_pair(&top, &bottom).unwrap()
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.bounding_box(), (Vec3::ZERO, Vec3::ZERO));
        assert_eq!(mesh.total_area(), 0.0);
    }

    #[test]
    fn test_from_triangles_layout() {
        let triangles = prism();
        let mesh = Mesh::from_triangles(&triangles);
        assert_eq!(mesh.triangle_count(), 6);
        assert_eq!(mesh.vertex_count(), 18);

        for (t, tri) in triangles.iter().enumerate() {
            for k in 0..3 {
                assert_eq!(mesh.positions()[3 * t + k], tri.positions()[k]);
                assert_eq!(mesh.normals()[3 * t + k], tri.normal());
            }
        }
    }

    #[test]
    fn test_f32_buffers() {
        let mesh = Mesh::from_triangles(&prism());
        let positions = mesh.positions_f32();
        let normals = mesh.normals_f32();
        assert_eq!(positions.len(), 54);
        assert_eq!(normals.len(), 54);
        assert_eq!(positions[0], mesh.positions()[0].x as f32);
        assert_eq!(normals[5], mesh.normals()[1].z as f32);
    }

    #[test]
    fn test_bounding_box() {
        let mesh = Mesh::from_triangles(&prism());
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(max, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_total_area_matches_triangles() {
        let triangles = prism();
        let mesh = Mesh::from_triangles(&triangles);
        let expected: f64 = triangles.iter().map(Triangle::area).sum();
        assert_relative_eq!(mesh.total_area(), expected, epsilon = 1e-12);
        assert_relative_eq!(mesh.total_area(), 2.0 + std::f64::consts::SQRT_2, epsilon = 1e-12);
    }
}
