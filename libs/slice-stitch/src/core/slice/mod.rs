//! # Slices
//!
//! A slice is one closed cross-sectional contour: an ordered loop of
//! vertices where the last vertex connects back to the first. Adjacency is
//! positional, `(i, (i + 1) % n)`, so vertices carry no links.

use config::constants::MIN_SLICE_VERTICES;

use crate::core::vec3::{is_finite, Vec3};
use crate::error::{StitchError, StitchResult};

/// A vertex of a slice loop.
///
/// `index` is the vertex's position within its owning slice and is its only
/// identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in 3D space.
    pub position: Vec3,
    /// Position of this vertex within its slice.
    pub index: usize,
}

/// An immutable, cyclically closed loop of at least three vertices, ordered
/// right-handed about the stacking axis.
///
/// # Example
///
/// ```rust
/// use slice_stitch::{Slice, Vec3};
///
/// let slice = Slice::new([Vec3::ZERO, Vec3::X, Vec3::Y]).unwrap();
/// assert_eq!(slice.len(), 3);
/// assert_eq!(slice.next_index(2), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    /// Position of the slice within its stack (0 for standalone slices)
    id: usize,
    vertices: Vec<Vertex>,
}

impl Slice {
    /// Builds a standalone slice (id 0) from points in loop order.
    ///
    /// # Errors
    ///
    /// [`StitchError::TooFewVertices`] for fewer than three points and
    /// [`StitchError::NonFiniteCoordinate`] for NaN or infinite coordinates.
    pub fn new(points: impl IntoIterator<Item = Vec3>) -> StitchResult<Self> {
        Self::with_id(0, points)
    }

    /// Builds a slice that knows its position in a stack.
    pub fn with_id(id: usize, points: impl IntoIterator<Item = Vec3>) -> StitchResult<Self> {
        let vertices: Vec<Vertex> = points
            .into_iter()
            .enumerate()
            .map(|(index, position)| Vertex { position, index })
            .collect();

        if vertices.len() < MIN_SLICE_VERTICES {
            return Err(StitchError::TooFewVertices {
                slice: id,
                count: vertices.len(),
                min: MIN_SLICE_VERTICES,
            });
        }

        if let Some(bad) = vertices.iter().find(|v| !is_finite(v.position)) {
            return Err(StitchError::NonFiniteCoordinate {
                slice: id,
                index: bad.index,
            });
        }

        Ok(Self { id, vertices })
    }

    /// Position of the slice within its stack.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Number of vertices in the loop.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a constructed slice; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The vertices in loop order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the vertex at `index`, if any.
    #[inline]
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// Position of the vertex at `index % len`.
    #[inline]
    pub fn position(&self, index: usize) -> Vec3 {
        self.vertices[index % self.vertices.len()].position
    }

    /// Index of the vertex following `index` around the loop.
    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.vertices.len()
    }

    /// Iterates the loop's edges as `(from, to)` index pairs, including the
    /// closing edge back to vertex 0.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.vertices.len()).map(move |i| (i, self.next_index(i)))
    }

    /// Returns the same loop re-indexed so that `start` becomes vertex 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slice_stitch::{Slice, Vec3};
    ///
    /// let slice = Slice::new([Vec3::ZERO, Vec3::X, Vec3::Y]).unwrap();
    /// let rotated = slice.rotated(1);
    /// assert_eq!(rotated.position(0), Vec3::X);
    /// assert_eq!(rotated.position(2), Vec3::ZERO);
    /// ```
    pub fn rotated(&self, start: usize) -> Self {
        let n = self.vertices.len();
        let vertices = (0..n)
            .map(|k| Vertex {
                position: self.position(start + k),
                index: k,
            })
            .collect();
        Self {
            id: self.id,
            vertices,
        }
    }

    /// Average of the loop's vertex positions.
    pub fn centroid(&self) -> Vec3 {
        let sum: Vec3 = self.vertices.iter().map(|v| v.position).sum();
        sum / self.vertices.len() as f64
    }
}

#[cfg(test)]
mod tests;
