//! Core data structures for the stitching engine.
//!
//! Includes the vector helpers (`Vec3`), the immutable slice loops and the
//! output triangles.

pub mod slice;
pub mod triangle;
pub mod vec3;
