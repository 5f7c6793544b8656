//! # Slice Stitch
//!
//! Reconstructs a triangulated surface from a stack of parallel contours.
//! Each pair of adjacent slices is joined by the minimum-area tube found by
//! a dynamic program over the cyclic alignment of the two loops, seeded by
//! the closest cross-slice vertex pair.
//!
//! ## Architecture
//!
//! ```text
//! &[Slice] → ops::assemble (per adjacent pair)
//!              ├─ ops::closest_pair  (anchor)
//!              └─ ops::min_area      (DP + backtrace)
//!          → Vec<Triangle> → Mesh (GPU buffers)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use slice_stitch::{stitch_stack, Slice, Vec3};
//!
//! let square = [
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(1.0, 1.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//! ];
//! let slices: Vec<Slice> = (0..3)
//!     .map(|i| {
//!         let offset = Vec3::new(0.0, 0.0, -(i as f64));
//!         Slice::with_id(i, square.iter().map(|p| *p + offset)).unwrap()
//!     })
//!     .collect();
//!
//! let triangles = stitch_stack(&slices).unwrap();
//! assert_eq!(triangles.len(), 2 * 2 * 4);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod mesh;
pub mod ops;

pub use crate::config::{SelectionPolicy, StitchOptions};
pub use crate::core::slice::{Slice, Vertex};
pub use crate::core::triangle::{Corner, Triangle};
pub use crate::core::vec3::Vec3;
pub use error::{StitchError, StitchResult};
pub use mesh::Mesh;
pub use ops::assemble::{
    stitch_pair, stitch_stack, CancelToken, NoProgress, ProgressObserver, StackStitch,
    StackSummary, Stitcher,
};
pub use ops::closest_pair::{closest_pair_brute_force, find_closest_pair, ClosestPair};
pub use ops::min_area::{triangulate_min_area, Anchor, Tube};
