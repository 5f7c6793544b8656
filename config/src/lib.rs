//! # Config Crate
//!
//! Centralized configuration constants for the slice stitching pipeline.
//! Tolerances, loop-size minimums and loader safety limits live here so the
//! engine, the loader and the command-line driver agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, MIN_SLICE_VERTICES, NORMAL_EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // A slice needs at least a triangle's worth of vertices
//! assert_eq!(MIN_SLICE_VERTICES, 3);
//!
//! // Normals shorter than this are left unnormalized
//! assert!(NORMAL_EPSILON > EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Shared Limits**: Loader and engine reject the same inputs
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
