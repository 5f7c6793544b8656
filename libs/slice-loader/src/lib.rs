//! # Slice Loader
//!
//! Reads stacked contour files into [`Slice`] loops.
//!
//! ## Format
//!
//! ```text
//! 2          ← number of slices
//! 3          ← points in the first slice on disk (the bottom one)
//! 0 0 0
//! 1 0 0
//! 0 1 0
//! 3          ← points in the next slice up
//! 0 0 1
//! 1 0 1
//! 0 1 1
//! ```
//!
//! Lines are read positionally: blank lines are not skipped. Whitespace
//! around values is ignored. Content after the last declared slice is
//! ignored.
//!
//! Files list slices bottom to top; by default the loader reverses them so
//! the first returned slice is the top one. Slice ids follow the returned
//! order.
//!
//! ## Usage
//!
//! ```rust
//! use slice_loader::load_slices;
//!
//! let text = "2\n3\n0 0 0\n1 0 0\n0 1 0\n3\n0 0 1\n1 0 1\n0 1 1\n";
//! let slices = load_slices(text).unwrap();
//!
//! assert_eq!(slices.len(), 2);
//! assert_eq!(slices[0].id(), 0);
//! assert_eq!(slices[0].position(0).z, 1.0);
//! ```
//!
//! [`Slice`]: slice_stitch::Slice

pub mod error;
pub mod reader;

pub use error::{LoadError, LoadResult};
pub use reader::{
    load_slices, load_slices_from_path, load_slices_from_reader, load_slices_with, LoadOptions,
};
