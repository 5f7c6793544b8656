//! # Stitching Operations
//!
//! - **closest_pair**: anchor search between two slices
//! - **min_area**: minimum-area tube between two anchored slices
//! - **assemble**: pairwise stitching across a whole stack

pub mod assemble;
pub mod closest_pair;
pub mod min_area;
