//! # Error Types
//!
//! Error types for stitching operations. Precondition violations at the API
//! boundary are reported as errors instead of producing partial geometry.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when a precondition fails
//! - Degenerate (zero-area) geometry is NOT an error
//! - Errors include the slice and index involved for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building slices or stitching them.
///
/// ## Example
///
/// ```rust
/// use slice_stitch::{Slice, StitchError, Vec3};
///
/// match Slice::new([Vec3::ZERO, Vec3::X]) {
///     Ok(_) => unreachable!(),
///     Err(StitchError::TooFewVertices { count, .. }) => assert_eq!(count, 2),
///     Err(e) => panic!("unexpected error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StitchError {
    /// A slice has fewer vertices than the minimum loop size.
    #[error("Slice {slice} has {count} vertices (min: {min})")]
    TooFewVertices {
        /// Identity of the offending slice
        slice: usize,
        /// Number of vertices it holds
        count: usize,
        /// Minimum accepted loop size
        min: usize,
    },

    /// A vertex coordinate is NaN or infinite.
    #[error("Slice {slice} has a non-finite coordinate at vertex {index}")]
    NonFiniteCoordinate {
        /// Identity of the offending slice
        slice: usize,
        /// Index of the offending vertex
        index: usize,
    },

    /// An anchor index does not address a vertex of its slice.
    #[error("Anchor index {index} out of range for slice {slice} with {len} vertices")]
    AnchorOutOfRange {
        /// Identity of the slice the anchor refers to
        slice: usize,
        /// Requested anchor index
        index: usize,
        /// Number of vertices in that slice
        len: usize,
    },

    /// A pair position does not address an adjacent pair of the stack.
    #[error("Pair index {index} out of range ({pairs} adjacent pairs)")]
    PairOutOfRange {
        /// Requested pair position
        index: usize,
        /// Number of adjacent pairs in the stack
        pairs: usize,
    },

    /// The caller cancelled a stack stitch between pairs.
    #[error("Stitching cancelled after {completed} of {total} pairs")]
    Cancelled {
        /// Pairs finished before the cancellation was observed
        completed: usize,
        /// Pairs in the stack
        total: usize,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for stitching operations.
pub type StitchResult<T> = Result<T, StitchError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = StitchError::TooFewVertices {
            slice: 4,
            count: 2,
            min: 3,
        };
        assert!(err.to_string().contains("Slice 4"));
        assert!(err.to_string().contains("min: 3"));

        let err = StitchError::Cancelled {
            completed: 1,
            total: 7,
        };
        assert!(err.to_string().contains("1 of 7"));
    }

    /// Test error types are Send + Sync so they cross rayon workers.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StitchError>();
    }
}
