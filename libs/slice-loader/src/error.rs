//! # Error Types
//!
//! Everything that can go wrong reading a slice file. Line numbers are
//! 1-based; slice numbers count slices in file order, starting at 1.

use slice_stitch::StitchError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors produced while loading a slice file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The input has no first line.
    #[error("Missing slice count on line 1")]
    MissingHeader,

    /// The input ended where a slice's point count was expected.
    #[error("Line {line}: missing point count for slice {slice}")]
    MissingPointCount {
        /// Line where the count was expected
        line: usize,
        /// Slice number in file order
        slice: usize,
    },

    /// A count line is not a non-negative integer.
    #[error("Line {line}: expected a non-negative integer, found '{text}'")]
    InvalidCount {
        /// Offending line
        line: usize,
        /// Trimmed line content
        text: String,
    },

    /// A slice declares more points than lines remain in the input.
    #[error("Slice {slice} (line {line}) declares {declared} points but only {available} lines follow")]
    TruncatedSlice {
        /// Slice number in file order
        slice: usize,
        /// Line of the point count
        line: usize,
        /// Declared point count
        declared: usize,
        /// Lines left in the input
        available: usize,
    },

    /// A point line does not hold exactly three values.
    #[error("Line {line}: expected 3 coordinates, found {found}")]
    WrongArity {
        /// Offending line
        line: usize,
        /// Number of whitespace-separated tokens
        found: usize,
    },

    /// A coordinate is not a finite number.
    #[error("Line {line}: invalid coordinate '{text}'")]
    InvalidCoordinate {
        /// Offending line
        line: usize,
        /// The token that failed to parse
        text: String,
    },

    /// A slice has fewer points than a loop needs.
    #[error("Slice {slice} (line {line}) has {count} points (min: {min})")]
    TooFewPoints {
        /// Slice number in file order
        slice: usize,
        /// Line of the point count
        line: usize,
        /// Declared point count
        count: usize,
        /// Minimum loop size
        min: usize,
    },

    /// The header declares more slices than supported.
    #[error("{count} slices exceed the limit of {max}")]
    TooManySlices {
        /// Declared slice count
        count: usize,
        /// Supported maximum
        max: usize,
    },

    /// A slice declares more points than supported.
    #[error("Slice {slice} (line {line}) declares {count} points, limit is {max}")]
    TooManyPoints {
        /// Slice number in file order
        slice: usize,
        /// Line of the point count
        line: usize,
        /// Declared point count
        count: usize,
        /// Supported maximum
        max: usize,
    },

    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A parsed slice was rejected by the stitcher's slice model.
    #[error(transparent)]
    Slice(#[from] StitchError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for loading.
pub type LoadResult<T> = Result<T, LoadError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::WrongArity { line: 7, found: 2 };
        assert_eq!(err.to_string(), "Line 7: expected 3 coordinates, found 2");

        let err = LoadError::TooFewPoints {
            slice: 2,
            line: 5,
            count: 1,
            min: 3,
        };
        assert!(err.to_string().contains("Slice 2"));
        assert!(err.to_string().contains("min: 3"));
    }

    #[test]
    fn test_wraps_stitch_error() {
        let err: LoadError = StitchError::NonFiniteCoordinate { slice: 0, index: 1 }.into();
        assert!(matches!(err, LoadError::Slice(_)));
        assert!(err.to_string().contains("vertex 1"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LoadError>();
    }
}
