//! # Configuration Constants
//!
//! Centralized constants for the slice stitching pipeline. Geometry
//! tolerances, loop-size minimums and loader limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Topology**: Minimum slice and stack sizes
//! - **Limits**: Maximum values for safety bounds while loading
//! - **Runtime**: Defaults for the stitching switches

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Length below which a vector is returned unchanged by `normalize`.
///
/// Tiny vectors are left alone instead of being divided by a near-zero
/// length, so the normal of a degenerate triangle stays (close to) zero.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_EPSILON;
///
/// let length = 1e-6;
/// assert!(length < NORMAL_EPSILON); // would be left unnormalized
/// ```
pub const NORMAL_EPSILON: f64 = 1e-4;

// =============================================================================
// TOPOLOGY CONSTANTS
// =============================================================================

/// Minimum number of vertices in a slice loop.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SLICE_VERTICES;
///
/// let loop_len = 2;
/// assert!(loop_len < MIN_SLICE_VERTICES); // rejected by the engine
/// ```
pub const MIN_SLICE_VERTICES: usize = 3;

/// Minimum number of slices that produce any triangles when stitching a stack.
///
/// Smaller stacks are valid input and stitch to an empty triangle list.
pub const MIN_STACK_SLICES: usize = 2;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of slices accepted from a slice file header.
///
/// Guards against allocating for a corrupt or hostile count before the data
/// itself has been seen.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_SLICES;
///
/// let declared = 512;
/// assert!(declared <= MAX_SLICES);
/// ```
pub const MAX_SLICES: usize = 1_000_000;

/// Maximum number of points accepted for a single slice in a slice file.
pub const MAX_SLICE_VERTICES: usize = 10_000_000;

// =============================================================================
// RUNTIME DEFAULTS
// =============================================================================

/// Whether stack stitching fans out across worker threads by default.
pub const DEFAULT_PARALLEL: bool = false;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of configuration settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.normal_epsilon > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Length below which normals are left unnormalized.
    pub normal_epsilon: f64,
    /// Minimum loop size accepted by the engine.
    pub min_slice_vertices: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 4).expect("valid config");
    /// assert_eq!(cfg.min_slice_vertices, 4);
    /// ```
    pub fn new(normal_epsilon: f64, min_slice_vertices: usize) -> Result<Self, ConfigError> {
        if !normal_epsilon.is_finite() || normal_epsilon <= 0.0 {
            return Err(ConfigError::InvalidTolerance(normal_epsilon));
        }
        if min_slice_vertices < MIN_SLICE_VERTICES {
            return Err(ConfigError::InvalidMinVertices(min_slice_vertices));
        }
        Ok(Self {
            normal_epsilon,
            min_slice_vertices,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            normal_epsilon: NORMAL_EPSILON,
            min_slice_vertices: MIN_SLICE_VERTICES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the minimum loop size cannot form a polygon.
    InvalidMinVertices(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidMinVertices(value) => {
                write!(f, "min_slice_vertices must be >= {MIN_SLICE_VERTICES}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
