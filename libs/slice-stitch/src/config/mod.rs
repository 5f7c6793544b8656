//! Stitcher configuration building on the shared `config` crate.
//!
//! Constants come from the workspace configuration; this module adds the
//! runtime switches a caller picks per run (selection policy, parallelism).

use std::fmt;
use std::str::FromStr;

use config::constants::{
    ConfigError, GlobalConfig, DEFAULT_PARALLEL, MIN_SLICE_VERTICES, NORMAL_EPSILON,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the minimum-area recurrence picks between its two candidate moves.
///
/// # Examples
/// ```
/// use slice_stitch::SelectionPolicy;
/// assert_eq!(SelectionPolicy::default(), SelectionPolicy::PredecessorCost);
/// let parsed: SelectionPolicy = "candidate".parse().unwrap();
/// assert_eq!(parsed, SelectionPolicy::CandidateTotal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Compare only the two predecessor cumulative areas. Ignores the
    /// step's own area, so it does not always pick the locally optimal
    /// successor.
    #[default]
    PredecessorCost,
    /// Compare the two candidate totals (predecessor plus step area).
    CandidateTotal,
}

impl SelectionPolicy {
    /// Short name accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            SelectionPolicy::PredecessorCost => "predecessor",
            SelectionPolicy::CandidateTotal => "candidate",
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a policy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown selection policy '{0}' (expected 'predecessor' or 'candidate')")]
pub struct ParsePolicyError(String);

impl FromStr for SelectionPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "predecessor" | "predecessor_cost" => Ok(SelectionPolicy::PredecessorCost),
            "candidate" | "candidate_total" => Ok(SelectionPolicy::CandidateTotal),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// Options for a [`Stitcher`](crate::Stitcher) run.
///
/// # Examples
/// ```
/// use slice_stitch::{SelectionPolicy, StitchOptions};
/// let opts = StitchOptions::default()
///     .with_policy(SelectionPolicy::CandidateTotal)
///     .with_parallel(true);
/// assert!(opts.parallel);
/// assert_eq!(opts.min_slice_vertices, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StitchOptions {
    /// Smallest loop the engine accepts.
    pub min_slice_vertices: usize,
    /// Cross products no longer than this keep their raw (unnormalized)
    /// value as the triangle normal.
    pub normal_epsilon: f64,
    /// Recurrence tie-break used by the triangulator.
    pub policy: SelectionPolicy,
    /// Stitch adjacent pairs on the rayon thread pool.
    pub parallel: bool,
}

impl StitchOptions {
    /// Creates options with an explicit minimum loop size.
    ///
    /// # Examples
    /// ```
    /// use slice_stitch::StitchOptions;
    /// let opts = StitchOptions::new(4).unwrap();
    /// assert_eq!(opts.min_slice_vertices, 4);
    /// assert!(StitchOptions::new(2).is_err());
    /// ```
    pub fn new(min_slice_vertices: usize) -> Result<Self, OptionsError> {
        GlobalConfig::new(GlobalConfig::default().normal_epsilon, min_slice_vertices)
            .map(Self::from_global)
            .map_err(OptionsError)
    }

    /// Derives options from a validated global configuration snapshot.
    pub fn from_global(cfg: GlobalConfig) -> Self {
        Self {
            min_slice_vertices: cfg.min_slice_vertices,
            normal_epsilon: cfg.normal_epsilon,
            ..Self::default()
        }
    }

    /// Returns a copy using the given selection policy.
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns a copy with parallel pair stitching switched on or off.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for StitchOptions {
    fn default() -> Self {
        Self {
            min_slice_vertices: MIN_SLICE_VERTICES,
            normal_epsilon: NORMAL_EPSILON,
            policy: SelectionPolicy::default(),
            parallel: DEFAULT_PARALLEL,
        }
    }
}

/// Error wrapper for invalid stitch options.
#[derive(Debug, PartialEq)]
pub struct OptionsError(ConfigError);

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for OptionsError {}
