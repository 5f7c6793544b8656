//! # Stack Assembly
//!
//! Stitches every adjacent pair of an ordered slice stack and concatenates
//! the tubes, in stack order, into one triangle list.
//!
//! ## Pipeline
//!
//! ```text
//! slices[i], slices[i+1] → find_closest_pair → triangulate_min_area → Tube
//! Tube(0) ++ Tube(1) ++ ... ++ Tube(N-2) → Vec<Triangle>
//! ```
//!
//! Pairs share no state, so with `StitchOptions::parallel` they fan out on
//! the rayon pool and are joined back in stack order. Output is identical
//! either way.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use config::constants::MIN_STACK_SLICES;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::StitchOptions;
use crate::core::slice::Slice;
use crate::core::triangle::Triangle;
use crate::error::{StitchError, StitchResult};
use crate::ops::closest_pair::find_closest_pair;
use crate::ops::min_area::{ensure_loop_size, triangulate_min_area, Tube};


// =============================================================================
// COLLABORATOR HOOKS
// =============================================================================

/// Receives progress while a stack is stitched.
///
/// Called once per finished pair. In parallel runs calls arrive from worker
/// threads and `completed` counts finished pairs, not stack positions.
pub trait ProgressObserver: Sync {
    /// `completed` of `total` pairs are done.
    fn pair_stitched(&self, completed: usize, total: usize);
}

/// Observer that ignores progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn pair_stitched(&self, _completed: usize, _total: usize) {}
}

/// Caller-owned flag that stops a stack stitch between pairs.
///
/// # Example
///
/// ```rust
/// use slice_stitch::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// True once [`cancel`](Self::cancel) has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Counts and areas of a stitched stack.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StackSummary {
    /// Slices in the stack.
    pub slices: usize,
    /// Adjacent pairs stitched.
    pub pairs: usize,
    /// Triangles produced.
    pub triangles: usize,
    /// Sum of the per-pair minimum areas.
    pub total_area: f64,
    /// Minimum area of each pair, in stack order.
    pub pair_areas: Vec<f64>,
}

/// Triangles of a whole stack plus its summary.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackStitch {
    /// Concatenated tubes in stack order.
    pub triangles: Vec<Triangle>,
    /// Counts and areas.
    pub summary: StackSummary,
}

impl StackStitch {
    fn from_tubes(slices: usize, tubes: Vec<Tube>) -> Self {
        let pair_areas: Vec<f64> = tubes.iter().map(|t| t.min_area).collect();
        let triangles: Vec<Triangle> = tubes.into_iter().flat_map(|t| t.triangles).collect();
        let summary = StackSummary {
            slices,
            pairs: pair_areas.len(),
            triangles: triangles.len(),
            total_area: pair_areas.iter().sum(),
            pair_areas,
        };
        Self { triangles, summary }
    }
}

// =============================================================================
// STITCHER
// =============================================================================

/// Stitches slice pairs and stacks with a fixed set of options.
///
/// # Example
///
/// ```rust
/// use slice_stitch::{Slice, StitchOptions, Stitcher, Vec3};
///
/// let ring = |id: usize, z: f64| {
///     Slice::with_id(id, (0..8).map(|i| {
///         let t = i as f64 / 8.0 * std::f64::consts::TAU;
///         Vec3::new(t.cos(), t.sin(), z)
///     }))
///     .unwrap()
/// };
/// let stack = vec![ring(0, 0.0), ring(1, -1.0), ring(2, -2.0)];
///
/// let stitcher = Stitcher::new(StitchOptions::default().with_parallel(true));
/// let triangles = stitcher.stitch_stack(&stack).unwrap();
/// assert_eq!(triangles.len(), 2 * 16);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Stitcher {
    options: StitchOptions,
}

impl Stitcher {
    /// Creates a stitcher with the given options.
    pub fn new(options: StitchOptions) -> Self {
        Self { options }
    }

    /// The options this stitcher runs with.
    pub fn options(&self) -> &StitchOptions {
        &self.options
    }

    /// Stitches one pair, anchored at its closest vertex pair, and returns
    /// the tube with its minimum area.
    pub fn stitch_pair_tube(&self, slice0: &Slice, slice1: &Slice) -> StitchResult<Tube> {
        ensure_loop_size(slice0, &self.options)?;
        ensure_loop_size(slice1, &self.options)?;

        let anchor = find_closest_pair(slice0, slice1);
        log::debug!(
            "pair {}→{}: anchor ({}, {}) at distance² {:.6}",
            slice0.id(),
            slice1.id(),
            anchor.index0,
            anchor.index1,
            anchor.distance_sq
        );
        triangulate_min_area(slice0, slice1, anchor.into(), &self.options)
    }

    /// Stitches one pair into its triangles.
    pub fn stitch_pair(&self, slice0: &Slice, slice1: &Slice) -> StitchResult<Vec<Triangle>> {
        self.stitch_pair_tube(slice0, slice1).map(|tube| tube.triangles)
    }

    /// Stitches only the pair `(slices[index], slices[index + 1])`.
    ///
    /// # Errors
    ///
    /// [`StitchError::PairOutOfRange`] when `index` has no successor.
    pub fn stitch_pair_at(&self, slices: &[Slice], index: usize) -> StitchResult<Tube> {
        let pairs = pair_count(slices);
        if index >= pairs {
            return Err(StitchError::PairOutOfRange { index, pairs });
        }
        self.stitch_pair_tube(&slices[index], &slices[index + 1])
    }

    /// Stitches a whole stack into one triangle list.
    ///
    /// Stacks of fewer than two slices yield an empty list.
    pub fn stitch_stack(&self, slices: &[Slice]) -> StitchResult<Vec<Triangle>> {
        self.stitch_stack_observed(slices, &NoProgress, None)
            .map(|stitch| stitch.triangles)
    }

    /// Stitches a whole stack, reporting progress and honoring cancellation
    /// between pairs.
    ///
    /// # Errors
    ///
    /// Any pair's [`StitchError`], or [`StitchError::Cancelled`] once
    /// `cancel` is set.
    pub fn stitch_stack_observed(
        &self,
        slices: &[Slice],
        observer: &dyn ProgressObserver,
        cancel: Option<&CancelToken>,
    ) -> StitchResult<StackStitch> {
        if slices.len() < MIN_STACK_SLICES {
            return Ok(StackStitch::from_tubes(slices.len(), Vec::new()));
        }

        let total = pair_count(slices);
        let completed = AtomicUsize::new(0);

        let stitch_one = |pair: &[Slice]| -> StitchResult<Tube> {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                return Err(StitchError::Cancelled {
                    completed: completed.load(Ordering::Relaxed),
                    total,
                });
            }
            let tube = self.stitch_pair_tube(&pair[0], &pair[1])?;
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            observer.pair_stitched(done, total);
            Ok(tube)
        };

        let tubes: Vec<Tube> = if self.options.parallel {
            slices.par_windows(2).map(stitch_one).collect::<StitchResult<_>>()?
        } else {
            slices.windows(2).map(stitch_one).collect::<StitchResult<_>>()?
        };

        let stitch = StackStitch::from_tubes(slices.len(), tubes);
        log::info!(
            "stitched {} slices: {} pairs, {} triangles, area {:.6}",
            stitch.summary.slices,
            stitch.summary.pairs,
            stitch.summary.triangles,
            stitch.summary.total_area
        );
        Ok(stitch)
    }
}

fn pair_count(slices: &[Slice]) -> usize {
    slices.len().saturating_sub(1)
}

// =============================================================================
// FREE FUNCTIONS
// =============================================================================

/// Stitches one pair with default options.
///
/// # Example
///
/// ```rust
/// use slice_stitch::{stitch_pair, Slice, Vec3};
///
/// let top = Slice::with_id(0, [Vec3::ZERO, Vec3::X, Vec3::Y]).unwrap();
/// let bottom = Slice::with_id(1, [-Vec3::Z, Vec3::X - Vec3::Z, Vec3::Y - Vec3::Z]).unwrap();
/// assert_eq!(stitch_pair(&top, &bottom).unwrap().len(), 6);
/// ```
pub fn stitch_pair(slice0: &Slice, slice1: &Slice) -> StitchResult<Vec<Triangle>> {
    Stitcher::default().stitch_pair(slice0, slice1)
}

/// Stitches a stack with default options.
pub fn stitch_stack(slices: &[Slice]) -> StitchResult<Vec<Triangle>> {
    Stitcher::default().stitch_stack(slices)
}
