//! # Minimum-Area Tube
//!
//! Joins two anchored slice loops with the triangulated tube of least total
//! area, by dynamic programming over the walk around both loops.
//!
//! ## Table
//!
//! Both loops are rotated so the anchor is vertex 0 and closed by repeating
//! it at the end. Cell `(r, c)` holds the least area connecting the first
//! `r` steps of slice1's walk with the first `c` steps of slice0's walk:
//!
//! ```text
//!            c → slice0 walk (n0 + 1)
//!        ┌───┬───┬───┬───┐
//!  r     │ 0 │ ─ │ ─ │ ─ │   ─ : step along slice0  (v1[r], v0[c], v0[c-1])
//!  ↓     ├───┼───┼───┼───┤
//! slice1 │ | │   │   │   │   | : step along slice1  (v1[r-1], v1[r], v0[c])
//! walk   ├───┼───┼───┼───┤
//!        │ | │   │   │ ● │   ● : (n1, n0), start of the backtrace
//!        └───┴───┴───┴───┘
//! ```
//!
//! Every step emits exactly one triangle, so a tube between loops of `n0`
//! and `n1` vertices always has `n0 + n1` triangles. With slice1 below
//! slice0 and both loops right-handed about the upward stacking axis, both
//! kinds of triangle wind counter-clockwise seen from outside.

use crate::config::{SelectionPolicy, StitchOptions};
use crate::core::slice::Slice;
use crate::core::triangle::{Corner, Triangle};
use crate::core::vec3::triangle_area;
use crate::error::{StitchError, StitchResult};
use crate::ops::closest_pair::ClosestPair;


/// The vertex correspondence the walk starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    /// Starting vertex index in slice0.
    pub index0: usize,
    /// Starting vertex index in slice1.
    pub index1: usize,
}

impl From<ClosestPair> for Anchor {
    fn from(pair: ClosestPair) -> Self {
        Self {
            index0: pair.index0,
            index1: pair.index1,
        }
    }
}

/// The triangles connecting one adjacent slice pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Tube {
    /// Triangles in backtrace order (from the end of the walk to its start).
    pub triangles: Vec<Triangle>,
    /// Total area reached by the dynamic program.
    pub min_area: f64,
}

impl Tube {
    /// Sum of the areas of the emitted triangles.
    pub fn triangle_area_sum(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }
}

/// Recurrence move that produced a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Advance along slice1: triangle `(v1[r-1], v1[r], v0[c])`.
    AlongSlice1,
    /// Advance along slice0: triangle `(v1[r], v0[c], v0[c-1])`.
    AlongSlice0,
}

/// Row-major `(n1 + 1) x (n0 + 1)` area and direction tables.
struct DpTable {
    cols: usize,
    area: Vec<f64>,
    step: Vec<Step>,
}

impl DpTable {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            area: vec![0.0; rows * cols],
            step: vec![Step::AlongSlice0; rows * cols],
        }
    }

    #[inline]
    fn area(&self, r: usize, c: usize) -> f64 {
        self.area[r * self.cols + c]
    }

    #[inline]
    fn step(&self, r: usize, c: usize) -> Step {
        self.step[r * self.cols + c]
    }

    #[inline]
    fn set(&mut self, r: usize, c: usize, area: f64, step: Step) {
        self.area[r * self.cols + c] = area;
        self.step[r * self.cols + c] = step;
    }
}

/// Triangulates the minimum-area tube between `slice0` and `slice1`,
/// starting the walk at `anchor`.
///
/// # Errors
///
/// [`StitchError::TooFewVertices`] if either slice is smaller than
/// `options.min_slice_vertices`, [`StitchError::AnchorOutOfRange`] if an
/// anchor index does not address a vertex.
///
/// # Example
///
/// ```rust
/// use slice_stitch::{triangulate_min_area, Anchor, Slice, StitchOptions, Vec3};
///
/// let top = Slice::with_id(0, [Vec3::ZERO, Vec3::X, Vec3::Y]).unwrap();
/// let bottom = Slice::with_id(1, [Vec3::Z, Vec3::X + Vec3::Z, Vec3::Y + Vec3::Z]).unwrap();
/// let anchor = Anchor { index0: 0, index1: 0 };
///
/// let tube = triangulate_min_area(&top, &bottom, anchor, &StitchOptions::default()).unwrap();
/// assert_eq!(tube.triangles.len(), 6);
/// ```
pub fn triangulate_min_area(
    slice0: &Slice,
    slice1: &Slice,
    anchor: Anchor,
    options: &StitchOptions,
) -> StitchResult<Tube> {
    ensure_loop_size(slice0, options)?;
    ensure_loop_size(slice1, options)?;
    ensure_anchor(slice0, anchor.index0)?;
    ensure_anchor(slice1, anchor.index1)?;

    let walk0 = closed_walk(slice0, anchor.index0);
    let walk1 = closed_walk(slice1, anchor.index1);
    let (n0, n1) = (slice0.len(), slice1.len());

    let table = fill_table(&walk0, &walk1, options.policy);
    let min_area = table.area(n1, n0);

    let eps = options.normal_epsilon;
    let mut triangles = Vec::with_capacity(n0 + n1);
    let (mut r, mut c) = (n1, n0);
    while r > 0 || c > 0 {
        match table.step(r, c) {
            Step::AlongSlice1 => {
                let corners = [walk1[r - 1], walk1[r], walk0[c]];
                triangles.push(Triangle::with_normal_epsilon(corners, eps));
                r -= 1;
            }
            Step::AlongSlice0 => {
                let corners = [walk1[r], walk0[c], walk0[c - 1]];
                triangles.push(Triangle::with_normal_epsilon(corners, eps));
                c -= 1;
            }
        }
    }

    log::trace!(
        "tube {}→{}: anchor ({}, {}), {} triangles, area {:.6}",
        slice0.id(),
        slice1.id(),
        anchor.index0,
        anchor.index1,
        triangles.len(),
        min_area
    );

    Ok(Tube {
        triangles,
        min_area,
    })
}

/// The loop rotated to start at `start`, with the start repeated at the end.
fn closed_walk(slice: &Slice, start: usize) -> Vec<Corner> {
    let n = slice.len();
    let vertices = slice.vertices();
    (0..=n)
        .map(|k| Corner::of(slice, &vertices[(start + k) % n]))
        .collect()
}

fn fill_table(walk0: &[Corner], walk1: &[Corner], policy: SelectionPolicy) -> DpTable {
    let (rows, cols) = (walk1.len(), walk0.len());
    let mut table = DpTable::new(rows, cols);
    let p0 = |c: usize| walk0[c].position;
    let p1 = |r: usize| walk1[r].position;

    // Fan from slice1's start across slice0's edges.
    for c in 1..cols {
        let area = table.area(0, c - 1) + triangle_area(p1(0), p0(c - 1), p0(c));
        table.set(0, c, area, Step::AlongSlice0);
    }

    // And from slice0's start across slice1's edges.
    for r in 1..rows {
        let area = table.area(r - 1, 0) + triangle_area(p1(r - 1), p1(r), p0(0));
        table.set(r, 0, area, Step::AlongSlice1);
    }

    for r in 1..rows {
        for c in 1..cols {
            let from_row = table.area(r - 1, c);
            let from_col = table.area(r, c - 1);
            let with_row = from_row + triangle_area(p1(r - 1), p1(r), p0(c));
            let with_col = from_col + triangle_area(p1(r), p0(c - 1), p0(c));

            let take_row = match policy {
                SelectionPolicy::PredecessorCost => from_row < from_col,
                SelectionPolicy::CandidateTotal => with_row < with_col,
            };

            if take_row {
                table.set(r, c, with_row, Step::AlongSlice1);
            } else {
                table.set(r, c, with_col, Step::AlongSlice0);
            }
        }
    }

    table
}

pub(crate) fn ensure_loop_size(slice: &Slice, options: &StitchOptions) -> StitchResult<()> {
    if slice.len() < options.min_slice_vertices {
        return Err(StitchError::TooFewVertices {
            slice: slice.id(),
            count: slice.len(),
            min: options.min_slice_vertices,
        });
    }
    Ok(())
}

pub(crate) fn ensure_anchor(slice: &Slice, index: usize) -> StitchResult<()> {
    match slice.vertex(index) {
        Some(_) => Ok(()),
        None => Err(StitchError::AnchorOutOfRange {
            slice: slice.id(),
            index,
            len: slice.len(),
        }),
    }
}
