//! # Closest Vertex Pair
//!
//! Finds the pair of vertices, one from each slice, with the smallest
//! Euclidean distance. The pair anchors the cyclic alignment of the two
//! loops before the minimum-area triangulation runs.
//!
//! ## Algorithm
//!
//! 1. Sort both slices' vertex indices by x (stable)
//! 2. Sweep the first slice in increasing x
//! 3. Keep a monotonically advancing lower bound into the second slice,
//!    skipping vertices more than the best distance to the left
//! 4. Scan the window until a vertex lies more than the best distance to
//!    the right; stop everything on an exact hit
//!
//! Ties keep the first minimum met in this scan order.
//!
//! Both searches are infallible: a [`Slice`] always holds at least three
//! vertices.

use crate::core::slice::Slice;


/// The closest cross-slice vertex pair and its squared distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPair {
    /// Vertex index in the first slice.
    pub index0: usize,
    /// Vertex index in the second slice.
    pub index1: usize,
    /// Squared Euclidean distance between the two vertices.
    pub distance_sq: f64,
}

/// Finds the closest vertex pair between `slice0` and `slice1` with an
/// x-sorted sweep.
///
/// # Example
///
/// ```rust
/// use slice_stitch::{find_closest_pair, Slice, Vec3};
///
/// let top = Slice::new([Vec3::ZERO, Vec3::X, Vec3::Y]).unwrap();
/// let bottom = Slice::new([
///     Vec3::new(5.0, 5.0, -1.0),
///     Vec3::new(1.0, 0.0, -1.0),
///     Vec3::new(5.0, 6.0, -1.0),
/// ])
/// .unwrap();
///
/// let pair = find_closest_pair(&top, &bottom);
/// assert_eq!((pair.index0, pair.index1), (1, 1));
/// assert_eq!(pair.distance_sq, 1.0);
/// ```
pub fn find_closest_pair(slice0: &Slice, slice1: &Slice) -> ClosestPair {
    let sorted0 = sorted_by_x(slice0);
    let sorted1 = sorted_by_x(slice1);

    // Seed with the first pair the sweep visits so the window starts finite.
    let (first0, first1) = (sorted0[0], sorted1[0]);
    let mut best = ClosestPair {
        index0: first0,
        index1: first1,
        distance_sq: slice0.position(first0).distance_squared(slice1.position(first1)),
    };
    let mut reach = best.distance_sq.sqrt();
    let mut start = 0;

    for &i in &sorted0 {
        let p0 = slice0.position(i);

        while start < sorted1.len() && slice1.position(sorted1[start]).x < p0.x - reach {
            start += 1;
        }

        for &j in &sorted1[start..] {
            let p1 = slice1.position(j);
            if p1.x > p0.x + reach {
                break;
            }

            let distance_sq = p0.distance_squared(p1);
            if distance_sq < best.distance_sq {
                best = ClosestPair {
                    index0: i,
                    index1: j,
                    distance_sq,
                };
                reach = distance_sq.sqrt();
            }

            if best.distance_sq == 0.0 {
                return best;
            }
        }
    }

    best
}

/// Exhaustive O(n·m) scan in slice order.
pub fn closest_pair_brute_force(slice0: &Slice, slice1: &Slice) -> ClosestPair {
    let mut best = ClosestPair {
        index0: 0,
        index1: 0,
        distance_sq: f64::INFINITY,
    };
    for v0 in slice0.vertices() {
        for v1 in slice1.vertices() {
            let distance_sq = v0.position.distance_squared(v1.position);
            if distance_sq < best.distance_sq {
                best = ClosestPair {
                    index0: v0.index,
                    index1: v1.index,
                    distance_sq,
                };
            }
        }
    }
    best
}

fn sorted_by_x(slice: &Slice) -> Vec<usize> {
    let mut order: Vec<usize> = (0..slice.len()).collect();
    order.sort_by(|&a, &b| slice.position(a).x.total_cmp(&slice.position(b).x));
    order
}
