//! Thin wrapper around `glam::DVec3` shared across engine modules.
//!
//! Addition, subtraction, scaling, dot and cross products and length come
//! straight from `glam`. The helpers here add the few operations the
//! stitcher needs.

use config::constants::NORMAL_EPSILON;

pub use glam::DVec3 as Vec3;

/// Normalizes `v`, leaving vectors shorter than [`NORMAL_EPSILON`] unchanged.
///
/// # Examples
/// ```
/// use slice_stitch::core::vec3::{normalize, Vec3};
/// assert_eq!(normalize(Vec3::new(0.0, 3.0, 4.0)), Vec3::new(0.0, 0.6, 0.8));
/// assert_eq!(normalize(Vec3::ZERO), Vec3::ZERO);
/// ```
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    normalize_with(v, NORMAL_EPSILON)
}

/// Normalizes `v`, leaving vectors no longer than `epsilon` unchanged.
#[inline]
pub fn normalize_with(v: Vec3, epsilon: f64) -> Vec3 {
    let len = v.length();
    if len > epsilon {
        v / len
    } else {
        v
    }
}

/// Area of the triangle `(a, b, c)`.
///
/// # Examples
/// ```
/// use slice_stitch::core::vec3::{triangle_area, Vec3};
/// let area = triangle_area(Vec3::ZERO, Vec3::X, Vec3::Y);
/// assert_eq!(area, 0.5);
/// ```
#[inline]
pub fn triangle_area(a: Vec3, b: Vec3, c: Vec3) -> f64 {
    0.5 * (b - a).cross(c - a).length()
}

/// Outward normal of the counter-clockwise triangle `(a, b, c)`.
///
/// Degenerate triangles yield their (near-zero) unnormalized cross product.
#[inline]
pub fn triangle_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    triangle_normal_with(a, b, c, NORMAL_EPSILON)
}

/// [`triangle_normal`] with an explicit degeneracy threshold on the cross
/// product length.
#[inline]
pub fn triangle_normal_with(a: Vec3, b: Vec3, c: Vec3, epsilon: f64) -> Vec3 {
    normalize_with((b - a).cross(c - a), epsilon)
}

/// Rotates `v` by `angle` radians about the unit-length `axis`
/// (Rodrigues' rotation formula).
///
/// # Examples
/// ```
/// use slice_stitch::core::vec3::{rotate_about_axis, Vec3};
/// let r = rotate_about_axis(Vec3::X, std::f64::consts::FRAC_PI_2, Vec3::Z);
/// assert!((r - Vec3::Y).length() < 1e-12);
/// ```
pub fn rotate_about_axis(v: Vec3, angle: f64, axis: Vec3) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    let along = axis.dot(v) * (1.0 - cos);
    v * cos + axis.cross(v) * sin + axis * along
}

/// Returns true if every component is finite.
#[inline]
pub fn is_finite(v: Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}
