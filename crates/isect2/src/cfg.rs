//! Tolerance defaults and fixed constants.
//!
//! Policy
//! - Fixed constants, no runtime knobs. Every degeneracy test in the crate goes
//!   through one of these instead of comparing a float against exactly zero.
//! - Tolerances are relative to the magnitudes they bound.

use crate::Vec2;

/// Relative bound on the line/line determinant: lines count as parallel (or
/// coincident) when `|det| <= DET_EPS · |n1| · |n2|`, i.e. `|sin θ| <= DET_EPS`.
/// Also the relative separation below which two points do not define a line.
pub const DET_EPS: f64 = 1e-12;
/// Relative bound on the circle/line discriminant: two points only when
/// `disc > DISC_EPS · r² (A² + B²)`.
pub const DISC_EPS: f64 = 1e-12;
/// Scale applied to a ray's delta `dir - pos` to get its finite stand-in segment.
pub const RAY_REACH: f64 = 1000.0;

/// `|v| <= eps`.
#[inline]
pub(crate) fn near_zero(v: f64, eps: f64) -> bool {
    v.abs() <= eps
}

/// Whether `p1` and `p2` are too close to define a line, relative to their
/// own magnitude. Coincident points always are.
#[inline]
pub(crate) fn too_close(p1: Vec2, p2: Vec2) -> bool {
    (p2 - p1).norm() <= DET_EPS * p1.norm().max(p2.norm())
}
