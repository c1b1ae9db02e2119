//! Line-equation algebra shared by the intersection functions.
//!
//! - `LineEq`: `A x + B y = C` through two points.
//! - `on_segment` / `filter_on_segments`: keep line candidates inside segments.
//! - `circle_vs_line_eq`: two-point quadratic solve in the circle's frame.

use crate::cfg::DISC_EPS;
use crate::log::trace;
use crate::shapes::{Line, Segment};
use crate::{Points, Vec2};

/// Line in normal form `a x + b y = c` (not normalized).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineEq {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LineEq {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// `A = Δy`, `B = -Δx`, `C = A p1.x + B p1.y`.
    #[inline]
    pub fn through(p1: Vec2, p2: Vec2) -> Self {
        let a = p2.y - p1.y;
        let b = p1.x - p2.x;
        let c = a * p1.x + b * p1.y;
        Self { a, b, c }
    }

    #[inline]
    pub fn from_line(l: &Line) -> Self {
        Self::through(l.p1, l.p2)
    }

    /// `a x + b y - c`; zero on the line.
    #[inline]
    pub fn residual(&self, p: Vec2) -> f64 {
        self.a * p.x + self.b * p.y - self.c
    }
}

/// `low < f < high`.
#[inline]
pub fn is_between<T: PartialOrd>(f: T, low: T, high: T) -> bool {
    f > low && f < high
}

/// Whether `p`, already on the segment's line, falls strictly inside it.
///
/// Accepts when the parametric fraction along *either* axis is in (0, 1).
/// On an axis where the segment has no extent the fraction is NaN or ±inf and
/// never passes, so the other axis decides. Endpoints are excluded.
#[inline]
pub fn on_segment(p: Vec2, s: &Segment) -> bool {
    let tx = (p.x - s.p1.x) / (s.p2.x - s.p1.x);
    let ty = (p.y - s.p1.y) / (s.p2.y - s.p1.y);
    is_between(tx, 0.0, 1.0) || is_between(ty, 0.0, 1.0)
}

/// Keep candidates lying on `s1` and, when given, also on `s2`.
pub fn filter_on_segments(candidates: Points, s1: &Segment, s2: Option<&Segment>) -> Points {
    candidates
        .into_iter()
        .filter(|&p| on_segment(p, s1) && s2.is_none_or(|s| on_segment(p, s)))
        .collect()
}

/// Circle of `radius` centered at the origin vs line `eq` in the same frame.
///
/// Returns two points in local coordinates, or none when the line has no
/// normal (`A = B = 0`) or the discriminant `r²(A²+B²) - C²` does not exceed
/// `DISC_EPS · r²(A²+B²)` (tangency included). Callers translate back to
/// world space and reject nearly coincident defining points themselves.
pub fn circle_vs_line_eq(radius: f64, eq: &LineEq) -> Points {
    let d = eq.a * eq.a + eq.b * eq.b;
    if d <= 0.0 {
        trace!(a = eq.a, b = eq.b, "degenerate line equation");
        return Vec::new();
    }
    let r2d = radius * radius * d;
    let disc = r2d - eq.c * eq.c;
    if disc <= DISC_EPS * r2d {
        trace!(disc, "circle/line discriminant not positive");
        return Vec::new();
    }
    let root = disc.sqrt();
    vec![
        Vec2::new(
            (eq.a * eq.c + eq.b * root) / d,
            (eq.b * eq.c - eq.a * root) / d,
        ),
        Vec2::new(
            (eq.a * eq.c - eq.b * root) / d,
            (eq.b * eq.c + eq.a * root) / d,
        ),
    ]
}

/// Shift every point by `offset`, producing a new sequence.
#[inline]
pub fn translated(points: Points, offset: Vec2) -> Points {
    points.into_iter().map(|p| p + offset).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn line_eq_holds_for_both_points() {
        let p1 = vector![1.0, 2.0];
        let p2 = vector![-3.0, 5.5];
        let eq = LineEq::through(p1, p2);
        assert!(eq.residual(p1).abs() < 1e-12);
        assert!(eq.residual(p2).abs() < 1e-12);
        assert!(eq.residual((p1 + p2) * 0.5).abs() < 1e-12);
        assert!(eq.residual(vector![0.0, 0.0]).abs() > 1e-3);
    }

    #[test]
    fn is_between_is_strict() {
        assert!(is_between(0.5, 0.0, 1.0));
        assert!(!is_between(0.0, 0.0, 1.0));
        assert!(!is_between(1.0, 0.0, 1.0));
        assert!(is_between(2, 1, 3));
        assert!(!is_between(f64::NAN, 0.0, 1.0));
    }

    #[test]
    fn on_segment_excludes_endpoints_and_outside() {
        let s = Segment::new(vector![0.0, 0.0], vector![4.0, 2.0]);
        assert!(on_segment(vector![2.0, 1.0], &s));
        assert!(!on_segment(vector![0.0, 0.0], &s));
        assert!(!on_segment(vector![4.0, 2.0], &s));
        assert!(!on_segment(vector![6.0, 3.0], &s));
        assert!(!on_segment(vector![-2.0, -1.0], &s));
    }

    #[test]
    fn on_segment_axis_aligned_uses_other_axis() {
        let horiz = Segment::new(vector![0.0, 0.0], vector![10.0, 0.0]);
        assert!(on_segment(vector![5.0, 0.0], &horiz));
        assert!(!on_segment(vector![15.0, 0.0], &horiz));
        let vert = Segment::new(vector![5.0, -5.0], vector![5.0, 5.0]);
        assert!(on_segment(vector![5.0, 0.0], &vert));
        assert!(!on_segment(vector![5.0, 6.0], &vert));
    }

    #[test]
    fn on_segment_or_rule_accepts_single_axis() {
        // The test is OR across axes: one in-range axis is enough, even when
        // the point is off the segment along the other axis.
        let s = Segment::new(vector![0.0, 0.0], vector![10.0, 10.0]);
        assert!(on_segment(vector![5.0, 50.0], &s));
        assert!(!on_segment(vector![50.0, 50.0], &s));
    }

    #[test]
    fn filter_requires_every_given_segment() {
        let s1 = Segment::new(vector![0.0, 0.0], vector![10.0, 0.0]);
        let s2 = Segment::new(vector![4.0, 0.0], vector![6.0, 0.0]);
        let cands = vec![vector![5.0, 0.0], vector![8.0, 0.0], vector![12.0, 0.0]];
        assert_eq!(filter_on_segments(cands.clone(), &s1, None).len(), 2);
        assert_eq!(
            filter_on_segments(cands, &s1, Some(&s2)),
            vec![vector![5.0, 0.0]]
        );
        assert!(filter_on_segments(Vec::new(), &s1, Some(&s2)).is_empty());
    }

    #[test]
    fn quadratic_two_points_on_circle() {
        // y = 1 against r = 2: x = ±√3
        let eq = LineEq::through(vector![-5.0, 1.0], vector![5.0, 1.0]);
        let pts = circle_vs_line_eq(2.0, &eq);
        assert_eq!(pts.len(), 2);
        for p in &pts {
            assert!((p.norm() - 2.0).abs() < 1e-9);
            assert!((p.y - 1.0).abs() < 1e-9);
        }
        assert!((pts[0].x + pts[1].x).abs() < 1e-9);
    }

    #[test]
    fn quadratic_tangent_miss_and_degenerate_are_empty() {
        let tangent = LineEq::through(vector![-10.0, 5.0], vector![10.0, 5.0]);
        assert!(circle_vs_line_eq(5.0, &tangent).is_empty());
        let miss = LineEq::through(vector![-10.0, 7.0], vector![10.0, 7.0]);
        assert!(circle_vs_line_eq(5.0, &miss).is_empty());
        let point = LineEq::through(vector![1.0, 1.0], vector![1.0, 1.0]);
        assert!(circle_vs_line_eq(5.0, &point).is_empty());
    }

    #[test]
    fn translated_maps_into_new_vec() {
        let pts = vec![vector![1.0, 0.0], vector![0.0, 1.0]];
        let out = translated(pts, vector![2.0, 3.0]);
        assert_eq!(out, vec![vector![3.0, 3.0], vector![2.0, 4.0]]);
    }
}
