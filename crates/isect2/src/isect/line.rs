//! Line, segment and ray pairs.

use crate::algebra::{filter_on_segments, LineEq};
use crate::cfg::{near_zero, DET_EPS};
use crate::log::trace;
use crate::shapes::{Line, Ray, Segment};
use crate::{Points, Vec2};

/// Single crossing point of two infinite lines.
///
/// Parallel and coincident lines both return empty; coincidence is not
/// reported as an overlap.
pub fn line_vs_line(l1: &Line, l2: &Line) -> Points {
    let s1 = LineEq::from_line(l1);
    let s2 = LineEq::from_line(l2);
    let det = s1.a * s2.b - s2.a * s1.b;
    if near_zero(det, DET_EPS * s1.a.hypot(s1.b) * s2.a.hypot(s2.b)) {
        trace!(det, "parallel or coincident lines");
        return Vec::new();
    }
    vec![Vec2::new(
        (s2.b * s1.c - s1.b * s2.c) / det,
        (s2.c * s1.a - s1.c * s2.a) / det,
    )]
}

pub fn line_vs_segment(l: &Line, s: &Segment) -> Points {
    filter_on_segments(line_vs_line(l, &s.as_line()), s, None)
}

pub fn line_vs_ray(l: &Line, r: &Ray) -> Points {
    filter_on_segments(line_vs_line(l, &r.as_line()), &r.as_segment(), None)
}

pub fn segment_vs_segment(s1: &Segment, s2: &Segment) -> Points {
    filter_on_segments(line_vs_line(&s1.as_line(), &s2.as_line()), s1, Some(s2))
}

pub fn segment_vs_ray(s: &Segment, r: &Ray) -> Points {
    filter_on_segments(
        line_vs_line(&s.as_line(), &r.as_line()),
        s,
        Some(&r.as_segment()),
    )
}

pub fn ray_vs_ray(r1: &Ray, r2: &Ray) -> Points {
    filter_on_segments(
        line_vs_line(&r1.as_line(), &r2.as_line()),
        &r1.as_segment(),
        Some(&r2.as_segment()),
    )
}
