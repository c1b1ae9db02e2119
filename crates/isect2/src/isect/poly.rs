//! Polygon and rect pairs: decompose into edges, query each, concatenate.
//!
//! Hits are appended in edge order (`Polygon::edges`). A crossing exactly at a
//! shared vertex is dropped by both adjacent edges; nothing is deduplicated.

use super::circle::segment_vs_circle;
use super::line::{line_vs_segment, segment_vs_ray, segment_vs_segment};
use crate::shapes::{Circle, Line, Polygon, Ray, Rect, Segment};
use crate::Points;

#[inline]
fn per_edge<F>(poly: &Polygon, f: F) -> Points
where
    F: FnMut(Segment) -> Points,
{
    poly.edges().flat_map(f).collect()
}

pub fn line_vs_polygon(l: &Line, p: &Polygon) -> Points {
    per_edge(p, |e| line_vs_segment(l, &e))
}

pub fn line_vs_rect(l: &Line, r: &Rect) -> Points {
    line_vs_polygon(l, &r.as_polygon())
}

pub fn segment_vs_polygon(s: &Segment, p: &Polygon) -> Points {
    per_edge(p, |e| segment_vs_segment(s, &e))
}

pub fn segment_vs_rect(s: &Segment, r: &Rect) -> Points {
    segment_vs_polygon(s, &r.as_polygon())
}

pub fn ray_vs_polygon(r: &Ray, p: &Polygon) -> Points {
    per_edge(p, |e| segment_vs_ray(&e, r))
}

pub fn ray_vs_rect(r: &Ray, rect: &Rect) -> Points {
    ray_vs_polygon(r, &rect.as_polygon())
}

pub fn circle_vs_polygon(c: &Circle, p: &Polygon) -> Points {
    per_edge(p, |e| segment_vs_circle(&e, c))
}

pub fn circle_vs_rect(c: &Circle, r: &Rect) -> Points {
    circle_vs_polygon(c, &r.as_polygon())
}

/// Every edge of `p1` against every edge of `p2`; O(E1·E2).
pub fn polygon_vs_polygon(p1: &Polygon, p2: &Polygon) -> Points {
    per_edge(p1, |e| segment_vs_polygon(&e, p2))
}

pub fn polygon_vs_rect(p: &Polygon, r: &Rect) -> Points {
    polygon_vs_polygon(p, &r.as_polygon())
}

pub fn rect_vs_rect(r1: &Rect, r2: &Rect) -> Points {
    polygon_vs_polygon(&r1.as_polygon(), &r2.as_polygon())
}
