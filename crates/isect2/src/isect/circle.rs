//! Circle pairs: move into the circle's frame, solve, move back.

use crate::algebra::{circle_vs_line_eq, filter_on_segments, translated, LineEq};
use crate::cfg::{too_close, DET_EPS};
use crate::log::trace;
use crate::shapes::{Circle, Line, Ray, Segment};
use crate::Points;

pub fn line_vs_circle(l: &Line, c: &Circle) -> Points {
    let (p1, p2) = (l.p1 - c.pos, l.p2 - c.pos);
    if too_close(p1, p2) {
        trace!("line endpoints coincide");
        return Vec::new();
    }
    let eq = LineEq::through(p1, p2);
    translated(circle_vs_line_eq(c.radius, &eq), c.pos)
}

pub fn segment_vs_circle(s: &Segment, c: &Circle) -> Points {
    filter_on_segments(line_vs_circle(&s.as_line(), c), s, None)
}

/// Only contacts within the ray's finite stand-in segment are reported.
pub fn ray_vs_circle(r: &Ray, c: &Circle) -> Points {
    segment_vs_circle(&r.as_segment(), c)
}

/// Crossings of two circle boundaries via their radical line.
///
/// In `c1`'s frame the radical line is
/// `2 p.x x + 2 p.y y = r1² - r2² + |p|²` with `p` the offset of `c2`.
/// Concentric circles (centers closer than `DET_EPS` times the larger
/// radius) have no radical line and give an empty result.
pub fn circle_vs_circle(c1: &Circle, c2: &Circle) -> Points {
    let p = c2.pos - c1.pos;
    let (r1, r2) = (c1.radius, c2.radius);
    if p.norm() <= DET_EPS * r1.max(r2) {
        trace!("concentric circles");
        return Vec::new();
    }
    let radical = LineEq::new(
        2.0 * p.x,
        2.0 * p.y,
        r1 * r1 - r2 * r2 + p.norm_squared(),
    );
    translated(circle_vs_line_eq(r1, &radical), c1.pos)
}
