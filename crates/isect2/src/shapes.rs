//! Shape value types and the conversions between them.
//!
//! - `Line`: infinite line through two points.
//! - `Segment`: bounded by its two endpoints.
//! - `Ray`: origin plus a point it passes through (not a unit direction).
//! - `Circle`, `Polygon` (implicitly closed vertex loop), `Rect` (axis-aligned).
//!
//! No constructor validates its input; ill-formed shapes (coincident points,
//! fewer than three vertices) simply produce empty or degenerate results.

use crate::cfg::RAY_REACH;
use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Infinite line through `p1` and `p2` (`p1 != p2` for a well-defined line).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl Line {
    #[inline]
    pub fn new(p1: Vec2, p2: Vec2) -> Self {
        Self { p1, p2 }
    }
}

/// Line segment between `p1` and `p2`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl Segment {
    #[inline]
    pub fn new(p1: Vec2, p2: Vec2) -> Self {
        Self { p1, p2 }
    }
    /// Infinite extension.
    #[inline]
    pub fn as_line(&self) -> Line {
        Line::new(self.p1, self.p2)
    }
}

/// Half-infinite ray starting at `pos` and passing through `dir`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ray {
    pub pos: Vec2,
    pub dir: Vec2,
}

impl Ray {
    #[inline]
    pub fn new(pos: Vec2, dir: Vec2) -> Self {
        Self { pos, dir }
    }
    #[inline]
    pub fn as_line(&self) -> Line {
        Line::new(self.pos, self.dir)
    }
    /// Finite stand-in: from `pos` out to `RAY_REACH` times the delta `dir - pos`.
    ///
    /// Contacts farther away than that are not reported for ray queries.
    #[inline]
    pub fn as_segment(&self) -> Segment {
        Segment::new(self.pos, self.pos + (self.dir - self.pos) * RAY_REACH)
    }
}

/// Circle with center `pos`. `radius >= 0` is assumed, not checked.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    pub pos: Vec2,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(pos: Vec2, radius: f64) -> Self {
        Self { pos, radius }
    }
}

/// Closed polygon given by its vertex loop; the last vertex connects back to
/// the first. Concave and self-intersecting loops are accepted as-is.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    pub points: Vec<Vec2>,
}

impl Polygon {
    #[inline]
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Successor of vertex `i`, wrapping from the last vertex to the first.
    /// `None` when `i` is not a vertex index.
    #[inline]
    pub fn point_after(&self, i: usize) -> Option<Vec2> {
        if i >= self.points.len() {
            return None;
        }
        self.points.get(i + 1).or(self.points.first()).copied()
    }

    /// Edge segments: `(v[i], v[i+1])` for each vertex, then `(v[n-1], v[0])`.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points
            .iter()
            .enumerate()
            .filter_map(move |(i, &p)| self.point_after(i).map(|q| Segment::new(p, q)))
    }
}

/// Axis-aligned rectangle with corner `pos` and extent `size` (non-negative).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }
    /// Corner opposite `pos`.
    #[inline]
    pub fn far(&self) -> Vec2 {
        self.pos + self.size
    }
    /// Four vertices: `pos`, `+x`, `pos + size`, `+y`.
    pub fn as_polygon(&self) -> Polygon {
        Polygon::new(vec![
            self.pos,
            Vec2::new(self.pos.x + self.size.x, self.pos.y),
            self.pos + self.size,
            Vec2::new(self.pos.x, self.pos.y + self.size.y),
        ])
    }
}
