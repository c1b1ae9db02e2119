//! Tagged wrapper over the six shape kinds for heterogeneous callers.
//!
//! The set of kinds is closed, so dispatch is a plain `match` over both
//! operands. Reverse orders reuse the canonical `<a>_vs_<b>` function with the
//! operands swapped.

use std::fmt;

use crate::contain::{point_in_circle, point_in_rect};
use crate::isect::*;
use crate::shapes::{Circle, Line, Polygon, Ray, Rect, Segment};
use crate::{Points, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Any one of the supported shapes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    Line(Line),
    Segment(Segment),
    Ray(Ray),
    Circle(Circle),
    Polygon(Polygon),
    Rect(Rect),
}

/// Discriminant of [`Shape`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShapeKind {
    Line,
    Segment,
    Ray,
    Circle,
    Polygon,
    Rect,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Line,
        ShapeKind::Segment,
        ShapeKind::Ray,
        ShapeKind::Circle,
        ShapeKind::Polygon,
        ShapeKind::Rect,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Segment => "segment",
            ShapeKind::Ray => "ray",
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Rect => "rect",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Ray(_) => ShapeKind::Ray,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Rect(_) => ShapeKind::Rect,
        }
    }

    /// Boundary intersection points with `other`.
    pub fn intersections(&self, other: &Shape) -> Points {
        use Shape as S;
        match (self, other) {
            (S::Line(a), S::Line(b)) => line_vs_line(a, b),
            (S::Line(a), S::Segment(b)) => line_vs_segment(a, b),
            (S::Line(a), S::Ray(b)) => line_vs_ray(a, b),
            (S::Line(a), S::Circle(b)) => line_vs_circle(a, b),
            (S::Line(a), S::Polygon(b)) => line_vs_polygon(a, b),
            (S::Line(a), S::Rect(b)) => line_vs_rect(a, b),

            (S::Segment(a), S::Line(b)) => line_vs_segment(b, a),
            (S::Segment(a), S::Segment(b)) => segment_vs_segment(a, b),
            (S::Segment(a), S::Ray(b)) => segment_vs_ray(a, b),
            (S::Segment(a), S::Circle(b)) => segment_vs_circle(a, b),
            (S::Segment(a), S::Polygon(b)) => segment_vs_polygon(a, b),
            (S::Segment(a), S::Rect(b)) => segment_vs_rect(a, b),

            (S::Ray(a), S::Line(b)) => line_vs_ray(b, a),
            (S::Ray(a), S::Segment(b)) => segment_vs_ray(b, a),
            (S::Ray(a), S::Ray(b)) => ray_vs_ray(a, b),
            (S::Ray(a), S::Circle(b)) => ray_vs_circle(a, b),
            (S::Ray(a), S::Polygon(b)) => ray_vs_polygon(a, b),
            (S::Ray(a), S::Rect(b)) => ray_vs_rect(a, b),

            (S::Circle(a), S::Line(b)) => line_vs_circle(b, a),
            (S::Circle(a), S::Segment(b)) => segment_vs_circle(b, a),
            (S::Circle(a), S::Ray(b)) => ray_vs_circle(b, a),
            (S::Circle(a), S::Circle(b)) => circle_vs_circle(a, b),
            (S::Circle(a), S::Polygon(b)) => circle_vs_polygon(a, b),
            (S::Circle(a), S::Rect(b)) => circle_vs_rect(a, b),

            (S::Polygon(a), S::Line(b)) => line_vs_polygon(b, a),
            (S::Polygon(a), S::Segment(b)) => segment_vs_polygon(b, a),
            (S::Polygon(a), S::Ray(b)) => ray_vs_polygon(b, a),
            (S::Polygon(a), S::Circle(b)) => circle_vs_polygon(b, a),
            (S::Polygon(a), S::Polygon(b)) => polygon_vs_polygon(a, b),
            (S::Polygon(a), S::Rect(b)) => polygon_vs_rect(a, b),

            (S::Rect(a), S::Line(b)) => line_vs_rect(b, a),
            (S::Rect(a), S::Segment(b)) => segment_vs_rect(b, a),
            (S::Rect(a), S::Ray(b)) => ray_vs_rect(b, a),
            (S::Rect(a), S::Circle(b)) => circle_vs_rect(b, a),
            (S::Rect(a), S::Polygon(b)) => polygon_vs_rect(b, a),
            (S::Rect(a), S::Rect(b)) => rect_vs_rect(a, b),
        }
    }

    /// Boundary-exclusive containment for kinds with an interior predicate
    /// (circle, rect); `None` for the others.
    pub fn contains(&self, p: Vec2) -> Option<bool> {
        match self {
            Shape::Circle(c) => Some(point_in_circle(p, c)),
            Shape::Rect(r) => Some(point_in_rect(p, r)),
            _ => None,
        }
    }
}

macro_rules! impl_from_shape {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Shape {
                #[inline]
                fn from(s: $ty) -> Self {
                    Shape::$ty(s)
                }
            }
        )*
    };
}

impl_from_shape!(Line, Segment, Ray, Circle, Polygon, Rect);
