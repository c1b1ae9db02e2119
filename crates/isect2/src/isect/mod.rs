//! Pairwise intersection functions.
//!
//! One function per unordered pair of shape kinds, named `<a>_vs_<b>` in the
//! order Line, Segment, Ray, Circle, Polygon, Rect. Reverse orders go through
//! `Shape::intersections`, which swaps operands.
//!
//! Layers
//! - `line`: `line_vs_line` and its bounded variants (filter by segment).
//! - `circle`: quadratic solve in the circle's frame, then translate back.
//! - `poly`: decompose polygons/rects into edges and concatenate per-edge hits.

mod circle;
mod line;
mod poly;

pub use circle::{circle_vs_circle, line_vs_circle, ray_vs_circle, segment_vs_circle};
pub use line::{
    line_vs_line, line_vs_ray, line_vs_segment, ray_vs_ray, segment_vs_ray, segment_vs_segment,
};
pub use poly::{
    circle_vs_polygon, circle_vs_rect, line_vs_polygon, line_vs_rect, polygon_vs_polygon,
    polygon_vs_rect, ray_vs_polygon, ray_vs_rect, rect_vs_rect, segment_vs_polygon,
    segment_vs_rect,
};
