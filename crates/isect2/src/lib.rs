//! Pairwise 2D boundary intersections.
//!
//! Six immutable shape kinds (`Line`, `Segment`, `Ray`, `Circle`, `Polygon`,
//! `Rect`) and one function per unordered pair returning the points where the
//! boundaries meet. Everything is built up from `line_vs_line`: bounded kinds
//! filter its candidates, polygons decompose into edges, circles solve a
//! quadratic in their local frame.
//!
//! Conventions
//! - Results are fresh `Vec<Vec2>` in decomposition order; duplicates are kept.
//! - An empty result covers both "no contact" and degenerate input.
//! - Degeneracy checks use the tolerances in [`cfg`], never exact `== 0.0`.

pub mod algebra;
pub mod cfg;
pub mod contain;
pub mod isect;
mod log;
pub mod sample;
pub mod shape;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The vector type used for points and sizes.
pub type Vec2 = nalgebra::Vector2<f64>;

/// Intersection result: points in decomposition order, possibly with duplicates.
pub type Points = Vec<Vec2>;

pub use contain::{point_in_circle, point_in_rect};
pub use shape::{Shape, ShapeKind};
pub use shapes::{Circle, Line, Polygon, Ray, Rect, Segment};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::contain::{point_in_circle, point_in_rect};
    pub use crate::isect::*;
    pub use crate::shape::{Shape, ShapeKind};
    pub use crate::shapes::{Circle, Line, Polygon, Ray, Rect, Segment};
    pub use crate::{Points, Vec2};
}
