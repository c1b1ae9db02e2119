//! Boundary-exclusive containment predicates.

use crate::shapes::{Circle, Rect};
use crate::Vec2;

/// Strictly inside: distance to the center is less than the radius.
#[inline]
pub fn point_in_circle(p: Vec2, c: &Circle) -> bool {
    (c.pos - p).norm() < c.radius
}

/// Strictly inside on both axes.
#[inline]
pub fn point_in_rect(p: Vec2, r: &Rect) -> bool {
    p.x > r.pos.x && p.y > r.pos.y && p.x < r.pos.x + r.size.x && p.y < r.pos.y + r.size.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn circle_boundary_is_outside() {
        let c = Circle::new(vector![1.0, 1.0], 2.0);
        assert!(point_in_circle(vector![1.0, 1.0], &c));
        assert!(point_in_circle(vector![2.9, 1.0], &c));
        assert!(!point_in_circle(vector![3.0, 1.0], &c));
        assert!(!point_in_circle(vector![1.0, -1.0], &c));
        assert!(!point_in_circle(vector![5.0, 5.0], &c));
    }

    #[test]
    fn zero_radius_contains_nothing() {
        let c = Circle::new(vector![0.0, 0.0], 0.0);
        assert!(!point_in_circle(vector![0.0, 0.0], &c));
    }

    #[test]
    fn rect_edges_and_corners_are_outside() {
        let r = Rect::new(vector![0.0, 0.0], vector![10.0, 5.0]);
        assert!(point_in_rect(vector![5.0, 2.5], &r));
        assert!(!point_in_rect(vector![0.0, 2.5], &r));
        assert!(!point_in_rect(vector![10.0, 2.5], &r));
        assert!(!point_in_rect(vector![5.0, 0.0], &r));
        assert!(!point_in_rect(vector![5.0, 5.0], &r));
        assert!(!point_in_rect(vector![10.0, 5.0], &r));
        assert!(!point_in_rect(vector![11.0, 2.5], &r));
    }

    #[test]
    fn rect_randomized_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        let r = Rect::new(vector![-1.0, 2.0], vector![3.0, 0.5]);
        for _ in 0..200 {
            let p = vector![rng.gen_range(-3.0..4.0), rng.gen_range(1.0..3.5)];
            let expected = p.x > -1.0 && p.x < 2.0 && p.y > 2.0 && p.y < 2.5;
            assert_eq!(point_in_rect(p, &r), expected);
        }
    }
}
