//! Print a handful of intersection queries and their results.
//!
//! Usage:
//!   cargo run -p isect2 --example scenarios

use isect2::prelude::*;
use nalgebra::vector;

fn show(label: &str, pts: &[Vec2]) {
    let list: Vec<String> = pts.iter().map(|p| format!("({:.3}, {:.3})", p.x, p.y)).collect();
    println!("{label}: {} point(s) [{}]", pts.len(), list.join(", "));
}

fn main() {
    let horiz = Line::new(vector![0.0, 0.0], vector![10.0, 0.0]);
    let vert = Line::new(vector![5.0, -5.0], vector![5.0, 5.0]);
    show("line vs line", &line_vs_line(&horiz, &vert));

    let circle = Circle::new(vector![0.0, 0.0], 5.0);
    let axis = Line::new(vector![-10.0, 0.0], vector![10.0, 0.0]);
    show("circle vs line", &line_vs_circle(&axis, &circle));

    let a = Segment::new(vector![0.0, 0.0], vector![10.0, 0.0]);
    let b = Segment::new(vector![5.0, -5.0], vector![5.0, 5.0]);
    let far = Segment::new(vector![20.0, 0.0], vector![30.0, 0.0]);
    show("segment vs segment", &segment_vs_segment(&a, &b));
    show("distant segment vs segment", &segment_vs_segment(&far, &b));

    let rect = Rect::new(vector![0.0, 0.0], vector![10.0, 10.0]);
    let ring = Circle::new(vector![5.0, 5.0], 6.0);
    show("rect vs circle", &circle_vs_rect(&ring, &rect));

    let ray = Ray::new(vector![0.0, 0.0], vector![1.0, 0.0]);
    let small = Circle::new(vector![5.0, 0.0], 1.0);
    show("ray vs circle", &ray_vs_circle(&ray, &small));

    let tri = Polygon::new(vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]]);
    let square = Rect::new(vector![100.0, 100.0], vector![5.0, 5.0]);
    show("triangle vs far square", &polygon_vs_rect(&tri, &square));

    let p = vector![5.0, 5.0];
    println!(
        "point {p:?} in circle: {}, in rect: {}",
        point_in_circle(p, &ring),
        point_in_rect(p, &rect)
    );
}
