//! Criterion benchmarks for pairwise intersection queries.
//! Curve pairs are O(1); polygon pairs scale with edge counts in {4, 16, 64}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use isect2::prelude::*;
use isect2::sample::{
    draw_circle, draw_polygon_radial, draw_ray, draw_segment, draw_shape, ReplayToken, SampleCfg,
    VertexCount,
};

fn bench_curves(c: &mut Criterion) {
    let cfg = SampleCfg::default();
    let mut group = c.benchmark_group("curves");
    group.bench_function("segment_vs_segment", |b| {
        let mut tok = ReplayToken::new(41, 0);
        b.iter_batched(
            || {
                tok = tok.next().next();
                (draw_segment(&cfg, tok), draw_segment(&cfg, tok.next()))
            },
            |(s1, s2)| segment_vs_segment(&s1, &s2),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("ray_vs_circle", |b| {
        let mut tok = ReplayToken::new(42, 0);
        b.iter_batched(
            || {
                tok = tok.next().next();
                (draw_ray(&cfg, tok), draw_circle(&cfg, tok.next()))
            },
            |(r, ci)| ray_vs_circle(&r, &ci),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("circle_vs_circle", |b| {
        let mut tok = ReplayToken::new(43, 0);
        b.iter_batched(
            || {
                tok = tok.next().next();
                (draw_circle(&cfg, tok), draw_circle(&cfg, tok.next()))
            },
            |(c1, c2)| circle_vs_circle(&c1, &c2),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_polygons(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygons");
    for &n in &[4usize, 16, 64] {
        let cfg = SampleCfg {
            vertex_count: VertexCount::Fixed(n),
            ..SampleCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("circle_vs_polygon", n), &n, |b, _| {
            b.iter_batched(
                || {
                    (
                        draw_circle(&cfg, ReplayToken::new(44, 0)),
                        draw_polygon_radial(&cfg, ReplayToken::new(44, 1)),
                    )
                },
                |(ci, p)| circle_vs_polygon(&ci, &p),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("polygon_vs_polygon", n), &n, |b, _| {
            b.iter_batched(
                || {
                    (
                        draw_polygon_radial(&cfg, ReplayToken::new(45, 0)),
                        draw_polygon_radial(&cfg, ReplayToken::new(45, 1)),
                    )
                },
                |(p1, p2)| polygon_vs_polygon(&p1, &p2),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let cfg = SampleCfg::default();
    let shapes: Vec<Shape> = ShapeKind::ALL
        .iter()
        .enumerate()
        .map(|(i, &k)| draw_shape(k, &cfg, ReplayToken::new(46, i as u64)))
        .collect();
    c.bench_function("shape_all_pairs", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for a in &shapes {
                for other in &shapes {
                    total += a.intersections(other).len();
                }
            }
            total
        })
    });
}

criterion_group!(benches, bench_curves, bench_polygons, bench_dispatch);
criterion_main!(benches);
