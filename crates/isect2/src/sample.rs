//! Seeded random shapes for benchmarks and randomized tests.
//!
//! Model
//! - Points are uniform in the square `[-extent, extent]²`.
//! - Polygons are star-shaped around a random center: `n` sorted angles with
//!   bounded jitter, radii in `[radius_min, radius_max]`.
//! - Determinism uses a replay token `(seed, index)` mixed into one `StdRng`,
//!   so any single draw can be regenerated without replaying the stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::shape::{Shape, ShapeKind};
use crate::shapes::{Circle, Line, Polygon, Ray, Rect, Segment};
use crate::Vec2;

/// Vertex count distribution for polygons.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    /// Inclusive vertex range, with at least three vertices.
    fn bounds(self) -> (usize, usize) {
        let (min, max) = match self {
            VertexCount::Fixed(n) => (n, n),
            VertexCount::Uniform { min, max } => (min, max),
        };
        let lo = min.max(3);
        (lo, max.max(lo))
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Half-width of the square that points and centers are drawn from.
    pub extent: f64,
    /// Circle radii and polygon vertex radii lie in `[radius_min, radius_max]`.
    pub radius_min: f64,
    pub radius_max: f64,
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing 2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            extent: 10.0,
            radius_min: 0.5,
            radius_max: 5.0,
            vertex_count: VertexCount::Uniform { min: 3, max: 8 },
            angle_jitter_frac: 0.3,
        }
    }
}

/// Replay token making draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    /// Seed of the stream for this draw. The index is scrambled before it is
    /// added to the seed.
    pub fn stream_seed(self) -> u64 {
        splitmix64(self.seed.wrapping_add(splitmix64(self.index)))
    }

    fn to_std_rng(self) -> StdRng {
        StdRng::seed_from_u64(self.stream_seed())
    }
}

/// One SplitMix64 step: golden-ratio increment, then the finalizer.
fn splitmix64(x: u64) -> u64 {
    let z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    let z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

fn point<R: Rng>(rng: &mut R, extent: f64) -> Vec2 {
    let e = extent.abs().max(1e-9);
    Vec2::new(rng.gen_range(-e..=e), rng.gen_range(-e..=e))
}

/// Two distinct points.
fn point_pair<R: Rng>(rng: &mut R, extent: f64) -> (Vec2, Vec2) {
    let p1 = point(rng, extent);
    loop {
        let p2 = point(rng, extent);
        if (p2 - p1).norm() > 1e-6 {
            return (p1, p2);
        }
    }
}

fn radius<R: Rng>(rng: &mut R, cfg: &SampleCfg) -> f64 {
    let lo = cfg.radius_min.max(0.0);
    let hi = cfg.radius_max.max(lo);
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

pub fn draw_line(cfg: &SampleCfg, tok: ReplayToken) -> Line {
    let (p1, p2) = point_pair(&mut tok.to_std_rng(), cfg.extent);
    Line::new(p1, p2)
}

pub fn draw_segment(cfg: &SampleCfg, tok: ReplayToken) -> Segment {
    let (p1, p2) = point_pair(&mut tok.to_std_rng(), cfg.extent);
    Segment::new(p1, p2)
}

pub fn draw_ray(cfg: &SampleCfg, tok: ReplayToken) -> Ray {
    let (pos, dir) = point_pair(&mut tok.to_std_rng(), cfg.extent);
    Ray::new(pos, dir)
}

pub fn draw_circle(cfg: &SampleCfg, tok: ReplayToken) -> Circle {
    let mut rng = tok.to_std_rng();
    let pos = point(&mut rng, cfg.extent);
    Circle::new(pos, radius(&mut rng, cfg))
}

/// Rect with corner in the sampling square and sides in `[radius_min, 2 radius_max]`.
pub fn draw_rect(cfg: &SampleCfg, tok: ReplayToken) -> Rect {
    let mut rng = tok.to_std_rng();
    let pos = point(&mut rng, cfg.extent);
    let w = radius(&mut rng, cfg) * 2.0;
    let h = radius(&mut rng, cfg) * 2.0;
    Rect::new(pos, Vec2::new(w, h))
}

/// Star-shaped polygon (radial jitter around a random center).
pub fn draw_polygon_radial(cfg: &SampleCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let center = point(&mut rng, cfg.extent);
    let (lo, hi) = cfg.vertex_count.bounds();
    let n = rng.gen_range(lo..=hi);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let points = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let theta = phase + (k as f64) * delta + jitter;
            let r = radius(&mut rng, cfg);
            center + Vec2::new(theta.cos(), theta.sin()) * r
        })
        .collect();
    Polygon::new(points)
}

/// Draw a shape of the given kind.
pub fn draw_shape(kind: ShapeKind, cfg: &SampleCfg, tok: ReplayToken) -> Shape {
    match kind {
        ShapeKind::Line => draw_line(cfg, tok).into(),
        ShapeKind::Segment => draw_segment(cfg, tok).into(),
        ShapeKind::Ray => draw_ray(cfg, tok).into(),
        ShapeKind::Circle => draw_circle(cfg, tok).into(),
        ShapeKind::Polygon => draw_polygon_radial(cfg, tok).into(),
        ShapeKind::Rect => draw_rect(cfg, tok).into(),
    }
}
