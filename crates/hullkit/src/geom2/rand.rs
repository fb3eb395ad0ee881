//! Random point sets in 2D (uniform scatter, jittered blobs, replay tokens).
//!
//! Purpose
//! - Deterministic point clouds for property tests, benchmarks and the CLI
//!   `sample` command. Each draw is fully determined by its `ReplayToken`.
//!
//! Model
//! - Scatter: `count` points uniform in a `Bounds` box.
//! - Blob: `count` points at uniformly spaced angles with angular and radial
//!   jitter around a centre, shuffled so that input order carries no hint of
//!   the boundary order.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{Bounds, Point};

/// Replay token to make draws reproducible and indexable.
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

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniform scatter configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: usize,
    pub bounds: Bounds,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: 64,
            bounds: Bounds::new(0.0, 0.0, 100.0, 100.0),
        }
    }
}

/// Jittered radial cluster configuration.
#[derive(Clone, Copy, Debug)]
pub struct BlobCfg {
    pub count: usize,
    pub center: Point,
    pub radius: f64,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `radius * (1 - u)` with `u ∈ [0, radial_jitter]`; clamped to [0, 1].
    pub radial_jitter: f64,
}

impl Default for BlobCfg {
    fn default() -> Self {
        Self {
            count: 64,
            center: Point::new(50.0, 50.0),
            radius: 40.0,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.6,
        }
    }
}

/// Draw `cfg.count` points uniformly inside `cfg.bounds`.
pub fn draw_scatter(cfg: ScatterCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let b = cfg.bounds;
    (0..cfg.count)
        .map(|_| {
            let u: f64 = rng.gen();
            let v: f64 = rng.gen();
            Point::new(b.x + u * b.width, b.y + v * b.height)
        })
        .collect()
}

/// Draw a jittered blob around `cfg.center`; output order is shuffled.
pub fn draw_blob(cfg: BlobCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count;
    if n == 0 {
        return Vec::new();
    }
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 1.0);
    let r0 = cfg.radius.max(0.0);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let c = cfg.center.to_vector();
    let mut pts: Vec<Point> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let r = r0 * (1.0 - rng.gen::<f64>() * rj);
            Point::from(c + Vector2::new(th.cos(), th.sin()) * r)
        })
        .collect();
    pts.shuffle(&mut rng);
    pts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken::new(42, 7);
        let a = draw_blob(BlobCfg::default(), tok);
        let b = draw_blob(BlobCfg::default(), tok);
        assert_eq!(a.len(), 64);
        for (p, q) in a.iter().zip(b.iter()) {
            assert!(p.x == q.x && p.y == q.y);
        }
        let c = draw_blob(BlobCfg::default(), tok.next());
        assert!(a.iter().zip(c.iter()).any(|(p, q)| p != q));
    }

    #[test]
    fn scatter_stays_in_bounds() {
        let cfg = ScatterCfg {
            count: 500,
            bounds: Bounds::new(-5.0, 10.0, 2.0, 3.0),
        };
        let pts = draw_scatter(cfg, ReplayToken::new(1, 0));
        assert_eq!(pts.len(), 500);
        assert!(pts.iter().all(|p| cfg.bounds.contains(p.x, p.y)));
    }

    #[test]
    fn blob_within_radius() {
        let cfg = BlobCfg {
            count: 200,
            ..BlobCfg::default()
        };
        let pts = draw_blob(cfg, ReplayToken::new(3, 3));
        assert!(pts
            .iter()
            .all(|p| p.distance_to(cfg.center) <= cfg.radius + 1e-9));
        assert!(draw_blob(BlobCfg { count: 0, ..cfg }, ReplayToken::new(3, 3)).is_empty());
    }
}
