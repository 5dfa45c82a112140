//! Seeded randomness and uniform sampling inside polygons.
//!
//! Model
//! - `ReplayToken { seed, index }` is mixed into a single `StdRng`, so a level
//!   is reproducible from its seed and level index alone.
//! - `sample_point_in_polygon` fans the polygon from its centroid, picks a
//!   triangle with probability proportional to its area, then draws a uniform
//!   point inside it with the square-root barycentric transform.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Polygon;

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

    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
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

#[inline]
fn triangle_area(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    super::util::cross(b - a, c - a).abs() * 0.5
}

/// Uniform point in triangle `(a, b, c)` from two unit draws.
#[inline]
pub fn sample_point_in_triangle<R: Rng>(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    rng: &mut R,
) -> Vector2<f64> {
    let r1 = rng.gen::<f64>().sqrt();
    let r2 = rng.gen::<f64>();
    a * (1.0 - r1) + b * (r1 * (1.0 - r2)) + c * (r1 * r2)
}

/// Area-weighted random point inside `polygon` via centroid fan triangulation.
///
/// Exact for star-shaped polygons around the centroid, which covers every
/// convex region the partitioner produces. Falls back to the centroid for a
/// zero-area polygon.
pub fn sample_point_in_polygon<R: Rng>(polygon: &Polygon, rng: &mut R) -> Vector2<f64> {
    let center = polygon.centroid();
    let verts = polygon.vertices();
    let fan: Vec<(Vector2<f64>, Vector2<f64>, f64)> = (0..verts.len())
        .map(|i| {
            let a = verts[i];
            let b = verts[(i + 1) % verts.len()];
            (a, b, triangle_area(a, b, center))
        })
        .collect();
    let total: f64 = fan.iter().map(|t| t.2).sum();
    if total <= 0.0 {
        return center;
    }
    let pick = rng.gen::<f64>() * total;
    let mut acc = 0.0;
    for &(a, b, area) in &fan {
        acc += area;
        if acc >= pick {
            return sample_point_in_triangle(a, b, center, rng);
        }
    }
    // Round-off can leave `acc` a hair below `pick`; use the last triangle.
    let &(a, b, _) = fan.last().unwrap_or(&(center, center, 0.0));
    sample_point_in_triangle(a, b, center, rng)
}
