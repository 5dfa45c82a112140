//! Stateless 2D predicates: intersections, containment, area, boundary extension.
//!
//! All tolerance checks go through `types::EPS`.

use nalgebra::Vector2;

use super::types::{Board, Polygon, Segment, EPS};

#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Solve `a.start + ua·da = b.start + ub·db`; `None` when `|det| < EPS`.
#[inline]
fn solve_params(a: &Segment, b: &Segment) -> Option<(f64, f64)> {
    let da = a.delta();
    let db = b.delta();
    let det = cross(da, db);
    if det.abs() < EPS {
        return None;
    }
    let w = b.start - a.start;
    let ua = cross(w, db) / det;
    let ub = cross(w, da) / det;
    Some((ua, ub))
}

/// Segment/segment intersection point.
///
/// - Parallel or collinear segments (`|det| < EPS`) never intersect, even when
///   they overlap.
/// - Both parameters must lie in the closed range `[0, 1]`, so segments that
///   only share an endpoint do intersect.
pub fn intersect_segments(a: &Segment, b: &Segment) -> Option<Vector2<f64>> {
    let (ua, ub) = solve_params(a, b)?;
    if !(0.0..=1.0).contains(&ua) || !(0.0..=1.0).contains(&ub) {
        return None;
    }
    Some(a.start + a.delta() * ua)
}

/// Intersection of the infinite line through `line` with the segment `seg`.
///
/// The segment parameter gets `EPS` slack and is clamped, so a line through a
/// vertex is reported by both incident edges at the same point.
pub fn intersect_line_segment(line: &Segment, seg: &Segment) -> Option<Vector2<f64>> {
    let (_, us) = solve_params(line, seg)?;
    if us < -EPS || us > 1.0 + EPS {
        return None;
    }
    Some(seg.start + seg.delta() * us.clamp(0.0, 1.0))
}

/// Closest point of `seg` to `p` (projection clamped to the segment).
pub fn nearest_point_on_segment(seg: &Segment, p: Vector2<f64>) -> Vector2<f64> {
    let d = seg.delta();
    let len2 = d.norm_squared();
    if len2 < EPS * EPS {
        return seg.start;
    }
    let t = ((p - seg.start).dot(&d) / len2).clamp(0.0, 1.0);
    seg.start + d * t
}

#[inline]
pub fn distance_to_segment(seg: &Segment, p: Vector2<f64>) -> f64 {
    (nearest_point_on_segment(seg, p) - p).norm()
}

/// True when the clamped projection of `center` lies strictly closer than `radius`.
/// A tangent segment does not intersect.
#[inline]
pub fn segment_intersects_circle(seg: &Segment, center: Vector2<f64>, radius: f64) -> bool {
    distance_to_segment(seg, center) < radius
}

/// Even–odd (ray casting) membership. Boundary points may land either way.
pub fn point_in_polygon(polygon: &Polygon, p: Vector2<f64>) -> bool {
    let v = polygon.vertices();
    let mut inside = false;
    let mut j = v.len() - 1;
    for i in 0..v.len() {
        let (vi, vj) = (v[i], v[j]);
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Shoelace area (absolute value).
pub fn polygon_area(verts: &[Vector2<f64>]) -> f64 {
    if verts.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..verts.len() {
        twice += cross(verts[i], verts[(i + 1) % verts.len()]);
    }
    (twice * 0.5).abs()
}

/// Area centroid of a simple polygon; `None` if the area vanishes.
pub fn polygon_centroid(verts: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    if verts.len() < 3 {
        return None;
    }
    let mut a: f64 = 0.0;
    let mut cx: f64 = 0.0;
    let mut cy: f64 = 0.0;
    for i in 0..verts.len() {
        let p = verts[i];
        let q = verts[(i + 1) % verts.len()];
        let c = p.x * q.y - q.x * p.y;
        a += c;
        cx += (p.x + q.x) * c;
        cy += (p.y + q.y) * c;
    }
    a *= 0.5;
    if a.abs() < EPS {
        return None;
    }
    Some(Vector2::new(cx / (6.0 * a), cy / (6.0 * a)))
}

/// Extend the infinite line through `point` along `direction` to the board edges.
///
/// Slab method: each axis clips the line parameter to `[t_enter, t_exit]`;
/// axes with a near-zero direction component only check that `point` lies in
/// their slab. Returns a zero-length segment at `point` when the line misses
/// the board or `direction` vanishes; callers treat that as a logic error, not
/// as user input.
pub fn extend_to_boundary(point: Vector2<f64>, direction: Vector2<f64>, board: &Board) -> Segment {
    let degenerate = Segment::new(point, point);
    if direction.norm() < EPS {
        return degenerate;
    }
    let mut t_lo = f64::NEG_INFINITY;
    let mut t_hi = f64::INFINITY;
    for axis in 0..2 {
        let (p, d) = (point[axis], direction[axis]);
        let (lo, hi) = (board.min[axis], board.max[axis]);
        if d.abs() < EPS {
            if p < lo - EPS || p > hi + EPS {
                return degenerate;
            }
            continue;
        }
        let t0 = (lo - p) / d;
        let t1 = (hi - p) / d;
        t_lo = t_lo.max(t0.min(t1));
        t_hi = t_hi.min(t0.max(t1));
    }
    if !(t_lo.is_finite() && t_hi.is_finite()) || t_hi - t_lo < EPS {
        return degenerate;
    }
    // Clamp away rounding so endpoints satisfy `Board::contains` exactly.
    Segment::new(
        board.clamp(point + direction * t_lo),
        board.clamp(point + direction * t_hi),
    )
}
