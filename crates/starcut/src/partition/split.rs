//! Single-line polygon split and batch board decomposition.

use nalgebra::Vector2;

use crate::geom2::{intersect_line_segment, polygon_area, Board, Polygon, Segment, EPS};

/// Crossing of the splitting line with polygon edge `edge`.
#[derive(Clone, Copy, Debug)]
struct Crossing {
    point: Vector2<f64>,
    edge: usize,
}

/// Split `polygon` by the infinite line through `line_start` and `line_end`.
///
/// Returns two polygons when the line properly bisects the polygon, otherwise
/// a single clone of the input. Steps:
/// 1. Collect up to two distinct crossings with the edges (dedup within `EPS`).
/// 2. Fewer than two crossings: no split.
/// 3. Walk vertices forward from the first crossing to the second and back
///    around, closing each chain with the crossing points. Chains that collapse
///    to fewer than three distinct vertices (or zero area) are dropped.
pub fn split_by_line(
    polygon: &Polygon,
    line_start: Vector2<f64>,
    line_end: Vector2<f64>,
) -> Vec<Polygon> {
    let line = Segment::new(line_start, line_end);
    if line.is_degenerate() {
        return vec![polygon.clone()];
    }

    let mut crossings: Vec<Crossing> = Vec::with_capacity(2);
    for (i, edge) in polygon.edges().enumerate() {
        let Some(point) = intersect_line_segment(&line, &edge) else {
            continue;
        };
        if crossings.iter().any(|c| (c.point - point).norm() < EPS) {
            continue;
        }
        crossings.push(Crossing { point, edge: i });
        if crossings.len() == 2 {
            break;
        }
    }
    if crossings.len() < 2 {
        return vec![polygon.clone()];
    }

    let (a, b) = (crossings[0], crossings[1]);
    let verts = polygon.vertices();
    let pieces: Vec<Polygon> = [chain(verts, a, b), chain(verts, b, a)]
        .into_iter()
        .filter(|c| c.len() >= 3 && polygon_area(c) >= EPS)
        .map(Polygon::new)
        .collect();
    if pieces.len() < 2 {
        return vec![polygon.clone()];
    }
    pieces
}

/// Ring `from.point, v[from.edge + 1], ..., v[to.edge], to.point` with
/// consecutive duplicates removed.
fn chain(verts: &[Vector2<f64>], from: Crossing, to: Crossing) -> Vec<Vector2<f64>> {
    let n = verts.len();
    let mut out: Vec<Vector2<f64>> = Vec::with_capacity(n + 2);
    push_distinct(&mut out, from.point);
    let mut k = from.edge;
    loop {
        k = (k + 1) % n;
        push_distinct(&mut out, verts[k]);
        if k == to.edge {
            break;
        }
    }
    push_distinct(&mut out, to.point);
    // Close the ring: drop a trailing vertex equal to the first one.
    while out.len() > 1 && (out[out.len() - 1] - out[0]).norm() < EPS {
        out.pop();
    }
    out
}

#[inline]
fn push_distinct(out: &mut Vec<Vector2<f64>>, p: Vector2<f64>) {
    if out.last().map_or(true, |q| (*q - p).norm() >= EPS) {
        out.push(p);
    }
}

/// Decompose the board by applying `lines` in order to every current region.
///
/// A line that does not bisect a region leaves it whole. Order matters when
/// lines cross each other, so callers pass lines in generation order.
pub fn decompose(board: &Board, lines: &[Segment]) -> Vec<Polygon> {
    let mut regions = vec![board.as_polygon()];
    for (i, line) in lines.iter().enumerate() {
        let before = regions.len();
        regions = regions
            .iter()
            .flat_map(|r| split_by_line(r, line.start, line.end))
            .collect();
        tracing::debug!(line = i, before, after = regions.len(), "applied division line");
    }
    regions
}
