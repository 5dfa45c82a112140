use super::*;
use nalgebra::{vector, Vector2};

fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
    Segment::new(vector![ax, ay], vector![bx, by])
}

fn square(side: f64) -> Polygon {
    Polygon::new(vec![
        vector![0.0, 0.0],
        vector![side, 0.0],
        vector![side, side],
        vector![0.0, side],
    ])
}

#[test]
fn crossing_segments_intersect() {
    let p = intersect_segments(&seg(0.0, 0.0, 2.0, 2.0), &seg(0.0, 2.0, 2.0, 0.0)).unwrap();
    assert!((p - vector![1.0, 1.0]).norm() < 1e-12);
    // Disjoint in parameter space
    assert!(intersect_segments(&seg(0.0, 0.0, 1.0, 1.0), &seg(3.0, 0.0, 2.0, 1.0)).is_none());
}

#[test]
fn shared_endpoint_counts_as_intersection() {
    let p = intersect_segments(&seg(0.0, 0.0, 1.0, 0.0), &seg(1.0, 0.0, 1.0, 5.0)).unwrap();
    assert!((p - vector![1.0, 0.0]).norm() < 1e-12);
}

#[test]
fn collinear_overlap_is_not_reported() {
    assert!(intersect_segments(&seg(0.0, 0.0, 4.0, 0.0), &seg(1.0, 0.0, 3.0, 0.0)).is_none());
    assert!(intersect_segments(&seg(0.0, 0.0, 4.0, 0.0), &seg(0.0, 1.0, 4.0, 1.0)).is_none());
}

#[test]
fn line_segment_uses_infinite_line() {
    // The "line" segment is short but its extension still hits the edge.
    let line = seg(5.0, 4.0, 5.0, 5.0);
    let edge = seg(0.0, 0.0, 10.0, 0.0);
    let p = intersect_line_segment(&line, &edge).unwrap();
    assert!((p - vector![5.0, 0.0]).norm() < 1e-12);
    assert!(intersect_segments(&line, &edge).is_none());
    // Vertex hit is reported by the edge ending there.
    let p = intersect_line_segment(&seg(-1.0, -1.0, 1.0, 1.0), &seg(10.0, 0.0, 0.0, 0.0)).unwrap();
    assert!(p.norm() < 1e-12);
}

#[test]
fn circle_hits_clamp_to_segment_extent() {
    let s = seg(0.0, 0.0, 10.0, 0.0);
    assert!(segment_intersects_circle(&s, vector![5.0, 0.3], 0.5));
    assert!(!segment_intersects_circle(&s, vector![5.0, 0.7], 0.5));
    // Beyond the end: distance is to the endpoint, not to the infinite line.
    assert!(!segment_intersects_circle(&s, vector![11.0, 0.0], 0.5));
    assert!(segment_intersects_circle(&s, vector![10.3, 0.0], 0.5));
    // Tangent is not a hit.
    assert!(!segment_intersects_circle(&s, vector![5.0, 0.5], 0.5));
}

#[test]
fn nearest_point_and_distance() {
    let s = seg(0.0, 0.0, 4.0, 0.0);
    assert_eq!(nearest_point_on_segment(&s, vector![2.0, 3.0]), vector![2.0, 0.0]);
    assert_eq!(nearest_point_on_segment(&s, vector![-2.0, 1.0]), vector![0.0, 0.0]);
    assert!((distance_to_segment(&s, vector![6.0, 0.0]) - 2.0).abs() < 1e-12);
    let point = seg(1.0, 1.0, 1.0, 1.0);
    assert!((distance_to_segment(&point, vector![1.0, 4.0]) - 3.0).abs() < 1e-12);
}

#[test]
fn point_in_polygon_even_odd() {
    let sq = square(10.0);
    assert!(point_in_polygon(&sq, vector![5.0, 5.0]));
    assert!(!point_in_polygon(&sq, vector![15.0, 5.0]));
    assert!(!point_in_polygon(&sq, vector![5.0, -0.1]));
    // Concave "L": the notch is outside.
    let l = Polygon::new(vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 4.0],
        vector![0.0, 4.0],
    ]);
    assert!(point_in_polygon(&l, vector![0.5, 3.0]));
    assert!(!point_in_polygon(&l, vector![3.0, 3.0]));
}

#[test]
fn area_ignores_winding() {
    let ccw = square(3.0);
    let mut cw: Vec<Vector2<f64>> = ccw.vertices().to_vec();
    cw.reverse();
    assert!((polygon_area(ccw.vertices()) - 9.0).abs() < 1e-12);
    assert!((polygon_area(&cw) - 9.0).abs() < 1e-12);
    let c = polygon_centroid(&cw).unwrap();
    assert!((c - vector![1.5, 1.5]).norm() < 1e-12);
}

#[test]
#[should_panic(expected = "at least 3 vertices")]
fn polygon_rejects_two_vertices() {
    let _ = Polygon::new(vec![vector![0.0, 0.0], vector![1.0, 0.0]]);
}

#[test]
fn extend_diagonal_hits_two_edges() {
    let board = Board::centered(8.0, 12.0).unwrap();
    let dir = vector![1.0, 1.0].normalize();
    let chord = extend_to_boundary(vector![0.0, 0.0], dir, &board);
    // Line y = x leaves through x = ±4 before reaching y = ±6.
    assert!((chord.start - vector![-4.0, -4.0]).norm() < 1e-9);
    assert!((chord.end - vector![4.0, 4.0]).norm() < 1e-9);
}

#[test]
fn extend_axis_aligned_directions() {
    let board = Board::centered(8.0, 12.0).unwrap();
    let v = extend_to_boundary(vector![1.0, 2.0], vector![0.0, -1.0], &board);
    assert!((v.start.x - 1.0).abs() < 1e-12 && (v.end.x - 1.0).abs() < 1e-12);
    assert!((v.length() - 12.0).abs() < 1e-9);
    let h = extend_to_boundary(vector![1.0, 2.0], vector![1.0, 0.0], &board);
    assert!((h.length() - 8.0).abs() < 1e-9);
    assert!((h.start.y - 2.0).abs() < 1e-12);
}

#[test]
fn extend_degenerate_inputs() {
    let board = Board::centered(8.0, 12.0).unwrap();
    let p = vector![1.0, 1.0];
    assert!(extend_to_boundary(p, Vector2::zeros(), &board).is_degenerate());
    // Horizontal line above the board.
    assert!(extend_to_boundary(vector![0.0, 7.0], vector![1.0, 0.0], &board).is_degenerate());
}

#[test]
fn board_validation_and_helpers() {
    assert!(Board::centered(0.0, 5.0).is_none());
    assert!(Board::centered(3.0, f64::NAN).is_none());
    let b = Board::centered(8.0, 12.0).unwrap();
    assert!((b.area() - 96.0).abs() < 1e-12);
    assert!(b.contains(vector![4.0, -6.0]));
    assert!(!b.contains(vector![4.1, 0.0]));
    assert_eq!(b.clamp(vector![10.0, -10.0]), vector![4.0, -6.0]);
    assert!((b.inset_distance(vector![3.0, 0.0]) - 1.0).abs() < 1e-12);
    assert!((b.as_polygon().area() - 96.0).abs() < 1e-12);
}
