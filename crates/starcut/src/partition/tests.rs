use super::*;
use crate::geom2::{Board, Polygon, Segment};
use nalgebra::{vector, Vector2};

fn square10() -> Polygon {
    Polygon::new(vec![
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 10.0],
        vector![0.0, 10.0],
    ])
}

fn total_area(polys: &[Polygon]) -> f64 {
    polys.iter().map(|p| p.area()).sum()
}

#[test]
fn vertical_line_halves_square() {
    let parts = split_by_line(&square10(), vector![5.0, -1.0], vector![5.0, 11.0]);
    assert_eq!(parts.len(), 2);
    for p in &parts {
        assert!((p.area() - 50.0).abs() < 1e-9);
    }
    assert!(parts[0].contains(vector![7.5, 5.0]) != parts[1].contains(vector![7.5, 5.0]));
}

#[test]
fn diagonal_through_corners_gives_two_triangles() {
    let parts = split_by_line(&square10(), vector![0.0, 0.0], vector![10.0, 10.0]);
    assert_eq!(parts.len(), 2);
    for p in &parts {
        assert_eq!(p.len(), 3);
        assert!((p.area() - 50.0).abs() < 1e-9);
    }
}

#[test]
fn line_through_one_vertex_and_an_edge() {
    // From corner (0,0) to the middle of the top edge.
    let parts = split_by_line(&square10(), vector![0.0, 0.0], vector![5.0, 10.0]);
    assert_eq!(parts.len(), 2);
    let mut areas: Vec<f64> = parts.iter().map(|p| p.area()).collect();
    areas.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert!((areas[0] - 25.0).abs() < 1e-9);
    assert!((areas[1] - 75.0).abs() < 1e-9);
}

#[test]
fn non_bisecting_lines_are_noops() {
    let sq = square10();
    // Misses entirely.
    assert_eq!(split_by_line(&sq, vector![20.0, 0.0], vector![20.0, 1.0]), vec![sq.clone()]);
    // Touches one corner only.
    assert_eq!(split_by_line(&sq, vector![-1.0, 1.0], vector![1.0, -1.0]), vec![sq.clone()]);
    // Runs along an edge.
    assert_eq!(split_by_line(&sq, vector![-1.0, 0.0], vector![11.0, 0.0]), vec![sq.clone()]);
    // Degenerate line.
    assert_eq!(split_by_line(&sq, vector![5.0, 5.0], vector![5.0, 5.0]), vec![sq]);
}

#[test]
fn decompose_with_cross_yields_quadrants() {
    let board = Board::centered(8.0, 12.0).unwrap();
    let lines = [
        Segment::new(vector![0.0, -6.0], vector![0.0, 6.0]),
        Segment::new(vector![-4.0, 1.0], vector![4.0, 1.0]),
    ];
    let regions = decompose(&board, &lines);
    assert_eq!(regions.len(), 4);
    assert!((total_area(&regions) - board.area()).abs() < 1e-9);
    let mut areas: Vec<f64> = regions.iter().map(|p| p.area()).collect();
    areas.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert!((areas[0] - 20.0).abs() < 1e-9);
    assert!((areas[3] - 28.0).abs() < 1e-9);
}

#[test]
fn decompose_order_changes_topology() {
    // A diagonal then a vertical through the diagonal's midpoint, and the reverse,
    // give the same cell count for full-board lines; the cells themselves match
    // up to vertex order, so compare sorted areas.
    let board = Board::centered(8.0, 12.0).unwrap();
    let d = Segment::new(board.min, board.max);
    let v = Segment::new(vector![2.0, -6.0], vector![2.0, 6.0]);
    let a = decompose(&board, &[d, v]);
    let b = decompose(&board, &[v, d]);
    assert_eq!(a.len(), b.len());
    let areas = |r: &[Polygon]| {
        let mut x: Vec<f64> = r.iter().map(|p| p.area()).collect();
        x.sort_by(|p, q| p.partial_cmp(q).unwrap());
        x
    };
    for (x, y) in areas(&a).iter().zip(areas(&b).iter()) {
        assert!((x - y).abs() < 1e-9);
    }
}

#[test]
fn regions_do_not_overlap_on_grid() {
    let board = Board::centered(8.0, 12.0).unwrap();
    let lines = [
        Segment::new(board.min, board.max),
        Segment::new(vector![-1.5, -6.0], vector![-1.5, 6.0]),
        Segment::new(vector![-4.0, 2.5], vector![4.0, 2.5]),
    ];
    let regions = decompose(&board, &lines);
    assert!((total_area(&regions) - board.area()).abs() < 1e-9);
    // Offset grid avoids sampling exactly on a division line.
    for i in 0..40 {
        for j in 0..60 {
            let p: Vector2<f64> = vector![-4.0 + 0.2 * i as f64 + 0.0137, -6.0 + 0.2 * j as f64 + 0.0071];
            let hits = regions.iter().filter(|r| r.contains(p)).count();
            assert_eq!(hits, 1, "point {p:?} in {hits} regions");
        }
    }
}

#[test]
fn adjacency_from_shared_split_points() {
    let board = Board::centered(8.0, 12.0).unwrap();
    let lines = [Segment::new(vector![0.0, -6.0], vector![0.0, 6.0])];
    let halves = decompose(&board, &lines);
    assert!(are_adjacent(&halves[0], &halves[1]));

    let far = Polygon::new(vec![vector![20.0, 20.0], vector![21.0, 20.0], vector![20.0, 21.0]]);
    assert!(!are_adjacent(&halves[0], &far));

    let quads = decompose(
        &board,
        &[
            Segment::new(vector![0.0, -6.0], vector![0.0, 6.0]),
            Segment::new(vector![-4.0, 0.0], vector![4.0, 0.0]),
        ],
    );
    let g = AdjacencyGraph::build(&quads);
    assert_eq!(g.len(), 4);
    // All four quadrants touch the centre point.
    for k in 0..4 {
        assert_eq!(g.neighbors(k).len(), 3);
        assert!(g.neighbors(k).windows(2).all(|w| w[0] < w[1]));
    }
}
