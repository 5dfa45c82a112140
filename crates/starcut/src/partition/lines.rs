//! Division-line generator used to carve the board during level generation.
//!
//! Candidates are vertical, horizontal, or corner-to-corner diagonal lines.
//! Parallel axis lines keep `min_separation` from each other and from the
//! parallel board edges so objects still fit between them; each diagonal is
//! used at most once. Every line is returned as a segment spanning the board.

use rand::Rng;

use crate::geom2::{Board, Segment};

/// Division-line generator configuration.
#[derive(Clone, Copy, Debug)]
pub struct DivisionLineCfg {
    /// Minimum gap between parallel axis lines and from the board edges.
    ///
    /// Keep it above twice `PlacementCfg::min_spacing`, or the slab next to a
    /// board edge has no point that satisfies both the edge margin and the
    /// region-edge spacing.
    pub min_separation: f64,
    /// Rejection-sampling attempts per requested line before giving up on it.
    pub max_attempts: usize,
    pub allow_diagonals: bool,
}

impl Default for DivisionLineCfg {
    fn default() -> Self {
        Self {
            min_separation: 3.0,
            max_attempts: 100,
            allow_diagonals: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Candidate {
    Vertical(f64),
    Horizontal(f64),
    /// `true`: bottom-left to top-right.
    Diagonal(bool),
}

impl Candidate {
    fn segment(self, board: &Board) -> Segment {
        let (min, max) = (board.min, board.max);
        match self {
            Candidate::Vertical(x) => Segment::new([x, min.y].into(), [x, max.y].into()),
            Candidate::Horizontal(y) => Segment::new([min.x, y].into(), [max.x, y].into()),
            Candidate::Diagonal(true) => Segment::new(min, max),
            Candidate::Diagonal(false) => Segment::new([min.x, max.y].into(), [max.x, min.y].into()),
        }
    }

    fn conflicts(self, other: Candidate, sep: f64) -> bool {
        match (self, other) {
            (Candidate::Vertical(a), Candidate::Vertical(b))
            | (Candidate::Horizontal(a), Candidate::Horizontal(b)) => (a - b).abs() < sep,
            (Candidate::Diagonal(a), Candidate::Diagonal(b)) => a == b,
            _ => false,
        }
    }
}

/// Coordinate in `[lo + sep, hi - sep]`, or `None` when the slab is too thin.
fn draw_offset<R: Rng>(lo: f64, hi: f64, sep: f64, rng: &mut R) -> Option<f64> {
    let (a, b) = (lo + sep, hi - sep);
    if b < a {
        return None;
    }
    Some(rng.gen_range(a..=b))
}

fn draw_candidate<R: Rng>(board: &Board, cfg: &DivisionLineCfg, rng: &mut R) -> Option<Candidate> {
    let kinds = if cfg.allow_diagonals { 3 } else { 2 };
    let sep = cfg.min_separation;
    match rng.gen_range(0..kinds) {
        0 => draw_offset(board.min.x, board.max.x, sep, rng).map(Candidate::Vertical),
        1 => draw_offset(board.min.y, board.max.y, sep, rng).map(Candidate::Horizontal),
        _ => Some(Candidate::Diagonal(rng.gen::<bool>())),
    }
}

/// Generate up to `count` division lines, in the order they must be applied.
///
/// A line whose attempts run out is skipped (logged at `warn`), so the result
/// may be shorter than `count`.
pub fn generate_division_lines<R: Rng>(
    board: &Board,
    count: usize,
    cfg: &DivisionLineCfg,
    rng: &mut R,
) -> Vec<Segment> {
    let mut accepted: Vec<Candidate> = Vec::with_capacity(count);
    for line in 0..count {
        let mut found = None;
        for _ in 0..cfg.max_attempts {
            let Some(c) = draw_candidate(board, cfg, rng) else {
                continue;
            };
            if accepted
                .iter()
                .all(|&prev| !c.conflicts(prev, cfg.min_separation))
            {
                found = Some(c);
                break;
            }
        }
        match found {
            Some(c) => accepted.push(c),
            None => tracing::warn!(
                line,
                attempts = cfg.max_attempts,
                "no division line satisfied the separation constraints; skipping"
            ),
        }
    }
    accepted.into_iter().map(|c| c.segment(board)).collect()
}
