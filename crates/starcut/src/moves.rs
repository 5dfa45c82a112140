//! Move validation: the drag protocol, chord legality, and the win predicate.
//!
//! Gesture state machine: `Idle → Dragging → Idle`, each `end_drag` either
//! committing a chord or discarding the gesture. Invalid input (no moves left,
//! anchor off the board, wrong state) is ignored rather than reported as an
//! error; that is input debouncing, not a fault.
//!
//! Chords
//! - A drag from `anchor` to `p` becomes the full-board chord through `anchor`
//!   along `p - anchor` (`geom2::extend_to_boundary`).
//! - Legal iff it misses every object circle (radius scaled by
//!   `MoveCfg::clearance_scale`).
//!
//! Win predicate
//! - Solved iff at least one chord is committed and every star–junk pair's
//!   connecting segment crosses some committed chord. Recomputed on every call.

use nalgebra::Vector2;

use crate::classify::RegionClass;
use crate::geom2::{extend_to_boundary, intersect_segments, segment_intersects_circle, Segment};
use crate::level::Level;

/// Validator configuration.
#[derive(Clone, Copy, Debug)]
pub struct MoveCfg {
    /// Drags shorter than this are discarded on release.
    pub min_drag_distance: f64,
    /// Multiplier on object radii for the legality test (1.0 = full radius).
    pub clearance_scale: f64,
}

impl Default for MoveCfg {
    fn default() -> Self {
        Self {
            min_drag_distance: 0.1,
            clearance_scale: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { anchor: Vector2<f64> },
}

/// Candidate chord for preview colouring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChordPreview {
    pub chord: Segment,
    pub legal: bool,
}

/// Result of a drag event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragResult {
    /// Gesture in progress; `None` while the drag has no direction yet.
    Tracking(Option<ChordPreview>),
    Committed(Segment),
    Discarded,
    Ignored,
}

/// Level status as seen by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// One play session on one level.
#[derive(Clone, Debug)]
pub struct Game {
    level: Level,
    cfg: MoveCfg,
    chords: Vec<Segment>,
    remaining: u32,
    state: DragState,
}

impl Game {
    pub fn new(level: Level, cfg: MoveCfg) -> Self {
        let remaining = level.move_budget;
        Self {
            level,
            cfg,
            chords: Vec::new(),
            remaining,
            state: DragState::Idle,
        }
    }

    #[inline]
    pub fn level(&self) -> &Level {
        &self.level
    }

    #[inline]
    pub fn chords(&self) -> &[Segment] {
        &self.chords
    }

    #[inline]
    pub fn remaining_moves(&self) -> u32 {
        self.remaining
    }

    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.state
    }

    /// Replace the level wholesale; drops chords and any in-flight gesture.
    pub fn load(&mut self, level: Level) {
        *self = Self::new(level, self.cfg);
    }

    /// Clear all chords and restore the full move budget.
    pub fn reset(&mut self) {
        self.chords.clear();
        self.remaining = self.level.move_budget;
        self.state = DragState::Idle;
    }

    /// Full-board chord through `anchor` towards `p`; `None` for a zero-length drag.
    pub fn chord_for(&self, anchor: Vector2<f64>, p: Vector2<f64>) -> Option<Segment> {
        let dir = Segment::new(anchor, p).direction()?;
        let chord = extend_to_boundary(anchor, dir, &self.level.board);
        if chord.is_degenerate() {
            tracing::debug!(?anchor, ?p, "chord extension degenerated");
            return None;
        }
        Some(chord)
    }

    /// A chord is legal when it clears every object's (scaled) collision circle.
    pub fn is_legal(&self, chord: &Segment) -> bool {
        self.level.objects.iter().all(|o| {
            !segment_intersects_circle(chord, o.position, o.radius * self.cfg.clearance_scale)
        })
    }

    fn preview(&self, anchor: Vector2<f64>, p: Vector2<f64>) -> Option<ChordPreview> {
        self.chord_for(anchor, p).map(|chord| ChordPreview {
            legal: self.is_legal(&chord),
            chord,
        })
    }

    pub fn begin_drag(&mut self, p: Vector2<f64>) -> DragResult {
        if self.state != DragState::Idle || self.remaining == 0 || !self.level.board.contains(p) {
            return DragResult::Ignored;
        }
        self.state = DragState::Dragging { anchor: p };
        DragResult::Tracking(None)
    }

    /// Preview only; committed state is untouched.
    pub fn update_drag(&mut self, p: Vector2<f64>) -> DragResult {
        match self.state {
            DragState::Dragging { anchor } => DragResult::Tracking(self.preview(anchor, p)),
            DragState::Idle => DragResult::Ignored,
        }
    }

    pub fn end_drag(&mut self, p: Vector2<f64>) -> DragResult {
        let DragState::Dragging { anchor } = self.state else {
            return DragResult::Ignored;
        };
        self.state = DragState::Idle;
        if (p - anchor).norm() <= self.cfg.min_drag_distance {
            return DragResult::Discarded;
        }
        match self.preview(anchor, p) {
            Some(ChordPreview { chord, legal: true }) => {
                self.chords.push(chord);
                self.remaining -= 1;
                tracing::debug!(
                    chords = self.chords.len(),
                    remaining = self.remaining,
                    solved = self.is_solved(),
                    "chord committed"
                );
                DragResult::Committed(chord)
            }
            _ => DragResult::Discarded,
        }
    }

    /// Abandon an in-flight gesture without committing anything.
    pub fn cancel_drag(&mut self) -> bool {
        let was_dragging = self.state != DragState::Idle;
        self.state = DragState::Idle;
        was_dragging
    }

    /// Remove the most recent chord and refund its move.
    pub fn undo_last_chord(&mut self) -> bool {
        if self.chords.pop().is_some() {
            self.remaining += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    fn separated(&self, a: Vector2<f64>, b: Vector2<f64>) -> bool {
        let sight = Segment::new(a, b);
        self.chords
            .iter()
            .any(|c| intersect_segments(&sight, c).is_some())
    }

    /// Star/junk index pairs (into `Level::objects`) not yet separated by any chord.
    pub fn blocking_pairs(&self) -> Vec<(usize, usize)> {
        let objs = &self.level.objects;
        let mut out = Vec::new();
        for (i, s) in objs.iter().enumerate() {
            if s.class != RegionClass::Star {
                continue;
            }
            for (j, k) in objs.iter().enumerate() {
                if k.class == RegionClass::Junk && !self.separated(s.position, k.position) {
                    out.push((i, j));
                }
            }
        }
        out
    }

    pub fn is_solved(&self) -> bool {
        if self.chords.is_empty() {
            return false;
        }
        self.level.stars().all(|s| {
            self.level
                .junk()
                .all(|k| self.separated(s.position, k.position))
        })
    }

    pub fn outcome(&self) -> Outcome {
        if self.is_solved() {
            Outcome::Won
        } else if self.remaining == 0 {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Region;
    use crate::geom2::{Board, Polygon};
    use crate::place::GameObject;
    use nalgebra::vector;

    fn rect(x0: f64, x1: f64) -> Polygon {
        Polygon::new(vec![
            vector![x0, -6.0],
            vector![x1, -6.0],
            vector![x1, 6.0],
            vector![x0, 6.0],
        ])
    }

    /// 8 × 12 board halved at x = 0: star on the left, junk on the right.
    fn halves(budget: u32) -> Game {
        let board = Board::centered(8.0, 12.0).unwrap();
        let line = Segment::new(vector![0.0, -6.0], vector![0.0, 6.0]);
        let regions = vec![
            Region {
                polygon: rect(-4.0, 0.0),
                class: RegionClass::Star,
            },
            Region {
                polygon: rect(0.0, 4.0),
                class: RegionClass::Junk,
            },
        ];
        let objects = vec![
            GameObject {
                position: vector![-2.0, 1.0],
                radius: 0.4,
                class: RegionClass::Star,
                region: 0,
            },
            GameObject {
                position: vector![2.0, -1.0],
                radius: 0.3,
                class: RegionClass::Junk,
                region: 1,
            },
        ];
        let level = Level::from_parts(1, board, vec![line], regions, objects, budget).unwrap();
        Game::new(level, MoveCfg::default())
    }

    fn drag(g: &mut Game, a: Vector2<f64>, b: Vector2<f64>) -> DragResult {
        g.begin_drag(a);
        g.update_drag(b);
        g.end_drag(b)
    }

    #[test]
    fn chord_along_divider_solves() {
        let mut g = halves(3);
        assert!(!g.is_solved());
        let r = drag(&mut g, vector![0.0, -3.0], vector![0.0, 3.0]);
        let DragResult::Committed(chord) = r else {
            panic!("expected commit, got {r:?}");
        };
        assert!((chord.length() - 12.0).abs() < 1e-9);
        assert_eq!(g.remaining_moves(), 2);
        assert!(g.is_solved());
        assert_eq!(g.outcome(), Outcome::Won);
        assert!(g.blocking_pairs().is_empty());
    }

    #[test]
    fn chord_through_star_is_discarded() {
        let mut g = halves(3);
        let r = drag(&mut g, vector![-2.0, -5.0], vector![-2.0, 5.0]);
        assert_eq!(r, DragResult::Discarded);
        assert_eq!(g.remaining_moves(), 3);
        assert!(g.chords().is_empty());
        assert_eq!(g.drag_state(), DragState::Idle);
    }

    #[test]
    fn preview_reports_legality_without_committing() {
        let mut g = halves(3);
        assert_eq!(g.begin_drag(vector![-2.0, -5.0]), DragResult::Tracking(None));
        match g.update_drag(vector![-2.0, 5.0]) {
            DragResult::Tracking(Some(p)) => assert!(!p.legal),
            other => panic!("unexpected {other:?}"),
        }
        match g.update_drag(vector![-3.5, 5.0]) {
            DragResult::Tracking(Some(p)) => assert!(p.legal),
            other => panic!("unexpected {other:?}"),
        }
        assert!(g.chords().is_empty());
        assert!(g.cancel_drag());
        assert_eq!(g.update_drag(vector![0.0, 0.0]), DragResult::Ignored);
    }

    #[test]
    fn ignored_inputs() {
        let mut g = halves(1);
        assert_eq!(g.update_drag(vector![0.0, 0.0]), DragResult::Ignored);
        assert_eq!(g.end_drag(vector![0.0, 0.0]), DragResult::Ignored);
        assert_eq!(g.begin_drag(vector![9.0, 0.0]), DragResult::Ignored);
        assert_eq!(g.begin_drag(vector![0.0, -3.0]), DragResult::Tracking(None));
        // Already dragging.
        assert_eq!(g.begin_drag(vector![0.0, 0.0]), DragResult::Ignored);
        assert!(matches!(g.end_drag(vector![0.0, 3.0]), DragResult::Committed(_)));
        // Budget exhausted.
        assert_eq!(g.remaining_moves(), 0);
        assert_eq!(g.begin_drag(vector![1.0, 1.0]), DragResult::Ignored);
    }

    #[test]
    fn short_drag_is_discarded() {
        let mut g = halves(3);
        g.begin_drag(vector![0.0, 0.0]);
        assert_eq!(g.end_drag(vector![0.0, 0.05]), DragResult::Discarded);
        assert_eq!(g.remaining_moves(), 3);
    }

    #[test]
    fn undo_restores_budget_and_predicate() {
        let mut g = halves(2);
        drag(&mut g, vector![0.0, -3.0], vector![0.0, 3.0]);
        assert!(g.is_solved());
        assert!(g.undo_last_chord());
        assert_eq!(g.remaining_moves(), 2);
        assert!(!g.is_solved());
        assert!(!g.undo_last_chord());
        assert_eq!(g.blocking_pairs(), vec![(0, 1)]);
    }

    #[test]
    fn outcome_lost_when_budget_spent_unsolved() {
        let mut g = halves(1);
        // Horizontal chord above both objects separates nothing.
        let r = drag(&mut g, vector![-3.5, 5.0], vector![3.5, 5.0]);
        assert!(matches!(r, DragResult::Committed(_)));
        assert!(!g.is_solved());
        assert_eq!(g.outcome(), Outcome::Lost);
        g.reset();
        assert_eq!(g.remaining_moves(), 1);
        assert_eq!(g.outcome(), Outcome::InProgress);
    }

    #[test]
    fn clearance_scale_shrinks_hit_circles() {
        let mut g = halves(3);
        g.cfg.clearance_scale = 0.5;
        // Passes 0.3 from the star centre: inside r = 0.4, outside 0.2.
        let chord = g.chord_for(vector![-1.7, -5.0], vector![-1.7, 5.0]).unwrap();
        assert!(g.is_legal(&chord));
        g.cfg.clearance_scale = 1.0;
        assert!(!g.is_legal(&chord));
    }
}
