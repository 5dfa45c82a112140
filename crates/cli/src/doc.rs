//! JSON views of levels and play sessions.
//!
//! The library types stay serde-free; these mirror them with plain arrays so
//! the output is easy to consume from any front end.

use serde::Serialize;
use starcut::classify::Region;
use starcut::geom2::Segment;
use starcut::level::Level;
use starcut::moves::{DragResult, Game, Outcome};
use starcut::place::GameObject;

type Point = [f64; 2];

#[derive(Serialize)]
pub struct SegmentDoc {
    pub start: Point,
    pub end: Point,
}

impl From<&Segment> for SegmentDoc {
    fn from(s: &Segment) -> Self {
        Self {
            start: [s.start.x, s.start.y],
            end: [s.end.x, s.end.y],
        }
    }
}

#[derive(Serialize)]
pub struct RegionDoc {
    pub class: &'static str,
    pub area: f64,
    pub vertices: Vec<Point>,
}

impl From<&Region> for RegionDoc {
    fn from(r: &Region) -> Self {
        Self {
            class: r.class.as_str(),
            area: r.polygon.area(),
            vertices: r.polygon.vertices().iter().map(|v| [v.x, v.y]).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct ObjectDoc {
    pub class: &'static str,
    pub position: Point,
    pub radius: f64,
    pub region: usize,
}

impl From<&GameObject> for ObjectDoc {
    fn from(o: &GameObject) -> Self {
        Self {
            class: o.class.as_str(),
            position: [o.position.x, o.position.y],
            radius: o.radius,
            region: o.region,
        }
    }
}

#[derive(Serialize)]
pub struct LevelDoc {
    pub index: u32,
    pub board: SegmentDoc,
    pub move_budget: u32,
    pub division_lines: Vec<SegmentDoc>,
    pub regions: Vec<RegionDoc>,
    pub objects: Vec<ObjectDoc>,
}

impl From<&Level> for LevelDoc {
    fn from(l: &Level) -> Self {
        Self {
            index: l.index,
            board: SegmentDoc {
                start: [l.board.min.x, l.board.min.y],
                end: [l.board.max.x, l.board.max.y],
            },
            move_budget: l.move_budget,
            division_lines: l.division_lines.iter().map(SegmentDoc::from).collect(),
            regions: l.regions.iter().map(RegionDoc::from).collect(),
            objects: l.objects.iter().map(ObjectDoc::from).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct MoveDoc {
    pub drag: SegmentDoc,
    pub result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chord: Option<SegmentDoc>,
    pub remaining_moves: u32,
}

impl MoveDoc {
    pub fn new(drag: &Segment, result: &DragResult, game: &Game) -> Self {
        let (result, chord) = match result {
            DragResult::Committed(c) => ("committed", Some(SegmentDoc::from(c))),
            DragResult::Discarded => ("discarded", None),
            DragResult::Ignored => ("ignored", None),
            DragResult::Tracking(_) => ("tracking", None),
        };
        Self {
            drag: drag.into(),
            result,
            chord,
            remaining_moves: game.remaining_moves(),
        }
    }
}

#[derive(Serialize)]
pub struct SessionDoc {
    pub level: u32,
    pub moves: Vec<MoveDoc>,
    pub outcome: &'static str,
    /// Unseparated (star, junk) object index pairs.
    pub blocking_pairs: Vec<(usize, usize)>,
}

pub fn outcome_str(o: Outcome) -> &'static str {
    match o {
        Outcome::InProgress => "in_progress",
        Outcome::Won => "won",
        Outcome::Lost => "lost",
    }
}
