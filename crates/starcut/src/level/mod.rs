//! Level generation: division lines → regions → classes → objects.
//!
//! Purpose
//! - Produce a complete, immutable `Level` from a board size, a difficulty
//!   policy, a level index, and a replay token.
//! - Same inputs, same level: every random draw comes from the token's RNG.
//!
//! Degraded output
//! - Exhausted rejection loops (division lines, object slots) shrink the level
//!   instead of failing; they are logged at `warn`. Only invalid parameters
//!   are errors.
//! - A layout that leaves stars or junk with no placed object would be won by
//!   any chord, so it is redrawn from the same RNG stream, at most
//!   `LevelCfg::layout_attempts` times.

mod campaign;
mod policy;

pub use campaign::Campaign;
pub use policy::{DifficultyPolicy, EndlessPolicy, LevelParams, StandardPolicy};

use std::fmt;

use rand::Rng;

use crate::classify::{classify_regions, Region, RegionClass};
use crate::geom2::rand::ReplayToken;
use crate::geom2::{Board, Segment};
use crate::partition::{decompose, generate_division_lines, DivisionLineCfg};
use crate::place::{place_objects, GameObject, PlacementCfg};

pub const DEFAULT_BOARD_WIDTH: f64 = 8.0;
pub const DEFAULT_BOARD_HEIGHT: f64 = 12.0;

/// Errors raised at the generation boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelError {
    InvalidParams { reason: String },
}

impl LevelError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid level params: {reason}"),
        }
    }
}

impl std::error::Error for LevelError {}

/// Generation knobs that are not part of the difficulty curve.
#[derive(Clone, Copy, Debug)]
pub struct LevelCfg {
    pub division: DivisionLineCfg,
    pub placement: PlacementCfg,
    /// Full redraws allowed while a requested class ends up with no objects.
    pub layout_attempts: usize,
}

impl Default for LevelCfg {
    fn default() -> Self {
        Self {
            division: DivisionLineCfg::default(),
            placement: PlacementCfg::default(),
            layout_attempts: 8,
        }
    }
}

/// One draw of lines, regions, and objects.
struct Layout {
    division_lines: Vec<Segment>,
    regions: Vec<Region>,
    objects: Vec<GameObject>,
}

impl Layout {
    fn draw<R: Rng>(board: &Board, params: &LevelParams, cfg: &LevelCfg, rng: &mut R) -> Self {
        let division_lines =
            generate_division_lines(board, params.division_lines, &cfg.division, rng);
        if division_lines.len() < params.division_lines {
            tracing::warn!(
                requested = params.division_lines,
                generated = division_lines.len(),
                "fewer division lines than requested"
            );
        }
        let regions = classify_regions(decompose(board, &division_lines));
        let objects = place_objects(
            &regions,
            board,
            params.star_count,
            params.junk_count,
            &cfg.placement,
            rng,
        );
        Self {
            division_lines,
            regions,
            objects,
        }
    }

    fn count(&self, class: RegionClass) -> usize {
        self.objects.iter().filter(|o| o.class == class).count()
    }

    /// Every class with a non-zero request got at least one object.
    fn is_complete(&self, params: &LevelParams) -> bool {
        (params.star_count == 0 || self.count(RegionClass::Star) > 0)
            && (params.junk_count == 0 || self.count(RegionClass::Junk) > 0)
    }
}

/// A generated puzzle. Replaced wholesale, never edited in place.
#[derive(Clone, Debug)]
pub struct Level {
    pub index: u32,
    pub board: Board,
    /// Lines that carved the board, in application order.
    pub division_lines: Vec<Segment>,
    pub regions: Vec<Region>,
    pub objects: Vec<GameObject>,
    pub move_budget: u32,
}

impl Level {
    /// Assemble a level from parts (hand-built puzzles, tests).
    ///
    /// Fails when the budget is zero or an object references a missing region.
    pub fn from_parts(
        index: u32,
        board: Board,
        division_lines: Vec<Segment>,
        regions: Vec<Region>,
        objects: Vec<GameObject>,
        move_budget: u32,
    ) -> Result<Self, LevelError> {
        if move_budget == 0 {
            return Err(LevelError::invalid("move budget must be at least 1"));
        }
        if let Some(o) = objects.iter().find(|o| o.region >= regions.len()) {
            return Err(LevelError::invalid(format!(
                "object references region {} of {}",
                o.region,
                regions.len()
            )));
        }
        Ok(Self {
            index,
            board,
            division_lines,
            regions,
            objects,
            move_budget,
        })
    }

    pub fn stars(&self) -> impl Iterator<Item = &GameObject> + '_ {
        self.objects.iter().filter(|o| o.class == RegionClass::Star)
    }

    pub fn junk(&self) -> impl Iterator<Item = &GameObject> + '_ {
        self.objects.iter().filter(|o| o.class == RegionClass::Junk)
    }
}

/// Generate level `index` on a `width × height` board.
pub fn generate_level<P: DifficultyPolicy + ?Sized>(
    board_size: (f64, f64),
    policy: &P,
    index: u32,
    cfg: &LevelCfg,
    token: ReplayToken,
) -> Result<Level, LevelError> {
    let (width, height) = board_size;
    let board = Board::centered(width, height).ok_or_else(|| {
        LevelError::invalid(format!("board must be finite and positive, got {width} x {height}"))
    })?;
    let params = policy.params(index);
    if params.move_budget == 0 {
        return Err(LevelError::invalid("policy returned a zero move budget"));
    }

    let mut rng = token.to_std_rng();
    let mut attempt = 1;
    let layout = loop {
        let layout = Layout::draw(&board, &params, cfg, &mut rng);
        if layout.is_complete(&params) {
            break layout;
        }
        if attempt >= cfg.layout_attempts {
            tracing::warn!(
                level = index,
                attempts = attempt,
                stars = layout.count(RegionClass::Star),
                junk = layout.count(RegionClass::Junk),
                "layout still missing a class; keeping the last draw"
            );
            break layout;
        }
        tracing::debug!(level = index, attempt, "layout missing a class; redrawing");
        attempt += 1;
    };

    let level = Level::from_parts(
        index,
        board,
        layout.division_lines,
        layout.regions,
        layout.objects,
        params.move_budget,
    )?;
    tracing::info!(
        level = index,
        seed = token.seed,
        lines = level.division_lines.len(),
        regions = level.regions.len(),
        stars = level.stars().count(),
        junk = level.junk().count(),
        moves = level.move_budget,
        "generated level"
    );
    Ok(level)
}
