//! Puzzle core for a line-cutting game: carve a board with chords so that no
//! star can "see" any junk.
//!
//! Pipeline
//! - `partition`: division lines and the polygon decomposition they induce.
//! - `classify`: Star/Junk labels over the region adjacency graph.
//! - `place`: spaced objects inside their regions.
//! - `level`: difficulty policies and deterministic level generation.
//! - `moves`: the drag protocol, chord legality, and the win predicate.
//!
//! Everything is deterministic given a `ReplayToken`; there is no I/O and no
//! global state. Logging goes through `tracing`; install a subscriber to see it.

pub mod api;
pub mod classify;
pub mod geom2;
pub mod level;
pub mod moves;
pub mod partition;
pub mod place;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use level::{generate_level, Level, LevelError};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::classify::{Region, RegionClass};
    pub use crate::geom2::rand::ReplayToken;
    pub use crate::geom2::{Board, Polygon, Segment};
    pub use crate::level::{
        generate_level, Campaign, DifficultyPolicy, EndlessPolicy, Level, LevelCfg, StandardPolicy,
    };
    pub use crate::moves::{DragResult, Game, MoveCfg, Outcome};
    pub use crate::place::GameObject;
    pub use nalgebra::Vector2 as Vec2;
}
