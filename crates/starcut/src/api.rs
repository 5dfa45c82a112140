//! Curated surface for front ends (UNSTABLE).
//!
//! A presentation layer needs only what is re-exported here: generate or walk
//! levels, feed pointer events into a `Game`, and read back chords, previews,
//! and the outcome. Internal helpers stay behind their modules.

// Geometry
pub use crate::geom2::{extend_to_boundary, Board, Polygon, Segment, EPS};
// Generation
pub use crate::classify::{classify_regions, Region, RegionClass};
pub use crate::geom2::rand::ReplayToken;
pub use crate::level::{
    generate_level, Campaign, DifficultyPolicy, EndlessPolicy, Level, LevelCfg, LevelError,
    LevelParams, StandardPolicy, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH,
};
pub use crate::partition::{decompose, generate_division_lines, DivisionLineCfg};
pub use crate::place::{place_objects, GameObject, PlacementCfg};
// Play
pub use crate::moves::{ChordPreview, DragResult, DragState, Game, MoveCfg, Outcome};
