//! 2D geometry kernel for the board, regions, and chords.
//!
//! Purpose
//! - Stateless primitives shared by the partitioner, the placer, and the move
//!   validator: segment/segment and segment/circle intersection, point in
//!   polygon, shoelace area, nearest point on segment, and extension of a
//!   line to the board boundary.
//! - One tolerance (`EPS`) for every predicate, so degenerate cases resolve
//!   the same way wherever they are hit.
//!
//! Degeneracy policy
//! - Parallel/collinear inputs report "no intersection"; a line that misses the
//!   board extends to a zero-length segment. Nothing here returns an error.

pub mod rand;
mod types;
mod util;

pub use types::{Board, Polygon, Segment, EPS};
pub use util::{
    distance_to_segment, extend_to_boundary, intersect_line_segment, intersect_segments,
    nearest_point_on_segment, point_in_polygon, polygon_area, polygon_centroid,
    segment_intersects_circle,
};

#[cfg(test)]
mod tests;
