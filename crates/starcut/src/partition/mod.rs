//! Board partitioning: single-line polygon splits, batch decomposition,
//! division-line generation, and the region adjacency graph.
//!
//! Purpose
//! - Carve the board into disjoint convex regions whose union is the board.
//! - Provide the adjacency structure the classifier colours.
//!
//! Notes
//! - Splits use infinite-line semantics, so a division line only needs two
//!   points on it; generated lines happen to span the board exactly.
//! - Splits are not commutative once lines cross; `decompose` applies lines
//!   in the order given.

mod graph;
pub mod lines;
mod split;

pub use graph::{are_adjacent, AdjacencyGraph};
pub use lines::{generate_division_lines, DivisionLineCfg};
pub use split::{decompose, split_by_line};

#[cfg(test)]
mod tests;
