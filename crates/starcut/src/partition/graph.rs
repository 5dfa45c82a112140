//! Region adjacency graph.
//!
//! Two regions are adjacent when any vertex of one lies within `EPS` of any
//! vertex of the other. Every division line spans the whole board, so regions
//! on either side of a line share the split points it created; corner-only
//! contact counts as adjacency too.

use crate::geom2::{Polygon, EPS};

/// Vertex-coincidence adjacency test.
pub fn are_adjacent(a: &Polygon, b: &Polygon) -> bool {
    a.vertices()
        .iter()
        .any(|p| b.vertices().iter().any(|q| (p - q).norm() < EPS))
}

/// Immutable adjacency lists, built once from the final region set.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyGraph {
    /// Neighbours of region `k`, ascending.
    adj: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Graph from prebuilt adjacency lists.
    #[cfg(test)]
    pub(crate) fn from_lists(adj: Vec<Vec<usize>>) -> Self {
        Self { adj }
    }

    pub fn build(regions: &[Polygon]) -> Self {
        let n = regions.len();
        let mut adj = vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                if are_adjacent(&regions[i], &regions[j]) {
                    adj[i].push(j);
                    adj[j].push(i);
                }
            }
        }
        Self { adj }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    #[inline]
    pub fn neighbors(&self, k: usize) -> &[usize] {
        &self.adj[k]
    }
}
