//! Region classification: tag every region Star or Junk.
//!
//! Adjacency-propagated alternation over an immutable `AdjacencyGraph`:
//! - region 0 is Star;
//! - repeatedly take the first unlabeled region touching a labeled one; if its
//!   labeled neighbours are all Star it becomes Junk, all Junk it becomes Star,
//!   mixed → the class with fewer members so far (ties favour Star);
//! - with no such region, the first unlabeled region gets the fewer-members rule.
//!
//! This is not a proper 2-colouring (quadrants around one crossing are all
//! mutually adjacent); the only hard guarantee is that both classes are present
//! whenever there are at least two regions.

use crate::geom2::Polygon;
use crate::partition::AdjacencyGraph;

/// Object class carried by a region and by every object placed in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionClass {
    Star,
    Junk,
}

impl RegionClass {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            RegionClass::Star => RegionClass::Junk,
            RegionClass::Junk => RegionClass::Star,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RegionClass::Star => "star",
            RegionClass::Junk => "junk",
        }
    }
}

/// A board region with its class label.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pub polygon: Polygon,
    pub class: RegionClass,
}

#[derive(Default)]
struct Tally {
    star: usize,
    junk: usize,
}

impl Tally {
    fn fewer(&self) -> RegionClass {
        if self.junk < self.star {
            RegionClass::Junk
        } else {
            RegionClass::Star
        }
    }

    fn add(&mut self, c: RegionClass) {
        match c {
            RegionClass::Star => self.star += 1,
            RegionClass::Junk => self.junk += 1,
        }
    }
}

/// Label regions given only their adjacency graph; returns one class per node.
pub fn classify_graph(graph: &AdjacencyGraph) -> Vec<RegionClass> {
    let n = graph.len();
    if n == 0 {
        return Vec::new();
    }
    let mut labels: Vec<Option<RegionClass>> = vec![None; n];
    let mut tally = Tally::default();
    labels[0] = Some(RegionClass::Star);
    tally.add(RegionClass::Star);

    for _ in 1..n {
        let frontier = (0..n).find(|&k| {
            labels[k].is_none() && graph.neighbors(k).iter().any(|&j| labels[j].is_some())
        });
        let (k, class) = match frontier {
            Some(k) => {
                let (mut star, mut junk) = (false, false);
                for &j in graph.neighbors(k) {
                    match labels[j] {
                        Some(RegionClass::Star) => star = true,
                        Some(RegionClass::Junk) => junk = true,
                        None => {}
                    }
                }
                let class = match (star, junk) {
                    (true, false) => RegionClass::Junk,
                    (false, true) => RegionClass::Star,
                    _ => tally.fewer(),
                };
                (k, class)
            }
            None => match labels.iter().position(Option::is_none) {
                Some(k) => (k, tally.fewer()),
                None => break,
            },
        };
        labels[k] = Some(class);
        tally.add(class);
    }

    let mut out: Vec<RegionClass> = labels
        .into_iter()
        .map(|l| l.unwrap_or(RegionClass::Star))
        .collect();
    if n >= 2 {
        for missing in [RegionClass::Star, RegionClass::Junk] {
            if !out.contains(&missing) {
                // Relabel the first region of the other class.
                if let Some(k) = out.iter().position(|&c| c == missing.other()) {
                    out[k] = missing;
                }
            }
        }
    }
    out
}

/// Build the adjacency graph once and attach a class to every polygon.
pub fn classify_regions(polygons: Vec<Polygon>) -> Vec<Region> {
    let graph = AdjacencyGraph::build(&polygons);
    let classes = classify_graph(&graph);
    polygons
        .into_iter()
        .zip(classes)
        .map(|(polygon, class)| Region { polygon, class })
        .collect()
}
