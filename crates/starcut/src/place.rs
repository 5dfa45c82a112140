//! Object placement inside classified regions.
//!
//! Each region hosts at most `max(1, ⌊area / (4·spacing²)⌋)` objects of its own
//! class. A class's requested count is dealt round-robin over its regions up
//! to those caps (stars first, then junk), and each slot is filled by
//! rejection sampling from `geom2::rand::sample_point_in_polygon`.
//!
//! A candidate is rejected when it
//! - is not inside the region polygon,
//! - is closer than `min_spacing` to any region edge or any placed object,
//! - is closer than `board_margin` to the board edge.
//!
//! Slots that exhaust `max_attempts` are skipped; regions may be under-filled.

use nalgebra::Vector2;
use rand::Rng;

use crate::classify::{Region, RegionClass};
use crate::geom2::rand::sample_point_in_polygon;
use crate::geom2::Board;

/// Placement configuration.
#[derive(Clone, Copy, Debug)]
pub struct PlacementCfg {
    pub min_spacing: f64,
    pub board_margin: f64,
    /// Rejection-sampling attempts per object slot.
    pub max_attempts: usize,
    pub star_radius: f64,
    pub junk_radius: f64,
}

impl Default for PlacementCfg {
    fn default() -> Self {
        Self {
            min_spacing: 1.0,
            board_margin: 1.0,
            max_attempts: 100,
            star_radius: 0.4,
            junk_radius: 0.3,
        }
    }
}

impl PlacementCfg {
    #[inline]
    pub fn radius_for(&self, class: RegionClass) -> f64 {
        match class {
            RegionClass::Star => self.star_radius,
            RegionClass::Junk => self.junk_radius,
        }
    }
}

/// A placed star or junk object. Never mutated after placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameObject {
    pub position: Vector2<f64>,
    pub radius: f64,
    pub class: RegionClass,
    /// Index of the hosting region in `Level::regions`.
    pub region: usize,
}

/// Per-region object cap.
#[inline]
pub fn max_objects(area: f64, spacing: f64) -> usize {
    let cell = spacing * spacing * 4.0;
    if !(cell.is_finite()) || cell <= 0.0 {
        return 1;
    }
    ((area / cell).floor() as usize).max(1)
}

/// Deal `count` slots round-robin over regions with the given caps.
fn deal_slots(caps: &[usize], count: usize) -> Vec<usize> {
    let mut quota = vec![0usize; caps.len()];
    let mut left = count;
    while left > 0 {
        let mut dealt = false;
        for (q, &cap) in quota.iter_mut().zip(caps) {
            if left == 0 {
                break;
            }
            if *q < cap {
                *q += 1;
                left -= 1;
                dealt = true;
            }
        }
        if !dealt {
            break;
        }
    }
    quota
}

fn accepts(
    p: Vector2<f64>,
    region: &Region,
    board: &Board,
    placed: &[GameObject],
    cfg: &PlacementCfg,
) -> bool {
    region.polygon.contains(p)
        && board.inset_distance(p) >= cfg.board_margin
        && region.polygon.distance_to_boundary(p) >= cfg.min_spacing
        && placed
            .iter()
            .all(|o| (o.position - p).norm() >= cfg.min_spacing)
}

/// Place up to `star_count` stars and `junk_count` junk objects.
pub fn place_objects<R: Rng>(
    regions: &[Region],
    board: &Board,
    star_count: usize,
    junk_count: usize,
    cfg: &PlacementCfg,
    rng: &mut R,
) -> Vec<GameObject> {
    let mut placed: Vec<GameObject> = Vec::with_capacity(star_count + junk_count);
    for (class, count) in [(RegionClass::Star, star_count), (RegionClass::Junk, junk_count)] {
        let hosts: Vec<usize> = (0..regions.len())
            .filter(|&k| regions[k].class == class)
            .collect();
        let caps: Vec<usize> = hosts
            .iter()
            .map(|&k| max_objects(regions[k].polygon.area(), cfg.min_spacing))
            .collect();
        let quota = deal_slots(&caps, count);
        let capacity: usize = quota.iter().sum();
        if capacity < count {
            tracing::warn!(
                class = class.as_str(),
                requested = count,
                capacity,
                "not enough region capacity for requested objects"
            );
        }

        for (&k, &slots) in hosts.iter().zip(&quota) {
            let region = &regions[k];
            for slot in 0..slots {
                let found = (0..cfg.max_attempts)
                    .map(|_| sample_point_in_polygon(&region.polygon, rng))
                    .find(|&p| accepts(p, region, board, &placed, cfg));
                match found {
                    Some(position) => placed.push(GameObject {
                        position,
                        radius: cfg.radius_for(class),
                        class,
                        region: k,
                    }),
                    None => tracing::warn!(
                        region = k,
                        slot,
                        attempts = cfg.max_attempts,
                        "object slot left empty after exhausting attempts"
                    ),
                }
            }
        }
    }
    tracing::debug!(placed = placed.len(), "objects placed");
    placed
}
