//! Nearest-item lookup and distance ranking of candidate tiles.
//! This module exists so approach and evade moves share one tie-break rule:
//! the earliest entry in input order wins.
//! It does not own which items the policy cares about.

use crate::grid::manhattan;
use crate::types::Pos;

pub trait DistanceMetric {
    fn distance(&self, a: Pos, b: Pos) -> u32;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl DistanceMetric for Manhattan {
    fn distance(&self, a: Pos, b: Pos) -> u32 {
        manhattan(a, b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankMode {
    /// Minimize distance to the reference.
    Approach,
    /// Maximize distance from the reference.
    Evade,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector<M = Manhattan> {
    radius: u32,
    metric: M,
}

impl Selector<Manhattan> {
    pub fn new(radius: u32) -> Self {
        Self::with_metric(radius, Manhattan)
    }
}

impl<M: DistanceMetric> Selector<M> {
    pub fn with_metric(radius: u32, metric: M) -> Self {
        Self { radius, metric }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Items no further than the detection radius, in input order.
    pub fn items_in_range(&self, from: Pos, items: &[Pos]) -> Vec<Pos> {
        items
            .iter()
            .copied()
            .filter(|&item| self.metric.distance(from, item) <= self.radius)
            .collect()
    }

    pub fn any_in_range(&self, from: Pos, items: &[Pos]) -> bool {
        items.iter().any(|&item| self.metric.distance(from, item) <= self.radius)
    }

    /// Closest item strictly inside the detection radius. Ties keep the first item.
    pub fn nearest_item(&self, items: &[Pos], from: Pos) -> Option<Pos> {
        let mut best_distance = self.radius;
        let mut best = None;
        for &item in items {
            let distance = self.metric.distance(item, from);
            if distance < best_distance {
                best_distance = distance;
                best = Some(item);
            }
        }
        best
    }

    /// Best tile relative to `reference`. Ties keep the first tile; no tiles gives `None`.
    pub fn rank_tiles(&self, tiles: &[Pos], reference: Pos, mode: RankMode) -> Option<Pos> {
        let mut best: Option<(u32, Pos)> = None;
        for &tile in tiles {
            let distance = self.metric.distance(tile, reference);
            let is_better = match best {
                None => true,
                Some((best_distance, _)) => match mode {
                    RankMode::Approach => distance < best_distance,
                    RankMode::Evade => distance > best_distance,
                },
            };
            if is_better {
                best = Some((distance, tile));
            }
        }
        best.map(|(_, tile)| tile)
    }

    /// [`Selector::nearest_item`], falling back to the first item sitting exactly on the radius.
    /// `None` only when nothing is in range.
    pub fn nearest_in_range(&self, items: &[Pos], from: Pos) -> Option<Pos> {
        self.nearest_item(items, from)
            .or_else(|| self.items_in_range(from, items).first().copied())
    }

    /// Ranks `tiles` against the in-range item nearest to `from`; `None` when nothing is in range.
    pub fn rank_tiles_by_distance_to_item(
        &self,
        tiles: &[Pos],
        items: &[Pos],
        from: Pos,
        mode: RankMode,
    ) -> Option<Pos> {
        let item = self.nearest_in_range(items, from)?;
        self.rank_tiles(tiles, item, mode)
    }
}
