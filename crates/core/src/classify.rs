//! Per-tick labelling of candidate tiles.
//! Every list keeps the candidate order, which tile ranking relies on for tie-breaks.

use crate::hazard::HazardMap;
use crate::snapshot::WorldSnapshot;
use crate::types::{EntityKind, Pos};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileClasses {
    pub empty: Vec<Pos>,
    pub safe: Vec<Pos>,
    /// Non-wall tiles that are not blasted. Superset of `safe`.
    pub traversable: Vec<Pos>,
}

pub fn is_empty(tile: Pos, snapshot: &WorldSnapshot) -> bool {
    snapshot.entity_at(tile).is_none()
}

/// Empty, or holding a pickup that no blast covers.
pub fn is_safe(tile: Pos, snapshot: &WorldSnapshot, blasts: &HazardMap) -> bool {
    match snapshot.entity_at(tile) {
        None => true,
        Some(entity) => entity.kind.is_pickup() && is_traversable(tile, snapshot, blasts),
    }
}

/// Empty, or holding anything but a wall where no blast is tracked or still on the board.
pub fn is_traversable(tile: Pos, snapshot: &WorldSnapshot, blasts: &HazardMap) -> bool {
    match snapshot.entity_at(tile) {
        None => true,
        Some(entity) => {
            !blasts.is_active(tile)
                && !entity.kind.is_wall()
                && !snapshot.has_entity_at(tile, EntityKind::Blast)
        }
    }
}

pub fn classify_tiles(tiles: &[Pos], snapshot: &WorldSnapshot, blasts: &HazardMap) -> TileClasses {
    let mut classes = TileClasses::default();
    for &tile in tiles {
        if is_empty(tile, snapshot) {
            classes.empty.push(tile);
        }
        if is_safe(tile, snapshot, blasts) {
            classes.safe.push(tile);
        }
        if is_traversable(tile, snapshot, blasts) {
            classes.traversable.push(tile);
        }
    }
    classes
}
