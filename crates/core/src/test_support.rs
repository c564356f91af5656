//! Shared test fixtures for the core unit test suites.
//! This module exists to avoid repeating snapshot setup across many tests.
//! It does not own production decision logic.

use crate::snapshot::{AgentState, Entity, WorldSnapshot};
use crate::types::*;

pub(crate) const ME: AgentId = AgentId(0);
pub(crate) const ADVERSARY: AgentId = AgentId(1);

/// Board with no entities; both agents at full health with three bombs.
pub(crate) fn open_arena(me: Pos, adversary: Pos) -> WorldSnapshot {
    WorldSnapshot {
        entities: Vec::new(),
        me: AgentState { id: ME, pos: me, hp: 3, ammo: 3 },
        adversary: AgentState { id: ADVERSARY, pos: adversary, hp: 3, ammo: 3 },
    }
}

pub(crate) fn entity(pos: Pos, kind: EntityKind) -> Entity {
    Entity { pos, kind, owner: None }
}

pub(crate) fn owned(pos: Pos, kind: EntityKind, owner: AgentId) -> Entity {
    Entity { pos, kind, owner: Some(owner) }
}

/// Surrounds `center` with indestructible walls except for the listed openings.
pub(crate) fn wall_in(snapshot: &mut WorldSnapshot, center: Pos, openings: &[Pos]) {
    for direction in Direction::ALL {
        let tile = center.step(direction);
        if !openings.contains(&tile) {
            snapshot.entities.push(entity(tile, EntityKind::IndestructibleWall));
        }
    }
}
