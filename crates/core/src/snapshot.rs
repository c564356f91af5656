//! Per-tick world view handed to the agent.
//! Snapshots are built once per tick (usually by `wire`) and only read afterwards.

use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entity {
    pub pos: Pos,
    pub kind: EntityKind,
    pub owner: Option<AgentId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentState {
    pub id: AgentId,
    pub pos: Pos,
    pub hp: i32,
    pub ammo: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldSnapshot {
    pub entities: Vec<Entity>,
    pub me: AgentState,
    pub adversary: AgentState,
}

impl WorldSnapshot {
    /// First entity at `pos` in snapshot order.
    pub fn entity_at(&self, pos: Pos) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.pos == pos)
    }

    pub fn has_entity_at(&self, pos: Pos, kind: EntityKind) -> bool {
        self.entities.iter().any(|entity| entity.pos == pos && entity.kind == kind)
    }

    pub fn positions_of(&self, kind: EntityKind) -> Vec<Pos> {
        self.entities.iter().filter(|entity| entity.kind == kind).map(|entity| entity.pos).collect()
    }

    pub fn first_own_bomb(&self) -> Option<Pos> {
        self.entities
            .iter()
            .find(|entity| entity.kind == EntityKind::Bomb && entity.owner == Some(self.me.id))
            .map(|entity| entity.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn entity_at_returns_first_entity_in_snapshot_order() {
        let mut snapshot = open_arena(Pos { x: 4, y: 4 }, Pos { x: 0, y: 0 });
        let tile = Pos { x: 2, y: 2 };
        snapshot.entities.push(entity(tile, EntityKind::Blast));
        snapshot.entities.push(entity(tile, EntityKind::Ammo));

        assert_eq!(snapshot.entity_at(tile).map(|e| e.kind), Some(EntityKind::Blast));
        assert!(snapshot.has_entity_at(tile, EntityKind::Ammo));
        assert!(snapshot.entity_at(Pos { x: 3, y: 3 }).is_none());
    }

    #[test]
    fn first_own_bomb_ignores_adversary_bombs() {
        let mut snapshot = open_arena(Pos { x: 4, y: 4 }, Pos { x: 0, y: 0 });
        let adversary = snapshot.adversary.id;
        let me = snapshot.me.id;
        snapshot.entities.push(owned(Pos { x: 1, y: 1 }, EntityKind::Bomb, adversary));
        snapshot.entities.push(owned(Pos { x: 5, y: 5 }, EntityKind::Bomb, me));
        snapshot.entities.push(owned(Pos { x: 6, y: 6 }, EntityKind::Bomb, me));

        assert_eq!(snapshot.first_own_bomb(), Some(Pos { x: 5, y: 5 }));
    }

    #[test]
    fn first_own_bomb_is_none_without_own_bombs() {
        let mut snapshot = open_arena(Pos { x: 4, y: 4 }, Pos { x: 0, y: 0 });
        snapshot.entities.push(entity(Pos { x: 1, y: 1 }, EntityKind::Bomb));
        assert_eq!(snapshot.first_own_bomb(), None);
    }
}
