//! Arena wire format: game-state documents in, action packets out.
//!
//! A game-state document carries the connection's own agent number, per-agent
//! state keyed by `"0"`/`"1"`, and the entity list:
//!
//! ```json
//! {
//!   "connection": { "agent_number": 0 },
//!   "agent_state": {
//!     "0": { "coordinates": [1, 2], "hp": 3, "inventory": { "bombs": 3 } },
//!     "1": { "coordinates": [7, 6], "hp": 3, "inventory": { "bombs": 3 } }
//!   },
//!   "entities": [{ "x": 4, "y": 4, "type": "b", "owner": 1 }],
//!   "world": { "width": 9, "height": 9 }
//! }
//! ```
//!
//! Unknown fields are ignored; unknown entity type codes decode as [`EntityKind::Unknown`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{BOARD_SIZE, in_bounds};
use crate::snapshot::{AgentState, Entity, WorldSnapshot};
use crate::types::*;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed game state: {0}")]
    Json(#[from] serde_json::Error),
    #[error("game state has no agent_state entry for agent {0}")]
    MissingAgent(AgentId),
    #[error("board is {width}x{height}, only the 9x9 arena is supported")]
    UnsupportedBoard { width: i32, height: i32 },
    #[error("{what} at ({x}, {y}) lies outside the board")]
    OutOfBounds { what: &'static str, x: i32, y: i32 },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireGameState {
    pub connection: WireConnection,
    pub agent_state: BTreeMap<String, WireAgentState>,
    #[serde(default)]
    pub entities: Vec<WireEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world: Option<WireWorld>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireConnection {
    pub agent_number: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireAgentState {
    pub coordinates: [i32; 2],
    pub hp: i32,
    pub inventory: WireInventory,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireInventory {
    pub bombs: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireEntity {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireWorld {
    pub width: i32,
    pub height: i32,
}

impl WireGameState {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The arena seats two agents; the adversary is whichever one this connection is not.
    pub fn adversary_id(&self) -> AgentId {
        AgentId(if self.connection.agent_number == 0 { 1 } else { 0 })
    }

    fn agent(&self, id: AgentId) -> Result<AgentState, SnapshotError> {
        let state = self.agent_state.get(&id.to_string()).ok_or(SnapshotError::MissingAgent(id))?;
        let [x, y] = state.coordinates;
        let pos = checked_pos("agent", x, y)?;
        Ok(AgentState { id, pos, hp: state.hp, ammo: state.inventory.bombs })
    }
}

impl TryFrom<WireGameState> for WorldSnapshot {
    type Error = SnapshotError;

    fn try_from(state: WireGameState) -> Result<Self, Self::Error> {
        if let Some(world) = &state.world
            && (world.width != BOARD_SIZE || world.height != BOARD_SIZE)
        {
            let (width, height) = (world.width, world.height);
            return Err(SnapshotError::UnsupportedBoard { width, height });
        }
        let me = state.agent(AgentId(state.connection.agent_number))?;
        let adversary = state.agent(state.adversary_id())?;
        let entities = state
            .entities
            .iter()
            .map(|entity| {
                Ok(Entity {
                    pos: checked_pos("entity", entity.x, entity.y)?,
                    kind: entity.kind,
                    owner: entity.owner.map(AgentId),
                })
            })
            .collect::<Result<Vec<_>, SnapshotError>>()?;
        Ok(WorldSnapshot { entities, me, adversary })
    }
}

/// Decodes one game-state document straight into a snapshot.
pub fn parse_snapshot(json: &str) -> Result<WorldSnapshot, SnapshotError> {
    WireGameState::from_json(json)?.try_into()
}

fn checked_pos(what: &'static str, x: i32, y: i32) -> Result<Pos, SnapshotError> {
    let pos = Pos { x, y };
    if !in_bounds(pos) {
        return Err(SnapshotError::OutOfBounds { what, x, y });
    }
    Ok(pos)
}

/// Outgoing packet for one action. `Idle` sends nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionPacket {
    Move { action: Direction },
    Bomb,
    Detonate { coordinates: [i32; 2] },
}

impl ActionPacket {
    pub fn from_action(action: Action) -> Option<Self> {
        match action {
            Action::Move(direction) => Some(ActionPacket::Move { action: direction }),
            Action::PlaceBomb => Some(ActionPacket::Bomb),
            Action::Detonate(pos) => Some(ActionPacket::Detonate { coordinates: [pos.x, pos.y] }),
            Action::Idle => None,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
