use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn offset(self, dx: i32, dy: i32) -> Pos {
        Pos { x: self.x + dx, y: self.y + dy }
    }

    pub fn step(self, direction: Direction) -> Pos {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u8);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kinds of entity that can occupy a tile. The serde names are the arena's wire codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    #[serde(rename = "m")]
    IndestructibleWall,
    // Wooden crates and ore blocks both break under blasts.
    #[serde(rename = "w", alias = "o")]
    DestructibleWall,
    #[serde(rename = "b")]
    Bomb,
    #[serde(rename = "x")]
    Blast,
    #[serde(rename = "a")]
    Ammo,
    #[serde(rename = "bp")]
    PowerUp,
    #[serde(rename = "p")]
    Player,
    /// Any code this agent does not know. It occupies its tile but never blocks like a wall.
    #[serde(other)]
    Unknown,
}

impl EntityKind {
    pub fn is_wall(self) -> bool {
        matches!(self, EntityKind::IndestructibleWall | EntityKind::DestructibleWall)
    }

    pub fn is_pickup(self) -> bool {
        matches!(self, EntityKind::Ammo | EntityKind::PowerUp)
    }
}

/// Board directions. `Up` increases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Enumeration order for neighbor rings. Tile ranking breaks ties by this order.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Move(Direction),
    PlaceBomb,
    Detonate(Pos),
    Idle,
}

/// Policy branch that produced a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    EscapeBombUnderfoot,
    EvadeImminentBomb,
    CollectPowerUp,
    CollectAmmo,
    BombAdversary,
    RetreatFromAdversary,
    ChaseAdversary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub rule: Rule,
    /// Neighbor tile picked by the selector, if any.
    pub target: Option<Pos>,
    pub action: Action,
}
