//! Board geometry for the fixed-size square arena.
//! Neighbor rings are always enumerated in a fixed order so tile ranking stays deterministic.

use crate::types::{Direction, Pos};

pub const BOARD_SIZE: i32 = 9;

// Manhattan distance 1 and 2 around the origin, row by row from the top.
const EXTENDED_OFFSETS: [(i32, i32); 12] = [
    (0, 2),
    (-1, 1),
    (0, 1),
    (1, 1),
    (-2, 0),
    (-1, 0),
    (1, 0),
    (2, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (0, -2),
];

pub fn in_bounds(pos: Pos) -> bool {
    pos.x >= 0 && pos.y >= 0 && pos.x < BOARD_SIZE && pos.y < BOARD_SIZE
}

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// In-bounds orthogonal neighbors in up, down, left, right order.
pub fn immediate_ring(pos: Pos) -> Vec<Pos> {
    Direction::ALL
        .into_iter()
        .map(|direction| pos.step(direction))
        .filter(|&tile| in_bounds(tile))
        .collect()
}

/// In-bounds tiles within two steps of `pos`, excluding `pos` itself.
pub fn extended_ring(pos: Pos) -> Vec<Pos> {
    EXTENDED_OFFSETS
        .into_iter()
        .map(|(dx, dy)| pos.offset(dx, dy))
        .filter(|&tile| in_bounds(tile))
        .collect()
}
