//! Adjacent-tile to direction mapping.

use super::*;

/// Direction that moves `from` onto `to`, if `to` is exactly one orthogonal step away.
pub fn move_to_tile(from: Pos, to: Pos) -> Option<Direction> {
    Direction::ALL.into_iter().find(|&direction| from.step(direction) == to)
}
