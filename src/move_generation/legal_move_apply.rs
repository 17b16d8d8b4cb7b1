//! Move simulation.
//!
//! `simulate` builds the position that would follow a relocation without
//! touching the input. The king-safety filter and the game record both go
//! through it, so a simulated move and a confirmed move always agree.

use crate::errors::{RulesError, RulesResult};
use crate::game_state::chess_types::Square;
use crate::game_state::position::Position;

/// Copy of `position` with the piece on `from` moved to `to`.
///
/// Whatever stood on `to` is captured. There are no special moves, so the
/// origin and destination are the only squares that change.
pub fn simulate(position: &Position, from: Square, to: Square) -> RulesResult<Position> {
    let mut next = position.clone();
    let moving = next.remove(from).ok_or(RulesError::IllegalSelection(from))?;
    next.put(to, moving);
    Ok(next)
}
