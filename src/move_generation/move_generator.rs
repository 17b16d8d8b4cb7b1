//! Whole-side move generation seam used by perft and playouts.

use crate::errors::RulesResult;
use crate::game_state::chess_types::{Color, Move};
use crate::game_state::position::Position;

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, position: &Position, color: Color) -> RulesResult<Vec<Move>>;
}
