use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::game_state::square_set::SquareSet;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

#[inline]
pub fn queen_moves(square: Square, color: Color, position: &Position) -> SquareSet {
    queen_attacks(square, position.occupied()) & !position.occupied_by(color)
}
