//! Orthogonal slider rays.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::game_state::square_set::SquareSet;
use crate::moves::bishop_moves::trace_ray;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn rook_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    ROOK_DIRECTIONS
        .iter()
        .fold(SquareSet::EMPTY, |acc, &(file_step, rank_step)| {
            acc | trace_ray(square, file_step, rank_step, occupancy)
        })
}

#[inline]
pub fn rook_moves(square: Square, color: Color, position: &Position) -> SquareSet {
    rook_attacks(square, position.occupied()) & !position.occupied_by(color)
}
