//! Diagonal slider rays.
//!
//! `trace_ray` is shared with the rook and queen generators: it walks one
//! direction and stops on (and includes) the first occupied square. The
//! caller then masks out its own pieces, which leaves enemy blockers in the
//! set as captures.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::game_state::square_set::SquareSet;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Diagonal rays from `square`, each ending on the first occupied square.
#[inline]
pub fn bishop_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    BISHOP_DIRECTIONS
        .iter()
        .fold(SquareSet::EMPTY, |acc, &(file_step, rank_step)| {
            acc | trace_ray(square, file_step, rank_step, occupancy)
        })
}

#[inline]
pub fn bishop_moves(square: Square, color: Color, position: &Position) -> SquareSet {
    bishop_attacks(square, position.occupied()) & !position.occupied_by(color)
}

pub(crate) fn trace_ray(
    square: Square,
    file_step: i8,
    rank_step: i8,
    occupancy: SquareSet,
) -> SquareSet {
    let mut attacks = SquareSet::EMPTY;
    let mut cursor = square.offset(file_step, rank_step);

    while let Some(target) = cursor {
        attacks.insert(target);

        if occupancy.contains(target) {
            break;
        }

        cursor = target.offset(file_step, rank_step);
    }

    attacks
}
