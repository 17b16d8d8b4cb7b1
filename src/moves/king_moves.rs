//! King step tables and destinations.
//!
//! One square in any direction. There is no castling, so the table is the
//! whole story.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::game_state::square_set::SquareSet;

pub const KING_STEPS: [u64; 64] = generate_king_steps();

#[inline]
pub const fn king_steps(square: Square) -> SquareSet {
    SquareSet::from_bits(KING_STEPS[square.index() as usize])
}

/// King destinations: empty or enemy-held neighbours.
#[inline]
pub fn king_moves(square: Square, color: Color, position: &Position) -> SquareSet {
    king_steps(square) & !position.occupied_by(color)
}

const fn generate_king_steps() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut steps = 0u64;

        steps |= set_if_valid(file - 1, rank - 1);
        steps |= set_if_valid(file, rank - 1);
        steps |= set_if_valid(file + 1, rank - 1);
        steps |= set_if_valid(file - 1, rank);
        steps |= set_if_valid(file + 1, rank);
        steps |= set_if_valid(file - 1, rank + 1);
        steps |= set_if_valid(file, rank + 1);
        steps |= set_if_valid(file + 1, rank + 1);

        table[sq] = steps;
        sq += 1;
    }

    table
}

const fn set_if_valid(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    let square = (rank as usize) * 8 + (file as usize);
    1u64 << square
}
