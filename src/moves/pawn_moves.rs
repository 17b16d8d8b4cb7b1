//! Pawn attack tables and destinations.
//!
//! Pawns move and capture differently: they advance straight ahead onto
//! empty squares but threaten the two forward diagonals whether or not
//! anything stands there. No en passant, no promotion.

use crate::game_state::chess_rules::{DARK_PAWN_START_RANK, LIGHT_PAWN_START_RANK};
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::game_state::square_set::SquareSet;

pub const LIGHT_PAWN_ATTACKS: [u64; 64] = generate_light_pawn_attacks();
pub const DARK_PAWN_ATTACKS: [u64; 64] = generate_dark_pawn_attacks();

/// Diagonal squares a `color` pawn on `square` threatens.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> SquareSet {
    let bits = match color {
        Color::Light => LIGHT_PAWN_ATTACKS[square.index() as usize],
        Color::Dark => DARK_PAWN_ATTACKS[square.index() as usize],
    };
    SquareSet::from_bits(bits)
}

/// Forward advances onto empty squares plus diagonal captures of enemy pieces.
pub fn pawn_moves(square: Square, color: Color, position: &Position) -> SquareSet {
    let occupied = position.occupied();
    let mut moves = SquareSet::EMPTY;

    let start_rank = match color {
        Color::Light => LIGHT_PAWN_START_RANK,
        Color::Dark => DARK_PAWN_START_RANK,
    };

    if let Some(one_step) = square.offset(0, color.forward()) {
        if !occupied.contains(one_step) {
            moves.insert(one_step);

            if square.rank() == start_rank {
                if let Some(two_step) = one_step.offset(0, color.forward()) {
                    if !occupied.contains(two_step) {
                        moves.insert(two_step);
                    }
                }
            }
        }
    }

    moves | (pawn_attacks(color, square) & position.occupied_by(color.opposite()))
}

const fn generate_light_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank < 7 {
            if file > 0 {
                attacks |= 1u64 << (sq + 7);
            }
            if file < 7 {
                attacks |= 1u64 << (sq + 9);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn generate_dark_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank > 0 {
            if file > 0 {
                attacks |= 1u64 << (sq - 9);
            }
            if file < 7 {
                attacks |= 1u64 << (sq - 7);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
