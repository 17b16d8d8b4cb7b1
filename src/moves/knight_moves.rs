//! Knight jump tables and destinations.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::game_state::square_set::SquareSet;

pub const KNIGHT_JUMPS: [u64; 64] = generate_knight_jumps();

/// Every in-board square a knight on `square` can jump to, ignoring occupancy.
#[inline]
pub const fn knight_jumps(square: Square) -> SquareSet {
    SquareSet::from_bits(KNIGHT_JUMPS[square.index() as usize])
}

/// Knight destinations: the jump set minus squares held by `color`.
#[inline]
pub fn knight_moves(square: Square, color: Color, position: &Position) -> SquareSet {
    knight_jumps(square) & !position.occupied_by(color)
}

const fn generate_knight_jumps() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut jumps = 0u64;

        jumps |= set_if_valid(file + 1, rank + 2);
        jumps |= set_if_valid(file + 2, rank + 1);
        jumps |= set_if_valid(file + 2, rank - 1);
        jumps |= set_if_valid(file + 1, rank - 2);
        jumps |= set_if_valid(file - 1, rank - 2);
        jumps |= set_if_valid(file - 2, rank - 1);
        jumps |= set_if_valid(file - 2, rank + 1);
        jumps |= set_if_valid(file - 1, rank + 2);

        table[sq] = jumps;
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

#[cfg(test)]
mod tests {
    use super::{knight_jumps, knight_moves};
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::position::Position;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn knight_from_d4_has_eight_targets_and_corner_has_two() {
        assert_eq!(knight_jumps(sq("d4")).len(), 8);
        assert_eq!(knight_jumps(sq("a1")).len(), 2);
        assert_eq!(knight_jumps(sq("h8")).len(), 2);
    }

    #[test]
    fn knight_skips_own_pieces_and_keeps_captures() {
        let position = Position::empty()
            .with_piece(sq("g1"), Piece::new(PieceKind::Knight, Color::Light))
            .with_piece(sq("e2"), Piece::new(PieceKind::Pawn, Color::Light))
            .with_piece(sq("h3"), Piece::new(PieceKind::Pawn, Color::Dark));

        let moves = knight_moves(sq("g1"), Color::Light, &position);
        assert!(!moves.contains(sq("e2")));
        assert!(moves.contains(sq("h3")));
        assert!(moves.contains(sq("f3")));
        assert_eq!(moves.len(), 2);
    }
}
