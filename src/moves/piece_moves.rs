//! Per-kind dispatch over the movement rules.
//!
//! `moves_for` is the pseudo-legal geometry of a single piece: it never
//! looks at whether the mover's own king ends up attacked. That filter
//! lives in `move_generation`.

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::game_state::square_set::SquareSet;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::{pawn_attacks, pawn_moves};
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Squares `piece` standing on `square` could move to on `position`.
pub fn moves_for(piece: Piece, square: Square, position: &Position) -> SquareSet {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn_moves(square, color, position),
        PieceKind::Knight => knight_moves(square, color, position),
        PieceKind::Bishop => bishop_moves(square, color, position),
        PieceKind::Rook => rook_moves(square, color, position),
        PieceKind::Queen => queen_moves(square, color, position),
        PieceKind::King => king_moves(square, color, position),
    }
}

/// Squares `piece` threatens. Same as `moves_for` except for pawns, which
/// threaten their forward diagonals even when they cannot advance.
pub fn attacks_from(piece: Piece, square: Square, position: &Position) -> SquareSet {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, square),
        _ => moves_for(piece, square, position),
    }
}
