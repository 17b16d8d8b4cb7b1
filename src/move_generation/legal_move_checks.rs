//! Attack queries and check detection.
//!
//! A square is attacked by a color when any piece of that color has it in
//! its threat set (`attacks_from`). Pawns threaten diagonally even when
//! their advance is blocked.

use crate::errors::RulesResult;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::piece_moves::attacks_from;

pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    position
        .pieces_of(attacker_color)
        .any(|(from, piece)| attacks_from(piece, from, position).contains(square))
}

/// Every `attacker_color` piece that threatens `square`, in square order.
pub fn attackers_to_square(
    position: &Position,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    position
        .pieces_of(attacker_color)
        .filter(|&(from, piece)| attacks_from(piece, from, position).contains(square))
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}

/// Whether the king of `color` is attacked.
///
/// Fails with `MissingKing` unless `color` has exactly one king.
pub fn is_in_check(position: &Position, color: Color) -> RulesResult<bool> {
    let king_sq = position.king_square(color)?;
    Ok(is_square_attacked(position, king_sq, color.opposite()))
}
