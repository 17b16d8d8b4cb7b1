//! Legal move generation.
//!
//! Pseudo-legal geometry from `moves_for`, filtered through
//! `would_expose_king`. Every legality decision in the crate (selection
//! highlighting, whole-side generation, the terminal-state detectors and
//! the game record) goes through the same filter.
//!
//! `legal_moves` has two modes. With a selected square it returns that
//! piece's destinations; with no selection it returns the squares of the
//! side to move, i.e. which pieces may be picked up. The result variant
//! says which one you got.

use tracing::{debug, trace};

use crate::errors::RulesResult;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::game_state::square_set::SquareSet;
use crate::move_generation::legal_move_apply::simulate;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::piece_moves::moves_for;

/// Caller-owned selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    None,
    Square(Square),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalMoves {
    /// Answer to `Selection::None`: squares holding the side to move's pieces.
    /// These are pick-up candidates, not destinations.
    OwnedSquares(SquareSet),
    /// Answer to `Selection::Square`: where the selected piece may go.
    Destinations(SquareSet),
}

impl LegalMoves {
    #[inline]
    pub fn squares(self) -> SquareSet {
        match self {
            LegalMoves::OwnedSquares(set) | LegalMoves::Destinations(set) => set,
        }
    }

    /// Destination set, or `None` for the owned-squares mode.
    #[inline]
    pub fn destinations(self) -> Option<SquareSet> {
        match self {
            LegalMoves::Destinations(set) => Some(set),
            LegalMoves::OwnedSquares(_) => None,
        }
    }
}

/// Whether moving the piece on `from` to `to` leaves `color`'s king attacked.
pub fn would_expose_king(
    position: &Position,
    from: Square,
    to: Square,
    color: Color,
) -> RulesResult<bool> {
    let next = simulate(position, from, to)?;
    is_in_check(&next, color)
}

/// Legal destinations of the piece on `from`, judged for `turn`'s king.
///
/// An empty `from` yields an empty set.
pub fn legal_destinations(position: &Position, from: Square, turn: Color) -> RulesResult<SquareSet> {
    let Some(piece) = position.piece_at(from) else {
        return Ok(SquareSet::EMPTY);
    };

    let mut legal = SquareSet::EMPTY;
    for to in moves_for(piece, from, position) {
        if would_expose_king(position, from, to, turn)? {
            trace!(%from, %to, "rejected: exposes king");
            continue;
        }
        legal.insert(to);
    }

    Ok(legal)
}

pub fn legal_moves(
    position: &Position,
    selection: Selection,
    turn: Color,
) -> RulesResult<LegalMoves> {
    match selection {
        Selection::None => Ok(LegalMoves::OwnedSquares(position.occupied_by(turn))),
        Selection::Square(square) => {
            if position.piece_at(square).is_none() {
                debug!(%square, "selection on empty square ignored");
            }
            Ok(LegalMoves::Destinations(legal_destinations(
                position, square, turn,
            )?))
        }
    }
}

/// Every legal move of `color`, in origin then destination square order.
pub fn all_legal_moves(position: &Position, color: Color) -> RulesResult<Vec<Move>> {
    let mut moves = Vec::with_capacity(64);
    for (from, _) in position.pieces_of(color) {
        for to in legal_destinations(position, from, color)? {
            moves.push(Move::new(from, to));
        }
    }
    Ok(moves)
}

/// Whether `color` has at least one legal move. Stops at the first one.
pub fn has_legal_move(position: &Position, color: Color) -> RulesResult<bool> {
    for (from, piece) in position.pieces_of(color) {
        for to in moves_for(piece, from, position) {
            if !would_expose_king(position, from, to, color)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, position: &Position, color: Color) -> RulesResult<Vec<Move>> {
        all_legal_moves(position, color)
    }
}
