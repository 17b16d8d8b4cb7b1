//! Game record: the current position, the side to move, and the moves
//! that led there.
//!
//! This is the entry point for confirmed moves, whether they come from the
//! local player or from the move relay. Every move is checked against the
//! legal move generator before it is applied, and the status for the new
//! side to move is returned so the caller can end the game on a terminal
//! verdict.

use tracing::debug;

use crate::errors::{RulesError, RulesResult};
use crate::game_state::chess_types::{Color, Move, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::simulate;
use crate::move_generation::legal_move_checks::attackers_to_square;
use crate::move_generation::legal_move_generator::{
    all_legal_moves, legal_destinations, legal_moves, LegalMoves, Selection,
};
use crate::move_generation::terminal_state::{game_status, GameStatus};

#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    turn: Color,
    status: GameStatus,
    history: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard setup, light to move.
    pub fn new() -> Self {
        Self {
            position: Position::starting(),
            turn: Color::Light,
            status: GameStatus::Ongoing,
            history: Vec::new(),
        }
    }

    /// Resume from an arbitrary position. Requires exactly one king per color.
    pub fn from_position(position: Position, turn: Color) -> RulesResult<Self> {
        position.validate_kings()?;
        let status = game_status(&position, turn)?;
        Ok(Self {
            position,
            turn,
            status,
            history: Vec::new(),
        })
    }

    pub fn from_fen(fen: &str) -> RulesResult<Self> {
        let (position, turn) = Position::from_fen(fen)?;
        Self::from_position(position, turn)
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Selection query for the side to move.
    pub fn legal_moves(&self, selection: Selection) -> RulesResult<LegalMoves> {
        legal_moves(&self.position, selection, self.turn)
    }

    pub fn all_legal_moves(&self) -> RulesResult<Vec<Move>> {
        all_legal_moves(&self.position, self.turn)
    }

    /// Apply a move by the side to move and return the new status.
    pub fn apply_move(&mut self, from: Square, to: Square) -> RulesResult<GameStatus> {
        if self.status.is_terminal() {
            return Err(RulesError::GameOver(self.status));
        }

        let piece = self
            .position
            .piece_at(from)
            .ok_or(RulesError::IllegalSelection(from))?;
        if piece.color != self.turn {
            return Err(RulesError::WrongTurn {
                expected: self.turn,
                found: piece.color,
            });
        }

        if !legal_destinations(&self.position, from, self.turn)?.contains(to) {
            return Err(RulesError::IllegalMove { from, to });
        }

        let mover = self.turn;
        self.position = simulate(&self.position, from, to)?;
        self.history.push(Move::new(from, to));
        self.turn = mover.opposite();
        self.status = game_status(&self.position, self.turn)?;

        debug!(color = %mover, mv = %Move::new(from, to), status = ?self.status, "move applied");
        if matches!(self.status, GameStatus::Check | GameStatus::Checkmate) {
            let king = self.position.king_square(self.turn)?;
            for (square, kind) in attackers_to_square(&self.position, king, mover) {
                debug!(%square, ?kind, "checking piece");
            }
        }

        Ok(self.status)
    }

    /// Apply a move reported by the relay on behalf of `color`.
    pub fn apply_relayed_move(
        &mut self,
        from: Square,
        to: Square,
        color: Color,
    ) -> RulesResult<GameStatus> {
        if color != self.turn {
            return Err(RulesError::WrongTurn {
                expected: self.turn,
                found: color,
            });
        }
        self.apply_move(from, to)
    }
}
