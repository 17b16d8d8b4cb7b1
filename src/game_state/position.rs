//! Board position model.
//!
//! `Position` is a square-indexed array of optional pieces, mirrored into
//! per-color, per-kind bitboards so the movement rules can test occupancy
//! with a mask. It is a plain value: cloning yields an independent board,
//! and the engine never keeps one between calls.

use crate::errors::{RulesError, RulesResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::game_state::square_set::SquareSet;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    squares: [Option<Piece>; 64],
    // [color][piece_kind]
    pieces: [[u64; 6]; 2],
}

impl Default for Position {
    fn default() -> Self {
        Self {
            squares: [None; 64],
            pieces: [[0; 6]; 2],
        }
    }
}

impl Position {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard initial setup.
    pub fn starting() -> Self {
        parse_fen(STARTING_POSITION_FEN)
            .expect("starting FEN should always parse")
            .0
    }

    /// Board and side to move from FEN text.
    #[inline]
    pub fn from_fen(fen: &str) -> RulesResult<(Self, Color)> {
        parse_fen(fen)
    }

    /// Builder form of [`Position::put`].
    #[must_use]
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.put(square, piece);
        self
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize]
    }

    /// Place `piece` on `square`, returning whatever stood there.
    pub fn put(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        let previous = self.remove(square);
        self.squares[square.index() as usize] = Some(piece);
        self.pieces[piece.color.index()][piece.kind.index()] |= square.bit();
        previous
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let previous = self.squares[square.index() as usize].take();
        if let Some(piece) = previous {
            self.pieces[piece.color.index()][piece.kind.index()] &= !square.bit();
        }
        previous
    }

    #[inline]
    pub fn pieces_of_kind(&self, color: Color, kind: PieceKind) -> SquareSet {
        SquareSet::from_bits(self.pieces[color.index()][kind.index()])
    }

    /// Squares holding any piece of `color`.
    #[inline]
    pub fn occupied_by(&self, color: Color) -> SquareSet {
        SquareSet::from_bits(
            self.pieces[color.index()]
                .iter()
                .copied()
                .fold(0u64, |acc, bb| acc | bb),
        )
    }

    #[inline]
    pub fn occupied(&self) -> SquareSet {
        self.occupied_by(Color::Light) | self.occupied_by(Color::Dark)
    }

    /// `(square, piece)` pairs for every piece of `color`, in square order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied_by(color)
            .into_iter()
            .filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// The single king of `color`.
    pub fn king_square(&self, color: Color) -> RulesResult<Square> {
        let kings = self.pieces_of_kind(color, PieceKind::King);
        match kings.len() {
            1 => kings.iter().next().ok_or(RulesError::MissingKing { color, found: 0 }),
            found => Err(RulesError::MissingKing {
                color,
                found: found as u32,
            }),
        }
    }

    /// Exactly one king per color.
    pub fn validate_kings(&self) -> RulesResult<()> {
        for color in Color::ALL {
            self.king_square(color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::errors::RulesError;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn starting_position_has_thirty_two_pieces() {
        let position = Position::starting();
        assert_eq!(position.occupied().len(), 32);
        assert_eq!(position.occupied_by(Color::Light).len(), 16);
        assert_eq!(
            position.piece_at(sq("e1")),
            Some(Piece::new(PieceKind::King, Color::Light))
        );
        assert_eq!(
            position.piece_at(sq("d8")),
            Some(Piece::new(PieceKind::Queen, Color::Dark))
        );
        assert!(position.validate_kings().is_ok());
    }

    #[test]
    fn put_replaces_and_keeps_bitboards_in_sync() {
        let mut position = Position::empty();
        let rook = Piece::new(PieceKind::Rook, Color::Dark);
        let queen = Piece::new(PieceKind::Queen, Color::Light);

        assert_eq!(position.put(sq("d4"), rook), None);
        assert_eq!(position.put(sq("d4"), queen), Some(rook));
        assert!(position.pieces_of_kind(Color::Dark, PieceKind::Rook).is_empty());
        assert!(position
            .pieces_of_kind(Color::Light, PieceKind::Queen)
            .contains(sq("d4")));

        assert_eq!(position.remove(sq("d4")), Some(queen));
        assert!(position.occupied().is_empty());
    }

    #[test]
    fn king_validation_reports_counts() {
        let king = Piece::new(PieceKind::King, Color::Light);
        let position = Position::empty()
            .with_piece(sq("e1"), king)
            .with_piece(sq("e2"), king);

        assert_eq!(
            position.king_square(Color::Light),
            Err(RulesError::MissingKing {
                color: Color::Light,
                found: 2
            })
        );
        assert_eq!(
            position.validate_kings(),
            Err(RulesError::MissingKing {
                color: Color::Light,
                found: 2
            })
        );
        assert_eq!(
            Position::empty().king_square(Color::Dark),
            Err(RulesError::MissingKing {
                color: Color::Dark,
                found: 0
            })
        );
    }
}
