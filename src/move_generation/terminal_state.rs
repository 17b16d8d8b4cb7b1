//! Checkmate and stalemate detection.
//!
//! Both detectors run the same escape search as the move generator
//! (`has_legal_move`, which routes every candidate through
//! `would_expose_king`), so a verdict can never disagree with what the
//! generator would allow. They differ only in the check precondition.

use tracing::debug;

use crate::errors::RulesResult;
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

/// Situation of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// In check with no legal move.
pub fn is_checkmate(position: &Position, color: Color) -> RulesResult<bool> {
    if !is_in_check(position, color)? {
        return Ok(false);
    }
    let mated = !has_legal_move(position, color)?;
    if mated {
        debug!(%color, "checkmate");
    }
    Ok(mated)
}

/// Not in check, yet no legal move.
pub fn is_stalemate(position: &Position, color: Color) -> RulesResult<bool> {
    if is_in_check(position, color)? {
        return Ok(false);
    }
    let stuck = !has_legal_move(position, color)?;
    if stuck {
        debug!(%color, "stalemate");
    }
    Ok(stuck)
}

/// Status of `color` on `position`, computed with a single escape search.
pub fn game_status(position: &Position, color: Color) -> RulesResult<GameStatus> {
    let in_check = is_in_check(position, color)?;
    let can_move = has_legal_move(position, color)?;

    Ok(match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    })
}

#[cfg(test)]
mod tests {
    use super::{game_status, is_checkmate, is_stalemate, GameStatus};
    use crate::errors::RulesError;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::position::Position;
    use crate::move_generation::legal_move_checks::is_in_check;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    fn piece(kind: PieceKind, color: Color) -> Piece {
        Piece::new(kind, color)
    }

    #[test]
    fn lone_king_against_rook_is_check_with_escapes() {
        let position = Position::empty()
            .with_piece(sq("e1"), piece(PieceKind::King, Color::Light))
            .with_piece(sq("e8"), piece(PieceKind::Rook, Color::Dark));

        assert_eq!(is_in_check(&position, Color::Light), Ok(true));
        assert_eq!(is_checkmate(&position, Color::Light), Ok(false));
        assert_eq!(game_status(&position, Color::Light), Ok(GameStatus::Check));
    }

    #[test]
    fn lone_king_with_every_escape_covered_is_mated() {
        let position = Position::empty()
            .with_piece(sq("e1"), piece(PieceKind::King, Color::Light))
            .with_piece(sq("e8"), piece(PieceKind::Rook, Color::Dark))
            .with_piece(sq("d8"), piece(PieceKind::Rook, Color::Dark))
            .with_piece(sq("f8"), piece(PieceKind::Rook, Color::Dark))
            .with_piece(sq("a8"), piece(PieceKind::King, Color::Dark));

        assert_eq!(is_in_check(&position, Color::Light), Ok(true));
        assert_eq!(is_checkmate(&position, Color::Light), Ok(true));
        assert_eq!(is_stalemate(&position, Color::Light), Ok(false));
        assert_eq!(
            game_status(&position, Color::Light),
            Ok(GameStatus::Checkmate)
        );
    }

    #[test]
    fn bishop_relief_is_an_escape() {
        let position = Position::empty()
            .with_piece(sq("e1"), piece(PieceKind::King, Color::Light))
            .with_piece(sq("e8"), piece(PieceKind::Rook, Color::Dark))
            .with_piece(sq("d8"), piece(PieceKind::Rook, Color::Dark))
            .with_piece(sq("f8"), piece(PieceKind::Rook, Color::Dark))
            .with_piece(sq("a8"), piece(PieceKind::King, Color::Dark))
            .with_piece(sq("h5"), piece(PieceKind::Bishop, Color::Light));

        // Bh5 can take on e8 or interpose on e2.
        assert_eq!(is_checkmate(&position, Color::Light), Ok(false));
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let (position, turn) =
            Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w")
                .expect("test FEN should parse");
        assert_eq!(turn, Color::Light);
        assert_eq!(is_checkmate(&position, turn), Ok(true));
        assert_eq!(is_checkmate(&position, Color::Dark), Ok(false));
    }

    #[test]
    fn cornered_king_with_queen_nearby_is_stalemated() {
        let position = Position::empty()
            .with_piece(sq("a1"), piece(PieceKind::King, Color::Light))
            .with_piece(sq("c2"), piece(PieceKind::King, Color::Dark))
            .with_piece(sq("b3"), piece(PieceKind::Queen, Color::Dark));

        assert_eq!(is_in_check(&position, Color::Light), Ok(false));
        assert_eq!(is_stalemate(&position, Color::Light), Ok(true));
        assert_eq!(is_checkmate(&position, Color::Light), Ok(false));
        assert_eq!(
            game_status(&position, Color::Light),
            Ok(GameStatus::Stalemate)
        );
    }

    #[test]
    fn bare_kings_a1_c2_are_not_stalemate() {
        // Without the queen the light king still has a2.
        let position = Position::empty()
            .with_piece(sq("a1"), piece(PieceKind::King, Color::Light))
            .with_piece(sq("c2"), piece(PieceKind::King, Color::Dark));

        assert_eq!(is_stalemate(&position, Color::Light), Ok(false));
        assert_eq!(game_status(&position, Color::Light), Ok(GameStatus::Ongoing));
    }

    #[test]
    fn blocked_pawns_do_not_count_as_moves() {
        let position = Position::empty()
            .with_piece(sq("h1"), piece(PieceKind::King, Color::Light))
            .with_piece(sq("a4"), piece(PieceKind::Pawn, Color::Light))
            .with_piece(sq("a5"), piece(PieceKind::Pawn, Color::Dark))
            .with_piece(sq("f2"), piece(PieceKind::Queen, Color::Dark))
            .with_piece(sq("a8"), piece(PieceKind::King, Color::Dark));

        assert_eq!(is_stalemate(&position, Color::Light), Ok(true));
    }

    #[test]
    fn detectors_report_missing_king() {
        let position = Position::empty()
            .with_piece(sq("e8"), piece(PieceKind::Rook, Color::Dark));
        assert_eq!(
            is_checkmate(&position, Color::Light),
            Err(RulesError::MissingKing {
                color: Color::Light,
                found: 0
            })
        );
        assert!(is_stalemate(&position, Color::Light).is_err());
    }

    #[test]
    fn starting_position_is_ongoing_for_both_sides() {
        let position = Position::starting();
        for color in Color::ALL {
            assert_eq!(game_status(&position, color), Ok(GameStatus::Ongoing));
        }
    }
}
