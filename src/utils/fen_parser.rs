//! FEN-to-Position parser.
//!
//! Reads the board field and, when present, the side-to-move field.
//! Castling, en-passant and clock fields are accepted and ignored because
//! the rules engine does not model them.

use crate::errors::{RulesError, RulesResult};
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

pub fn parse_fen(fen: &str) -> RulesResult<(Position, Color)> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| RulesError::InvalidFen("missing board layout".to_owned()))?;
    let side = match parts.next() {
        Some(side_part) => parse_side_to_move(side_part)?,
        None => Color::Light,
    };

    let position = parse_board(board_part)?;
    Ok((position, side))
}

fn parse_board(board_part: &str) -> RulesResult<Position> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(RulesError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut position = Position::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(RulesError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(RulesError::InvalidFen(format!(
                        "rank {} has too many files",
                        board_rank + 1
                    )));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                RulesError::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;

            if file >= 8 {
                return Err(RulesError::InvalidFen(format!(
                    "rank {} has too many files",
                    board_rank + 1
                )));
            }

            position.put(Square::new(file, board_rank)?, piece);
            file += 1;
        }

        if file != 8 {
            return Err(RulesError::InvalidFen(format!(
                "rank {} does not sum to 8 files",
                board_rank + 1
            )));
        }
    }

    Ok(position)
}

fn parse_side_to_move(side_part: &str) -> RulesResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(RulesError::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}
