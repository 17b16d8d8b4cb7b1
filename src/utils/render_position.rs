//! Terminal-oriented Unicode board renderer.
//!
//! Human-readable board view for debugging, tests and diagnostics. Light
//! is at the bottom.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::game_state::square_set::SquareSet;

/// Render the board to a Unicode string for terminal output.
pub fn render_position(position: &Position) -> String {
    render_with_marks(position, SquareSet::EMPTY)
}

/// Like [`render_position`], with empty squares in `marks` drawn as `×`.
/// Handy for eyeballing a destination set.
pub fn render_with_marks(position: &Position, marks: SquareSet) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let square = Square::new(file, rank).ok();
            let piece = square.and_then(|sq| position.piece_at(sq));
            let marked = square.is_some_and(|sq| marks.contains(sq));

            match (piece, marked) {
                (Some(piece), _) => out.push(piece_to_unicode(piece)),
                (None, true) => out.push('×'),
                (None, false) => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
