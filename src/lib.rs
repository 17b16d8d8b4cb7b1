//! Crate root module declarations for the duel chess rules engine.
//!
//! The engine is a set of pure functions over a `Position` and a side to
//! move: piece geometry, attack queries, king-safety filtering, legal move
//! generation and checkmate/stalemate detection. `game` wraps them into a
//! move-by-move game record for the relay and UI layers; `utils` holds the
//! notation helpers used by tests and diagnostics.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
    pub mod square_set;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod terminal_state;
}

pub mod game {
    pub mod game_record;
    pub mod playout;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_position;
}

pub use errors::{RulesError, RulesResult};
pub use game::game_record::Game;
pub use game_state::chess_types::{Color, Move, Piece, PieceKind, Square};
pub use game_state::position::Position;
pub use game_state::square_set::SquareSet;
pub use move_generation::legal_move_apply::simulate;
pub use move_generation::legal_move_checks::{is_in_check, is_square_attacked};
pub use move_generation::legal_move_generator::{
    legal_moves, would_expose_king, LegalMoves, Selection,
};
pub use move_generation::terminal_state::{game_status, is_checkmate, is_stalemate, GameStatus};
pub use moves::piece_moves::moves_for;
