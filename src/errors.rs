//! Errors used throughout the rules engine.
//!
//! `RulesError` is the single error type returned by every fallible
//! operation. Geometry and attack queries are infallible; errors only come
//! from structurally invalid input or from moves the rules do not allow.
//!
//! - `InvalidSquare`, `InvalidFen`: bad caller input, report and do not retry.
//! - `MissingKing`: the board is malformed upstream. Treat as fatal.
//! - `IllegalSelection`, `WrongTurn`, `IllegalMove`, `GameOver`: a move was
//!   refused. UIs usually ignore these as stale clicks; relays reject the
//!   peer's move.

use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::terminal_state::GameStatus;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// A coordinate outside the 64-square board.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// A position holds zero or more than one king of `color`.
    #[error("expected exactly one {color} king, found {found}")]
    MissingKing { color: Color, found: u32 },

    /// The selected or origin square holds no piece.
    #[error("no piece on {0}")]
    IllegalSelection(Square),

    /// The piece on the origin square belongs to the side not on move.
    #[error("it is {expected}'s turn, not {found}'s")]
    WrongTurn { expected: Color, found: Color },

    /// The destination is not among the piece's legal moves.
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },

    /// A move was submitted after the game reached a terminal status.
    #[error("game is already over ({0:?})")]
    GameOver(GameStatus),

    /// Malformed FEN board text.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A parallel perft worker died before reporting its counts.
    #[error("perft worker thread panicked")]
    WorkerPanicked,
}

pub type RulesResult<T> = Result<T, RulesError>;
