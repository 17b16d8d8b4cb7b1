//! Canonical chess-rule constants.
//!
//! Standard starting layout, plus the pawn home ranks the movement rules
//! use for the two-square advance.

/// Standard chess starting position, board and side-to-move FEN fields.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

/// Zero-based rank light pawns start on (rank 2).
pub const LIGHT_PAWN_START_RANK: u8 = 1;

/// Zero-based rank dark pawns start on (rank 7).
pub const DARK_PAWN_START_RANK: u8 = 6;
