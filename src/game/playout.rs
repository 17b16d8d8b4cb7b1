//! Seeded random playouts.
//!
//! Plays uniformly random legal moves from a position until the game ends
//! or a ply limit is hit. Same seed, same game. Useful for smoke-testing
//! the rules on positions no hand-written test reaches.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::errors::RulesResult;
use crate::game::game_record::Game;
use crate::game_state::chess_types::{Color, Move};
use crate::game_state::position::Position;
use crate::move_generation::move_generator::MoveGenerator;
use crate::move_generation::terminal_state::GameStatus;

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub seed: u64,
    pub max_plies: u16,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_plies: 200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    LightWinCheckmate,
    DarkWinCheckmate,
    DrawStalemate,
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub final_game: Game,
    pub moves: Vec<Move>,
}

/// Play random legal moves chosen from `generator` on `position`.
pub fn random_playout<G: MoveGenerator>(
    generator: &G,
    position: Position,
    turn: Color,
    config: &PlayoutConfig,
) -> RulesResult<PlayoutResult> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut game = Game::from_position(position, turn)?;

    for _ in 0..config.max_plies {
        if game.status().is_terminal() {
            break;
        }

        let candidates = generator.generate_legal_moves(game.position(), game.turn())?;
        let Some(&chosen) = candidates.as_slice().choose(&mut rng) else {
            break;
        };
        game.apply_move(chosen.from, chosen.to)?;
    }

    let outcome = match (game.status(), game.turn()) {
        (GameStatus::Checkmate, Color::Light) => PlayoutOutcome::DarkWinCheckmate,
        (GameStatus::Checkmate, Color::Dark) => PlayoutOutcome::LightWinCheckmate,
        (GameStatus::Stalemate, _) => PlayoutOutcome::DrawStalemate,
        _ => PlayoutOutcome::MaxPlies,
    };
    debug!(seed = config.seed, plies = game.history().len(), ?outcome, "playout finished");

    Ok(PlayoutResult {
        outcome,
        moves: game.history().to_vec(),
        final_game: game,
    })
}
