//! Perft: exhaustive legal-move tree counting.
//!
//! Used to validate the generator against known node counts. Without
//! castling, en passant and promotion the standard tables still hold for
//! the starting position up to depth 4, since none of those moves occur
//! that early.

use std::sync::Arc;
use std::thread;

use crate::errors::{RulesError, RulesResult};
use crate::game_state::chess_types::{Color, Move};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::simulate;
use crate::move_generation::move_generator::MoveGenerator;
use crate::move_generation::terminal_state::{game_status, GameStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    position: &Position,
    turn: Color,
    depth: u8,
) -> RulesResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(position, turn)? {
        perft_recurse(generator, position, mv, turn, depth, 1, &mut total)?;
    }

    Ok(total)
}

/// Same counts as [`perft`], one worker thread per root move.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    position: &Position,
    turn: Color,
    depth: u8,
) -> RulesResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(position, turn)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let root = position.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(generator_ref.as_ref(), &root, mv, turn, depth, 1, &mut local);
            result.map(|_| local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| RulesError::WorkerPanicked)??;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    parent: &Position,
    mv: Move,
    mover: Color,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> RulesResult<()> {
    let next = simulate(parent, mv.from, mv.to)?;

    if current_depth == search_depth {
        counts.nodes += 1;

        if parent.piece_at(mv.to).is_some() {
            counts.captures += 1;
        }

        match game_status(&next, mover.opposite())? {
            GameStatus::Check => counts.checks += 1,
            GameStatus::Checkmate => {
                counts.checks += 1;
                counts.checkmates += 1;
            }
            GameStatus::Ongoing | GameStatus::Stalemate => {}
        }

        return Ok(());
    }

    let replier = mover.opposite();
    for child in generator.generate_legal_moves(&next, replier)? {
        perft_recurse(generator, &next, child, replier, search_depth, current_depth + 1, counts)?;
    }

    Ok(())
}
