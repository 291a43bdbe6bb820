//! Action-tree counting for move generator verification and benchmarks.

use std::thread;

use crate::errors::{GotaError, GotaResult};
use crate::game_state::board::Board;
use crate::game_state::types::Player;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    /// Action sequences of exactly `depth` plies.
    pub nodes: usize,
    /// Leaves where the side to move next has no capture.
    pub terminal_positions: usize,
    /// Sequences that ran out of actions before reaching `depth`.
    pub early_losses: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.terminal_positions += rhs.terminal_positions;
        self.early_losses += rhs.early_losses;
    }
}

/// Counts action sequences of length `depth` starting with `to_move`.
pub fn perft(board: &Board, to_move: Player, depth: u8) -> GotaResult<PerftCounts> {
    let mut total = PerftCounts::default();
    perft_recurse(board, to_move, depth, &mut total)?;
    Ok(total)
}

/// Same counts as [`perft`], one thread per root action.
pub fn perft_multi_threaded(board: &Board, to_move: Player, depth: u8) -> GotaResult<PerftCounts> {
    if depth == 0 {
        return perft(board, to_move, 0);
    }

    let root_actions = board.legal_actions(to_move);
    if root_actions.is_empty() {
        return perft(board, to_move, depth);
    }

    let mut handles = Vec::with_capacity(root_actions.len());
    for action in root_actions {
        let mut child = board.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = child
                .apply(&action)
                .and_then(|_| perft_recurse(&child, to_move.opposite(), depth - 1, &mut local));
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .map_err(|_| GotaError::InvalidState("perft worker thread panicked".to_owned()))?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse(
    board: &Board,
    to_move: Player,
    depth: u8,
    counts: &mut PerftCounts,
) -> GotaResult<()> {
    if depth == 0 {
        counts.nodes += 1;
        if board.has_player_lost(to_move) {
            counts.terminal_positions += 1;
        }
        return Ok(());
    }

    let actions = board.legal_actions(to_move);
    if actions.is_empty() {
        counts.early_losses += 1;
        return Ok(());
    }

    for action in actions {
        let mut child = board.clone();
        child.apply(&action)?;
        perft_recurse(&child, to_move.opposite(), depth - 1, counts)?;
    }

    Ok(())
}
