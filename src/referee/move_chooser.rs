//! Move chooser abstraction used by the match runner.
//!
//! A chooser stands in for whatever picks a move on a player's turn (a
//! human, a bot process, a network peer). It only ever sees the legal
//! actions the board produced and answers with an index into that list.

use std::collections::VecDeque;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::game_state::board::Board;
use crate::game_state::types::{Action, Player};
use crate::utils::notation::parse_action;

pub trait MoveChooser: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Index into `legal` of the action to play. `Ok(None)` lets the runner
    /// play the first legal action.
    fn choose_action(
        &mut self,
        board: &Board,
        player: Player,
        legal: &[Action],
    ) -> Result<Option<usize>, String>;
}

/// Always plays the first legal action.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalChooser;

impl MoveChooser for FirstLegalChooser {
    fn name(&self) -> &str {
        "first-legal"
    }

    fn choose_action(
        &mut self,
        _board: &Board,
        _player: Player,
        legal: &[Action],
    ) -> Result<Option<usize>, String> {
        Ok(if legal.is_empty() { None } else { Some(0) })
    }
}

/// Uniform pick over the legal actions from a seeded generator.
pub struct RandomChooser {
    seed: u64,
    rng: StdRng,
}

impl RandomChooser {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveChooser for RandomChooser {
    fn name(&self) -> &str {
        "random"
    }

    fn new_game(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    fn choose_action(
        &mut self,
        _board: &Board,
        _player: Player,
        legal: &[Action],
    ) -> Result<Option<usize>, String> {
        if legal.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.rng.random_range(0..legal.len())))
    }
}

/// Replays moves written in `a1b1` notation, one per turn.
#[derive(Debug, Clone, Default)]
pub struct NotationChooser {
    moves: VecDeque<String>,
}

impl NotationChooser {
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            moves: moves.into_iter().map(Into::into).collect(),
        }
    }
}

impl MoveChooser for NotationChooser {
    fn name(&self) -> &str {
        "notation"
    }

    fn choose_action(
        &mut self,
        board: &Board,
        player: Player,
        legal: &[Action],
    ) -> Result<Option<usize>, String> {
        let text = self
            .moves
            .pop_front()
            .ok_or_else(|| "no scripted move left".to_owned())?;
        let action = parse_action(board, player, &text).map_err(|e| e.to_string())?;
        legal
            .iter()
            .position(|a| *a == action)
            .map(Some)
            .ok_or_else(|| format!("{text} is not in the offered action list"))
    }
}
