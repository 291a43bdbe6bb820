//! Turn loop driving two move choosers over one board.
//!
//! Each turn: the player to move loses if they have no capture; otherwise
//! their chooser picks one of the legal actions, the runner checks the pick
//! and applies it, and play passes to the opponent. Player 0 (white) starts.

use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::errors::{GotaError, GotaResult};
use crate::game_state::board::Board;
use crate::game_state::types::Player;
use crate::referee::move_chooser::MoveChooser;
use crate::utils::notation::action_to_notation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The loser had no capture at the start of their turn.
    Win { winner: Player },
    TurnLimit,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub board_size: usize,
    pub seed: u64,
    pub max_turns: u32,
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            seed: 0,
            max_turns: 1000,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub turns: u32,
    /// Units captured by each player, indexed by `Player::index`.
    pub captures: [u32; 2],
    pub last_action: Option<String>,
    pub total_time_ns: [u128; 2],
    pub info_lines: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl MatchResult {
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            MatchOutcome::Win { winner } => Some(winner),
            MatchOutcome::TurnLimit => None,
        }
    }
}

/// Plays a match on a fresh board built from `config`.
pub fn play_match(
    chooser_white: &mut dyn MoveChooser,
    chooser_black: &mut dyn MoveChooser,
    config: &MatchConfig,
) -> GotaResult<MatchResult> {
    let board = Board::new(config.board_size, config.seed)?;
    play_match_from_board(board, chooser_white, chooser_black, config)
}

/// Plays a match from a caller-provided position, white to move.
pub fn play_match_from_board(
    mut board: Board,
    chooser_white: &mut dyn MoveChooser,
    chooser_black: &mut dyn MoveChooser,
    config: &MatchConfig,
) -> GotaResult<MatchResult> {
    chooser_white.new_game();
    chooser_black.new_game();

    let started_at = Utc::now();
    let mut info_lines = vec![format!(
        "info string match start size {} seed {} white {} black {}",
        board.size(),
        board.seed(),
        chooser_white.name(),
        chooser_black.name()
    )];

    let mut turns = 0u32;
    let mut captures = [0u32; 2];
    let mut total_time_ns = [0u128; 2];
    let mut last_action = None;
    let mut to_move = Player::White;
    let mut legal = Vec::new();

    let outcome = loop {
        if board.has_player_lost(to_move) {
            break MatchOutcome::Win {
                winner: to_move.opposite(),
            };
        }
        if turns >= config.max_turns {
            break MatchOutcome::TurnLimit;
        }

        board.legal_actions_in_place(to_move, &mut legal);
        let chooser: &mut dyn MoveChooser = match to_move {
            Player::White => &mut *chooser_white,
            Player::Black => &mut *chooser_black,
        };

        let clock = Instant::now();
        let pick = chooser
            .choose_action(&board, to_move, &legal)
            .map_err(GotaError::Chooser)?
            .unwrap_or(0);
        total_time_ns[to_move.index()] += clock.elapsed().as_nanos();

        let action = *legal.get(pick).ok_or_else(|| GotaError::IllegalChoice {
            chooser: chooser.name().to_owned(),
            index: pick,
            legal: legal.len(),
        })?;

        let text = action_to_notation(&board, &action)?;
        board.apply(&action)?;
        captures[to_move.index()] += 1;
        turns += 1;

        if config.verbose {
            info_lines.push(format!(
                "info string turn {turns} player {to_move} action {text} legal {}",
                legal.len()
            ));
        }
        last_action = Some(text);
        to_move = to_move.opposite();
    };

    let finished_at = Utc::now();
    info_lines.push(match outcome {
        MatchOutcome::Win { winner } => format!(
            "info string match end winner {winner} turns {turns} elapsed_ms {}",
            (finished_at - started_at).num_milliseconds()
        ),
        MatchOutcome::TurnLimit => format!(
            "info string match end turn_limit turns {turns} elapsed_ms {}",
            (finished_at - started_at).num_milliseconds()
        ),
    });

    Ok(MatchResult {
        outcome,
        final_board: board,
        turns,
        captures,
        last_action,
        total_time_ns,
        info_lines,
        started_at,
        finished_at,
    })
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub turn_limits: u16,
    pub white_wins: u16,
    pub total_turns: u64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        let avg_turns = if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / f64::from(self.games)
        };
        format!(
            "games={} player1_wins={} player2_wins={} turn_limits={} white_wins={} avg_turns={:.2}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.turn_limits,
            self.white_wins,
            avg_turns
        )
    }
}

/// Plays `config.games` matches, swapping colours every game. Game `i` uses
/// seed `base_seed + i` for both the board and the chooser factories.
pub fn play_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> GotaResult<MatchSeriesStats>
where
    F1: Fn(u64) -> Box<dyn MoveChooser>,
    F2: Fn(u64) -> Box<dyn MoveChooser>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for i in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let player1_is_white = i % 2 == 0;
        let game_config = MatchConfig {
            seed,
            ..config.per_game.clone()
        };

        let mut player1 = player1_factory(seed);
        let mut player2 = player2_factory(seed);
        let result = if player1_is_white {
            play_match(player1.as_mut(), player2.as_mut(), &game_config)?
        } else {
            play_match(player2.as_mut(), player1.as_mut(), &game_config)?
        };

        if config.verbose {
            for line in &result.info_lines {
                println!("{line}");
            }
        }

        stats.total_turns += u64::from(result.turns);
        match result.winner() {
            Some(winner) => {
                if winner == Player::White {
                    stats.white_wins += 1;
                }
                if (winner == Player::White) == player1_is_white {
                    stats.player1_wins += 1;
                } else {
                    stats.player2_wins += 1;
                }
            }
            None => stats.turn_limits += 1,
        }
    }

    Ok(stats)
}
