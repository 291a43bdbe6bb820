use crate::game_state::types::{CellId, Player, UnitId};

pub type GotaResult<T> = Result<T, GotaError>;

/// Every failure the rules engine can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GotaError {
    /// Board size outside `1..=MAX_BOARD_SIZE`.
    #[error("invalid board size {size}: expected 1..={max}")]
    InvalidBoardSize { size: usize, max: usize },

    #[error("unknown unit id {0:?}")]
    UnknownUnit(UnitId),

    #[error("unknown cell id {0:?}")]
    UnknownCell(CellId),

    /// The action is not capture-valid against the current board.
    #[error("illegal action {unit:?} -> {target:?}: {reason}")]
    IllegalAction {
        unit: UnitId,
        target: CellId,
        reason: &'static str,
    },

    #[error("invalid notation {0:?}")]
    InvalidNotation(String),

    #[error("{action} is not a legal action for player {player}")]
    NoLegalAction { player: Player, action: String },

    /// A move chooser picked an index outside the legal action list.
    #[error("{chooser} chose action index {index} but only {legal} actions were legal")]
    IllegalChoice {
        chooser: String,
        index: usize,
        legal: usize,
    },

    #[error("move chooser failed: {0}")]
    Chooser(String),

    #[error("invalid state: {0}")]
    InvalidState(String),
}
