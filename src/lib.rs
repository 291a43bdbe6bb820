//! Crate root module declarations for the gota capture game rules engine.
//!
//! The board and its capture rules live in `game_state` and
//! `move_generation`. `referee` drives two move choosers through the turn
//! loop, and `utils` holds notation and text rendering helpers.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod types;
}

pub mod move_generation {
    pub mod directions;
    pub mod legal_actions;
    pub mod perft;
}

pub mod referee {
    pub mod match_runner;
    pub mod move_chooser;
}

pub mod utils {
    pub mod notation;
    pub mod render_board;
}

pub use errors::{GotaError, GotaResult};
pub use game_state::board::Board;
pub use game_state::types::{Action, Cell, CellId, Coord, Player, Unit, UnitId, MAX_BOARD_SIZE};
