//! Algebraic cell and action notation.
//!
//! Cells are written as a file letter and a 1-based rank (`(0, 0)` is `a1`).
//! An action is the origin label followed by the target label, e.g. `b1a1`.

use crate::errors::{GotaError, GotaResult};
use crate::game_state::board::Board;
use crate::game_state::types::{Action, Coord, Player, MAX_BOARD_SIZE};

/// Label for a coordinate, for example `(2, 3)` becomes `c4`.
pub fn cell_label(coord: Coord) -> String {
    let file = if coord.x < MAX_BOARD_SIZE {
        char::from(b'a' + coord.x as u8)
    } else {
        '?'
    };
    format!("{file}{}", coord.y + 1)
}

/// Parses a label such as `c4` for a board of edge `size`.
pub fn parse_cell_label(label: &str, size: usize) -> GotaResult<Coord> {
    let invalid = || GotaError::InvalidNotation(label.to_owned());

    let mut chars = label.chars();
    let file = chars.next().ok_or_else(invalid)?;
    if !file.is_ascii_lowercase() {
        return Err(invalid());
    }
    let rank_text = chars.as_str();
    if rank_text.is_empty() || !rank_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let rank: usize = rank_text.parse().map_err(|_| invalid())?;

    let x = (file as u8 - b'a') as usize;
    if rank == 0 || x >= size || rank > size {
        return Err(invalid());
    }
    Ok(Coord::new(x, rank - 1))
}

/// Splits `a1b1` / `a10b10` style text into origin and target labels.
fn split_action(text: &str) -> Option<(&str, &str)> {
    let bytes = text.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_lowercase() {
        return None;
    }
    let second_file = bytes
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, b)| b.is_ascii_lowercase())
        .map(|(i, _)| i)?;
    Some((&text[..second_file], &text[second_file..]))
}

/// Notation for an action, origin then target.
pub fn action_to_notation(board: &Board, action: &Action) -> GotaResult<String> {
    let from = board
        .cell(action.from)
        .ok_or(GotaError::UnknownCell(action.from))?;
    let target = board
        .cell(action.target)
        .ok_or(GotaError::UnknownCell(action.target))?;
    Ok(format!("{}{}", from.label(), target.label()))
}

/// Resolves action text against the legal actions of `player`.
pub fn parse_action(board: &Board, player: Player, text: &str) -> GotaResult<Action> {
    let invalid = || GotaError::InvalidNotation(text.to_owned());
    let (from_text, target_text) = split_action(text.trim()).ok_or_else(invalid)?;
    let from = parse_cell_label(from_text, board.size())?;
    let target = parse_cell_label(target_text, board.size())?;

    let from_id = board.cell_id(from.x, from.y).ok_or_else(invalid)?;
    let target_id = board.cell_id(target.x, target.y).ok_or_else(invalid)?;

    board
        .legal_actions(player)
        .into_iter()
        .find(|a| a.from == from_id && a.target == target_id)
        .ok_or_else(|| GotaError::NoLegalAction {
            player,
            action: text.trim().to_owned(),
        })
}
