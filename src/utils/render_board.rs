//! Text views of a board for terminals, tests and referee input.

use crate::game_state::board::Board;

/// One string per row from the top (`y = height - 1`) down, `w`/`b`/`.` per cell.
pub fn board_rows(board: &Board) -> Vec<String> {
    (0..board.height())
        .rev()
        .map(|y| {
            (0..board.width())
                .map(|x| symbol_at(board, x, y))
                .collect::<String>()
        })
        .collect()
}

/// Grid with file letters above and below and rank numbers on both sides.
pub fn render_board(board: &Board) -> String {
    let width = board.width();
    let rank_width = board.height().to_string().len();

    let mut files = " ".repeat(rank_width + 1);
    for x in 0..width {
        files.push(char::from(b'a' + x as u8));
        if x + 1 < width {
            files.push(' ');
        }
    }

    let mut out = String::new();
    out.push_str(&files);
    out.push('\n');

    for y in (0..board.height()).rev() {
        out.push_str(&format!("{:>rank_width$} ", y + 1));
        for x in 0..width {
            out.push(symbol_at(board, x, y));
            if x + 1 < width {
                out.push(' ');
            }
        }
        out.push_str(&format!(" {}\n", y + 1));
    }

    out.push_str(&files);
    out
}

fn symbol_at(board: &Board, x: usize, y: usize) -> char {
    board
        .unit_at(x, y)
        .and_then(|id| board.unit(id))
        .map(|unit| unit.owner().symbol())
        .unwrap_or('.')
}
