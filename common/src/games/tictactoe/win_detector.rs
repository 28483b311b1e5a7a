use super::board::Board;
use super::types::{Mark, Outcome, WinLine};

/// Rows, then columns, then the two diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(board: &Board) -> Option<(Mark, WinLine)> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && cells[b] == mark && cells[c] == mark {
            Some((mark, line))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_win(board) {
        return Outcome::Win(mark);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
