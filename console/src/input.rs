use std::fmt;
use common::games::tictactoe::{Board, CELL_COUNT, Difficulty};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellInputError {
    NotANumber,
    OutOfRange(i64),
    Occupied(usize),
}

impl fmt::Display for CellInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellInputError::NotANumber => write!(f, "Please enter a number."),
            CellInputError::OutOfRange(n) => {
                write!(f, "Invalid position {}, choose 1-{}.", n, CELL_COUNT)
            }
            CellInputError::Occupied(n) => write!(f, "Cell {} is already taken, try again.", n),
        }
    }
}

/// Turns the player's 1-based answer into a free 0-based cell index.
pub fn parse_cell(text: &str, board: &Board) -> Result<usize, CellInputError> {
    let number: i64 = text.trim().parse().map_err(|_| CellInputError::NotANumber)?;
    if number < 1 || number > CELL_COUNT as i64 {
        return Err(CellInputError::OutOfRange(number));
    }

    let index = (number - 1) as usize;
    if !board.is_empty_at(index) {
        return Err(CellInputError::Occupied(index + 1));
    }
    Ok(index)
}

pub fn parse_difficulty(text: &str) -> Option<Difficulty> {
    match text.trim().to_lowercase().as_str() {
        "1" | "easy" => Some(Difficulty::Easy),
        "2" | "medium" => Some(Difficulty::Medium),
        "3" | "hard" => Some(Difficulty::Hard),
        _ => None,
    }
}

/// `Some(true)` to play again, `Some(false)` to stop, `None` when unclear.
pub fn parse_play_again(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "y" | "yes" | "0" => Some(true),
        "n" | "no" | "1" => Some(false),
        _ => None,
    }
}
