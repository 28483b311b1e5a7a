use std::fmt;
use std::str::FromStr;
use super::types::Mark;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A 3x3 grid stored row-major: index `row * 3 + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// Writes `mark` into `index` without any legality check. Callers that
    /// need rules go through `TicTacToeGameState::place_mark`.
    pub fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    /// Copy of the board with one extra mark; the original is untouched.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = mark;
        next
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn swapped(&self) -> Board {
        let mut cells = self.cells;
        for cell in cells.iter_mut() {
            *cell = cell.swapped();
        }
        Board { cells }
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    WrongLength { found: usize },
    UnknownSymbol { symbol: char, index: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::WrongLength { found } => {
                write!(f, "Board needs {} cells, got {}", CELL_COUNT, found)
            }
            BoardError::UnknownSymbol { symbol, index } => {
                write!(f, "Unknown symbol '{}' at cell {}", symbol, index)
            }
        }
    }
}

impl std::error::Error for BoardError {}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine cell symbols: `X`/`x`, `O`/`o`, and any of ` ._-` for
    /// an empty cell. Line breaks and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !matches!(c, '\n' | '\r' | '|')).collect();
        if symbols.len() != CELL_COUNT {
            return Err(BoardError::WrongLength { found: symbols.len() });
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (index, symbol) in symbols.into_iter().enumerate() {
            cells[index] = match symbol {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                ' ' | '.' | '_' | '-' => Mark::Empty,
                other => return Err(BoardError::UnknownSymbol { symbol: other, index }),
            };
        }
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                write!(f, "|")?;
            }
            for cell in chunk {
                match cell {
                    Mark::Empty => write!(f, ".")?,
                    mark => write!(f, "{}", mark)?,
                }
            }
        }
        Ok(())
    }
}
