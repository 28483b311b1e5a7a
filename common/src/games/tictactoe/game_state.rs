use super::board::{Board, CELL_COUNT, get_available_moves};
use super::types::{Mark, Outcome, WinLine};
use super::win_detector::{check_win_with_line, evaluate};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: Outcome,
    last_move: Option<usize>,
    move_count: usize,
}

impl TicTacToeGameState {
    pub fn new(first_mark: Mark) -> Self {
        if first_mark == Mark::Empty {
            panic!("First mark must be X or O");
        }

        Self {
            board: Board::new(),
            current_mark: first_mark,
            status: Outcome::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn available_moves(&self) -> Vec<usize> {
        get_available_moves(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        check_win_with_line(&self.board).map(|(_, line)| line)
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }

        if index >= CELL_COUNT {
            return Err(format!("Position {} is out of bounds", index));
        }

        if !self.board.is_empty_at(index) {
            return Err(format!("Cell {} is already marked", index));
        }

        self.board.set(index, self.current_mark);
        self.last_move = Some(index);
        self.move_count += 1;

        // A win on the last free cell is still a win.
        self.status = evaluate(&self.board);

        if self.status == Outcome::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = self.current_mark.swapped();
    }
}
