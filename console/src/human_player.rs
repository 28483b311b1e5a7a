use std::cell::RefCell;
use std::io::{BufRead, Write};
use common::games::tictactoe::{Board, CELL_COUNT, Mark, Player};
use crate::input::parse_cell;
use crate::terminal::Terminal;

pub const INPUT_CLOSED: &str = "Input closed";

pub struct HumanPlayer<'a, R: BufRead, W: Write> {
    name: String,
    mark: Mark,
    terminal: &'a RefCell<Terminal<R, W>>,
}

impl<'a, R: BufRead, W: Write> HumanPlayer<'a, R, W> {
    pub fn new(name: String, mark: Mark, terminal: &'a RefCell<Terminal<R, W>>) -> Self {
        Self { name, mark, terminal }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<'_, R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn is_bot(&self) -> bool {
        false
    }

    /// Keeps asking until the answer names a free cell.
    fn decide_move(&mut self, board: &Board) -> Result<usize, String> {
        let mut terminal = self.terminal.borrow_mut();
        let prompt = format!("{}, choose a position (1-{}): ", self.name, CELL_COUNT);

        loop {
            let Some(answer) = terminal.ask(&prompt)? else {
                return Err(INPUT_CLOSED.to_string());
            };

            match parse_cell(&answer, board) {
                Ok(index) => return Ok(index),
                Err(e) => terminal.println(&e.to_string())?,
            }
        }
    }
}
