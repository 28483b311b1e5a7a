use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::types::{Difficulty, Mark};

/// One side of a game. The game loop only ever asks a player for a cell.
pub trait Player {
    fn name(&self) -> &str;
    fn mark(&self) -> Mark;
    fn is_bot(&self) -> bool;
    fn decide_move(&mut self, board: &Board) -> Result<usize, String>;
}

pub struct ComputerPlayer {
    name: String,
    mark: Mark,
    difficulty: Difficulty,
    rng: SessionRng,
}

impl ComputerPlayer {
    pub fn new(name: String, mark: Mark, difficulty: Difficulty, rng: SessionRng) -> Self {
        Self {
            name,
            mark,
            difficulty,
            rng,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn is_bot(&self) -> bool {
        true
    }

    fn decide_move(&mut self, board: &Board) -> Result<usize, String> {
        let input = BotInput::new(*board, self.mark);
        Ok(calculate_move(self.difficulty, &input, &mut self.rng))
    }
}
