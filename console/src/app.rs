use std::cell::RefCell;
use std::io::{BufRead, Write};
use common::config::GameConfig;
use common::games::SessionRng;
use common::games::tictactoe::{
    Board, ComputerPlayer, Difficulty, FirstTurn, GameObserver, Mark, Outcome, Player, Seat,
    SessionStats, TicTacToeGameState, WinLine, play_game,
};
use common::log;
use crate::human_player::HumanPlayer;
use crate::input::{parse_difficulty, parse_play_again};
use crate::render::{BoardRenderer, format_stats};
use crate::terminal::Terminal;

pub const HUMAN_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;

struct ConsoleObserver<'a, R: BufRead, W: Write> {
    terminal: &'a RefCell<Terminal<R, W>>,
    renderer: &'a BoardRenderer,
    last_board: Board,
    winning_line: Option<WinLine>,
    error: Option<String>,
}

impl<R: BufRead, W: Write> ConsoleObserver<'_, R, W> {
    fn print(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.terminal.borrow_mut().println(text) {
            self.error = Some(e);
        }
    }
}

impl<R: BufRead, W: Write> GameObserver for ConsoleObserver<'_, R, W> {
    fn on_turn_start(&mut self, state: &TicTacToeGameState, _player: &dyn Player) {
        let board = self.renderer.render(state.board(), None);
        self.print(&board);
    }

    fn on_move(&mut self, state: &TicTacToeGameState, player: &dyn Player, index: usize) {
        self.last_board = *state.board();
        self.winning_line = state.winning_line();
        if player.is_bot() {
            self.print(&format!("{} plays {}", player.name(), index + 1));
        }
    }
}

pub struct ConsoleApp<'a, R: BufRead, W: Write> {
    terminal: &'a RefCell<Terminal<R, W>>,
    config: GameConfig,
    rng: SessionRng,
    stats: SessionStats,
}

impl<'a, R: BufRead, W: Write> ConsoleApp<'a, R, W> {
    pub fn new(terminal: &'a RefCell<Terminal<R, W>>, config: GameConfig, rng: SessionRng) -> Self {
        Self {
            terminal,
            config,
            rng,
            stats: SessionStats::default(),
        }
    }

    fn println(&self, text: &str) -> Result<(), String> {
        self.terminal.borrow_mut().println(text)
    }

    fn ask(&self, prompt: &str) -> Result<Option<String>, String> {
        self.terminal.borrow_mut().ask(prompt)
    }

    fn select_difficulty(&self) -> Result<Option<Difficulty>, String> {
        if let Some(difficulty) = self.config.difficulty {
            return Ok(Some(difficulty));
        }

        self.println("Choose the computer's difficulty:")?;
        for (number, difficulty) in Difficulty::ALL.iter().enumerate() {
            self.println(&format!("{} - {}", number + 1, difficulty))?;
        }

        loop {
            let Some(answer) = self.ask("Your choice (1, 2, 3): ")? else {
                return Ok(None);
            };
            match parse_difficulty(&answer) {
                Some(difficulty) => return Ok(Some(difficulty)),
                None => self.println("Invalid option, try again.")?,
            }
        }
    }

    fn ask_play_again(&self) -> Result<bool, String> {
        loop {
            let Some(answer) = self.ask("Play again? (y/n): ")? else {
                return Ok(false);
            };
            match parse_play_again(&answer) {
                Some(again) => return Ok(again),
                None => self.println("Please answer y or n.")?,
            }
        }
    }

    fn announce_result(&self, outcome: Outcome) -> Result<(), String> {
        let message = match outcome {
            Outcome::Win(mark) if mark == HUMAN_MARK => format!("{} wins!", self.config.human_name),
            Outcome::Win(_) => format!("{} wins!", self.config.computer_name),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::InProgress => return Ok(()),
        };
        self.println(&message)
    }

    /// Plays games until the player declines another one or input runs out.
    pub fn run(mut self) -> Result<SessionStats, String> {
        self.println("Welcome to Tic-Tac-Toe!")?;

        let Some(difficulty) = self.select_difficulty()? else {
            return Ok(self.stats);
        };
        log!("Session seed {}, difficulty {}", self.rng.seed(), difficulty);

        let renderer = BoardRenderer::new(HUMAN_MARK, self.config.use_colors);
        let mut human = HumanPlayer::new(self.config.human_name.clone(), HUMAN_MARK, self.terminal);
        let mut computer = ComputerPlayer::new(
            self.config.computer_name.clone(),
            COMPUTER_MARK,
            difficulty,
            self.rng.fork(),
        );

        loop {
            let first_turn = FirstTurn::roll(&mut self.rng, self.config.dice_sides);
            let starter = first_turn.starter();
            self.println(&format!(
                "Dice roll: {} {}, {} {}",
                self.config.human_name,
                first_turn.human_roll,
                self.config.computer_name,
                first_turn.computer_roll
            ))?;

            let mut observer = ConsoleObserver {
                terminal: self.terminal,
                renderer: &renderer,
                last_board: Board::new(),
                winning_line: None,
                error: None,
            };

            let result = match starter {
                Seat::Human => {
                    self.println(&format!("{} starts", self.config.human_name))?;
                    play_game(&mut human, &mut computer, &mut observer)
                }
                Seat::Computer => {
                    self.println(&format!("{} starts", self.config.computer_name))?;
                    play_game(&mut computer, &mut human, &mut observer)
                }
            };

            if let Some(e) = observer.error {
                return Err(e);
            }

            let outcome = match result {
                Ok(outcome) => outcome,
                Err(_) if self.terminal.borrow().is_closed() => {
                    log!("Input closed mid-game, ending session");
                    self.println("Goodbye!")?;
                    return Ok(self.stats);
                }
                Err(e) => return Err(e),
            };

            self.stats.record(outcome, HUMAN_MARK);

            self.println(&renderer.render(&observer.last_board, observer.winning_line))?;
            self.announce_result(outcome)?;
            self.println(&format_stats(&self.stats, &self.config.human_name, &self.config.computer_name))?;

            if !self.ask_play_again()? {
                break;
            }
        }

        self.println("Thanks for playing!")?;
        Ok(self.stats)
    }
}
