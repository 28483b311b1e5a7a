use crate::games::SessionRng;
use crate::log;
use super::game_state::TicTacToeGameState;
use super::player::Player;
use super::types::{Mark, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Computer,
}

/// Dice thrown before each game to decide who opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstTurn {
    pub human_roll: u32,
    pub computer_roll: u32,
}

impl FirstTurn {
    pub fn roll(rng: &mut SessionRng, dice_sides: u32) -> Self {
        Self {
            human_roll: rng.roll_die(dice_sides),
            computer_roll: rng.roll_die(dice_sides),
        }
    }

    /// Ties go to the human.
    pub fn starter(&self) -> Seat {
        if self.human_roll >= self.computer_roll {
            Seat::Human
        } else {
            Seat::Computer
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl SessionStats {
    pub fn record(&mut self, outcome: Outcome, human_mark: Mark) {
        match outcome {
            Outcome::Win(mark) if mark == human_mark => self.human_wins += 1,
            Outcome::Win(_) => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

/// Hooks the game driver calls while a game is running.
pub trait GameObserver {
    fn on_turn_start(&mut self, _state: &TicTacToeGameState, _player: &dyn Player) {}
    fn on_move(&mut self, _state: &TicTacToeGameState, _player: &dyn Player, _index: usize) {}
}

impl GameObserver for () {}

/// Runs one game to completion, `first` opening.
pub fn play_game<'a>(
    first: &'a mut dyn Player,
    second: &'a mut dyn Player,
    observer: &mut dyn GameObserver,
) -> Result<Outcome, String> {
    if first.mark() == Mark::Empty || first.mark() == second.mark() {
        return Err(format!(
            "Players need distinct marks, got {:?} and {:?}",
            first.mark(),
            second.mark()
        ));
    }

    let mut state = TicTacToeGameState::new(first.mark());
    let mut players = [first, second];
    let mut turn = 0;

    while !state.status().is_over() {
        let player = &mut *players[turn % 2];
        observer.on_turn_start(&state, player);

        let index = player.decide_move(state.board())?;
        state
            .place_mark(index)
            .map_err(|e| format!("{} made an illegal move: {}", player.name(), e))?;

        observer.on_move(&state, player, index);
        turn += 1;
    }

    log!("Game over after {} moves: {:?}", state.move_count(), state.status());
    Ok(state.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::Board;
    use crate::games::tictactoe::player::ComputerPlayer;
    use crate::games::tictactoe::types::Difficulty;

    struct ScriptedPlayer {
        mark: Mark,
        moves: Vec<usize>,
    }

    impl Player for ScriptedPlayer {
        fn name(&self) -> &str {
            "Scripted"
        }

        fn mark(&self) -> Mark {
            self.mark
        }

        fn is_bot(&self) -> bool {
            false
        }

        fn decide_move(&mut self, _board: &Board) -> Result<usize, String> {
            if self.moves.is_empty() {
                return Err("Script ran out of moves".to_string());
            }
            Ok(self.moves.remove(0))
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        turns: usize,
        moves: Vec<usize>,
    }

    impl GameObserver for RecordingObserver {
        fn on_turn_start(&mut self, _state: &TicTacToeGameState, _player: &dyn Player) {
            self.turns += 1;
        }

        fn on_move(&mut self, _state: &TicTacToeGameState, _player: &dyn Player, index: usize) {
            self.moves.push(index);
        }
    }

    fn hard(mark: Mark) -> ComputerPlayer {
        ComputerPlayer::new("Hard".to_string(), mark, Difficulty::Hard, SessionRng::new(0))
    }

    #[test]
    fn test_tied_dice_favor_human() {
        let tie = FirstTurn { human_roll: 3, computer_roll: 3 };
        assert_eq!(tie.starter(), Seat::Human);
        let lost = FirstTurn { human_roll: 2, computer_roll: 5 };
        assert_eq!(lost.starter(), Seat::Computer);
    }

    #[test]
    fn test_rolls_stay_within_die() {
        let mut rng = SessionRng::new(11);
        for _ in 0..100 {
            let turn = FirstTurn::roll(&mut rng, 6);
            assert!((1..=6).contains(&turn.human_roll));
            assert!((1..=6).contains(&turn.computer_roll));
        }
    }

    #[test]
    fn test_stats_count_each_outcome() {
        let mut stats = SessionStats::default();
        stats.record(Outcome::Win(Mark::X), Mark::X);
        stats.record(Outcome::Win(Mark::O), Mark::X);
        stats.record(Outcome::Win(Mark::O), Mark::X);
        stats.record(Outcome::Draw, Mark::X);
        stats.record(Outcome::InProgress, Mark::X);
        assert_eq!(
            stats,
            SessionStats {
                human_wins: 1,
                computer_wins: 2,
                draws: 1
            }
        );
        assert_eq!(stats.games_played(), 4);
    }

    #[test]
    fn test_hard_against_hard_game_is_a_draw() {
        let mut first = hard(Mark::X);
        let mut second = hard(Mark::O);
        let outcome = play_game(&mut first, &mut second, &mut ()).unwrap();
        assert_eq!(outcome, Outcome::Draw);
    }

    #[test]
    fn test_hard_punishes_careless_opener() {
        let mut human = ScriptedPlayer { mark: Mark::X, moves: vec![0, 1, 5, 6, 8] };
        let mut computer = hard(Mark::O);
        let mut observer = RecordingObserver::default();
        let outcome = play_game(&mut human, &mut computer, &mut observer).unwrap();
        assert_eq!(outcome, Outcome::Win(Mark::O));
        assert_eq!(observer.turns, observer.moves.len());
    }

    #[test]
    fn test_illegal_move_is_an_error() {
        let mut human = ScriptedPlayer { mark: Mark::X, moves: vec![4, 4] };
        let mut computer = hard(Mark::O);
        let result = play_game(&mut human, &mut computer, &mut ());
        let message = result.unwrap_err();
        assert!(message.contains("illegal move"), "{}", message);
    }

    #[test]
    fn test_same_marks_are_rejected() {
        let mut first = hard(Mark::X);
        let mut second = hard(Mark::X);
        assert!(play_game(&mut first, &mut second, &mut ()).is_err());
    }
}
