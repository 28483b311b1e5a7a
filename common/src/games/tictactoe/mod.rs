mod board;
mod bot_controller;
mod game_state;
mod player;
mod session;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, BoardError, CELL_COUNT, get_available_moves};
pub use bot_controller::{
    BotInput, DRAW_SCORE, LOSS_SCORE, WIN_SCORE, calculate_blocking_move, calculate_minimax_move,
    calculate_move, find_winning_move, minimax,
};
pub use game_state::TicTacToeGameState;
pub use player::{ComputerPlayer, Player};
pub use session::{FirstTurn, GameObserver, Seat, SessionStats, play_game};
pub use types::{Difficulty, Mark, Outcome, WinLine};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line, evaluate};
