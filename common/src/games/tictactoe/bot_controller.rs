use crate::games::SessionRng;
use crate::log_verbose;
use super::board::{Board, get_available_moves};
use super::types::{Difficulty, Mark};
use super::win_detector::check_win;

pub const WIN_SCORE: i32 = 1;
pub const DRAW_SCORE: i32 = 0;
pub const LOSS_SCORE: i32 = -1;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, current_mark: Mark) -> Self {
        Self { board, current_mark }
    }
}

/// Picks the cell the bot plays next.
///
/// # Panics
///
/// Panics when the board has no empty cell or when `current_mark` is
/// `Mark::Empty`. Both mean the game loop kept asking for moves after the
/// game was over.
pub fn calculate_move(difficulty: Difficulty, input: &BotInput, rng: &mut SessionRng) -> usize {
    if input.current_mark == Mark::Empty {
        panic!("Bot must play X or O, got an empty mark");
    }
    if input.board.is_full() {
        panic!("Bot asked to move on a full board: {}", input.board);
    }

    let index = match difficulty {
        Difficulty::Easy => calculate_random_move(&input.board, rng),
        Difficulty::Medium => calculate_blocking_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
    };

    log_verbose!("{} bot as {} plays {} on {}", difficulty, input.current_mark, index, input.board);
    index
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> usize {
    let available_moves = get_available_moves(board);
    match rng.choose(&available_moves) {
        Some(index) => index,
        None => panic!("Bot asked to move on a full board: {}", board),
    }
}

/// One ply of lookahead: win if possible, otherwise block, otherwise random.
pub fn calculate_blocking_move(input: &BotInput, rng: &mut SessionRng) -> usize {
    let bot_mark = input.current_mark;
    let available_moves = get_available_moves(&input.board);

    if let Some(index) = find_winning_move(&input.board, bot_mark, &available_moves) {
        return index;
    }

    if let Some(opponent_mark) = bot_mark.opponent()
        && let Some(index) = find_winning_move(&input.board, opponent_mark, &available_moves)
    {
        return index;
    }

    calculate_random_move(&input.board, rng)
}

/// First cell in `moves` that completes a line for `mark`.
pub fn find_winning_move(board: &Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    moves
        .iter()
        .copied()
        .find(|&index| check_win(&board.with_mark(index, mark)) == Some(mark))
}

/// Full-depth search over every remaining move. Equal scores keep the lowest
/// index.
///
/// # Panics
///
/// Panics when the board has no empty cell.
pub fn calculate_minimax_move(input: &BotInput) -> usize {
    let bot_mark = input.current_mark;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in get_available_moves(&input.board) {
        let score = minimax(input.board.with_mark(index, bot_mark), false, bot_mark);
        log_verbose!("minimax: cell {} scores {}", index, score);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    match best_move {
        Some(index) => index,
        None => panic!("Minimax asked to move on a full board: {}", input.board),
    }
}

/// Game value of `board` for `bot_mark`: `WIN_SCORE` if the bot wins with
/// best play from both sides, `LOSS_SCORE` if it loses, `DRAW_SCORE` otherwise.
/// `is_maximizing` says whether the bot is the side to move.
///
/// The board is taken by value; each branch works on its own copy.
pub fn minimax(board: Board, is_maximizing: bool, bot_mark: Mark) -> i32 {
    let opponent_mark = bot_mark.swapped();

    match check_win(&board) {
        Some(winner) if winner == bot_mark => return WIN_SCORE,
        Some(_) => return LOSS_SCORE,
        None => {}
    }

    let moves = get_available_moves(&board);
    if moves.is_empty() {
        return DRAW_SCORE;
    }

    if is_maximizing {
        moves
            .into_iter()
            .map(|index| minimax(board.with_mark(index, bot_mark), false, bot_mark))
            .max()
            .unwrap_or(DRAW_SCORE)
    } else {
        moves
            .into_iter()
            .map(|index| minimax(board.with_mark(index, opponent_mark), true, bot_mark))
            .min()
            .unwrap_or(DRAW_SCORE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use crate::games::tictactoe::types::Outcome;
    use crate::games::tictactoe::win_detector::evaluate;

    // Computer plays O, the human X: "C" -> O, "H" -> X in the written scenarios.
    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn bot_move(difficulty: Difficulty, board: Board, mark: Mark) -> usize {
        let mut rng = SessionRng::new(42);
        calculate_move(difficulty, &BotInput::new(board, mark), &mut rng)
    }

    #[test]
    fn test_hard_takes_own_win_over_block() {
        let position = board("OO.XX....");
        assert_eq!(bot_move(Difficulty::Hard, position, Mark::O), 2);
    }

    #[test]
    fn test_medium_blocks_immediate_threat() {
        let position = board("XX.......");
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            let index = calculate_move(Difficulty::Medium, &BotInput::new(position, Mark::O), &mut rng);
            assert_eq!(index, 2);
        }
    }

    #[test]
    fn test_medium_prefers_win_over_block() {
        let position = board("XX.OO....");
        assert_eq!(bot_move(Difficulty::Medium, position, Mark::O), 5);
    }

    #[test]
    fn test_medium_takes_first_win_in_index_order() {
        // O wins at 2 (top row) or 6 (left column).
        let position = board("OO.O.X.XX");
        assert_eq!(bot_move(Difficulty::Medium, position, Mark::O), 2);
    }

    #[test]
    fn test_single_empty_cell_is_forced_for_every_difficulty() {
        let position = board("XOXX.OOXO");
        assert_eq!(evaluate(&position), Outcome::InProgress);
        for difficulty in Difficulty::ALL {
            assert_eq!(bot_move(difficulty, position, Mark::O), 4, "{}", difficulty);
        }
    }

    #[test]
    fn test_easy_only_picks_empty_cells() {
        let position = board("X.O.X.O..");
        let available = get_available_moves(&position);
        let mut rng = SessionRng::new(9);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let index = calculate_move(Difficulty::Easy, &BotInput::new(position, Mark::X), &mut rng);
            assert!(available.contains(&index));
            seen.insert(index);
        }
        assert_eq!(seen.len(), available.len());
    }

    #[test]
    fn test_easy_is_reproducible_from_seed() {
        let position = Board::new();
        let picks = |seed| {
            let mut rng = SessionRng::new(seed);
            (0..10)
                .map(|_| calculate_move(Difficulty::Easy, &BotInput::new(position, Mark::X), &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(5), picks(5));
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn test_full_board_panics() {
        bot_move(Difficulty::Hard, board("XOXXOOOXX"), Mark::O);
    }

    #[test]
    #[should_panic(expected = "X or O")]
    fn test_empty_bot_mark_panics() {
        bot_move(Difficulty::Easy, Board::new(), Mark::Empty);
    }

    #[test]
    fn test_minimax_terminal_scores() {
        assert_eq!(minimax(board("OOOXX...."), true, Mark::O), WIN_SCORE);
        assert_eq!(minimax(board("XXXOO...."), false, Mark::O), LOSS_SCORE);
        assert_eq!(minimax(board("XOXXOOOXX"), true, Mark::O), DRAW_SCORE);
    }

    #[test]
    fn test_empty_board_is_a_draw_with_best_play() {
        assert_eq!(minimax(Board::new(), true, Mark::X), DRAW_SCORE);
    }

    #[test]
    fn test_hard_prefers_lowest_index_among_equal_moves() {
        // Every first move draws, so the first cell is chosen.
        assert_eq!(bot_move(Difficulty::Hard, Board::new(), Mark::X), 0);
    }

    fn reachable_positions() -> HashSet<(Board, Mark)> {
        fn walk(board: Board, to_move: Mark, seen: &mut HashSet<(Board, Mark)>) {
            if !seen.insert((board, to_move)) || evaluate(&board).is_over() {
                return;
            }
            for index in get_available_moves(&board) {
                walk(board.with_mark(index, to_move), to_move.swapped(), seen);
            }
        }

        let mut seen = HashSet::new();
        walk(Board::new(), Mark::X, &mut seen);
        walk(Board::new(), Mark::O, &mut seen);
        seen
    }

    #[test]
    fn test_minimax_is_antisymmetric_under_label_swap() {
        for (position, _) in reachable_positions() {
            if position.occupied_count() < 4 {
                continue;
            }
            for is_maximizing in [true, false] {
                let score = minimax(position, is_maximizing, Mark::X);
                let mirrored = minimax(position.swapped(), !is_maximizing, Mark::X);
                assert_eq!(score, -mirrored, "{} maximizing={}", position, is_maximizing);
            }
        }
    }

    #[test]
    fn test_medium_always_blocks_a_single_threat() {
        let mut rng = SessionRng::new(3);
        for (position, to_move) in reachable_positions() {
            if evaluate(&position).is_over() {
                continue;
            }
            let moves = get_available_moves(&position);
            let own_win = find_winning_move(&position, to_move, &moves);
            let blocks: Vec<usize> = moves
                .iter()
                .copied()
                .filter(|&i| check_win(&position.with_mark(i, to_move.swapped())).is_some())
                .collect();

            if own_win.is_none() && blocks.len() == 1 {
                let index = calculate_move(Difficulty::Medium, &BotInput::new(position, to_move), &mut rng);
                assert_eq!(index, blocks[0], "{}", position);
            }
        }
    }

    fn assert_hard_never_loses(position: Board, to_move: Mark, bot_mark: Mark, rng: &mut SessionRng) {
        match evaluate(&position) {
            Outcome::Win(winner) => {
                assert_eq!(winner, bot_mark, "bot lost: {}", position);
                return;
            }
            Outcome::Draw => return,
            Outcome::InProgress => {}
        }

        if to_move == bot_mark {
            let index = calculate_move(Difficulty::Hard, &BotInput::new(position, bot_mark), rng);
            assert!(position.is_empty_at(index));
            assert_hard_never_loses(position.with_mark(index, bot_mark), to_move.swapped(), bot_mark, rng);
        } else {
            for index in get_available_moves(&position) {
                assert_hard_never_loses(position.with_mark(index, to_move), bot_mark, bot_mark, rng);
            }
        }
    }

    #[test]
    fn test_hard_never_loses_moving_second() {
        let mut rng = SessionRng::new(0);
        assert_hard_never_loses(Board::new(), Mark::X, Mark::O, &mut rng);
    }

    #[test]
    fn test_hard_never_loses_moving_first() {
        let mut rng = SessionRng::new(0);
        assert_hard_never_loses(Board::new(), Mark::O, Mark::O, &mut rng);
    }

    #[test]
    fn test_hard_against_hard_draws() {
        let mut rng = SessionRng::new(0);
        let mut position = Board::new();
        let mut to_move = Mark::X;
        while !evaluate(&position).is_over() {
            let index = calculate_move(Difficulty::Hard, &BotInput::new(position, to_move), &mut rng);
            position.set(index, to_move);
            to_move = to_move.swapped();
        }
        assert_eq!(evaluate(&position), Outcome::Draw);
    }
}
