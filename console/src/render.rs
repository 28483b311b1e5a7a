use common::games::tictactoe::{BOARD_SIZE, Board, Mark, SessionStats, WinLine};

const EMPTY_COLOR: &str = "\x1b[90m";
const HUMAN_COLOR: &str = "\x1b[92m";
const COMPUTER_COLOR: &str = "\x1b[94m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

const TOP: &str = " ╔═══╦═══╦═══╗";
const MIDDLE: &str = " ╠═══╬═══╬═══╣";
const BOTTOM: &str = " ╚═══╩═══╩═══╝";

pub struct BoardRenderer {
    human_mark: Mark,
    use_colors: bool,
}

impl BoardRenderer {
    pub fn new(human_mark: Mark, use_colors: bool) -> Self {
        Self {
            human_mark,
            use_colors,
        }
    }

    /// Empty cells show the number the player types to claim them. Without
    /// colors the winning line is bracketed instead of bold.
    fn cell(&self, board: &Board, index: usize, highlight: Option<WinLine>) -> String {
        let mark = board.get(index).unwrap_or_default();
        let symbol = match mark {
            Mark::Empty => (index + 1).to_string(),
            mark => mark.to_string(),
        };
        let highlighted = highlight.is_some_and(|line| line.contains(&index));

        if !self.use_colors {
            return if highlighted {
                format!("[{}]", symbol)
            } else {
                format!(" {} ", symbol)
            };
        }

        let color = match mark {
            Mark::Empty => EMPTY_COLOR,
            mark if mark == self.human_mark => HUMAN_COLOR,
            _ => COMPUTER_COLOR,
        };
        let bold = if highlighted { BOLD } else { "" };
        format!(" {}{}{}{} ", bold, color, symbol, RESET)
    }

    pub fn render(&self, board: &Board, highlight: Option<WinLine>) -> String {
        let mut lines = vec![String::new(), TOP.to_string()];
        for row in 0..BOARD_SIZE {
            let cells: Vec<String> = (0..BOARD_SIZE)
                .map(|col| self.cell(board, row * BOARD_SIZE + col, highlight))
                .collect();
            lines.push(format!(" ║{}║", cells.join("║")));
            if row + 1 < BOARD_SIZE {
                lines.push(MIDDLE.to_string());
            }
        }
        lines.push(BOTTOM.to_string());
        lines.push(String::new());
        lines.join("\n")
    }
}

pub fn format_stats(stats: &SessionStats, human_name: &str, computer_name: &str) -> String {
    format!(
        "Stats: {} {} | {} {} | Draws {}",
        human_name, stats.human_wins, computer_name, stats.computer_wins, stats.draws
    )
}
