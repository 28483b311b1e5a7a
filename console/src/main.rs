mod app;
mod config;
mod human_player;
mod input;
mod render;
mod terminal;

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use clap::{Parser, ValueEnum};
use common::games::SessionRng;
use common::games::tictactoe::Difficulty;
use common::{log, logger};
use app::ConsoleApp;
use terminal::Terminal;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against the computer")]
struct Args {
    /// Skip the difficulty menu
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Seed for dice and computer moves, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Config file, defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    no_color: bool,

    /// Store the effective settings in the config file
    #[arg(long)]
    save_config: bool,

    /// Log engine decisions to stderr
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_path = args.config.clone().unwrap_or_else(config::get_config_path);
    let stored_config = config::get_config_manager(&config_path).get_config()?;
    let game_config = config::apply_overrides(
        stored_config,
        args.difficulty.map(Difficulty::from),
        args.no_color,
    );

    if args.save_config {
        config::save_config(&config_path, &game_config)?;
        log!("Saved config to {}", config_path.display());
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Using config {}, seed {}", config_path.display(), rng.seed());

    let terminal = RefCell::new(Terminal::new(io::stdin().lock(), io::stdout()));
    let stats = ConsoleApp::new(&terminal, game_config, rng).run()?;

    log!(
        "Session finished after {} games ({} won, {} lost, {} drawn)",
        stats.games_played(),
        stats.human_wins,
        stats.computer_wins,
        stats.draws
    );

    Ok(())
}
