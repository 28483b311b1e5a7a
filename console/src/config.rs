use std::path::{Path, PathBuf};
use common::config::{ConfigManager, FileContentConfigProvider, GameConfig, YamlConfigSerializer};
use common::games::tictactoe::Difficulty;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(path: &Path) -> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

/// Writes the effective settings back so later runs start from them.
pub fn save_config(path: &Path, config: &GameConfig) -> Result<(), String> {
    get_config_manager(path).set_config(config)
}

/// Command line flags win over the config file.
pub fn apply_overrides(config: GameConfig, difficulty: Option<Difficulty>, no_color: bool) -> GameConfig {
    GameConfig {
        difficulty: difficulty.or(config.difficulty),
        use_colors: config.use_colors && !no_color,
        ..config
    }
}
