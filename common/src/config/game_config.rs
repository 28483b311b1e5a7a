use serde::{Deserialize, Serialize};
use crate::games::tictactoe::Difficulty;
use super::Validate;

pub const MAX_NAME_LENGTH: usize = 32;
pub const MIN_DICE_SIDES: u32 = 2;
pub const MAX_DICE_SIDES: u32 = 100;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    /// Skips the difficulty menu when set.
    pub difficulty: Option<Difficulty>,
    pub use_colors: bool,
    pub human_name: String,
    pub computer_name: String,
    pub dice_sides: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: None,
            use_colors: true,
            human_name: "Human".to_string(),
            computer_name: "Computer".to_string(),
            dice_sides: 6,
        }
    }
}

fn validate_name(field: &str, name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(format!("{} must be at most {} characters", field, MAX_NAME_LENGTH));
    }
    Ok(())
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        validate_name("human_name", &self.human_name)?;
        validate_name("computer_name", &self.computer_name)?;
        if self.dice_sides < MIN_DICE_SIDES || self.dice_sides > MAX_DICE_SIDES {
            return Err(format!(
                "dice_sides must be between {} and {}, got {}",
                MIN_DICE_SIDES, MAX_DICE_SIDES, self.dice_sides
            ));
        }
        Ok(())
    }
}
