//! Life stage definitions

use serde::{Deserialize, Serialize};

/// The four life stages of the pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EggState {
    /// Initial stage, waiting for the first 10k-step day
    Egg,
    /// Hatched, must keep the daily goal through day 7
    Chick,
    /// Evolved, must keep the daily goal through day 13
    Chicken,
    /// Terminal stage, only an explicit restart leaves it
    Dead,
}

impl EggState {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            EggState::Egg => "\x1b[90m",     // Gray
            EggState::Chick => "\x1b[33m",   // Yellow
            EggState::Chicken => "\x1b[32m", // Green
            EggState::Dead => "\x1b[31m",    // Red
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for stage
    pub fn emoji(&self) -> &'static str {
        match self {
            EggState::Egg => "🥚",
            EggState::Chick => "🐥",
            EggState::Chicken => "🐔",
            EggState::Dead => "💀",
        }
    }

    /// Is the pet still in play (any stage but Dead)?
    pub fn is_alive(&self) -> bool {
        !matches!(self, EggState::Dead)
    }
}

impl std::fmt::Display for EggState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EggState::Egg => "EGG",
            EggState::Chick => "CHICK",
            EggState::Chicken => "CHICKEN",
            EggState::Dead => "DEAD",
        };
        write!(f, "{}", name)
    }
}
