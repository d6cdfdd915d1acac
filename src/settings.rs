//! Match settings
//!
//! Chosen on the start menu; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Bot difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "1" => Some(Difficulty::Easy),
            "normal" | "2" => Some(Difficulty::Normal),
            "hard" | "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Menu key (1..=3) for this level
    pub fn level(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Whether the bot attempts take-out shots on a leading opponent stone
    pub fn plays_takeouts(&self) -> bool {
        self.level() >= 2
    }

    /// Half-width of the uniform noise added to the bot's aim x (world units)
    pub fn aim_noise(&self) -> f32 {
        match self {
            Difficulty::Easy => 80.0,
            Difficulty::Normal => 30.0,
            Difficulty::Hard => 2.0,
        }
    }

    /// Half-width of the uniform noise added to the bot's launch power
    pub fn power_noise(&self) -> f32 {
        match self {
            Difficulty::Easy => 4.0,
            Difficulty::Normal => 1.5,
            Difficulty::Hard => 0.2,
        }
    }

    /// Menu line shown on the start screen
    pub const MENU_LABEL: &'static str = "[1] easy   [2] normal   [3] hard";
}

/// Settings for one match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Bot difficulty
    pub difficulty: Difficulty,
    /// Apply difficulty noise to bot shots (off for scripted/replay tests)
    pub bot_noise: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            bot_noise: true,
        }
    }
}

impl Settings {
    /// Noise-free settings: bots always execute their planned shot exactly
    pub fn deterministic(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            bot_noise: false,
        }
    }
}
