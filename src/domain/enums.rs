use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One of the three fixed countdown durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    Pomodoro,
    ShortBreak,
    LongBreak,
}

impl Preset {
    /// Default duration in seconds
    pub fn default_seconds(&self) -> u32 {
        match self {
            Self::Pomodoro => 25 * 60,
            Self::ShortBreak => 5 * 60,
            Self::LongBreak => 15 * 60,
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pomodoro => "Pomodoro",
            Self::ShortBreak => "Pausa Curta",
            Self::LongBreak => "Pausa Longa",
        }
    }

    /// Key that selects this preset in normal mode
    pub fn key(&self) -> char {
        match self {
            Self::Pomodoro => '1',
            Self::ShortBreak => '2',
            Self::LongBreak => '3',
        }
    }

    pub fn from_key(c: char) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.key() == c)
    }

    /// All presets in display order
    pub fn all() -> &'static [Preset] {
        &[Preset::Pomodoro, Preset::ShortBreak, Preset::LongBreak]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    EditingInput, // Typing into the "add task" line
    Alert,        // Blocking "time's up" box
}
