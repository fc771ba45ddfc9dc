use crate::SpreadMode;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PICK_STAGGER_MS: u64 = 150;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Indicator shown on the theme control.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }
}

/// Startup preferences for a reading session. Never written back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    pub seed: Option<u64>,
    pub mode: SpreadMode,
    pub show_names: bool,
    pub theme: Theme,
    pub pick_stagger_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            mode: SpreadMode::CelticCross,
            show_names: true,
            theme: Theme::Dark,
            pick_stagger_ms: DEFAULT_PICK_STAGGER_MS,
        }
    }
}
