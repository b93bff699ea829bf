//! Session settings
//!
//! Everything a session needs to know, resolved from the command line.

use std::io::IsTerminal;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::highscores::FileBackend;
use crate::sim::{Difficulty, RoundConfig};
use crate::ui::Lang;

/// Resolved settings for one invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub round: RoundConfig,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
    /// Show scores and keep the best-score record
    pub scoring: bool,
    pub lang: Lang,
    /// ANSI colors on stdout
    pub color: bool,
    /// Hints and final result only
    pub quiet: bool,
    /// Overrides the default record location
    pub score_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        let difficulty = Difficulty::default();
        let (min, max) = difficulty.preset_range();
        Self {
            round: RoundConfig::new(min, max, difficulty),
            seed: None,
            scoring: true,
            lang: Lang::default(),
            color: false,
            quiet: false,
            score_file: None,
        }
    }
}

impl Settings {
    /// Check the round config before anything runs
    pub fn validate(&self) -> Result<u32, ConfigError> {
        self.round.validate()
    }

    pub fn score_path(&self) -> PathBuf {
        self.score_file.clone().unwrap_or_else(FileBackend::default_path)
    }
}

/// Resolve a range, falling back to the difficulty preset unless both ends are given
pub fn resolve_range(difficulty: Difficulty, min: Option<i64>, max: Option<i64>) -> (i64, i64) {
    match (min, max) {
        (Some(min), Some(max)) => (min, max),
        _ => difficulty.preset_range(),
    }
}

/// Colors only on a terminal, and never in quiet mode
pub fn color_enabled(no_color: bool, quiet: bool) -> bool {
    !no_color && !quiet && std::io::stdout().is_terminal()
}
