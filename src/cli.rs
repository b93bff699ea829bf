//! Command-line flags
//!
//! Parsed with clap and resolved into `Settings`, applying difficulty presets.

use std::path::PathBuf;

use clap::Parser;

use crate::settings::{self, Settings};
use crate::sim::{Difficulty, RoundConfig};
use crate::ui::Lang;

#[derive(Debug, Parser)]
#[command(name = "guess-number")]
#[command(about = "Console game: guess the hidden number")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Difficulty preset: easy, normal or hard (sets range and attempts)
    #[arg(long, default_value = "normal")]
    pub difficulty: Difficulty,

    /// Lower bound of the range
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Upper bound of the range
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Fixed number of attempts (overrides difficulty)
    #[arg(long, allow_negative_numbers = true)]
    pub attempts: Option<i64>,

    /// Enable hot/cold proximity hints
    #[arg(long)]
    pub proximity: bool,

    /// Seed the random generator (for testing), any integer
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Disable scoring and the local best-score record
    #[arg(long)]
    pub no_score: bool,

    /// Interface language: es or en
    #[arg(long, default_value = "es")]
    pub lang: Lang,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode: hints and final result only
    #[arg(long)]
    pub quiet: bool,

    /// Where to keep the best-score record
    #[arg(long)]
    pub score_file: Option<PathBuf>,

    /// Print the version and exit
    #[arg(long)]
    pub version: bool,
}

impl Cli {
    pub fn into_settings(self) -> Settings {
        let (min, max) = settings::resolve_range(self.difficulty, self.min, self.max);
        Settings {
            round: RoundConfig {
                min,
                max,
                attempts_override: self.attempts,
                difficulty: self.difficulty,
                proximity: self.proximity,
            },
            // Negative seeds reinterpret their bits
            seed: self.seed.map(|seed| seed as u64),
            scoring: !self.no_score,
            lang: self.lang,
            color: settings::color_enabled(self.no_color, self.quiet),
            quiet: self.quiet,
            score_file: self.score_file,
        }
    }
}
