//! Guess Number - a console number guessing game
//!
//! Core modules:
//! - `sim`: Deterministic round engine (budget, secret, hints, scoring)
//! - `highscores`: Best score record with pluggable storage
//! - `session`: Round loop and event stream
//! - `platform`: Console input with validation and re-prompting
//! - `ui`: Localized, colored rendering of round events
//! - `settings` / `cli`: Configuration from the command line

pub mod cli;
pub mod error;
pub mod highscores;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{ConfigError, ExitStatus, SessionEnd, SessionError};
pub use highscores::{FileBackend, MemoryBackend, ScoreRecord, ScoreStore, ScoreUpdate};
pub use settings::Settings;

/// Game constants
pub mod consts {
    /// Program version shown by `--version`
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Points for any win
    pub const SCORE_BASE: u64 = 100;
    /// Bonus per attempt left unused
    pub const SCORE_PER_SPARE_ATTEMPT: u64 = 10;

    /// Proximity tier thresholds, percent of range size
    pub const PROXIMITY_VERY_HOT_PCT: u128 = 1;
    pub const PROXIMITY_HOT_PCT: u128 = 3;
    pub const PROXIMITY_WARM_PCT: u128 = 7;
}
