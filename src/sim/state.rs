//! Round state and core types
//!
//! A `RoundState` is owned by whoever drives the round and is discarded once
//! the round concludes.

use serde::{Deserialize, Serialize};

use super::budget::{self, Difficulty};
use super::proximity::Proximity;
use crate::error::ConfigError;

/// Immutable per-round configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub min: i64,
    pub max: i64,
    /// Fixed attempt count, replaces the difficulty-derived budget
    pub attempts_override: Option<i64>,
    pub difficulty: Difficulty,
    /// Emit hot/cold hints on misses
    pub proximity: bool,
}

impl RoundConfig {
    pub fn new(min: i64, max: i64, difficulty: Difficulty) -> Self {
        Self {
            min,
            max,
            attempts_override: None,
            difficulty,
            proximity: false,
        }
    }

    /// Check the config and compute the attempt budget
    pub fn validate(&self) -> Result<u32, ConfigError> {
        if self.min >= self.max {
            return Err(ConfigError::RangeTooSmall {
                min: self.min,
                max: self.max,
            });
        }
        let attempts = budget::compute(self.min, self.max, self.difficulty, self.attempts_override);
        if attempts < 1 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(attempts)
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Round lifecycle, `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    InProgress,
    Won,
    Lost,
}

/// Which way the secret lies relative to a miss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Guess was below the secret
    TooLow,
    /// Guess was above the secret
    TooHigh,
}

/// Result of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessFeedback {
    Correct {
        /// Attempts taken including the winning one
        used_count: u32,
    },
    Miss {
        direction: Direction,
        /// Present only when hints are enabled
        proximity: Option<Proximity>,
        remaining: u32,
    },
}

/// Mutable state of one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    pub config: RoundConfig,
    pub(crate) secret: i64,
    pub attempts_total: u32,
    /// Misses so far; the winning guess is not counted here
    pub attempts_used: u32,
    pub outcome: RoundOutcome,
}

impl RoundState {
    pub fn is_over(&self) -> bool {
        self.outcome != RoundOutcome::InProgress
    }

    pub fn remaining(&self) -> u32 {
        self.attempts_total.saturating_sub(self.attempts_used)
    }

    /// Attempts to report for display and scoring
    ///
    /// A win counts the winning guess on top of the misses, so a first-guess
    /// win reports 1, never 0.
    pub fn used_count(&self) -> u32 {
        match self.outcome {
            RoundOutcome::Won => self.attempts_used + 1,
            _ => self.attempts_used,
        }
    }

    /// The secret, revealed only once the round is over
    pub fn revealed_secret(&self) -> Option<i64> {
        self.is_over().then_some(self.secret)
    }

    /// Round score, only on a win
    pub fn score(&self) -> Option<u64> {
        (self.outcome == RoundOutcome::Won)
            .then(|| super::round::score(self.attempts_total, self.used_count()))
    }
}
