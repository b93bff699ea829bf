//! Round engine
//!
//! Drives a round from `InProgress` to `Won` or `Lost`, one guess at a time.

use rand::Rng;

use super::proximity;
use super::secret;
use super::state::{Direction, GuessFeedback, RoundConfig, RoundOutcome, RoundState};
use crate::consts::{SCORE_BASE, SCORE_PER_SPARE_ATTEMPT};
use crate::error::{ConfigError, RoundError};

/// Begin a round: validate, compute the budget, draw the secret
pub fn start<R: Rng + ?Sized>(config: &RoundConfig, rng: &mut R) -> Result<RoundState, ConfigError> {
    let attempts_total = config.validate()?;
    let secret = secret::pick(config.min, config.max, rng);
    log::info!(
        "Round started: range [{}..{}], {} attempts",
        config.min,
        config.max,
        attempts_total
    );
    log::trace!("Secret drawn: {}", secret);

    Ok(RoundState {
        config: *config,
        secret,
        attempts_total,
        attempts_used: 0,
        outcome: RoundOutcome::InProgress,
    })
}

/// Process one guess
///
/// Guesses outside the range or after the round is over are rejected without
/// consuming an attempt.
pub fn submit_guess(state: &mut RoundState, guess: i64) -> Result<GuessFeedback, RoundError> {
    if state.is_over() {
        return Err(RoundError::RoundOver);
    }
    if !state.config.contains(guess) {
        return Err(RoundError::OutOfRange {
            guess,
            min: state.config.min,
            max: state.config.max,
        });
    }

    if guess == state.secret {
        state.outcome = RoundOutcome::Won;
        let used_count = state.used_count();
        log::info!("Round won in {} attempt(s)", used_count);
        return Ok(GuessFeedback::Correct { used_count });
    }

    state.attempts_used += 1;
    let direction = if guess < state.secret {
        Direction::TooLow
    } else {
        Direction::TooHigh
    };
    let proximity = state
        .config
        .proximity
        .then(|| proximity::classify(guess, state.secret, state.config.min, state.config.max));
    let remaining = state.remaining();

    if state.attempts_used == state.attempts_total {
        state.outcome = RoundOutcome::Lost;
        log::info!("Round lost, secret was {}", state.secret);
    }
    log::debug!("Guess {} -> {:?}, {} left", guess, direction, remaining);

    Ok(GuessFeedback::Miss {
        direction,
        proximity,
        remaining,
    })
}

/// Score for a win: a base plus a bonus per unused attempt
pub fn score(attempts_total: u32, used_count: u32) -> u64 {
    let spare = attempts_total.saturating_sub(used_count) as u64;
    SCORE_BASE + SCORE_PER_SPARE_ATTEMPT * spare
}
