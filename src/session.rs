//! Session driver
//!
//! Runs rounds back to back: guesses in, events out, best score updated on
//! each win, until the player declines another round or input ends.

use std::io;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ExitStatus, SessionEnd, SessionError};
use crate::highscores::{ScoreBackend, ScoreStore, ScoreUpdate};
use crate::platform::GuessSource;
use crate::settings::Settings;
use crate::sim::{self, Direction, GuessFeedback, Proximity, RoundConfig, RoundOutcome, SecretRng};

/// Language-neutral output of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    Started {
        min: i64,
        max: i64,
        attempts_total: u32,
        proximity: bool,
    },
    Miss {
        direction: Direction,
        proximity: Option<Proximity>,
        remaining: u32,
    },
    Won {
        used_count: u32,
    },
    /// Carries the secret drawn at round start
    Lost {
        secret: i64,
    },
    Score {
        score: u64,
    },
    /// Only emitted when the score beat the stored best
    Record(ScoreUpdate),
    Ended(SessionEnd),
    Goodbye,
}

/// Receives events for presentation
pub trait EventSink {
    fn emit(&mut self, event: &RoundEvent) -> io::Result<()>;
}

impl EventSink for Vec<RoundEvent> {
    fn emit(&mut self, event: &RoundEvent) -> io::Result<()> {
        self.push(*event);
        Ok(())
    }
}

/// How a finished round went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub outcome: RoundOutcome,
    pub used_count: u32,
    pub attempts_total: u32,
    pub secret: i64,
    pub score: Option<u64>,
}

/// Play a single round to its end
pub fn play_round<R, G, S>(
    config: &RoundConfig,
    rng: &mut R,
    input: &mut G,
    sink: &mut S,
) -> Result<RoundSummary, SessionError>
where
    R: Rng + ?Sized,
    G: GuessSource + ?Sized,
    S: EventSink + ?Sized,
{
    let mut state = sim::start(config, rng)?;
    sink.emit(&RoundEvent::Started {
        min: config.min,
        max: config.max,
        attempts_total: state.attempts_total,
        proximity: config.proximity,
    })?;

    while !state.is_over() {
        let guess = input.next_guess(state.attempts_used + 1, config.min, config.max)?;
        match sim::submit_guess(&mut state, guess) {
            Ok(GuessFeedback::Correct { used_count }) => {
                sink.emit(&RoundEvent::Won { used_count })?;
            }
            Ok(GuessFeedback::Miss {
                direction,
                proximity,
                remaining,
            }) => {
                sink.emit(&RoundEvent::Miss {
                    direction,
                    proximity,
                    remaining,
                })?;
            }
            Err(e) => log::warn!("Guess rejected by round engine: {}", e),
        }
    }

    if state.outcome == RoundOutcome::Lost {
        sink.emit(&RoundEvent::Lost {
            secret: state.secret,
        })?;
    }

    Ok(RoundSummary {
        outcome: state.outcome,
        used_count: state.used_count(),
        attempts_total: state.attempts_total,
        secret: state.secret,
        score: state.score(),
    })
}

/// Run rounds until the player stops
pub fn run_session<B, G, S>(
    settings: &Settings,
    rng: &mut SecretRng,
    input: &mut G,
    sink: &mut S,
    store: &mut ScoreStore<B>,
) -> ExitStatus
where
    B: ScoreBackend,
    G: GuessSource + ?Sized,
    S: EventSink + ?Sized,
{
    match session_loop(settings, rng, input, sink, store) {
        Ok(()) => ExitStatus::Ok,
        Err(err) => {
            if let SessionError::End(end) = err {
                if let Err(e) = sink.emit(&RoundEvent::Ended(end)) {
                    log::error!("Could not report session end: {}", e);
                }
            } else {
                log::error!("Session failed: {}", err);
            }
            ExitStatus::from(&err)
        }
    }
}

fn session_loop<B, G, S>(
    settings: &Settings,
    rng: &mut SecretRng,
    input: &mut G,
    sink: &mut S,
    store: &mut ScoreStore<B>,
) -> Result<(), SessionError>
where
    B: ScoreBackend,
    G: GuessSource + ?Sized,
    S: EventSink + ?Sized,
{
    let config = settings.round;
    loop {
        let summary = play_round(&config, rng.rng_mut(), input, sink)?;

        if let Some(score) = summary.score.filter(|_| settings.scoring) {
            sink.emit(&RoundEvent::Score { score })?;
            let update = store.update(score, config.min, config.max);
            if update.is_record {
                sink.emit(&RoundEvent::Record(update))?;
            }
        }

        if !input.play_again() {
            sink.emit(&RoundEvent::Goodbye)?;
            return Ok(());
        }
    }
}
