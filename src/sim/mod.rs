//! Round engine
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Seeded RNG only, passed in by the caller
//! - No console, storage or localization dependencies
//! - Emits language-neutral types only

pub mod budget;
pub mod proximity;
pub mod round;
pub mod secret;
pub mod state;

pub use budget::Difficulty;
pub use proximity::Proximity;
pub use round::{score, start, submit_guess};
pub use secret::SecretRng;
pub use state::{Direction, GuessFeedback, RoundConfig, RoundOutcome, RoundState};
