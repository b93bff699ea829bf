//! Error taxonomy
//!
//! Only `ConfigError` and `SessionEnd` cross from the library into the driver as
//! hard failures. Everything else is absorbed close to where it happens.

use thiserror::Error;

/// Invalid game configuration, detected before any round starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The range must hold at least two candidate values
    #[error("range [{min}..{max}] must contain at least 2 numbers (min < max)")]
    RangeTooSmall { min: i64, max: i64 },
    /// The attempt budget came out non-positive
    #[error("number of attempts must be >= 1")]
    NoAttempts,
}

/// A guess the round engine refuses to process
///
/// Rejected guesses never consume an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("round is already over")]
    RoundOver,
    #[error("guess {guess} is outside [{min}..{max}]")]
    OutOfRange { guess: i64, min: i64, max: i64 },
}

/// Failure talking to the score backend
///
/// Never surfaces past the score store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("score storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("score storage is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Signals that end the whole session, not just the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionEnd {
    /// The player interrupted input
    #[error("interrupted by user")]
    Interrupted,
    /// Input stream closed
    #[error("end of input")]
    EndOfInput,
}

/// Anything that stops a session early
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    End(#[from] SessionEnd),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<&SessionError> for ExitStatus {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::End(end) => (*end).into(),
            SessionError::Config(_) => ExitStatus::ConfigError,
            SessionError::Io(_) => ExitStatus::Unexpected,
        }
    }
}

/// Process exit status of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Ok,
    Unexpected,
    ConfigError,
    Interrupted,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Ok => 0,
            ExitStatus::Unexpected => 1,
            ExitStatus::ConfigError => 2,
            ExitStatus::Interrupted => 130,
        }
    }
}

impl From<SessionEnd> for ExitStatus {
    fn from(end: SessionEnd) -> Self {
        match end {
            SessionEnd::Interrupted => ExitStatus::Interrupted,
            SessionEnd::EndOfInput => ExitStatus::Unexpected,
        }
    }
}
