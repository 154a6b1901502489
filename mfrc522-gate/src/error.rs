// mfrc522-gate/src/error.rs

use std::fmt;

use thiserror::Error;

/// Which card exchange produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// REQA wake-up exchange returning the ATQA.
    Presence,
    /// Cascade level 1 anticollision exchange returning UID + BCC.
    Anticollision,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Presence => f.write_str("presence"),
            Stage::Anticollision => f.write_str("anticollision"),
        }
    }
}

/// Why a transceive poll gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutCause {
    /// The chip's own countdown timer raised TimerIRq.
    TimerExpired,
    /// The host ran out of poll attempts without seeing completion.
    PollBudgetExhausted,
}

impl fmt::Display for TimeoutCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeoutCause::TimerExpired => f.write_str("reader timer expired"),
            TimeoutCause::PollBudgetExhausted => f.write_str("poll budget exhausted"),
        }
    }
}

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("transport fault: {0}")]
    TransportFault(String),

    #[error("no card present")]
    NoCardPresent,

    #[error("{stage} timed out: {cause}")]
    ProtocolTimeout { stage: Stage, cause: TimeoutCause },

    #[error("{stage} failed: error flags {flags:#04x}")]
    ProtocolError { stage: Stage, flags: u8 },

    #[error("{stage} returned malformed response: expected {expected} bytes, got {actual}")]
    MalformedResponse {
        stage: Stage,
        expected: usize,
        actual: usize,
    },

    #[error("invalid length: expected at most {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("bcc mismatch: expected {expected:#04x}, got {actual:#04x}")]
    BccMismatch { expected: u8, actual: u8 },

    #[error("reader did not leave power-down after soft reset")]
    ResetTimeout,

    #[error("authorization failed: {0}")]
    Authorization(String),

    #[error("gate actuator failed: {0}")]
    Actuator(String),
}

impl Error {
    /// Errors the control loop should absorb and retry on its next cycle.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Error::NoCardPresent
                | Error::ProtocolTimeout { .. }
                | Error::ProtocolError { .. }
                | Error::MalformedResponse { .. }
                | Error::BccMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
