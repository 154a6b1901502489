// mfrc522-gate/src/protocol/exchange.rs

use crate::constants::*;
use crate::error::{Stage, TimeoutCause};
use crate::protocol::frame::PiccFrame;
use crate::Error;

/// FIFO byte count a response must report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseLength {
    Exactly(usize),
    Between(usize, usize),
}

impl ResponseLength {
    pub fn accepts(&self, len: usize) -> bool {
        match *self {
            ResponseLength::Exactly(n) => len == n,
            ResponseLength::Between(min, max) => (min..=max).contains(&len),
        }
    }

    /// The bound `len` violated, for error reporting.
    pub fn expected_for(&self, len: usize) -> usize {
        match *self {
            ResponseLength::Exactly(n) => n,
            ResponseLength::Between(min, _) if len < min => min,
            ResponseLength::Between(_, max) => max,
        }
    }
}

/// Everything that distinguishes one card exchange from another: what is
/// sent, which error flags abort it, and what a valid answer looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub stage: Stage,
    pub frame: PiccFrame,
    pub error_mask: u8,
    pub response: ResponseLength,
}

impl Exchange {
    /// REQA wake-up, answered by a 2-byte ATQA.
    pub const PRESENCE: Exchange = Exchange {
        stage: Stage::Presence,
        frame: PiccFrame::reqa(),
        error_mask: PRESENCE_ERROR_MASK,
        response: ResponseLength::Exactly(ATQA_LEN),
    };

    /// Cascade level 1 anticollision, answered by UID bytes plus BCC.
    pub const ANTICOLLISION: Exchange = Exchange {
        stage: Stage::Anticollision,
        frame: PiccFrame::anticollision_cl1(),
        error_mask: ANTICOLLISION_ERROR_MASK,
        response: ResponseLength::Between(MIN_ANTICOLLISION_LEN, MAX_UID_LEN + 1),
    };

    /// Error for a TimerIRq. On REQA it means the field is empty.
    pub fn timer_expired(&self) -> Error {
        match self.stage {
            Stage::Presence => Error::NoCardPresent,
            Stage::Anticollision => Error::ProtocolTimeout {
                stage: self.stage,
                cause: TimeoutCause::TimerExpired,
            },
        }
    }

    pub fn poll_exhausted(&self) -> Error {
        Error::ProtocolTimeout {
            stage: self.stage,
            cause: TimeoutCause::PollBudgetExhausted,
        }
    }

    pub fn malformed(&self, actual: usize) -> Error {
        Error::MalformedResponse {
            stage: self.stage,
            expected: self.response.expected_for(actual),
            actual,
        }
    }
}
