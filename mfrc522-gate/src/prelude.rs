// mfrc522-gate/src/prelude.rs

pub use crate::access::{
    AccessConfig, AccessDecision, AccessPoint, AllowList, Authorizer, CycleOutcome, GateActuator,
    ServoConfig,
};
pub use crate::card::CardIdentifier;
pub use crate::device::{BccPolicy, Device, ReaderConfig, ResetPolicy};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::transport::{Bus, Delay, OutputLine, RegisterTransport, SpiTransport};
pub use crate::{Atqa, Error, Register, Result, Stage, TimeoutCause, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{PollPolicy, bytes_to_hex, bytes_to_hex_colon, ms, parse_hex};
