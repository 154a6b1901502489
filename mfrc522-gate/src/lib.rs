// mfrc522-gate/src/lib.rs

//! mfrc522-gate
//!
//! Driver for the NXP MFRC522 contactless reader over SPI, reading ISO
//! 14443-A card identifiers, plus the control step of an access gate built
//! on top of it.
#![warn(missing_docs)]

pub mod access;
pub mod card;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the register/identifier types are available for consumers and for
// `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
