// mfrc522-gate/src/card/mod.rs

use std::fmt;

use log::warn;

use crate::device::BccPolicy;
use crate::protocol::bcc;
use crate::types::Uid;
use crate::{Error, Result};

pub mod operations;

/// Card identifier produced by one anticollision exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardIdentifier {
    uid: Uid,
    bcc: u8,
    bcc_valid: bool,
}

impl CardIdentifier {
    /// Split an anticollision response into UID and trailing BCC and check
    /// it. Under `BccPolicy::Lenient` a mismatch is logged and reported via
    /// `bcc_valid()`; under `BccPolicy::Strict` it is an error.
    pub fn assemble(response: &[u8], policy: BccPolicy) -> Result<Self> {
        let (check, uid_bytes) = match response.split_last() {
            Some((check, uid_bytes)) if !uid_bytes.is_empty() => (*check, uid_bytes),
            _ => {
                return Err(Error::InvalidLength {
                    expected: 2,
                    actual: response.len(),
                });
            }
        };

        let uid = Uid::try_from(uid_bytes)?;
        let expected = bcc(uid_bytes);
        let bcc_valid = expected == check;

        if !bcc_valid {
            match policy {
                BccPolicy::Strict => {
                    return Err(Error::BccMismatch {
                        expected,
                        actual: check,
                    });
                }
                BccPolicy::Lenient => warn!(
                    "bcc mismatch for {}: calculated {:#04x}, received {:#04x}",
                    uid, expected, check
                ),
            }
        }

        Ok(Self {
            uid,
            bcc: check,
            bcc_valid,
        })
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Check byte as received from the card.
    pub fn bcc(&self) -> u8 {
        self.bcc
    }

    /// False when the received check byte did not match the UID.
    pub fn bcc_valid(&self) -> bool {
        self.bcc_valid
    }

    /// `A2:FC:4F:05`
    pub fn to_colon_hex(&self) -> String {
        self.uid.to_colon_hex()
    }
}

impl fmt::Display for CardIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.uid, f)
    }
}
