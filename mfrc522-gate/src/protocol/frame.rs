// mfrc522-gate/src/protocol/frame.rs

use crate::constants::{ANTICOLLISION_NVB, PICC_REQALL, PICC_SEL_CL1, SHORT_FRAME_BITS};

/// A PICC command frame as loaded into the FIFO, plus the number of valid
/// bits in its last byte (BitFramingReg.TxLastBits, 0 = whole byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiccFrame {
    bytes: [u8; 2],
    len: u8,
    pub tx_last_bits: u8,
}

impl PiccFrame {
    /// REQA: a single 7-bit short frame, no CRC.
    pub const fn reqa() -> Self {
        Self {
            bytes: [PICC_REQALL, 0],
            len: 1,
            tx_last_bits: SHORT_FRAME_BITS,
        }
    }

    /// ANTICOLLISION cascade level 1 with NVB = 0x20 (no UID bits known).
    pub const fn anticollision_cl1() -> Self {
        Self {
            bytes: [PICC_SEL_CL1, ANTICOLLISION_NVB],
            len: 2,
            tx_last_bits: 0,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// BitFramingReg value that arms the transmission without starting it.
    pub fn bit_framing(&self) -> u8 {
        self.tx_last_bits & 0x07
    }
}
