// mfrc522-gate/src/constants.rs
//! Common protocol constants used across the crate

/// PICC REQA ("request all") short frame command
pub const PICC_REQALL: u8 = 0x52;

/// PICC SELECT / ANTICOLLISION, cascade level 1
pub const PICC_SEL_CL1: u8 = 0x93;

/// NVB for a full anticollision request: 2 bytes sent, 0 UID bits known
pub const ANTICOLLISION_NVB: u8 = 0x20;

/// Number of ATQA bytes a REQA must produce
pub const ATQA_LEN: usize = 2;

/// Minimal anticollision response length (UID bytes plus BCC)
pub const MIN_ANTICOLLISION_LEN: usize = 4;

/// Size of the reader's FIFO buffer in bytes
pub const FIFO_SIZE: usize = 64;

/// Longest UID defined by ISO/IEC 14443-3 (triple size)
pub const MAX_UID_LEN: usize = 10;

/// CommandReg bit 4: analog part of the receiver is switched off
pub const COMMAND_POWER_DOWN: u8 = 1 << 4;

/// ComIrqReg bits
pub const IRQ_SET1: u8 = 1 << 7;
pub const IRQ_TX: u8 = 1 << 6;
pub const IRQ_RX: u8 = 1 << 5;
pub const IRQ_IDLE: u8 = 1 << 4;
pub const IRQ_HI_ALERT: u8 = 1 << 3;
pub const IRQ_LO_ALERT: u8 = 1 << 2;
pub const IRQ_ERR: u8 = 1 << 1;
pub const IRQ_TIMER: u8 = 1 << 0;

/// Writing this to ComIrqReg clears every request bit (Set1 = 0)
pub const IRQ_CLEAR_ALL: u8 = 0x7F;

/// ErrorReg bits
pub const ERR_WR: u8 = 1 << 7;
pub const ERR_TEMP: u8 = 1 << 6;
pub const ERR_BUFFER_OVFL: u8 = 1 << 4;
pub const ERR_COLL: u8 = 1 << 3;
pub const ERR_CRC: u8 = 1 << 2;
pub const ERR_PARITY: u8 = 1 << 1;
pub const ERR_PROTOCOL: u8 = 1 << 0;

/// Error bits that fail the REQA exchange
pub const PRESENCE_ERROR_MASK: u8 = ERR_BUFFER_OVFL | ERR_PARITY | ERR_PROTOCOL;

/// Error bits that fail the anticollision exchange
pub const ANTICOLLISION_ERROR_MASK: u8 = PRESENCE_ERROR_MASK | ERR_COLL;

/// FIFOLevelReg bit 7: flush the FIFO
pub const FIFO_FLUSH: u8 = 1 << 7;

/// BitFramingReg bit 7: start transmission of a transceive command
pub const BIT_FRAMING_START_SEND: u8 = 1 << 7;

/// BitFramingReg TxLastBits for a 7-bit short frame
pub const SHORT_FRAME_BITS: u8 = 0x07;

/// TxControlReg Tx1RFEn | Tx2RFEn
pub const TX_CONTROL_ANTENNA_ON: u8 = 0x03;
