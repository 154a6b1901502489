// mfrc522-gate/src/protocol/mod.rs

pub mod checksum;
pub mod exchange;
pub mod frame;

pub use checksum::{bcc, verify_bcc};
pub use exchange::{Exchange, ResponseLength};
pub use frame::PiccFrame;
