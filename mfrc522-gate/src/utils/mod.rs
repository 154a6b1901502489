// mfrc522-gate/src/utils/mod.rs
//! Small, reusable helpers used across the crate: hex rendering for card
//! identifiers and the bounded polling combinator shared by the reset and
//! transceive waits.

pub mod hex;
pub mod poll;

pub use hex::*;
pub use poll::*;
