// mfrc522-gate/src/device/mod.rs

pub mod config;
pub mod handle;

pub use config::{BccPolicy, FrontEndConfig, ReaderConfig, ResetPolicy};
pub use handle::{Device, Initialized, Uninitialized};
