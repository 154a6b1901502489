// Shared helpers for integration tests.
#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;
pub use mfrc522_gate::test_support::{
    MockDevice, initialized_mock_device, initialized_mock_device_with, mock_device,
    mock_device_with,
};

/// Route `log` output through env_logger when RUST_LOG is set.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
