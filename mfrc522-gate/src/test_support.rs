//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the `MockChip` wiring so tests across the crate
//! and the tests/ directory build devices the same way.
#![allow(dead_code)]

use crate::device::{Device, Initialized, ReaderConfig, Uninitialized};
use crate::transport::{MockBus, MockChip, MockDelay, MockLine, SpiTransport};

/// Device wired entirely to a `MockChip`.
pub type MockDevice<S> = Device<SpiTransport<MockBus, MockLine>, MockLine, MockDelay, S>;

/// Uninitialized device over `chip` with default configuration. The
/// returned delay shares its clock with the device.
#[doc(hidden)]
pub fn mock_device(chip: &MockChip) -> (MockDevice<Uninitialized>, MockDelay) {
    mock_device_with(chip, ReaderConfig::default())
}

#[doc(hidden)]
pub fn mock_device_with(
    chip: &MockChip,
    config: ReaderConfig,
) -> (MockDevice<Uninitialized>, MockDelay) {
    let delay = MockDelay::new();
    let device = Device::with_config(chip.transport(), chip.reset_line(), delay.clone(), config);
    (device, delay)
}

/// Convenience: create and initialize a device backed by `chip`. Register
/// writes made during initialization are cleared from the chip's log.
///
/// Panics if initialization fails; only meant for tests.
#[doc(hidden)]
pub fn initialized_mock_device(chip: &MockChip) -> (MockDevice<Initialized>, MockDelay) {
    initialized_mock_device_with(chip, ReaderConfig::default())
}

#[doc(hidden)]
pub fn initialized_mock_device_with(
    chip: &MockChip,
    config: ReaderConfig,
) -> (MockDevice<Initialized>, MockDelay) {
    let (device, delay) = mock_device_with(chip, config);
    match device.initialize() {
        Ok(device) => {
            chip.clear_log();
            (device, delay)
        }
        Err(e) => panic!("mock initialization failed: {}", e),
    }
}
