#[path = "../common/mod.rs"]
mod common;

use mfrc522_gate::device::{Device, ReaderConfig};
use mfrc522_gate::transport::mock::{MockChip, MockDelay, MOCK_VERSION};
use mfrc522_gate::types::Register;

#[test]
fn initialize_transitions_and_keeps_config() {
    let chip = MockChip::new();
    let device = Device::with_config(
        chip.transport(),
        chip.reset_line(),
        MockDelay::new(),
        ReaderConfig::strict(),
    );
    assert_eq!(device.config(), &ReaderConfig::strict());

    let mut initialized = device.initialize().unwrap();
    assert_eq!(initialized.config(), &ReaderConfig::strict());
    assert_eq!(initialized.version().unwrap(), MOCK_VERSION);
}

#[test]
fn over_spi_matches_explicit_transport() {
    let chip = MockChip::new();
    let device = Device::over_spi(chip.bus(), chip.chip_select(), chip.reset_line(), MockDelay::new());
    let _ = device.initialize().unwrap();
    assert_eq!(chip.register(Register::TxControl) & 0x03, 0x03);
}

#[test]
fn release_returns_parts() {
    let chip = MockChip::new();
    let (device, delay) = common::initialized_mock_device(&chip);
    let (_transport, _reset, released) = device.release();
    assert_eq!(released.elapsed(), delay.elapsed());
}
