#[path = "../common/mod.rs"]
mod common;

use mfrc522_gate::device::ReaderConfig;
use mfrc522_gate::transport::mock::MockChip;
use mfrc522_gate::types::Register;
use mfrc522_gate::utils::ms;
use mfrc522_gate::Error;

#[test]
fn init_writes_front_end_in_order() {
    common::init_logging();
    let chip = MockChip::new();
    let (device, _) = common::mock_device(&chip);
    let _device = device.initialize().unwrap();

    let writes = chip.writes();
    assert_eq!(
        writes,
        vec![
            (Register::Command, 0x0F),
            (Register::TxMode, 0x00),
            (Register::RxMode, 0x00),
            (Register::ModWidth, 0x1A),
            (Register::TMode, 0x80),
            (Register::TPrescaler, 0x20),
            (Register::TReloadH, 0x00),
            (Register::TReloadL, 0x20),
            (Register::TxAsk, 0x40),
            (Register::Mode, 0x3D),
            (Register::TxControl, 0x83),
        ]
    );
    assert!(chip.reset_released());
    assert!(!chip.chip_selected());
}

#[test]
fn reinitialize_does_not_rewrite_antenna() {
    let chip = MockChip::new();
    let (mut device, _) = common::initialized_mock_device(&chip);

    device.reinitialize().unwrap();
    assert!(chip.writes_to(Register::TxControl).is_empty());
    assert_eq!(chip.register(Register::TxControl), 0x83);
}

#[test]
fn stuck_power_down_is_tolerated_by_default() {
    let chip = MockChip::new();
    chip.set_power_down_reads(usize::MAX);
    let (device, delay) = common::mock_device(&chip);

    assert!(device.initialize().is_ok());
    assert_eq!(delay.elapsed(), ms(150));
}

#[test]
fn stuck_power_down_fails_when_strict() {
    let chip = MockChip::new();
    chip.set_power_down_reads(usize::MAX);
    let (device, _) = common::mock_device_with(&chip, ReaderConfig::strict());
    assert!(matches!(device.initialize(), Err(Error::ResetTimeout)));
}
