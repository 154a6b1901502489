#[path = "../common/mod.rs"]
mod common;

use mfrc522_gate::transport::mock::MockChip;
use mfrc522_gate::transport::RegisterTransport;
use mfrc522_gate::types::Register;
use mfrc522_gate::Error;

#[test]
fn bus_failure_and_recovery() {
    let chip = MockChip::new();
    let mut transport = chip.transport();
    transport.configure().unwrap();
    chip.fail_next_exchanges(1);

    assert!(matches!(
        transport.read(Register::Version),
        Err(Error::TransportFault(_))
    ));
    // Chip select is released even though the exchange failed.
    assert!(!chip.chip_selected());

    assert_eq!(transport.read(Register::Version).unwrap(), 0x92);
}

#[test]
fn fault_during_acquire_is_fatal() {
    let chip = common::chip_with_reference_card();
    let (mut device, _) = common::initialized_mock_device(&chip);
    chip.fail_next_exchanges(1);

    let err = device.acquire_identifier().unwrap_err();
    assert!(matches!(err, Error::TransportFault(_)));
    assert!(!err.is_transient());
}
