#[path = "../common/mod.rs"]
mod common;

use mfrc522_gate::device::ReaderConfig;
use mfrc522_gate::transport::mock::{CardReply, MockCard, MockChip};
use mfrc522_gate::{Error, Stage, TimeoutCause};

#[test]
fn reads_reference_card() {
    common::init_logging();
    let chip = common::chip_with_reference_card();
    let (mut device, _) = common::initialized_mock_device(&chip);

    let id = device.acquire_identifier().unwrap();
    assert_eq!(id.to_colon_hex(), "A2:FC:4F:05");
    assert_eq!(id.uid().as_bytes(), &common::reference_uid());
    assert!(id.bcc_valid());
}

#[test]
fn no_card_within_poll_budget() {
    let chip = MockChip::new();
    let (mut device, delay) = common::initialized_mock_device(&chip);
    delay.reset();

    assert!(matches!(device.acquire_identifier(), Err(Error::NoCardPresent)));
    assert!(delay.elapsed() <= device.config().transceive_poll.budget());
}

#[test]
fn never_completing_irq_takes_exactly_fifty_intervals() {
    let mut card = common::reference_card();
    card.request = CardReply::silent();
    let chip = MockChip::with_card(card);
    let (mut device, delay) = common::initialized_mock_device(&chip);
    delay.reset();

    let err = device.acquire_identifier().unwrap_err();
    assert!(matches!(
        err,
        Error::ProtocolTimeout {
            stage: Stage::Presence,
            cause: TimeoutCause::PollBudgetExhausted
        }
    ));
    assert!(err.is_transient());
    assert_eq!(delay.elapsed(), device.config().transceive_poll.interval * 50);
}

#[test]
fn three_bytes_during_presence_is_malformed() {
    let mut card = common::reference_card();
    card.request = card.request.with_fifo_level(3);
    let chip = MockChip::with_card(card);
    let (mut device, _) = common::initialized_mock_device(&chip);

    assert!(matches!(
        device.request(),
        Err(Error::MalformedResponse {
            stage: Stage::Presence,
            expected: 2,
            actual: 3
        })
    ));
}

#[test]
fn corrupted_check_byte_lenient_and_strict() {
    let response = common::corrupted_response();
    let chip = MockChip::with_card(MockCard::with_raw_response(
        common::mifare_classic_atqa(),
        &response,
    ));

    let (mut lenient, _) = common::initialized_mock_device(&chip);
    let id = lenient.acquire_identifier().unwrap();
    assert_eq!(id.to_colon_hex(), "A2:FC:4F:05");
    assert!(!id.bcc_valid());

    let (mut strict, _) = common::initialized_mock_device_with(&chip, ReaderConfig::strict());
    assert!(matches!(
        strict.acquire_identifier(),
        Err(Error::BccMismatch { .. })
    ));
}

#[test]
fn anticollision_without_request_still_runs() {
    let chip = common::chip_with_reference_card();
    let (mut device, _) = common::initialized_mock_device(&chip);

    let id = device.anticollision().unwrap();
    assert_eq!(id.bcc(), 0x14);
    assert_eq!(chip.transmitted(), vec![(vec![0x93, 0x20], 0)]);
}
