#[path = "../common/mod.rs"]
mod common;

use mfrc522_gate::card::CardIdentifier;
use mfrc522_gate::device::BccPolicy;
use mfrc522_gate::{Error, Uid};

#[test]
fn reference_buffer_validates() {
    let id = CardIdentifier::assemble(&common::reference_response(), BccPolicy::Strict).unwrap();
    assert_eq!(id.to_string(), "A2:FC:4F:05");
    assert_eq!(id.uid().to_hex(), "a2fc4f05");
}

#[test]
fn corrupted_buffer_depends_on_policy() {
    let response = common::corrupted_response();

    let id = CardIdentifier::assemble(&response, BccPolicy::Lenient).unwrap();
    assert!(!id.bcc_valid());
    assert_eq!(id.to_colon_hex(), "A2:FC:4F:05");

    assert!(matches!(
        CardIdentifier::assemble(&response, BccPolicy::Strict),
        Err(Error::BccMismatch {
            expected: 0x14,
            actual: 0x00
        })
    ));
}

#[test]
fn wrong_check_byte_0x5a_is_a_mismatch() {
    let response = common::mistyped_check_response();

    let id = CardIdentifier::assemble(&response, BccPolicy::Lenient).unwrap();
    assert_eq!(id.to_colon_hex(), "A2:FC:4F:05");
    assert_eq!(id.bcc(), 0x5A);
    assert!(!id.bcc_valid());

    assert!(matches!(
        CardIdentifier::assemble(&response, BccPolicy::Strict),
        Err(Error::BccMismatch {
            expected: 0x14,
            actual: 0x5A
        })
    ));
}

#[test]
fn uid_length_limits() {
    assert!(Uid::try_from(&[0u8; 10][..]).is_ok());
    assert!(matches!(
        Uid::try_from(&[0u8; 11][..]),
        Err(Error::InvalidLength { .. })
    ));
    assert!(Uid::try_from(&[][..]).is_err());
}
