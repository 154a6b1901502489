#[path = "../common/mod.rs"]
mod common;

use mfrc522_gate::protocol::{bcc, verify_bcc};

#[test]
fn bcc_of_reference_uid() {
    assert_eq!(bcc(&common::reference_uid()), 0x14);

    let response = common::reference_response();
    let (check, uid) = response.split_last().unwrap();
    assert!(verify_bcc(uid, *check));

    let corrupted = common::corrupted_response();
    let (check, uid) = corrupted.split_last().unwrap();
    assert!(!verify_bcc(uid, *check));
}

#[test]
fn bcc_of_seven_byte_uid() {
    let uid = hex::decode("04112233445566").unwrap();
    let expected = uid.iter().fold(0u8, |acc, b| acc ^ b);
    assert_eq!(bcc(&uid), expected);
}
