// fixtures.rs — commonly used cards and anticollision responses

use mfrc522_gate::transport::mock::{MockCard, MockChip};

/// UID of the reference card enrolled on the gate.
pub fn reference_uid() -> [u8; 4] {
    [0xA2, 0xFC, 0x4F, 0x05]
}

/// Anticollision response of the reference card, BCC included.
pub fn reference_response() -> Vec<u8> {
    hex::decode("A2FC4F0514").unwrap()
}

/// Same response with a zeroed check byte.
pub fn corrupted_response() -> Vec<u8> {
    hex::decode("A2FC4F0500").unwrap()
}

/// Reference UID followed by 0x5A, which is not its XOR check byte.
pub fn mistyped_check_response() -> Vec<u8> {
    hex::decode("A2FC4F055A").unwrap()
}

pub fn mifare_classic_atqa() -> [u8; 2] {
    [0x04, 0x00]
}

pub fn reference_card() -> MockCard {
    MockCard::new(mifare_classic_atqa(), &reference_uid())
}

pub fn chip_with_reference_card() -> MockChip {
    MockChip::with_card(reference_card())
}
