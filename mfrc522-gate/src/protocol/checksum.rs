// mfrc522-gate/src/protocol/checksum.rs

/// Compute the Block Check Character of a UID (cascade level) segment.
/// BCC = XOR of all bytes (ISO/IEC 14443-3 section 6.5.3.3)
pub fn bcc(uid: &[u8]) -> u8 {
    uid.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// True when `check` is the BCC of `uid`.
pub fn verify_bcc(uid: &[u8], check: u8) -> bool {
    bcc(uid) == check
}
