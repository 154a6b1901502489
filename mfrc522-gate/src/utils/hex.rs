//! Hexadecimal helpers used for identifier display and allow-list parsing.

use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to upper-case hex pairs joined by ':'.
///
/// Example: `&[0xa2, 0xfc]` -> `"A2:FC"`
pub fn bytes_to_hex_colon(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(':');
        }
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// ASCII whitespace and ':' separators are ignored, so both `a2fc4f05` and
/// `A2:FC:4F:05` parse to the same bytes.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: Vec<char> = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();

    if cleaned.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    cleaned
        .chunks(2)
        .map(|pair| {
            let pair: String = pair.iter().collect();
            u8::from_str_radix(&pair, 16)
                .map_err(|e| format!("invalid hex pair '{}': {}", pair, e))
        })
        .collect()
}
