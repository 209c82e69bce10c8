//! Hexadecimal helpers used for logging and display purposes.
//!
//! Compact, spaced and colon separated output are supported, plus a simple
//! parser that accepts optional whitespace and colons.

use std::fmt::Write;

fn join_hex(bytes: &[u8], sep: Option<char>) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if let (Some(sep), true) = (sep, i != 0) {
            s.push(sep);
        }
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    join_hex(bytes, None)
}

/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    join_hex(bytes, Some(' '))
}

/// Example: `&[0xde, 0xad]` -> `"de:ad"`
pub fn bytes_to_hex_colon(bytes: &[u8]) -> String {
    join_hex(bytes, Some(':'))
}

/// Render a little-endian (wire order) field the way humans read it:
/// bytes reversed, then colon joined.
///
/// Example: `&[0x44, 0x00]` -> `"00:44"`
pub fn wire_to_display_hex(wire: &[u8]) -> String {
    crate::types::DisplayBytes::from_wire(wire).to_string()
}

/// Parse a hex string into bytes.
///
/// ASCII whitespace and `:` separators are ignored. Returns an error message
/// string on parse failure.
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
            u8::from_str_radix(&pair, 16).map_err(|e| format!("invalid hex pair '{}': {}", pair, e))
        })
        .collect()
}
