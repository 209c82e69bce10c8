// nfcdev/src/protocol/messages/identify.rs
//! Identify response payload.

use crate::{Error, Result};

/// Chip model string of an identify response. The driver sends it without
/// a terminator; a trailing NUL is tolerated.
pub fn decode_chip_model(payload: &[u8]) -> String {
    let end = payload
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(payload.len());
    String::from_utf8_lossy(&payload[..end]).into_owned()
}

/// Append the chip model text. A NUL inside the string would end it early
/// on decode, so it is rejected.
pub fn encode_chip_model(chip_model: &str, out: &mut Vec<u8>) -> Result<()> {
    if chip_model.contains('\0') {
        return Err(Error::MalformedPayload(format!(
            "chip model {:?} contains a NUL byte",
            chip_model
        )));
    }
    out.extend_from_slice(chip_model.as_bytes());
    Ok(())
}
