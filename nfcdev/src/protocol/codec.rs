// nfcdev/src/protocol/codec.rs
//! Whole-message encoding and decoding on top of the header and payload codecs.

use log::trace;

use crate::constants::HEADER_LEN;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

use super::header::MessageHeader;
use super::messages::Message;

/// Encode a Message into header + payload.
pub fn encode_message(msg: &Message) -> Result<Vec<u8>> {
    let payload = msg.encode_payload()?;
    let header = MessageHeader::for_payload(msg.message_type().as_u8(), &payload)?;
    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    out.extend_from_slice(&header.encode());
    out.extend_from_slice(&payload);
    trace!("encode {}: {}", msg.message_type().name(), bytes_to_hex_spaced(&out));
    Ok(out)
}

/// Decode the fixed 3-byte header.
pub fn decode_header(data: &[u8]) -> Result<MessageHeader> {
    MessageHeader::decode(data)
}

/// Decode a payload of the given message type.
pub fn decode_payload(message_type: u8, payload: &[u8]) -> Result<Message> {
    Message::decode(message_type, payload)
}

/// Decode the first complete message in `buf` and return it with the
/// number of bytes it occupied.
pub fn decode_message_prefix(buf: &[u8]) -> Result<(Message, usize)> {
    let header = decode_header(buf)?;
    let end = HEADER_LEN + header.payload_len();
    if buf.len() < end {
        return Err(Error::Truncated {
            expected: end,
            actual: buf.len(),
        });
    }
    trace!("decode: {}", bytes_to_hex_spaced(&buf[..end]));
    let msg = decode_payload(header.message_type, &buf[HEADER_LEN..end])?;
    Ok((msg, end))
}

/// Decode a buffer holding exactly one message.
pub fn decode_message(buf: &[u8]) -> Result<Message> {
    let (msg, used) = decode_message_prefix(buf)?;
    if used != buf.len() {
        return Err(Error::MalformedPayload(format!(
            "{} trailing bytes after {}",
            buf.len() - used,
            msg.message_type().name()
        )));
    }
    Ok(msg)
}
