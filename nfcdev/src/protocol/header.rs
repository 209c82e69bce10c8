// nfcdev/src/protocol/header.rs
//! Three byte message header.

use crate::constants::{HEADER_LEN, MAX_PAYLOAD_LEN};
use crate::protocol::parser;
use crate::{Error, Result};

/// Message header.
/// Format: [Type(1)] [PayloadLength(2, little endian)], packed, no padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageHeader {
    /// Raw message type code.
    pub message_type: u8,
    /// Payload bytes following the header.
    pub payload_length: u16,
}

impl MessageHeader {
    /// Header from raw fields.
    pub fn new(message_type: u8, payload_length: u16) -> Self {
        Self {
            message_type,
            payload_length,
        }
    }

    /// Build the header for a payload, failing if the length field cannot
    /// describe it.
    pub fn for_payload(message_type: u8, payload: &[u8]) -> Result<Self> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLarge {
                max: MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }
        Ok(Self::new(message_type, payload.len() as u16))
    }

    /// Packed wire form.
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let len = self.payload_length.to_le_bytes();
        [self.message_type, len[0], len[1]]
    }

    /// Decode the first three bytes of `data`. Extra bytes are ignored.
    pub fn decode(data: &[u8]) -> Result<Self> {
        parser::ensure_len(data, HEADER_LEN)?;
        Ok(Self {
            message_type: data[0],
            payload_length: parser::le_u16_at(data, 1)?,
        })
    }

    /// `payload_length` as a usize.
    pub fn payload_len(&self) -> usize {
        self.payload_length as usize
    }
}
