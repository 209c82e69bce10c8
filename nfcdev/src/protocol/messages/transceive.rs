// nfcdev/src/protocol/messages/transceive.rs
//! Transceive request and response payload.

use crate::constants::{TRANSCEIVE_MAX_DATA_LEN, TRANSCEIVE_PREFIX_LEN};
use crate::protocol::parser;
use crate::types::TransceiveFlags;
use crate::{Error, Result};

/// Payload shared by transceive requests and responses.
/// Format: [Count(2)] [Flags(1)] [Data(..)]
///
/// `count` is `tx_count` in a request and `rx_count` in a response. It is
/// in bits when `flags` has BITS set, in bytes otherwise. Response flags
/// mirror the request flags, plus ERROR when the exchange failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransceiveFrame {
    /// tx_count or rx_count, in bytes or bits.
    pub count: u16,
    /// Request flags, echoed in the response.
    pub flags: TransceiveFlags,
    /// Frame bytes, at most 512.
    pub data: Vec<u8>,
}

impl TransceiveFrame {
    /// Frame with an explicit count.
    pub fn new(count: u16, flags: TransceiveFlags, data: Vec<u8>) -> Self {
        Self { count, flags, data }
    }

    /// Frame whose count is the byte length of `data`. The count saturates
    /// at `u16::MAX`; such a frame is refused by
    /// [`encode_into`](Self::encode_into) anyway.
    pub fn from_bytes(flags: TransceiveFlags, data: Vec<u8>) -> Self {
        Self {
            count: u16::try_from(data.len()).unwrap_or(u16::MAX),
            flags,
            data,
        }
    }

    /// Frame transmitting the first `bits` bits of `data`.
    pub fn from_bits(flags: TransceiveFlags, bits: u16, data: Vec<u8>) -> Self {
        Self {
            count: bits,
            flags: flags | TransceiveFlags::BITS,
            data,
        }
    }

    /// The driver flagged the exchange as failed.
    pub fn is_error(&self) -> bool {
        self.flags.is_error()
    }

    /// Received data, or `None` when the exchange failed. `count` and
    /// `data` carry no meaning once the error flag is set.
    pub fn valid_data(&self) -> Option<&[u8]> {
        if self.is_error() {
            None
        } else {
            Some(&self.data)
        }
    }

    /// Number of data bytes `count` describes under the current flags.
    pub fn expected_data_len(&self) -> usize {
        self.flags.data_len(self.count)
    }

    /// Append count, flags and data. Fails when `data` exceeds the driver buffers.
    pub fn encode_into(&self, out: &mut Vec<u8>) -> Result<()> {
        if self.data.len() > TRANSCEIVE_MAX_DATA_LEN {
            return Err(Error::PayloadTooLarge {
                max: TRANSCEIVE_MAX_DATA_LEN,
                actual: self.data.len(),
            });
        }
        out.extend_from_slice(&self.count.to_le_bytes());
        out.push(self.flags.bits());
        out.extend_from_slice(&self.data);
        Ok(())
    }

    /// Decode a transceive payload. Everything after the prefix is data;
    /// `count` is kept as sent and not checked against it.
    pub fn decode(payload: &[u8]) -> Result<Self> {
        parser::ensure_len(payload, TRANSCEIVE_PREFIX_LEN)?;
        let data = &payload[TRANSCEIVE_PREFIX_LEN..];
        if data.len() > TRANSCEIVE_MAX_DATA_LEN {
            return Err(Error::MalformedPayload(format!(
                "transceive data is {} bytes, driver buffers hold {}",
                data.len(),
                TRANSCEIVE_MAX_DATA_LEN
            )));
        }
        Ok(Self {
            count: parser::le_u16_at(payload, 0)?,
            flags: TransceiveFlags::new(payload[2]),
            data: data.to_vec(),
        })
    }
}
