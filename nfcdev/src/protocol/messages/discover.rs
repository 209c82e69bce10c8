// nfcdev/src/protocol/messages/discover.rs
//! Discover mode request payload.

use crate::constants::DISCOVER_PAYLOAD_LEN;
use crate::protocol::parser;
use crate::types::{Bitrate, DiscoverFlags, Protocols};
use crate::{Error, Result};

/// Payload of a discover mode request.
/// Format: [Protocols(8)] [PollingPeriod(4)] [DeviceCount(1)] [MaxBitrate(1)] [Flags(1)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscoverParams {
    /// Protocols to poll for.
    pub protocols: Protocols,
    /// Polling period in milliseconds.
    pub polling_period: u32,
    /// Tags to find before going idle, 0 means no limit.
    pub device_count: u8,
    /// Raw `NFC_BITRATE_*` code, 0 lets the driver choose.
    pub max_bitrate: u8,
    /// Discover flags (SELECT).
    pub flags: DiscoverFlags,
}

impl Default for DiscoverParams {
    fn default() -> Self {
        Self::new(Protocols::ALL)
    }
}

impl DiscoverParams {
    /// Poll for `protocols` with every other field zeroed.
    pub fn new(protocols: Protocols) -> Self {
        Self {
            protocols,
            polling_period: 0,
            device_count: 0,
            max_bitrate: 0,
            flags: DiscoverFlags::NONE,
        }
    }

    /// Set the polling period in milliseconds.
    pub fn polling_period(mut self, ms: u32) -> Self {
        self.polling_period = ms;
        self
    }

    /// Go idle after `count` tags.
    pub fn device_count(mut self, count: u8) -> Self {
        self.device_count = count;
        self
    }

    /// Cap the bitrate.
    pub fn max_bitrate(mut self, bitrate: Bitrate) -> Self {
        self.max_bitrate = bitrate.as_u8();
        self
    }

    /// Select the first matching tag and leave discover mode.
    pub fn select(mut self) -> Self {
        self.flags = self.flags | DiscoverFlags::SELECT;
        self
    }

    /// `max_bitrate` as a [`Bitrate`], `None` for 0 or unknown codes.
    pub fn bitrate(&self) -> Option<Bitrate> {
        Bitrate::from_u8(self.max_bitrate)
    }

    /// Append the 15-byte payload.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.protocols.bits().to_le_bytes());
        out.extend_from_slice(&self.polling_period.to_le_bytes());
        out.push(self.device_count);
        out.push(self.max_bitrate);
        out.push(self.flags.bits());
    }

    /// Decode a payload of exactly 15 bytes.
    pub fn decode(payload: &[u8]) -> Result<Self> {
        parser::ensure_len(payload, DISCOVER_PAYLOAD_LEN)?;
        if payload.len() != DISCOVER_PAYLOAD_LEN {
            return Err(Error::MalformedPayload(format!(
                "discover payload is {} bytes, expected {}",
                payload.len(),
                DISCOVER_PAYLOAD_LEN
            )));
        }
        Ok(Self {
            protocols: Protocols::new(parser::le_u64_at(payload, 0)?),
            polling_period: parser::le_u32_at(payload, 8)?,
            device_count: payload[12],
            max_bitrate: payload[13],
            flags: DiscoverFlags::new(payload[14]),
        })
    }
}
