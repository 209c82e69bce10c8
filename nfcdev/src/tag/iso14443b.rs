// nfcdev/src/tag/iso14443b.rs
//! ISO-14443-B tag info.

use crate::protocol::parser;
use crate::types::DisplayBytes;
use crate::Result;

/// ISO-14443-B tag info (ATQB fields), fixed 11 bytes.
/// Layout: pupi(4) + application_data(4) + protocol_info(3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iso14443b {
    /// Pseudo-unique PICC identifier, wire order.
    pub pupi: [u8; 4],
    /// Application data, wire order.
    pub application_data: [u8; 4],
    /// Protocol info, wire order.
    pub protocol_info: [u8; 3],
}

impl Iso14443b {
    /// Tag info from its three fields.
    pub fn new(pupi: [u8; 4], application_data: [u8; 4], protocol_info: [u8; 3]) -> Self {
        Self {
            pupi,
            application_data,
            protocol_info,
        }
    }

    /// Decode the 11 bytes that follow the tag type byte.
    pub fn decode(info: &[u8]) -> Result<Self> {
        Ok(Self {
            pupi: parser::array_at(info, 0)?,
            application_data: parser::array_at(info, 4)?,
            protocol_info: parser::array_at(info, 8)?,
        })
    }

    /// Append the 11-byte tag info.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.pupi);
        out.extend_from_slice(&self.application_data);
        out.extend_from_slice(&self.protocol_info);
    }

    /// PUPI in reading order.
    pub fn pupi_display(&self) -> DisplayBytes {
        DisplayBytes::from_wire(&self.pupi)
    }

    /// Application data in reading order.
    pub fn application_data_display(&self) -> DisplayBytes {
        DisplayBytes::from_wire(&self.application_data)
    }

    /// Protocol info in reading order.
    pub fn protocol_info_display(&self) -> DisplayBytes {
        DisplayBytes::from_wire(&self.protocol_info)
    }
}
