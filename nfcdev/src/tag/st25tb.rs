// nfcdev/src/tag/st25tb.rs
//! ST25TB (ISO-14443-B ST variant) tag info and UID classification.
//!
//! The UID travels least significant byte first. In reading order it is
//! `D0 <manufacturer> <model+serial...>`: byte 0 is the fixed `0xD0` prefix,
//! byte 1 the IC manufacturer code, and from byte 2 on a product code packed
//! together with the serial number. Depending on the product line the code
//! uses the top 6 bits of byte 2 or the whole byte.

use log::warn;

use crate::constants::{
    ST25TB_BLOCK_LEN, ST25TB_COMMAND_READ_BLOCK, ST25TB_COMMAND_WRITE_BLOCK,
    ST25TB_READ_RESPONSE_LEN, ST25TB_UID_LEN, ST25TB_UID_MSB,
};
use crate::protocol::messages::TransceiveFrame;
use crate::protocol::parser;
use crate::tag::tables::{self, ModelEntry};
use crate::types::{DisplayBytes, TransceiveFlags};
use crate::{Error, Result};

/// ST25TB tag info: the 8-byte UID in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct St25tb {
    uid: [u8; ST25TB_UID_LEN],
}

impl St25tb {
    /// Tag info from a UID in wire order.
    pub fn new(uid: [u8; ST25TB_UID_LEN]) -> Self {
        Self { uid }
    }

    /// Build from a UID written in reading order (`d0:02:...`).
    pub fn from_logical_uid(mut logical: [u8; ST25TB_UID_LEN]) -> Self {
        logical.reverse();
        Self { uid: logical }
    }

    /// Decode the 8-byte UID that follows the tag type byte.
    pub fn decode(info: &[u8]) -> Result<Self> {
        Ok(Self {
            uid: parser::array_at(info, 0)?,
        })
    }

    /// Append the UID in wire order.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.uid);
    }

    /// UID as transmitted.
    pub fn uid(&self) -> &[u8; ST25TB_UID_LEN] {
        &self.uid
    }

    /// UID in reading order (most significant byte first).
    pub fn logical_uid(&self) -> [u8; ST25TB_UID_LEN] {
        let mut uid = self.uid;
        uid.reverse();
        uid
    }

    /// UID in reading order, e.g. `d0:02:1b:...`.
    pub fn uid_display(&self) -> DisplayBytes {
        DisplayBytes::from_wire(&self.uid)
    }

    /// Manufacturer, model and serial number of this tag.
    pub fn identity(&self) -> St25tbIdentity {
        identify(self.logical_uid())
    }
}

/// Product matched in a manufacturer's model table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct St25tbModel {
    /// Product name.
    pub name: &'static str,
    /// Number of bits of UID byte 2 holding the product code (6 or 8).
    pub width: u8,
    /// Product code, right aligned.
    pub pattern: u8,
}

impl St25tbModel {
    /// Bits of UID byte 2 left over for the serial number.
    pub fn residual_bits(&self) -> u8 {
        8 - self.width
    }
}

impl From<&ModelEntry> for St25tbModel {
    fn from(entry: &ModelEntry) -> Self {
        Self {
            name: entry.name,
            width: entry.width,
            pattern: entry.pattern,
        }
    }
}

/// Manufacturer, product and serial number derived from an ST25TB UID.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct St25tbIdentity {
    logical_uid: [u8; ST25TB_UID_LEN],
    manufacturer_code: u8,
    manufacturer: Option<&'static str>,
    model: Option<St25tbModel>,
    #[cfg_attr(feature = "serde", serde(skip))]
    serial: DisplayBytes,
}

impl St25tbIdentity {
    /// UID in reading order.
    pub fn logical_uid(&self) -> &[u8; ST25TB_UID_LEN] {
        &self.logical_uid
    }

    /// False when the UID does not start with `0xD0`. Advisory only.
    pub fn msb_ok(&self) -> bool {
        self.logical_uid[0] == ST25TB_UID_MSB
    }

    /// IC manufacturer code, UID byte 1.
    pub fn manufacturer_code(&self) -> u8 {
        self.manufacturer_code
    }

    /// `None` for manufacturer codes missing from the reference table.
    pub fn manufacturer(&self) -> Option<&'static str> {
        self.manufacturer
    }

    /// `None` when the product code is not in the manufacturer's table,
    /// or when the manufacturer itself is unknown.
    pub fn model(&self) -> Option<&St25tbModel> {
        self.model.as_ref()
    }

    /// Raw UID byte 2, reported alongside an unknown model.
    pub fn model_byte(&self) -> u8 {
        self.logical_uid[2]
    }

    /// Serial number in reading order: 5 bytes after a full-byte product
    /// code, otherwise 6 bytes with any matched product bits cleared.
    pub fn serial(&self) -> &DisplayBytes {
        &self.serial
    }
}

/// Find the first entry of `manufacturer`'s table matching `model_byte`.
/// Returns the entry and the byte with the matched code bits cleared.
pub fn match_model(manufacturer: u8, model_byte: u8) -> Option<(&'static ModelEntry, u8)> {
    let table = tables::models_for(manufacturer)?;
    table.iter().find_map(|entry| {
        let shift = 8u32.saturating_sub(entry.width as u32);
        let code = model_byte.checked_shr(shift).unwrap_or(0);
        if code != entry.pattern {
            return None;
        }
        let cleared = model_byte & !entry.pattern.checked_shl(shift).unwrap_or(0);
        Some((entry, cleared))
    })
}

/// Classify a UID given in reading order (already reversed from the wire).
pub fn identify(logical_uid: [u8; ST25TB_UID_LEN]) -> St25tbIdentity {
    let mut uid = logical_uid;
    if uid[0] != ST25TB_UID_MSB {
        warn!("st25tb: unexpected UID MSB, got {:#04x}", uid[0]);
    }

    let manufacturer_code = uid[1];
    let manufacturer = tables::manufacturer_name(manufacturer_code);
    let mut serial_start = 2;
    let mut model = None;

    if manufacturer.is_none() {
        warn!("st25tb: unknown manufacturer {:#04x}", manufacturer_code);
    } else if let Some((entry, cleared)) = match_model(manufacturer_code, uid[2]) {
        if entry.width < 8 {
            uid[2] = cleared;
        } else {
            serial_start = 3;
        }
        model = Some(St25tbModel::from(entry));
    } else {
        warn!(
            "st25tb: unknown model {:#04x} for manufacturer {:#04x}",
            uid[2], manufacturer_code
        );
    }

    St25tbIdentity {
        logical_uid,
        manufacturer_code,
        manufacturer,
        model,
        serial: DisplayBytes::from_display_order(uid[serial_start..].to_vec()),
    }
}

/// Transceive request reading one 4-byte block.
pub fn read_block_request(block: u8) -> TransceiveFrame {
    TransceiveFrame::from_bytes(
        TransceiveFlags::NONE,
        vec![ST25TB_COMMAND_READ_BLOCK, block],
    )
}

/// Transceive request writing one block. The tag does not answer a write.
pub fn write_block_request(block: u8, data: [u8; ST25TB_BLOCK_LEN]) -> TransceiveFrame {
    let mut tx = Vec::with_capacity(2 + ST25TB_BLOCK_LEN);
    tx.push(ST25TB_COMMAND_WRITE_BLOCK);
    tx.push(block);
    tx.extend_from_slice(&data);
    TransceiveFrame::from_bytes(TransceiveFlags::TX_ONLY, tx)
}

/// Extract block data from a read response. The data is least significant
/// byte first.
pub fn parse_read_block_response(response: &TransceiveFrame) -> Result<[u8; ST25TB_BLOCK_LEN]> {
    if response.is_error() {
        return Err(Error::TransceiveFailed);
    }
    if response.count != ST25TB_READ_RESPONSE_LEN {
        warn!(
            "st25tb: unexpected response length, rx_count={} != {}",
            response.count, ST25TB_READ_RESPONSE_LEN
        );
    }
    parser::array_at(&response.data, 0)
}
