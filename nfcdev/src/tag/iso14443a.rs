// nfcdev/src/tag/iso14443a.rs
//! ISO-14443-A and ISO-14443-A-4 tag info.

use crate::constants::{
    ISO14443A4_ATS_LEN_OFFSET, ISO14443A4_MAX_ATS_LEN, ISO14443A_MAX_UID_LEN,
};
use crate::protocol::parser;
use crate::types::{DisplayBytes, WireBytes};
use crate::{Error, Result};

/// ISO-14443-A tag info.
/// Layout: atqa(2) + sak(1) + uid_len(1) + uid(uid_len)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iso14443a {
    atqa: [u8; 2],
    sak: u8,
    uid: WireBytes,
}

impl Iso14443a {
    /// UIDs are 4, 7 or 10 bytes; anything above 10 cannot be encoded.
    pub fn new(atqa: [u8; 2], sak: u8, uid: &[u8]) -> Result<Self> {
        if uid.len() > ISO14443A_MAX_UID_LEN {
            return Err(Error::PayloadTooLarge {
                max: ISO14443A_MAX_UID_LEN,
                actual: uid.len(),
            });
        }
        Ok(Self {
            atqa,
            sak,
            uid: WireBytes::from_slice(uid),
        })
    }

    /// Decode the tag info that follows the tag type byte.
    pub fn decode(info: &[u8]) -> Result<Self> {
        let atqa = parser::array_at(info, 0)?;
        let sak = parser::byte_at(info, 2)?;
        let uid = parser::declared_slice_at(info, "uid", 3, 4, ISO14443A_MAX_UID_LEN)?;
        Ok(Self {
            atqa,
            sak,
            uid: WireBytes::from_slice(uid),
        })
    }

    /// Append the tag info, without the tag type byte.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.atqa);
        out.push(self.sak);
        out.push(self.uid.len() as u8);
        out.extend_from_slice(self.uid.as_slice());
    }

    /// ATQA in wire order.
    pub fn atqa(&self) -> &[u8; 2] {
        &self.atqa
    }

    /// SAK byte.
    pub fn sak(&self) -> u8 {
        self.sak
    }

    /// UID in wire order.
    pub fn uid(&self) -> &WireBytes {
        &self.uid
    }

    /// ATQA in reading order.
    pub fn atqa_display(&self) -> DisplayBytes {
        DisplayBytes::from_wire(&self.atqa)
    }

    /// UID in reading order.
    pub fn uid_display(&self) -> DisplayBytes {
        self.uid.to_display_order()
    }

    /// Product name of a MIFARE Classic tag, derived from its SAK.
    pub fn mifare_classic_product(&self) -> Option<&'static str> {
        match self.sak {
            0x08 => Some("NXP MIFARE Classic 1k"),
            0x18 => Some("NXP MIFARE Classic 4k"),
            _ => None,
        }
    }
}

/// ISO-14443-A-4 tag info: ISO-14443-A fields with the UID area padded to
/// its full 10 bytes, followed by the ATS.
/// Layout: atqa(2) + sak(1) + uid_len(1) + uid(10) + ats_len(1) + ats(ats_len)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iso14443a4 {
    base: Iso14443a,
    ats: WireBytes,
}

impl Iso14443a4 {
    /// ATS longer than 254 bytes cannot be encoded.
    pub fn new(base: Iso14443a, ats: &[u8]) -> Result<Self> {
        if ats.len() > ISO14443A4_MAX_ATS_LEN {
            return Err(Error::PayloadTooLarge {
                max: ISO14443A4_MAX_ATS_LEN,
                actual: ats.len(),
            });
        }
        Ok(Self {
            base,
            ats: WireBytes::from_slice(ats),
        })
    }

    /// Decode the tag info that follows the tag type byte.
    pub fn decode(info: &[u8]) -> Result<Self> {
        let base = Iso14443a::decode(info)?;
        let ats = parser::declared_slice_at(
            info,
            "ats",
            ISO14443A4_ATS_LEN_OFFSET,
            ISO14443A4_ATS_LEN_OFFSET + 1,
            ISO14443A4_MAX_ATS_LEN,
        )?;
        Ok(Self {
            base,
            ats: WireBytes::from_slice(ats),
        })
    }

    /// Append the tag info with the UID area padded to 10 bytes.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        let start = out.len();
        self.base.encode_into(out);
        // pad the uid area to its fixed size
        out.resize(start + ISO14443A4_ATS_LEN_OFFSET, 0);
        out.push(self.ats.len() as u8);
        out.extend_from_slice(self.ats.as_slice());
    }

    /// The ISO-14443-A fields.
    pub fn base(&self) -> &Iso14443a {
        &self.base
    }

    /// ATS in wire order.
    pub fn ats(&self) -> &WireBytes {
        &self.ats
    }

    /// ATS in reading order.
    pub fn ats_display(&self) -> DisplayBytes {
        self.ats.to_display_order()
    }
}
