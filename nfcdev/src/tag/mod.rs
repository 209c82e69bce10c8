// nfcdev/src/tag/mod.rs
//! Tag descriptors carried by detected/selected tag messages, and the tag
//! identifiers used to select a tag.
//!
//! Every payload starts with a tag type byte that fully determines the
//! layout of the rest. Multi-byte fields (UID, ATQA, ATS, PUPI) are kept in
//! wire order; use the `*_display` accessors to render them.

use crate::constants::{ISO14443A_MAX_UID_LEN, ST25TB_UID_LEN};
use crate::protocol::parser;
use crate::types::{TagType, WireBytes};
use crate::{Error, Result};

mod iso14443a;
mod iso14443b;
pub mod operations;
pub mod st25tb;
pub mod tables;

pub use iso14443a::{Iso14443a, Iso14443a4};
pub use iso14443b::Iso14443b;
pub use st25tb::{St25tb, St25tbIdentity, St25tbModel};

/// ISO-14443-A tag types sharing the plain ISO-14443-A layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Iso14443aKind {
    /// Plain ISO-14443-A.
    Generic,
    /// NFC Forum type 2.
    T2t,
    /// MIFARE Classic.
    MifareClassic,
    /// Speaks NFC-DEP.
    Nfcdep,
}

impl Iso14443aKind {
    /// Tag type code of this kind.
    pub fn tag_type(self) -> TagType {
        match self {
            Self::Generic => TagType::Iso14443a,
            Self::T2t => TagType::Iso14443aT2t,
            Self::MifareClassic => TagType::MifareClassic,
            Self::Nfcdep => TagType::Iso14443aNfcdep,
        }
    }
}

/// ISO-14443-A-4 tag types (with ATS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Iso14443a4Kind {
    /// NFC Forum type 4.
    T4t,
    /// Type 4 that also speaks NFC-DEP.
    T4tNfcdep,
}

impl Iso14443a4Kind {
    /// Tag type code of this kind.
    pub fn tag_type(self) -> TagType {
        match self {
            Self::T4t => TagType::Iso14443aT4t,
            Self::T4tNfcdep => TagType::Iso14443aT4tNfcdep,
        }
    }
}

/// NFC-F tag types. The driver reports no further information for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NfcfKind {
    /// Plain NFC-F.
    Plain,
    /// NFC-F with NFC-DEP.
    Nfcdep,
}

impl NfcfKind {
    /// Tag type code of this kind.
    pub fn tag_type(self) -> TagType {
        match self {
            Self::Plain => TagType::Nfcf,
            Self::Nfcdep => TagType::NfcfNfcdep,
        }
    }
}

/// Payload of DetectedTag and SelectedTag messages: one variant per layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagInfo {
    /// Tag types 1 to 4.
    Iso14443a(Iso14443aKind, Iso14443a),
    /// Tag types 6 and 7.
    Iso14443a4(Iso14443a4Kind, Iso14443a4),
    /// Tag type 16.
    Iso14443b(Iso14443b),
    /// Tag type 17.
    St25tb(St25tb),
    /// Tag types 24 and 25, no payload after the type byte.
    Nfcf(NfcfKind),
}

impl TagInfo {
    /// Tag type byte leading the payload.
    pub fn tag_type(&self) -> TagType {
        match self {
            Self::Iso14443a(kind, _) => kind.tag_type(),
            Self::Iso14443a4(kind, _) => kind.tag_type(),
            Self::Iso14443b(_) => TagType::Iso14443b,
            Self::St25tb(_) => TagType::St25tb,
            Self::Nfcf(kind) => kind.tag_type(),
        }
    }

    /// Decode a tag info payload (tag type byte included).
    pub fn decode(data: &[u8]) -> Result<Self> {
        let code = parser::byte_at(data, 0)?;
        let info = &data[1..];
        let tag_type = TagType::from_u8(code).ok_or(Error::UnknownTagType(code))?;
        match tag_type {
            TagType::Iso14443a => Ok(Self::Iso14443a(
                Iso14443aKind::Generic,
                Iso14443a::decode(info)?,
            )),
            TagType::Iso14443aT2t => Ok(Self::Iso14443a(Iso14443aKind::T2t, Iso14443a::decode(info)?)),
            TagType::MifareClassic => Ok(Self::Iso14443a(
                Iso14443aKind::MifareClassic,
                Iso14443a::decode(info)?,
            )),
            TagType::Iso14443aNfcdep => Ok(Self::Iso14443a(
                Iso14443aKind::Nfcdep,
                Iso14443a::decode(info)?,
            )),
            TagType::Iso14443aT4t => Ok(Self::Iso14443a4(
                Iso14443a4Kind::T4t,
                Iso14443a4::decode(info)?,
            )),
            TagType::Iso14443aT4tNfcdep => Ok(Self::Iso14443a4(
                Iso14443a4Kind::T4tNfcdep,
                Iso14443a4::decode(info)?,
            )),
            TagType::Iso14443b => Ok(Self::Iso14443b(Iso14443b::decode(info)?)),
            TagType::St25tb => Ok(Self::St25tb(St25tb::decode(info)?)),
            TagType::Nfcf => Ok(Self::Nfcf(NfcfKind::Plain)),
            TagType::NfcfNfcdep => Ok(Self::Nfcf(NfcfKind::Nfcdep)),
            // Known protocols the driver never reports tag info for.
            TagType::Iso14443aT1t | TagType::Iso15693 | TagType::Iso15693St25xv => {
                Err(Error::UnknownTagType(code))
            }
        }
    }

    /// Encode the payload (tag type byte included).
    pub fn encode(&self) -> Vec<u8> {
        let mut out = vec![self.tag_type().as_u8()];
        match self {
            Self::Iso14443a(_, a) => a.encode_into(&mut out),
            Self::Iso14443a4(_, a4) => a4.encode_into(&mut out),
            Self::Iso14443b(b) => b.encode_into(&mut out),
            Self::St25tb(st) => st.encode_into(&mut out),
            Self::Nfcf(_) => {}
        }
        out
    }

    /// Identifier that selects this tag again, when the tag type supports
    /// selection.
    pub fn tag_id(&self) -> Option<TagId> {
        match self {
            Self::Iso14443a(kind, a) => Some(TagId::Iso14443a {
                tag_type: kind.tag_type(),
                uid: a.uid().clone(),
            }),
            Self::Iso14443a4(kind, a4) => Some(TagId::Iso14443a {
                tag_type: kind.tag_type(),
                uid: a4.base().uid().clone(),
            }),
            Self::Iso14443b(b) => Some(TagId::Iso14443b { pupi: b.pupi }),
            Self::St25tb(st) => Some(TagId::St25tb { uid: *st.uid() }),
            Self::Nfcf(_) => None,
        }
    }
}

/// True for the tag types the driver selects through ISO-14443-A.
pub fn is_iso14443a_family(tag_type: TagType) -> bool {
    matches!(
        tag_type,
        TagType::Iso14443a
            | TagType::Iso14443aT2t
            | TagType::MifareClassic
            | TagType::Iso14443aNfcdep
            | TagType::Iso14443aT4t
            | TagType::Iso14443aT4tNfcdep
    )
}

/// Payload of a SelectTag request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagId {
    /// Layout: tag_type(1) + uid_len(1) + uid(uid_len)
    Iso14443a { tag_type: TagType, uid: WireBytes },
    /// Layout: tag_type(1) + pupi(4)
    Iso14443b { pupi: [u8; 4] },
    /// Layout: tag_type(1) + uid(8)
    St25tb { uid: [u8; ST25TB_UID_LEN] },
}

impl TagId {
    /// Tag type byte leading the payload.
    pub fn tag_type(&self) -> TagType {
        match self {
            Self::Iso14443a { tag_type, .. } => *tag_type,
            Self::Iso14443b { .. } => TagType::Iso14443b,
            Self::St25tb { .. } => TagType::St25tb,
        }
    }

    /// Decode a SelectTag payload (tag type byte included).
    pub fn decode(data: &[u8]) -> Result<Self> {
        let code = parser::byte_at(data, 0)?;
        let tag_type = TagType::from_u8(code).ok_or(Error::UnknownTagType(code))?;
        match tag_type {
            t if is_iso14443a_family(t) => {
                let uid = parser::declared_slice_at(data, "uid", 1, 2, ISO14443A_MAX_UID_LEN)?;
                Ok(Self::Iso14443a {
                    tag_type: t,
                    uid: WireBytes::from_slice(uid),
                })
            }
            TagType::Iso14443b => Ok(Self::Iso14443b {
                pupi: parser::array_at(data, 1)?,
            }),
            TagType::St25tb => Ok(Self::St25tb {
                uid: parser::array_at(data, 1)?,
            }),
            _ => Err(Error::UnknownTagType(code)),
        }
    }

    /// Encode the SelectTag payload. Fails for tag types that cannot be selected by UID or UIDs over 10 bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = vec![self.tag_type().as_u8()];
        match self {
            Self::Iso14443a { tag_type, uid } => {
                if !is_iso14443a_family(*tag_type) {
                    return Err(Error::MalformedPayload(format!(
                        "tag type {} cannot be selected by uid",
                        tag_type.as_u8()
                    )));
                }
                if uid.len() > ISO14443A_MAX_UID_LEN {
                    return Err(Error::PayloadTooLarge {
                        max: ISO14443A_MAX_UID_LEN,
                        actual: uid.len(),
                    });
                }
                out.push(uid.len() as u8);
                out.extend_from_slice(uid.as_slice());
            }
            Self::Iso14443b { pupi } => out.extend_from_slice(pupi),
            Self::St25tb { uid } => out.extend_from_slice(uid),
        }
        Ok(out)
    }
}
