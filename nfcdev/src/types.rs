// nfcdev/src/types.rs
//! Wire-level enums, flag sets and byte-order newtypes.

use std::fmt;

use derive_more::{BitOr, From, Into};

use crate::constants as c;

/// Message type carried in the first header byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageType {
    /// Ask for the chip model.
    IdentifyRequest = c::IDENTIFY_REQUEST,
    /// Chip model text.
    IdentifyResponse = c::IDENTIFY_RESPONSE,
    /// Leave discover or selected mode.
    IdleModeRequest = c::IDLE_MODE_REQUEST,
    /// Device is idle.
    IdleModeAcknowledge = c::IDLE_MODE_ACKNOWLEDGE,
    /// Start polling.
    DiscoverModeRequest = c::DISCOVER_MODE_REQUEST,
    /// Tag seen while polling.
    DetectedTag = c::DETECTED_TAG,
    /// Select a tag by identifier.
    SelectTag = c::SELECT_TAG,
    /// Tag selected.
    SelectedTag = c::SELECTED_TAG,
    /// Frame for the selected tag.
    TransceiveFrameRequest = c::TRANSCEIVE_FRAME_REQUEST,
    /// Frame from the selected tag.
    TransceiveFrameResponse = c::TRANSCEIVE_FRAME_RESPONSE,
}

impl MessageType {
    /// `None` for codes outside 0..=9.
    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            c::IDENTIFY_REQUEST => Some(Self::IdentifyRequest),
            c::IDENTIFY_RESPONSE => Some(Self::IdentifyResponse),
            c::IDLE_MODE_REQUEST => Some(Self::IdleModeRequest),
            c::IDLE_MODE_ACKNOWLEDGE => Some(Self::IdleModeAcknowledge),
            c::DISCOVER_MODE_REQUEST => Some(Self::DiscoverModeRequest),
            c::DETECTED_TAG => Some(Self::DetectedTag),
            c::SELECT_TAG => Some(Self::SelectTag),
            c::SELECTED_TAG => Some(Self::SelectedTag),
            c::TRANSCEIVE_FRAME_REQUEST => Some(Self::TransceiveFrameRequest),
            c::TRANSCEIVE_FRAME_RESPONSE => Some(Self::TransceiveFrameResponse),
            _ => None,
        }
    }

    /// Wire code.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Variant name, for logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            Self::IdentifyRequest => "IdentifyRequest",
            Self::IdentifyResponse => "IdentifyResponse",
            Self::IdleModeRequest => "IdleModeRequest",
            Self::IdleModeAcknowledge => "IdleModeAcknowledge",
            Self::DiscoverModeRequest => "DiscoverModeRequest",
            Self::DetectedTag => "DetectedTag",
            Self::SelectTag => "SelectTag",
            Self::SelectedTag => "SelectedTag",
            Self::TransceiveFrameRequest => "TransceiveFrameRequest",
            Self::TransceiveFrameResponse => "TransceiveFrameResponse",
        }
    }
}

/// Tag type code. Also used as a bit index in [`Protocols`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagType {
    /// Generic ISO-14443-A.
    Iso14443a = c::TAG_TYPE_ISO14443A,
    /// NFC Forum type 2.
    Iso14443aT2t = c::TAG_TYPE_ISO14443A_T2T,
    /// MIFARE Classic.
    MifareClassic = c::TAG_TYPE_MIFARE_CLASSIC,
    /// ISO-14443-A with NFC-DEP.
    Iso14443aNfcdep = c::TAG_TYPE_ISO14443A_NFCDEP,
    /// NFC Forum type 4.
    Iso14443aT4t = c::TAG_TYPE_ISO14443A_T4T,
    /// Type 4 with NFC-DEP.
    Iso14443aT4tNfcdep = c::TAG_TYPE_ISO14443A_T4T_NFCDEP,
    /// NFC Forum type 1.
    Iso14443aT1t = c::TAG_TYPE_ISO14443A_T1T,
    /// ISO-14443-B.
    Iso14443b = c::TAG_TYPE_ISO14443B,
    /// ST25TB / SRx.
    St25tb = c::TAG_TYPE_ST25TB,
    /// NFC-F.
    Nfcf = c::TAG_TYPE_NFCF,
    /// NFC-F with NFC-DEP.
    NfcfNfcdep = c::TAG_TYPE_NFCF_NFCDEP,
    /// ISO-15693.
    Iso15693 = c::TAG_TYPE_ISO15693,
    /// ST25DV / ST25TV.
    Iso15693St25xv = c::TAG_TYPE_ISO15693_ST25XV,
}

impl TagType {
    /// `None` for codes the driver does not define.
    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            c::TAG_TYPE_ISO14443A => Some(Self::Iso14443a),
            c::TAG_TYPE_ISO14443A_T2T => Some(Self::Iso14443aT2t),
            c::TAG_TYPE_MIFARE_CLASSIC => Some(Self::MifareClassic),
            c::TAG_TYPE_ISO14443A_NFCDEP => Some(Self::Iso14443aNfcdep),
            c::TAG_TYPE_ISO14443A_T4T => Some(Self::Iso14443aT4t),
            c::TAG_TYPE_ISO14443A_T4T_NFCDEP => Some(Self::Iso14443aT4tNfcdep),
            c::TAG_TYPE_ISO14443A_T1T => Some(Self::Iso14443aT1t),
            c::TAG_TYPE_ISO14443B => Some(Self::Iso14443b),
            c::TAG_TYPE_ST25TB => Some(Self::St25tb),
            c::TAG_TYPE_NFCF => Some(Self::Nfcf),
            c::TAG_TYPE_NFCF_NFCDEP => Some(Self::NfcfNfcdep),
            c::TAG_TYPE_ISO15693 => Some(Self::Iso15693),
            c::TAG_TYPE_ISO15693_ST25XV => Some(Self::Iso15693St25xv),
            _ => None,
        }
    }

    /// Wire code.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Bit for this tag type in a discover request's protocol mask.
    pub fn protocol(self) -> Protocols {
        Protocols::bit(self.as_u8())
    }

    /// Human readable description, as printed by discovery tools.
    pub fn description(self) -> &'static str {
        match self {
            Self::Iso14443a => "ISO-14443-A generic tag",
            Self::Iso14443aT2t => "ISO-14443-A T2T tag",
            Self::MifareClassic => "MIFARE Classic tag",
            Self::Iso14443aNfcdep => "ISO-14443-A tag with NFCDEP",
            Self::Iso14443aT4t => "ISO-14443-A-4 (T4T) tag",
            Self::Iso14443aT4tNfcdep => "ISO-14443-A-4 (T4T) tag with NFCDEP",
            Self::Iso14443aT1t => "ISO-14443-A T1T tag",
            Self::Iso14443b => "ISO-14443-B tag",
            Self::St25tb => "ST25TB tag",
            Self::Nfcf => "NFC-F tag",
            Self::NfcfNfcdep => "NFC-F tag with NFCDEP",
            Self::Iso15693 => "ISO-15693 tag",
            Self::Iso15693St25xv => "ISO-15693 ST25XV tag",
        }
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Protocols to poll for during discovery. Bit `i` enables tag type `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, From, Into, BitOr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Protocols(u64);

impl Protocols {
    /// No protocol.
    pub const NONE: Self = Self(0);
    /// Generic ISO-14443-A.
    pub const ISO14443A: Self = Self::bit(c::TAG_TYPE_ISO14443A);
    /// Type 2 tags.
    pub const ISO14443A_T2T: Self = Self::bit(c::TAG_TYPE_ISO14443A_T2T);
    /// MIFARE Classic.
    pub const MIFARE_CLASSIC: Self = Self::bit(c::TAG_TYPE_MIFARE_CLASSIC);
    /// ISO-14443-A NFC-DEP.
    pub const ISO14443A_NFCDEP: Self = Self::bit(c::TAG_TYPE_ISO14443A_NFCDEP);
    /// ISO-14443-A-4 transport.
    pub const ISO14443A4: Self = Self::bit(c::PROTOCOL_BIT_ISO14443A4);
    /// Type 4 tags.
    pub const ISO14443A_T4T: Self = Self::bit(c::TAG_TYPE_ISO14443A_T4T);
    /// Type 4 tags with NFC-DEP.
    pub const ISO14443A_T4T_NFCDEP: Self = Self::bit(c::TAG_TYPE_ISO14443A_T4T_NFCDEP);
    /// Type 1 tags.
    pub const ISO14443A_T1T: Self = Self::bit(c::TAG_TYPE_ISO14443A_T1T);
    /// ISO-14443-B.
    pub const ISO14443B: Self = Self::bit(c::TAG_TYPE_ISO14443B);
    /// ST25TB.
    pub const ST25TB: Self = Self::bit(c::TAG_TYPE_ST25TB);
    /// ISO-14443-B'.
    pub const ISO14443BI: Self = Self::bit(c::PROTOCOL_BIT_ISO14443BI);
    /// iCLASS.
    pub const ISO14443BICLASS: Self = Self::bit(c::PROTOCOL_BIT_ISO14443BICLASS);
    /// ASK CTx.
    pub const ISO14443B2CT: Self = Self::bit(c::PROTOCOL_BIT_ISO14443B2CT);
    /// NFC-F.
    pub const NFCF: Self = Self::bit(c::TAG_TYPE_NFCF);
    /// NFC-F NFC-DEP.
    pub const NFCF_NFCDEP: Self = Self::bit(c::TAG_TYPE_NFCF_NFCDEP);
    /// ISO-15693.
    pub const ISO15693: Self = Self::bit(c::TAG_TYPE_ISO15693);
    /// ST25DV / ST25TV.
    pub const ISO15693_ST25XV: Self = Self::bit(c::TAG_TYPE_ISO15693_ST25XV);
    /// NFC-DEP peer to peer.
    pub const ISO18092: Self = Self::bit(c::PROTOCOL_BIT_ISO18092);

    /// Every protocol the reader currently discovers.
    pub const ALL: Self = Self(
        Self::ISO14443A.0
            | Self::ISO14443A_T2T.0
            | Self::MIFARE_CLASSIC.0
            | Self::ISO14443A_NFCDEP.0
            | Self::ISO14443A4.0
            | Self::ISO14443A_T4T.0
            | Self::ISO14443A_T4T_NFCDEP.0
            | Self::ISO14443B.0
            | Self::ST25TB.0
            | Self::NFCF.0,
    );

    /// Wrap a raw mask.
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// Mask with only bit `index` set.
    pub const fn bit(index: u8) -> Self {
        Self(1u64 << index)
    }

    /// Raw mask as sent on the wire.
    pub fn bits(&self) -> u64 {
        self.0
    }

    /// True when every bit of `other` is set.
    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// No protocol enabled.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Enabled bit indices, lowest first.
    pub fn indices(&self) -> impl Iterator<Item = u8> + '_ {
        (0u8..64).filter(move |i| self.0 & (1u64 << i) != 0)
    }
}

/// Flags of a discover mode request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, From, Into, BitOr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscoverFlags(u8);

impl DiscoverFlags {
    /// No flag.
    pub const NONE: Self = Self(0);
    /// Select the first matching tag.
    pub const SELECT: Self = Self(c::DISCOVER_FLAGS_SELECT);

    /// Wrap raw flag bits.
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw flag byte.
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// SELECT is set.
    pub fn select(&self) -> bool {
        self.0 & c::DISCOVER_FLAGS_SELECT != 0
    }
}

/// Flags of transceive requests and responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, From, Into, BitOr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransceiveFlags(u8);

impl TransceiveFlags {
    /// No flag.
    pub const NONE: Self = Self(0);
    /// No CRC appended or checked.
    pub const NOCRC: Self = Self(c::TRANSCEIVE_FLAGS_NOCRC);
    /// No CRC and no parity.
    pub const RAW: Self = Self(c::TRANSCEIVE_FLAGS_RAW);
    /// Counts are in bits rather than bytes.
    pub const BITS: Self = Self(c::TRANSCEIVE_FLAGS_BITS);
    /// Do not wait for an answer.
    pub const TX_ONLY: Self = Self(c::TRANSCEIVE_FLAGS_TX_ONLY);
    /// Exchange failed; tag unselected and field off.
    pub const ERROR: Self = Self(c::TRANSCEIVE_FLAGS_ERROR);

    /// Wrap raw flag bits.
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw flag byte.
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// True when every bit of `other` is set.
    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// BITS is set.
    pub fn is_bits(&self) -> bool {
        self.contains(Self::BITS)
    }

    /// ERROR is set.
    pub fn is_error(&self) -> bool {
        self.contains(Self::ERROR)
    }

    /// Number of data bytes described by `count` under these flags.
    pub fn data_len(&self, count: u16) -> usize {
        if self.is_bits() {
            (count as usize).div_ceil(8)
        } else {
            count as usize
        }
    }
}

/// Maximum bitrate of a discover request (kbit/s).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bitrate {
    /// 1.66 kbit/s
    Kbps1_66 = 1,
    /// 26.48 kbit/s
    Kbps26_48 = 2,
    /// 52.97 kbit/s
    Kbps52_97 = 3,
    /// 106 kbit/s
    Kbps106 = 4,
    /// 212 kbit/s
    Kbps212 = 5,
    /// 424 kbit/s
    Kbps424 = 6,
    /// 848 kbit/s
    Kbps848 = 7,
    /// 1695 kbit/s
    Kbps1695 = 8,
    /// 3390 kbit/s
    Kbps3390 = 9,
    /// 6780 kbit/s
    Kbps6780 = 10,
    /// 13560 kbit/s
    Kbps13560 = 11,
}

impl Bitrate {
    /// `None` for codes outside 1..=11.
    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Kbps1_66),
            2 => Some(Self::Kbps26_48),
            3 => Some(Self::Kbps52_97),
            4 => Some(Self::Kbps106),
            5 => Some(Self::Kbps212),
            6 => Some(Self::Kbps424),
            7 => Some(Self::Kbps848),
            8 => Some(Self::Kbps1695),
            9 => Some(Self::Kbps3390),
            10 => Some(Self::Kbps6780),
            11 => Some(Self::Kbps13560),
            _ => None,
        }
    }

    /// Wire code.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Multi-byte identifier as transmitted: least significant byte first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WireBytes(Vec<u8>);

impl WireBytes {
    /// Copy bytes that are already in wire order.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// Bytes in wire order.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reversed copy for printing.
    pub fn to_display_order(&self) -> DisplayBytes {
        DisplayBytes::from_wire(&self.0)
    }
}

impl AsRef<[u8]> for WireBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Bytes in conventional reading order (most significant first). Only built
/// from wire order, so a value cannot be reversed twice by accident.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayBytes(Vec<u8>);

impl DisplayBytes {
    /// Reverse wire-order bytes into reading order.
    pub fn from_wire(wire: &[u8]) -> Self {
        Self(wire.iter().rev().copied().collect())
    }

    /// Wrap bytes that are already in reading order (e.g. a slice of a
    /// reversed UID).
    pub(crate) fn from_display_order(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Bytes in reading order.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Bytes in reading order.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

/// `de:ad:be:ef`
impl fmt::Display for DisplayBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::bytes_to_hex_colon(&self.0))
    }
}
