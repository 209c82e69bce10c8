// nfcdev/src/constants.rs
//! Common protocol constants used across the crate

/// Path of the first NFC character device.
pub const DEFAULT_DEVICE_PATH: &str = "/dev/nfc0";

/// Protocol version reported by the driver's version ioctl ("NFC" + 1).
pub const NFC_PROTOCOL_VERSION_1: u64 = 0x004E_4643_0000_0001;

/// `_IOR('N', 0, uint64_t)` on Linux.
pub const NFC_RD_GET_PROTOCOL_VERSION: u64 =
    (2 << 30) | ((std::mem::size_of::<u64>() as u64) << 16) | ((b'N' as u64) << 8);

/// Header: message type (1) + payload length (2, little endian).
pub const HEADER_LEN: usize = 3;

/// Largest payload the 16-bit length field can describe.
pub const MAX_PAYLOAD_LEN: usize = u16::MAX as usize;

// Message types
/// Host asks for the chip model.
pub const IDENTIFY_REQUEST: u8 = 0;
/// Chip model text.
pub const IDENTIFY_RESPONSE: u8 = 1;
/// Host asks the device to stop discovering or release the tag.
pub const IDLE_MODE_REQUEST: u8 = 2;
/// Device went idle.
pub const IDLE_MODE_ACKNOWLEDGE: u8 = 3;
/// Start or update polling.
pub const DISCOVER_MODE_REQUEST: u8 = 4;
/// Tag seen while polling.
pub const DETECTED_TAG: u8 = 5;
/// Host asks to select one tag.
pub const SELECT_TAG: u8 = 6;
/// Tag is selected and ready for transceive.
pub const SELECTED_TAG: u8 = 7;
/// Frame to send to the selected tag.
pub const TRANSCEIVE_FRAME_REQUEST: u8 = 8;
/// Frame received from the selected tag.
pub const TRANSCEIVE_FRAME_RESPONSE: u8 = 9;

// Tag types
/// Generic ISO-14443-A tag.
pub const TAG_TYPE_ISO14443A: u8 = 1;
/// NFC Forum type 2 tag.
pub const TAG_TYPE_ISO14443A_T2T: u8 = 2;
/// MIFARE Classic.
pub const TAG_TYPE_MIFARE_CLASSIC: u8 = 3;
/// ISO-14443-A tag speaking NFC-DEP.
pub const TAG_TYPE_ISO14443A_NFCDEP: u8 = 4;
/// NFC Forum type 4 tag (ISO-14443-A-4).
pub const TAG_TYPE_ISO14443A_T4T: u8 = 6;
/// Type 4 tag that also speaks NFC-DEP.
pub const TAG_TYPE_ISO14443A_T4T_NFCDEP: u8 = 7;
/// NFC Forum type 1 tag.
pub const TAG_TYPE_ISO14443A_T1T: u8 = 8;
/// ISO-14443-B tag.
pub const TAG_TYPE_ISO14443B: u8 = 16;
/// ST25TB / SRx tag.
pub const TAG_TYPE_ST25TB: u8 = 17;
/// NFC-F (FeliCa) tag.
pub const TAG_TYPE_NFCF: u8 = 24;
/// NFC-F tag speaking NFC-DEP.
pub const TAG_TYPE_NFCF_NFCDEP: u8 = 25;
/// ISO-15693 (NFC-V) tag.
pub const TAG_TYPE_ISO15693: u8 = 32;
/// ST25DV / ST25TV tag.
pub const TAG_TYPE_ISO15693_ST25XV: u8 = 33;

/// Bit index of the ISO-14443-A-4 protocol, which has no tag type of its own.
pub const PROTOCOL_BIT_ISO14443A4: u8 = 5;
/// ISO-14443-B' (Innovatron).
pub const PROTOCOL_BIT_ISO14443BI: u8 = 18;
/// PicoPass / iCLASS.
pub const PROTOCOL_BIT_ISO14443BICLASS: u8 = 19;
/// ASK CTx tags.
pub const PROTOCOL_BIT_ISO14443B2CT: u8 = 20;
/// NFC-DEP peer to peer.
pub const PROTOCOL_BIT_ISO18092: u8 = 48;

/// Discover flag: select the first matching tag and leave discover mode.
pub const DISCOVER_FLAGS_SELECT: u8 = 1;

// Transceive flags
/// Do not append or check a CRC.
pub const TRANSCEIVE_FLAGS_NOCRC: u8 = 1;
/// No CRC and no parity.
pub const TRANSCEIVE_FLAGS_RAW: u8 = 3;
/// Counts are in bits.
pub const TRANSCEIVE_FLAGS_BITS: u8 = 4;
/// Send without waiting for an answer.
pub const TRANSCEIVE_FLAGS_TX_ONLY: u8 = 8;
/// Set by the driver when the exchange failed.
pub const TRANSCEIVE_FLAGS_ERROR: u8 = 128;

/// Size of the driver's transceive data buffers.
pub const TRANSCEIVE_MAX_DATA_LEN: usize = 512;

/// Discover payload: protocols(8) + period(4) + count(1) + bitrate(1) + flags(1)
pub const DISCOVER_PAYLOAD_LEN: usize = 15;

/// Transceive payload prefix: count(2) + flags(1)
pub const TRANSCEIVE_PREFIX_LEN: usize = 3;

// ISO14443A tag info layout
/// Longest ISO-14443-A UID (triple size).
pub const ISO14443A_MAX_UID_LEN: usize = 10;
/// Offset of `ats_len` inside ISO14443A-4 tag info (after the fixed 10-byte UID area).
pub const ISO14443A4_ATS_LEN_OFFSET: usize = 2 + 1 + 1 + ISO14443A_MAX_UID_LEN;
/// Longest ATS the driver reports.
pub const ISO14443A4_MAX_ATS_LEN: usize = 254;

// ISO14443B tag info layout
/// pupi(4) + application_data(4) + protocol_info(3)
pub const ISO14443B_TAG_INFO_LEN: usize = 11;

// ST25TB
/// ST25TB UIDs are always 8 bytes.
pub const ST25TB_UID_LEN: usize = 8;
/// Most significant byte of every ST25TB UID (in display order).
pub const ST25TB_UID_MSB: u8 = 0xD0;
/// READ_BLOCK command code.
pub const ST25TB_COMMAND_READ_BLOCK: u8 = 0x08;
/// WRITE_BLOCK command code.
pub const ST25TB_COMMAND_WRITE_BLOCK: u8 = 0x09;
/// Bytes per block.
pub const ST25TB_BLOCK_LEN: usize = 4;
/// Block data followed by a two byte CRC.
pub const ST25TB_READ_RESPONSE_LEN: u16 = 6;
/// Address of the system (OTP / lock) block.
pub const ST25TB_SYSTEM_BLOCK: u8 = 255;
/// User data blocks read by the dump tool.
pub const ST25TB_USER_BLOCKS: std::ops::RangeInclusive<u8> = 7..=15;
