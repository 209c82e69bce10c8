// fixtures.rs: commonly used tag infos and raw payloads

use nfcdev::protocol::messages::{Message, TransceiveFrame};
use nfcdev::tag::{Iso14443a, Iso14443a4, Iso14443a4Kind, Iso14443aKind, Iso14443b, St25tb, TagInfo};
use nfcdev::types::TransceiveFlags;

/// ST25TB512-AC UID in reading order.
pub fn st25tb_logical_uid() -> [u8; 8] {
    [0xD0, 0x02, 0x1B, 0x11, 0x22, 0x33, 0x44, 0x55]
}

/// Same UID as transmitted.
pub fn st25tb_wire_uid() -> [u8; 8] {
    [0x55, 0x44, 0x33, 0x22, 0x11, 0x1B, 0x02, 0xD0]
}

pub fn st25tb_info() -> TagInfo {
    TagInfo::St25tb(St25tb::new(st25tb_wire_uid()))
}

/// DetectedTag payload for an ST25TB.
pub fn st25tb_payload() -> Vec<u8> {
    let mut p = vec![17u8];
    p.extend_from_slice(&st25tb_wire_uid());
    p
}

pub fn t2t_uid() -> [u8; 7] {
    [0x04, 0x5A, 0x3B, 0x22, 0x91, 0x6C, 0x80]
}

/// DetectedTag payload for an NTAG-like T2T tag: only uid_len UID bytes.
pub fn t2t_payload() -> Vec<u8> {
    let mut p = vec![2u8, 0x44, 0x00, 0x00, 7];
    p.extend_from_slice(&t2t_uid());
    p
}

pub fn t2t_info() -> TagInfo {
    TagInfo::Iso14443a(
        Iso14443aKind::T2t,
        Iso14443a::new([0x44, 0x00], 0x00, &t2t_uid()).unwrap(),
    )
}

pub fn mifare_classic_info(sak: u8) -> TagInfo {
    TagInfo::Iso14443a(
        Iso14443aKind::MifareClassic,
        Iso14443a::new([0x04, 0x00], sak, &[0xDE, 0xAD, 0xBE, 0xEF]).unwrap(),
    )
}

pub fn t4t_ats() -> [u8; 5] {
    [0x75, 0x77, 0x81, 0x02, 0x80]
}

/// DetectedTag payload for a T4T tag: the UID area is padded to 10 bytes
/// and ats_len sits right after it.
pub fn t4t_payload() -> Vec<u8> {
    let mut p = vec![6u8, 0x04, 0x00, 0x20, 4, 0x01, 0x02, 0x03, 0x04];
    p.extend_from_slice(&[0u8; 6]);
    p.push(5);
    p.extend_from_slice(&t4t_ats());
    p
}

pub fn t4t_info() -> TagInfo {
    let base = Iso14443a::new([0x04, 0x00], 0x20, &[0x01, 0x02, 0x03, 0x04]).unwrap();
    TagInfo::Iso14443a4(
        Iso14443a4Kind::T4t,
        Iso14443a4::new(base, &t4t_ats()).unwrap(),
    )
}

pub fn iso14443b_info() -> TagInfo {
    TagInfo::Iso14443b(Iso14443b::new(
        [0x11, 0x22, 0x33, 0x44],
        [0x00, 0x00, 0x00, 0x00],
        [0x80, 0x71, 0x71],
    ))
}

/// ST25TB read block response: 4 data bytes followed by the CRC.
pub fn read_block_response(data: [u8; 4]) -> Message {
    let mut bytes = data.to_vec();
    bytes.extend_from_slice(&[0x12, 0x34]);
    Message::TransceiveFrameResponse(TransceiveFrame::from_bytes(TransceiveFlags::NONE, bytes))
}

pub fn error_response() -> Message {
    Message::TransceiveFrameResponse(TransceiveFrame::new(0, TransceiveFlags::ERROR, vec![]))
}
