use nfcdev::protocol::codec;
use nfcdev::protocol::messages::Message;
use nfcdev::tag::{Iso14443a4Kind, Iso14443aKind, TagInfo};
use nfcdev::{Error, TagType};

use crate::common::fixtures;

fn with_header(message_type: u8, payload: &[u8]) -> Vec<u8> {
    let mut bytes = vec![message_type];
    bytes.extend_from_slice(&(payload.len() as u16).to_le_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

#[test]
fn t2t_payload_decodes_and_reencodes() {
    let payload = fixtures::t2t_payload();
    let info = TagInfo::decode(&payload).unwrap();
    assert_eq!(info, fixtures::t2t_info());
    assert_eq!(info.encode(), payload);
    assert_eq!(info.tag_type(), TagType::Iso14443aT2t);
}

#[test]
fn t4t_ats_length_at_fixed_offset() {
    let payload = fixtures::t4t_payload();
    let info = TagInfo::decode(&payload).unwrap();
    match &info {
        TagInfo::Iso14443a4(Iso14443a4Kind::T4t, a4) => {
            assert_eq!(a4.base().uid().as_slice(), &[1, 2, 3, 4]);
            assert_eq!(a4.ats().as_slice(), &fixtures::t4t_ats());
        }
        other => panic!("unexpected tag info: {:?}", other),
    }
    assert_eq!(info.encode(), payload);
}

#[test]
fn detected_tag_message_from_raw_bytes() {
    let bytes = with_header(5, &fixtures::st25tb_payload());
    assert_eq!(
        codec::decode_message(&bytes).unwrap(),
        Message::DetectedTag(fixtures::st25tb_info())
    );
    let bytes = with_header(7, &fixtures::st25tb_payload());
    assert_eq!(
        codec::decode_message(&bytes).unwrap(),
        Message::SelectedTag(fixtures::st25tb_info())
    );
}

#[test]
fn uid_len_overrun_is_malformed() {
    // uid_len says 7 but only 4 uid bytes follow
    let payload = [1u8, 0x44, 0x00, 0x00, 7, 1, 2, 3, 4];
    assert!(matches!(
        TagInfo::decode(&payload),
        Err(Error::MalformedPayload(_))
    ));
    // uid_len larger than the UID area
    let payload = [1u8, 0x44, 0x00, 0x00, 11, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
    assert!(matches!(
        TagInfo::decode(&payload),
        Err(Error::MalformedPayload(_))
    ));
}

#[test]
fn ats_len_overrun_is_malformed() {
    let mut payload = fixtures::t4t_payload();
    payload.truncate(payload.len() - 2);
    assert!(matches!(
        TagInfo::decode(&payload),
        Err(Error::MalformedPayload(_))
    ));
}

#[test]
fn missing_fixed_fields_are_truncated() {
    assert!(matches!(
        TagInfo::decode(&[16, 1, 2, 3, 4, 5]),
        Err(Error::Truncated { .. })
    ));
    assert!(matches!(
        TagInfo::decode(&[17, 1, 2, 3]),
        Err(Error::Truncated { .. })
    ));
    assert!(matches!(
        TagInfo::decode(&[1, 0x44]),
        Err(Error::Truncated { .. })
    ));
}

#[test]
fn unknown_tag_type_is_never_ignored() {
    let bytes = with_header(5, &[0x09, 1, 2, 3]);
    assert!(matches!(
        codec::decode_message(&bytes),
        Err(Error::UnknownTagType(0x09))
    ));
}

#[test]
fn mifare_classic_products() {
    for (sak, product) in [
        (0x08, Some("NXP MIFARE Classic 1k")),
        (0x18, Some("NXP MIFARE Classic 4k")),
        (0x09, None),
    ] {
        match fixtures::mifare_classic_info(sak) {
            TagInfo::Iso14443a(Iso14443aKind::MifareClassic, a) => {
                assert_eq!(a.mifare_classic_product(), product)
            }
            other => panic!("unexpected tag info: {:?}", other),
        }
    }
}

#[test]
fn iso14443b_fixed_layout() {
    let info = fixtures::iso14443b_info();
    let bytes = info.encode();
    assert_eq!(bytes.len(), 1 + 11);
    assert_eq!(bytes[0], 16);
    assert_eq!(TagInfo::decode(&bytes).unwrap(), info);
}

// Raw message bytes as the driver writes them, header included.
#[test]
fn decode_captured_traces() -> anyhow::Result<()> {
    let identify = hex::decode("010900535432355233393136")?;
    assert_eq!(
        codec::decode_message(&identify)?,
        Message::IdentifyResponse {
            chip_model: "ST25R3916".into()
        }
    );

    let t4t = hex::decode("051500060400200401020304000000000000057577810280")?;
    assert_eq!(codec::decode_message(&t4t)?, Message::DetectedTag(fixtures::t4t_info()));

    let st25tb = hex::decode("0709001155443322111b02d0")?;
    match codec::decode_message(&st25tb)? {
        Message::SelectedTag(TagInfo::St25tb(tag)) => {
            assert_eq!(tag.identity().model().map(|m| m.name), Some("ST25TB512-AC"));
        }
        other => anyhow::bail!("unexpected message: {:?}", other),
    }
    Ok(())
}
