use nfcdev::protocol::codec;
use nfcdev::protocol::messages::{DiscoverParams, Message, TransceiveFrame};
use nfcdev::tag::{Iso14443a, Iso14443a4, Iso14443a4Kind, Iso14443aKind, Iso14443b, St25tb, TagId, TagInfo};
use nfcdev::{Bitrate, DiscoverFlags, Error, Protocols, TagType, TransceiveFlags, WireBytes};
use proptest::prelude::*;

fn iso14443a_kind() -> impl Strategy<Value = Iso14443aKind> {
    prop::sample::select(vec![
        Iso14443aKind::Generic,
        Iso14443aKind::T2t,
        Iso14443aKind::MifareClassic,
        Iso14443aKind::Nfcdep,
    ])
}

fn iso14443a() -> impl Strategy<Value = Iso14443a> {
    (
        any::<[u8; 2]>(),
        any::<u8>(),
        prop::collection::vec(any::<u8>(), 0..=10),
    )
        .prop_map(|(atqa, sak, uid)| Iso14443a::new(atqa, sak, &uid).unwrap())
}

fn tag_info() -> impl Strategy<Value = TagInfo> {
    prop_oneof![
        (iso14443a_kind(), iso14443a()).prop_map(|(k, a)| TagInfo::Iso14443a(k, a)),
        (
            prop::sample::select(vec![Iso14443a4Kind::T4t, Iso14443a4Kind::T4tNfcdep]),
            iso14443a(),
            prop::collection::vec(any::<u8>(), 0..=254),
        )
            .prop_map(|(k, a, ats)| TagInfo::Iso14443a4(k, Iso14443a4::new(a, &ats).unwrap())),
        (any::<[u8; 4]>(), any::<[u8; 4]>(), any::<[u8; 3]>())
            .prop_map(|(p, a, i)| TagInfo::Iso14443b(Iso14443b::new(p, a, i))),
        any::<[u8; 8]>().prop_map(|uid| TagInfo::St25tb(St25tb::new(uid))),
    ]
}

fn tag_id() -> impl Strategy<Value = TagId> {
    prop_oneof![
        (
            prop::sample::select(vec![
                TagType::Iso14443a,
                TagType::Iso14443aT2t,
                TagType::MifareClassic,
                TagType::Iso14443aNfcdep,
                TagType::Iso14443aT4t,
                TagType::Iso14443aT4tNfcdep,
            ]),
            prop::collection::vec(any::<u8>(), 0..=10),
        )
            .prop_map(|(tag_type, uid)| TagId::Iso14443a {
                tag_type,
                uid: WireBytes::from(uid),
            }),
        any::<[u8; 4]>().prop_map(|pupi| TagId::Iso14443b { pupi }),
        any::<[u8; 8]>().prop_map(|uid| TagId::St25tb { uid }),
    ]
}

fn transceive_frame() -> impl Strategy<Value = TransceiveFrame> {
    (
        any::<u16>(),
        any::<u8>(),
        prop::collection::vec(any::<u8>(), 0..=512),
    )
        .prop_map(|(count, flags, data)| {
            TransceiveFrame::new(count, TransceiveFlags::new(flags), data)
        })
}

fn message() -> impl Strategy<Value = Message> {
    prop_oneof![
        Just(Message::IdentifyRequest),
        any::<String>()
            .prop_filter("NUL ends the chip model", |s| !s.contains('\0'))
            .prop_map(|chip_model| Message::IdentifyResponse { chip_model }),
        Just(Message::IdleModeRequest),
        Just(Message::IdleModeAcknowledge),
        (any::<u64>(), any::<u32>(), any::<u8>(), any::<u8>(), any::<u8>()).prop_map(
            |(protocols, polling_period, device_count, max_bitrate, flags)| {
                Message::DiscoverModeRequest(DiscoverParams {
                    protocols: Protocols::new(protocols),
                    polling_period,
                    device_count,
                    max_bitrate,
                    flags: DiscoverFlags::new(flags),
                })
            }
        ),
        tag_info().prop_map(Message::DetectedTag),
        tag_id().prop_map(Message::SelectTag),
        tag_info().prop_map(Message::SelectedTag),
        transceive_frame().prop_map(Message::TransceiveFrameRequest),
        transceive_frame().prop_map(Message::TransceiveFrameResponse),
    ]
}

proptest! {
    #[test]
    fn every_message_roundtrips(msg in message()) {
        let bytes = codec::encode_message(&msg).unwrap();
        prop_assert_eq!(codec::decode_message(&bytes).unwrap(), msg);
    }

    #[test]
    fn chip_model_roundtrips_or_is_rejected(chip_model in any::<String>()) {
        let msg = Message::IdentifyResponse { chip_model: chip_model.clone() };
        match codec::encode_message(&msg) {
            Ok(bytes) => {
                prop_assert!(!chip_model.contains('\0'));
                prop_assert_eq!(codec::decode_message(&bytes).unwrap(), msg);
            }
            Err(Error::MalformedPayload(_)) => prop_assert!(chip_model.contains('\0')),
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }
}

#[test]
fn chip_model_with_nul_is_rejected() {
    let msg = Message::IdentifyResponse {
        chip_model: "ST25R\u{0}3916".into(),
    };
    assert!(matches!(
        codec::encode_message(&msg),
        Err(Error::MalformedPayload(_))
    ));
}

#[test]
fn discover_request_from_tooling() {
    // What the discovery tool writes: every protocol, no period, no select.
    let msg = Message::DiscoverModeRequest(DiscoverParams::new(Protocols::ALL));
    let bytes = codec::encode_message(&msg).unwrap();
    let mut expected = vec![0x04, 0x0F, 0x00];
    expected.extend_from_slice(&0x0103_00FEu64.to_le_bytes());
    expected.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(bytes, expected);
}

#[test]
fn discover_with_bitrate() {
    let params = DiscoverParams::new(Protocols::ISO14443A | Protocols::ISO14443B)
        .max_bitrate(Bitrate::Kbps848)
        .polling_period(500);
    let bytes = codec::encode_message(&Message::DiscoverModeRequest(params)).unwrap();
    match codec::decode_message(&bytes).unwrap() {
        Message::DiscoverModeRequest(decoded) => {
            assert_eq!(decoded.bitrate(), Some(Bitrate::Kbps848));
            assert_eq!(decoded.polling_period, 500);
            assert!(decoded.protocols.contains(Protocols::ISO14443B));
            assert!(!decoded.protocols.contains(Protocols::ST25TB));
        }
        other => panic!("unexpected message: {:?}", other),
    }
}

#[test]
fn select_st25tb_request_bytes() {
    let id = TagId::St25tb {
        uid: [0x55, 0x44, 0x33, 0x22, 0x11, 0x1B, 0x02, 0xD0],
    };
    let bytes = codec::encode_message(&Message::SelectTag(id)).unwrap();
    assert_eq!(
        bytes,
        vec![0x06, 0x09, 0x00, 17, 0x55, 0x44, 0x33, 0x22, 0x11, 0x1B, 0x02, 0xD0]
    );
}

#[test]
fn read_block_request_bytes() {
    let frame = nfcdev::tag::st25tb::read_block_request(255);
    let bytes = codec::encode_message(&Message::TransceiveFrameRequest(frame)).unwrap();
    assert_eq!(bytes, vec![0x08, 0x05, 0x00, 0x02, 0x00, 0x00, 0x08, 0xFF]);
}
