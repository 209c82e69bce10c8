use nfcdev::protocol::messages::{DiscoverParams, Message, TransceiveFrame};
use nfcdev::protocol::{SessionState, SessionTracker};
use nfcdev::{Error, Protocols, TransceiveFlags};

use crate::common::fixtures;

fn read_request(block: u8) -> Message {
    Message::TransceiveFrameRequest(nfcdev::tag::st25tb::read_block_request(block))
}

#[test]
fn st25tb_tool_sequence() {
    // Same order as the ST25TB user data tool: select-discover, read the
    // system block and the user blocks, go idle, discover again.
    let mut t = SessionTracker::new();
    let discover = Message::DiscoverModeRequest(DiscoverParams::new(Protocols::ST25TB).select());

    for _ in 0..2 {
        t.on_sent(&discover).unwrap();
        t.on_received(&Message::SelectedTag(fixtures::st25tb_info()))
            .unwrap();
        for block in std::iter::once(255u8).chain(7..=15) {
            t.on_sent(&read_request(block)).unwrap();
            t.on_received(&fixtures::read_block_response([0, 0, 0, block]))
                .unwrap();
        }
        t.on_sent(&Message::IdleModeRequest).unwrap();
        t.on_received(&Message::IdleModeAcknowledge).unwrap();
        assert_eq!(t.state(), SessionState::Idle);
    }
}

#[test]
fn selected_tag_without_select_flag_is_rejected() {
    let mut t = SessionTracker::new();
    t.on_sent(&Message::DiscoverModeRequest(DiscoverParams::default()))
        .unwrap();
    assert!(matches!(
        t.on_received(&Message::SelectedTag(fixtures::st25tb_info())),
        Err(Error::InvalidTransition { .. })
    ));
}

#[test]
fn unsolicited_transceive_response_is_rejected() {
    let mut t = SessionTracker::new();
    let resp = Message::TransceiveFrameResponse(TransceiveFrame::from_bytes(
        TransceiveFlags::NONE,
        vec![1, 2],
    ));
    assert!(t.on_received(&resp).is_err());
}

#[test]
fn discover_parameters_can_be_updated() {
    let mut t = SessionTracker::new();
    t.on_sent(&Message::DiscoverModeRequest(DiscoverParams::default()))
        .unwrap();
    t.on_sent(&Message::DiscoverModeRequest(DiscoverParams::default().select()))
        .unwrap();
    assert_eq!(t.state(), SessionState::Discovering { select: true });
}

#[test]
fn error_response_returns_to_idle() {
    let mut t = SessionTracker::new();
    t.on_sent(&Message::SelectTag(fixtures::st25tb_info().tag_id().unwrap()))
        .unwrap();
    t.on_received(&Message::SelectedTag(fixtures::st25tb_info()))
        .unwrap();
    t.on_sent(&read_request(7)).unwrap();
    t.on_received(&fixtures::error_response()).unwrap();
    assert_eq!(t.state(), SessionState::Idle);
    assert!(t.on_sent(&read_request(8)).is_err());
}
