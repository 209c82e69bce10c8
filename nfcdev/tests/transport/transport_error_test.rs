use nfcdev::transport::{MockTransport, Transport};
use nfcdev::Error;

#[test]
fn send_failure_and_recovery() {
    let mut m = MockTransport::new();
    m.set_send_failures(1);

    // first send fails (simulated)
    assert!(matches!(m.send(&[0x00, 0x00, 0x00]), Err(Error::Io(_))));
    assert!(m.sent.is_empty());

    m.send(&[0x00, 0x00, 0x00]).unwrap();
    assert_eq!(m.sent.len(), 1);
}

#[test]
fn short_read_is_unexpected_eof() {
    let mut m = MockTransport::new();
    m.push_bytes(&[0x05, 0x09]);
    match m.receive_exact(3) {
        Err(Error::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
        other => panic!("unexpected result: {:?}", other),
    }
    // nothing consumed
    assert_eq!(m.incoming.len(), 2);
}
