// nfcdev/src/transport/mock.rs
//! In-memory transport for tests.

use std::collections::VecDeque;

use crate::constants::NFC_PROTOCOL_VERSION_1;
use crate::protocol::codec;
use crate::protocol::messages::Message;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent writes and serves reads
/// from a queued byte stream.
#[derive(Debug)]
pub struct MockTransport {
    /// Every successful write, in order.
    pub sent: Vec<Vec<u8>>,
    /// Bytes served to reads.
    pub incoming: VecDeque<u8>,
    /// Protocol version the mock reports.
    pub version: u64,
    /// Testing hook: number of send calls that should fail with an io error
    pub send_failures: usize,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Mock reporting protocol version 1.
    pub fn new() -> Self {
        Self::with_version(NFC_PROTOCOL_VERSION_1)
    }

    /// Mock reporting `version`.
    pub fn with_version(version: u64) -> Self {
        Self {
            sent: Vec::new(),
            incoming: VecDeque::new(),
            version,
            send_failures: 0,
        }
    }

    /// Set how many subsequent send calls should fail (for tests).
    pub fn set_send_failures(&mut self, n: usize) {
        self.send_failures = n;
    }

    /// Queue raw bytes for reads.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.incoming.extend(bytes.iter().copied());
    }

    /// Queue the encoded form of a device message.
    pub fn push_message(&mut self, msg: &Message) -> Result<()> {
        let bytes = codec::encode_message(msg)?;
        self.push_bytes(&bytes);
        Ok(())
    }

    /// Remove and return the last write.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Decode every recorded write as one message.
    pub fn sent_messages(&self) -> Result<Vec<Message>> {
        self.sent.iter().map(|b| codec::decode_message(b)).collect()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "mock send failure",
            )));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive_exact(&mut self, len: usize) -> Result<Vec<u8>> {
        if self.incoming.len() < len {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("mock has {} bytes queued, {} requested", self.incoming.len(), len),
            )));
        }
        Ok(self.incoming.drain(..len).collect())
    }

    fn protocol_version(&mut self) -> Result<u64> {
        Ok(self.version)
    }
}
