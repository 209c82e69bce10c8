// nfcdev/src/transport/traits.rs
//! The transport abstraction the device handle is written against.

use crate::Result;

/// Transport trait abstracts the byte stream away from protocol/device logic.
///
/// Reads block until the requested number of bytes is available; the
/// protocol has no timeouts of its own.
pub trait Transport {
    /// Write raw bytes to the device
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Read exactly `len` bytes from the device
    fn receive_exact(&mut self, len: usize) -> Result<Vec<u8>>;

    /// Query the protocol version the driver speaks
    fn protocol_version(&mut self) -> Result<u64>;
}
