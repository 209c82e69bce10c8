// nfcdev/src/error.rs
//! Crate-wide error type.

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// The character device does not exist.
    #[error("device not found")]
    DeviceNotFound,

    /// Read, write or ioctl failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Input shorter than its fixed layout.
    #[error("truncated input: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// Payload that does not fit its layout.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// Header type outside 0..=9.
    #[error("unknown message type: {0}")]
    UnknownMessageType(u8),

    /// Tag type byte the codec has no layout for.
    #[error("unknown tag type: {0}")]
    UnknownTagType(u8),

    /// Field or payload longer than its limit.
    #[error("payload too large: max {max} bytes, got {actual}")]
    PayloadTooLarge { max: usize, actual: usize },

    /// Driver speaks another protocol version.
    #[error("protocol version mismatch: expected {expected:#018x}, got {actual:#018x}")]
    ProtocolVersionMismatch { expected: u64, actual: u64 },

    /// A helper read a message other than the answer it waited for.
    #[error("unexpected message: expected type {expected}, got {actual}")]
    UnexpectedMessage { expected: u8, actual: u8 },

    /// Message rejected by the session tracker.
    #[error("invalid transition: {message} not allowed while {state}")]
    InvalidTransition {
        state: &'static str,
        message: &'static str,
    },

    /// Transceive response carried the error flag.
    #[error("transceive failed: tag unselected and field turned off")]
    TransceiveFailed,
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
