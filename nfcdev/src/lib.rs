// nfcdev/src/lib.rs

//! nfcdev
//!
//! Pure Rust client for the `/dev/nfc` message protocol spoken by the
//! ST25R391x NFC reader driver: message codec, tag descriptors, the ST25TB
//! model matcher and a blocking device handle.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Error, Result and the wire-level newtypes live at the crate root.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
