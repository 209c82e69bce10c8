// nfcdev/src/protocol/mod.rs
//! Wire format of the `/dev/nfc` messages and the optional session tracker.

pub mod codec;
pub mod header;
pub mod messages;
pub mod parser;
pub mod session;

pub use header::MessageHeader;
pub use messages::{DiscoverParams, Message, TransceiveFrame};
pub use session::{SessionState, SessionTracker};
