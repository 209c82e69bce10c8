// nfcdev/src/prelude.rs
//! Commonly used items.

pub use crate::device::{Checked, Device, DeviceBuilder, DeviceConfig, TagEvent, Unchecked};
pub use crate::protocol::{DiscoverParams, Message, MessageHeader, TransceiveFrame};
pub use crate::tag::{
    Iso14443a, Iso14443a4, Iso14443b, St25tb, St25tbIdentity, St25tbModel, TagId, TagInfo,
};
pub use crate::{
    Bitrate, DiscoverFlags, DisplayBytes, Error, MessageType, Protocols, Result, TagType,
    TransceiveFlags, WireBytes,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex, wire_to_display_hex};
