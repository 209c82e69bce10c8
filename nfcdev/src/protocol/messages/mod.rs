// nfcdev/src/protocol/messages/mod.rs
//! Typed messages and their payload codecs.

mod discover;
mod identify;
mod transceive;

pub use discover::DiscoverParams;
pub use identify::{decode_chip_model, encode_chip_model};
pub use transceive::TransceiveFrame;

use crate::tag::{TagId, TagInfo};
use crate::types::MessageType;
use crate::{Error, Result};

/// A `/dev/nfc` message without its header.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// Ask for the chip model. No payload.
    IdentifyRequest,
    /// Chip model text.
    IdentifyResponse { chip_model: String },
    /// Stop discovering or release the selected tag. No payload.
    IdleModeRequest,
    /// The device went idle. No payload.
    IdleModeAcknowledge,
    /// Start or update polling.
    DiscoverModeRequest(DiscoverParams),
    /// Tag found while polling without SELECT.
    DetectedTag(TagInfo),
    /// Select a previously detected tag.
    SelectTag(TagId),
    /// Tag selected and ready for transceive.
    SelectedTag(TagInfo),
    /// Frame to send to the selected tag.
    TransceiveFrameRequest(TransceiveFrame),
    /// Answer of the selected tag.
    TransceiveFrameResponse(TransceiveFrame),
}

impl Message {
    /// Header type of this message.
    pub fn message_type(&self) -> MessageType {
        match self {
            Message::IdentifyRequest => MessageType::IdentifyRequest,
            Message::IdentifyResponse { .. } => MessageType::IdentifyResponse,
            Message::IdleModeRequest => MessageType::IdleModeRequest,
            Message::IdleModeAcknowledge => MessageType::IdleModeAcknowledge,
            Message::DiscoverModeRequest(_) => MessageType::DiscoverModeRequest,
            Message::DetectedTag(_) => MessageType::DetectedTag,
            Message::SelectTag(_) => MessageType::SelectTag,
            Message::SelectedTag(_) => MessageType::SelectedTag,
            Message::TransceiveFrameRequest(_) => MessageType::TransceiveFrameRequest,
            Message::TransceiveFrameResponse(_) => MessageType::TransceiveFrameResponse,
        }
    }

    /// Messages sent from the host to the device.
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            Message::IdentifyRequest
                | Message::IdleModeRequest
                | Message::DiscoverModeRequest(_)
                | Message::SelectTag(_)
                | Message::TransceiveFrameRequest(_)
        )
    }

    /// Encode the payload only (no header).
    pub fn encode_payload(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        match self {
            Message::IdentifyRequest
            | Message::IdleModeRequest
            | Message::IdleModeAcknowledge => {}
            Message::IdentifyResponse { chip_model } => encode_chip_model(chip_model, &mut out)?,
            Message::DiscoverModeRequest(params) => params.encode_into(&mut out),
            Message::DetectedTag(info) | Message::SelectedTag(info) => {
                out = info.encode();
            }
            Message::SelectTag(id) => out = id.encode()?,
            Message::TransceiveFrameRequest(frame) | Message::TransceiveFrameResponse(frame) => {
                frame.encode_into(&mut out)?
            }
        }
        Ok(out)
    }

    /// Decode a payload already sized to the header's `payload_length`.
    pub fn decode(message_type: u8, payload: &[u8]) -> Result<Self> {
        let kind =
            MessageType::from_u8(message_type).ok_or(Error::UnknownMessageType(message_type))?;
        let msg = match kind {
            MessageType::IdentifyRequest => {
                expect_empty(kind, payload)?;
                Message::IdentifyRequest
            }
            MessageType::IdentifyResponse => Message::IdentifyResponse {
                chip_model: decode_chip_model(payload),
            },
            MessageType::IdleModeRequest => {
                expect_empty(kind, payload)?;
                Message::IdleModeRequest
            }
            MessageType::IdleModeAcknowledge => {
                expect_empty(kind, payload)?;
                Message::IdleModeAcknowledge
            }
            MessageType::DiscoverModeRequest => {
                Message::DiscoverModeRequest(DiscoverParams::decode(payload)?)
            }
            MessageType::DetectedTag => Message::DetectedTag(TagInfo::decode(payload)?),
            MessageType::SelectTag => Message::SelectTag(TagId::decode(payload)?),
            MessageType::SelectedTag => Message::SelectedTag(TagInfo::decode(payload)?),
            MessageType::TransceiveFrameRequest => {
                Message::TransceiveFrameRequest(TransceiveFrame::decode(payload)?)
            }
            MessageType::TransceiveFrameResponse => {
                Message::TransceiveFrameResponse(TransceiveFrame::decode(payload)?)
            }
        };
        Ok(msg)
    }
}

fn expect_empty(kind: MessageType, payload: &[u8]) -> Result<()> {
    if payload.is_empty() {
        Ok(())
    } else {
        Err(Error::MalformedPayload(format!(
            "{} carries no payload, got {} bytes",
            kind.name(),
            payload.len()
        )))
    }
}
