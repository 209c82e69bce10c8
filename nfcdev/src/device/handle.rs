// nfcdev/src/device/handle.rs
//! The device handle: request/response helpers over a transport.

use std::marker::PhantomData;

use log::{debug, trace, warn};

use crate::constants::{HEADER_LEN, NFC_PROTOCOL_VERSION_1};
use crate::device::config::DeviceConfig;
use crate::protocol::messages::{DiscoverParams, Message, TransceiveFrame};
use crate::protocol::{codec, SessionState, SessionTracker};
use crate::tag::{TagId, TagInfo};
use crate::transport::Transport;
use crate::types::MessageType;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Type-state marker: protocol version not checked yet.
pub struct Unchecked;
/// Protocol version verified; messages may be exchanged.
pub struct Checked;

/// A tag reported while discovering or selecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEvent {
    /// Tag descriptor as reported by the driver.
    pub info: TagInfo,
    /// True for SelectedTag, false for DetectedTag.
    pub selected: bool,
}

/// Device handle that enforces the protocol version check at compile time.
pub struct Device<State = Unchecked> {
    transport: Box<dyn Transport>,
    config: DeviceConfig,
    session: Option<SessionTracker>,
    _state: PhantomData<State>,
}

impl<State> Device<State> {
    /// Options the handle was built with.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Current session state, when strict session tracking is enabled.
    pub fn session_state(&self) -> Option<SessionState> {
        self.session.as_ref().map(|s| s.state())
    }

    /// Protocol version reported by the driver.
    pub fn protocol_version(&mut self) -> Result<u64> {
        self.transport.protocol_version()
    }
}

impl Device<Unchecked> {
    /// Create a Device from an existing Transport instance with the default
    /// configuration. This is primarily intended for tests where a
    /// MockTransport is provided.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, DeviceConfig::default())
    }

    /// Create a Device over `transport` with explicit options.
    pub fn with_config(transport: Box<dyn Transport>, config: DeviceConfig) -> Self {
        let session = config.strict_session.then(SessionTracker::new);
        Self {
            transport,
            config,
            session,
            _state: PhantomData,
        }
    }

    /// Open the character device named by `config.path`.
    #[cfg(feature = "chardev")]
    pub fn open(config: DeviceConfig) -> Result<Self> {
        let transport = crate::transport::CharDevTransport::open(&config.path)?;
        Ok(Self::with_config(Box::new(transport), config))
    }

    /// Verify the driver speaks protocol version 1. Skipped when the
    /// configuration disables the check.
    pub fn check_version(mut self) -> Result<Device<Checked>> {
        if self.config.check_version {
            let actual = self.transport.protocol_version()?;
            if actual != NFC_PROTOCOL_VERSION_1 {
                return Err(Error::ProtocolVersionMismatch {
                    expected: NFC_PROTOCOL_VERSION_1,
                    actual,
                });
            }
            debug!("protocol version {:#018x}", actual);
        } else {
            debug!("protocol version check skipped");
        }

        Ok(Device {
            transport: self.transport,
            config: self.config,
            session: self.session,
            _state: PhantomData,
        })
    }
}

impl Device<Checked> {
    /// Encode and write one message. The session state only advances once
    /// the write succeeded.
    pub fn send(&mut self, msg: &Message) -> Result<()> {
        let next = match self.session.as_ref() {
            Some(session) => Some(session.check_send(msg)?),
            None => None,
        };
        let bytes = codec::encode_message(msg)?;
        self.transport.send(&bytes)?;
        if let (Some(session), Some(next)) = (self.session.as_mut(), next) {
            session.commit(next);
        }
        Ok(())
    }

    /// Read one full message: the header, then exactly `payload_length`
    /// bytes.
    pub fn read_message(&mut self) -> Result<Message> {
        let header_bytes = self.transport.receive_exact(HEADER_LEN)?;
        let header = codec::decode_header(&header_bytes)?;
        let payload = if header.payload_length > 0 {
            self.transport.receive_exact(header.payload_len())?
        } else {
            Vec::new()
        };
        #[cfg(feature = "diagnostics")]
        trace!(
            "raw message: {} | {}",
            bytes_to_hex_spaced(&header_bytes),
            bytes_to_hex_spaced(&payload)
        );

        let msg = codec::decode_payload(header.message_type, &payload)?;
        trace!(
            "received {} ({} bytes): {}",
            msg.message_type().name(),
            payload.len(),
            bytes_to_hex_spaced(&payload)
        );
        if let Some(session) = self.session.as_mut() {
            session.on_received(&msg)?;
        }
        Ok(msg)
    }

    /// Ask the driver for its chip model.
    pub fn identify(&mut self) -> Result<String> {
        self.send(&Message::IdentifyRequest)?;
        match self.read_message()? {
            Message::IdentifyResponse { chip_model } => Ok(chip_model),
            other => Err(unexpected(MessageType::IdentifyResponse, &other)),
        }
    }

    /// Enter (or update) discover mode. Tags are then reported through
    /// [`next_tag`](Self::next_tag).
    pub fn discover(&mut self, params: DiscoverParams) -> Result<()> {
        debug!(
            "discover: protocols={:#x} select={}",
            params.protocols.bits(),
            params.flags.select()
        );
        self.send(&Message::DiscoverModeRequest(params))
    }

    /// Wait for the next reported tag. Returns `None` once the driver went
    /// back to idle (device count reached, or an idle request was answered).
    pub fn next_tag(&mut self) -> Result<Option<TagEvent>> {
        match self.read_message()? {
            Message::DetectedTag(info) => Ok(Some(TagEvent {
                info,
                selected: false,
            })),
            Message::SelectedTag(info) => Ok(Some(TagEvent {
                info,
                selected: true,
            })),
            Message::IdleModeAcknowledge => Ok(None),
            other => Err(unexpected(MessageType::DetectedTag, &other)),
        }
    }

    /// Poll for the tag `id` and select it. Detected tags reported before the
    /// selection are skipped.
    pub fn select(&mut self, id: &TagId) -> Result<TagInfo> {
        self.send(&Message::SelectTag(id.clone()))?;
        loop {
            match self.read_message()? {
                Message::SelectedTag(info) => return Ok(info),
                Message::DetectedTag(info) => {
                    debug!("select: skipping detected {}", info.tag_type());
                }
                other => return Err(unexpected(MessageType::SelectedTag, &other)),
            }
        }
    }

    /// Request idle mode. The driver only acknowledges when it was not
    /// already idle; use [`wait_idle`](Self::wait_idle) to consume the
    /// acknowledge.
    pub fn idle(&mut self) -> Result<()> {
        self.send(&Message::IdleModeRequest)
    }

    /// Read until the idle acknowledge, dropping tag reports still in flight.
    pub fn wait_idle(&mut self) -> Result<()> {
        loop {
            match self.read_message()? {
                Message::IdleModeAcknowledge => {
                    debug!("device idle");
                    return Ok(());
                }
                other => debug!("wait_idle: dropping {}", other.message_type().name()),
            }
        }
    }

    /// Exchange one frame with the selected tag. The response is returned
    /// even when it carries the error flag; the driver has then unselected
    /// the tag and turned the field off.
    pub fn transceive(&mut self, frame: TransceiveFrame) -> Result<TransceiveFrame> {
        self.send(&Message::TransceiveFrameRequest(frame))?;
        match self.read_message()? {
            Message::TransceiveFrameResponse(resp) => {
                if resp.is_error() {
                    warn!("transceive failed: tag unselected and field off");
                }
                Ok(resp)
            }
            other => Err(unexpected(MessageType::TransceiveFrameResponse, &other)),
        }
    }
}

fn unexpected(expected: MessageType, got: &Message) -> Error {
    Error::UnexpectedMessage {
        expected: expected.as_u8(),
        actual: got.message_type().as_u8(),
    }
}
