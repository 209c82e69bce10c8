// nfcdev/src/protocol/session.rs
//! Optional enforcement of the device's mode sequence.
//!
//! The codec accepts every message in any order. [`SessionTracker`] sits on
//! top of it and rejects messages the driver would not expect (or could not
//! have produced) in the current mode:
//!
//! ```text
//! Idle --Discover--> Discovering --SelectedTag--> Selected <--> Transceiving
//!   ^                    |  ^                        |
//!   +---- IdleModeAck ---+--+---- IdleModeRequest ---+
//! ```

use log::debug;

use crate::protocol::messages::Message;
use crate::{Error, Result};

/// Mode of the device as seen from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// Not polling, no tag selected.
    #[default]
    Idle,
    /// Polling; `select` is true when the first match gets selected.
    Discovering { select: bool },
    /// A SelectTag request is pending.
    Selecting,
    /// A tag is selected.
    Selected,
    /// A transceive request awaits its response.
    Transceiving,
    /// An idle request awaits its acknowledge.
    Stopping,
}

impl SessionState {
    /// Lowercase name used in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Discovering { select: false } => "discovering",
            SessionState::Discovering { select: true } => "discovering (select)",
            SessionState::Selecting => "selecting",
            SessionState::Selected => "selected",
            SessionState::Transceiving => "transceiving",
            SessionState::Stopping => "stopping",
        }
    }
}

/// Tracks the session state from the messages sent and received.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    state: SessionState,
}

impl SessionTracker {
    /// Tracker starting in Idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check and record a message written to the device.
    pub fn on_sent(&mut self, msg: &Message) -> Result<()> {
        let next = self.check_send(msg)?;
        self.commit(next);
        Ok(())
    }

    /// State the tracker moves to once `msg` has been written. Nothing is
    /// recorded until [`commit`](Self::commit) is called.
    pub fn check_send(&self, msg: &Message) -> Result<SessionState> {
        use SessionState::*;

        if !msg.is_request() || self.state == Transceiving {
            return Err(self.reject(msg));
        }
        let next = match (msg, self.state) {
            (Message::IdentifyRequest, s) => s,
            (Message::IdleModeRequest, Idle) => Idle,
            (Message::IdleModeRequest, _) => Stopping,
            (Message::DiscoverModeRequest(params), Idle | Discovering { .. }) => Discovering {
                select: params.flags.select(),
            },
            (Message::SelectTag(_), Idle | Discovering { .. }) => Selecting,
            (Message::TransceiveFrameRequest(_), Selected) => Transceiving,
            _ => return Err(self.reject(msg)),
        };
        Ok(next)
    }

    /// Record a state returned by [`check_send`](Self::check_send).
    pub fn commit(&mut self, next: SessionState) {
        self.transition(next);
    }

    /// Check and record a message read from the device.
    pub fn on_received(&mut self, msg: &Message) -> Result<()> {
        use SessionState::*;

        if msg.is_request() {
            return Err(self.reject(msg));
        }
        let next = match (msg, self.state) {
            (Message::IdentifyResponse { .. }, s) => s,
            (Message::IdleModeAcknowledge, _) => Idle,
            // Messages already in flight when the idle request went out.
            (_, Stopping) => Stopping,
            (Message::DetectedTag(_), Discovering { select: false }) => self.state,
            (Message::SelectedTag(_), Discovering { select: true } | Selecting) => Selected,
            (Message::TransceiveFrameResponse(frame), Transceiving) => {
                if frame.is_error() {
                    Idle
                } else {
                    Selected
                }
            }
            _ => return Err(self.reject(msg)),
        };
        self.transition(next);
        Ok(())
    }

    /// Force the tracker back to Idle.
    pub fn reset(&mut self) {
        self.transition(SessionState::Idle);
    }

    fn transition(&mut self, next: SessionState) {
        if next != self.state {
            debug!("session: {} -> {}", self.state.name(), next.name());
            self.state = next;
        }
    }

    fn reject(&self, msg: &Message) -> Error {
        Error::InvalidTransition {
            state: self.state.name(),
            message: msg.message_type().name(),
        }
    }
}
