//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::device::{Checked, Device};
use crate::protocol::messages::Message;
use crate::transport::mock::MockTransport;
use crate::transport::traits::Transport;
use crate::Result;

/// Build a MockTransport pre-seeded with the given device messages and
/// return it boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_messages(messages: &[Message]) -> Result<Box<dyn Transport>> {
    let mut mock = MockTransport::new();
    seed_messages(&mut mock, messages)?;
    Ok(Box::new(mock))
}

/// Convenience: create a version-checked Device backed by a MockTransport
/// pre-seeded with the provided device messages.
#[doc(hidden)]
pub fn checked_mock_device(messages: &[Message]) -> Result<Device<Checked>> {
    let boxed = boxed_mock_with_messages(messages)?;
    Device::new_with_transport(boxed).check_version()
}

/// Queue messages on a MockTransport in order.
#[doc(hidden)]
pub fn seed_messages(mock: &mut MockTransport, messages: &[Message]) -> Result<()> {
    for msg in messages {
        mock.push_message(msg)?;
    }
    Ok(())
}

/// Transport that delegates into a shared MockTransport so a test can
/// inspect the recorded writes after a Device took ownership.
#[doc(hidden)]
pub struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedTransport {
    /// Wrap `mock`; the returned handle sees every write.
    pub fn new(mock: MockTransport) -> (Self, Rc<RefCell<MockTransport>>) {
        let inner = Rc::new(RefCell::new(mock));
        (
            Self {
                inner: inner.clone(),
            },
            inner,
        )
    }
}

impl Transport for SharedTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.inner.borrow_mut().send(data)
    }

    fn receive_exact(&mut self, len: usize) -> Result<Vec<u8>> {
        self.inner.borrow_mut().receive_exact(len)
    }

    fn protocol_version(&mut self) -> Result<u64> {
        self.inner.borrow_mut().protocol_version()
    }
}
