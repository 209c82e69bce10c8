// nfcdev/src/device/builder.rs
//! Builder for [`Device`](crate::device::Device).

use std::path::PathBuf;

use crate::device::config::DeviceConfig;
use crate::device::handle::{Checked, Device, Unchecked};
use crate::transport::Transport;
#[cfg(not(feature = "chardev"))]
use crate::Error;
use crate::Result;

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    config: DeviceConfig,
}

impl DeviceBuilder {
    /// Builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: DeviceConfig) -> Self {
        self.config = config;
        self
    }

    /// Character device to open when no transport is provided.
    pub fn path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.path = path.into();
        self
    }

    /// Enable or skip the protocol version check.
    pub fn check_version(mut self, enabled: bool) -> Self {
        self.config.check_version = enabled;
        self
    }

    /// Enable session state tracking.
    pub fn strict_session(mut self, enabled: bool) -> Self {
        self.config.strict_session = enabled;
        self
    }

    /// Consume the builder and return an unchecked Device. Without a
    /// transport the configured path is opened, which needs the `chardev`
    /// feature; otherwise DeviceNotFound is returned.
    pub fn build_unchecked(self) -> Result<Device<Unchecked>> {
        match self.transport {
            Some(t) => Ok(Device::with_config(t, self.config)),
            #[cfg(feature = "chardev")]
            None => Device::open(self.config),
            #[cfg(not(feature = "chardev"))]
            None => Err(Error::DeviceNotFound),
        }
    }

    /// Build and run the protocol version check.
    pub fn build(self) -> Result<Device<Checked>> {
        self.build_unchecked()?.check_version()
    }
}
