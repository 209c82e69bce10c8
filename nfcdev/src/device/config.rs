// nfcdev/src/device/config.rs
//! Device configuration.

use std::path::PathBuf;

use crate::constants::DEFAULT_DEVICE_PATH;

/// Runtime options of a [`Device`](crate::device::Device).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceConfig {
    /// Character device to open when no transport is supplied.
    pub path: PathBuf,
    /// Refuse to talk to a driver with another protocol version.
    pub check_version: bool,
    /// Reject messages that do not fit the current session state.
    pub strict_session: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DEVICE_PATH),
            check_version: true,
            strict_session: false,
        }
    }
}
