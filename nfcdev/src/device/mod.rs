// nfcdev/src/device/mod.rs
//! Blocking device handle and its configuration.

pub mod builder;
pub mod config;
pub mod handle;

pub use builder::DeviceBuilder;
pub use config::DeviceConfig;
pub use handle::{Checked, Device, TagEvent, Unchecked};
