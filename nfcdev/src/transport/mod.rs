// nfcdev/src/transport/mod.rs
//! Byte transports: the character device and an in-memory mock.

#[cfg(feature = "chardev")]
pub mod chardev;
pub mod mock;
pub mod traits;

#[cfg(feature = "chardev")]
pub use chardev::CharDevTransport;
pub use mock::MockTransport;
pub use traits::Transport;
