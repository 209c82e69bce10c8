//! Utilities for nfcdev: small, reusable helpers used across the crate.
//!
//! Only hex rendering lives here for now; it is shared by the trace logs and
//! by the display helpers of the tag model.

pub mod hex;

pub use hex::*;
