// Shared helpers for integration tests. Each test crate includes this
// module with `mod common;`.
#![allow(dead_code)]

pub mod fixtures;
