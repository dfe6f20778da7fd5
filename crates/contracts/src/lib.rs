//! Wire contracts shared by every page of the SignoApp frontend.
//!
//! Everything here mirrors what the REST backend sends and accepts. Field
//! names on the wire are the backend's Spanish ones; Rust-side names are
//! English with `serde(rename)` where they differ.

pub mod domain;
pub mod system;
