//! # Filekit Storage
//!
//! Synchronous helpers over the local filesystem: temporary entries
//! ([`temp`]), creation and deletion ([`lifecycle`]), byte copying
//! ([`copy`]), whole-file reads and writes ([`content`]) and content
//! hashing ([`hash`]). Configuration for the naming helpers lives in
//! [`config`]; all operations report failures as [`FsError`].
pub mod config;
pub mod content;
pub mod copy;
pub mod error;
pub mod hash;
pub mod lifecycle;
pub mod temp;

/// Re-export key types
pub use config::{ConfigFormat, FsConfig};
pub use error::{FsError, Result};
pub use hash::FileDigest;
pub use temp::TempSpace;

// Test module declaration
#[cfg(test)]
mod tests;
