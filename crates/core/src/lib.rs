//! Shared wire-format, hashing, and Base58Check primitives for the satstack workspace.
//!
//! This crate has no opinions about Bitcoin Script or transactions, only the byte-level plumbing
//! every other crate in the workspace builds on.
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Base58Check encoding and decoding.
pub mod base58;
/// Shared error type for this crate's primitives.
pub mod error;
/// HASH160 / HASH256.
pub mod hashes;
/// The `ByteFormat` (de)serialization trait and little-endian integer helpers.
pub mod ser;
/// CompactSize (VarInt) length-prefix encoding.
pub mod varint;

pub use error::{CoreError, CoreResult};
pub use ser::ByteFormat;
