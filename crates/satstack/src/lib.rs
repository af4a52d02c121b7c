//! A minimal Bitcoin-compatible cryptographic and transaction toolkit: prime-field and
//! secp256k1 elliptic-curve arithmetic, ECDSA signatures, Bitcoin Script evaluation, and legacy
//! P2PKH transaction construction, signing, and verification.
//!
//! This crate is a thin facade over its workspace siblings (`satstack-core`,
//! `satstack-secp256k1`, `satstack-script`, `satstack-transaction`, `satstack-fetcher`); see
//! [`prelude`] for the common re-export set most callers need.
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Common re-exports: the public API most callers of this crate need.
pub mod prelude;

/// Wire-format, hashing, and Base58Check primitives.
pub use satstack_core as core;
/// Previous-output resolution.
pub use satstack_fetcher as fetcher;
/// Bitcoin Script opcodes, serialization, and evaluation.
pub use satstack_script as script;
/// Prime-field and secp256k1 elliptic-curve arithmetic, ECDSA, and key material.
pub use satstack_secp256k1 as secp256k1;
/// Legacy transaction wire format, txid, sighash, signing, and verification.
pub use satstack_transaction as transaction;
