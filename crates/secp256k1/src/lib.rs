//! Prime-field and secp256k1 elliptic-curve arithmetic, ECDSA signatures, and Bitcoin key
//! material.
//!
//! This crate ports the field/curve/signature math directly rather than wrapping an existing
//! elliptic-curve implementation, so the arithmetic stays auditable end to end instead of
//! disappearing into an opaque `k256`/`secp256k1` dependency.
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Short-Weierstrass curve point arithmetic over [`field::FieldElement`].
pub mod curve;
/// Crate-wide error type.
pub mod error;
/// Prime-field (`GF(p)`) arithmetic.
pub mod field;
/// Nonce supply for ECDSA signing.
pub mod nonce;
/// Private/public key material, signing, verification, and WIF.
pub mod privkey;
/// Fixed secp256k1 domain parameters and SEC (de)serialization.
pub mod secp256k1;
/// ECDSA signatures and DER (de)serialization.
pub mod signature;

pub use curve::Point;
pub use error::{Secp256k1Error, Secp256k1Result};
pub use field::FieldElement;
pub use privkey::{verify, PrivKey};
pub use signature::Signature;
