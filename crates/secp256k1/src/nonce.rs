//! Nonce supply for ECDSA signing.
//!
//! Nonce generation lives behind a trait rather than being inlined into the signing routine, so
//! [`crate::privkey::PrivKey::sign`] can stay CSPRNG-backed while tests and anyone needing
//! RFC 6979-style determinism can supply `k` directly through [`ExplicitNonce`].
use num_bigint::BigUint;
use rand::RngCore;

use crate::error::{Secp256k1Error, Secp256k1Result};
use crate::secp256k1::N;

/// A source of per-signature nonces `k` in `[1, n)`.
pub trait NonceSource {
    /// Produce the next nonce.
    fn next_nonce(&mut self) -> Secp256k1Result<BigUint>;
}

/// Draws nonces uniformly from `[1, n)` using the operating system CSPRNG.
#[derive(Debug, Default)]
pub struct RandomNonce;

impl NonceSource for RandomNonce {
    fn next_nonce(&mut self) -> Secp256k1Result<BigUint> {
        let mut rng = rand::thread_rng();
        let mut buf = [0u8; 32];
        for _ in 0..16 {
            rng.fill_bytes(&mut buf);
            let candidate = BigUint::from_bytes_be(&buf);
            if candidate > BigUint::from(0u32) && candidate < *N {
                return Ok(candidate);
            }
        }
        Err(Secp256k1Error::NonceExhausted)
    }
}

/// Replays a single caller-supplied nonce, for deterministic test vectors only.
#[derive(Debug, Clone)]
pub struct ExplicitNonce(pub BigUint);

impl NonceSource for ExplicitNonce {
    fn next_nonce(&mut self) -> Secp256k1Result<BigUint> {
        Ok(self.0.clone())
    }
}
