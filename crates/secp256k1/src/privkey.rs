//! Private/public key material: signing, verification, and WIF encoding.
use num_bigint::BigUint;
use num_traits::Zero;

use satstack_core::base58;

use crate::curve::Point;
use crate::error::Secp256k1Result;
use crate::nonce::{NonceSource, RandomNonce};
use crate::secp256k1::{self, N};
use crate::signature::Signature;

/// A secp256k1 private key: a scalar `secret` in `[1, n)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivKey {
    secret: BigUint,
}

impl PrivKey {
    /// Wrap a raw scalar as a private key. Callers are responsible for `secret` being in
    /// `[1, n)`; this constructor performs no range validation.
    pub fn new(secret: BigUint) -> PrivKey {
        PrivKey { secret }
    }

    /// The raw scalar.
    pub fn secret(&self) -> &BigUint {
        &self.secret
    }

    /// The corresponding public key point, `secret * G`.
    pub fn public_key(&self) -> Secp256k1Result<Point> {
        secp256k1::multiply_generator(&self.secret)
    }

    /// Sign `z` (the integer interpretation of a message digest) using a fresh random nonce,
    /// returning a low-s-normalized signature.
    pub fn sign(&self, z: &BigUint) -> Secp256k1Result<Signature> {
        self.sign_with(z, &mut RandomNonce)
    }

    /// Sign `z` using an explicit nonce source, for deterministic reproduction of test vectors.
    /// Production signing should go through [`PrivKey::sign`] instead.
    ///
    /// If a drawn nonce yields `r = 0`, it's discarded and a fresh one is drawn; `r = 0` leaks no
    /// information about the key, so this is silent and doesn't surface as an error.
    pub fn sign_with(
        &self,
        z: &BigUint,
        nonce_source: &mut dyn NonceSource,
    ) -> Secp256k1Result<Signature> {
        loop {
            let k = nonce_source.next_nonce()?;
            let r_point = secp256k1::multiply_generator(&k)?;
            let r = match r_point.x() {
                Some(x) if !x.num().is_zero() => x.num().clone(),
                _ => continue,
            };
            let k_inv = mod_inverse(&k, &N);
            let re = (&self.secret * &r + z) % &*N;
            let s = (&re * &k_inv) % &*N;
            return Ok(Signature::new(r, s).normalize_low_s(&N));
        }
    }

    /// Encode this private key in Wallet Import Format.
    pub fn to_wif(&self, compressed: bool, testnet: bool) -> String {
        let version: u8 = if testnet { 0xef } else { 0x80 };
        let secret_bytes = to_32_bytes(&self.secret);
        let mut payload = Vec::with_capacity(34);
        payload.push(version);
        payload.extend_from_slice(&secret_bytes);
        if compressed {
            payload.push(0x01);
        }
        base58::encode_check(&payload)
    }
}

/// Verify that `signature` is a valid ECDSA signature over `z` under `public_key`.
pub fn verify(public_key: &Point, z: &BigUint, signature: &Signature) -> Secp256k1Result<bool> {
    let s_inv = mod_inverse(signature.s(), &N);
    let u = (z * &s_inv) % &*N;
    let v = (signature.r() * &s_inv) % &*N;
    let total = secp256k1::multiply_generator(&u)?.add(&public_key.scalar_mul(
        &num_bigint::BigInt::from_biguint(num_bigint::Sign::Plus, v),
    )?)?;
    Ok(total
        .x()
        .map(|x| x.num() == signature.r())
        .unwrap_or(false))
}

fn mod_inverse(value: &BigUint, modulus: &BigUint) -> BigUint {
    value.modpow(&(modulus - BigUint::from(2u32)), modulus)
}

fn to_32_bytes(num: &BigUint) -> [u8; 32] {
    let raw = num.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - raw.len()..].copy_from_slice(&raw);
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::nonce::{ExplicitNonce, NonceSource};
    use sha2::{Digest, Sha256};

    fn hash256_int(data: &[u8]) -> BigUint {
        let first = Sha256::digest(data);
        let second = Sha256::digest(first);
        BigUint::from_bytes_be(&second)
    }

    /// Replays a fixed sequence of nonces, one per call, for exercising retry paths.
    struct SequenceNonce(std::vec::IntoIter<BigUint>);

    impl NonceSource for SequenceNonce {
        fn next_nonce(&mut self) -> Secp256k1Result<BigUint> {
            Ok(self.0.next().expect("SequenceNonce ran out of queued nonces"))
        }
    }

    #[test]
    fn it_produces_a_verifiable_deterministic_signature() {
        let secret = hash256_int(b"my secret");
        let priv_key = PrivKey::new(secret);
        let z = hash256_int(b"my message");
        let mut nonce = ExplicitNonce(BigUint::from(1234567890u64));
        let sig = priv_key.sign_with(&z, &mut nonce).unwrap();

        assert_eq!(
            format!("{:x}", sig.r()),
            "2b698a0f0a4041b77e63488ad48c23e8e8838dd1fb7520408b121697b782ef22"
        );
        assert_eq!(
            format!("{:x}", sig.s()),
            "44eb19fd1061c078d1da052cd7b994c9d43b916c9f7b4789d46f0a44d087b488"
        );

        let pubkey = priv_key.public_key().unwrap();
        assert!(verify(&pubkey, &z, &sig).unwrap());
    }

    #[test]
    fn it_retries_when_a_nonce_yields_an_undefined_r() {
        let secret = hash256_int(b"my secret");
        let priv_key = PrivKey::new(secret);
        let z = hash256_int(b"my message");

        // N*G is the point at infinity, so a nonce of exactly N has no x-coordinate and must be
        // discarded; the second queued nonce is the one actually used.
        let mut nonces = SequenceNonce(vec![N.clone(), BigUint::from(1234567890u64)].into_iter());
        let sig = priv_key.sign_with(&z, &mut nonces).unwrap();

        assert_eq!(
            format!("{:x}", sig.r()),
            "2b698a0f0a4041b77e63488ad48c23e8e8838dd1fb7520408b121697b782ef22"
        );
        let pubkey = priv_key.public_key().unwrap();
        assert!(verify(&pubkey, &z, &sig).unwrap());
    }

    #[test]
    fn it_rejects_a_tampered_digest() {
        let priv_key = PrivKey::new(BigUint::from(12345u32));
        let z = hash256_int(b"my message");
        let sig = priv_key.sign(&z).unwrap();
        let pubkey = priv_key.public_key().unwrap();
        let wrong_z = hash256_int(b"a different message");
        assert!(!verify(&pubkey, &wrong_z, &sig).unwrap());
    }

    #[test]
    fn it_encodes_known_testnet_wif() {
        let priv_key = PrivKey::new(BigUint::from(5003u32));
        let wif = priv_key.to_wif(true, true);
        assert_eq!(wif, "cMahea7zqjxrtgAbB7LSGbcQUr1uX1ojuat9jZodMN8rFTv2sfUK");
    }
}
