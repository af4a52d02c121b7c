//! Fixed secp256k1 domain parameters, SEC point (de)serialization, and address derivation.
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

use satstack_core::base58;
use satstack_core::error::CoreError;
use satstack_core::hashes::hash160;

use crate::curve::Point;
use crate::error::{Secp256k1Error, Secp256k1Result};
use crate::field::FieldElement;

fn biguint_hex(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 16).expect("hardcoded secp256k1 constant is valid hex")
}

/// `p`, the field modulus coordinates live in.
pub static P: Lazy<BigUint> = Lazy::new(|| {
    biguint_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f")
});

/// `n`, the order of the base point `G` (also the order of the signing scalar field).
pub static N: Lazy<BigUint> = Lazy::new(|| {
    biguint_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141")
});

/// `n / 2`, the low-s/high-s boundary used to normalize ECDSA signatures.
pub static N_HALF: Lazy<BigUint> = Lazy::new(|| &*N / BigUint::from(2u32));

/// The base point `G`.
pub static G: Lazy<Point> = Lazy::new(|| {
    let gx = biguint_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
    let gy = biguint_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");
    let (a, b) = curve_coeffs();
    Point::new_affine(
        FieldElement::new(gx, P.clone()),
        FieldElement::new(gy, P.clone()),
        a,
        b,
    )
    .expect("hardcoded secp256k1 generator is on the curve")
});

fn curve_coeffs() -> (FieldElement, FieldElement) {
    (
        FieldElement::new(BigUint::zero(), P.clone()),
        FieldElement::new(BigUint::from(7u32), P.clone()),
    )
}

/// Construct a [`FieldElement`] over secp256k1's field modulus `p`.
pub fn field_element(num: BigUint) -> FieldElement {
    FieldElement::new(num, P.clone())
}

/// Reduce `scalar` modulo `n`, the order of `G`.
pub fn scalar_mod_n(scalar: &BigUint) -> BigUint {
    scalar % &*N
}

/// `scalar * G`.
pub fn multiply_generator(scalar: &BigUint) -> Secp256k1Result<Point> {
    G.scalar_mul(&BigInt::from_biguint(Sign::Plus, scalar.clone()))
}

/// Serialize a public-key point in SEC format: compressed (33 bytes) or uncompressed (65 bytes).
pub fn sec_encode(point: &Point, compressed: bool) -> Secp256k1Result<Vec<u8>> {
    let x = point.x().ok_or(Secp256k1Error::SecMalformed("point at infinity"))?;
    let y = point.y().ok_or(Secp256k1Error::SecMalformed("point at infinity"))?;
    let x_bytes = to_32_bytes(x.num());
    if !compressed {
        let mut out = Vec::with_capacity(65);
        out.push(0x04);
        out.extend_from_slice(&x_bytes);
        out.extend_from_slice(&to_32_bytes(y.num()));
        return Ok(out);
    }
    let mut out = Vec::with_capacity(33);
    out.push(if y.num().is_even() { 0x02 } else { 0x03 });
    out.extend_from_slice(&x_bytes);
    Ok(out)
}

/// Parse a SEC-encoded point, decompressing via the modular square root when necessary.
///
/// secp256k1's `p ≡ 3 (mod 4)`, so a square root of `w` in `GF(p)` (when one exists) is simply
/// `w^((p+1)/4)`.
pub fn sec_decode(data: &[u8]) -> Secp256k1Result<Point> {
    let (a, b) = curve_coeffs();
    match data.first() {
        Some(0x04) => {
            if data.len() != 65 {
                return Err(Secp256k1Error::SecMalformed("uncompressed SEC must be 65 bytes"));
            }
            let x = field_element(BigUint::from_bytes_be(&data[1..33]));
            let y = field_element(BigUint::from_bytes_be(&data[33..65]));
            Point::new_affine(x, y, a, b)
        }
        Some(prefix @ (0x02 | 0x03)) => {
            if data.len() != 33 {
                return Err(Secp256k1Error::SecMalformed("compressed SEC must be 33 bytes"));
            }
            let x = field_element(BigUint::from_bytes_be(&data[1..33]));
            let alpha = x.mul(&x)?.mul(&x)?.add(&b)?;
            let exponent = (&*P + BigUint::one()) / BigUint::from(4u32);
            let beta = alpha.pow(&BigInt::from_biguint(Sign::Plus, exponent));
            let want_even = *prefix == 0x02;
            let beta_is_even = beta.num().is_even();
            let (even_beta, odd_beta) = if beta_is_even {
                (beta.clone(), field_element(&*P - beta.num()))
            } else {
                (field_element(&*P - beta.num()), beta.clone())
            };
            let y = if want_even { even_beta } else { odd_beta };
            Point::new_affine(x, y, a, b)
        }
        _ => Err(Secp256k1Error::SecMalformed("unrecognized SEC prefix byte")),
    }
}

fn to_32_bytes(num: &BigUint) -> [u8; 32] {
    let raw = num.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - raw.len()..].copy_from_slice(&raw);
    out
}

/// Derive the HASH160 of a SEC-encoded public key.
pub fn pubkey_hash160(point: &Point, compressed: bool) -> Secp256k1Result<[u8; 20]> {
    Ok(hash160(&sec_encode(point, compressed)?))
}

/// Derive the Base58Check P2PKH address for a public key, on mainnet or testnet.
pub fn p2pkh_address(point: &Point, compressed: bool, testnet: bool) -> Secp256k1Result<String> {
    let h160 = pubkey_hash160(point, compressed)?;
    let version: u8 = if testnet { 0x6f } else { 0x00 };
    let mut payload = Vec::with_capacity(21);
    payload.push(version);
    payload.extend_from_slice(&h160);
    Ok(base58::encode_check(&payload))
}

/// Recover the 20-byte HASH160 embedded in a Base58Check P2PKH address.
///
/// Decodes and verifies the checksum via [`base58::decode_check`], then requires the payload
/// (version byte + hash) to be exactly 21 bytes — i.e. a 25-byte address before the checksum was
/// appended. Fails with [`Secp256k1Error::AddressLength`] wrapping [`CoreError::AddressLength`] on
/// any other length, or with the same variant wrapping [`CoreError::AddressChecksum`] on a bad
/// checksum.
pub fn extract_hash160(address: &str) -> Secp256k1Result<[u8; 20]> {
    let payload = base58::decode_check(address)?;
    if payload.len() != 21 {
        return Err(CoreError::AddressLength(payload.len()).into());
    }
    let mut h160 = [0u8; 20];
    h160.copy_from_slice(&payload[1..]);
    Ok(h160)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generator_is_on_curve() {
        let _ = &*G;
    }

    #[test]
    fn it_sec_round_trips_compressed() {
        let point = multiply_generator(&BigUint::from(5001u32)).unwrap();
        let encoded = sec_encode(&point, true).unwrap();
        assert_eq!(encoded.len(), 33);
        let decoded = sec_decode(&encoded).unwrap();
        assert_eq!(decoded, point);
    }

    #[test]
    fn it_sec_round_trips_uncompressed() {
        let point = multiply_generator(&BigUint::from(5000u32)).unwrap();
        let encoded = sec_encode(&point, false).unwrap();
        assert_eq!(encoded.len(), 65);
        let decoded = sec_decode(&encoded).unwrap();
        assert_eq!(decoded, point);
    }

    #[test]
    fn it_derives_known_testnet_address() {
        // secret = 5002, uncompressed SEC, testnet address.
        let point = multiply_generator(&BigUint::from(5002u32)).unwrap();
        let address = p2pkh_address(&point, false, true).unwrap();
        assert_eq!(address, "mmTPbXQFxboEtNRkwfh6K51jvdtHLxGeMA");
    }

    #[test]
    fn it_derives_known_compressed_testnet_address() {
        // secret = 2020^5, compressed SEC, testnet address.
        let secret = BigUint::from(2020u32).pow(5);
        let point = multiply_generator(&secret).unwrap();
        let address = p2pkh_address(&point, true, true).unwrap();
        assert_eq!(address, "mopVkxp8UhXqRYbCYJsbeE1h1fiF64jcoH");
    }

    #[test]
    fn it_derives_known_compressed_mainnet_address() {
        // secret = 0x12345deadbeef, compressed SEC, mainnet address.
        let secret = BigUint::parse_bytes(b"12345deadbeef", 16).unwrap();
        let point = multiply_generator(&secret).unwrap();
        let address = p2pkh_address(&point, true, false).unwrap();
        assert_eq!(address, "1F1Pn2y6pDb68E5nYJJeba4TLg2U7B6KF1");
    }

    #[test]
    fn it_extracts_the_hash160_round_tripped_through_an_address() {
        let point = multiply_generator(&BigUint::from(5002u32)).unwrap();
        let h160 = pubkey_hash160(&point, false).unwrap();
        let address = p2pkh_address(&point, false, true).unwrap();
        assert_eq!(extract_hash160(&address).unwrap(), h160);
    }

    #[test]
    fn it_rejects_a_wrong_length_payload() {
        // 20-byte payload plus version and checksum, one byte short of a real address.
        let short_payload = [0x6fu8; 20];
        let bogus = base58::encode_check(&short_payload);
        assert!(matches!(
            extract_hash160(&bogus),
            Err(Secp256k1Error::AddressLength(CoreError::AddressLength(20)))
        ));
    }

    #[test]
    fn it_rejects_a_bad_checksum() {
        let point = multiply_generator(&BigUint::from(5002u32)).unwrap();
        let mut address = p2pkh_address(&point, false, true).unwrap().into_bytes();
        let last = address.len() - 1;
        address[last] = if address[last] == b'1' { b'2' } else { b'1' };
        let address = String::from_utf8(address).unwrap();
        assert!(matches!(
            extract_hash160(&address),
            Err(Secp256k1Error::AddressLength(CoreError::AddressChecksum))
                | Err(Secp256k1Error::AddressLength(CoreError::Base58InvalidChar(_)))
        ));
    }
}
