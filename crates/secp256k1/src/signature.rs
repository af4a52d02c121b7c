//! ECDSA signatures: the `(r, s)` pair, DER encoding, and low-s normalization.
use num_bigint::BigUint;

use crate::error::{Secp256k1Error, Secp256k1Result};
use crate::secp256k1::N_HALF;

/// An ECDSA signature `(r, s)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Construct a signature from its raw components.
    pub fn new(r: BigUint, s: BigUint) -> Signature {
        Signature { r, s }
    }

    /// The `r` component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Flip `s` to its low-s form (`s` or `n - s`, whichever is `<= n/2`) if it isn't already.
    ///
    /// Bitcoin nodes since BIP 62 / BIP 146 only relay the low-s form; both roots are equally
    /// valid signatures for the same message, so this is just canonicalization, not a
    /// cryptographic requirement.
    pub fn normalize_low_s(self, n: &BigUint) -> Signature {
        if self.s > *N_HALF {
            Signature {
                r: self.r,
                s: n - &self.s,
            }
        } else {
            self
        }
    }

    /// DER-encode this signature, per SEC1 / the format Bitcoin Script expects preceding the
    /// sighash-type byte.
    pub fn to_der(&self) -> Vec<u8> {
        let rbin = der_encode_integer(&self.r);
        let sbin = der_encode_integer(&self.s);
        let mut body = Vec::with_capacity(rbin.len() + sbin.len());
        body.extend_from_slice(&rbin);
        body.extend_from_slice(&sbin);
        let mut out = Vec::with_capacity(body.len() + 2);
        out.push(0x30);
        out.push(body.len() as u8);
        out.extend_from_slice(&body);
        out
    }

    /// Parse a DER-encoded signature.
    pub fn from_der(data: &[u8]) -> Secp256k1Result<Signature> {
        if data.len() < 6 {
            return Err(Secp256k1Error::DerMalformed("signature too short"));
        }
        if data[0] != 0x30 {
            return Err(Secp256k1Error::DerMalformed("missing sequence marker"));
        }
        if data[1] as usize != data.len() - 2 {
            return Err(Secp256k1Error::DerMalformed("length field mismatch"));
        }
        if data[2] != 0x02 {
            return Err(Secp256k1Error::DerMalformed("missing r integer marker"));
        }
        let r_len = data[3] as usize;
        if r_len == 0 || r_len > 33 || 4 + r_len >= data.len() {
            return Err(Secp256k1Error::DerMalformed("invalid r length"));
        }
        let r = BigUint::from_bytes_be(&data[4..4 + r_len]);

        let s_marker_at = 4 + r_len;
        if data[s_marker_at] != 0x02 {
            return Err(Secp256k1Error::DerMalformed("missing s integer marker"));
        }
        let s_len_at = s_marker_at + 1;
        let s_len = data[s_len_at] as usize;
        let s_start = s_len_at + 1;
        if s_len == 0 || s_len > 33 || s_start + s_len != data.len() {
            return Err(Secp256k1Error::DerMalformed("invalid s length"));
        }
        let s = BigUint::from_bytes_be(&data[s_start..s_start + s_len]);

        Ok(Signature { r, s })
    }
}

fn der_encode_integer(value: &BigUint) -> Vec<u8> {
    let mut bytes = value.to_bytes_be();
    if bytes.is_empty() {
        bytes.push(0);
    }
    if bytes[0] & 0x80 != 0 {
        bytes.insert(0, 0x00);
    }
    let mut out = Vec::with_capacity(bytes.len() + 2);
    out.push(0x02);
    out.push(bytes.len() as u8);
    out.extend_from_slice(&bytes);
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_round_trips_der() {
        let sig = Signature::new(BigUint::from(12345u32), BigUint::from(67890u32));
        let der = sig.to_der();
        let parsed = Signature::from_der(&der).unwrap();
        assert_eq!(sig, parsed);
    }

    #[test]
    fn it_pads_high_bit_integers() {
        // r with a leading byte >= 0x80 must get a 0x00 pad so DER doesn't read it as negative.
        let r = BigUint::parse_bytes(b"ff00000000000000000000000000000000000000000000000000000000000a", 16).unwrap();
        let sig = Signature::new(r.clone(), BigUint::from(1u32));
        let der = sig.to_der();
        // 0x02, len=33, 0x00 pad, then the 32 payload bytes
        assert_eq!(der[2], 0x02);
        assert_eq!(der[3], 33);
        assert_eq!(der[4], 0x00);
        let parsed = Signature::from_der(&der).unwrap();
        assert_eq!(parsed.r, r);
    }

    #[test]
    fn it_rejects_truncated_der() {
        assert!(matches!(
            Signature::from_der(&[0x30, 0x02]),
            Err(Secp256k1Error::DerMalformed(_))
        ));
    }

    #[test]
    fn it_rejects_an_oversized_r_length_field() {
        // claims r_len = 200 with a matching inflated outer sequence length, rather than
        // truncating the buffer, so the length check (not the bounds check) is what fires.
        let mut body = vec![0x02u8, 200];
        body.extend(std::iter::repeat(0x01).take(200));
        body.push(0x02);
        body.push(1);
        body.push(0x01);
        let mut data = vec![0x30, body.len() as u8];
        data.extend(body);
        assert!(matches!(
            Signature::from_der(&data),
            Err(Secp256k1Error::DerMalformed("invalid r length"))
        ));
    }

    #[test]
    fn it_rejects_an_oversized_s_length_field() {
        let r = der_encode_integer(&BigUint::from(1u32));
        let mut body = r.clone();
        body.push(0x02);
        body.push(200);
        body.extend(std::iter::repeat(0x01).take(200));
        let mut data = vec![0x30, body.len() as u8];
        data.extend(body);
        assert!(matches!(
            Signature::from_der(&data),
            Err(Secp256k1Error::DerMalformed("invalid s length"))
        ));
    }
}
