//! HASH160 and HASH256, the two composite digests Bitcoin uses everywhere.
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// `RIPEMD160(SHA256(data))`, used for public-key and script hashes.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    let ripe = Ripemd160::digest(sha);
    ripe.into()
}

/// `SHA256(SHA256(data))`, used for transaction ids and sighashes.
pub fn hash256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    second.into()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_hashes_the_empty_string() {
        assert_eq!(
            hex::encode(hash256(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn it_hashes_hash160_of_empty() {
        assert_eq!(
            hex::encode(hash160(b"")),
            "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
        );
    }
}
