//! `TxId`: a marked 32-byte digest, to avoid confusing a transaction id with any other
//! `Hash256` value floating around a sighash computation.
//!
//! A tagged wrapper instead of a bare `[u8; 32]`, since this crate only ever has one kind of hash
//! to mark.
use std::fmt;

/// The `Hash256` of a transaction's legacy serialization, internal (little-endian, as computed)
/// byte order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxId([u8; 32]);

impl TxId {
    /// Wrap a raw digest in internal byte order.
    pub fn new(digest: [u8; 32]) -> TxId {
        TxId(digest)
    }

    /// The raw digest bytes, internal byte order.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The digest in the byte order Bitcoin block explorers and RPCs display txids in
    /// (reversed from internal/wire order).
    pub fn to_display_bytes(&self) -> [u8; 32] {
        let mut reversed = self.0;
        reversed.reverse();
        reversed
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.to_display_bytes()))
    }
}

impl fmt::Debug for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxId({})", self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_displays_in_reversed_byte_order() {
        let mut digest = [0u8; 32];
        digest[0] = 0xaa;
        digest[31] = 0xbb;
        let txid = TxId::new(digest);
        let displayed = format!("{}", txid);
        assert!(displayed.starts_with("bb"));
        assert!(displayed.ends_with("aa"));
    }
}
