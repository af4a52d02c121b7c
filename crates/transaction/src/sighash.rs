//! Sighash type flags.
use crate::error::TxError;

/// A sighash type byte appended after the DER signature in a `scriptSig` push, and folded into
/// the sighash preimage as a little-endian `u32`.
///
/// `SIGHASH_NONE` and `SIGHASH_SINGLE` (and the anyone-can-pay variants) are out of scope for
/// this crate's legacy-only, single-signer transaction model, so the only constructible variant
/// is `All`. [`SighashFlag::from_u8`] still takes any byte so parsing a `scriptSig` built by
/// other software reports which unsupported type it used rather than silently misreading it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SighashFlag {
    /// `SIGHASH_ALL` (`0x01`): sign every input and every output.
    All,
}

impl SighashFlag {
    /// The flag's wire byte value.
    pub fn to_u8(self) -> u8 {
        match self {
            SighashFlag::All => 0x01,
        }
    }

    /// Parse a sighash type byte, rejecting anything but `SIGHASH_ALL`.
    pub fn from_u8(byte: u8) -> Result<SighashFlag, TxError> {
        match byte {
            0x01 => Ok(SighashFlag::All),
            other => Err(TxError::UnknownSighash(other)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_round_trips_sighash_all() {
        assert_eq!(SighashFlag::from_u8(0x01).unwrap(), SighashFlag::All);
        assert_eq!(SighashFlag::All.to_u8(), 0x01);
    }

    #[test]
    fn it_rejects_unsupported_sighash_types() {
        for byte in [0x00, 0x02, 0x03, 0x81, 0x82, 0x83] {
            assert!(matches!(
                SighashFlag::from_u8(byte),
                Err(TxError::UnknownSighash(b)) if b == byte
            ));
        }
    }
}
