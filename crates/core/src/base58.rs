//! Base58Check: Bitcoin's Base58 encoding with an appended 4-byte `Hash256` checksum.
use crate::error::CoreError;
use crate::hashes::hash256;

/// Base58Check-encode `payload`, appending `Hash256(payload)[..4]` before encoding.
pub fn encode_check(payload: &[u8]) -> String {
    let checksum = hash256(payload);
    let mut extended = Vec::with_capacity(payload.len() + 4);
    extended.extend_from_slice(payload);
    extended.extend_from_slice(&checksum[..4]);
    bs58::encode(extended).into_string()
}

/// Base58Check-decode `s`, verifying and stripping the trailing 4-byte checksum.
///
/// Returns the payload (without the checksum). Fails with [`CoreError::Base58InvalidChar`] on an
/// out-of-alphabet byte and [`CoreError::AddressChecksum`] on a checksum mismatch.
pub fn decode_check(s: &str) -> Result<Vec<u8>, CoreError> {
    let raw = bs58::decode(s)
        .into_vec()
        .map_err(|_| CoreError::Base58InvalidChar(first_bad_byte(s)))?;
    if raw.len() < 4 {
        return Err(CoreError::AddressLength(raw.len()));
    }
    let (payload, checksum) = raw.split_at(raw.len() - 4);
    if hash256(payload)[..4] != *checksum {
        return Err(CoreError::AddressChecksum);
    }
    Ok(payload.to_vec())
}

// bs58's error doesn't carry the offending byte back out in a form we can reuse directly, so we
// re-scan to report something actionable. `s` is assumed ASCII-ish; any byte that isn't in the
// standard alphabet is reported, not necessarily the first one bs58's decoder choked on.
fn first_bad_byte(s: &str) -> u8 {
    const ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
    s.bytes()
        .find(|b| !ALPHABET.contains(b))
        .unwrap_or(0)
}
