//! Script's little-endian sign-magnitude number encoding, used by `OP_IF`/`OP_NOTIF` to
//! interpret the top stack element as a boolean and by small integer pushes.

/// Encode `num` as a minimally-sized little-endian sign-magnitude byte string. Zero encodes to
/// the empty string.
pub fn encode_num(num: i64) -> Vec<u8> {
    if num == 0 {
        return Vec::new();
    }
    let negative = num < 0;
    let mut magnitude = num.unsigned_abs();
    let mut result = Vec::new();
    while magnitude > 0 {
        result.push((magnitude & 0xff) as u8);
        magnitude >>= 8;
    }
    let last = result.len() - 1;
    if result[last] & 0x80 != 0 {
        result.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        result[last] |= 0x80;
    }
    result
}

/// Decode a little-endian sign-magnitude byte string back into a signed integer. The empty
/// string decodes to zero.
pub fn decode_num(element: &[u8]) -> i64 {
    if element.is_empty() {
        return 0;
    }
    let big_endian: Vec<u8> = element.iter().rev().copied().collect();
    let negative = big_endian[0] & 0x80 != 0;
    let mut result: i64 = (big_endian[0] & 0x7f) as i64;
    for &byte in &big_endian[1..] {
        result = (result << 8) | byte as i64;
    }
    if negative {
        -result
    } else {
        result
    }
}
