//! Bitcoin's CompactSize (a.k.a. VarInt) length-prefix encoding.
use std::io::{Read, Write};

use crate::error::CoreError;
use crate::ser::{read_u16_le, read_u32_le, read_u64_le, write_u16_le, write_u32_le, write_u64_le};

/// Read a CompactSize-encoded integer from `reader`.
pub fn read_compact_int<R: Read>(reader: &mut R) -> Result<u64, CoreError> {
    let mut marker = [0u8; 1];
    reader.read_exact(&mut marker)?;
    match marker[0] {
        0xff => Ok(read_u64_le(reader)?),
        0xfe => Ok(read_u32_le(reader)? as u64),
        0xfd => Ok(read_u16_le(reader)? as u64),
        n => Ok(n as u64),
    }
}

/// Write `n` as a CompactSize integer to `writer`, returning the number of bytes written.
pub fn write_compact_int<W: Write>(writer: &mut W, n: u64) -> Result<usize, CoreError> {
    if n < 0xfd {
        writer.write_all(&[n as u8])?;
        Ok(1)
    } else if n <= 0xffff {
        writer.write_all(&[0xfd])?;
        write_u16_le(writer, n as u16)?;
        Ok(3)
    } else if n <= 0xffff_ffff {
        writer.write_all(&[0xfe])?;
        write_u32_le(writer, n as u32)?;
        Ok(5)
    } else {
        writer.write_all(&[0xff])?;
        write_u64_le(writer, n)?;
        Ok(9)
    }
}

/// The number of bytes `write_compact_int` would emit for `n`, without allocating.
pub fn compact_int_length(n: u64) -> usize {
    if n < 0xfd {
        1
    } else if n <= 0xffff {
        3
    } else if n <= 0xffff_ffff {
        5
    } else {
        9
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_round_trips_compact_ints() {
        let cases: &[(u64, &str)] = &[
            (0, "00"),
            (0xfc, "fc"),
            (0xfd, "fdfd00"),
            (0xffff, "fdffff"),
            (0x1_0000, "fe00000100"),
            (0xffff_ffff, "feffffffff"),
            (0x1_0000_0000, "ff0000000001000000"),
        ];
        for (n, expected) in cases.iter() {
            let mut buf = vec![];
            let written = write_compact_int(&mut buf, *n).unwrap();
            assert_eq!(hex::encode(&buf), *expected);
            assert_eq!(written, compact_int_length(*n));
            assert_eq!(read_compact_int(&mut buf.as_slice()).unwrap(), *n);
        }
    }
}
