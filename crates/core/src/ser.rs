//! A minimal (de)serialization trait shared by every wire type in the workspace.
//!
//! It gives every `Script`, `Transaction`, `Input`, and `Output` a uniform `read_from`/`write_to`
//! contract and a couple of hex convenience methods for tests.
use std::io::{Read, Write};

/// Types that round-trip to and from the Bitcoin wire format.
pub trait ByteFormat: Sized {
    /// The error type returned on a malformed read.
    type Error: std::error::Error + From<std::io::Error> + From<hex::FromHexError>;

    /// The length in bytes of this value's wire encoding.
    fn serialized_length(&self) -> usize;

    /// Parse `Self` from a reader positioned at the start of its encoding.
    fn read_from<R: Read>(reader: &mut R) -> Result<Self, Self::Error>;

    /// Write `Self`'s wire encoding to `writer`, returning the number of bytes written.
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<usize, Self::Error>;

    /// Serialize to a lowercase hex string. Infallible: writing to a `Vec<u8>` cannot fail.
    fn serialize_hex(&self) -> String {
        let mut buf = vec![];
        self.write_to(&mut buf)
            .expect("Vec<u8> writer is infallible");
        hex::encode(buf)
    }

    /// Parse `Self` from a hex string, failing on malformed hex or a malformed encoding.
    fn deserialize_hex(s: &str) -> Result<Self, Self::Error> {
        let buf = hex::decode(s)?;
        Self::read_from(&mut buf.as_slice())
    }
}

/// Read a little-endian `u16` from `reader`.
pub fn read_u16_le<R: Read>(reader: &mut R) -> std::io::Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

/// Read a little-endian `u32` from `reader`.
pub fn read_u32_le<R: Read>(reader: &mut R) -> std::io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian `u64` from `reader`.
pub fn read_u64_le<R: Read>(reader: &mut R) -> std::io::Result<u64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Write a little-endian `u16` to `writer`, returning the byte count.
pub fn write_u16_le<W: Write>(writer: &mut W, n: u16) -> std::io::Result<usize> {
    writer.write(&n.to_le_bytes())
}

/// Write a little-endian `u32` to `writer`, returning the byte count.
pub fn write_u32_le<W: Write>(writer: &mut W, n: u32) -> std::io::Result<usize> {
    writer.write(&n.to_le_bytes())
}

/// Write a little-endian `u64` to `writer`, returning the byte count.
pub fn write_u64_le<W: Write>(writer: &mut W, n: u64) -> std::io::Result<usize> {
    writer.write(&n.to_le_bytes())
}
