use thiserror::Error;

/// Errors produced by the shared wire-format, hashing, and Base58Check primitives.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A reader ran out of bytes before a fixed-size field could be filled.
    #[error("short read: wanted {wanted} bytes, got {got}")]
    ShortRead {
        /// Bytes requested by the parser.
        wanted: usize,
        /// Bytes actually available.
        got: usize,
    },

    /// A CompactSize-prefixed sequence declared a length that overflows `usize`
    /// on this platform, or exceeds the caller's sanity limit.
    #[error("varint value {0} overflows the accepted range")]
    VarIntOverflow(u64),

    /// Parsing consumed the declared element but bytes remained in the buffer.
    #[error("{0} unexpected trailing bytes after parse")]
    RemainingBytes(usize),

    /// A decoded Base58Check payload is not 25 bytes long.
    #[error("address payload is {0} bytes, expected 25")]
    AddressLength(usize),

    /// The 4-byte Base58Check checksum did not match `Hash256(payload)[..4]`.
    #[error("base58check checksum mismatch")]
    AddressChecksum,

    /// The input string contained a byte outside the Base58 alphabet.
    #[error("invalid base58 character {0:#04x}")]
    Base58InvalidChar(u8),

    /// Bubbled up from `std::io::Write`/`Read` impls used during (de)serialization.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Bubbled up from hex decoding of test vectors and wire strings.
    #[error(transparent)]
    HexError(#[from] hex::FromHexError),
}

/// Convenience alias for fallible core operations.
pub type CoreResult<T> = Result<T, CoreError>;
