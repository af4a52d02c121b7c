use thiserror::Error;

/// Errors from parsing, serializing, or evaluating a [`crate::Script`].
#[derive(Debug, Error)]
pub enum ScriptError {
    /// An opcode byte not in the opcode table was encountered during evaluation.
    #[error("unknown opcode: 0x{0:02x}")]
    UnknownOpcode(u8),

    /// An operation needed more stack items than were present.
    #[error("stack underflow: {0} needs at least {1} item(s)")]
    StackUnderflow(&'static str, usize),

    /// The alt stack was empty when `OP_FROMALTSTACK` ran.
    #[error("alt stack is empty")]
    AltStackUnderflow,

    /// An `OP_IF`/`OP_NOTIF`/`OP_ELSE`/`OP_ENDIF` nest never closed.
    #[error("unbalanced if/else/endif block")]
    UnbalancedConditional,

    /// A pushdata length field ran past the end of the script.
    #[error("truncated push: wanted {wanted} byte(s), {available} remaining")]
    TruncatedPush {
        /// Bytes the pushdata declared it needed.
        wanted: usize,
        /// Bytes actually remaining in the input.
        available: usize,
    },

    /// A pushdata element exceeded the 520-byte limit Bitcoin Script enforces.
    #[error("element too long: {0} bytes")]
    ElementTooLong(usize),

    /// Final evaluation left more or less than exactly one truthy element on the stack.
    #[error("script did not reduce to a single truthy result")]
    NotCleanStack,

    /// `OP_CHECKSIG` was asked to verify a malformed signature or public key.
    #[error("checksig operand was malformed: {0}")]
    InvalidChecksigOperand(#[from] satstack_secp256k1::Secp256k1Error),

    /// Wraps a lower-level byte-format I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wraps a hex (de)serialization failure.
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),

    /// Wraps a CompactSize or other core wire-format failure.
    #[error(transparent)]
    Core(#[from] satstack_core::CoreError),
}

/// Convenience alias for fallible script operations.
pub type ScriptResult<T> = Result<T, ScriptError>;
