use thiserror::Error;

/// Errors from parsing, serializing, signing, or verifying a [`crate::Transaction`].
#[derive(Debug, Error)]
pub enum TxError {
    /// Caller provided an unknown sighash type byte; only `SIGHASH_ALL` (`0x01`) is implemented.
    #[error("unknown or unsupported sighash type: 0x{0:02x}")]
    UnknownSighash(u8),

    /// The transaction carries the segwit marker/flag byte pair (`0x00 0x01`) immediately after
    /// the version field. This crate only implements the legacy (pre-segwit) wire format.
    #[error("segwit transactions are not supported")]
    SegwitUnsupported,

    /// `input_index` is out of range for this transaction's input list.
    #[error("input index {0} out of range")]
    InputIndexOutOfRange(usize),

    /// The referenced previous output could not be resolved to compute its sighash.
    #[error("no prevout supplied for input {0}")]
    MissingPrevout(usize),

    /// Sum of output values exceeded the sum of input values.
    #[error("negative fee: inputs {inputs} < outputs {outputs}")]
    NegativeFee {
        /// Total value of resolved inputs, in satoshis.
        inputs: u64,
        /// Total value of outputs, in satoshis.
        outputs: u64,
    },

    /// Wraps a lower-level script (de)serialization or evaluation failure.
    #[error(transparent)]
    Script(#[from] satstack_script::ScriptError),

    /// Wraps a lower-level signature or key-material failure.
    #[error(transparent)]
    Secp256k1(#[from] satstack_secp256k1::Secp256k1Error),

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

/// Convenience alias for fallible transaction operations.
pub type TxResult<T> = Result<T, TxError>;
