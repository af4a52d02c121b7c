use thiserror::Error;

/// Errors produced by field, curve, signature, and key-material operations.
#[derive(Debug, Error)]
pub enum Secp256k1Error {
    /// Two field (or curve) operands were constructed over different parameters.
    #[error("operands belong to different field/curve domains")]
    DomainMismatch,

    /// A constructed affine point does not satisfy the curve equation.
    #[error("point is not on the curve")]
    PointNotOnCurve,

    /// A scalar multiplication was attempted with a negative scalar.
    #[error("scalar must be non-negative")]
    NegativeScalar,

    /// A field division was attempted with a zero divisor.
    #[error("division by zero in GF(p)")]
    DivisionByZero,

    /// A SEC-encoded public key had an invalid prefix, length, or x-coordinate.
    #[error("malformed SEC-encoded point: {0}")]
    SecMalformed(&'static str),

    /// A DER-encoded signature failed the structural checks in the DER parser.
    #[error("malformed DER signature: {0}")]
    DerMalformed(&'static str),

    /// A decoded Base58Check address payload was not 25 bytes.
    #[error(transparent)]
    AddressLength(#[from] satstack_core::error::CoreError),

    /// A random nonce generator failed to produce a candidate in range after repeated tries.
    #[error("nonce source exhausted its retry budget")]
    NonceExhausted,
}

/// Convenience alias for fallible secp256k1 operations.
pub type Secp256k1Result<T> = Result<T, Secp256k1Error>;
