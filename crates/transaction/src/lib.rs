//! Legacy (pre-segwit) Bitcoin transactions: wire format, txid, sighash, signing, and
//! per-input verification.
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Crate-wide error type.
pub mod error;
/// A transaction input and the outpoint it spends.
pub mod input;
/// A transaction output.
pub mod output;
/// Sighash type flags.
pub mod sighash;
/// The [`Transaction`] type itself: codec, txid, sighash, signing, verification.
pub mod transaction;
/// The marked transaction-id digest type.
pub mod txid;

pub use error::{TxError, TxResult};
pub use input::{Input, OutPoint};
pub use output::Output;
pub use sighash::SighashFlag;
pub use transaction::Transaction;
pub use txid::TxId;
