//! Bitcoin Script: opcodes, serialization, and a two-stack evaluator.
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Two-stack (main + alt) instruction evaluator.
pub mod evaluator;
/// Crate-wide error type.
pub mod error;
/// Sign-magnitude number encoding used by stack truthiness checks.
pub mod numbers;
/// Opcode constants and names.
pub mod opcodes;
/// [`Instruction`] and [`Script`], plus their wire codec.
pub mod script;
/// Standard script templates (P2PKH).
pub mod templates;

pub use error::{ScriptError, ScriptResult};
pub use evaluator::evaluate;
pub use script::{Instruction, Script};
