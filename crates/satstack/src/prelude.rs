//! Re-exports the types most callers reach for: key material, script templates, and
//! transaction construction/verification, without needing to know which workspace crate each
//! lives in.
pub use satstack_core::base58;
pub use satstack_core::hashes::{hash160, hash256};
pub use satstack_core::ser::ByteFormat;

pub use satstack_secp256k1::curve::Point;
pub use satstack_secp256k1::field::FieldElement;
pub use satstack_secp256k1::privkey::{verify, PrivKey};
pub use satstack_secp256k1::signature::Signature;

pub use satstack_script::evaluator::evaluate;
pub use satstack_script::templates::{is_p2pkh, p2pkh_script_pubkey, p2pkh_script_sig};
pub use satstack_script::{Instruction, Script};

pub use satstack_transaction::{Input, OutPoint, Output, SighashFlag, Transaction, TxId};

pub use satstack_fetcher::{HttpPrevoutResolver, MemoryPrevoutResolver, PrevoutResolver};
