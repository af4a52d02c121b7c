//! The [`PrevoutResolver`] contract and an in-memory implementation for tests and offline use.
use std::collections::HashMap;

use satstack_transaction::{OutPoint, Output, Transaction};

use crate::error::{FetchError, FetchResult};

/// Resolves a previous transaction's output, given the outpoint a spending input references.
///
/// Implementations are expected to cache fetched transactions and to verify a fetched
/// transaction's own computed txid against the one requested before handing its outputs back —
/// see [`crate::http::HttpPrevoutResolver`] for the networked implementation that contract is
/// really for.
pub trait PrevoutResolver {
    /// Resolve `outpoint` to the [`Output`] it references.
    fn resolve(&mut self, outpoint: &OutPoint) -> FetchResult<Output>;
}

/// A resolver backed by an explicit, caller-populated transaction map. Useful for tests and for
/// wallets that already have the relevant transactions on hand.
#[derive(Debug, Default)]
pub struct MemoryPrevoutResolver {
    transactions: HashMap<String, Transaction>,
}

impl MemoryPrevoutResolver {
    /// An empty resolver.
    pub fn new() -> MemoryPrevoutResolver {
        MemoryPrevoutResolver {
            transactions: HashMap::new(),
        }
    }

    /// Insert a transaction, keyed by its own computed txid, so later [`resolve`](PrevoutResolver::resolve)
    /// calls against its outputs can succeed.
    pub fn insert(&mut self, tx: Transaction) -> FetchResult<()> {
        let txid = tx
            .txid()
            .map_err(|source| FetchError::Malformed {
                txid: "<unknown>".into(),
                source,
            })?;
        self.transactions.insert(hex::encode(txid.to_display_bytes()), tx);
        Ok(())
    }
}

impl PrevoutResolver for MemoryPrevoutResolver {
    fn resolve(&mut self, outpoint: &OutPoint) -> FetchResult<Output> {
        let key = hex::encode(outpoint.txid.to_display_bytes());
        let tx = self
            .transactions
            .get(&key)
            .ok_or_else(|| FetchError::NotFound(key.clone()))?;
        tx.outputs
            .get(outpoint.index as usize)
            .cloned()
            .ok_or(FetchError::OutputIndexOutOfRange {
                txid: key,
                index: outpoint.index,
                count: tx.outputs.len(),
            })
    }
}
