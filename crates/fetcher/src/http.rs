//! An HTTP-backed [`PrevoutResolver`] against a blockstream.info-style raw-transaction endpoint.
use std::collections::HashMap;
use std::time::Duration;

use satstack_core::ser::ByteFormat;
use satstack_transaction::{OutPoint, Output, Transaction};
use tracing::{debug, instrument};

use crate::error::{FetchError, FetchResult};
use crate::resolver::PrevoutResolver;

const MAINNET_BASE: &str = "https://blockstream.info/api/tx";
const TESTNET_BASE: &str = "https://blockstream.info/testnet/api/tx";

/// Fetches previous transactions over HTTP from a block explorer's raw-transaction endpoint,
/// caching each one by its own computed txid.
///
/// Every fetch recomputes the fetched transaction's txid and compares it against the one
/// requested, returning [`FetchError::TxIdMismatch`] on failure rather than trusting whatever
/// bytes the server sent back.
pub struct HttpPrevoutResolver {
    base_url: &'static str,
    client: reqwest::blocking::Client,
    cache: HashMap<String, Transaction>,
}

impl HttpPrevoutResolver {
    /// Build a resolver against mainnet or testnet blockstream.info.
    pub fn new(testnet: bool) -> HttpPrevoutResolver {
        HttpPrevoutResolver {
            base_url: if testnet { TESTNET_BASE } else { MAINNET_BASE },
            client: reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("reqwest client with no custom TLS config always builds"),
            cache: HashMap::new(),
        }
    }

    /// Fetch (or return the cached copy of) the transaction identified by `txid_hex`, the
    /// display-order (block-explorer) hex string.
    #[instrument(skip(self), fields(txid = %txid_hex))]
    pub fn fetch_transaction(&mut self, txid_hex: &str, fresh: bool) -> FetchResult<&Transaction> {
        if !fresh {
            if self.cache.contains_key(txid_hex) {
                debug!("serving cached transaction");
                return Ok(&self.cache[txid_hex]);
            }
        }

        let url = format!("{}/{}/raw", self.base_url, txid_hex);
        debug!(%url, "fetching transaction");
        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(FetchError::BadStatus {
                txid: txid_hex.to_string(),
                status: response.status().as_u16(),
            });
        }
        let bytes = response.bytes()?;

        let tx =
            Transaction::read_from(&mut bytes.as_ref()).map_err(|source| FetchError::Malformed {
                txid: txid_hex.to_string(),
                source,
            })?;

        let actual_txid = tx.txid().map_err(|source| FetchError::Malformed {
            txid: txid_hex.to_string(),
            source,
        })?;
        let actual_hex = hex::encode(actual_txid.to_display_bytes());
        if actual_hex != txid_hex {
            return Err(FetchError::TxIdMismatch {
                requested: txid_hex.to_string(),
                actual: actual_hex,
            });
        }

        self.cache.insert(txid_hex.to_string(), tx);
        Ok(&self.cache[txid_hex])
    }
}

impl PrevoutResolver for HttpPrevoutResolver {
    fn resolve(&mut self, outpoint: &OutPoint) -> FetchResult<Output> {
        let txid_hex = hex::encode(outpoint.txid.to_display_bytes());
        let tx = self.fetch_transaction(&txid_hex, false)?;
        tx.outputs
            .get(outpoint.index as usize)
            .cloned()
            .ok_or(FetchError::OutputIndexOutOfRange {
                txid: txid_hex,
                index: outpoint.index,
                count: tx.outputs.len(),
            })
    }
}
