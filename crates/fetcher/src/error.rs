use thiserror::Error;

/// Errors resolving a previous transaction output.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The underlying HTTP request failed outright (DNS, connect, TLS, timeout, ...).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server responded, but not with 200 OK.
    #[error("fetching transaction {txid} returned status {status}")]
    BadStatus {
        /// The txid that was requested.
        txid: String,
        /// The HTTP status code received.
        status: u16,
    },

    /// No transaction with this txid is present in the resolver's backing store.
    #[error("transaction {0} not found")]
    NotFound(String),

    /// The fetched bytes didn't parse as a legacy transaction.
    #[error("failed to parse fetched transaction {txid}: {source}")]
    Malformed {
        /// The txid that was requested.
        txid: String,
        /// The underlying parse failure.
        #[source]
        source: satstack_transaction::TxError,
    },

    /// The fetched transaction's own txid didn't match the one requested — the fetch was either
    /// served by a compromised/misbehaving endpoint or hit a cache-poisoning bug. Treated as
    /// fatal rather than silently trusted.
    #[error("fetched transaction id {actual} does not match requested id {requested}")]
    TxIdMismatch {
        /// The txid that was requested.
        requested: String,
        /// The txid the fetched bytes actually hashed to.
        actual: String,
    },

    /// `output_index` was out of range for the resolved transaction's output list.
    #[error("output index {index} out of range for transaction {txid} ({count} outputs)")]
    OutputIndexOutOfRange {
        /// The txid whose outputs were indexed.
        txid: String,
        /// The requested output index.
        index: u32,
        /// The number of outputs the transaction actually has.
        count: usize,
    },
}

/// Convenience alias for fallible prevout resolution.
pub type FetchResult<T> = Result<T, FetchError>;
