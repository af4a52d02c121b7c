//! Resolving a transaction input's previous output: an in-memory resolver for tests and
//! offline wallets, and an HTTP-backed resolver against a block explorer.
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Crate-wide error type.
pub mod error;
/// The HTTP-backed [`http::HttpPrevoutResolver`].
pub mod http;
/// The [`resolver::PrevoutResolver`] trait and in-memory implementation.
pub mod resolver;

pub use error::{FetchError, FetchResult};
pub use http::HttpPrevoutResolver;
pub use resolver::{MemoryPrevoutResolver, PrevoutResolver};
