//! Ledger fetching and block assembly.
//!
//! The fetcher polls the upstream node until the requested ledger is
//! validated, fetches it in binary mode, fans the transaction decoding out
//! over a worker pool, and assembles the canonical block. The envelope
//! adapter wraps a block into the downstream stream record.

mod envelope;
mod error;
mod service;

pub use envelope::{wrap_block, StreamBlock, BLOCK_TYPE_URL};
pub use error::FetchError;
pub use service::Fetcher;
