//! Fetches validated XRP Ledger ledgers from a rippled JSON-RPC endpoint and
//! converts them into canonical stream blocks.
//!
//! The pipeline is split into three services: an RPC client that speaks the
//! rippled JSON-RPC dialect in binary mode, a decoder that turns opaque
//! transaction blobs into typed records through an external binary codec,
//! and a fetcher that polls for validated ledgers and assembles blocks.

pub mod models;
pub mod services;
pub mod utils;

pub use models::FetcherConfig;
pub use services::decoder::{BinaryCodec, CodecError, Decoder};
pub use services::fetcher::{wrap_block, FetchError, Fetcher, StreamBlock};
pub use services::rpc::{HttpRpcClient, LedgerRpc, RpcError};
