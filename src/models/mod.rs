//! Data models for the ledger-to-block pipeline.
//!
//! Contains the JSON-RPC wire types, the canonical protobuf block records,
//! the transaction-type and result-code registries, and the fetcher
//! configuration.

mod config;
pub mod ledger;
pub mod proto;
pub mod registry;

pub use config::{ConfigError, FetcherConfig, DEFAULT_LOG_DIRECTIVES};
pub use ledger::{
	LedgerClosedResult, LedgerHeader, LedgerResult, RawLedger, RawLedgerTransaction,
};
