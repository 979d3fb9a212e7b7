//! Services for the ledger-to-block pipeline.
//!
//! - `rpc`: JSON-RPC client for the upstream rippled node
//! - `decoder`: binary-codec seam and transaction mapping
//! - `fetcher`: poll/fetch state machine and block assembly

pub mod decoder;
pub mod fetcher;
pub mod rpc;
