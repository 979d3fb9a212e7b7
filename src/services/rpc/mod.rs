//! JSON-RPC client for the upstream rippled node.

mod client;
mod error;

pub use client::{HttpRpcClient, LedgerRpc};
pub use error::RpcError;
