//! Utility modules shared across the crate.

mod http;
mod logging;
mod time;

pub use http::{create_retryable_http_client, default_rpc_http_client, HttpRetryConfig};
pub use logging::{setup_logging, setup_logging_with_writer};
pub use time::{parse_drops, xrpl_epoch_to_timestamp, xrpl_epoch_to_unix, XRPL_EPOCH_OFFSET};
