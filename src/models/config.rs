//! Fetcher configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default number of workers decoding transactions within one ledger.
pub const DEFAULT_WORKER_POOL_SIZE: usize = 10;

/// Default log filter applied when `RUST_LOG` is unset: pipeline logs at
/// `info`, the HTTP client stack quieted to warnings.
pub const DEFAULT_LOG_DIRECTIVES: &str = "info,hyper=warn,reqwest=warn";

/// Errors raised while validating a [`FetcherConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("rpc_endpoint must not be empty")]
	MissingEndpoint,

	#[error("worker_pool_size must be at least 1")]
	InvalidWorkerPoolSize,
}

/// Configuration for the ledger fetcher.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetcherConfig {
	/// JSON-RPC endpoint URL of the upstream rippled node.
	pub rpc_endpoint: String,

	/// First ledger sequence the caller intends to stream.
	pub first_streamable_sequence: u64,

	/// Number of workers decoding transactions within one ledger.
	#[serde(default = "default_worker_pool_size")]
	pub worker_pool_size: usize,

	/// Pause between polls while waiting for the target ledger to validate.
	#[serde(default = "default_retry_interval", with = "duration_millis")]
	pub latest_block_retry_interval: Duration,

	/// Upper bound on the fetch-and-assemble phase for a single ledger.
	#[serde(default = "default_max_fetch_duration", with = "duration_millis")]
	pub max_block_fetch_duration: Duration,

	/// Log filter directives used when `RUST_LOG` is unset; handed to
	/// `utils::logging::setup_logging`.
	#[serde(default = "default_log_directives")]
	pub log_directives: String,
}

fn default_log_directives() -> String {
	DEFAULT_LOG_DIRECTIVES.to_string()
}

fn default_worker_pool_size() -> usize {
	DEFAULT_WORKER_POOL_SIZE
}

fn default_retry_interval() -> Duration {
	Duration::from_secs(1)
}

fn default_max_fetch_duration() -> Duration {
	Duration::from_secs(10)
}

mod duration_millis {
	use serde::{Deserialize, Deserializer, Serializer};
	use std::time::Duration;

	pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_u64(value.as_millis() as u64)
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
		let millis = u64::deserialize(deserializer)?;
		Ok(Duration::from_millis(millis))
	}
}

impl Default for FetcherConfig {
	fn default() -> Self {
		Self {
			rpc_endpoint: String::new(),
			first_streamable_sequence: 0,
			worker_pool_size: default_worker_pool_size(),
			latest_block_retry_interval: default_retry_interval(),
			max_block_fetch_duration: default_max_fetch_duration(),
			log_directives: default_log_directives(),
		}
	}
}

impl FetcherConfig {
	/// Creates a configuration for a single endpoint with defaults elsewhere.
	pub fn new(rpc_endpoint: impl Into<String>) -> Self {
		Self {
			rpc_endpoint: rpc_endpoint.into(),
			..Default::default()
		}
	}

	/// Validates the configuration.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.rpc_endpoint.trim().is_empty() {
			return Err(ConfigError::MissingEndpoint);
		}
		if self.worker_pool_size == 0 {
			return Err(ConfigError::InvalidWorkerPoolSize);
		}
		Ok(())
	}
}
