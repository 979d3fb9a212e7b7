//! HTTP client construction for the RPC layer.
//!
//! Builds a `reqwest` client tuned for long-lived JSON-RPC polling against a
//! single rippled endpoint, wrapped in retry middleware for transient
//! failures.

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, Jitter, RetryTransientMiddleware};
use std::time::Duration;

/// Configuration for HTTP retry policies
#[derive(Debug, Clone)]
pub struct HttpRetryConfig {
	/// Maximum number of retries for transient errors
	pub max_retries: u32,
	/// Base duration for exponential backoff calculations
	pub base_for_backoff: u32,
	/// Initial backoff duration before the first retry
	pub initial_backoff: Duration,
	/// Maximum backoff duration for retries
	pub max_backoff: Duration,
	/// Jitter to apply to the backoff duration
	pub jitter: Jitter,
}

impl Default for HttpRetryConfig {
	fn default() -> Self {
		Self {
			max_retries: 2,
			base_for_backoff: 2,
			initial_backoff: Duration::from_millis(250),
			max_backoff: Duration::from_secs(10),
			jitter: Jitter::Full,
		}
	}
}

/// Builds the base `reqwest` client used for rippled JSON-RPC requests.
///
/// Total request timeout is 60 s with a 30 s connect timeout. Idle
/// connections are pooled (10 per host, 90 s idle) so consecutive ledger
/// fetches reuse the same connection; HTTP/2 is negotiated via ALPN when the
/// endpoint supports it.
pub fn default_rpc_http_client() -> Result<reqwest::Client, reqwest::Error> {
	reqwest::Client::builder()
		.timeout(Duration::from_secs(60))
		.connect_timeout(Duration::from_secs(30))
		.pool_max_idle_per_host(10)
		.pool_idle_timeout(Duration::from_secs(90))
		.build()
}

/// Wraps a base HTTP client with retry middleware for a single URL.
///
/// The retry policy only fires on transient failures (connection resets,
/// 5xx); RPC-level errors inside a 200 envelope are handled by the caller.
pub fn create_retryable_http_client(
	config: &HttpRetryConfig,
	base_client: reqwest::Client,
) -> ClientWithMiddleware {
	let retry_policy = ExponentialBackoff::builder()
		.base(config.base_for_backoff)
		.retry_bounds(config.initial_backoff, config.max_backoff)
		.jitter(config.jitter)
		.build_with_max_retries(config.max_retries);

	ClientBuilder::new(base_client)
		.with(RetryTransientMiddleware::new_with_policy(retry_policy))
		.build()
}
