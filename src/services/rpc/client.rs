//! XRPL JSON-RPC client implementation.
//!
//! Speaks the rippled JSON-RPC 1.0 dialect over HTTP POST: a single
//! endpoint, `{"method": ..., "params": [{...}]}` bodies, and a `result`
//! envelope carrying the status. Ledger fetches run in binary mode so
//! transaction blobs pass through untouched.

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde_json::{json, Value};
use tracing::instrument;

use crate::{
	models::{LedgerClosedResult, LedgerResult},
	services::rpc::RpcError,
	utils::{create_retryable_http_client, default_rpc_http_client, HttpRetryConfig},
};

/// Operations the fetcher needs from an upstream node.
#[async_trait]
pub trait LedgerRpc: Send + Sync {
	/// Returns the latest closed (validated) ledger hash and sequence.
	async fn get_latest_validated(&self) -> Result<LedgerClosedResult, RpcError>;

	/// Fetches a ledger with all transactions in binary format.
	async fn get_ledger(&self, sequence: u64) -> Result<LedgerResult, RpcError>;
}

/// JSON-RPC client bound to a single rippled endpoint.
#[derive(Clone, Debug)]
pub struct HttpRpcClient {
	endpoint: String,
	client: ClientWithMiddleware,
}

impl HttpRpcClient {
	/// Creates a new client for the given endpoint with the default
	/// retryable HTTP client.
	pub fn new(endpoint: impl Into<String>) -> Result<Self, RpcError> {
		let base_client = default_rpc_http_client()
			.map_err(|e| RpcError::transport_error(format!("failed to build HTTP client: {}", e)))?;
		let client = create_retryable_http_client(&HttpRetryConfig::default(), base_client);
		Ok(Self::new_with_client(endpoint, client))
	}

	/// Creates a new client with a specific middleware client.
	pub fn new_with_client(endpoint: impl Into<String>, client: ClientWithMiddleware) -> Self {
		Self {
			endpoint: endpoint.into(),
			client,
		}
	}

	/// The endpoint URL this client is bound to.
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// Sends one JSON-RPC request and returns the `result` object.
	async fn send_request(&self, method: &str, params: Value) -> Result<Value, RpcError> {
		let body = json!({
			"method": method,
			"params": [params],
		});

		let response = self
			.client
			.post(&self.endpoint)
			.header("Content-Type", "application/json")
			.json(&body)
			.send()
			.await
			.map_err(|e| RpcError::transport_error(format!("{} request failed: {}", method, e)))?;

		let status = response.status();
		if !status.is_success() {
			let error_body = response.text().await.unwrap_or_default();
			return Err(RpcError::transport_error(format!(
				"{} request failed with status {}: {}",
				method, status, error_body
			)));
		}

		let mut envelope: Value = response.json().await.map_err(|e| {
			RpcError::transport_error(format!("failed to parse {} response: {}", method, e))
		})?;

		Ok(envelope
			.get_mut("result")
			.map(Value::take)
			.unwrap_or(Value::Null))
	}
}

#[async_trait]
impl LedgerRpc for HttpRpcClient {
	#[instrument(skip(self))]
	async fn get_latest_validated(&self) -> Result<LedgerClosedResult, RpcError> {
		let result = self.send_request("ledger_closed", json!({})).await?;

		let closed: LedgerClosedResult = serde_json::from_value(result).map_err(|e| {
			RpcError::transport_error(format!("failed to parse ledger_closed result: {}", e))
		})?;

		if closed.is_error() {
			let message = if closed.error_message.is_empty() {
				closed.error.clone()
			} else {
				closed.error_message.clone()
			};
			return Err(RpcError::response_error(message));
		}

		Ok(closed)
	}

	#[instrument(skip(self), fields(sequence))]
	async fn get_ledger(&self, sequence: u64) -> Result<LedgerResult, RpcError> {
		let params = json!({
			"ledger_index": sequence,
			"transactions": true,
			"expand": true,
			"binary": true,
		});

		let result = self.send_request("ledger", params).await?;

		let ledger: LedgerResult = serde_json::from_value(result).map_err(|e| {
			RpcError::transport_error(format!("failed to parse ledger result: {}", e))
		})?;

		if ledger.is_error() {
			let message = if ledger.error_message.is_empty() {
				ledger.error.clone()
			} else {
				ledger.error_message.clone()
			};
			return Err(RpcError::response_error(message));
		}

		if !ledger.validated {
			return Err(RpcError::not_validated(sequence));
		}

		Ok(ledger)
	}
}
