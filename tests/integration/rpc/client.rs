//! Integration tests for the JSON-RPC client against a mock rippled server.

use mockito::{Matcher, Server};
use serde_json::json;

use xrpl_firehose::services::rpc::RpcError;
use xrpl_firehose::{HttpRpcClient, LedgerRpc};

/// Client without retry middleware so error paths stay fast.
fn plain_client(url: &str) -> HttpRpcClient {
	let client = reqwest_middleware::ClientBuilder::new(reqwest::Client::new()).build();
	HttpRpcClient::new_with_client(url, client)
}

#[tokio::test]
async fn test_get_latest_validated_success() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({"method": "ledger_closed"})))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(
			json!({
				"result": {
					"ledger_hash": "A1B2C3",
					"ledger_index": 80_000_000u64,
					"status": "success"
				}
			})
			.to_string(),
		)
		.create_async()
		.await;

	let client = HttpRpcClient::new(server.url()).unwrap();
	let result = client.get_latest_validated().await.unwrap();
	assert_eq!(result.ledger_index, 80_000_000);
	assert_eq!(result.ledger_hash, "A1B2C3");
	mock.assert_async().await;
}

#[tokio::test]
async fn test_get_latest_validated_error_envelope() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("POST", "/")
		.with_status(200)
		.with_body(
			json!({
				"result": {
					"status": "error",
					"error": "noNetwork",
					"error_message": "Not synced to the network."
				}
			})
			.to_string(),
		)
		.create_async()
		.await;

	let client = plain_client(&server.url());
	let err = client.get_latest_validated().await.unwrap_err();
	match err {
		RpcError::ResponseError(msg) => assert_eq!(msg, "Not synced to the network."),
		other => panic!("expected ResponseError, got {}", other),
	}
}

#[tokio::test]
async fn test_get_ledger_sends_binary_mode_params() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({
			"method": "ledger",
			"params": [{
				"ledger_index": 80_000_000u64,
				"transactions": true,
				"expand": true,
				"binary": true
			}]
		})))
		.with_status(200)
		.with_body(
			json!({
				"result": {
					"ledger": {
						"ledger_data": "0ABC",
						"closed": true,
						"transactions": [
							{"hash": "FF01", "tx_blob": "AB", "meta": "CD"}
						]
					},
					"ledger_hash": "a1b2",
					"ledger_index": 80_000_000u64,
					"validated": true,
					"status": "success"
				}
			})
			.to_string(),
		)
		.create_async()
		.await;

	let client = HttpRpcClient::new(server.url()).unwrap();
	let result = client.get_ledger(80_000_000).await.unwrap();

	// Blobs pass through verbatim, whatever their case.
	assert_eq!(result.ledger.ledger_data, "0ABC");
	assert_eq!(result.ledger.transactions.len(), 1);
	assert_eq!(result.ledger.transactions[0].hash, "FF01");
	assert_eq!(result.ledger.transactions[0].tx_blob, "AB");
	assert_eq!(result.ledger.transactions[0].meta, "CD");
	assert_eq!(result.ledger_hash, "a1b2");
	mock.assert_async().await;
}

#[tokio::test]
async fn test_get_ledger_not_validated() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("POST", "/")
		.with_status(200)
		.with_body(
			json!({
				"result": {
					"ledger": {"ledger_data": "", "closed": true, "transactions": []},
					"ledger_index": 80_000_001u64,
					"validated": false,
					"status": "success"
				}
			})
			.to_string(),
		)
		.create_async()
		.await;

	let client = plain_client(&server.url());
	let err = client.get_ledger(80_000_001).await.unwrap_err();
	assert!(matches!(err, RpcError::NotValidated(80_000_001)));
	assert!(err.is_retryable());
}

#[tokio::test]
async fn test_get_ledger_rpc_error() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("POST", "/")
		.with_status(200)
		.with_body(
			json!({
				"result": {
					"status": "error",
					"error": "lgrNotFound",
					"error_message": "ledgerNotFound"
				}
			})
			.to_string(),
		)
		.create_async()
		.await;

	let client = plain_client(&server.url());
	let err = client.get_ledger(1).await.unwrap_err();
	assert!(matches!(err, RpcError::ResponseError(_)));
}

#[tokio::test]
async fn test_http_failure_is_transport_error() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("POST", "/")
		.with_status(503)
		.with_body("upstream overloaded")
		.create_async()
		.await;

	let client = plain_client(&server.url());
	let err = client.get_latest_validated().await.unwrap_err();
	assert!(matches!(err, RpcError::TransportError(_)));
	assert!(err.is_retryable());
}

#[tokio::test]
async fn test_malformed_envelope_is_transport_error() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("POST", "/")
		.with_status(200)
		.with_body("not json")
		.create_async()
		.await;

	let client = plain_client(&server.url());
	let err = client.get_latest_validated().await.unwrap_err();
	assert!(matches!(err, RpcError::TransportError(_)));
}
