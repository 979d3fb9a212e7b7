//! Shared mocks and fixtures for the integration tests.

use async_trait::async_trait;
use mockall::mock;
use serde_json::{json, Value};

use xrpl_firehose::models::{LedgerClosedResult, LedgerResult, RawLedger, RawLedgerTransaction};
use xrpl_firehose::services::rpc::RpcError;
use xrpl_firehose::{BinaryCodec, CodecError, LedgerRpc};

mock! {
	pub LedgerRpcClient {}

	#[async_trait]
	impl LedgerRpc for LedgerRpcClient {
		async fn get_latest_validated(&self) -> Result<LedgerClosedResult, RpcError>;
		async fn get_ledger(&self, sequence: u64) -> Result<LedgerResult, RpcError>;
	}
}

/// Codec stub whose "binary" format is hex-encoded JSON.
///
/// Fixture blobs carry the attribute mapping the real codec would produce,
/// so every hex/decode path of the pipeline is exercised without the
/// external codec.
pub struct JsonFixtureCodec;

impl BinaryCodec for JsonFixtureCodec {
	fn decode(&self, hex_blob: &str) -> Result<xrpl_firehose::services::decoder::AttrMap, CodecError> {
		let bytes = hex::decode(hex_blob).map_err(|e| CodecError(format!("invalid hex: {}", e)))?;
		serde_json::from_slice::<Value>(&bytes)
			.ok()
			.and_then(|value| value.as_object().cloned())
			.ok_or_else(|| CodecError("blob is not an attribute mapping".into()))
	}
}

/// Encodes an attribute mapping into the fixture codec's blob format.
pub fn encode_blob(attrs: Value) -> String {
	hex::encode(serde_json::to_vec(&attrs).unwrap())
}

/// A hex blob no codec can decode.
pub fn malformed_blob() -> String {
	hex::encode(b"not an attribute mapping")
}

/// Header attributes for a typical validated ledger.
pub fn header_attrs(close_time: u64) -> Value {
	json!({
		"parent_hash": "CD".repeat(32),
		"close_time": close_time,
		"parent_close_time": close_time - 1,
		"account_hash": "EF".repeat(32),
		"transaction_hash": "01".repeat(32),
		"total_coins": "99986297357259441",
		"close_time_resolution": 10,
		"close_flags": 0,
	})
}

/// Builds a validated binary-mode ledger response.
pub fn ledger_result(
	sequence: u64,
	close_time: u64,
	transactions: Vec<RawLedgerTransaction>,
) -> LedgerResult {
	LedgerResult {
		ledger: RawLedger {
			ledger_data: encode_blob(header_attrs(close_time)),
			closed: true,
			transactions,
		},
		ledger_hash: "A1B2".repeat(16),
		ledger_index: sequence,
		validated: true,
		status: "success".into(),
		..Default::default()
	}
}

/// Builds one binary-mode transaction element from attribute mappings.
pub fn raw_transaction(hash: &str, tx_attrs: Value, meta_attrs: Value) -> RawLedgerTransaction {
	RawLedgerTransaction {
		hash: hash.to_string(),
		tx_blob: encode_blob(tx_attrs),
		meta: encode_blob(meta_attrs),
	}
}

/// Meta attributes for a successful transaction at `index`.
pub fn success_meta(index: u32) -> Value {
	json!({
		"TransactionResult": "tesSUCCESS",
		"TransactionIndex": index,
		"AffectedNodes": [],
	})
}
