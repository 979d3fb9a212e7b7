//! XRPL JSON-RPC wire types.
//!
//! These structures mirror the rippled response envelopes for the
//! `ledger_closed` and `ledger` methods in binary mode. Blobs stay
//! hex-encoded at this layer; decoding happens in the decoder service.

use serde::{Deserialize, Serialize};

/// Result payload of the `ledger_closed` method.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerClosedResult {
	#[serde(default)]
	pub ledger_hash: String,

	#[serde(default)]
	pub ledger_index: u64,

	#[serde(default)]
	pub status: String,

	/// Error code string, present when `status == "error"`.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub error: String,

	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub error_message: String,
}

impl LedgerClosedResult {
	/// Whether the envelope carries an upstream error.
	pub fn is_error(&self) -> bool {
		!self.error.is_empty() || self.status == "error"
	}
}

/// Result payload of the `ledger` method with
/// `{transactions: true, expand: true, binary: true}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerResult {
	#[serde(default)]
	pub ledger: RawLedger,

	#[serde(default)]
	pub ledger_hash: String,

	#[serde(default)]
	pub ledger_index: u64,

	#[serde(default)]
	pub validated: bool,

	#[serde(default)]
	pub status: String,

	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub error: String,

	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub error_message: String,
}

impl LedgerResult {
	/// Whether the envelope carries an upstream error.
	pub fn is_error(&self) -> bool {
		!self.error.is_empty() || self.status == "error"
	}
}

/// The `ledger` object inside a binary-mode response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLedger {
	/// Hex-encoded ledger header blob.
	#[serde(default)]
	pub ledger_data: String,

	#[serde(default)]
	pub closed: bool,

	#[serde(default)]
	pub transactions: Vec<RawLedgerTransaction>,
}

/// One transaction element of a binary-mode ledger response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLedgerTransaction {
	/// Transaction hash as uppercase hex. Optional; when absent it is
	/// recomputed from the transaction blob.
	#[serde(default)]
	pub hash: String,

	/// Hex-encoded canonical transaction serialisation.
	#[serde(default)]
	pub tx_blob: String,

	/// Hex-encoded transaction metadata (rippled uses `meta` in binary mode).
	#[serde(default)]
	pub meta: String,
}

/// Ledger header fields decoded from the `ledger_data` blob.
///
/// Hashes remain hex strings at this stage; the fetcher converts them to raw
/// bytes during block assembly. Sequence and ledger hash come from the
/// response envelope rather than the blob.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerHeader {
	pub sequence: u64,
	pub ledger_hash: String,
	pub parent_hash: String,
	pub close_time: u64,
	pub parent_close_time: u64,
	pub account_hash: String,
	pub transaction_hash: String,
	pub total_coins: String,
	pub close_time_resolution: u32,
	pub close_flags: u32,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_ledger_closed_error_detection() {
		let ok = LedgerClosedResult {
			ledger_hash: "ABC".into(),
			ledger_index: 80_000_000,
			status: "success".into(),
			..Default::default()
		};
		assert!(!ok.is_error());

		let err = LedgerClosedResult {
			status: "error".into(),
			error: "noNetwork".into(),
			..Default::default()
		};
		assert!(err.is_error());
	}

	#[test]
	fn test_deserialize_binary_ledger_result() {
		let raw = serde_json::json!({
			"ledger": {
				"ledger_data": "ABCD",
				"closed": true,
				"transactions": [
					{"hash": "AA", "tx_blob": "BB", "meta": "CC"}
				]
			},
			"ledger_hash": "FF00",
			"ledger_index": 80_000_000u64,
			"validated": true,
			"status": "success"
		});

		let result: LedgerResult = serde_json::from_value(raw).unwrap();
		assert!(result.validated);
		assert!(!result.is_error());
		assert_eq!(result.ledger.transactions.len(), 1);
		assert_eq!(result.ledger.transactions[0].tx_blob, "BB");
		assert_eq!(result.ledger.transactions[0].meta, "CC");
	}

	#[test]
	fn test_deserialize_tolerates_missing_fields() {
		let result: LedgerResult = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
		assert!(!result.validated);
		assert!(result.ledger.transactions.is_empty());
	}
}
