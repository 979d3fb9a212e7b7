//! Binary codec seam and header decoding.
//!
//! The XRPL binary codec itself lives outside this crate. It is consumed
//! through [`BinaryCodec`]: hex blob in, flat attribute mapping out. The
//! [`Decoder`] wraps a codec instance and adds the derived operations the
//! fetcher needs.

use sha2::{Digest, Sha512};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use super::attrs::{get_str, get_u32, get_u64_lossy};
use super::error::DecodeError;
use crate::models::{LedgerHeader, LedgerResult};

/// Flat attribute mapping produced by the binary codec.
///
/// Value types are a closed set: decimal string, number, bool, nested
/// mapping, array of mapping.
pub type AttrMap = serde_json::Map<String, serde_json::Value>;

/// Error raised by a [`BinaryCodec`] implementation.
#[derive(Debug, Error)]
#[error("binary codec error: {0}")]
pub struct CodecError(pub String);

/// The external XRPL binary codec primitive.
///
/// `decode` handles transaction and metadata blobs; `decode_ledger_data`
/// handles the ledger header blob and yields the rippled snake_case header
/// attribute names (`parent_hash`, `close_time`, `total_coins`, ...).
pub trait BinaryCodec: Send + Sync {
	fn decode(&self, hex: &str) -> Result<AttrMap, CodecError>;

	fn decode_ledger_data(&self, hex: &str) -> Result<AttrMap, CodecError> {
		self.decode(hex)
	}
}

/// Prefix for transaction ID calculation (ASCII "TXN\0").
const TXN_HASH_PREFIX: [u8; 4] = [0x54, 0x58, 0x4E, 0x00];

/// Computes a transaction hash from its raw blob.
///
/// XRPL transaction hash = SHA-512Half(HashPrefix::TXN + signed_tx_blob):
/// the first 32 bytes of SHA-512 over the prefixed blob.
pub fn compute_tx_hash(tx_blob: &[u8]) -> Vec<u8> {
	let mut hasher = Sha512::new();
	hasher.update(TXN_HASH_PREFIX);
	hasher.update(tx_blob);
	hasher.finalize()[..32].to_vec()
}

/// Wraps the external binary codec with the derived decode operations.
#[derive(Clone)]
pub struct Decoder {
	codec: Arc<dyn BinaryCodec>,
}

impl Decoder {
	pub fn new(codec: Arc<dyn BinaryCodec>) -> Self {
		Self { codec }
	}

	/// Decodes a transaction blob to its attribute mapping.
	pub fn decode_transaction(&self, tx_blob_hex: &str) -> Result<AttrMap, DecodeError> {
		self.codec
			.decode(tx_blob_hex)
			.map_err(|e| DecodeError::codec_error(format!("failed to decode transaction: {}", e)))
	}

	/// Decodes a metadata blob to its attribute mapping.
	pub fn decode_metadata(&self, meta_hex: &str) -> Result<AttrMap, DecodeError> {
		self.codec
			.decode(meta_hex)
			.map_err(|e| DecodeError::codec_error(format!("failed to decode metadata: {}", e)))
	}

	/// Decodes the `ledger_data` header blob of a ledger response.
	///
	/// Sequence and ledger hash always come from the response envelope.
	/// Header decode failure is not fatal: the remaining fields stay
	/// zero-valued and a warning is logged.
	pub fn decode_header(&self, result: &LedgerResult) -> LedgerHeader {
		let mut header = LedgerHeader {
			sequence: result.ledger_index,
			ledger_hash: result.ledger_hash.clone(),
			..Default::default()
		};

		if result.ledger.ledger_data.is_empty() {
			warn!(
				ledger_index = result.ledger_index,
				"ledger response carries no ledger_data blob"
			);
			return header;
		}

		let attrs = match self.codec.decode_ledger_data(&result.ledger.ledger_data) {
			Ok(attrs) => attrs,
			Err(e) => {
				warn!(
					ledger_index = result.ledger_index,
					error = %e,
					"failed to decode ledger_data"
				);
				return header;
			}
		};

		header.parent_hash = get_str(&attrs, "parent_hash");
		header.close_time = get_u64_lossy(&attrs, "close_time");
		header.parent_close_time = get_u64_lossy(&attrs, "parent_close_time");
		header.account_hash = get_str(&attrs, "account_hash");
		header.transaction_hash = get_str(&attrs, "transaction_hash");
		header.total_coins = get_str(&attrs, "total_coins");
		header.close_time_resolution = get_u32(&attrs, "close_time_resolution");
		header.close_flags = get_u32(&attrs, "close_flags");
		header
	}
}
