//! Maps decoded attribute mappings to typed transaction records.
//!
//! The mapper performs the only crossing from the codec's untyped attribute
//! mapping into the typed `Transaction` record: common fields by name with
//! type-directed coercion, wrapper-stripped arrays (memos, signers), and a
//! per-type body variant through the dispatch table in `tx_details`.

use serde_json::Value;

use super::attrs::{get_str, get_u32, get_u64_lossy};
use super::codec::AttrMap;
use super::error::DecodeError;
use super::tx_details::map_tx_details;
use crate::models::proto::{
	Amount, Asset, Memo, Path, PathElement, Signer, Transaction, TransactionResult,
	TransactionType,
};

/// Builds a fully populated transaction record from the decoded tx and meta
/// attribute mappings plus the raw blobs.
///
/// Fails only when the decoded transaction has no `TransactionType`; every
/// other missing attribute coerces to zero/empty. Unknown types keep their
/// common fields and carry no body variant. The result tag and
/// metadata-sourced body fields (a Payment's delivered amount) read from
/// the meta mapping.
pub fn map_transaction(
	tx_attrs: &AttrMap,
	meta_attrs: &AttrMap,
	tx_blob: Vec<u8>,
	meta_blob: Vec<u8>,
	hash: Vec<u8>,
	index: u32,
) -> Result<Transaction, DecodeError> {
	let type_name = match tx_attrs.get("TransactionType").and_then(Value::as_str) {
		Some(name) => name,
		None => return Err(DecodeError::missing_type()),
	};
	let tx_type = TransactionType::from_name(type_name);
	let result = TransactionResult::from_code(&get_str(meta_attrs, "TransactionResult"));

	let mut tx = Transaction {
		hash,
		result: result as i32,
		index,
		tx_blob,
		meta_blob,
		tx_type: tx_type as i32,
		account: get_str(tx_attrs, "Account"),
		fee: get_u64_lossy(tx_attrs, "Fee"),
		sequence: get_u32(tx_attrs, "Sequence"),
		flags: get_u32(tx_attrs, "Flags"),
		last_ledger_sequence: get_u32(tx_attrs, "LastLedgerSequence"),
		account_txn_id: get_str(tx_attrs, "AccountTxnID"),
		source_tag: get_u32(tx_attrs, "SourceTag"),
		ticket_sequence: get_u32(tx_attrs, "TicketSequence"),
		network_id: get_u32(tx_attrs, "NetworkID"),
		signing_pub_key: get_str(tx_attrs, "SigningPubKey"),
		txn_signature: get_str(tx_attrs, "TxnSignature"),
		delegate: get_str(tx_attrs, "Delegate"),
		memos: map_memos(tx_attrs),
		signers: map_signers(tx_attrs),
		tx_details: None,
	};
	tx.tx_details = map_tx_details(tx_type, tx_attrs, meta_attrs);

	Ok(tx)
}

/// Iterates a wrapper array, stripping the single-entry wrapper objects.
///
/// XRPL arrays wrap each element in a one-key object, e.g.
/// `Memos: [{"Memo": {...}}, ...]`. Elements without the expected wrapper
/// key are skipped; order is preserved.
pub(crate) fn wrapped_objects<'a>(
	attrs: &'a AttrMap,
	key: &str,
	wrapper: &str,
) -> Vec<&'a AttrMap> {
	match attrs.get(key) {
		Some(Value::Array(items)) => items
			.iter()
			.filter_map(|item| item.as_object())
			.filter_map(|obj| obj.get(wrapper))
			.filter_map(|inner| inner.as_object())
			.collect(),
		_ => Vec::new(),
	}
}

pub(crate) fn map_memos(attrs: &AttrMap) -> Vec<Memo> {
	wrapped_objects(attrs, "Memos", "Memo")
		.into_iter()
		.map(|memo| Memo {
			memo_data: get_str(memo, "MemoData"),
			memo_format: get_str(memo, "MemoFormat"),
			memo_type: get_str(memo, "MemoType"),
		})
		.collect()
}

pub(crate) fn map_signers(attrs: &AttrMap) -> Vec<Signer> {
	wrapped_objects(attrs, "Signers", "Signer")
		.into_iter()
		.map(map_signer)
		.collect()
}

pub(crate) fn map_signer(signer: &AttrMap) -> Signer {
	Signer {
		account: get_str(signer, "Account"),
		txn_signature: get_str(signer, "TxnSignature"),
		signing_pub_key: get_str(signer, "SigningPubKey"),
	}
}

/// Decodes an XRPL amount attribute.
///
/// A plain string is a native amount in drops; an object carries issued or
/// MPT fields. Anything else (including absence) is `None`.
pub(crate) fn decode_amount(value: Option<&Value>) -> Option<Amount> {
	match value {
		Some(Value::String(drops)) => Some(Amount {
			value: drops.clone(),
			..Default::default()
		}),
		Some(Value::Object(amount)) => Some(Amount {
			value: get_str(amount, "value"),
			currency: get_str(amount, "currency"),
			issuer: get_str(amount, "issuer"),
			mpt_issuance_id: get_str(amount, "mpt_issuance_id"),
		}),
		_ => None,
	}
}

/// Decodes an XRPL asset/issue attribute (an amount without a value).
pub(crate) fn decode_asset(value: Option<&Value>) -> Option<Asset> {
	match value {
		Some(Value::Object(asset)) => Some(Asset {
			currency: get_str(asset, "currency"),
			issuer: get_str(asset, "issuer"),
			mpt_issuance_id: get_str(asset, "mpt_issuance_id"),
		}),
		_ => None,
	}
}

/// Decodes a `Paths` attribute: an array of arrays of path elements,
/// preserved positionally.
pub(crate) fn decode_paths(value: Option<&Value>) -> Vec<Path> {
	let paths = match value {
		Some(Value::Array(paths)) => paths,
		_ => return Vec::new(),
	};

	paths
		.iter()
		.filter_map(|path| path.as_array())
		.map(|elements| Path {
			elements: elements
				.iter()
				.filter_map(|elem| elem.as_object())
				.map(|elem| PathElement {
					account: get_str(elem, "account"),
					currency: get_str(elem, "currency"),
					issuer: get_str(elem, "issuer"),
				})
				.collect(),
		})
		.collect()
}
