//! Block envelope adapter.
//!
//! Wraps an assembled [`Block`] into the downstream stream record. The
//! payload is the canonical protobuf serialisation behind a fixed type URL;
//! identifiers are uppercase hex. Every validated XRPL ledger is final, so
//! the last-irreversible-block marker always trails the block by one.

use prost::Message;
use prost_types::{Any, Timestamp};

use crate::models::proto::Block;

/// Type URL marking the payload encoding of a stream block.
pub const BLOCK_TYPE_URL: &str = "type.googleapis.com/sf.xrpl.type.v1.Block";

/// The downstream stream record for one block.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StreamBlock {
	#[prost(uint64, tag = "1")]
	pub number: u64,
	/// Uppercase hex of the 32-byte ledger hash.
	#[prost(string, tag = "2")]
	pub id: ::prost::alloc::string::String,
	/// Uppercase hex of the 32-byte parent hash.
	#[prost(string, tag = "3")]
	pub parent_id: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "4")]
	pub timestamp: ::core::option::Option<Timestamp>,
	/// Last irreversible block; equals `parent_num` on XRPL.
	#[prost(uint64, tag = "5")]
	pub lib_num: u64,
	#[prost(uint64, tag = "6")]
	pub parent_num: u64,
	#[prost(message, optional, tag = "7")]
	pub payload: ::core::option::Option<Any>,
}

/// Wraps a block into its stream record.
pub fn wrap_block(block: &Block) -> StreamBlock {
	let parent_hash = block
		.header
		.as_ref()
		.map(|header| header.parent_hash.as_slice())
		.unwrap_or_default();

	StreamBlock {
		number: block.number,
		id: hex::encode_upper(&block.hash),
		parent_id: hex::encode_upper(parent_hash),
		timestamp: block.close_time.clone(),
		lib_num: block.number.saturating_sub(1),
		parent_num: block.number.saturating_sub(1),
		payload: Some(Any {
			type_url: BLOCK_TYPE_URL.to_string(),
			value: block.encode_to_vec(),
		}),
	}
}
