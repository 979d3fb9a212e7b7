//! Property-based tests for the block envelope adapter.

use proptest::prelude::*;

use xrpl_firehose::models::proto::{Block, Header};
use xrpl_firehose::wrap_block;

proptest! {
	// The stream identifiers are the uppercase hex of the block hashes and
	// the lib/parent markers always trail the number by one.
	#[test]
	fn prop_envelope_identifiers(
		number in 1u64..u64::MAX,
		hash in prop::collection::vec(any::<u8>(), 32),
		parent_hash in prop::collection::vec(any::<u8>(), 32),
	) {
		let block = Block {
			number,
			hash: hash.clone(),
			header: Some(Header {
				parent_hash: parent_hash.clone(),
				..Default::default()
			}),
			version: 1,
			..Default::default()
		};

		let envelope = wrap_block(&block);
		prop_assert_eq!(envelope.number, number);
		prop_assert_eq!(envelope.lib_num, number - 1);
		prop_assert_eq!(envelope.parent_num, number - 1);
		prop_assert_eq!(&envelope.id, &hex::encode_upper(&hash));
		prop_assert_eq!(&envelope.parent_id, &hex::encode_upper(&parent_hash));
		prop_assert_eq!(hex::decode(&envelope.id).unwrap(), hash);
	}
}
