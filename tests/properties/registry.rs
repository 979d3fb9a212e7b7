//! Property-based tests for the result-code registry.

use proptest::prelude::*;

use xrpl_firehose::models::proto::TransactionResult;

proptest! {
	// Any string with a known category prefix maps into that category,
	// never to the unknown value.
	#[test]
	fn prop_prefix_always_categorizes(suffix in "[A-Z_]{0,20}") {
		for (prefix, bucket) in [
			("tec", TransactionResult::TecOther),
			("tef", TransactionResult::TefFailure),
			("tem", TransactionResult::TemMalformed),
			("ter", TransactionResult::TerRetry),
		] {
			let code = format!("{}{}", prefix, suffix);
			let result = TransactionResult::from_code(&code);
			prop_assert_ne!(result, TransactionResult::ResultUnknown);
			// Exact matches refine within the category; fallback lands on
			// the bucket value.
			if result == bucket {
				continue;
			}
			prop_assert!(matches!(
				(prefix, result),
				("tec", r) if r >= TransactionResult::TecClaimed && r <= TransactionResult::TecOther
			));
		}
	}

	// Strings shorter than three characters can never categorize.
	#[test]
	fn prop_short_strings_are_unknown(code in ".{0,2}") {
		prop_assert_eq!(
			TransactionResult::from_code(&code),
			TransactionResult::ResultUnknown
		);
	}

	// Unrelated prefixes always fall through to unknown.
	#[test]
	fn prop_foreign_prefixes_are_unknown(code in "[a-s]{3}[A-Z_]{0,10}") {
		prop_assume!(!code.starts_with("tec")
			&& !code.starts_with("tef")
			&& !code.starts_with("tem")
			&& !code.starts_with("ter"));
		prop_assert_eq!(
			TransactionResult::from_code(&code),
			TransactionResult::ResultUnknown
		);
	}
}
