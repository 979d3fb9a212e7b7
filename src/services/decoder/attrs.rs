//! Type-directed coercion over decoded attribute mappings.
//!
//! The binary codec yields loosely typed values: amounts and fees arrive as
//! decimal strings, sequences and flags as numbers, and some numeric fields
//! switch representation between the two. These helpers absorb that at the
//! boundary; missing or mistyped attributes coerce to zero/empty.

use serde_json::Value;

use super::codec::AttrMap;

pub(crate) fn get_str(attrs: &AttrMap, key: &str) -> String {
	match attrs.get(key) {
		Some(Value::String(s)) => s.clone(),
		_ => String::new(),
	}
}

pub(crate) fn get_u32(attrs: &AttrMap, key: &str) -> u32 {
	match attrs.get(key) {
		Some(Value::Number(n)) => n.as_u64().unwrap_or(0) as u32,
		_ => 0,
	}
}

/// Reads a numeric attribute that may arrive as a number or a decimal
/// string (fees, drops-denominated maxima).
pub(crate) fn get_u64_lossy(attrs: &AttrMap, key: &str) -> u64 {
	match attrs.get(key) {
		Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
		Some(Value::String(s)) => s.parse::<u64>().unwrap_or(0),
		_ => 0,
	}
}

/// Reads a boolean that XRPL may encode as a bool or as 0/1.
pub(crate) fn get_bool(attrs: &AttrMap, key: &str) -> bool {
	match attrs.get(key) {
		Some(Value::Bool(b)) => *b,
		Some(Value::Number(n)) => n.as_u64() == Some(1),
		_ => false,
	}
}

pub(crate) fn get_string_array(attrs: &AttrMap, key: &str) -> Vec<String> {
	match attrs.get(key) {
		Some(Value::Array(items)) => items
			.iter()
			.filter_map(|v| v.as_str().map(str::to_string))
			.collect(),
		_ => Vec::new(),
	}
}

/// Reads an identifier that may arrive as a hex string or a number
/// (cross-chain claim IDs).
pub(crate) fn get_id_string(attrs: &AttrMap, key: &str) -> String {
	match attrs.get(key) {
		Some(Value::String(s)) => s.clone(),
		Some(Value::Number(n)) => n.to_string(),
		_ => String::new(),
	}
}
