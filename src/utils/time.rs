//! Time and amount conversions for the XRP Ledger.

use prost_types::Timestamp;

/// Offset between the XRPL epoch (2000-01-01 00:00 UTC) and the Unix epoch.
pub const XRPL_EPOCH_OFFSET: i64 = 946_684_800;

/// Converts XRPL epoch seconds to Unix seconds.
pub fn xrpl_epoch_to_unix(xrpl_time: u64) -> i64 {
	xrpl_time as i64 + XRPL_EPOCH_OFFSET
}

/// Converts XRPL epoch seconds to a protobuf timestamp.
pub fn xrpl_epoch_to_timestamp(xrpl_time: u64) -> Timestamp {
	Timestamp {
		seconds: xrpl_epoch_to_unix(xrpl_time),
		nanos: 0,
	}
}

/// Parses a drops amount string to `u64`.
pub fn parse_drops(drops: &str) -> Result<u64, std::num::ParseIntError> {
	drops.parse::<u64>()
}
