//! Fetcher error types and handling.

use log::{debug, error, warn};

use crate::services::rpc::RpcError;

/// Represents possible errors that can occur while fetching a ledger
#[derive(Debug)]
pub enum FetchError {
	/// An RPC operation failed
	RpcError(RpcError),

	/// The requested ledger is not validated yet
	///
	/// Contains the requested ledger sequence
	NotValidated(u64),

	/// A required hex field could not be decoded
	HexDecodeError(String),

	/// The per-ledger fetch deadline was exceeded
	///
	/// Contains the requested ledger sequence
	Timeout(u64),

	/// The caller cancelled the fetch; no partial block is emitted
	Cancelled,

	/// Internal pipeline failure
	ProcessingError(String),
}

impl FetchError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::RpcError(err) => format!("RPC failure: {}", err),
			Self::NotValidated(sequence) => {
				format!("Ledger {} not yet validated", sequence)
			}
			Self::HexDecodeError(msg) => format!("Hex decode error: {}", msg),
			Self::Timeout(sequence) => {
				format!("Fetching ledger {} exceeded the fetch deadline", sequence)
			}
			Self::Cancelled => "Fetch cancelled".to_string(),
			Self::ProcessingError(msg) => format!("Processing error: {}", msg),
		}
	}

	/// Creates a new hex-decode error with logging
	pub fn hex_decode_error(msg: impl Into<String>) -> Self {
		let error = Self::HexDecodeError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new timeout error with logging
	pub fn timeout(sequence: u64) -> Self {
		let error = Self::Timeout(sequence);
		warn!("{}", error.format_message());
		error
	}

	/// Creates a new cancellation error with logging
	pub fn cancelled() -> Self {
		let error = Self::Cancelled;
		debug!("{}", error.format_message());
		error
	}

	/// Creates a new processing error with logging
	pub fn processing_error(msg: impl Into<String>) -> Self {
		let error = Self::ProcessingError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Whether the caller may retry the fetch.
	pub fn is_retryable(&self) -> bool {
		match self {
			Self::RpcError(err) => err.is_retryable(),
			Self::NotValidated(_) | Self::Timeout(_) => true,
			Self::HexDecodeError(_) | Self::Cancelled | Self::ProcessingError(_) => false,
		}
	}
}

impl From<RpcError> for FetchError {
	fn from(err: RpcError) -> Self {
		match err {
			RpcError::NotValidated(sequence) => Self::NotValidated(sequence),
			other => Self::RpcError(other),
		}
	}
}

impl std::fmt::Display for FetchError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for FetchError {}
