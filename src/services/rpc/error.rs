//! RPC error types and handling.

use log::{debug, error};

/// Upstream error codes that do not go away on retry.
const NON_RETRYABLE_ERRORS: [&str; 3] = ["unknownCmd", "invalidParams", "lgrIdxMalformed"];

/// Represents possible errors that can occur during RPC operations
#[derive(Debug)]
pub enum RpcError {
	/// HTTP transport failure (connect, send, or body read)
	TransportError(String),

	/// Upstream error envelope (`status == "error"` or non-empty `error`)
	ResponseError(String),

	/// The requested ledger exists but is not yet validated
	///
	/// Contains the requested ledger sequence
	NotValidated(u64),
}

impl RpcError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::TransportError(msg) => format!("Transport error: {}", msg),
			Self::ResponseError(msg) => format!("RPC error: {}", msg),
			Self::NotValidated(sequence) => {
				format!("Ledger {} not yet validated", sequence)
			}
		}
	}

	/// Creates a new transport error with logging
	pub fn transport_error(msg: impl Into<String>) -> Self {
		let error = Self::TransportError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new response error with logging
	pub fn response_error(msg: impl Into<String>) -> Self {
		let error = Self::ResponseError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new not-validated error with logging
	pub fn not_validated(sequence: u64) -> Self {
		let error = Self::NotValidated(sequence);
		debug!("{}", error.format_message());
		error
	}

	/// Whether the caller may retry the operation.
	///
	/// Transport failures and not-yet-validated ledgers are transient.
	/// Upstream error envelopes are retryable unless the error code points
	/// at a malformed request.
	pub fn is_retryable(&self) -> bool {
		match self {
			Self::TransportError(_) | Self::NotValidated(_) => true,
			Self::ResponseError(msg) => !NON_RETRYABLE_ERRORS.iter().any(|e| msg.contains(e)),
		}
	}
}

impl std::fmt::Display for RpcError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for RpcError {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_retryability() {
		assert!(RpcError::TransportError("connection reset".into()).is_retryable());
		assert!(RpcError::NotValidated(80_000_000).is_retryable());
		assert!(RpcError::ResponseError("noNetwork".into()).is_retryable());
		assert!(!RpcError::ResponseError("unknownCmd".into()).is_retryable());
		assert!(!RpcError::ResponseError("invalidParams".into()).is_retryable());
	}

	#[test]
	fn test_display() {
		let err = RpcError::NotValidated(42);
		assert_eq!(err.to_string(), "Ledger 42 not yet validated");
	}
}
