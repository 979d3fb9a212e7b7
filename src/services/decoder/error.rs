//! Decoder error types and handling.

use log::{debug, warn};

/// Represents possible errors while decoding a single transaction
#[derive(Debug)]
pub enum DecodeError {
	/// The binary codec rejected a blob
	CodecError(String),

	/// The decoded transaction carries no `TransactionType` attribute
	MissingType,
}

impl DecodeError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::CodecError(msg) => format!("Codec error: {}", msg),
			Self::MissingType => "Missing TransactionType in decoded transaction".to_string(),
		}
	}

	/// Creates a new codec error with logging
	pub fn codec_error(msg: impl Into<String>) -> Self {
		let error = Self::CodecError(msg.into());
		debug!("{}", error.format_message());
		error
	}

	/// Creates a new missing-type error with logging
	pub fn missing_type() -> Self {
		let error = Self::MissingType;
		warn!("{}", error.format_message());
		error
	}
}

impl std::fmt::Display for DecodeError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for DecodeError {}
