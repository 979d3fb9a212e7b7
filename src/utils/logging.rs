//! Logging setup.
//!
//! Installs a `tracing_subscriber` pipeline for the embedding process.
//! `RUST_LOG` always wins; when it is unset, the filter falls back to the
//! directives carried by `FetcherConfig::log_directives`, whose default
//! quiets the HTTP stack so per-ledger fetch logs stay readable.
//! `log`-facade events from the error constructors flow through the same
//! subscriber.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Installs the subscriber writing to stdout.
///
/// `default_directives` is used when `RUST_LOG` is unset; pass
/// `FetcherConfig::log_directives` (or
/// [`crate::models::DEFAULT_LOG_DIRECTIVES`]).
pub fn setup_logging(
	default_directives: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	setup_logging_with_writer(default_directives, std::io::stdout)
}

/// Installs the subscriber with a custom writer (tests, log shipping).
pub fn setup_logging_with_writer<W>(
	default_directives: &str,
	writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directives));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(writer)
				.with_target(true)
				.with_ansi(false)
				.compact(),
		)
		.try_init()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::DEFAULT_LOG_DIRECTIVES;
	use std::io::Write;
	use std::sync::{Arc, Mutex};

	#[derive(Clone, Default)]
	struct SharedWriter {
		buffer: Arc<Mutex<Vec<u8>>>,
	}

	impl Write for SharedWriter {
		fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
			self.buffer.lock().unwrap().extend_from_slice(buf);
			Ok(buf.len())
		}

		fn flush(&mut self) -> std::io::Result<()> {
			Ok(())
		}
	}

	impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedWriter {
		type Writer = SharedWriter;

		fn make_writer(&'a self) -> Self::Writer {
			self.clone()
		}
	}

	#[test]
	fn test_events_reach_the_writer() {
		let writer = SharedWriter::default();
		let captured = writer.buffer.clone();

		// Another test may already have installed a global subscriber;
		// only assert output when this install wins.
		if setup_logging_with_writer(DEFAULT_LOG_DIRECTIVES, writer).is_ok() {
			tracing::info!(ledger_index = 42u64, "fetched ledger");
			let output = String::from_utf8(captured.lock().unwrap().clone()).unwrap();
			assert!(output.contains("fetched ledger"));
			assert!(output.contains("42"));
		}
	}

	#[test]
	fn test_default_directives_quiet_the_http_stack() {
		let filter = EnvFilter::new(DEFAULT_LOG_DIRECTIVES);
		let rendered = filter.to_string().to_lowercase();
		assert!(rendered.contains("hyper=warn"));
		assert!(rendered.contains("reqwest=warn"));
	}
}
