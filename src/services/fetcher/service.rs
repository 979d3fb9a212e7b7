//! Core fetch state machine.
//!
//! `fetch` runs two phases: a poll loop that waits for the target sequence
//! to be validated upstream, and a fetch-and-assemble phase that decodes
//! the ledger into a canonical block. The watermark is advisory; the
//! authoritative validation check is the `validated` flag on each ledger
//! response.

use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::models::proto::{Block, Header, Transaction};
use crate::models::{FetcherConfig, RawLedgerTransaction};
use crate::services::decoder::{compute_tx_hash, map_transaction, BinaryCodec, Decoder};
use crate::services::fetcher::FetchError;
use crate::services::rpc::LedgerRpc;
use crate::utils::xrpl_epoch_to_timestamp;

/// Fetches XRPL ledgers and converts them to canonical blocks.
///
/// One fetcher instance serves one logical caller. The last-known-validated
/// watermark only prevents futile fetches; it never decreases, even when a
/// non-conforming upstream reports a lower sequence.
pub struct Fetcher {
	config: FetcherConfig,
	decoder: Decoder,
	last_known_validated: AtomicU64,
	shutdown: Option<watch::Receiver<bool>>,
}

impl Fetcher {
	/// Creates a new fetcher over the given binary codec.
	pub fn new(config: FetcherConfig, codec: Arc<dyn BinaryCodec>) -> Self {
		Self {
			config,
			decoder: Decoder::new(codec),
			last_known_validated: AtomicU64::new(0),
			shutdown: None,
		}
	}

	/// Attaches a shutdown signal. When the watched value flips to `true`,
	/// in-flight fetches abort with [`FetchError::Cancelled`] at the next
	/// suspension point and no partial block is emitted.
	pub fn with_shutdown(mut self, shutdown: watch::Receiver<bool>) -> Self {
		self.shutdown = Some(shutdown);
		self
	}

	/// Whether `sequence` can be fetched without blocking in the poll loop.
	pub fn is_available(&self, sequence: u64) -> bool {
		sequence <= self.last_known_validated.load(Ordering::Acquire)
	}

	/// The current last-known-validated watermark.
	pub fn last_known_validated(&self) -> u64 {
		self.last_known_validated.load(Ordering::Acquire)
	}

	fn ensure_not_cancelled(&self) -> Result<(), FetchError> {
		match &self.shutdown {
			Some(shutdown) if *shutdown.borrow() => Err(FetchError::cancelled()),
			_ => Ok(()),
		}
	}

	fn advance_watermark(&self, observed: u64) {
		let previous = self.last_known_validated.fetch_max(observed, Ordering::AcqRel);
		if observed < previous {
			warn!(
				observed,
				watermark = previous,
				"upstream reported a lower validated ledger; keeping the higher watermark"
			);
		}
	}

	/// Fetches the ledger at `target_sequence` and assembles its block.
	///
	/// Blocks until the upstream validates the target sequence, re-polling
	/// every `latest_block_retry_interval`. The fetch-and-assemble phase is
	/// bounded by `max_block_fetch_duration`.
	#[instrument(skip(self, client), fields(target_sequence))]
	pub async fn fetch<C: LedgerRpc + ?Sized>(
		&self,
		client: &C,
		target_sequence: u64,
	) -> Result<Block, FetchError> {
		self.ensure_not_cancelled()?;
		debug!(target_sequence, "starting fetch");

		// Phase 1: wait until the target sequence is validated upstream.
		let mut backoff = Duration::ZERO;
		while self.last_known_validated() < target_sequence {
			tokio::time::sleep(backoff).await;
			self.ensure_not_cancelled()?;

			let latest = client.get_latest_validated().await?;
			self.advance_watermark(latest.ledger_index);
			info!(
				latest_ledger = latest.ledger_index,
				requested_ledger = target_sequence,
				"got latest validated ledger"
			);

			backoff = self.config.latest_block_retry_interval;
		}

		// Phase 2 under the per-ledger deadline.
		match tokio::time::timeout(
			self.config.max_block_fetch_duration,
			self.fetch_and_assemble(client, target_sequence),
		)
		.await
		{
			Ok(result) => result,
			Err(_) => Err(FetchError::timeout(target_sequence)),
		}
	}

	/// Fetches a batch of ledgers with bounded concurrency, preserving the
	/// requested order. Callers should raise `max_block_fetch_duration`
	/// accordingly.
	pub async fn fetch_batch<C: LedgerRpc + ?Sized>(
		&self,
		client: &C,
		target_sequences: &[u64],
	) -> Result<Vec<Block>, FetchError> {
		const CONCURRENT_FETCHES: usize = 5;

		let results: Vec<Result<Block, FetchError>> =
			stream::iter(target_sequences.iter().copied())
				.map(|sequence| self.fetch(client, sequence))
				.buffered(CONCURRENT_FETCHES)
				.collect()
				.await;

		results.into_iter().collect()
	}

	async fn fetch_and_assemble<C: LedgerRpc + ?Sized>(
		&self,
		client: &C,
		target_sequence: u64,
	) -> Result<Block, FetchError> {
		let start_time = std::time::Instant::now();
		let result = client.get_ledger(target_sequence).await?;
		self.ensure_not_cancelled()?;

		let header = self.decoder.decode_header(&result);

		let total_drops = header.total_coins.parse::<i64>().unwrap_or_else(|e| {
			warn!(
				ledger_index = target_sequence,
				total_coins = %header.total_coins,
				error = %e,
				"failed to parse total_coins"
			);
			0
		});

		// Fan the per-transaction decode out over the worker pool. Workers
		// write to fixed positional slots so the emitted order matches the
		// response order regardless of completion order.
		let raw_transactions = result.ledger.transactions;
		let mut slots: Vec<Option<Transaction>> = Vec::with_capacity(raw_transactions.len());
		slots.resize_with(raw_transactions.len(), || None);

		let outcomes: Vec<(usize, Result<Option<Transaction>, FetchError>)> =
			stream::iter(raw_transactions.into_iter().enumerate())
				.map(|(index, raw)| async move {
					let outcome = self.process_transaction(target_sequence, index, raw);
					(index, outcome)
				})
				.buffer_unordered(self.config.worker_pool_size.max(1))
				.collect()
				.await;

		for (index, outcome) in outcomes {
			slots[index] = outcome?;
		}
		let transactions: Vec<Transaction> = slots.into_iter().flatten().collect();

		self.ensure_not_cancelled()?;

		// Decode the four header hashes concurrently. Ledger and parent
		// hashes are required; the secondary hashes degrade to empty.
		let (ledger_hash, parent_hash, account_hash, transaction_hash) = tokio::join!(
			decode_required_hash(target_sequence, "ledger_hash", result.ledger_hash.clone()),
			decode_required_hash(target_sequence, "parent_hash", header.parent_hash.clone()),
			decode_secondary_hash(target_sequence, "account_hash", header.account_hash.clone()),
			decode_secondary_hash(
				target_sequence,
				"transaction_hash",
				header.transaction_hash.clone()
			),
		);
		let ledger_hash = ledger_hash?;
		let parent_hash = parent_hash?;

		let block = Block {
			number: target_sequence,
			hash: ledger_hash,
			header: Some(Header {
				parent_hash,
				total_drops,
				account_hash,
				transaction_hash,
				close_time_resolution: header.close_time_resolution,
				close_flags: header.close_flags,
				parent_close_time: header.parent_close_time,
				..Default::default()
			}),
			version: 1,
			transactions,
			close_time: Some(xrpl_epoch_to_timestamp(header.close_time)),
		};

		info!(
			ledger_index = target_sequence,
			tx_count = block.transactions.len(),
			close_time = header.close_time,
			processing_time_ms = start_time.elapsed().as_millis() as u64,
			"fetched ledger"
		);

		Ok(block)
	}

	/// Decodes and maps one transaction.
	///
	/// Hex failures on hash or blobs are fatal for the whole ledger; codec
	/// and mapping failures drop this transaction only (`Ok(None)`).
	fn process_transaction(
		&self,
		ledger_sequence: u64,
		index: usize,
		raw: RawLedgerTransaction,
	) -> Result<Option<Transaction>, FetchError> {
		self.ensure_not_cancelled()?;

		let tx_blob = hex::decode(&raw.tx_blob).map_err(|e| {
			FetchError::hex_decode_error(format!(
				"decoding tx blob at index {} of ledger {}: {}",
				index, ledger_sequence, e
			))
		})?;

		let meta_blob = hex::decode(&raw.meta).map_err(|e| {
			FetchError::hex_decode_error(format!(
				"decoding meta blob at index {} of ledger {}: {}",
				index, ledger_sequence, e
			))
		})?;

		let hash = if raw.hash.is_empty() {
			compute_tx_hash(&tx_blob)
		} else {
			hex::decode(&raw.hash).map_err(|e| {
				FetchError::hex_decode_error(format!(
					"decoding tx hash at index {} of ledger {}: {}",
					index, ledger_sequence, e
				))
			})?
		};

		let tx_attrs = match self.decoder.decode_transaction(&raw.tx_blob) {
			Ok(attrs) => attrs,
			Err(e) => {
				warn!(
					ledger_index = ledger_sequence,
					tx_index = index,
					error = %e,
					"failed to decode transaction, skipping"
				);
				return Ok(None);
			}
		};

		let meta_attrs = match self.decoder.decode_metadata(&raw.meta) {
			Ok(attrs) => attrs,
			Err(e) => {
				warn!(
					ledger_index = ledger_sequence,
					tx_index = index,
					error = %e,
					"failed to decode metadata, skipping"
				);
				return Ok(None);
			}
		};

		match map_transaction(&tx_attrs, &meta_attrs, tx_blob, meta_blob, hash, index as u32) {
			Ok(tx) => Ok(Some(tx)),
			Err(e) => {
				warn!(
					ledger_index = ledger_sequence,
					tx_index = index,
					tx_hash = %raw.hash,
					error = %e,
					"failed to map transaction, skipping"
				);
				Ok(None)
			}
		}
	}
}

/// Decodes a hash whose absence or malformation fails the block.
async fn decode_required_hash(
	ledger_sequence: u64,
	field: &'static str,
	hex_value: String,
) -> Result<Vec<u8>, FetchError> {
	if hex_value.is_empty() {
		return Err(FetchError::hex_decode_error(format!(
			"missing {} for ledger {}",
			field, ledger_sequence
		)));
	}
	hex::decode(&hex_value).map_err(|e| {
		FetchError::hex_decode_error(format!(
			"decoding {} for ledger {}: {}",
			field, ledger_sequence, e
		))
	})
}

/// Decodes a hash that degrades to empty bytes on failure.
async fn decode_secondary_hash(
	ledger_sequence: u64,
	field: &'static str,
	hex_value: String,
) -> Vec<u8> {
	match hex::decode(&hex_value) {
		Ok(bytes) => bytes,
		Err(e) => {
			warn!(
				ledger_index = ledger_sequence,
				field, error = %e,
				"failed to decode header hash; emitting empty"
			);
			Vec::new()
		}
	}
}
