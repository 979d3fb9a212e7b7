//! End-to-end fetcher scenarios against a mocked upstream node.

use async_trait::async_trait;
use prost::Message;
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::integration::mocks::{
	ledger_result, malformed_blob, raw_transaction, success_meta, JsonFixtureCodec,
	MockLedgerRpcClient,
};
use xrpl_firehose::models::proto::transaction::TxDetails;
use xrpl_firehose::models::proto::{TransactionResult, TransactionType};
use xrpl_firehose::models::{FetcherConfig, LedgerClosedResult, LedgerResult};
use xrpl_firehose::services::decoder::compute_tx_hash;
use xrpl_firehose::services::rpc::RpcError;
use xrpl_firehose::{wrap_block, FetchError, Fetcher, LedgerRpc};

const CLOSE_TIME: u64 = 776_798_851;
const XRPL_EPOCH_OFFSET: i64 = 946_684_800;

fn test_config() -> FetcherConfig {
	let mut config = FetcherConfig::new("http://unused.invalid/");
	config.latest_block_retry_interval = Duration::from_millis(5);
	config.max_block_fetch_duration = Duration::from_secs(5);
	config
}

fn test_fetcher() -> Fetcher {
	Fetcher::new(test_config(), Arc::new(JsonFixtureCodec))
}

fn latest(sequence: u64) -> LedgerClosedResult {
	LedgerClosedResult {
		ledger_hash: "A1B2".repeat(16),
		ledger_index: sequence,
		status: "success".into(),
		..Default::default()
	}
}

fn payment_tx(hash_byte: &str) -> xrpl_firehose::models::RawLedgerTransaction {
	raw_transaction(
		&hash_byte.repeat(32),
		json!({
			"TransactionType": "Payment",
			"Account": "rAAA",
			"Destination": "rBBB",
			"Amount": "12345",
			"Fee": "10",
			"Sequence": 42,
		}),
		success_meta(0),
	)
}

#[tokio::test]
async fn test_empty_validated_ledger() {
	let mut mock = MockLedgerRpcClient::new();
	mock.expect_get_latest_validated()
		.times(1)
		.returning(|| Ok(latest(80_000_000)));
	mock.expect_get_ledger()
		.times(1)
		.returning(|sequence| Ok(ledger_result(sequence, CLOSE_TIME, vec![])));

	let fetcher = test_fetcher();
	let block = fetcher.fetch(&mock, 80_000_000).await.unwrap();

	assert_eq!(block.number, 80_000_000);
	assert!(block.transactions.is_empty());
	assert_eq!(block.version, 1);

	let header = block.header.as_ref().unwrap();
	assert_eq!(header.parent_hash, hex::decode("CD".repeat(32)).unwrap());
	assert_eq!(header.total_drops, 99_986_297_357_259_441);
	assert_eq!(header.close_time_resolution, 10);
	assert_eq!(
		block.close_time.unwrap().seconds,
		CLOSE_TIME as i64 + XRPL_EPOCH_OFFSET
	);

	let envelope = wrap_block(&block);
	assert_eq!(envelope.number, 80_000_000);
	assert_eq!(envelope.id, "A1B2".repeat(16));
	assert_eq!(envelope.lib_num, 79_999_999);
	assert_eq!(envelope.parent_num, 79_999_999);
}

#[tokio::test]
async fn test_single_payment_ledger() {
	let mut mock = MockLedgerRpcClient::new();
	mock.expect_get_latest_validated()
		.returning(|| Ok(latest(80_000_000)));
	mock.expect_get_ledger()
		.returning(|sequence| Ok(ledger_result(sequence, CLOSE_TIME, vec![payment_tx("AB")])));

	let fetcher = test_fetcher();
	let block = fetcher.fetch(&mock, 80_000_000).await.unwrap();

	assert_eq!(block.transactions.len(), 1);
	let tx = &block.transactions[0];
	assert_eq!(tx.index, 0);
	assert_eq!(tx.tx_type, TransactionType::TxPayment as i32);
	assert_eq!(tx.result, TransactionResult::TesSuccess as i32);
	assert_eq!(tx.account, "rAAA");
	assert_eq!(tx.fee, 10);
	assert_eq!(tx.sequence, 42);
	assert_eq!(tx.hash, hex::decode("AB".repeat(32)).unwrap());
	assert!(!tx.tx_blob.is_empty());
	assert!(!tx.meta_blob.is_empty());

	match tx.tx_details.as_ref().unwrap() {
		TxDetails::Payment(payment) => {
			assert_eq!(payment.destination, "rBBB");
			assert_eq!(payment.amount.as_ref().unwrap().value, "12345");
			assert!(payment.amount.as_ref().unwrap().currency.is_empty());
		}
		_ => panic!("expected Payment body"),
	}
}

#[tokio::test]
async fn test_payment_delivered_amount_survives_from_metadata() {
	let mut mock = MockLedgerRpcClient::new();
	mock.expect_get_latest_validated()
		.returning(|| Ok(latest(80_000_000)));
	mock.expect_get_ledger().returning(|sequence| {
		let tx = raw_transaction(
			&"AB".repeat(32),
			json!({
				"TransactionType": "Payment",
				"Account": "rAAA",
				"Destination": "rBBB",
				"Amount": "12345",
				"Fee": "10",
				"Sequence": 42,
			}),
			json!({
				"TransactionResult": "tesSUCCESS",
				"TransactionIndex": 0,
				"delivered_amount": "12000",
			}),
		);
		Ok(ledger_result(sequence, CLOSE_TIME, vec![tx]))
	});

	let fetcher = test_fetcher();
	let block = fetcher.fetch(&mock, 80_000_000).await.unwrap();

	match block.transactions[0].tx_details.as_ref().unwrap() {
		TxDetails::Payment(payment) => {
			assert_eq!(payment.amount.as_ref().unwrap().value, "12345");
			assert_eq!(payment.delivered_amount.as_ref().unwrap().value, "12000");
		}
		_ => panic!("expected Payment body"),
	}
}

#[tokio::test]
async fn test_unknown_transaction_type_degrades_gracefully() {
	let mut mock = MockLedgerRpcClient::new();
	mock.expect_get_latest_validated()
		.returning(|| Ok(latest(80_000_000)));
	mock.expect_get_ledger().returning(|sequence| {
		Ok(ledger_result(
			sequence,
			CLOSE_TIME,
			vec![raw_transaction(
				&"AB".repeat(32),
				json!({
					"TransactionType": "FutureTx",
					"Account": "rAAA",
					"Fee": "12",
					"Sequence": 7,
				}),
				success_meta(0),
			)],
		))
	});

	let fetcher = test_fetcher();
	let block = fetcher.fetch(&mock, 80_000_000).await.unwrap();

	assert_eq!(block.transactions.len(), 1);
	let tx = &block.transactions[0];
	assert_eq!(tx.tx_type, TransactionType::TxUnknown as i32);
	assert_eq!(tx.account, "rAAA");
	assert_eq!(tx.fee, 12);
	assert!(tx.tx_details.is_none());
}

#[tokio::test]
async fn test_malformed_meta_drops_single_transaction() {
	let mut mock = MockLedgerRpcClient::new();
	mock.expect_get_latest_validated()
		.returning(|| Ok(latest(80_000_000)));
	mock.expect_get_ledger().returning(|sequence| {
		let mut transactions = vec![
			payment_tx("A0"),
			payment_tx("A1"),
			payment_tx("A2"),
			payment_tx("A3"),
			payment_tx("A4"),
		];
		// The fourth transaction carries undecodable metadata.
		transactions[3].meta = malformed_blob();
		Ok(ledger_result(sequence, CLOSE_TIME, transactions))
	});

	let fetcher = test_fetcher();
	let block = fetcher.fetch(&mock, 80_000_000).await.unwrap();

	assert_eq!(block.transactions.len(), 4);
	let indices: Vec<u32> = block.transactions.iter().map(|tx| tx.index).collect();
	assert_eq!(indices, vec![0, 1, 2, 4]);
	assert_eq!(block.transactions[3].hash, hex::decode("A4".repeat(32)).unwrap());
}

#[tokio::test]
async fn test_malformed_tx_blob_hex_fails_ledger() {
	let mut mock = MockLedgerRpcClient::new();
	mock.expect_get_latest_validated()
		.returning(|| Ok(latest(80_000_000)));
	mock.expect_get_ledger().returning(|sequence| {
		let mut tx = payment_tx("AB");
		tx.tx_blob = "zz-not-hex".into();
		Ok(ledger_result(sequence, CLOSE_TIME, vec![tx]))
	});

	let fetcher = test_fetcher();
	let err = fetcher.fetch(&mock, 80_000_000).await.unwrap_err();
	assert!(matches!(err, FetchError::HexDecodeError(_)));
	assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_missing_hash_falls_back_to_sha512_half() {
	let mut mock = MockLedgerRpcClient::new();
	mock.expect_get_latest_validated()
		.returning(|| Ok(latest(80_000_000)));
	mock.expect_get_ledger().returning(|sequence| {
		let mut tx = payment_tx("AB");
		tx.hash = String::new();
		Ok(ledger_result(sequence, CLOSE_TIME, vec![tx]))
	});

	let fetcher = test_fetcher();
	let block = fetcher.fetch(&mock, 80_000_000).await.unwrap();

	let tx = &block.transactions[0];
	assert_eq!(tx.hash.len(), 32);
	assert_eq!(tx.hash, compute_tx_hash(&tx.tx_blob));
}

#[tokio::test]
async fn test_waits_until_target_is_validated() {
	let calls = Arc::new(AtomicU64::new(0));
	let poll_calls = calls.clone();

	let mut mock = MockLedgerRpcClient::new();
	mock.expect_get_latest_validated().times(2).returning(move || {
		// First poll trails the target by one; the next observes it.
		let call = poll_calls.fetch_add(1, Ordering::SeqCst);
		Ok(latest(80_000_000 + call))
	});
	mock.expect_get_ledger()
		.times(1)
		.returning(|sequence| Ok(ledger_result(sequence, CLOSE_TIME, vec![])));

	let fetcher = test_fetcher();
	assert!(!fetcher.is_available(80_000_001));

	let block = fetcher.fetch(&mock, 80_000_001).await.unwrap();
	assert_eq!(block.number, 80_000_001);
	assert_eq!(calls.load(Ordering::SeqCst), 2);
	assert!(fetcher.is_available(80_000_001));
}

#[tokio::test]
async fn test_watermark_never_decreases() {
	let calls = Arc::new(AtomicU64::new(0));
	let poll_calls = calls.clone();

	let mut mock = MockLedgerRpcClient::new();
	mock.expect_get_latest_validated().times(3).returning(move || {
		let call = poll_calls.fetch_add(1, Ordering::SeqCst);
		// A non-conforming upstream reports 10, then 8, then 13.
		let sequence = [10u64, 8, 13][call as usize];
		Ok(latest(sequence))
	});
	mock.expect_get_ledger()
		.returning(|sequence| Ok(ledger_result(sequence, CLOSE_TIME, vec![])));

	let fetcher = test_fetcher();
	let block = fetcher.fetch(&mock, 12).await.unwrap();
	assert_eq!(block.number, 12);
	assert_eq!(fetcher.last_known_validated(), 13);
}

#[tokio::test]
async fn test_not_validated_fetch_response_is_retryable() {
	let mut mock = MockLedgerRpcClient::new();
	mock.expect_get_latest_validated()
		.returning(|| Ok(latest(80_000_001)));
	// The watermark said available, but the authoritative flag disagrees.
	mock.expect_get_ledger()
		.returning(|sequence| Err(RpcError::NotValidated(sequence)));

	let fetcher = test_fetcher();
	let err = fetcher.fetch(&mock, 80_000_001).await.unwrap_err();
	assert!(matches!(err, FetchError::NotValidated(80_000_001)));
	assert!(err.is_retryable());
}

#[tokio::test]
async fn test_cancellation_after_ledger_fetch() {
	let (shutdown_tx, shutdown_rx) = watch::channel(false);

	let mut mock = MockLedgerRpcClient::new();
	mock.expect_get_latest_validated()
		.returning(|| Ok(latest(80_000_000)));
	mock.expect_get_ledger().returning(move |sequence| {
		// Cancel once the RPC has returned, before the workers finish.
		shutdown_tx.send(true).unwrap();
		Ok(ledger_result(sequence, CLOSE_TIME, vec![payment_tx("AB")]))
	});

	let fetcher = Fetcher::new(test_config(), Arc::new(JsonFixtureCodec)).with_shutdown(shutdown_rx);
	let err = fetcher.fetch(&mock, 80_000_000).await.unwrap_err();
	assert!(matches!(err, FetchError::Cancelled));
	assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_cancellation_before_fetch() {
	let (shutdown_tx, shutdown_rx) = watch::channel(false);
	shutdown_tx.send(true).unwrap();

	let mock = MockLedgerRpcClient::new();
	let fetcher = Fetcher::new(test_config(), Arc::new(JsonFixtureCodec)).with_shutdown(shutdown_rx);
	let err = fetcher.fetch(&mock, 80_000_000).await.unwrap_err();
	assert!(matches!(err, FetchError::Cancelled));
}

struct HangingRpc;

#[async_trait]
impl LedgerRpc for HangingRpc {
	async fn get_latest_validated(&self) -> Result<LedgerClosedResult, RpcError> {
		Ok(latest(u64::MAX))
	}

	async fn get_ledger(&self, _sequence: u64) -> Result<LedgerResult, RpcError> {
		futures::future::pending().await
	}
}

#[tokio::test]
async fn test_fetch_deadline_exceeded() {
	let mut config = test_config();
	config.max_block_fetch_duration = Duration::from_millis(50);

	let fetcher = Fetcher::new(config, Arc::new(JsonFixtureCodec));
	let err = fetcher.fetch(&HangingRpc, 80_000_000).await.unwrap_err();
	assert!(matches!(err, FetchError::Timeout(80_000_000)));
	assert!(err.is_retryable());
}

#[tokio::test]
async fn test_unparseable_total_coins_degrades_to_zero() {
	let mut mock = MockLedgerRpcClient::new();
	mock.expect_get_latest_validated()
		.returning(|| Ok(latest(80_000_000)));
	mock.expect_get_ledger().returning(|sequence| {
		let mut result = ledger_result(sequence, CLOSE_TIME, vec![]);
		let mut header = crate::integration::mocks::header_attrs(CLOSE_TIME);
		header["total_coins"] = serde_json::json!("not a number");
		result.ledger.ledger_data = crate::integration::mocks::encode_blob(header);
		Ok(result)
	});

	let fetcher = test_fetcher();
	let block = fetcher.fetch(&mock, 80_000_000).await.unwrap();
	assert_eq!(block.header.unwrap().total_drops, 0);
}

#[tokio::test]
async fn test_fetch_is_idempotent() {
	let mut mock = MockLedgerRpcClient::new();
	mock.expect_get_latest_validated()
		.returning(|| Ok(latest(80_000_000)));
	mock.expect_get_ledger()
		.times(2)
		.returning(|sequence| Ok(ledger_result(sequence, CLOSE_TIME, vec![payment_tx("AB")])));

	let fetcher = test_fetcher();
	let first = fetcher.fetch(&mock, 80_000_000).await.unwrap();
	let second = fetcher.fetch(&mock, 80_000_000).await.unwrap();

	assert_eq!(first, second);
	assert_eq!(first.encode_to_vec(), second.encode_to_vec());
}

#[tokio::test]
async fn test_fetch_batch_preserves_order() {
	let mut mock = MockLedgerRpcClient::new();
	mock.expect_get_latest_validated()
		.returning(|| Ok(latest(80_000_005)));
	mock.expect_get_ledger()
		.returning(|sequence| Ok(ledger_result(sequence, CLOSE_TIME, vec![])));

	let fetcher = test_fetcher();
	let blocks = fetcher
		.fetch_batch(&mock, &[80_000_001, 80_000_002, 80_000_003])
		.await
		.unwrap();

	let numbers: Vec<u64> = blocks.iter().map(|block| block.number).collect();
	assert_eq!(numbers, vec![80_000_001, 80_000_002, 80_000_003]);
}
