//! Canonical block records emitted to the downstream stream.
//!
//! Hand-maintained prost messages for `sf.xrpl.type.v1`. Field numbers are
//! stable and published; adding a transaction variant appends a new oneof
//! tag without renumbering existing fields.

/// A single validated XRPL ledger rendered as a stream block payload.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Block {
	/// Ledger sequence number.
	#[prost(uint64, tag = "1")]
	pub number: u64,
	/// 32-byte ledger hash.
	#[prost(bytes = "vec", tag = "2")]
	pub hash: ::prost::alloc::vec::Vec<u8>,
	#[prost(message, optional, tag = "3")]
	pub header: ::core::option::Option<Header>,
	#[prost(uint32, tag = "4")]
	pub version: u32,
	/// Transactions in ledger order.
	#[prost(message, repeated, tag = "5")]
	pub transactions: ::prost::alloc::vec::Vec<Transaction>,
	/// Absolute close time (XRPL epoch shifted to Unix time).
	#[prost(message, optional, tag = "6")]
	pub close_time: ::core::option::Option<::prost_types::Timestamp>,
}

/// Decoded ledger header fields.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Header {
	/// 32-byte hash of the previous ledger.
	#[prost(bytes = "vec", tag = "1")]
	pub parent_hash: ::prost::alloc::vec::Vec<u8>,
	/// Total XRP in drops; 0 when `total_coins` failed to parse.
	#[prost(int64, tag = "2")]
	pub total_drops: i64,
	/// State-tree root hash; empty when undecodable.
	#[prost(bytes = "vec", tag = "3")]
	pub account_hash: ::prost::alloc::vec::Vec<u8>,
	/// Transaction-tree root hash; empty when undecodable.
	#[prost(bytes = "vec", tag = "4")]
	pub transaction_hash: ::prost::alloc::vec::Vec<u8>,
	#[prost(uint32, tag = "5")]
	pub close_time_resolution: u32,
	#[prost(uint32, tag = "6")]
	pub close_flags: u32,
	#[prost(uint64, tag = "7")]
	pub base_fee: u64,
	#[prost(uint32, tag = "8")]
	pub reserve_base: u32,
	#[prost(uint32, tag = "9")]
	pub reserve_increment: u32,
	/// Parent close time in XRPL epoch seconds.
	#[prost(uint64, tag = "10")]
	pub parent_close_time: u64,
}

/// An XRPL currency amount.
///
/// Native XRP carries only `value` (drops). Issued currencies carry `value`,
/// `currency` and `issuer`. Multi-purpose tokens carry `value` and
/// `mpt_issuance_id`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Amount {
	#[prost(string, tag = "1")]
	pub value: ::prost::alloc::string::String,
	#[prost(string, tag = "2")]
	pub currency: ::prost::alloc::string::String,
	#[prost(string, tag = "3")]
	pub issuer: ::prost::alloc::string::String,
	#[prost(string, tag = "4")]
	pub mpt_issuance_id: ::prost::alloc::string::String,
}

/// An asset definition without a value (AMM pool sides, bridge issues).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Asset {
	#[prost(string, tag = "1")]
	pub currency: ::prost::alloc::string::String,
	#[prost(string, tag = "2")]
	pub issuer: ::prost::alloc::string::String,
	#[prost(string, tag = "3")]
	pub mpt_issuance_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Memo {
	#[prost(string, tag = "1")]
	pub memo_data: ::prost::alloc::string::String,
	#[prost(string, tag = "2")]
	pub memo_format: ::prost::alloc::string::String,
	#[prost(string, tag = "3")]
	pub memo_type: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Signer {
	#[prost(string, tag = "1")]
	pub account: ::prost::alloc::string::String,
	#[prost(string, tag = "2")]
	pub txn_signature: ::prost::alloc::string::String,
	#[prost(string, tag = "3")]
	pub signing_pub_key: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignerEntry {
	#[prost(string, tag = "1")]
	pub account: ::prost::alloc::string::String,
	#[prost(uint32, tag = "2")]
	pub signer_weight: u32,
	#[prost(string, tag = "3")]
	pub wallet_locator: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuthAccount {
	#[prost(string, tag = "1")]
	pub account: ::prost::alloc::string::String,
}

/// One step of a payment path.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PathElement {
	#[prost(string, tag = "1")]
	pub account: ::prost::alloc::string::String,
	#[prost(string, tag = "2")]
	pub currency: ::prost::alloc::string::String,
	#[prost(string, tag = "3")]
	pub issuer: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Path {
	#[prost(message, repeated, tag = "1")]
	pub elements: ::prost::alloc::vec::Vec<PathElement>,
}

/// One oracle price observation.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PriceData {
	#[prost(string, tag = "1")]
	pub base_asset: ::prost::alloc::string::String,
	#[prost(string, tag = "2")]
	pub quote_asset: ::prost::alloc::string::String,
	#[prost(uint64, tag = "3")]
	pub asset_price: u64,
	#[prost(uint32, tag = "4")]
	pub scale: u32,
}

/// A credential reference (DepositPreauth, PermissionedDomainSet).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Credential {
	#[prost(string, tag = "1")]
	pub issuer: ::prost::alloc::string::String,
	#[prost(string, tag = "2")]
	pub credential_type: ::prost::alloc::string::String,
}

/// An inner transaction of a Batch, kept as its raw serialisation.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawTransaction {
	#[prost(bytes = "vec", tag = "1")]
	pub raw_transaction: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BatchSigner {
	#[prost(string, tag = "1")]
	pub account: ::prost::alloc::string::String,
	#[prost(string, tag = "2")]
	pub signing_pub_key: ::prost::alloc::string::String,
	#[prost(string, tag = "3")]
	pub txn_signature: ::prost::alloc::string::String,
	#[prost(message, repeated, tag = "4")]
	pub signers: ::prost::alloc::vec::Vec<Signer>,
}

/// The two-sided bridge definition carried by cross-chain transactions.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct XChainBridge {
	#[prost(string, tag = "1")]
	pub locking_chain_door: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "2")]
	pub locking_chain_issue: ::core::option::Option<Asset>,
	#[prost(string, tag = "3")]
	pub issuing_chain_door: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "4")]
	pub issuing_chain_issue: ::core::option::Option<Asset>,
}

/// A transaction with its blobs, common fields and typed body.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transaction {
	/// 32-byte transaction hash.
	#[prost(bytes = "vec", tag = "1")]
	pub hash: ::prost::alloc::vec::Vec<u8>,
	#[prost(enumeration = "TransactionResult", tag = "2")]
	pub result: i32,
	/// Position within the ledger.
	#[prost(uint32, tag = "3")]
	pub index: u32,
	/// Canonical binary transaction serialisation.
	#[prost(bytes = "vec", tag = "4")]
	pub tx_blob: ::prost::alloc::vec::Vec<u8>,
	/// Canonical binary metadata serialisation.
	#[prost(bytes = "vec", tag = "5")]
	pub meta_blob: ::prost::alloc::vec::Vec<u8>,
	#[prost(enumeration = "TransactionType", tag = "6")]
	pub tx_type: i32,
	#[prost(string, tag = "7")]
	pub account: ::prost::alloc::string::String,
	/// Fee in drops.
	#[prost(uint64, tag = "8")]
	pub fee: u64,
	#[prost(uint32, tag = "9")]
	pub sequence: u32,
	#[prost(uint32, tag = "10")]
	pub flags: u32,
	#[prost(uint32, tag = "11")]
	pub last_ledger_sequence: u32,
	#[prost(string, tag = "12")]
	pub account_txn_id: ::prost::alloc::string::String,
	#[prost(uint32, tag = "13")]
	pub source_tag: u32,
	#[prost(uint32, tag = "14")]
	pub ticket_sequence: u32,
	#[prost(uint32, tag = "15")]
	pub network_id: u32,
	#[prost(string, tag = "16")]
	pub signing_pub_key: ::prost::alloc::string::String,
	#[prost(string, tag = "17")]
	pub txn_signature: ::prost::alloc::string::String,
	#[prost(string, tag = "18")]
	pub delegate: ::prost::alloc::string::String,
	#[prost(message, repeated, tag = "19")]
	pub memos: ::prost::alloc::vec::Vec<Memo>,
	#[prost(message, repeated, tag = "20")]
	pub signers: ::prost::alloc::vec::Vec<Signer>,
	/// Type-specific body; unset for unknown transaction types.
	#[prost(
		oneof = "transaction::TxDetails",
		tags = "30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 84, 85, 86, 87"
	)]
	pub tx_details: ::core::option::Option<transaction::TxDetails>,
}

/// Nested message and enum types in `Transaction`.
pub mod transaction {
	/// Type-specific transaction body.
	#[derive(Clone, PartialEq, ::prost::Oneof)]
	pub enum TxDetails {
		#[prost(message, tag = "30")]
		Payment(super::Payment),
		#[prost(message, tag = "31")]
		OfferCreate(super::OfferCreate),
		#[prost(message, tag = "32")]
		OfferCancel(super::OfferCancel),
		#[prost(message, tag = "33")]
		TrustSet(super::TrustSet),
		#[prost(message, tag = "34")]
		AccountSet(super::AccountSet),
		#[prost(message, tag = "35")]
		AccountDelete(super::AccountDelete),
		#[prost(message, tag = "36")]
		SetRegularKey(super::SetRegularKey),
		#[prost(message, tag = "37")]
		SignerListSet(super::SignerListSet),
		#[prost(message, tag = "38")]
		EscrowCreate(super::EscrowCreate),
		#[prost(message, tag = "39")]
		EscrowFinish(super::EscrowFinish),
		#[prost(message, tag = "40")]
		EscrowCancel(super::EscrowCancel),
		#[prost(message, tag = "41")]
		PaymentChannelCreate(super::PaymentChannelCreate),
		#[prost(message, tag = "42")]
		PaymentChannelFund(super::PaymentChannelFund),
		#[prost(message, tag = "43")]
		PaymentChannelClaim(super::PaymentChannelClaim),
		#[prost(message, tag = "44")]
		CheckCreate(super::CheckCreate),
		#[prost(message, tag = "45")]
		CheckCash(super::CheckCash),
		#[prost(message, tag = "46")]
		CheckCancel(super::CheckCancel),
		#[prost(message, tag = "47")]
		DepositPreauth(super::DepositPreauth),
		#[prost(message, tag = "48")]
		TicketCreate(super::TicketCreate),
		#[prost(message, tag = "49")]
		NftokenMint(super::NfTokenMint),
		#[prost(message, tag = "50")]
		NftokenBurn(super::NfTokenBurn),
		#[prost(message, tag = "51")]
		NftokenCreateOffer(super::NfTokenCreateOffer),
		#[prost(message, tag = "52")]
		NftokenCancelOffer(super::NfTokenCancelOffer),
		#[prost(message, tag = "53")]
		NftokenAcceptOffer(super::NfTokenAcceptOffer),
		#[prost(message, tag = "54")]
		Clawback(super::Clawback),
		#[prost(message, tag = "55")]
		AmmCreate(super::AmmCreate),
		#[prost(message, tag = "56")]
		AmmDeposit(super::AmmDeposit),
		#[prost(message, tag = "57")]
		AmmWithdraw(super::AmmWithdraw),
		#[prost(message, tag = "58")]
		AmmVote(super::AmmVote),
		#[prost(message, tag = "59")]
		AmmBid(super::AmmBid),
		#[prost(message, tag = "60")]
		AmmDelete(super::AmmDelete),
		#[prost(message, tag = "61")]
		AmmClawback(super::AmmClawback),
		#[prost(message, tag = "62")]
		DidSet(super::DidSet),
		#[prost(message, tag = "63")]
		DidDelete(super::DidDelete),
		#[prost(message, tag = "64")]
		OracleSet(super::OracleSet),
		#[prost(message, tag = "65")]
		OracleDelete(super::OracleDelete),
		#[prost(message, tag = "66")]
		MptokenIssuanceCreate(super::MpTokenIssuanceCreate),
		#[prost(message, tag = "67")]
		MptokenIssuanceDestroy(super::MpTokenIssuanceDestroy),
		#[prost(message, tag = "68")]
		MptokenIssuanceSet(super::MpTokenIssuanceSet),
		#[prost(message, tag = "69")]
		MptokenAuthorize(super::MpTokenAuthorize),
		#[prost(message, tag = "70")]
		CredentialCreate(super::CredentialCreate),
		#[prost(message, tag = "71")]
		CredentialAccept(super::CredentialAccept),
		#[prost(message, tag = "72")]
		CredentialDelete(super::CredentialDelete),
		#[prost(message, tag = "73")]
		PermissionedDomainSet(super::PermissionedDomainSet),
		#[prost(message, tag = "74")]
		PermissionedDomainDelete(super::PermissionedDomainDelete),
		#[prost(message, tag = "75")]
		DelegateSet(super::DelegateSet),
		#[prost(message, tag = "76")]
		Batch(super::Batch),
		#[prost(message, tag = "77")]
		EnableAmendment(super::EnableAmendment),
		#[prost(message, tag = "78")]
		SetFee(super::SetFee),
		#[prost(message, tag = "79")]
		UnlModify(super::UnlModify),
		#[prost(message, tag = "80")]
		XchainCreateBridge(super::XChainCreateBridge),
		#[prost(message, tag = "81")]
		XchainModifyBridge(super::XChainModifyBridge),
		#[prost(message, tag = "82")]
		XchainCreateClaimId(super::XChainCreateClaimId),
		#[prost(message, tag = "83")]
		XchainCommit(super::XChainCommit),
		#[prost(message, tag = "84")]
		XchainClaim(super::XChainClaim),
		#[prost(message, tag = "85")]
		XchainAccountCreateCommit(super::XChainAccountCreateCommit),
		#[prost(message, tag = "86")]
		XchainAddClaimAttestation(super::XChainAddClaimAttestation),
		#[prost(message, tag = "87")]
		XchainAddAccountCreateAttestation(super::XChainAddAccountCreateAttestation),
	}
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Payment {
	#[prost(string, tag = "1")]
	pub destination: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "2")]
	pub amount: ::core::option::Option<Amount>,
	#[prost(message, optional, tag = "3")]
	pub deliver_max: ::core::option::Option<Amount>,
	#[prost(message, optional, tag = "4")]
	pub send_max: ::core::option::Option<Amount>,
	#[prost(message, optional, tag = "5")]
	pub deliver_min: ::core::option::Option<Amount>,
	#[prost(message, repeated, tag = "6")]
	pub paths: ::prost::alloc::vec::Vec<Path>,
	#[prost(string, tag = "7")]
	pub invoice_id: ::prost::alloc::string::String,
	#[prost(uint32, tag = "8")]
	pub destination_tag: u32,
	#[prost(string, repeated, tag = "9")]
	pub credential_ids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
	#[prost(string, tag = "10")]
	pub domain_id: ::prost::alloc::string::String,
	/// Amount actually delivered, taken from metadata when present.
	#[prost(message, optional, tag = "11")]
	pub delivered_amount: ::core::option::Option<Amount>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OfferCreate {
	#[prost(message, optional, tag = "1")]
	pub taker_gets: ::core::option::Option<Amount>,
	#[prost(message, optional, tag = "2")]
	pub taker_pays: ::core::option::Option<Amount>,
	#[prost(uint32, tag = "3")]
	pub expiration: u32,
	#[prost(uint32, tag = "4")]
	pub offer_sequence: u32,
	#[prost(string, tag = "5")]
	pub domain_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OfferCancel {
	#[prost(uint32, tag = "1")]
	pub offer_sequence: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TrustSet {
	#[prost(message, optional, tag = "1")]
	pub limit_amount: ::core::option::Option<Amount>,
	#[prost(uint32, tag = "2")]
	pub quality_in: u32,
	#[prost(uint32, tag = "3")]
	pub quality_out: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccountSet {
	#[prost(uint32, tag = "1")]
	pub set_flag: u32,
	#[prost(uint32, tag = "2")]
	pub clear_flag: u32,
	#[prost(string, tag = "3")]
	pub domain: ::prost::alloc::string::String,
	#[prost(string, tag = "4")]
	pub email_hash: ::prost::alloc::string::String,
	#[prost(string, tag = "5")]
	pub message_key: ::prost::alloc::string::String,
	#[prost(uint32, tag = "6")]
	pub transfer_rate: u32,
	#[prost(uint32, tag = "7")]
	pub tick_size: u32,
	#[prost(string, tag = "8")]
	pub nftoken_minter: ::prost::alloc::string::String,
	#[prost(string, tag = "9")]
	pub wallet_locator: ::prost::alloc::string::String,
	#[prost(uint32, tag = "10")]
	pub wallet_size: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccountDelete {
	#[prost(string, tag = "1")]
	pub destination: ::prost::alloc::string::String,
	#[prost(uint32, tag = "2")]
	pub destination_tag: u32,
	#[prost(string, repeated, tag = "3")]
	pub credential_ids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetRegularKey {
	#[prost(string, tag = "1")]
	pub regular_key: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignerListSet {
	#[prost(uint32, tag = "1")]
	pub signer_quorum: u32,
	#[prost(message, repeated, tag = "2")]
	pub signer_entries: ::prost::alloc::vec::Vec<SignerEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EscrowCreate {
	#[prost(string, tag = "1")]
	pub destination: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "2")]
	pub amount: ::core::option::Option<Amount>,
	#[prost(uint32, tag = "3")]
	pub cancel_after: u32,
	#[prost(uint32, tag = "4")]
	pub finish_after: u32,
	#[prost(string, tag = "5")]
	pub condition: ::prost::alloc::string::String,
	#[prost(uint32, tag = "6")]
	pub destination_tag: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EscrowFinish {
	#[prost(string, tag = "1")]
	pub owner: ::prost::alloc::string::String,
	#[prost(uint32, tag = "2")]
	pub offer_sequence: u32,
	#[prost(string, tag = "3")]
	pub condition: ::prost::alloc::string::String,
	#[prost(string, tag = "4")]
	pub fulfillment: ::prost::alloc::string::String,
	#[prost(string, repeated, tag = "5")]
	pub credential_ids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EscrowCancel {
	#[prost(string, tag = "1")]
	pub owner: ::prost::alloc::string::String,
	#[prost(uint32, tag = "2")]
	pub offer_sequence: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PaymentChannelCreate {
	#[prost(string, tag = "1")]
	pub destination: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "2")]
	pub amount: ::core::option::Option<Amount>,
	#[prost(uint32, tag = "3")]
	pub settle_delay: u32,
	#[prost(string, tag = "4")]
	pub public_key: ::prost::alloc::string::String,
	#[prost(uint32, tag = "5")]
	pub cancel_after: u32,
	#[prost(uint32, tag = "6")]
	pub destination_tag: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PaymentChannelFund {
	#[prost(string, tag = "1")]
	pub channel: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "2")]
	pub amount: ::core::option::Option<Amount>,
	#[prost(uint32, tag = "3")]
	pub expiration: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PaymentChannelClaim {
	#[prost(string, tag = "1")]
	pub channel: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "2")]
	pub amount: ::core::option::Option<Amount>,
	#[prost(message, optional, tag = "3")]
	pub balance: ::core::option::Option<Amount>,
	#[prost(string, tag = "4")]
	pub signature: ::prost::alloc::string::String,
	#[prost(string, tag = "5")]
	pub public_key: ::prost::alloc::string::String,
	#[prost(string, repeated, tag = "6")]
	pub credential_ids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckCreate {
	#[prost(string, tag = "1")]
	pub destination: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "2")]
	pub send_max: ::core::option::Option<Amount>,
	#[prost(uint32, tag = "3")]
	pub expiration: u32,
	#[prost(uint32, tag = "4")]
	pub destination_tag: u32,
	#[prost(string, tag = "5")]
	pub invoice_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckCash {
	#[prost(string, tag = "1")]
	pub check_id: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "2")]
	pub amount: ::core::option::Option<Amount>,
	#[prost(message, optional, tag = "3")]
	pub deliver_min: ::core::option::Option<Amount>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckCancel {
	#[prost(string, tag = "1")]
	pub check_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DepositPreauth {
	#[prost(string, tag = "1")]
	pub authorize: ::prost::alloc::string::String,
	#[prost(string, tag = "2")]
	pub unauthorize: ::prost::alloc::string::String,
	#[prost(message, repeated, tag = "3")]
	pub authorize_credentials: ::prost::alloc::vec::Vec<Credential>,
	#[prost(message, repeated, tag = "4")]
	pub unauthorize_credentials: ::prost::alloc::vec::Vec<Credential>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TicketCreate {
	#[prost(uint32, tag = "1")]
	pub ticket_count: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NfTokenMint {
	#[prost(uint32, tag = "1")]
	pub nftoken_taxon: u32,
	#[prost(string, tag = "2")]
	pub issuer: ::prost::alloc::string::String,
	#[prost(uint32, tag = "3")]
	pub transfer_fee: u32,
	#[prost(string, tag = "4")]
	pub uri: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "5")]
	pub amount: ::core::option::Option<Amount>,
	#[prost(uint32, tag = "6")]
	pub expiration: u32,
	#[prost(string, tag = "7")]
	pub destination: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NfTokenBurn {
	#[prost(string, tag = "1")]
	pub nftoken_id: ::prost::alloc::string::String,
	#[prost(string, tag = "2")]
	pub owner: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NfTokenCreateOffer {
	#[prost(string, tag = "1")]
	pub nftoken_id: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "2")]
	pub amount: ::core::option::Option<Amount>,
	#[prost(string, tag = "3")]
	pub owner: ::prost::alloc::string::String,
	#[prost(string, tag = "4")]
	pub destination: ::prost::alloc::string::String,
	#[prost(uint32, tag = "5")]
	pub expiration: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NfTokenCancelOffer {
	#[prost(string, repeated, tag = "1")]
	pub nftoken_offers: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NfTokenAcceptOffer {
	#[prost(string, tag = "1")]
	pub nftoken_sell_offer: ::prost::alloc::string::String,
	#[prost(string, tag = "2")]
	pub nftoken_buy_offer: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "3")]
	pub nftoken_broker_fee: ::core::option::Option<Amount>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Clawback {
	#[prost(message, optional, tag = "1")]
	pub amount: ::core::option::Option<Amount>,
	#[prost(string, tag = "2")]
	pub holder: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AmmCreate {
	#[prost(message, optional, tag = "1")]
	pub amount: ::core::option::Option<Amount>,
	#[prost(message, optional, tag = "2")]
	pub amount2: ::core::option::Option<Amount>,
	#[prost(uint32, tag = "3")]
	pub trading_fee: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AmmDeposit {
	#[prost(message, optional, tag = "1")]
	pub asset: ::core::option::Option<Asset>,
	#[prost(message, optional, tag = "2")]
	pub asset2: ::core::option::Option<Asset>,
	#[prost(message, optional, tag = "3")]
	pub amount: ::core::option::Option<Amount>,
	#[prost(message, optional, tag = "4")]
	pub amount2: ::core::option::Option<Amount>,
	#[prost(message, optional, tag = "5")]
	pub e_price: ::core::option::Option<Amount>,
	#[prost(message, optional, tag = "6")]
	pub lp_token_out: ::core::option::Option<Amount>,
	#[prost(uint32, tag = "7")]
	pub trading_fee: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AmmWithdraw {
	#[prost(message, optional, tag = "1")]
	pub asset: ::core::option::Option<Asset>,
	#[prost(message, optional, tag = "2")]
	pub asset2: ::core::option::Option<Asset>,
	#[prost(message, optional, tag = "3")]
	pub amount: ::core::option::Option<Amount>,
	#[prost(message, optional, tag = "4")]
	pub amount2: ::core::option::Option<Amount>,
	#[prost(message, optional, tag = "5")]
	pub e_price: ::core::option::Option<Amount>,
	#[prost(message, optional, tag = "6")]
	pub lp_token_in: ::core::option::Option<Amount>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AmmVote {
	#[prost(message, optional, tag = "1")]
	pub asset: ::core::option::Option<Asset>,
	#[prost(message, optional, tag = "2")]
	pub asset2: ::core::option::Option<Asset>,
	#[prost(uint32, tag = "3")]
	pub trading_fee: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AmmBid {
	#[prost(message, optional, tag = "1")]
	pub asset: ::core::option::Option<Asset>,
	#[prost(message, optional, tag = "2")]
	pub asset2: ::core::option::Option<Asset>,
	#[prost(message, optional, tag = "3")]
	pub bid_min: ::core::option::Option<Amount>,
	#[prost(message, optional, tag = "4")]
	pub bid_max: ::core::option::Option<Amount>,
	#[prost(message, repeated, tag = "5")]
	pub auth_accounts: ::prost::alloc::vec::Vec<AuthAccount>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AmmDelete {
	#[prost(message, optional, tag = "1")]
	pub asset: ::core::option::Option<Asset>,
	#[prost(message, optional, tag = "2")]
	pub asset2: ::core::option::Option<Asset>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AmmClawback {
	#[prost(string, tag = "1")]
	pub holder: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "2")]
	pub asset: ::core::option::Option<Asset>,
	#[prost(message, optional, tag = "3")]
	pub asset2: ::core::option::Option<Asset>,
	#[prost(message, optional, tag = "4")]
	pub amount: ::core::option::Option<Amount>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DidSet {
	#[prost(string, tag = "1")]
	pub did_document: ::prost::alloc::string::String,
	#[prost(string, tag = "2")]
	pub uri: ::prost::alloc::string::String,
	#[prost(string, tag = "3")]
	pub data: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DidDelete {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OracleSet {
	#[prost(uint32, tag = "1")]
	pub oracle_document_id: u32,
	#[prost(string, tag = "2")]
	pub provider: ::prost::alloc::string::String,
	#[prost(string, tag = "3")]
	pub asset_class: ::prost::alloc::string::String,
	#[prost(uint32, tag = "4")]
	pub last_update_time: u32,
	#[prost(string, tag = "5")]
	pub uri: ::prost::alloc::string::String,
	#[prost(message, repeated, tag = "6")]
	pub price_data_series: ::prost::alloc::vec::Vec<PriceData>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OracleDelete {
	#[prost(uint32, tag = "1")]
	pub oracle_document_id: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MpTokenIssuanceCreate {
	#[prost(uint32, tag = "1")]
	pub asset_scale: u32,
	#[prost(uint64, tag = "2")]
	pub maximum_amount: u64,
	#[prost(uint32, tag = "3")]
	pub transfer_fee: u32,
	#[prost(string, tag = "4")]
	pub mptoken_metadata: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MpTokenIssuanceDestroy {
	#[prost(string, tag = "1")]
	pub mptoken_issuance_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MpTokenIssuanceSet {
	#[prost(string, tag = "1")]
	pub mptoken_issuance_id: ::prost::alloc::string::String,
	#[prost(string, tag = "2")]
	pub holder: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MpTokenAuthorize {
	#[prost(string, tag = "1")]
	pub mptoken_issuance_id: ::prost::alloc::string::String,
	#[prost(string, tag = "2")]
	pub holder: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CredentialCreate {
	#[prost(string, tag = "1")]
	pub subject: ::prost::alloc::string::String,
	#[prost(string, tag = "2")]
	pub credential_type: ::prost::alloc::string::String,
	#[prost(string, tag = "3")]
	pub uri: ::prost::alloc::string::String,
	#[prost(uint32, tag = "4")]
	pub expiration: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CredentialAccept {
	#[prost(string, tag = "1")]
	pub issuer: ::prost::alloc::string::String,
	#[prost(string, tag = "2")]
	pub credential_type: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CredentialDelete {
	#[prost(string, tag = "1")]
	pub subject: ::prost::alloc::string::String,
	#[prost(string, tag = "2")]
	pub credential_type: ::prost::alloc::string::String,
	#[prost(string, tag = "3")]
	pub issuer: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PermissionedDomainSet {
	#[prost(string, tag = "1")]
	pub domain_id: ::prost::alloc::string::String,
	#[prost(message, repeated, tag = "2")]
	pub accepted_credentials: ::prost::alloc::vec::Vec<Credential>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PermissionedDomainDelete {
	#[prost(string, tag = "1")]
	pub domain_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DelegateSet {
	#[prost(string, tag = "1")]
	pub authorize: ::prost::alloc::string::String,
	#[prost(string, repeated, tag = "2")]
	pub permissions: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Batch {
	#[prost(message, repeated, tag = "1")]
	pub raw_transactions: ::prost::alloc::vec::Vec<RawTransaction>,
	#[prost(message, repeated, tag = "2")]
	pub batch_signers: ::prost::alloc::vec::Vec<BatchSigner>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnableAmendment {
	#[prost(string, tag = "1")]
	pub amendment: ::prost::alloc::string::String,
	#[prost(uint32, tag = "2")]
	pub ledger_sequence: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetFee {
	#[prost(uint64, tag = "1")]
	pub base_fee: u64,
	#[prost(uint32, tag = "2")]
	pub reference_fee_units: u32,
	#[prost(uint32, tag = "3")]
	pub reserve_base: u32,
	#[prost(uint32, tag = "4")]
	pub reserve_increment: u32,
	#[prost(uint32, tag = "5")]
	pub ledger_sequence: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnlModify {
	#[prost(uint32, tag = "1")]
	pub ledger_sequence: u32,
	#[prost(bool, tag = "2")]
	pub unl_modify_disabling: bool,
	#[prost(string, tag = "3")]
	pub unl_modify_validator: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct XChainCreateBridge {
	#[prost(message, optional, tag = "1")]
	pub xchain_bridge: ::core::option::Option<XChainBridge>,
	#[prost(message, optional, tag = "2")]
	pub signature_reward: ::core::option::Option<Amount>,
	#[prost(message, optional, tag = "3")]
	pub min_account_create_amount: ::core::option::Option<Amount>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct XChainModifyBridge {
	#[prost(message, optional, tag = "1")]
	pub xchain_bridge: ::core::option::Option<XChainBridge>,
	#[prost(message, optional, tag = "2")]
	pub signature_reward: ::core::option::Option<Amount>,
	#[prost(message, optional, tag = "3")]
	pub min_account_create_amount: ::core::option::Option<Amount>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct XChainCreateClaimId {
	#[prost(message, optional, tag = "1")]
	pub xchain_bridge: ::core::option::Option<XChainBridge>,
	#[prost(message, optional, tag = "2")]
	pub signature_reward: ::core::option::Option<Amount>,
	#[prost(string, tag = "3")]
	pub other_chain_source: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct XChainCommit {
	#[prost(message, optional, tag = "1")]
	pub xchain_bridge: ::core::option::Option<XChainBridge>,
	#[prost(string, tag = "2")]
	pub xchain_claim_id: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "3")]
	pub amount: ::core::option::Option<Amount>,
	#[prost(string, tag = "4")]
	pub other_chain_destination: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct XChainClaim {
	#[prost(message, optional, tag = "1")]
	pub xchain_bridge: ::core::option::Option<XChainBridge>,
	#[prost(string, tag = "2")]
	pub xchain_claim_id: ::prost::alloc::string::String,
	#[prost(string, tag = "3")]
	pub destination: ::prost::alloc::string::String,
	#[prost(uint32, tag = "4")]
	pub destination_tag: u32,
	#[prost(message, optional, tag = "5")]
	pub amount: ::core::option::Option<Amount>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct XChainAccountCreateCommit {
	#[prost(message, optional, tag = "1")]
	pub xchain_bridge: ::core::option::Option<XChainBridge>,
	#[prost(string, tag = "2")]
	pub destination: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "3")]
	pub amount: ::core::option::Option<Amount>,
	#[prost(message, optional, tag = "4")]
	pub signature_reward: ::core::option::Option<Amount>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct XChainAddClaimAttestation {
	#[prost(message, optional, tag = "1")]
	pub xchain_bridge: ::core::option::Option<XChainBridge>,
	#[prost(string, tag = "2")]
	pub other_chain_source: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "3")]
	pub amount: ::core::option::Option<Amount>,
	#[prost(string, tag = "4")]
	pub public_key: ::prost::alloc::string::String,
	#[prost(string, tag = "5")]
	pub signature: ::prost::alloc::string::String,
	#[prost(bool, tag = "6")]
	pub was_locking_chain_send: bool,
	#[prost(string, tag = "7")]
	pub attestation_reward_account: ::prost::alloc::string::String,
	#[prost(string, tag = "8")]
	pub attestation_signer_account: ::prost::alloc::string::String,
	#[prost(string, tag = "9")]
	pub destination: ::prost::alloc::string::String,
	#[prost(string, tag = "10")]
	pub xchain_claim_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct XChainAddAccountCreateAttestation {
	#[prost(message, optional, tag = "1")]
	pub xchain_bridge: ::core::option::Option<XChainBridge>,
	#[prost(string, tag = "2")]
	pub other_chain_source: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "3")]
	pub amount: ::core::option::Option<Amount>,
	#[prost(string, tag = "4")]
	pub public_key: ::prost::alloc::string::String,
	#[prost(string, tag = "5")]
	pub signature: ::prost::alloc::string::String,
	#[prost(bool, tag = "6")]
	pub was_locking_chain_send: bool,
	#[prost(string, tag = "7")]
	pub attestation_reward_account: ::prost::alloc::string::String,
	#[prost(string, tag = "8")]
	pub attestation_signer_account: ::prost::alloc::string::String,
	#[prost(string, tag = "9")]
	pub destination: ::prost::alloc::string::String,
	#[prost(message, optional, tag = "10")]
	pub signature_reward: ::core::option::Option<Amount>,
	#[prost(string, tag = "11")]
	pub xchain_account_create_count: ::prost::alloc::string::String,
}

/// Internal tag for each transaction variant. Decoupled from the rippled
/// wire codes, which live in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TransactionType {
	TxUnknown = 0,
	TxPayment = 1,
	TxOfferCreate = 2,
	TxOfferCancel = 3,
	TxTrustSet = 4,
	TxAccountSet = 5,
	TxAccountDelete = 6,
	TxSetRegularKey = 7,
	TxSignerListSet = 8,
	TxEscrowCreate = 9,
	TxEscrowFinish = 10,
	TxEscrowCancel = 11,
	TxPaymentChannelCreate = 12,
	TxPaymentChannelFund = 13,
	TxPaymentChannelClaim = 14,
	TxCheckCreate = 15,
	TxCheckCash = 16,
	TxCheckCancel = 17,
	TxDepositPreauth = 18,
	TxTicketCreate = 19,
	TxNftMint = 20,
	TxNftBurn = 21,
	TxNftCreateOffer = 22,
	TxNftCancelOffer = 23,
	TxNftAcceptOffer = 24,
	TxClawback = 25,
	TxAmmCreate = 26,
	TxAmmDeposit = 27,
	TxAmmWithdraw = 28,
	TxAmmVote = 29,
	TxAmmBid = 30,
	TxAmmDelete = 31,
	TxAmmClawback = 32,
	TxDidSet = 33,
	TxDidDelete = 34,
	TxOracleSet = 35,
	TxOracleDelete = 36,
	TxMptokenIssuanceCreate = 37,
	TxMptokenIssuanceDestroy = 38,
	TxMptokenIssuanceSet = 39,
	TxMptokenAuthorize = 40,
	TxCredentialCreate = 41,
	TxCredentialAccept = 42,
	TxCredentialDelete = 43,
	TxPermissionedDomainSet = 44,
	TxPermissionedDomainDelete = 45,
	TxDelegateSet = 46,
	TxBatch = 47,
	TxEnableAmendment = 48,
	TxSetFee = 49,
	TxUnlModify = 50,
	TxXchainCreateBridge = 51,
	TxXchainModifyBridge = 52,
	TxXchainCreateClaimId = 53,
	TxXchainCommit = 54,
	TxXchainClaim = 55,
	TxXchainAccountCreateCommit = 56,
	TxXchainAddClaimAttestation = 57,
	TxXchainAddAccountCreateAttestation = 58,
}

/// Transaction result category.
///
/// Well-known result strings map to dedicated values; anything else falls
/// back to a per-prefix bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TransactionResult {
	ResultUnknown = 0,
	TesSuccess = 1,
	TecClaimed = 2,
	TecPathPartial = 3,
	TecUnfundedAdd = 4,
	TecUnfundedOffer = 5,
	TecUnfundedPayment = 6,
	TecFailedProcessing = 7,
	TecDirFull = 8,
	TecInsufReserveLine = 9,
	TecInsufReserveOffer = 10,
	TecNoDst = 11,
	TecNoDstInsufXrp = 12,
	TecNoLineInsufReserve = 13,
	TecNoLineRedundant = 14,
	TecPathDry = 15,
	TecUnfunded = 16,
	TecNoAlternativeKey = 17,
	TecNoRegularKey = 18,
	TecOther = 19,
	TefFailure = 20,
	TemMalformed = 21,
	TerRetry = 22,
}
