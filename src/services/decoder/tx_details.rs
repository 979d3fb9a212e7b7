//! Per-type transaction body mappers.
//!
//! One pure mapper per transaction type, registered once in a dispatch
//! table keyed by the type tag. Adding a type means adding its message, its
//! mapper and one registration line here. Every mapper receives both the
//! transaction and the metadata attribute mappings; most only read the
//! former, but metadata-sourced fields (a Payment's delivered amount) come
//! from the latter. Unknown fields are ignored; missing optional fields
//! default to zero/empty.

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::attrs::{get_bool, get_id_string, get_str, get_string_array, get_u32, get_u64_lossy};
use super::codec::AttrMap;
use super::mapper::{decode_amount, decode_asset, decode_paths, map_signer, wrapped_objects};
use crate::models::proto::transaction::TxDetails;
use crate::models::proto::{self, AuthAccount, BatchSigner, Credential, PriceData, RawTransaction, SignerEntry, TransactionType, XChainBridge};

type VariantMapper = fn(&AttrMap, &AttrMap) -> TxDetails;

lazy_static! {
	static ref VARIANT_MAPPERS: HashMap<TransactionType, VariantMapper> = {
		let mut m: HashMap<TransactionType, VariantMapper> = HashMap::new();
		m.insert(TransactionType::TxPayment, map_payment);
		m.insert(TransactionType::TxOfferCreate, map_offer_create);
		m.insert(TransactionType::TxOfferCancel, map_offer_cancel);
		m.insert(TransactionType::TxTrustSet, map_trust_set);
		m.insert(TransactionType::TxAccountSet, map_account_set);
		m.insert(TransactionType::TxAccountDelete, map_account_delete);
		m.insert(TransactionType::TxSetRegularKey, map_set_regular_key);
		m.insert(TransactionType::TxSignerListSet, map_signer_list_set);
		m.insert(TransactionType::TxEscrowCreate, map_escrow_create);
		m.insert(TransactionType::TxEscrowFinish, map_escrow_finish);
		m.insert(TransactionType::TxEscrowCancel, map_escrow_cancel);
		m.insert(
			TransactionType::TxPaymentChannelCreate,
			map_payment_channel_create,
		);
		m.insert(
			TransactionType::TxPaymentChannelFund,
			map_payment_channel_fund,
		);
		m.insert(
			TransactionType::TxPaymentChannelClaim,
			map_payment_channel_claim,
		);
		m.insert(TransactionType::TxCheckCreate, map_check_create);
		m.insert(TransactionType::TxCheckCash, map_check_cash);
		m.insert(TransactionType::TxCheckCancel, map_check_cancel);
		m.insert(TransactionType::TxDepositPreauth, map_deposit_preauth);
		m.insert(TransactionType::TxTicketCreate, map_ticket_create);
		m.insert(TransactionType::TxNftMint, map_nftoken_mint);
		m.insert(TransactionType::TxNftBurn, map_nftoken_burn);
		m.insert(TransactionType::TxNftCreateOffer, map_nftoken_create_offer);
		m.insert(TransactionType::TxNftCancelOffer, map_nftoken_cancel_offer);
		m.insert(TransactionType::TxNftAcceptOffer, map_nftoken_accept_offer);
		m.insert(TransactionType::TxClawback, map_clawback);
		m.insert(TransactionType::TxAmmCreate, map_amm_create);
		m.insert(TransactionType::TxAmmDeposit, map_amm_deposit);
		m.insert(TransactionType::TxAmmWithdraw, map_amm_withdraw);
		m.insert(TransactionType::TxAmmVote, map_amm_vote);
		m.insert(TransactionType::TxAmmBid, map_amm_bid);
		m.insert(TransactionType::TxAmmDelete, map_amm_delete);
		m.insert(TransactionType::TxAmmClawback, map_amm_clawback);
		m.insert(TransactionType::TxDidSet, map_did_set);
		m.insert(TransactionType::TxDidDelete, map_did_delete);
		m.insert(TransactionType::TxOracleSet, map_oracle_set);
		m.insert(TransactionType::TxOracleDelete, map_oracle_delete);
		m.insert(
			TransactionType::TxMptokenIssuanceCreate,
			map_mptoken_issuance_create,
		);
		m.insert(
			TransactionType::TxMptokenIssuanceDestroy,
			map_mptoken_issuance_destroy,
		);
		m.insert(
			TransactionType::TxMptokenIssuanceSet,
			map_mptoken_issuance_set,
		);
		m.insert(TransactionType::TxMptokenAuthorize, map_mptoken_authorize);
		m.insert(TransactionType::TxCredentialCreate, map_credential_create);
		m.insert(TransactionType::TxCredentialAccept, map_credential_accept);
		m.insert(TransactionType::TxCredentialDelete, map_credential_delete);
		m.insert(
			TransactionType::TxPermissionedDomainSet,
			map_permissioned_domain_set,
		);
		m.insert(
			TransactionType::TxPermissionedDomainDelete,
			map_permissioned_domain_delete,
		);
		m.insert(TransactionType::TxDelegateSet, map_delegate_set);
		m.insert(TransactionType::TxBatch, map_batch);
		m.insert(TransactionType::TxEnableAmendment, map_enable_amendment);
		m.insert(TransactionType::TxSetFee, map_set_fee);
		m.insert(TransactionType::TxUnlModify, map_unl_modify);
		m.insert(
			TransactionType::TxXchainCreateBridge,
			map_xchain_create_bridge,
		);
		m.insert(
			TransactionType::TxXchainModifyBridge,
			map_xchain_modify_bridge,
		);
		m.insert(
			TransactionType::TxXchainCreateClaimId,
			map_xchain_create_claim_id,
		);
		m.insert(TransactionType::TxXchainCommit, map_xchain_commit);
		m.insert(TransactionType::TxXchainClaim, map_xchain_claim);
		m.insert(
			TransactionType::TxXchainAccountCreateCommit,
			map_xchain_account_create_commit,
		);
		m.insert(
			TransactionType::TxXchainAddClaimAttestation,
			map_xchain_add_claim_attestation,
		);
		m.insert(
			TransactionType::TxXchainAddAccountCreateAttestation,
			map_xchain_add_account_create_attestation,
		);
		m
	};
}

/// Maps the type-specific body for a transaction, `None` for unknown types.
pub(crate) fn map_tx_details(
	tx_type: TransactionType,
	tx_attrs: &AttrMap,
	meta_attrs: &AttrMap,
) -> Option<TxDetails> {
	VARIANT_MAPPERS
		.get(&tx_type)
		.map(|mapper| mapper(tx_attrs, meta_attrs))
}

fn map_payment(attrs: &AttrMap, meta: &AttrMap) -> TxDetails {
	TxDetails::Payment(proto::Payment {
		destination: get_str(attrs, "Destination"),
		amount: decode_amount(attrs.get("Amount")),
		deliver_max: decode_amount(attrs.get("DeliverMax")),
		send_max: decode_amount(attrs.get("SendMax")),
		deliver_min: decode_amount(attrs.get("DeliverMin")),
		paths: decode_paths(attrs.get("Paths")),
		invoice_id: get_str(attrs, "InvoiceID"),
		destination_tag: get_u32(attrs, "DestinationTag"),
		credential_ids: get_string_array(attrs, "CredentialIDs"),
		domain_id: get_str(attrs, "DomainID"),
		// The delivered amount exists only in the transaction metadata,
		// never in the transaction blob itself.
		delivered_amount: decode_amount(
			meta.get("delivered_amount")
				.or_else(|| meta.get("DeliveredAmount")),
		),
	})
}

fn map_offer_create(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::OfferCreate(proto::OfferCreate {
		taker_gets: decode_amount(attrs.get("TakerGets")),
		taker_pays: decode_amount(attrs.get("TakerPays")),
		expiration: get_u32(attrs, "Expiration"),
		offer_sequence: get_u32(attrs, "OfferSequence"),
		domain_id: get_str(attrs, "DomainID"),
	})
}

fn map_offer_cancel(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::OfferCancel(proto::OfferCancel {
		offer_sequence: get_u32(attrs, "OfferSequence"),
	})
}

fn map_trust_set(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::TrustSet(proto::TrustSet {
		limit_amount: decode_amount(attrs.get("LimitAmount")),
		quality_in: get_u32(attrs, "QualityIn"),
		quality_out: get_u32(attrs, "QualityOut"),
	})
}

fn map_account_set(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::AccountSet(proto::AccountSet {
		set_flag: get_u32(attrs, "SetFlag"),
		clear_flag: get_u32(attrs, "ClearFlag"),
		domain: get_str(attrs, "Domain"),
		email_hash: get_str(attrs, "EmailHash"),
		message_key: get_str(attrs, "MessageKey"),
		transfer_rate: get_u32(attrs, "TransferRate"),
		tick_size: get_u32(attrs, "TickSize"),
		nftoken_minter: get_str(attrs, "NFTokenMinter"),
		wallet_locator: get_str(attrs, "WalletLocator"),
		wallet_size: get_u32(attrs, "WalletSize"),
	})
}

fn map_account_delete(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::AccountDelete(proto::AccountDelete {
		destination: get_str(attrs, "Destination"),
		destination_tag: get_u32(attrs, "DestinationTag"),
		credential_ids: get_string_array(attrs, "CredentialIDs"),
	})
}

fn map_set_regular_key(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::SetRegularKey(proto::SetRegularKey {
		regular_key: get_str(attrs, "RegularKey"),
	})
}

fn map_signer_list_set(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::SignerListSet(proto::SignerListSet {
		signer_quorum: get_u32(attrs, "SignerQuorum"),
		signer_entries: wrapped_objects(attrs, "SignerEntries", "SignerEntry")
			.into_iter()
			.map(|entry| SignerEntry {
				account: get_str(entry, "Account"),
				signer_weight: get_u32(entry, "SignerWeight"),
				wallet_locator: get_str(entry, "WalletLocator"),
			})
			.collect(),
	})
}

fn map_escrow_create(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::EscrowCreate(proto::EscrowCreate {
		destination: get_str(attrs, "Destination"),
		amount: decode_amount(attrs.get("Amount")),
		cancel_after: get_u32(attrs, "CancelAfter"),
		finish_after: get_u32(attrs, "FinishAfter"),
		condition: get_str(attrs, "Condition"),
		destination_tag: get_u32(attrs, "DestinationTag"),
	})
}

fn map_escrow_finish(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::EscrowFinish(proto::EscrowFinish {
		owner: get_str(attrs, "Owner"),
		offer_sequence: get_u32(attrs, "OfferSequence"),
		condition: get_str(attrs, "Condition"),
		fulfillment: get_str(attrs, "Fulfillment"),
		credential_ids: get_string_array(attrs, "CredentialIDs"),
	})
}

fn map_escrow_cancel(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::EscrowCancel(proto::EscrowCancel {
		owner: get_str(attrs, "Owner"),
		offer_sequence: get_u32(attrs, "OfferSequence"),
	})
}

fn map_payment_channel_create(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::PaymentChannelCreate(proto::PaymentChannelCreate {
		destination: get_str(attrs, "Destination"),
		amount: decode_amount(attrs.get("Amount")),
		settle_delay: get_u32(attrs, "SettleDelay"),
		public_key: get_str(attrs, "PublicKey"),
		cancel_after: get_u32(attrs, "CancelAfter"),
		destination_tag: get_u32(attrs, "DestinationTag"),
	})
}

fn map_payment_channel_fund(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::PaymentChannelFund(proto::PaymentChannelFund {
		channel: get_str(attrs, "Channel"),
		amount: decode_amount(attrs.get("Amount")),
		expiration: get_u32(attrs, "Expiration"),
	})
}

fn map_payment_channel_claim(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::PaymentChannelClaim(proto::PaymentChannelClaim {
		channel: get_str(attrs, "Channel"),
		amount: decode_amount(attrs.get("Amount")),
		balance: decode_amount(attrs.get("Balance")),
		signature: get_str(attrs, "Signature"),
		public_key: get_str(attrs, "PublicKey"),
		credential_ids: get_string_array(attrs, "CredentialIDs"),
	})
}

fn map_check_create(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::CheckCreate(proto::CheckCreate {
		destination: get_str(attrs, "Destination"),
		send_max: decode_amount(attrs.get("SendMax")),
		expiration: get_u32(attrs, "Expiration"),
		destination_tag: get_u32(attrs, "DestinationTag"),
		invoice_id: get_str(attrs, "InvoiceID"),
	})
}

fn map_check_cash(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::CheckCash(proto::CheckCash {
		check_id: get_str(attrs, "CheckID"),
		amount: decode_amount(attrs.get("Amount")),
		deliver_min: decode_amount(attrs.get("DeliverMin")),
	})
}

fn map_check_cancel(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::CheckCancel(proto::CheckCancel {
		check_id: get_str(attrs, "CheckID"),
	})
}

fn map_credentials(attrs: &AttrMap, key: &str) -> Vec<Credential> {
	wrapped_objects(attrs, key, "Credential")
		.into_iter()
		.map(|cred| Credential {
			issuer: get_str(cred, "Issuer"),
			credential_type: get_str(cred, "CredentialType"),
		})
		.collect()
}

fn map_deposit_preauth(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::DepositPreauth(proto::DepositPreauth {
		authorize: get_str(attrs, "Authorize"),
		unauthorize: get_str(attrs, "Unauthorize"),
		authorize_credentials: map_credentials(attrs, "AuthorizeCredentials"),
		unauthorize_credentials: map_credentials(attrs, "UnauthorizeCredentials"),
	})
}

fn map_ticket_create(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::TicketCreate(proto::TicketCreate {
		ticket_count: get_u32(attrs, "TicketCount"),
	})
}

fn map_nftoken_mint(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::NftokenMint(proto::NfTokenMint {
		nftoken_taxon: get_u32(attrs, "NFTokenTaxon"),
		issuer: get_str(attrs, "Issuer"),
		transfer_fee: get_u32(attrs, "TransferFee"),
		uri: get_str(attrs, "URI"),
		amount: decode_amount(attrs.get("Amount")),
		expiration: get_u32(attrs, "Expiration"),
		destination: get_str(attrs, "Destination"),
	})
}

fn map_nftoken_burn(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::NftokenBurn(proto::NfTokenBurn {
		nftoken_id: get_str(attrs, "NFTokenID"),
		owner: get_str(attrs, "Owner"),
	})
}

fn map_nftoken_create_offer(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::NftokenCreateOffer(proto::NfTokenCreateOffer {
		nftoken_id: get_str(attrs, "NFTokenID"),
		amount: decode_amount(attrs.get("Amount")),
		owner: get_str(attrs, "Owner"),
		destination: get_str(attrs, "Destination"),
		expiration: get_u32(attrs, "Expiration"),
	})
}

fn map_nftoken_cancel_offer(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::NftokenCancelOffer(proto::NfTokenCancelOffer {
		nftoken_offers: get_string_array(attrs, "NFTokenOffers"),
	})
}

fn map_nftoken_accept_offer(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::NftokenAcceptOffer(proto::NfTokenAcceptOffer {
		nftoken_sell_offer: get_str(attrs, "NFTokenSellOffer"),
		nftoken_buy_offer: get_str(attrs, "NFTokenBuyOffer"),
		nftoken_broker_fee: decode_amount(attrs.get("NFTokenBrokerFee")),
	})
}

fn map_clawback(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::Clawback(proto::Clawback {
		amount: decode_amount(attrs.get("Amount")),
		holder: get_str(attrs, "Holder"),
	})
}

fn map_amm_create(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::AmmCreate(proto::AmmCreate {
		amount: decode_amount(attrs.get("Amount")),
		amount2: decode_amount(attrs.get("Amount2")),
		trading_fee: get_u32(attrs, "TradingFee"),
	})
}

fn map_amm_deposit(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::AmmDeposit(proto::AmmDeposit {
		asset: decode_asset(attrs.get("Asset")),
		asset2: decode_asset(attrs.get("Asset2")),
		amount: decode_amount(attrs.get("Amount")),
		amount2: decode_amount(attrs.get("Amount2")),
		e_price: decode_amount(attrs.get("EPrice")),
		lp_token_out: decode_amount(attrs.get("LPTokenOut")),
		trading_fee: get_u32(attrs, "TradingFee"),
	})
}

fn map_amm_withdraw(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::AmmWithdraw(proto::AmmWithdraw {
		asset: decode_asset(attrs.get("Asset")),
		asset2: decode_asset(attrs.get("Asset2")),
		amount: decode_amount(attrs.get("Amount")),
		amount2: decode_amount(attrs.get("Amount2")),
		e_price: decode_amount(attrs.get("EPrice")),
		lp_token_in: decode_amount(attrs.get("LPTokenIn")),
	})
}

fn map_amm_vote(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::AmmVote(proto::AmmVote {
		asset: decode_asset(attrs.get("Asset")),
		asset2: decode_asset(attrs.get("Asset2")),
		trading_fee: get_u32(attrs, "TradingFee"),
	})
}

fn map_amm_bid(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::AmmBid(proto::AmmBid {
		asset: decode_asset(attrs.get("Asset")),
		asset2: decode_asset(attrs.get("Asset2")),
		bid_min: decode_amount(attrs.get("BidMin")),
		bid_max: decode_amount(attrs.get("BidMax")),
		auth_accounts: wrapped_objects(attrs, "AuthAccounts", "AuthAccount")
			.into_iter()
			.map(|account| AuthAccount {
				account: get_str(account, "Account"),
			})
			.collect(),
	})
}

fn map_amm_delete(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::AmmDelete(proto::AmmDelete {
		asset: decode_asset(attrs.get("Asset")),
		asset2: decode_asset(attrs.get("Asset2")),
	})
}

fn map_amm_clawback(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::AmmClawback(proto::AmmClawback {
		holder: get_str(attrs, "Holder"),
		asset: decode_asset(attrs.get("Asset")),
		asset2: decode_asset(attrs.get("Asset2")),
		amount: decode_amount(attrs.get("Amount")),
	})
}

fn map_did_set(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::DidSet(proto::DidSet {
		did_document: get_str(attrs, "DIDDocument"),
		uri: get_str(attrs, "URI"),
		data: get_str(attrs, "Data"),
	})
}

fn map_did_delete(_attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::DidDelete(proto::DidDelete {})
}

fn map_oracle_set(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::OracleSet(proto::OracleSet {
		oracle_document_id: get_u32(attrs, "OracleDocumentID"),
		provider: get_str(attrs, "Provider"),
		asset_class: get_str(attrs, "AssetClass"),
		last_update_time: get_u32(attrs, "LastUpdateTime"),
		uri: get_str(attrs, "URI"),
		price_data_series: wrapped_objects(attrs, "PriceDataSeries", "PriceData")
			.into_iter()
			.map(|data| PriceData {
				base_asset: get_str(data, "BaseAsset"),
				quote_asset: get_str(data, "QuoteAsset"),
				asset_price: get_u64_lossy(data, "AssetPrice"),
				scale: get_u32(data, "Scale"),
			})
			.collect(),
	})
}

fn map_oracle_delete(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::OracleDelete(proto::OracleDelete {
		oracle_document_id: get_u32(attrs, "OracleDocumentID"),
	})
}

fn map_mptoken_issuance_create(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::MptokenIssuanceCreate(proto::MpTokenIssuanceCreate {
		asset_scale: get_u32(attrs, "AssetScale"),
		maximum_amount: get_u64_lossy(attrs, "MaximumAmount"),
		transfer_fee: get_u32(attrs, "TransferFee"),
		mptoken_metadata: get_str(attrs, "MPTokenMetadata"),
	})
}

fn map_mptoken_issuance_destroy(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::MptokenIssuanceDestroy(proto::MpTokenIssuanceDestroy {
		mptoken_issuance_id: get_str(attrs, "MPTokenIssuanceID"),
	})
}

fn map_mptoken_issuance_set(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::MptokenIssuanceSet(proto::MpTokenIssuanceSet {
		mptoken_issuance_id: get_str(attrs, "MPTokenIssuanceID"),
		holder: get_str(attrs, "Holder"),
	})
}

fn map_mptoken_authorize(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::MptokenAuthorize(proto::MpTokenAuthorize {
		mptoken_issuance_id: get_str(attrs, "MPTokenIssuanceID"),
		holder: get_str(attrs, "Holder"),
	})
}

fn map_credential_create(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::CredentialCreate(proto::CredentialCreate {
		subject: get_str(attrs, "Subject"),
		credential_type: get_str(attrs, "CredentialType"),
		uri: get_str(attrs, "URI"),
		expiration: get_u32(attrs, "Expiration"),
	})
}

fn map_credential_accept(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::CredentialAccept(proto::CredentialAccept {
		issuer: get_str(attrs, "Issuer"),
		credential_type: get_str(attrs, "CredentialType"),
	})
}

fn map_credential_delete(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::CredentialDelete(proto::CredentialDelete {
		subject: get_str(attrs, "Subject"),
		credential_type: get_str(attrs, "CredentialType"),
		issuer: get_str(attrs, "Issuer"),
	})
}

fn map_permissioned_domain_set(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::PermissionedDomainSet(proto::PermissionedDomainSet {
		domain_id: get_str(attrs, "DomainID"),
		accepted_credentials: map_credentials(attrs, "AcceptedCredentials"),
	})
}

fn map_permissioned_domain_delete(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::PermissionedDomainDelete(proto::PermissionedDomainDelete {
		domain_id: get_str(attrs, "DomainID"),
	})
}

fn map_delegate_set(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::DelegateSet(proto::DelegateSet {
		authorize: get_str(attrs, "Authorize"),
		permissions: wrapped_objects(attrs, "Permissions", "Permission")
			.into_iter()
			.map(|permission| get_str(permission, "PermissionValue"))
			.collect(),
	})
}

fn map_batch(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::Batch(proto::Batch {
		raw_transactions: wrapped_objects(attrs, "RawTransactions", "RawTransaction")
			.into_iter()
			.map(|raw| RawTransaction {
				raw_transaction: get_str(raw, "RawTransaction").into_bytes(),
			})
			.collect(),
		batch_signers: wrapped_objects(attrs, "BatchSigners", "BatchSigner")
			.into_iter()
			.map(|signer| BatchSigner {
				account: get_str(signer, "Account"),
				signing_pub_key: get_str(signer, "SigningPubKey"),
				txn_signature: get_str(signer, "TxnSignature"),
				signers: wrapped_objects(signer, "Signers", "Signer")
					.into_iter()
					.map(map_signer)
					.collect(),
			})
			.collect(),
	})
}

fn map_enable_amendment(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::EnableAmendment(proto::EnableAmendment {
		amendment: get_str(attrs, "Amendment"),
		ledger_sequence: get_u32(attrs, "LedgerSequence"),
	})
}

fn map_set_fee(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::SetFee(proto::SetFee {
		base_fee: get_u64_lossy(attrs, "BaseFee"),
		reference_fee_units: get_u32(attrs, "ReferenceFeeUnits"),
		reserve_base: get_u32(attrs, "ReserveBase"),
		reserve_increment: get_u32(attrs, "ReserveIncrement"),
		ledger_sequence: get_u32(attrs, "LedgerSequence"),
	})
}

fn map_unl_modify(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::UnlModify(proto::UnlModify {
		ledger_sequence: get_u32(attrs, "LedgerSequence"),
		unl_modify_disabling: get_bool(attrs, "UNLModifyDisabling"),
		unl_modify_validator: get_str(attrs, "UNLModifyValidator"),
	})
}

fn decode_bridge(attrs: &AttrMap) -> Option<XChainBridge> {
	let bridge = attrs.get("XChainBridge")?.as_object()?;
	Some(XChainBridge {
		locking_chain_door: get_str(bridge, "LockingChainDoor"),
		locking_chain_issue: decode_asset(bridge.get("LockingChainIssue")),
		issuing_chain_door: get_str(bridge, "IssuingChainDoor"),
		issuing_chain_issue: decode_asset(bridge.get("IssuingChainIssue")),
	})
}

fn map_xchain_create_bridge(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::XchainCreateBridge(proto::XChainCreateBridge {
		xchain_bridge: decode_bridge(attrs),
		signature_reward: decode_amount(attrs.get("SignatureReward")),
		min_account_create_amount: decode_amount(attrs.get("MinAccountCreateAmount")),
	})
}

fn map_xchain_modify_bridge(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::XchainModifyBridge(proto::XChainModifyBridge {
		xchain_bridge: decode_bridge(attrs),
		signature_reward: decode_amount(attrs.get("SignatureReward")),
		min_account_create_amount: decode_amount(attrs.get("MinAccountCreateAmount")),
	})
}

fn map_xchain_create_claim_id(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::XchainCreateClaimId(proto::XChainCreateClaimId {
		xchain_bridge: decode_bridge(attrs),
		signature_reward: decode_amount(attrs.get("SignatureReward")),
		other_chain_source: get_str(attrs, "OtherChainSource"),
	})
}

fn map_xchain_commit(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::XchainCommit(proto::XChainCommit {
		xchain_bridge: decode_bridge(attrs),
		xchain_claim_id: get_id_string(attrs, "XChainClaimID"),
		amount: decode_amount(attrs.get("Amount")),
		other_chain_destination: get_str(attrs, "OtherChainDestination"),
	})
}

fn map_xchain_claim(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::XchainClaim(proto::XChainClaim {
		xchain_bridge: decode_bridge(attrs),
		xchain_claim_id: get_id_string(attrs, "XChainClaimID"),
		destination: get_str(attrs, "Destination"),
		destination_tag: get_u32(attrs, "DestinationTag"),
		amount: decode_amount(attrs.get("Amount")),
	})
}

fn map_xchain_account_create_commit(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::XchainAccountCreateCommit(proto::XChainAccountCreateCommit {
		xchain_bridge: decode_bridge(attrs),
		destination: get_str(attrs, "Destination"),
		amount: decode_amount(attrs.get("Amount")),
		signature_reward: decode_amount(attrs.get("SignatureReward")),
	})
}

fn map_xchain_add_claim_attestation(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::XchainAddClaimAttestation(proto::XChainAddClaimAttestation {
		xchain_bridge: decode_bridge(attrs),
		other_chain_source: get_str(attrs, "OtherChainSource"),
		amount: decode_amount(attrs.get("Amount")),
		public_key: get_str(attrs, "PublicKey"),
		signature: get_str(attrs, "Signature"),
		was_locking_chain_send: get_bool(attrs, "WasLockingChainSend"),
		attestation_reward_account: get_str(attrs, "AttestationRewardAccount"),
		attestation_signer_account: get_str(attrs, "AttestationSignerAccount"),
		destination: get_str(attrs, "Destination"),
		xchain_claim_id: get_id_string(attrs, "XChainClaimID"),
	})
}

fn map_xchain_add_account_create_attestation(attrs: &AttrMap, _meta: &AttrMap) -> TxDetails {
	TxDetails::XchainAddAccountCreateAttestation(proto::XChainAddAccountCreateAttestation {
		xchain_bridge: decode_bridge(attrs),
		other_chain_source: get_str(attrs, "OtherChainSource"),
		amount: decode_amount(attrs.get("Amount")),
		public_key: get_str(attrs, "PublicKey"),
		signature: get_str(attrs, "Signature"),
		was_locking_chain_send: get_bool(attrs, "WasLockingChainSend"),
		attestation_reward_account: get_str(attrs, "AttestationRewardAccount"),
		attestation_signer_account: get_str(attrs, "AttestationSignerAccount"),
		destination: get_str(attrs, "Destination"),
		signature_reward: decode_amount(attrs.get("SignatureReward")),
		xchain_account_create_count: get_id_string(attrs, "XChainAccountCreateCount"),
	})
}
