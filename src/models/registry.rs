//! Transaction-type and result-code registries.
//!
//! Two closed mappings over the enums in [`super::proto`]: transaction-type
//! names to internal tags and rippled wire codes, and result strings to
//! result categories. Unknown names never fail; they map to the unknown
//! values so a ledger always emits.

use super::proto::{TransactionResult, TransactionType};

impl TransactionType {
	/// Maps a decoded `TransactionType` string to its internal tag.
	///
	/// Unmapped names return [`TransactionType::TxUnknown`]; such
	/// transactions are emitted with common fields only.
	pub fn from_name(name: &str) -> Self {
		match name {
			"Payment" => Self::TxPayment,
			"OfferCreate" => Self::TxOfferCreate,
			"OfferCancel" => Self::TxOfferCancel,
			"TrustSet" => Self::TxTrustSet,
			"AccountSet" => Self::TxAccountSet,
			"AccountDelete" => Self::TxAccountDelete,
			"SetRegularKey" => Self::TxSetRegularKey,
			"SignerListSet" => Self::TxSignerListSet,
			"EscrowCreate" => Self::TxEscrowCreate,
			"EscrowFinish" => Self::TxEscrowFinish,
			"EscrowCancel" => Self::TxEscrowCancel,
			"PaymentChannelCreate" => Self::TxPaymentChannelCreate,
			"PaymentChannelFund" => Self::TxPaymentChannelFund,
			"PaymentChannelClaim" => Self::TxPaymentChannelClaim,
			"CheckCreate" => Self::TxCheckCreate,
			"CheckCash" => Self::TxCheckCash,
			"CheckCancel" => Self::TxCheckCancel,
			"DepositPreauth" => Self::TxDepositPreauth,
			"TicketCreate" => Self::TxTicketCreate,
			"NFTokenMint" => Self::TxNftMint,
			"NFTokenBurn" => Self::TxNftBurn,
			"NFTokenCreateOffer" => Self::TxNftCreateOffer,
			"NFTokenCancelOffer" => Self::TxNftCancelOffer,
			"NFTokenAcceptOffer" => Self::TxNftAcceptOffer,
			"Clawback" => Self::TxClawback,
			"AMMCreate" => Self::TxAmmCreate,
			"AMMDeposit" => Self::TxAmmDeposit,
			"AMMWithdraw" => Self::TxAmmWithdraw,
			"AMMVote" => Self::TxAmmVote,
			"AMMBid" => Self::TxAmmBid,
			"AMMDelete" => Self::TxAmmDelete,
			"AMMClawback" => Self::TxAmmClawback,
			"DIDSet" => Self::TxDidSet,
			"DIDDelete" => Self::TxDidDelete,
			"OracleSet" => Self::TxOracleSet,
			"OracleDelete" => Self::TxOracleDelete,
			"MPTokenIssuanceCreate" => Self::TxMptokenIssuanceCreate,
			"MPTokenIssuanceDestroy" => Self::TxMptokenIssuanceDestroy,
			"MPTokenIssuanceSet" => Self::TxMptokenIssuanceSet,
			"MPTokenAuthorize" => Self::TxMptokenAuthorize,
			"CredentialCreate" => Self::TxCredentialCreate,
			"CredentialAccept" => Self::TxCredentialAccept,
			"CredentialDelete" => Self::TxCredentialDelete,
			"PermissionedDomainSet" => Self::TxPermissionedDomainSet,
			"PermissionedDomainDelete" => Self::TxPermissionedDomainDelete,
			"DelegateSet" => Self::TxDelegateSet,
			"Batch" => Self::TxBatch,
			"EnableAmendment" => Self::TxEnableAmendment,
			"SetFee" => Self::TxSetFee,
			"UNLModify" => Self::TxUnlModify,
			"XChainCreateBridge" => Self::TxXchainCreateBridge,
			"XChainModifyBridge" => Self::TxXchainModifyBridge,
			"XChainCreateClaimID" => Self::TxXchainCreateClaimId,
			"XChainCommit" => Self::TxXchainCommit,
			"XChainClaim" => Self::TxXchainClaim,
			"XChainAccountCreateCommit" => Self::TxXchainAccountCreateCommit,
			"XChainAddClaimAttestation" => Self::TxXchainAddClaimAttestation,
			"XChainAddAccountCreateAttestation" => Self::TxXchainAddAccountCreateAttestation,
			_ => Self::TxUnknown,
		}
	}

	/// The canonical `TransactionType` string, or `""` for the unknown tag.
	pub fn name(&self) -> &'static str {
		match self {
			Self::TxUnknown => "",
			Self::TxPayment => "Payment",
			Self::TxOfferCreate => "OfferCreate",
			Self::TxOfferCancel => "OfferCancel",
			Self::TxTrustSet => "TrustSet",
			Self::TxAccountSet => "AccountSet",
			Self::TxAccountDelete => "AccountDelete",
			Self::TxSetRegularKey => "SetRegularKey",
			Self::TxSignerListSet => "SignerListSet",
			Self::TxEscrowCreate => "EscrowCreate",
			Self::TxEscrowFinish => "EscrowFinish",
			Self::TxEscrowCancel => "EscrowCancel",
			Self::TxPaymentChannelCreate => "PaymentChannelCreate",
			Self::TxPaymentChannelFund => "PaymentChannelFund",
			Self::TxPaymentChannelClaim => "PaymentChannelClaim",
			Self::TxCheckCreate => "CheckCreate",
			Self::TxCheckCash => "CheckCash",
			Self::TxCheckCancel => "CheckCancel",
			Self::TxDepositPreauth => "DepositPreauth",
			Self::TxTicketCreate => "TicketCreate",
			Self::TxNftMint => "NFTokenMint",
			Self::TxNftBurn => "NFTokenBurn",
			Self::TxNftCreateOffer => "NFTokenCreateOffer",
			Self::TxNftCancelOffer => "NFTokenCancelOffer",
			Self::TxNftAcceptOffer => "NFTokenAcceptOffer",
			Self::TxClawback => "Clawback",
			Self::TxAmmCreate => "AMMCreate",
			Self::TxAmmDeposit => "AMMDeposit",
			Self::TxAmmWithdraw => "AMMWithdraw",
			Self::TxAmmVote => "AMMVote",
			Self::TxAmmBid => "AMMBid",
			Self::TxAmmDelete => "AMMDelete",
			Self::TxAmmClawback => "AMMClawback",
			Self::TxDidSet => "DIDSet",
			Self::TxDidDelete => "DIDDelete",
			Self::TxOracleSet => "OracleSet",
			Self::TxOracleDelete => "OracleDelete",
			Self::TxMptokenIssuanceCreate => "MPTokenIssuanceCreate",
			Self::TxMptokenIssuanceDestroy => "MPTokenIssuanceDestroy",
			Self::TxMptokenIssuanceSet => "MPTokenIssuanceSet",
			Self::TxMptokenAuthorize => "MPTokenAuthorize",
			Self::TxCredentialCreate => "CredentialCreate",
			Self::TxCredentialAccept => "CredentialAccept",
			Self::TxCredentialDelete => "CredentialDelete",
			Self::TxPermissionedDomainSet => "PermissionedDomainSet",
			Self::TxPermissionedDomainDelete => "PermissionedDomainDelete",
			Self::TxDelegateSet => "DelegateSet",
			Self::TxBatch => "Batch",
			Self::TxEnableAmendment => "EnableAmendment",
			Self::TxSetFee => "SetFee",
			Self::TxUnlModify => "UNLModify",
			Self::TxXchainCreateBridge => "XChainCreateBridge",
			Self::TxXchainModifyBridge => "XChainModifyBridge",
			Self::TxXchainCreateClaimId => "XChainCreateClaimID",
			Self::TxXchainCommit => "XChainCommit",
			Self::TxXchainClaim => "XChainClaim",
			Self::TxXchainAccountCreateCommit => "XChainAccountCreateCommit",
			Self::TxXchainAddClaimAttestation => "XChainAddClaimAttestation",
			Self::TxXchainAddAccountCreateAttestation => "XChainAddAccountCreateAttestation",
		}
	}

	/// The rippled wire code (TxFormats), or `None` for the unknown tag.
	pub fn wire_code(&self) -> Option<u16> {
		match self {
			Self::TxUnknown => None,
			Self::TxPayment => Some(0),
			Self::TxEscrowCreate => Some(1),
			Self::TxEscrowFinish => Some(2),
			Self::TxAccountSet => Some(3),
			Self::TxEscrowCancel => Some(4),
			Self::TxSetRegularKey => Some(5),
			Self::TxOfferCreate => Some(7),
			Self::TxOfferCancel => Some(8),
			Self::TxTicketCreate => Some(10),
			Self::TxSignerListSet => Some(12),
			Self::TxPaymentChannelCreate => Some(13),
			Self::TxPaymentChannelFund => Some(14),
			Self::TxPaymentChannelClaim => Some(15),
			Self::TxCheckCreate => Some(16),
			Self::TxCheckCash => Some(17),
			Self::TxCheckCancel => Some(18),
			Self::TxDepositPreauth => Some(19),
			Self::TxTrustSet => Some(20),
			Self::TxAccountDelete => Some(21),
			Self::TxNftMint => Some(25),
			Self::TxNftBurn => Some(26),
			Self::TxNftCreateOffer => Some(27),
			Self::TxNftCancelOffer => Some(28),
			Self::TxNftAcceptOffer => Some(29),
			Self::TxClawback => Some(30),
			Self::TxAmmClawback => Some(31),
			Self::TxAmmCreate => Some(35),
			Self::TxAmmDeposit => Some(36),
			Self::TxAmmWithdraw => Some(37),
			Self::TxAmmVote => Some(38),
			Self::TxAmmBid => Some(39),
			Self::TxAmmDelete => Some(40),
			Self::TxXchainClaim => Some(41),
			Self::TxXchainCommit => Some(42),
			Self::TxXchainCreateClaimId => Some(43),
			Self::TxXchainAccountCreateCommit => Some(44),
			Self::TxXchainAddClaimAttestation => Some(45),
			Self::TxXchainAddAccountCreateAttestation => Some(46),
			Self::TxXchainModifyBridge => Some(47),
			Self::TxXchainCreateBridge => Some(48),
			Self::TxDidSet => Some(49),
			Self::TxDidDelete => Some(50),
			Self::TxOracleSet => Some(51),
			Self::TxOracleDelete => Some(52),
			Self::TxMptokenIssuanceCreate => Some(54),
			Self::TxMptokenIssuanceDestroy => Some(55),
			Self::TxMptokenIssuanceSet => Some(56),
			Self::TxMptokenAuthorize => Some(57),
			Self::TxCredentialCreate => Some(58),
			Self::TxCredentialAccept => Some(59),
			Self::TxCredentialDelete => Some(60),
			Self::TxPermissionedDomainSet => Some(62),
			Self::TxPermissionedDomainDelete => Some(63),
			Self::TxDelegateSet => Some(64),
			Self::TxBatch => Some(71),
			Self::TxEnableAmendment => Some(100),
			Self::TxSetFee => Some(101),
			Self::TxUnlModify => Some(102),
		}
	}
}

impl TransactionResult {
	/// Maps an XRPL result string to a result value.
	///
	/// Well-known strings get dedicated values. Anything else is bucketed by
	/// its three-letter category prefix; strings shorter than three
	/// characters (or with a foreign prefix) map to
	/// [`TransactionResult::ResultUnknown`].
	pub fn from_code(code: &str) -> Self {
		match code {
			"tesSUCCESS" => Self::TesSuccess,
			"tecCLAIMED" => Self::TecClaimed,
			"tecPATH_PARTIAL" => Self::TecPathPartial,
			"tecUNFUNDED_ADD" => Self::TecUnfundedAdd,
			"tecUNFUNDED_OFFER" => Self::TecUnfundedOffer,
			"tecUNFUNDED_PAYMENT" => Self::TecUnfundedPayment,
			"tecFAILED_PROCESSING" => Self::TecFailedProcessing,
			"tecDIR_FULL" => Self::TecDirFull,
			"tecINSUF_RESERVE_LINE" => Self::TecInsufReserveLine,
			"tecINSUF_RESERVE_OFFER" => Self::TecInsufReserveOffer,
			"tecNO_DST" => Self::TecNoDst,
			"tecNO_DST_INSUF_XRP" => Self::TecNoDstInsufXrp,
			"tecNO_LINE_INSUF_RESERVE" => Self::TecNoLineInsufReserve,
			"tecNO_LINE_REDUNDANT" => Self::TecNoLineRedundant,
			"tecPATH_DRY" => Self::TecPathDry,
			"tecUNFUNDED" => Self::TecUnfunded,
			"tecNO_ALTERNATIVE_KEY" => Self::TecNoAlternativeKey,
			"tecNO_REGULAR_KEY" => Self::TecNoRegularKey,
			other => match other.get(..3) {
				Some("tec") => Self::TecOther,
				Some("tef") => Self::TefFailure,
				Some("tem") => Self::TemMalformed,
				Some("ter") => Self::TerRetry,
				_ => Self::ResultUnknown,
			},
		}
	}

	/// Whether the result indicates the transaction succeeded.
	pub fn is_success(&self) -> bool {
		*self == Self::TesSuccess
	}

	/// Whether the fee was claimed but the transaction itself failed.
	pub fn is_claimed(&self) -> bool {
		*self >= Self::TecClaimed && *self <= Self::TecOther
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_known_type_round_trip() {
		for name in [
			"Payment",
			"OfferCreate",
			"TrustSet",
			"EscrowFinish",
			"NFTokenMint",
			"AMMBid",
			"MPTokenAuthorize",
			"CredentialDelete",
			"Batch",
			"UNLModify",
			"XChainCommit",
			"XChainAddAccountCreateAttestation",
		] {
			let tag = TransactionType::from_name(name);
			assert_ne!(tag, TransactionType::TxUnknown, "{name} should be known");
			assert_eq!(tag.name(), name);
		}
	}

	#[test]
	fn test_unknown_type_name() {
		assert_eq!(
			TransactionType::from_name("FutureTx"),
			TransactionType::TxUnknown
		);
		assert_eq!(TransactionType::from_name(""), TransactionType::TxUnknown);
	}

	#[test]
	fn test_wire_codes() {
		assert_eq!(TransactionType::TxPayment.wire_code(), Some(0));
		assert_eq!(TransactionType::TxTrustSet.wire_code(), Some(20));
		assert_eq!(TransactionType::TxNftMint.wire_code(), Some(25));
		assert_eq!(TransactionType::TxEnableAmendment.wire_code(), Some(100));
		assert_eq!(TransactionType::TxUnknown.wire_code(), None);
	}

	#[test]
	fn test_exact_result_codes() {
		assert_eq!(
			TransactionResult::from_code("tesSUCCESS"),
			TransactionResult::TesSuccess
		);
		assert_eq!(
			TransactionResult::from_code("tecPATH_PARTIAL"),
			TransactionResult::TecPathPartial
		);
		assert_eq!(
			TransactionResult::from_code("tecNO_REGULAR_KEY"),
			TransactionResult::TecNoRegularKey
		);
	}

	#[test]
	fn test_result_prefix_fallback() {
		assert_eq!(
			TransactionResult::from_code("tecKILLED"),
			TransactionResult::TecOther
		);
		assert_eq!(
			TransactionResult::from_code("tefPAST_SEQ"),
			TransactionResult::TefFailure
		);
		assert_eq!(
			TransactionResult::from_code("temBAD_FEE"),
			TransactionResult::TemMalformed
		);
		assert_eq!(
			TransactionResult::from_code("terQUEUED"),
			TransactionResult::TerRetry
		);
	}

	#[test]
	fn test_result_unknown_fallback() {
		assert_eq!(
			TransactionResult::from_code("te"),
			TransactionResult::ResultUnknown
		);
		assert_eq!(
			TransactionResult::from_code(""),
			TransactionResult::ResultUnknown
		);
		assert_eq!(
			TransactionResult::from_code("xyzUNKNOWN"),
			TransactionResult::ResultUnknown
		);
	}

	#[test]
	fn test_result_helpers() {
		assert!(TransactionResult::TesSuccess.is_success());
		assert!(!TransactionResult::TecClaimed.is_success());
		assert!(TransactionResult::TecOther.is_claimed());
		assert!(!TransactionResult::TefFailure.is_claimed());
	}
}
