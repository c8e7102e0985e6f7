//! API-boundary types shared across crates.
//!
//! The upstream REST client itself lives outside this repository; these are
//! the records its responses are deserialized into where the blockchain
//! subsystem needs them, plus the per-session deployment selection state.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// A chain identifier accepted as either a number or a numeric string.
///
/// The upstream API uses string chain ids ("137") while on-chain code uses
/// numeric ones; this type normalizes between the two without forcing every
/// caller through a parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChainIdentifier {
	/// Numeric chain id.
	Id(u64),
	/// String-typed chain id as sent by the API.
	Text(String),
}

impl ChainIdentifier {
	/// Canonical string form, used for comparisons against API records.
	pub fn normalize(&self) -> String {
		match self {
			ChainIdentifier::Id(id) => id.to_string(),
			ChainIdentifier::Text(text) => text.clone(),
		}
	}

	/// Numeric form, if the identifier parses as one.
	pub fn as_u64(&self) -> Option<u64> {
		match self {
			ChainIdentifier::Id(id) => Some(*id),
			ChainIdentifier::Text(text) => text.parse().ok(),
		}
	}
}

impl From<u64> for ChainIdentifier {
	fn from(id: u64) -> Self {
		ChainIdentifier::Id(id)
	}
}

impl From<&str> for ChainIdentifier {
	fn from(text: &str) -> Self {
		ChainIdentifier::Text(text.to_string())
	}
}

impl From<String> for ChainIdentifier {
	fn from(text: String) -> Self {
		ChainIdentifier::Text(text)
	}
}

/// Currency metadata as reported by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
	/// Server-side currency identifier.
	pub id: String,
	/// Token symbol (e.g. "USDC").
	pub symbol: String,
	/// Chain the currency lives on, as a string chain id.
	pub chain_id: String,
	/// Token contract address; absent for the native asset.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub address: Option<String>,
	/// Number of decimal places, when known.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub decimals: Option<u8>,
}

/// Deployment selected for the current client session.
///
/// Set once via chain selection and reused for subsequent calls. Owned
/// exclusively by one client instance; concurrent flows must either serialize
/// access or use separate clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedDeployment {
	/// Chain the deployment lives on.
	pub chain_id: u64,
	/// Server-side deployment identifier.
	pub deployment_id: String,
	/// Address of the multisig wallet contract.
	pub contract_address: Address,
}

/// Payload submitted to the queue after signing an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureSubmission {
	/// Operation the signature belongs to.
	pub operation_id: String,
	/// 65-byte ECDSA signature as a 0x-prefixed hex string.
	pub signature: String,
}

/// Updated signature counts returned by the queue after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureReceipt {
	/// Operation the signature was recorded against.
	pub operation_id: String,
	/// Signatures collected after the submission.
	pub signatures_collected: u32,
	/// Signatures the contract requires.
	pub signatures_required: u32,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_chain_identifier_normalizes_both_forms() {
		assert_eq!(ChainIdentifier::from(137u64).normalize(), "137");
		assert_eq!(ChainIdentifier::from("137").normalize(), "137");
		assert_eq!(ChainIdentifier::from(137u64).as_u64(), Some(137));
		assert_eq!(ChainIdentifier::from("137").as_u64(), Some(137));
		assert_eq!(ChainIdentifier::from("polygon").as_u64(), None);
	}

	#[test]
	fn test_chain_identifier_deserializes_untagged() {
		assert_eq!(
			serde_json::from_str::<ChainIdentifier>("137").unwrap(),
			ChainIdentifier::Id(137)
		);
		assert_eq!(
			serde_json::from_str::<ChainIdentifier>("\"137\"").unwrap(),
			ChainIdentifier::Text("137".to_string())
		);
	}
}
