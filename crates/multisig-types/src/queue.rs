//! Deployment queue types.
//!
//! This module defines the records returned by the queue endpoint of the
//! upstream API: pending multisig operations, the sub-calls they execute and
//! the signatures collected so far. Records are read-only snapshots; all
//! derived values (typed data, transactions) are computed fresh from each
//! snapshot and never written back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One sub-call a multisig operation will execute.
///
/// Wire-level record: `value` is a decimal (or 0x-hex) string and may be
/// absent, defaulting to zero; `data` is a 0x-prefixed hex string and may be
/// absent, defaulting to empty. Coercion to ABI types happens at the builder
/// boundary, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
	/// Target address of the sub-call.
	pub to: String,
	/// Amount of native currency forwarded with the sub-call.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
	/// ABI-encoded payload of the sub-call.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<String>,
}

/// A signature collected for a queue operation.
///
/// Order within `QueueOperation::signatures` matches submission order and is
/// semantically significant: the contract recovers signers from the packed
/// concatenation in exactly this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationSignature {
	/// Address of the owner that produced the signature.
	pub signer: String,
	/// 65-byte ECDSA signature (r || s || v) as a 0x-prefixed hex string.
	pub sign: String,
}

/// Kind of action a queue operation performs.
///
/// Closed set: unknown wire values are rejected at deserialization instead of
/// being passed through as untyped strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueOperationType {
	/// Change of the multisig owner set or threshold.
	MultisigConfigChange,
	/// Rejection of a previously queued operation.
	Reject,
	/// Outgoing payment.
	Payout,
}

/// Lifecycle status of a queue operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueOperationStatus {
	/// Collecting signatures.
	Pending,
	/// Fully signed and eligible for execution.
	Ready,
	/// Execution transaction broadcast, not yet confirmed.
	Executing,
	/// Executed on chain.
	Executed,
	/// Execution failed.
	Failed,
	/// Cancelled before execution.
	Cancelled,
}

impl fmt::Display for QueueOperationStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			QueueOperationStatus::Pending => write!(f, "PENDING"),
			QueueOperationStatus::Ready => write!(f, "READY"),
			QueueOperationStatus::Executing => write!(f, "EXECUTING"),
			QueueOperationStatus::Executed => write!(f, "EXECUTED"),
			QueueOperationStatus::Failed => write!(f, "FAILED"),
			QueueOperationStatus::Cancelled => write!(f, "CANCELLED"),
		}
	}
}

/// A pending multisig operation as reported by the deployment queue.
///
/// Invariants maintained by the server: `signatures_collected` equals
/// `signatures.len()` and never exceeds `signatures_required`; `calls` is
/// non-empty; nonces across a deployment's queue are assigned in strictly
/// increasing order and never renumbered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueOperation {
	/// Server-side identifier of the operation.
	pub id: String,
	/// Execution nonce as a decimal string.
	pub nonce: String,
	/// Kind of action the operation performs.
	pub operation_type: QueueOperationType,
	/// Current lifecycle status.
	pub status: QueueOperationStatus,
	/// Ordered sub-calls the multisig will execute.
	pub calls: Vec<Call>,
	/// Signatures collected so far, in submission order.
	pub signatures: Vec<OperationSignature>,
	/// Number of signatures the contract requires.
	pub signatures_required: u32,
	/// Number of signatures collected so far.
	pub signatures_collected: u32,
	/// 32-byte execution id the contract expects in the batch payload.
	pub execute_operation_id: String,
}

impl QueueOperation {
	/// Whether the signature threshold has been reached.
	pub fn is_fully_signed(&self) -> bool {
		self.signatures_collected >= self.signatures_required
	}
}

/// One page of a deployment's operation queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentQueue {
	/// Total number of operations across all pages.
	pub total: u32,
	/// Current page number.
	pub page: u32,
	/// Page size used by the server.
	pub page_size: u32,
	/// Nonce of the next operation the contract will accept, as a decimal
	/// string.
	pub next_executable_nonce: String,
	/// Operations on this page, sorted ascending by nonce.
	pub items: Vec<QueueOperation>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_queue_operation_round_trips_camel_case() {
		let json = r#"{
			"id": "op-1",
			"nonce": "42",
			"operationType": "PAYOUT",
			"status": "READY",
			"calls": [{"to": "0x5fbdb2315678afecb367f032d93f642f64180aa3"}],
			"signatures": [],
			"signaturesRequired": 2,
			"signaturesCollected": 0,
			"executeOperationId": "0x0101010101010101010101010101010101010101010101010101010101010101"
		}"#;

		let operation: QueueOperation = serde_json::from_str(json).unwrap();
		assert_eq!(operation.nonce, "42");
		assert_eq!(operation.operation_type, QueueOperationType::Payout);
		assert_eq!(operation.status, QueueOperationStatus::Ready);
		assert_eq!(operation.calls[0].value, None);
		assert!(!operation.is_fully_signed());
	}

	#[test]
	fn test_unknown_status_is_rejected() {
		let result = serde_json::from_str::<QueueOperationStatus>("\"ARCHIVED\"");
		assert!(result.is_err());
	}

	#[test]
	fn test_unknown_operation_type_is_rejected() {
		let result = serde_json::from_str::<QueueOperationType>("\"SWEEP\"");
		assert!(result.is_err());
	}
}
