//! Prepared transaction types.
//!
//! A [`PreparedTransaction`] is the immutable output of the transaction
//! builders: everything an external signer/broadcaster needs to submit the
//! call. This subsystem never broadcasts, retries or polls for receipts.

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// A fully-encoded contract call ready for an external broadcaster.
///
/// Pure function output with no hidden state; gas and fee fields are left to
/// the broadcaster unless a caller chooses to pre-fill them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedTransaction {
	/// Contract the transaction is addressed to.
	pub to: Address,
	/// ABI-encoded calldata.
	pub data: Bytes,
	/// Chain the transaction targets.
	pub chain_id: u64,
	/// Native value sent with the call.
	pub value: U256,
	/// Optional gas limit override.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub gas_limit: Option<u64>,
	/// Optional EIP-1559 max fee per gas, in wei.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_fee_per_gas: Option<u128>,
	/// Optional EIP-1559 priority fee per gas, in wei.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_priority_fee_per_gas: Option<u128>,
}

impl PreparedTransaction {
	/// Creates a transaction with value zero and no gas overrides.
	pub fn new(to: Address, data: Bytes, chain_id: u64) -> Self {
		Self {
			to,
			data,
			chain_id,
			value: U256::ZERO,
			gas_limit: None,
			max_fee_per_gas: None,
			max_priority_fee_per_gas: None,
		}
	}
}
