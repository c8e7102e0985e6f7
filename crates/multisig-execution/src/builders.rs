//! Encoding of multisig execute and claim calldata.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use multisig_types::contract::{self, IMultiSigWallet};
use multisig_types::{
	parse_bytes32, parse_evm_address, parse_hex_bytes, Call, PreparedTransaction, QueueOperation,
};

use crate::ExecutionError;

/// Raw byte length of one r || s || v signature.
const SIGNATURE_LEN: usize = 65;

/// Builds the batch `execute` transaction for the selected operations.
///
/// Each operation becomes an `{calls, signatures, id}` tuple: call values
/// coerced with zero defaults, signatures packed back-to-back in submission
/// order with no delimiter or count prefix, and the server-assigned 32-byte
/// execution id. The function value is fixed at zero; gas and fees are left
/// to the broadcaster.
pub fn build_execute_transaction(
	contract_address: Address,
	chain_id: u64,
	operations: &[QueueOperation],
) -> Result<PreparedTransaction, ExecutionError> {
	if operations.is_empty() {
		return Err(ExecutionError::EmptyBatch);
	}

	let encoded = operations
		.iter()
		.map(encode_operation)
		.collect::<Result<Vec<_>, _>>()?;

	let data = IMultiSigWallet::executeCall {
		operations: encoded,
	}
	.abi_encode();

	tracing::debug!(
		count = operations.len(),
		chain_id,
		contract = %contract_address,
		"Encoded multisig execute batch"
	);

	Ok(PreparedTransaction::new(
		contract_address,
		data.into(),
		chain_id,
	))
}

/// Encodes a `claim` or `claimTo` call for settled deposits.
///
/// `erc20` is the token being claimed; the zero address denotes the native
/// asset. Identifiers are normalized to canonical 32-byte values. The
/// function is chosen solely by the presence of `to`: with a recipient the
/// calldata targets `claimTo(erc20, to, ids)`, without one `claim(erc20, ids)`.
pub fn build_claim_calldata(
	erc20: Address,
	deposit_ids: &[String],
	to: Option<Address>,
) -> Result<Bytes, ExecutionError> {
	let ids = deposit_ids
		.iter()
		.map(|id| {
			parse_bytes32(id).map_err(|e| ExecutionError::InvalidClaimId {
				id: id.clone(),
				reason: e.to_string(),
			})
		})
		.collect::<Result<Vec<_>, _>>()?;

	let data = match to {
		Some(recipient) => IMultiSigWallet::claimToCall {
			erc20,
			to: recipient,
			ids,
		}
		.abi_encode(),
		None => IMultiSigWallet::claimCall { erc20, ids }.abi_encode(),
	};

	Ok(data.into())
}

fn encode_operation(operation: &QueueOperation) -> Result<contract::Operation, ExecutionError> {
	let calls = operation
		.calls
		.iter()
		.map(|call| encode_call(operation, call))
		.collect::<Result<Vec<_>, _>>()?;

	// The contract recovers signers from back-to-back 65-byte chunks, so
	// concatenation order must equal submission order.
	let mut packed = Vec::with_capacity(operation.signatures.len() * SIGNATURE_LEN);
	for signature in &operation.signatures {
		let raw = parse_hex_bytes(&signature.sign).map_err(|e| invalid(operation, format!(
			"signature from {}: {}",
			signature.signer, e
		)))?;
		if raw.len() != SIGNATURE_LEN {
			return Err(invalid(
				operation,
				format!(
					"signature from {} is {} bytes, expected {}",
					signature.signer,
					raw.len(),
					SIGNATURE_LEN
				),
			));
		}
		packed.extend_from_slice(&raw);
	}

	let id = parse_bytes32(&operation.execute_operation_id)
		.map_err(|e| invalid(operation, format!("execute operation id: {}", e)))?;

	Ok(contract::Operation {
		calls,
		signatures: packed.into(),
		id,
	})
}

fn encode_call(operation: &QueueOperation, call: &Call) -> Result<contract::Call, ExecutionError> {
	let to = parse_evm_address(&call.to)
		.map_err(|e| invalid(operation, format!("call target '{}': {}", call.to, e)))?;
	let value = call.value.as_deref().unwrap_or("0");
	let value = value
		.parse::<U256>()
		.map_err(|e| invalid(operation, format!("call value '{}': {}", value, e)))?;
	let data = parse_hex_bytes(call.data.as_deref().unwrap_or("0x"))
		.map_err(|e| invalid(operation, format!("call data: {}", e)))?;

	Ok(contract::Call {
		to,
		value,
		data: data.into(),
	})
}

fn invalid(operation: &QueueOperation, reason: String) -> ExecutionError {
	ExecutionError::InvalidOperation {
		id: operation.id.clone(),
		reason,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use multisig_types::{OperationSignature, QueueOperationStatus, QueueOperationType};

	const CONTRACT: &str = "0x9fe46736679d2d9a65f0992f2272de9f3c7fa6e0";

	fn signature(byte: u8) -> OperationSignature {
		OperationSignature {
			signer: format!("0x{}", "ab".repeat(20)),
			sign: format!("0x{}", hex::encode([byte; 65])),
		}
	}

	fn operation(nonce: u64, signatures: Vec<OperationSignature>) -> QueueOperation {
		QueueOperation {
			id: format!("op-{}", nonce),
			nonce: nonce.to_string(),
			operation_type: QueueOperationType::Payout,
			status: QueueOperationStatus::Ready,
			calls: vec![Call {
				to: "0x5fbdb2315678afecb367f032d93f642f64180aa3".to_string(),
				value: Some("250".to_string()),
				data: Some("0xdeadbeef".to_string()),
			}],
			signatures_collected: signatures.len() as u32,
			signatures_required: signatures.len() as u32,
			signatures,
			execute_operation_id: format!("0x{}", "33".repeat(32)),
		}
	}

	fn contract_address() -> Address {
		parse_evm_address(CONTRACT).unwrap()
	}

	#[test]
	fn test_execute_transaction_shape() {
		let ops = vec![operation(10, vec![signature(0x01), signature(0x02)])];
		let tx = build_execute_transaction(contract_address(), 137, &ops).unwrap();

		assert_eq!(tx.to, contract_address());
		assert_eq!(tx.chain_id, 137);
		assert_eq!(tx.value, U256::ZERO);
		assert_eq!(&tx.data[..4], IMultiSigWallet::executeCall::SELECTOR);
	}

	#[test]
	fn test_signatures_are_packed_in_submission_order() {
		let ops = vec![operation(10, vec![signature(0x01), signature(0x02)])];
		let tx = build_execute_transaction(contract_address(), 137, &ops).unwrap();

		let decoded = IMultiSigWallet::executeCall::abi_decode(&tx.data, true).unwrap();
		let packed = &decoded.operations[0].signatures;
		assert_eq!(packed.len(), 2 * SIGNATURE_LEN);
		assert!(packed[..SIGNATURE_LEN].iter().all(|&b| b == 0x01));
		assert!(packed[SIGNATURE_LEN..].iter().all(|&b| b == 0x02));
		assert_eq!(decoded.operations[0].id.0, [0x33u8; 32]);
	}

	#[test]
	fn test_empty_batch_is_rejected() {
		assert!(matches!(
			build_execute_transaction(contract_address(), 137, &[]),
			Err(ExecutionError::EmptyBatch)
		));
	}

	#[test]
	fn test_short_signature_fails_whole_batch() {
		let mut bad = signature(0x01);
		bad.sign = format!("0x{}", "01".repeat(64));
		let ops = vec![operation(10, vec![bad])];
		assert!(matches!(
			build_execute_transaction(contract_address(), 137, &ops),
			Err(ExecutionError::InvalidOperation { .. })
		));
	}

	#[test]
	fn test_malformed_execution_id_fails_whole_batch() {
		let mut op = operation(10, vec![signature(0x01)]);
		op.execute_operation_id = "0x1234".to_string();
		assert!(matches!(
			build_execute_transaction(contract_address(), 137, &[op]),
			Err(ExecutionError::InvalidOperation { .. })
		));
	}

	#[test]
	fn test_claim_selects_function_by_recipient_presence() {
		let erc20 = contract_address();
		let ids = vec![format!("0x{}", "44".repeat(32))];

		let without_recipient = build_claim_calldata(erc20, &ids, None).unwrap();
		assert_eq!(&without_recipient[..4], IMultiSigWallet::claimCall::SELECTOR);

		let recipient = parse_evm_address("0x5fbdb2315678afecb367f032d93f642f64180aa3").unwrap();
		let with_recipient = build_claim_calldata(erc20, &ids, Some(recipient)).unwrap();
		assert_eq!(&with_recipient[..4], IMultiSigWallet::claimToCall::SELECTOR);
	}

	#[test]
	fn test_claim_ids_accept_bare_hex() {
		let erc20 = Address::ZERO;
		let ids = vec!["55".repeat(32)];
		let data = build_claim_calldata(erc20, &ids, None).unwrap();

		let decoded = IMultiSigWallet::claimCall::abi_decode(&data, true).unwrap();
		assert_eq!(decoded.ids.len(), 1);
		assert_eq!(decoded.ids[0].0, [0x55u8; 32]);
	}

	#[test]
	fn test_claim_rejects_non_bytes32_ids() {
		let result = build_claim_calldata(Address::ZERO, &["0xbeef".to_string()], None);
		assert!(matches!(result, Err(ExecutionError::InvalidClaimId { .. })));
	}
}
