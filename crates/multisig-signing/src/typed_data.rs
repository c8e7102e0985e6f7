//! Construction of the `Execute` typed-data payload.
//!
//! The payload pairs the fixed two-type schema (`Execute` over `Call`) with a
//! contract domain; its EIP-712 hash is what an owner signs and what the
//! contract recomputes to validate the signature. Construction is pure and
//! deterministic: identical inputs yield byte-identical payloads.

use alloy_dyn_abi::TypedData;
use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::Eip712Domain;
use multisig_types::contract::{Call as AbiCall, Execute};
use multisig_types::{parse_evm_address, parse_hex_bytes, Call, QueueOperation};

use crate::{DomainResolver, SigningError};

/// Coerces wire-level calls and a nonce into the `Execute` typed message.
///
/// `value` and `nonce` are accepted as decimal (or 0x-hex) strings; an absent
/// call value defaults to zero and absent call data to the empty payload.
pub fn build_execute_message(calls: &[Call], nonce: &str) -> Result<Execute, SigningError> {
	let calls = calls
		.iter()
		.map(|call| {
			let to = parse_evm_address(&call.to).map_err(|e| {
				SigningError::InvalidOperation(format!("call target '{}': {}", call.to, e))
			})?;
			let value = call.value.as_deref().unwrap_or("0");
			let value = value.parse::<U256>().map_err(|e| {
				SigningError::InvalidOperation(format!("call value '{}': {}", value, e))
			})?;
			let data = parse_hex_bytes(call.data.as_deref().unwrap_or("0x")).map_err(|e| {
				SigningError::InvalidOperation(format!("call data: {}", e))
			})?;
			Ok(AbiCall {
				to,
				value,
				data: data.into(),
			})
		})
		.collect::<Result<Vec<_>, SigningError>>()?;

	let nonce = nonce
		.parse::<U256>()
		.map_err(|e| SigningError::InvalidOperation(format!("nonce '{}': {}", nonce, e)))?;

	Ok(Execute { calls, nonce })
}

/// Pairs a domain with a message into the full signable payload.
///
/// The result carries `primaryType = "Execute"`, the fixed type definitions,
/// the domain and the message, in the shape typed-data signers expect.
pub fn build_execute_typed_data(domain: Eip712Domain, message: Execute) -> TypedData {
	TypedData::from_struct(&message, Some(domain))
}

/// Builds the signable payload for a queue operation.
///
/// Derives the message from the operation's calls and nonce, then resolves
/// the domain through the supplied strategy.
pub async fn create_execute_typed_data(
	operation: &QueueOperation,
	contract: Address,
	resolver: &dyn DomainResolver,
) -> Result<TypedData, SigningError> {
	let message = build_execute_message(&operation.calls, &operation.nonce)?;
	let domain = resolver.resolve_domain(contract).await?;
	Ok(build_execute_typed_data(domain, message))
}

/// EIP-712 signing hash of a payload: what an external signer actually signs.
pub fn signing_hash(typed_data: &TypedData) -> Result<B256, SigningError> {
	typed_data
		.eip712_signing_hash()
		.map_err(|e| SigningError::InvalidOperation(e.to_string()))
}
