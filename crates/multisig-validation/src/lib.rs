//! Recipient address validation.
//!
//! A pure, side-effect-free accumulator: every check appends to one error
//! list instead of short-circuiting, and the function never fails; callers
//! inspect the returned result. Thrown errors are reserved for boundary and
//! precondition failures elsewhere in the workspace.

use alloy_primitives::Address;
use multisig_types::{parse_evm_address, ChainIdentifier, Currency};
use serde::{Deserialize, Serialize};

/// An entry of the allowed-asset list a payout may be restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowedAsset {
	/// Currency the asset refers to.
	pub currency_id: String,
	/// Chain the asset lives on, when the restriction is chain-scoped.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub chain_id: Option<ChainIdentifier>,
}

/// Inputs for one validation pass.
///
/// Only `address` is mandatory; each optional constraint is checked
/// independently when supplied.
#[derive(Debug, Clone, Default)]
pub struct ValidateAddressParams {
	/// Address string to validate.
	pub address: String,
	/// Chain the caller intends to operate on.
	pub network_chain_id: Option<ChainIdentifier>,
	/// Currency the address would receive.
	pub currency: Option<Currency>,
	/// Allowed-asset list the currency must belong to.
	pub assets: Option<Vec<AllowedAsset>>,
	/// Chains the operation is allowed on.
	pub allowed_networks: Option<Vec<ChainIdentifier>>,
}

/// Outcome of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateAddressResult {
	/// True when no check produced an error.
	pub is_valid: bool,
	/// Accumulated error messages, in check order.
	pub errors: Vec<String>,
	/// Canonical (checksummed) form of the address; withheld when the
	/// address itself failed validation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub normalized_address: Option<Address>,
}

/// Validates an address against well-formedness and the supplied
/// chain/currency/asset constraints.
///
/// Total and non-throwing: any input yields a result object.
pub fn validate_address(params: &ValidateAddressParams) -> ValidateAddressResult {
	let mut errors = Vec::new();
	let mut normalized_address = None;

	if params.address.is_empty() {
		errors.push("Address is required.".to_string());
	} else {
		match parse_evm_address(&params.address) {
			Ok(address) => normalized_address = Some(address),
			Err(_) => errors.push("Address must be a valid EVM address.".to_string()),
		}
	}

	let requested_chain = params.network_chain_id.as_ref().map(ChainIdentifier::normalize);

	if let (Some(currency), Some(chain)) = (&params.currency, &requested_chain) {
		if &currency.chain_id != chain {
			errors.push(format!(
				"Currency {} is not available on chain {}.",
				currency.id, chain
			));
		}
	}

	if let (Some(allowed), Some(chain)) = (&params.allowed_networks, &requested_chain) {
		let permitted = allowed.iter().any(|entry| &entry.normalize() == chain);
		if !permitted {
			errors.push(format!("Chain {} is not allowed for this operation.", chain));
		}
	}

	if let (Some(assets), Some(currency)) = (&params.assets, &params.currency) {
		let matches_asset = assets.iter().any(|asset| {
			let chain_match = asset
				.chain_id
				.as_ref()
				.map(|chain| chain.normalize() == currency.chain_id)
				.unwrap_or(false);
			asset.currency_id == currency.id || chain_match
		});
		if !matches_asset {
			errors.push(format!(
				"Currency {} is not part of the allowed asset list.",
				currency.id
			));
		}
	}

	ValidateAddressResult {
		is_valid: errors.is_empty(),
		errors,
		normalized_address,
	}
}
