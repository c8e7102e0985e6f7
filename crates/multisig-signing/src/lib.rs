//! EIP-712 signing support for multisig queue operations.
//!
//! This module builds the canonical `Execute` typed-data payload an owner
//! signs for a pending operation, and resolves the EIP-712 domain the
//! signature must be scoped to. Domain resolution is a strategy trait with
//! two implementations: a live resolver that reads the contract on every
//! call, and a fixed resolver for pre-fetched or test domains.

use alloy_primitives::Address;
use alloy_sol_types::Eip712Domain;
use async_trait::async_trait;
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod contract;
	pub mod fixed;
}

mod typed_data;

pub use implementations::contract::ContractDomainResolver;
pub use implementations::fixed::FixedDomainResolver;
pub use typed_data::{
	build_execute_message, build_execute_typed_data, create_execute_typed_data, signing_hash,
};

/// Errors that can occur while building or resolving signable payloads.
#[derive(Debug, Error)]
pub enum SigningError {
	/// A queue operation carries data that cannot be coerced into the typed
	/// message (bad address, value or payload encoding).
	#[error("Invalid operation data: {0}")]
	InvalidOperation(String),
	/// The RPC endpoint could not be parsed into a usable URL.
	#[error("Invalid RPC URL: {0}")]
	InvalidRpcUrl(String),
	/// The `eip712Domain()` read failed; the transport/contract error is
	/// carried through unchanged.
	#[error("Domain read failed: {0}")]
	DomainRead(String),
}

/// Strategy for obtaining the EIP-712 domain of a multisig contract.
///
/// The caller picks the implementation explicitly instead of toggling code
/// paths through an optional parameter: [`ContractDomainResolver`] for live
/// on-chain reads, [`FixedDomainResolver`] when the domain is already known.
#[async_trait]
pub trait DomainResolver: Send + Sync {
	/// Resolves the domain to scope an `Execute` signature to.
	///
	/// Live implementations must not cache across calls: the contract is the
	/// single source of truth and can change its domain across upgrades.
	async fn resolve_domain(&self, contract: Address) -> Result<Eip712Domain, SigningError>;
}
