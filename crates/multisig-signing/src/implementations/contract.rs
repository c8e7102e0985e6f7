//! Live EIP-712 domain resolution against the multisig contract.
//!
//! Performs one read-only `eip712Domain()` call per invocation. Nothing is
//! cached: the latency of a re-read is traded for absolute correctness
//! against contract upgrades that change the domain.

use alloy_primitives::Address;
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::{Eip712Domain, SolCall};
use alloy_transport_http::Http;
use async_trait::async_trait;
use multisig_types::contract::IMultiSigWallet;
use std::sync::Arc;

use crate::{DomainResolver, SigningError};

/// Domain resolver backed by a read-capable chain connection.
pub struct ContractDomainResolver {
	/// Read-only provider for the deployment's chain.
	provider: Arc<dyn Provider<Http<reqwest::Client>> + Send + Sync>,
}

impl ContractDomainResolver {
	/// Creates a resolver on an existing provider.
	pub fn new(provider: Arc<dyn Provider<Http<reqwest::Client>> + Send + Sync>) -> Self {
		Self { provider }
	}

	/// Creates a resolver with a fresh HTTP provider for `rpc_url`.
	pub fn from_rpc_url(rpc_url: &str) -> Result<Self, SigningError> {
		let url = rpc_url
			.parse()
			.map_err(|e| SigningError::InvalidRpcUrl(format!("{}: {}", rpc_url, e)))?;
		let provider = ProviderBuilder::new().on_http(url);
		Ok(Self {
			provider: Arc::new(provider),
		})
	}
}

#[async_trait]
impl DomainResolver for ContractDomainResolver {
	async fn resolve_domain(&self, contract: Address) -> Result<Eip712Domain, SigningError> {
		let call_data = IMultiSigWallet::eip712DomainCall {}.abi_encode();
		let request = TransactionRequest::default()
			.to(contract)
			.input(call_data.into());

		let raw = self
			.provider
			.call(&request)
			.await
			.map_err(|e| SigningError::DomainRead(e.to_string()))?;

		// EIP-5267 tuple: index 0 is a bitmask of populated fields; only
		// name, version, chainId and verifyingContract matter here.
		let domain = IMultiSigWallet::eip712DomainCall::abi_decode_returns(&raw, true)
			.map_err(|e| SigningError::DomainRead(format!("malformed eip712Domain response: {}", e)))?;

		tracing::debug!(
			contract = %contract,
			name = %domain.name,
			version = %domain.version,
			chain_id = %domain.chainId,
			"Read EIP-712 domain from contract"
		);

		Ok(Eip712Domain::new(
			Some(domain.name.into()),
			Some(domain.version.into()),
			Some(domain.chainId),
			Some(domain.verifyingContract),
			None,
		))
	}
}
