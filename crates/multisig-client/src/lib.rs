//! Session facade over the multisig blockchain subsystem.
//!
//! A [`MultisigClient`] owns the per-session deployment selection and the
//! read-only chain connection, and composes the signing, execution and chain
//! crates behind one surface. The selection state is single-writer by
//! construction (`&mut self`); concurrent logical flows must serialize their
//! use of one client or hold a client each; last write wins otherwise.
//!
//! The client never broadcasts: prepared transactions and claim calldata are
//! handed to an external signer/broadcaster, and no retry or backoff is
//! performed here.

use alloy_dyn_abi::TypedData;
use alloy_primitives::{Address, Bytes};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_sol_types::Eip712Domain;
use alloy_transport_http::Http;
use std::sync::Arc;
use thiserror::Error;

use multisig_chains::{Chain, ChainError, ChainRegistry};
use multisig_execution::{select_executable, ExecutionError};
use multisig_signing::{
	ContractDomainResolver, DomainResolver, FixedDomainResolver, SigningError,
};
use multisig_types::{
	parse_evm_address, truncate_id, with_0x_prefix, ChainIdentifier, DeploymentQueue,
	PreparedTransaction, QueueOperation, SelectedDeployment,
};

const NO_EXECUTABLE: &str = "No executable operations found in the queue.";
const NO_SIGNABLE: &str = "No signable operations found in the queue.";
const NO_DEPLOYMENT: &str = "No deployment selected. Call select_deployment first.";

/// Errors surfaced by the client facade.
///
/// Configuration and precondition failures originate here; chain, signing and
/// execution errors pass through transparently so upstream transport errors
/// reach the caller unchanged.
#[derive(Debug, Error)]
pub enum ClientError {
	/// The session is not set up for the requested call.
	#[error("Configuration error: {0}")]
	Configuration(String),
	/// Nothing to do: no executable batch or signable operation exists.
	#[error("Precondition failed: {0}")]
	Precondition(String),
	/// Chain resolution failure.
	#[error(transparent)]
	Chain(#[from] ChainError),
	/// Typed-data construction or domain resolution failure.
	#[error(transparent)]
	Signing(#[from] SigningError),
	/// Calldata encoding failure.
	#[error(transparent)]
	Execution(#[from] ExecutionError),
}

type HttpProvider = Arc<dyn Provider<Http<reqwest::Client>> + Send + Sync>;

/// Client for one multisig deployment session.
pub struct MultisigClient {
	registry: ChainRegistry,
	chain: Option<Chain>,
	selected: Option<SelectedDeployment>,
	provider: Option<HttpProvider>,
}

impl Default for MultisigClient {
	fn default() -> Self {
		Self::new()
	}
}

impl MultisigClient {
	/// Creates a client backed by the preconfigured chain registry.
	pub fn new() -> Self {
		Self::with_registry(ChainRegistry::default())
	}

	/// Creates a client with a caller-provided registry.
	pub fn with_registry(registry: ChainRegistry) -> Self {
		Self {
			registry,
			chain: None,
			selected: None,
			provider: None,
		}
	}

	/// Selects the deployment all subsequent calls operate on.
	///
	/// Resolves the chain (applying the optional RPC override), validates the
	/// contract address and opens a read-only connection. Selecting again
	/// replaces the previous session state.
	pub fn select_deployment(
		&mut self,
		chain: impl Into<ChainIdentifier>,
		deployment_id: impl Into<String>,
		contract_address: &str,
		rpc_url: Option<&str>,
	) -> Result<(), ClientError> {
		let chain = self.registry.get_with_rpc(chain, rpc_url)?;

		let contract = parse_evm_address(contract_address).map_err(|e| {
			ClientError::Configuration(format!(
				"Invalid contract address '{}': {}",
				contract_address, e
			))
		})?;

		let rpc = chain.primary_rpc_url().ok_or_else(|| {
			ClientError::Configuration(format!("Chain {} has no RPC endpoint configured", chain.id))
		})?;
		let url = rpc.parse().map_err(|e| {
			ClientError::Configuration(format!("Invalid RPC URL '{}': {}", rpc, e))
		})?;
		let provider = ProviderBuilder::new().on_http(url);

		let deployment = SelectedDeployment {
			chain_id: chain.id,
			deployment_id: deployment_id.into(),
			contract_address: contract,
		};

		tracing::info!(
			chain_id = chain.id,
			deployment_id = %deployment.deployment_id,
			contract = %contract,
			"Selected multisig deployment"
		);

		self.provider = Some(Arc::new(provider));
		self.selected = Some(deployment);
		self.chain = Some(chain);
		Ok(())
	}

	/// The deployment selected for this session, if any.
	pub fn selected_deployment(&self) -> Option<&SelectedDeployment> {
		self.selected.as_ref()
	}

	/// The resolved chain metadata for this session, if any.
	pub fn selected_chain(&self) -> Option<&Chain> {
		self.chain.as_ref()
	}

	fn deployment(&self) -> Result<&SelectedDeployment, ClientError> {
		self.selected
			.as_ref()
			.ok_or_else(|| ClientError::Configuration(NO_DEPLOYMENT.to_string()))
	}

	fn provider(&self) -> Result<HttpProvider, ClientError> {
		self.provider
			.clone()
			.ok_or_else(|| ClientError::Configuration(NO_DEPLOYMENT.to_string()))
	}

	/// Builds the signable payload for an operation, reading the EIP-712
	/// domain live from the contract.
	pub async fn create_execute_typed_data(
		&self,
		operation: &QueueOperation,
	) -> Result<TypedData, ClientError> {
		let resolver = ContractDomainResolver::new(self.provider()?);
		self.create_execute_typed_data_with(operation, &resolver).await
	}

	/// Builds the signable payload with a pre-fetched domain, skipping the
	/// network entirely.
	pub async fn create_execute_typed_data_with_domain(
		&self,
		operation: &QueueOperation,
		domain: Eip712Domain,
	) -> Result<TypedData, ClientError> {
		let resolver = FixedDomainResolver::new(domain);
		self.create_execute_typed_data_with(operation, &resolver).await
	}

	/// Builds the signable payload with an explicit domain resolution
	/// strategy.
	pub async fn create_execute_typed_data_with(
		&self,
		operation: &QueueOperation,
		resolver: &dyn DomainResolver,
	) -> Result<TypedData, ClientError> {
		let deployment = self.deployment()?;
		Ok(multisig_signing::create_execute_typed_data(
			operation,
			deployment.contract_address,
			resolver,
		)
		.await?)
	}

	/// Computes the batch eligible for execution from a queue snapshot.
	///
	/// Fails with a precondition error when nothing is executable, including
	/// when the first ready operation already breaks contiguity or lacks
	/// signatures.
	pub fn select_executable_operations<'a>(
		&self,
		queue: &'a DeploymentQueue,
	) -> Result<&'a [QueueOperation], ClientError> {
		let next = match queue.next_executable_nonce.parse::<u64>() {
			Ok(nonce) => nonce,
			Err(_) => {
				tracing::warn!(
					next_executable_nonce = %queue.next_executable_nonce,
					"Queue reported a non-numeric next executable nonce"
				);
				return Err(ClientError::Precondition(NO_EXECUTABLE.to_string()));
			}
		};

		let selected = select_executable(next, &queue.items);
		if selected.is_empty() {
			return Err(ClientError::Precondition(NO_EXECUTABLE.to_string()));
		}

		tracing::info!(
			count = selected.len(),
			first_nonce = %selected[0].nonce,
			"Selected executable batch"
		);
		Ok(selected)
	}

	/// Finds the first queue operation the given signer has not signed yet.
	pub fn find_signable_operation<'a>(
		&self,
		queue: &'a DeploymentQueue,
		signer: Address,
	) -> Result<&'a QueueOperation, ClientError> {
		let target = signer.to_checksum(None);
		queue
			.items
			.iter()
			.find(|operation| {
				!operation.signatures.iter().any(|signature| {
					with_0x_prefix(&signature.signer).eq_ignore_ascii_case(&target)
				})
			})
			.inspect(|operation| {
				tracing::debug!(
					operation = %truncate_id(&operation.id),
					nonce = %operation.nonce,
					"Found signable operation"
				);
			})
			.ok_or_else(|| ClientError::Precondition(NO_SIGNABLE.to_string()))
	}

	/// Encodes the batch execute transaction for the session deployment.
	pub fn build_execute_transaction(
		&self,
		operations: &[QueueOperation],
	) -> Result<PreparedTransaction, ClientError> {
		let deployment = self.deployment()?;
		Ok(multisig_execution::build_execute_transaction(
			deployment.contract_address,
			deployment.chain_id,
			operations,
		)?)
	}

	/// Encodes claim calldata for settled deposits.
	///
	/// `erc20` set to the zero address claims the native asset; a recipient
	/// switches the call from `claim` to `claimTo`.
	pub fn build_claim_calldata(
		&self,
		erc20: Address,
		deposit_ids: &[String],
		to: Option<Address>,
	) -> Result<Bytes, ClientError> {
		Ok(multisig_execution::build_claim_calldata(erc20, deposit_ids, to)?)
	}
}
