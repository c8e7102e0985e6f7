//! Chain registry for the multisig treasury kit.
//!
//! Resolves chain identifiers to static network metadata: display name,
//! native currency and RPC endpoint lists. The registry ships with a curated
//! set of EVM networks and can be extended with custom entries; an RPC
//! override swaps every endpoint list for a single caller-provided URL.

use multisig_types::ChainIdentifier;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during chain resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
	/// The identifier maps to no chain known to the registry.
	#[error("Unsupported chain ID: {0}. Chain is not preconfigured in the registry.")]
	UnsupportedChain(String),
}

/// Native currency of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
	pub name: String,
	pub symbol: String,
	pub decimals: u8,
}

/// RPC endpoint lists for a chain.
///
/// Mirrors the common wallet-tooling split between a "default" list used by
/// clients and a "public" list safe to hand out; an override replaces both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcUrls {
	pub default: Vec<String>,
	pub public: Vec<String>,
}

/// Static metadata for one EVM network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
	pub id: u64,
	pub name: String,
	pub native_currency: NativeCurrency,
	pub rpc_urls: RpcUrls,
}

impl Chain {
	fn new(id: u64, name: &str, symbol: &str, rpc_url: &str) -> Self {
		Self {
			id,
			name: name.to_string(),
			native_currency: NativeCurrency {
				name: name.to_string(),
				symbol: symbol.to_string(),
				decimals: 18,
			},
			rpc_urls: RpcUrls {
				default: vec![rpc_url.to_string()],
				public: vec![rpc_url.to_string()],
			},
		}
	}

	/// Returns a copy with both endpoint lists replaced by `rpc_url`.
	pub fn with_rpc_override(&self, rpc_url: &str) -> Self {
		let mut chain = self.clone();
		chain.rpc_urls = RpcUrls {
			default: vec![rpc_url.to_string()],
			public: vec![rpc_url.to_string()],
		};
		chain
	}

	/// First default RPC endpoint, if any is configured.
	pub fn primary_rpc_url(&self) -> Option<&str> {
		self.rpc_urls.default.first().map(String::as_str)
	}
}

/// Registry of known chains keyed by chain id.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
	chains: HashMap<u64, Chain>,
}

impl Default for ChainRegistry {
	fn default() -> Self {
		let mut registry = Self {
			chains: HashMap::new(),
		};
		for chain in preconfigured_chains() {
			registry.insert(chain);
		}
		registry
	}
}

impl ChainRegistry {
	/// Creates an empty registry with no preconfigured chains.
	pub fn empty() -> Self {
		Self {
			chains: HashMap::new(),
		}
	}

	/// Adds or replaces a chain entry.
	pub fn insert(&mut self, chain: Chain) {
		self.chains.insert(chain.id, chain);
	}

	/// Resolves a chain by numeric or string identifier.
	pub fn get(&self, id: impl Into<ChainIdentifier>) -> Result<Chain, ChainError> {
		let id = id.into();
		let numeric = id
			.as_u64()
			.ok_or_else(|| ChainError::UnsupportedChain(id.normalize()))?;
		self.chains
			.get(&numeric)
			.cloned()
			.ok_or_else(|| ChainError::UnsupportedChain(id.normalize()))
	}

	/// Resolves a chain and applies an optional RPC endpoint override.
	pub fn get_with_rpc(
		&self,
		id: impl Into<ChainIdentifier>,
		rpc_url: Option<&str>,
	) -> Result<Chain, ChainError> {
		let chain = self.get(id)?;
		Ok(match rpc_url {
			Some(url) => chain.with_rpc_override(url),
			None => chain,
		})
	}
}

/// The curated network set the registry ships with.
fn preconfigured_chains() -> Vec<Chain> {
	vec![
		Chain::new(1, "Ethereum", "ETH", "https://eth.merkle.io"),
		Chain::new(10, "OP Mainnet", "ETH", "https://mainnet.optimism.io"),
		Chain::new(56, "BNB Smart Chain", "BNB", "https://rpc.ankr.com/bsc"),
		Chain::new(100, "Gnosis", "xDAI", "https://rpc.gnosischain.com"),
		Chain::new(137, "Polygon", "POL", "https://polygon-rpc.com"),
		Chain::new(8453, "Base", "ETH", "https://mainnet.base.org"),
		Chain::new(42161, "Arbitrum One", "ETH", "https://arb1.arbitrum.io/rpc"),
		Chain::new(
			43114,
			"Avalanche",
			"AVAX",
			"https://api.avax.network/ext/bc/C/rpc",
		),
		Chain::new(11155111, "Sepolia", "ETH", "https://sepolia.drpc.org"),
	]
}
