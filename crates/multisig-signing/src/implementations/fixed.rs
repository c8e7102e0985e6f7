//! Fixed-value domain resolution.
//!
//! Returns a caller-supplied domain without touching the network. Used when
//! the domain was pre-fetched out of band, and in tests.

use alloy_primitives::Address;
use alloy_sol_types::Eip712Domain;
use async_trait::async_trait;

use crate::{DomainResolver, SigningError};

/// Domain resolver that always yields the same domain.
pub struct FixedDomainResolver {
	domain: Eip712Domain,
}

impl FixedDomainResolver {
	/// Creates a resolver around an already-known domain.
	pub fn new(domain: Eip712Domain) -> Self {
		Self { domain }
	}
}

#[async_trait]
impl DomainResolver for FixedDomainResolver {
	async fn resolve_domain(&self, _contract: Address) -> Result<Eip712Domain, SigningError> {
		Ok(self.domain.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::create_execute_typed_data;
	use alloy_primitives::address;
	use alloy_sol_types::eip712_domain;
	use multisig_types::{
		Call, OperationSignature, QueueOperation, QueueOperationStatus, QueueOperationType,
	};

	fn sample_operation() -> QueueOperation {
		QueueOperation {
			id: "op-1".to_string(),
			nonce: "12".to_string(),
			operation_type: QueueOperationType::Payout,
			status: QueueOperationStatus::Ready,
			calls: vec![Call {
				to: "0x5fbdb2315678afecb367f032d93f642f64180aa3".to_string(),
				value: Some("1".to_string()),
				data: None,
			}],
			signatures: Vec::<OperationSignature>::new(),
			signatures_required: 2,
			signatures_collected: 0,
			execute_operation_id: format!("0x{}", "22".repeat(32)),
		}
	}

	#[tokio::test]
	async fn test_fixed_resolver_bypasses_network() {
		let domain = eip712_domain! {
			name: "MultiSigWallet",
			version: "2",
			chain_id: 1,
			verifying_contract: address!("0000000000000000000000000000000000000abc"),
		};
		let resolver = FixedDomainResolver::new(domain);

		let contract = address!("0000000000000000000000000000000000000abc");
		let typed_data = create_execute_typed_data(&sample_operation(), contract, &resolver)
			.await
			.unwrap();

		assert_eq!(typed_data.domain.version.as_deref(), Some("2"));
		assert_eq!(typed_data.primary_type, "Execute");
	}
}
