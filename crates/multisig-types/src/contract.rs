//! Multisig wallet contract ABI.
//!
//! Single source of truth for the on-chain interface. The `Call` and
//! `Execute` structs double as the EIP-712 typed-data schema, so field order
//! here is what both the ABI encoder and the typed-data hasher see, and must
//! match the deployed contract exactly.

use alloy_sol_types::sol;

sol! {
	/// One sub-call executed by the multisig wallet.
	#[derive(serde::Serialize)]
	struct Call {
		address to;
		uint256 value;
		bytes data;
	}

	/// EIP-712 primary type signed by multisig owners: the ordered calls of
	/// one operation plus its execution nonce.
	#[derive(serde::Serialize)]
	struct Execute {
		Call[] calls;
		uint256 nonce;
	}

	/// Operation entry of an `execute` batch: ordered calls, the packed
	/// concatenation of 65-byte owner signatures, and the server-assigned
	/// execution id.
	struct Operation {
		Call[] calls;
		bytes signatures;
		bytes32 id;
	}

	interface IMultiSigWallet {
		/// Executes a contiguous batch of fully-signed operations.
		function execute(Operation[] calldata operations) external;

		/// Claims settled deposits for an ERC-20 (or the native asset when
		/// `erc20` is the zero address) into the wallet.
		function claim(address erc20, bytes32[] calldata ids) external;

		/// Claims settled deposits to an explicit recipient.
		function claimTo(address erc20, address to, bytes32[] calldata ids) external;

		/// EIP-5267 domain accessor. The leading `fields` bitmask flags which
		/// members are populated; this subsystem reads name, version, chainId
		/// and verifyingContract and ignores the rest.
		function eip712Domain()
			external
			view
			returns (
				bytes1 fields,
				string memory name,
				string memory version,
				uint256 chainId,
				address verifyingContract,
				uint256 salt,
				bytes32[] memory extensions
			);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_sol_types::SolStruct;

	#[test]
	fn test_execute_typed_data_schema_is_fixed() {
		assert_eq!(
			Execute::eip712_encode_type(),
			"Execute(Call[] calls,uint256 nonce)Call(address to,uint256 value,bytes data)"
		);
		assert_eq!(Call::eip712_root_type(), "Call(address to,uint256 value,bytes data)");
	}
}
