//! Batch execution support for the multisig queue.
//!
//! Two concerns live here: selecting which ready operations may go into one
//! `execute` batch ([`select_executable`]), and encoding the exact calldata
//! the multisig contract expects for execution and deposit claims. Encoding
//! is bit-exact by construction: the ABI definitions in `multisig-types`
//! are the single schema both the contract and this crate see.

use thiserror::Error;

mod builders;
mod selector;

pub use builders::{build_claim_calldata, build_execute_transaction};
pub use selector::select_executable;

/// Errors that can occur while building execution calldata.
#[derive(Debug, Error)]
pub enum ExecutionError {
	/// No operations were provided for the batch.
	#[error("No executable operations were provided")]
	EmptyBatch,
	/// An operation carries data that cannot be encoded (bad call target,
	/// malformed signature, ill-formed execution id). The whole batch fails;
	/// partial inclusion never occurs.
	#[error("Operation {id}: {reason}")]
	InvalidOperation {
		/// Server-side id of the offending operation.
		id: String,
		/// What made it unencodable.
		reason: String,
	},
	/// A deposit/invoice identifier is not a 32-byte hex value.
	#[error("Invalid claim identifier '{id}': {reason}")]
	InvalidClaimId {
		/// The identifier as supplied.
		id: String,
		/// What made it unusable.
		reason: String,
	},
}
