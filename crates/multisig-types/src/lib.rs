//! Common types module for the multisig treasury kit.
//!
//! This module defines the core data types and structures shared by the
//! signing, execution, validation and client crates. It provides a
//! centralized location for shared types to ensure consistency across all
//! components.

/// API-boundary types: currencies, chain identifiers, session state.
pub mod api;
/// Multisig wallet contract ABI definitions.
pub mod contract;
/// Prepared transaction types handed to an external broadcaster.
pub mod delivery;
/// Deployment queue records: operations, calls, signatures.
pub mod queue;
/// Utility functions for hex handling and address parsing.
pub mod utils;

// Re-export all types for convenient access
pub use api::*;
pub use delivery::*;
pub use queue::*;
pub use utils::{
	parse_bytes32, parse_evm_address, parse_hex_bytes, truncate_id, with_0x_prefix,
	without_0x_prefix, AddressParseError, HexParseError,
};
