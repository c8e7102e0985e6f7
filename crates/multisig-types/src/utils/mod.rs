//! Utility functions for hex handling and address parsing.

pub mod conversion;
pub mod formatting;

pub use conversion::{
	parse_bytes32, parse_evm_address, parse_hex_bytes, AddressParseError, HexParseError,
};
pub use formatting::{truncate_id, with_0x_prefix, without_0x_prefix};
