//! Parsing helpers for wire-level hex strings.
//!
//! The upstream API transports addresses, signatures and identifiers as hex
//! strings; these helpers coerce them into `alloy` primitives with explicit
//! errors instead of panicking on malformed input.

use super::formatting::without_0x_prefix;
use alloy_primitives::{Address, B256};
use thiserror::Error;

/// Errors produced when parsing an address string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
	/// Not a 0x-prefixed 20-byte hex string.
	#[error("address must be a 0x-prefixed 20-byte hex string")]
	Malformed,
	/// Mixed-case string whose EIP-55 checksum does not match.
	#[error("address checksum mismatch")]
	ChecksumMismatch,
}

/// Errors produced when parsing generic hex payloads.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexParseError {
	/// The string is not valid hex.
	#[error("invalid hex string: {0}")]
	InvalidHex(#[from] hex::FromHexError),
	/// The decoded payload has the wrong length.
	#[error("expected {expected} bytes, got {actual}")]
	InvalidLength {
		/// Required byte length.
		expected: usize,
		/// Actual decoded length.
		actual: usize,
	},
}

/// Parses an EVM address, enforcing the EIP-55 checksum for mixed-case input.
///
/// Uniformly lower- or upper-cased strings are accepted without a checksum
/// check; any mix of cases must be a valid checksum encoding. This matches
/// how wallet tooling treats user-entered addresses.
pub fn parse_evm_address(value: &str) -> Result<Address, AddressParseError> {
	let digits = value
		.strip_prefix("0x")
		.or_else(|| value.strip_prefix("0X"))
		.ok_or(AddressParseError::Malformed)?;

	if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
		return Err(AddressParseError::Malformed);
	}

	let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
	let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
	if has_upper && has_lower {
		return Address::parse_checksummed(value, None)
			.map_err(|_| AddressParseError::ChecksumMismatch);
	}

	digits
		.parse::<Address>()
		.map_err(|_| AddressParseError::Malformed)
}

/// Decodes a hex string into raw bytes, prefix-insensitively.
///
/// An empty payload ("0x" or "") decodes to an empty vector.
pub fn parse_hex_bytes(value: &str) -> Result<Vec<u8>, HexParseError> {
	Ok(hex::decode(without_0x_prefix(value))?)
}

/// Normalizes an identifier to a canonical 32-byte value.
///
/// Accepts the identifier with or without a "0x" prefix and requires exactly
/// 32 decoded bytes.
pub fn parse_bytes32(value: &str) -> Result<B256, HexParseError> {
	let raw = parse_hex_bytes(value)?;
	if raw.len() != 32 {
		return Err(HexParseError::InvalidLength {
			expected: 32,
			actual: raw.len(),
		});
	}
	Ok(B256::from_slice(&raw))
}

#[cfg(test)]
mod tests {
	use super::*;

	const CHECKSUMMED: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

	#[test]
	fn test_parse_evm_address_lowercase() {
		let parsed = parse_evm_address(&CHECKSUMMED.to_lowercase()).unwrap();
		assert_eq!(parsed.to_checksum(None), CHECKSUMMED);
	}

	#[test]
	fn test_parse_evm_address_valid_checksum() {
		assert!(parse_evm_address(CHECKSUMMED).is_ok());
	}

	#[test]
	fn test_parse_evm_address_bad_checksum() {
		// Flip the case of one letter so the checksum no longer matches.
		let bad = CHECKSUMMED.replace("5FbDB", "5FbdB");
		assert_eq!(
			parse_evm_address(&bad),
			Err(AddressParseError::ChecksumMismatch)
		);
	}

	#[test]
	fn test_parse_evm_address_malformed() {
		assert_eq!(parse_evm_address(""), Err(AddressParseError::Malformed));
		assert_eq!(
			parse_evm_address("5fbdb2315678afecb367f032d93f642f64180aa3"),
			Err(AddressParseError::Malformed)
		);
		assert_eq!(parse_evm_address("0x1234"), Err(AddressParseError::Malformed));
	}

	#[test]
	fn test_parse_bytes32_normalizes_prefix() {
		let bare = "01".repeat(32);
		let prefixed = format!("0x{}", bare);
		assert_eq!(
			parse_bytes32(&bare).unwrap(),
			parse_bytes32(&prefixed).unwrap()
		);
	}

	#[test]
	fn test_parse_bytes32_rejects_wrong_length() {
		assert_eq!(
			parse_bytes32("0x0101"),
			Err(HexParseError::InvalidLength {
				expected: 32,
				actual: 2
			})
		);
	}

	#[test]
	fn test_parse_hex_bytes_empty_payload() {
		assert_eq!(parse_hex_bytes("0x").unwrap(), Vec::<u8>::new());
	}
}
