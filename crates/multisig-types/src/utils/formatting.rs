//! Hex string prefix management and display helpers.

/// Truncates an identifier for log output, keeping the first 8 characters.
pub fn truncate_id(id: &str) -> String {
	if id.len() <= 8 {
		id.to_string()
	} else {
		format!("{}..", &id[..8])
	}
}

/// Ensures a hex string carries the canonical "0x" prefix.
pub fn with_0x_prefix(hex_str: &str) -> String {
	if hex_str.starts_with("0x") || hex_str.starts_with("0X") {
		hex_str.to_string()
	} else {
		format!("0x{}", hex_str)
	}
}

/// Strips a leading "0x"/"0X" prefix if present.
pub fn without_0x_prefix(hex_str: &str) -> &str {
	hex_str
		.strip_prefix("0x")
		.or_else(|| hex_str.strip_prefix("0X"))
		.unwrap_or(hex_str)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_with_0x_prefix() {
		assert_eq!(with_0x_prefix("abcd"), "0xabcd");
		assert_eq!(with_0x_prefix("0xabcd"), "0xabcd");
		assert_eq!(with_0x_prefix("0Xabcd"), "0Xabcd");
	}

	#[test]
	fn test_without_0x_prefix() {
		assert_eq!(without_0x_prefix("0xabcd"), "abcd");
		assert_eq!(without_0x_prefix("0Xabcd"), "abcd");
		assert_eq!(without_0x_prefix("abcd"), "abcd");
	}

	#[test]
	fn test_truncate_id() {
		assert_eq!(truncate_id("short"), "short");
		assert_eq!(truncate_id("0123456789abcdef"), "01234567..");
	}
}
