//! Selection of the executable prefix of the queue.

use multisig_types::QueueOperation;

/// Computes the maximal batch eligible for execution.
///
/// `operations` must be sorted ascending by nonce, as returned by the queue.
/// Scanning keeps a running expected-nonce counter seeded with
/// `next_executable_nonce` and stops at the first operation whose nonce
/// breaks contiguity or whose signature threshold is not met. Operations past
/// a violation are never skipped over: a gap or an under-signed item
/// truncates the batch at that point.
///
/// Returns the (possibly empty) prefix of `operations`.
pub fn select_executable(
	next_executable_nonce: u64,
	operations: &[QueueOperation],
) -> &[QueueOperation] {
	let mut expected = next_executable_nonce;
	let mut len = 0;

	for operation in operations {
		let nonce = match operation.nonce.parse::<u64>() {
			Ok(nonce) => nonce,
			Err(_) => break,
		};
		if nonce != expected || !operation.is_fully_signed() {
			break;
		}
		len += 1;
		expected = match expected.checked_add(1) {
			Some(next) => next,
			None => break,
		};
	}

	&operations[..len]
}

#[cfg(test)]
mod tests {
	use super::*;
	use multisig_types::{QueueOperationStatus, QueueOperationType};

	fn operation(nonce: u64, collected: u32, required: u32) -> QueueOperation {
		QueueOperation {
			id: format!("op-{}", nonce),
			nonce: nonce.to_string(),
			operation_type: QueueOperationType::Payout,
			status: QueueOperationStatus::Ready,
			calls: vec![multisig_types::Call {
				to: "0x5fbdb2315678afecb367f032d93f642f64180aa3".to_string(),
				value: None,
				data: None,
			}],
			signatures: Vec::new(),
			signatures_required: required,
			signatures_collected: collected,
			execute_operation_id: format!("0x{}", "11".repeat(32)),
		}
	}

	#[test]
	fn test_contiguous_fully_signed_prefix_is_selected() {
		let operations = vec![
			operation(10, 3, 3),
			operation(11, 3, 3),
			operation(12, 3, 3),
		];
		let selected = select_executable(10, &operations);
		assert_eq!(selected.len(), 3);
		assert_eq!(selected[0].nonce, "10");
		assert_eq!(selected[2].nonce, "12");
	}

	#[test]
	fn test_under_signed_head_yields_empty_batch() {
		let operations = vec![operation(10, 2, 3), operation(11, 3, 3)];
		assert!(select_executable(10, &operations).is_empty());
	}

	#[test]
	fn test_nonce_gap_truncates_batch() {
		let operations = vec![operation(10, 3, 3), operation(12, 3, 3)];
		let selected = select_executable(10, &operations);
		assert_eq!(selected.len(), 1);
		assert_eq!(selected[0].nonce, "10");
	}

	#[test]
	fn test_under_signed_middle_truncates_without_skipping() {
		let operations = vec![
			operation(5, 2, 2),
			operation(6, 1, 2),
			operation(7, 2, 2),
		];
		let selected = select_executable(5, &operations);
		assert_eq!(selected.len(), 1);
	}

	#[test]
	fn test_head_not_at_expected_nonce_yields_empty_batch() {
		let operations = vec![operation(11, 3, 3)];
		assert!(select_executable(10, &operations).is_empty());
	}

	#[test]
	fn test_empty_queue_yields_empty_batch() {
		assert!(select_executable(0, &[]).is_empty());
	}

	#[test]
	fn test_non_numeric_nonce_truncates_batch() {
		let mut bad = operation(11, 3, 3);
		bad.nonce = "eleven".to_string();
		let operations = vec![operation(10, 3, 3), bad];
		assert_eq!(select_executable(10, &operations).len(), 1);
	}
}
