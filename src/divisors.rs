//! Divisor enumeration.
//!
//! [`find_divisors`] scans every candidate up to half of the operand and keeps
//! the ones that divide it evenly. The list always opens with `1`; the operand
//! itself is appended last, and only when the scan found something beyond `1`.
//! Primes therefore come back as `[1]`.

/// Return the divisors of `operand` in scan order.
///
/// ```
/// use methematics::find_divisors;
///
/// assert_eq!(find_divisors(12), vec![1, 2, 3, 4, 6, 12]);
/// assert_eq!(find_divisors(13), vec![1]);
/// ```
#[must_use]
pub fn find_divisors(operand: u64) -> Vec<u64> {
	let mut divisors = vec![1];
	for candidate in 2..=operand / 2 {
		if operand % candidate == 0 {
			divisors.push(candidate);
		}
	}

	if divisors.len() > 1 {
		divisors.push(operand);
	}

	divisors
}
