//! ISBN-13 checksum checker

use crate::outcome::{CheckOutcome, Reason};
use crate::{Checker, checkers::string_value};
use serde_json::Value;

/// Validates ISBN-13 identifiers: shape first, then the weighted checksum.
///
/// Hyphens and whitespace are stripped before checking, so both
/// `"9780306406157"` and `"978-0-306-40615-7"` are accepted. After
/// stripping, the value must be exactly 13 ASCII digits
/// ([`Reason::Format`] otherwise), and the 13th digit must equal the
/// check digit computed from the first twelve ([`Reason::Checksum`]
/// otherwise).
///
/// # Examples
///
/// ```
/// use fieldcheck::{Checker, Isbn13Checker, Reason};
/// use serde_json::json;
///
/// let checker = Isbn13Checker::new();
/// assert!(checker.check(&json!("9780306406157")).passed());
/// assert!(checker.check(&json!("978-0-306-40615-7")).passed());
///
/// let bad = checker.check(&json!("9780306406158"));
/// assert_eq!(bad.reason(), Some(Reason::Checksum));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Isbn13Checker;

impl Isbn13Checker {
	pub fn new() -> Self {
		Self
	}
}

impl Checker for Isbn13Checker {
	fn check(&self, value: &Value) -> CheckOutcome {
		let raw = match string_value(value) {
			Ok(s) => s,
			Err(outcome) => return outcome,
		};

		let cleaned: String = raw
			.chars()
			.filter(|c| *c != '-' && !c.is_ascii_whitespace())
			.collect();

		if cleaned.len() != 13 || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
			return CheckOutcome::fail(Reason::Format, "ISBN must be exactly 13 digits");
		}

		let digits: Vec<u32> = cleaned.bytes().map(|b| u32::from(b - b'0')).collect();

		// Weighted sum over the first 12 digits: weight 1 at even
		// indices, 3 at odd indices.
		let sum: u32 = digits[..12]
			.iter()
			.enumerate()
			.map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
			.sum();
		let check_digit = (10 - sum % 10) % 10;

		if check_digit == digits[12] {
			CheckOutcome::pass()
		} else {
			CheckOutcome::fail(Reason::Checksum, "Invalid ISBN checksum")
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("9780306406157")]
	#[case("978-0-306-40615-7")]
	#[case("978 0 306 40615 7")]
	#[case("9781861972712")]
	#[case("9780000000002")]
	fn test_valid_isbn13(#[case] isbn: &str) {
		// Arrange
		let checker = Isbn13Checker::new();

		// Act
		let outcome = checker.check(&json!(isbn));

		// Assert
		assert!(outcome.passed(), "Expected '{isbn}' to be a valid ISBN-13");
	}

	#[rstest]
	#[case("9780306406158")]
	#[case("9781861972713")]
	fn test_checksum_mismatch(#[case] isbn: &str) {
		// Arrange
		let checker = Isbn13Checker::new();

		// Act
		let outcome = checker.check(&json!(isbn));

		// Assert
		assert_eq!(outcome.reason(), Some(Reason::Checksum));
		assert_eq!(outcome.message(), Some("Invalid ISBN checksum"));
	}

	#[rstest]
	#[case("")]
	#[case("978030640615")] // 12 digits
	#[case("97803064061570")] // 14 digits
	#[case("97803064O6157")] // letter O, not zero
	#[case("978-0-306-4061")]
	fn test_format_rejection(#[case] isbn: &str) {
		// Arrange
		let checker = Isbn13Checker::new();

		// Act
		let outcome = checker.check(&json!(isbn));

		// Assert
		assert_eq!(outcome.reason(), Some(Reason::Format));
	}

	#[test]
	fn test_non_string_is_type_error() {
		let checker = Isbn13Checker::new();
		let outcome = checker.check(&json!(9780306406157_u64));
		assert_eq!(outcome.reason(), Some(Reason::TypeError));
	}

	#[test]
	fn test_missing_value_is_format_error() {
		let checker = Isbn13Checker::new();
		let outcome = checker.check(&Value::Null);
		assert_eq!(outcome.reason(), Some(Reason::Format));
	}

	#[test]
	fn test_deterministic_across_calls() {
		let checker = Isbn13Checker::new();
		let first = checker.check(&json!("9780306406158"));
		let second = checker.check(&json!("9780306406158"));
		assert_eq!(first, second);
	}
}
