//! Phone number shape checker

use crate::outcome::{CheckOutcome, Reason};
use crate::{Checker, checkers::string_value};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// Optional leading +, optional country code 1, then 9-15 digits.
static PHONE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\+?1?\d{9,15}$").expect("PHONE_REGEX: invalid regex pattern"));

/// Validates that a value looks like a phone number.
///
/// Accepts an optional leading `+`, an optional leading country code `1`,
/// then 9 to 15 digits. Shape only; no carrier or region lookup.
///
/// # Examples
///
/// ```
/// use fieldcheck::{Checker, PhoneChecker};
/// use serde_json::json;
///
/// let checker = PhoneChecker::new();
/// assert!(checker.check(&json!("+11234567890")).passed());
/// assert!(checker.check(&json!("123456789")).passed());
/// assert!(!checker.check(&json!("123")).passed());
/// ```
#[derive(Debug, Clone)]
pub struct PhoneChecker {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl PhoneChecker {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}
}

impl Default for PhoneChecker {
	fn default() -> Self {
		Self::new()
	}
}

impl Checker for PhoneChecker {
	fn check(&self, value: &Value) -> CheckOutcome {
		let raw = match string_value(value) {
			Ok(s) => s,
			Err(outcome) => return outcome,
		};

		if PHONE_REGEX.is_match(raw) {
			CheckOutcome::pass()
		} else {
			let msg = self.message.as_deref().unwrap_or(
				"Phone number must be 9-15 digits and may start with + or a country code",
			);
			CheckOutcome::fail(Reason::Format, msg)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("+11234567890")]
	#[case("11234567890")]
	#[case("123456789")] // 9 digits, the minimum
	#[case("+1123456789012345")] // +1 then 15 digits, the maximum
	#[case("999999999999999")]
	fn test_valid_phone_shapes(#[case] phone: &str) {
		// Arrange
		let checker = PhoneChecker::new();

		// Act
		let outcome = checker.check(&json!(phone));

		// Assert
		assert!(outcome.passed(), "Expected '{phone}' to be a valid phone");
	}

	#[rstest]
	#[case("")]
	#[case("123")]
	#[case("12345678")] // 8 digits, below minimum
	#[case("12345678901234567")] // 17 digits, above maximum
	#[case("+12 345 678 901")] // internal whitespace
	#[case("123-456-7890")] // separators not allowed by this shape
	#[case("phone")]
	fn test_invalid_phone_shapes(#[case] phone: &str) {
		// Arrange
		let checker = PhoneChecker::new();

		// Act
		let outcome = checker.check(&json!(phone));

		// Assert
		assert_eq!(
			outcome.reason(),
			Some(Reason::Format),
			"Expected '{phone}' to be rejected with a format error"
		);
	}

	#[test]
	fn test_custom_message() {
		let checker = PhoneChecker::new().with_message("Bad phone");
		assert_eq!(checker.check(&json!("x")).message(), Some("Bad phone"));
	}

	#[test]
	fn test_non_string_is_type_error() {
		let checker = PhoneChecker::new();
		assert_eq!(
			checker.check(&json!(1234567890)).reason(),
			Some(Reason::TypeError)
		);
	}
}
