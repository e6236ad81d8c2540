//! Concrete checkers
//!
//! Each submodule provides one atomic, named rule. All concrete checkers
//! expect string values; anything else fails with [`Reason::TypeError`]
//! rather than panicking, and a missing value (JSON null) fails with
//! [`Reason::Format`].

pub mod email;
pub mod isbn;
pub mod password;
pub mod pattern;
pub mod phone;

pub use email::EmailChecker;
pub use isbn::Isbn13Checker;
pub use password::{
	DigitChecker, LowercaseChecker, MinLengthChecker, SpecialCharChecker, UppercaseChecker,
	register_strength_rules,
};
pub use pattern::RegexChecker;
pub use phone::PhoneChecker;

use crate::outcome::{CheckOutcome, Reason};
use serde_json::Value;

/// Coerces a candidate value to a string slice, or produces the failing
/// outcome the caller should return as-is.
///
/// Null is the "missing field" sentinel and counts as bad user data;
/// any other non-string type counts as caller misuse.
pub(crate) fn string_value(value: &Value) -> Result<&str, CheckOutcome> {
	match value {
		Value::String(s) => Ok(s),
		Value::Null => Err(CheckOutcome::fail(Reason::Format, "No value was supplied")),
		other => Err(CheckOutcome::fail(
			Reason::TypeError,
			format!("Expected a string, got {}", type_name(other)),
		)),
	}
}

fn type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_string_value_accepts_strings() {
		assert_eq!(string_value(&json!("hello")).unwrap(), "hello");
	}

	#[test]
	fn test_null_is_a_format_failure() {
		let outcome = string_value(&Value::Null).unwrap_err();
		assert_eq!(outcome.reason(), Some(Reason::Format));
	}

	#[test]
	fn test_non_string_is_a_type_error() {
		for value in [json!(42), json!(true), json!([1, 2]), json!({"k": "v"})] {
			let outcome = string_value(&value).unwrap_err();
			assert_eq!(outcome.reason(), Some(Reason::TypeError));
		}
	}

	#[test]
	fn test_type_error_message_names_the_actual_type() {
		let outcome = string_value(&json!(42)).unwrap_err();
		assert_eq!(outcome.message(), Some("Expected a string, got a number"));
	}
}
