//! Generic regex checker for user-defined patterns

use crate::error::CheckerError;
use crate::outcome::{CheckOutcome, Reason};
use crate::{Checker, checkers::string_value};
use regex::Regex;
use serde_json::Value;

/// Validates a value against a caller-supplied regular expression.
///
/// Covers one-off shapes that do not warrant a dedicated checker, the way
/// ad hoc `RegexValidator` rules are attached to individual fields.
///
/// # Examples
///
/// ```
/// use fieldcheck::{Checker, RegexChecker};
/// use serde_json::json;
///
/// let checker = RegexChecker::new(r"^\d{5}$").unwrap();
/// assert!(checker.check(&json!("12345")).passed());
/// assert!(!checker.check(&json!("1234a")).passed());
/// ```
#[derive(Debug, Clone)]
pub struct RegexChecker {
	pattern: Regex,
	message: Option<String>,
}

impl RegexChecker {
	/// Compiles `pattern` into a checker.
	///
	/// # Errors
	///
	/// Returns [`CheckerError::InvalidPattern`] when the pattern does not
	/// compile.
	pub fn new(pattern: &str) -> Result<Self, CheckerError> {
		Ok(Self {
			pattern: Regex::new(pattern)?,
			message: None,
		})
	}

	/// Sets a custom error message returned on validation failure.
	///
	/// # Examples
	///
	/// ```
	/// use fieldcheck::{Checker, RegexChecker};
	/// use serde_json::json;
	///
	/// let checker = RegexChecker::new(r"^\d+$")
	///     .unwrap()
	///     .with_message("Value must contain only digits");
	/// let outcome = checker.check(&json!("abc"));
	/// assert_eq!(outcome.message(), Some("Value must contain only digits"));
	/// ```
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}
}

impl Checker for RegexChecker {
	fn check(&self, value: &Value) -> CheckOutcome {
		let raw = match string_value(value) {
			Ok(s) => s,
			Err(outcome) => return outcome,
		};

		if self.pattern.is_match(raw) {
			CheckOutcome::pass()
		} else {
			let msg = self.message.clone().unwrap_or_else(|| {
				format!("Value must match pattern: {}", self.pattern.as_str())
			});
			CheckOutcome::fail(Reason::Format, msg)
		}
	}
}
