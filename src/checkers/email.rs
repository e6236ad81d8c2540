//! Email shape checker

use crate::outcome::{CheckOutcome, Reason};
use crate::{Checker, checkers::string_value};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// Email shape: local part, @, domain, dot, TLD of two or more letters.
// Shape only; no DNS or mailbox verification.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
		.expect("EMAIL_REGEX: invalid regex pattern")
});

/// Validates that a value looks like an email address.
///
/// # Examples
///
/// ```
/// use fieldcheck::{Checker, EmailChecker};
/// use serde_json::json;
///
/// let checker = EmailChecker::new();
/// assert!(checker.check(&json!("user@example.com")).passed());
/// assert!(checker.check(&json!("a@b.co")).passed());
/// assert!(!checker.check(&json!("plainaddress")).passed());
/// ```
#[derive(Debug, Clone)]
pub struct EmailChecker {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl EmailChecker {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	///
	/// # Examples
	///
	/// ```
	/// use fieldcheck::{Checker, EmailChecker};
	/// use serde_json::json;
	///
	/// let checker = EmailChecker::new().with_message("Please enter a valid email");
	/// let outcome = checker.check(&json!("nope"));
	/// assert_eq!(outcome.message(), Some("Please enter a valid email"));
	/// ```
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}
}

impl Default for EmailChecker {
	fn default() -> Self {
		Self::new()
	}
}

impl Checker for EmailChecker {
	fn check(&self, value: &Value) -> CheckOutcome {
		let raw = match string_value(value) {
			Ok(s) => s,
			Err(outcome) => return outcome,
		};

		if EMAIL_REGEX.is_match(raw) {
			CheckOutcome::pass()
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Enter a valid email address");
			CheckOutcome::fail(Reason::Format, msg)
		}
	}
}
