//! Password strength rule set
//!
//! Five independent checkers, one per strength requirement. Each can be
//! registered on its own, or all five together via
//! [`register_strength_rules`]. The validator never short-circuits, so a
//! weak password reports every missing requirement at once.

use crate::outcome::{CheckOutcome, Reason};
use crate::registry::RuleRegistry;
use crate::{Checker, checkers::string_value};
use serde_json::Value;

/// Default minimum password length used by [`MinLengthChecker::default`].
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Special characters accepted by [`SpecialCharChecker`].
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Requires a minimum number of characters.
///
/// Lengths are counted in `char`s, not bytes.
///
/// # Examples
///
/// ```
/// use fieldcheck::{Checker, MinLengthChecker};
/// use serde_json::json;
///
/// let checker = MinLengthChecker::new(8);
/// assert!(checker.check(&json!("LongEnough1!")).passed());
/// assert!(!checker.check(&json!("short")).passed());
/// ```
#[derive(Debug, Clone)]
pub struct MinLengthChecker {
	min: usize,
}

impl MinLengthChecker {
	pub fn new(min: usize) -> Self {
		Self { min }
	}
}

impl Default for MinLengthChecker {
	fn default() -> Self {
		Self::new(DEFAULT_MIN_LENGTH)
	}
}

impl Checker for MinLengthChecker {
	fn check(&self, value: &Value) -> CheckOutcome {
		let raw = match string_value(value) {
			Ok(s) => s,
			Err(outcome) => return outcome,
		};

		if raw.chars().count() >= self.min {
			CheckOutcome::pass()
		} else {
			CheckOutcome::fail(
				Reason::TooShort,
				format!("Password must be at least {} characters long", self.min),
			)
		}
	}
}

/// Requires at least one ASCII uppercase letter.
#[derive(Debug, Clone, Default)]
pub struct UppercaseChecker;

impl UppercaseChecker {
	pub fn new() -> Self {
		Self
	}
}

impl Checker for UppercaseChecker {
	fn check(&self, value: &Value) -> CheckOutcome {
		let raw = match string_value(value) {
			Ok(s) => s,
			Err(outcome) => return outcome,
		};

		if raw.chars().any(|c| c.is_ascii_uppercase()) {
			CheckOutcome::pass()
		} else {
			CheckOutcome::fail(
				Reason::MissingUppercase,
				"Password must contain at least one uppercase letter",
			)
		}
	}
}

/// Requires at least one ASCII lowercase letter.
#[derive(Debug, Clone, Default)]
pub struct LowercaseChecker;

impl LowercaseChecker {
	pub fn new() -> Self {
		Self
	}
}

impl Checker for LowercaseChecker {
	fn check(&self, value: &Value) -> CheckOutcome {
		let raw = match string_value(value) {
			Ok(s) => s,
			Err(outcome) => return outcome,
		};

		if raw.chars().any(|c| c.is_ascii_lowercase()) {
			CheckOutcome::pass()
		} else {
			CheckOutcome::fail(
				Reason::MissingLowercase,
				"Password must contain at least one lowercase letter",
			)
		}
	}
}

/// Requires at least one ASCII digit.
#[derive(Debug, Clone, Default)]
pub struct DigitChecker;

impl DigitChecker {
	pub fn new() -> Self {
		Self
	}
}

impl Checker for DigitChecker {
	fn check(&self, value: &Value) -> CheckOutcome {
		let raw = match string_value(value) {
			Ok(s) => s,
			Err(outcome) => return outcome,
		};

		if raw.chars().any(|c| c.is_ascii_digit()) {
			CheckOutcome::pass()
		} else {
			CheckOutcome::fail(
				Reason::MissingDigit,
				"Password must contain at least one digit",
			)
		}
	}
}

/// Requires at least one character from [`SPECIAL_CHARS`].
#[derive(Debug, Clone, Default)]
pub struct SpecialCharChecker;

impl SpecialCharChecker {
	pub fn new() -> Self {
		Self
	}
}

impl Checker for SpecialCharChecker {
	fn check(&self, value: &Value) -> CheckOutcome {
		let raw = match string_value(value) {
			Ok(s) => s,
			Err(outcome) => return outcome,
		};

		if raw.chars().any(|c| SPECIAL_CHARS.contains(c)) {
			CheckOutcome::pass()
		} else {
			CheckOutcome::fail(
				Reason::MissingSpecial,
				"Password must contain at least one special character",
			)
		}
	}
}

/// Registers all five strength rules on `field`, in a fixed order:
/// `min_length`, `uppercase`, `lowercase`, `digit`, `special`.
///
/// Uses the default minimum length; re-register `min_length` afterwards to
/// change the threshold (last registration wins, order preserved).
///
/// # Examples
///
/// ```
/// use fieldcheck::{RuleRegistry, register_strength_rules, validate};
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let mut registry = RuleRegistry::new();
/// register_strength_rules(&mut registry, "password");
///
/// let mut data = HashMap::new();
/// data.insert("password".to_string(), json!("Str0ng!pass"));
/// assert!(validate(&registry, &data).is_valid());
/// ```
pub fn register_strength_rules(registry: &mut RuleRegistry, field: &str) {
	registry.register(field, "min_length", MinLengthChecker::default());
	registry.register(field, "uppercase", UppercaseChecker::new());
	registry.register(field, "lowercase", LowercaseChecker::new());
	registry.register(field, "digit", DigitChecker::new());
	registry.register(field, "special", SpecialCharChecker::new());
}
