//! Composable field validation for Rust
//!
//! This crate provides a small, Django-flavored validation engine:
//! - Named, pure [`Checker`]s that turn a candidate value into a
//!   [`CheckOutcome`] rather than raising errors
//! - A [`RuleRegistry`] mapping field names to ordered checker lists,
//!   reusable across many validation calls like a compiled schema
//! - A [`validate`] pass that runs every checker for every registered
//!   field without short-circuiting and aggregates all failures
//! - A [`ValidationReport`] with per-field message lists that can be
//!   merged for nested or cross-field validation
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{EmailChecker, RuleRegistry, validate};
//! use serde_json::json;
//! use std::collections::HashMap;
//!
//! let mut registry = RuleRegistry::new();
//! registry.register("email", "shape", EmailChecker::new());
//!
//! let mut data = HashMap::new();
//! data.insert("email".to_string(), json!("user@example.com"));
//!
//! let report = validate(&registry, &data);
//! assert!(report.is_valid());
//! ```

pub mod checkers;
pub mod error;
pub mod extract;
pub mod outcome;
pub mod registry;
pub mod report;
pub mod validator;

pub use checkers::{
	DigitChecker, EmailChecker, Isbn13Checker, LowercaseChecker, MinLengthChecker, PhoneChecker,
	RegexChecker, SpecialCharChecker, UppercaseChecker, register_strength_rules,
};
pub use error::CheckerError;
pub use extract::{extract_emails, extract_hashtags, extract_phone_numbers, extract_urls};
pub use outcome::{CheckOutcome, Reason};
pub use registry::{FieldRules, RuleRegistry};
pub use report::ValidationReport;
pub use validator::validate;

/// Re-export commonly used types
pub mod prelude {
	pub use crate::checkers::{
		DigitChecker, EmailChecker, Isbn13Checker, LowercaseChecker, MinLengthChecker,
		PhoneChecker, RegexChecker, SpecialCharChecker, UppercaseChecker, register_strength_rules,
	};
	pub use crate::error::CheckerError;
	pub use crate::outcome::{CheckOutcome, Reason};
	pub use crate::registry::{FieldRules, RuleRegistry};
	pub use crate::report::ValidationReport;
	pub use crate::validator::validate;
	pub use crate::{Checker, extract};
}

/// A named, pure validation rule.
///
/// A checker inspects one candidate value and returns a [`CheckOutcome`].
/// Checkers are stateless and deterministic: calling [`Checker::check`]
/// twice with the same input must yield the same outcome. Failures are
/// represented as values; a checker never panics on bad data.
///
/// Plain functions and closures with the right signature are checkers too,
/// so one-off rules do not need a dedicated type:
///
/// ```
/// use fieldcheck::{CheckOutcome, Checker, Reason};
/// use serde_json::{Value, json};
///
/// let no_spaces = |value: &Value| match value.as_str() {
///     Some(s) if !s.contains(' ') => CheckOutcome::pass(),
///     Some(_) => CheckOutcome::fail(Reason::Format, "Value must not contain spaces"),
///     None => CheckOutcome::fail(Reason::TypeError, "Expected a string"),
/// };
/// assert!(no_spaces.check(&json!("compact")).passed());
/// assert!(!no_spaces.check(&json!("two words")).passed());
/// ```
pub trait Checker: Send + Sync {
	fn check(&self, value: &serde_json::Value) -> CheckOutcome;
}

impl<F> Checker for F
where
	F: Fn(&serde_json::Value) -> CheckOutcome + Send + Sync,
{
	fn check(&self, value: &serde_json::Value) -> CheckOutcome {
		self(value)
	}
}
