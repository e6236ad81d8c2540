//! Per-checker verdicts
//!
//! A checker invocation produces exactly one [`CheckOutcome`]: either a pass,
//! or a failure carrying a stable [`Reason`] code and a human-readable
//! message. Validation failures are plain values; nothing is thrown across
//! the checker boundary.

use serde::Serialize;
use std::fmt;

/// Stable failure codes attached to failing [`CheckOutcome`]s.
///
/// The string form (via [`Reason::code`] or `Display`) is part of the public
/// contract and safe to match on or serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
	/// Input does not match the expected shape or pattern
	Format,
	/// Input has the right shape but fails a numeric integrity check
	Checksum,
	/// Input is not the type the checker expects; indicates caller misuse
	TypeError,
	/// Input is shorter than the configured minimum length
	TooShort,
	/// Input lacks an uppercase letter
	MissingUppercase,
	/// Input lacks a lowercase letter
	MissingLowercase,
	/// Input lacks a digit
	MissingDigit,
	/// Input lacks a special character
	MissingSpecial,
}

impl Reason {
	/// Returns the stable string code for this reason.
	///
	/// # Examples
	///
	/// ```
	/// use fieldcheck::Reason;
	///
	/// assert_eq!(Reason::Format.code(), "format");
	/// assert_eq!(Reason::MissingUppercase.code(), "missing_uppercase");
	/// ```
	pub fn code(&self) -> &'static str {
		match self {
			Reason::Format => "format",
			Reason::Checksum => "checksum",
			Reason::TypeError => "type_error",
			Reason::TooShort => "too_short",
			Reason::MissingUppercase => "missing_uppercase",
			Reason::MissingLowercase => "missing_lowercase",
			Reason::MissingDigit => "missing_digit",
			Reason::MissingSpecial => "missing_special",
		}
	}
}

impl fmt::Display for Reason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

/// The result of one checker invocation.
///
/// Immutable once constructed. A passing outcome carries no reason or
/// message; a failing outcome carries both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
	passed: bool,
	reason: Option<Reason>,
	message: Option<String>,
}

impl CheckOutcome {
	/// Creates a passing outcome.
	///
	/// # Examples
	///
	/// ```
	/// use fieldcheck::CheckOutcome;
	///
	/// let outcome = CheckOutcome::pass();
	/// assert!(outcome.passed());
	/// assert!(outcome.reason().is_none());
	/// ```
	pub fn pass() -> Self {
		Self {
			passed: true,
			reason: None,
			message: None,
		}
	}

	/// Creates a failing outcome with a reason code and message.
	///
	/// # Examples
	///
	/// ```
	/// use fieldcheck::{CheckOutcome, Reason};
	///
	/// let outcome = CheckOutcome::fail(Reason::Format, "Enter a valid email address");
	/// assert!(!outcome.passed());
	/// assert_eq!(outcome.reason(), Some(Reason::Format));
	/// assert_eq!(outcome.message(), Some("Enter a valid email address"));
	/// ```
	pub fn fail(reason: Reason, message: impl Into<String>) -> Self {
		Self {
			passed: false,
			reason: Some(reason),
			message: Some(message.into()),
		}
	}

	pub fn passed(&self) -> bool {
		self.passed
	}

	pub fn reason(&self) -> Option<Reason> {
		self.reason
	}

	pub fn message(&self) -> Option<&str> {
		self.message.as_deref()
	}
}
