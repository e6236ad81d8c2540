//! Aggregated validation results

use serde::Serialize;
use std::collections::BTreeMap;

/// The aggregated result of one validation pass.
///
/// Holds an ordered list of failure messages per field. Only fields with at
/// least one failure appear in the map, so the report is valid exactly when
/// the map is empty; there is no separate flag that could drift out of sync.
///
/// # Examples
///
/// ```
/// use fieldcheck::ValidationReport;
///
/// let mut report = ValidationReport::new();
/// assert!(report.is_valid());
///
/// report.add_error("email", "Enter a valid email address");
/// assert!(!report.is_valid());
/// assert_eq!(report.field_errors("email"), ["Enter a valid email address"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
	errors: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
	pub fn new() -> Self {
		Self {
			errors: BTreeMap::new(),
		}
	}

	/// `true` iff every field's error list is empty.
	pub fn is_valid(&self) -> bool {
		self.errors.is_empty()
	}

	/// All failure messages, keyed by field name.
	pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
		&self.errors
	}

	/// Failure messages for one field, in checker execution order. Empty
	/// when the field passed or was never checked.
	pub fn field_errors(&self, field: &str) -> &[String] {
		self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Appends a failure message for `field`.
	///
	/// This is also the extension point for record-level (cross-field)
	/// rules: evaluate the rule outside the per-field registry, report its
	/// message under a synthetic field name, and [`merge`](Self::merge) the
	/// result with the per-field report.
	pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
		self.errors
			.entry(field.into())
			.or_default()
			.push(message.into());
	}

	/// Combines two reports: error lists are concatenated field by field
	/// (messages from `a` first), over the union of field names. The result
	/// is valid only if both inputs were valid.
	///
	/// # Examples
	///
	/// ```
	/// use fieldcheck::ValidationReport;
	///
	/// let mut a = ValidationReport::new();
	/// a.add_error("email", "Enter a valid email address");
	/// let mut b = ValidationReport::new();
	/// b.add_error("email", "Email domain is not allowed");
	/// b.add_error("_record", "Early-bird deadline must precede the event date");
	///
	/// let merged = ValidationReport::merge(a, b);
	/// assert_eq!(merged.field_errors("email").len(), 2);
	/// assert_eq!(merged.field_errors("_record").len(), 1);
	/// assert!(!merged.is_valid());
	/// ```
	pub fn merge(a: ValidationReport, b: ValidationReport) -> ValidationReport {
		let mut merged = a;
		for (field, messages) in b.errors {
			merged.errors.entry(field).or_default().extend(messages);
		}
		merged
	}
}
