//! The validation pass

use crate::registry::RuleRegistry;
use crate::report::ValidationReport;
use serde_json::Value;
use std::collections::HashMap;

/// Runs every registered checker against `data` and aggregates the failures
/// into one [`ValidationReport`].
///
/// For every field in the registry, every checker runs in registration
/// order against the field's value; there is no short-circuiting, so a
/// single weak value reports all of its problems at once. A field missing
/// from `data` is checked as JSON null (each checker decides what missing
/// means; the built-in checkers all reject it). Fields present in `data`
/// but never registered are ignored.
///
/// # Panics
///
/// Panics when `registry` has no registered fields; validating against an
/// empty registry is a setup bug, not bad input data.
///
/// # Examples
///
/// ```
/// use fieldcheck::{EmailChecker, RuleRegistry, validate};
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let mut registry = RuleRegistry::new();
/// registry.register("email", "shape", EmailChecker::new());
///
/// let mut data = HashMap::new();
/// data.insert("email".to_string(), json!("not-an-email"));
/// data.insert("unrelated".to_string(), json!("ignored"));
///
/// let report = validate(&registry, &data);
/// assert!(!report.is_valid());
/// assert_eq!(report.field_errors("email").len(), 1);
/// assert!(report.field_errors("unrelated").is_empty());
/// ```
pub fn validate(registry: &RuleRegistry, data: &HashMap<String, Value>) -> ValidationReport {
	assert!(
		!registry.is_empty(),
		"validate() called on a registry with no registered checkers"
	);

	let mut report = ValidationReport::new();
	let mut checks = 0usize;
	let mut failures = 0usize;

	for field in registry.fields_defined() {
		let Some(rules) = registry.rules(field) else {
			continue;
		};
		let value = data.get(field).unwrap_or(&Value::Null);

		for (checker_name, checker) in rules.entries() {
			checks += 1;
			let outcome = checker.check(value);
			if !outcome.passed() {
				failures += 1;
				let message = match outcome.message() {
					Some(msg) => msg.to_string(),
					None => format!("Validation failed: {checker_name}"),
				};
				report.add_error(field, message);
			}
		}
	}

	tracing::debug!(
		fields = registry.fields_defined().len(),
		checks,
		failures,
		valid = report.is_valid(),
		"validation pass complete"
	);
	report
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::checkers::{
		EmailChecker, Isbn13Checker, MinLengthChecker, PhoneChecker, register_strength_rules,
	};
	use serde_json::json;

	fn data(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.clone()))
			.collect()
	}

	#[test]
	fn test_all_fields_pass() {
		let mut registry = RuleRegistry::new();
		registry.register("email", "shape", EmailChecker::new());
		registry.register("isbn", "isbn13", Isbn13Checker::new());

		let report = validate(
			&registry,
			&data(&[
				("email", json!("user@example.com")),
				("isbn", json!("9780306406157")),
			]),
		);
		assert!(report.is_valid());
		assert!(report.errors().is_empty());
	}

	#[test]
	fn test_failures_are_collected_per_field() {
		let mut registry = RuleRegistry::new();
		registry.register("email", "shape", EmailChecker::new());
		registry.register("phone", "shape", PhoneChecker::new());

		let report = validate(
			&registry,
			&data(&[("email", json!("bad")), ("phone", json!("123"))]),
		);
		assert!(!report.is_valid());
		assert_eq!(report.field_errors("email").len(), 1);
		assert_eq!(report.field_errors("phone").len(), 1);
	}

	#[test]
	fn test_no_short_circuit_within_a_field() {
		let mut registry = RuleRegistry::new();
		register_strength_rules(&mut registry, "password");

		// Fails length, uppercase, digit, and special; lowercase passes
		let report = validate(&registry, &data(&[("password", json!("abc"))]));
		assert_eq!(report.field_errors("password").len(), 4);
	}

	#[test]
	fn test_messages_follow_registration_order() {
		let mut registry = RuleRegistry::new();
		register_strength_rules(&mut registry, "password");

		let report = validate(&registry, &data(&[("password", json!(""))]));
		let messages = report.field_errors("password");
		assert_eq!(messages.len(), 5);
		assert!(messages[0].contains("at least 8 characters"));
		assert!(messages[1].contains("uppercase"));
		assert!(messages[2].contains("lowercase"));
		assert!(messages[3].contains("digit"));
		assert!(messages[4].contains("special"));
	}

	#[test]
	fn test_unregistered_fields_are_ignored() {
		let mut registry = RuleRegistry::new();
		registry.register("email", "shape", EmailChecker::new());

		let report = validate(
			&registry,
			&data(&[("email", json!("bad")), ("unrelated", json!("anything"))]),
		);
		assert_eq!(report.errors().keys().collect::<Vec<_>>(), vec!["email"]);
	}

	#[test]
	fn test_missing_field_is_checked_as_null() {
		let mut registry = RuleRegistry::new();
		registry.register("email", "shape", EmailChecker::new());

		let report = validate(&registry, &HashMap::new());
		assert_eq!(report.field_errors("email"), ["No value was supplied"]);
	}

	#[test]
	fn test_repeated_validation_is_deterministic() {
		let mut registry = RuleRegistry::new();
		register_strength_rules(&mut registry, "password");
		let candidate = data(&[("password", json!("abc"))]);

		let first = validate(&registry, &candidate);
		let second = validate(&registry, &candidate);
		assert_eq!(first, second);
	}

	#[test]
	#[should_panic(expected = "no registered checkers")]
	fn test_empty_registry_panics() {
		let registry = RuleRegistry::new();
		validate(&registry, &HashMap::new());
	}

	#[test]
	fn test_registry_validate_method_matches_free_function() {
		let mut registry = RuleRegistry::new();
		registry.register("password", "min_length", MinLengthChecker::new(4));
		let candidate = data(&[("password", json!("ok"))]);

		assert_eq!(registry.validate(&candidate), validate(&registry, &candidate));
	}
}
