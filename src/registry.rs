//! Rule registry
//!
//! A [`RuleRegistry`] owns the mapping of field name to ordered, named
//! checkers. It is built once, then treated as read-only across any number
//! of validation calls; the `&self`/`&mut self` split means the borrow
//! checker enforces that discipline at compile time.

use crate::Checker;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// The ordered, named checkers registered for one field.
pub struct FieldRules {
	name: String,
	checkers: Vec<(String, Box<dyn Checker>)>,
}

impl FieldRules {
	fn new(name: String) -> Self {
		Self {
			name,
			checkers: Vec::new(),
		}
	}

	/// The field this rule list belongs to.
	pub fn field_name(&self) -> &str {
		&self.name
	}

	/// Registered checker names, in execution order.
	pub fn checker_names(&self) -> Vec<&str> {
		self.checkers.iter().map(|(n, _)| n.as_str()).collect()
	}

	pub fn len(&self) -> usize {
		self.checkers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.checkers.is_empty()
	}

	pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &dyn Checker)> {
		self.checkers
			.iter()
			.map(|(n, c)| (n.as_str(), c.as_ref()))
	}

	fn upsert(&mut self, checker_name: String, checker: Box<dyn Checker>) {
		match self.checkers.iter_mut().find(|(n, _)| *n == checker_name) {
			// Last registration wins; the original position is kept so
			// message ordering stays stable.
			Some(slot) => slot.1 = checker,
			None => self.checkers.push((checker_name, checker)),
		}
	}

	fn remove(&mut self, checker_name: &str) {
		self.checkers.retain(|(n, _)| n != checker_name);
	}
}

impl std::fmt::Debug for FieldRules {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FieldRules")
			.field("name", &self.name)
			.field("checkers", &self.checker_names())
			.finish()
	}
}

/// Owns all field rules; the reusable "compiled schema" handed to
/// [`validate`](crate::validate).
///
/// Registration is purely structural; no checker runs until validation.
/// Duplicate registration of a checker name on the same field replaces the
/// existing checker (last registration wins). Fields are kept in sorted
/// order so validation and reporting are deterministic.
///
/// # Examples
///
/// ```
/// use fieldcheck::{EmailChecker, PhoneChecker, RuleRegistry};
///
/// let mut registry = RuleRegistry::new();
/// registry.register("email", "shape", EmailChecker::new());
/// registry.register("phone", "shape", PhoneChecker::new());
///
/// assert_eq!(registry.fields_defined(), vec!["email", "phone"]);
/// ```
#[derive(Debug, Default)]
pub struct RuleRegistry {
	fields: BTreeMap<String, FieldRules>,
}

impl RuleRegistry {
	pub fn new() -> Self {
		Self {
			fields: BTreeMap::new(),
		}
	}

	/// Adds `checker` under `checker_name` to the named field's rule list.
	///
	/// If `checker_name` is already registered for that field, the new
	/// checker replaces it in place.
	///
	/// # Examples
	///
	/// ```
	/// use fieldcheck::{MinLengthChecker, RuleRegistry};
	///
	/// let mut registry = RuleRegistry::new();
	/// registry.register("password", "min_length", MinLengthChecker::new(8));
	/// // Re-registering tightens the threshold without duplicating the rule
	/// registry.register("password", "min_length", MinLengthChecker::new(12));
	/// assert_eq!(registry.checker_names("password"), vec!["min_length"]);
	/// ```
	pub fn register(
		&mut self,
		field: impl Into<String>,
		checker_name: impl Into<String>,
		checker: impl Checker + 'static,
	) {
		let field = field.into();
		let rules = match self.fields.entry(field) {
			Entry::Occupied(e) => e.into_mut(),
			Entry::Vacant(e) => {
				let name = e.key().clone();
				e.insert(FieldRules::new(name))
			}
		};
		rules.upsert(checker_name.into(), Box::new(checker));
	}

	/// Removes a checker by name. A no-op when the field or checker is
	/// absent. Removing the last checker of a field removes the field.
	pub fn unregister(&mut self, field: &str, checker_name: &str) {
		if let Some(rules) = self.fields.get_mut(field) {
			rules.remove(checker_name);
			if rules.is_empty() {
				self.fields.remove(field);
			}
		}
	}

	/// The set of field names with at least one registered checker, sorted.
	pub fn fields_defined(&self) -> Vec<&str> {
		self.fields.keys().map(String::as_str).collect()
	}

	/// The rules registered for `field`, if any.
	pub fn rules(&self, field: &str) -> Option<&FieldRules> {
		self.fields.get(field)
	}

	/// Registered checker names for `field`, in execution order.
	pub fn checker_names(&self, field: &str) -> Vec<&str> {
		self.rules(field)
			.map(FieldRules::checker_names)
			.unwrap_or_default()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Runs every registered checker against `data`. Convenience wrapper
	/// around [`validate`](crate::validate).
	pub fn validate(
		&self,
		data: &std::collections::HashMap<String, serde_json::Value>,
	) -> crate::ValidationReport {
		crate::validator::validate(self, data)
	}
}
