//! Construction-time errors
//!
//! Checkers never fail at validation time; the only fallible operation in
//! this crate is building a checker from user-supplied configuration.

#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
	/// The supplied regular expression did not compile
	#[error("invalid regex pattern: {0}")]
	InvalidPattern(#[from] regex::Error),
}
