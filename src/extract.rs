//! Regex-driven extraction from free text
//!
//! Companions to the checkers: instead of validating one candidate value,
//! these scan arbitrary text and pull out every substring matching a known
//! shape. All matches are returned in document order.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_SCAN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}")
		.expect("EMAIL_SCAN: invalid regex pattern")
});

// North-American style numbers: 123-456-7890, (987) 654-3210, 555.123.4567
static PHONE_SCAN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
		.expect("PHONE_SCAN: invalid regex pattern")
});

static URL_SCAN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"https?://[\w.-]+(?:/[\w.-]*)*").expect("URL_SCAN: invalid regex pattern")
});

static HASHTAG_SCAN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"#\w+").expect("HASHTAG_SCAN: invalid regex pattern"));

fn scan(pattern: &Regex, text: &str) -> Vec<String> {
	pattern
		.find_iter(text)
		.map(|m| m.as_str().to_string())
		.collect()
}

/// Extracts every email-shaped substring from `text`, case-insensitively.
///
/// # Examples
///
/// ```
/// use fieldcheck::extract_emails;
///
/// let found = extract_emails("Contact alice@example.com or Bob@Test.ORG");
/// assert_eq!(found, vec!["alice@example.com", "Bob@Test.ORG"]);
/// ```
pub fn extract_emails(text: &str) -> Vec<String> {
	scan(&EMAIL_SCAN, text)
}

/// Extracts North-American style phone numbers (`123-456-7890`,
/// `(987) 654-3210`, `555.123.4567`) from `text`.
pub fn extract_phone_numbers(text: &str) -> Vec<String> {
	scan(&PHONE_SCAN, text)
}

/// Extracts `http`/`https` URLs from `text`.
///
/// # Examples
///
/// ```
/// use fieldcheck::extract_urls;
///
/// let found = extract_urls("Visit https://example.com or http://test.org for more");
/// assert_eq!(found, vec!["https://example.com", "http://test.org"]);
/// ```
pub fn extract_urls(text: &str) -> Vec<String> {
	scan(&URL_SCAN, text)
}

/// Extracts `#hashtags` from `text`.
pub fn extract_hashtags(text: &str) -> Vec<String> {
	scan(&HASHTAG_SCAN, text)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_extract_emails_mixed_case() {
		let found = extract_emails("send to User.Name+tag@Example.co.uk and admin@test.io!");
		assert_eq!(found, vec!["User.Name+tag@Example.co.uk", "admin@test.io"]);
	}

	#[test]
	fn test_extract_emails_none() {
		assert!(extract_emails("no addresses here").is_empty());
	}

	#[test]
	fn test_extract_phone_numbers_all_separators() {
		let text = "Contact: 123-456-7890, (987) 654-3210, or 555.123.4567";
		assert_eq!(
			extract_phone_numbers(text),
			vec!["123-456-7890", "(987) 654-3210", "555.123.4567"]
		);
	}

	#[test]
	fn test_extract_urls() {
		let text = "Visit https://example.com or http://test.org/path/page for more info";
		assert_eq!(
			extract_urls(text),
			vec!["https://example.com", "http://test.org/path/page"]
		);
	}

	#[test]
	fn test_extract_hashtags() {
		let text = "Love #Rust and #Regex! #Programming is fun";
		assert_eq!(extract_hashtags(text), vec!["#Rust", "#Regex", "#Programming"]);
	}

	#[test]
	fn test_matches_come_back_in_document_order() {
		let text = "b@x.co then a@y.co";
		assert_eq!(extract_emails(text), vec!["b@x.co", "a@y.co"]);
	}
}
