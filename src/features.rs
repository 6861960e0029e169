//! Lexical feature extraction for URL strings.
//!
//! The extractor works on the raw user input: it does not parse or normalise
//! the URL first, so the statistics line up with the ones the classifier was
//! trained on.
//!
//! # Example
//!
//! ```
//! use phishguard::features::extract;
//!
//! let fv = extract("http://secure-login-bank.com");
//! assert_eq!(fv.suspicious_count, 3);
//! assert!(!fv.has_https);
//! ```

use crate::model::FeatureVector;
use regex::Regex;
use std::sync::LazyLock;

/// Keywords counted in the URL itself.
pub const URL_KEYWORDS: [&str; 7] = [
    "login", "verify", "bank", "free", "update", "secure", "account",
];

static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").unwrap());

static IP_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").unwrap());

/// Computes the feature vector for `url`. Total over any input.
pub fn extract(url: &str) -> FeatureVector {
    let lower = url.to_lowercase();

    let fv = FeatureVector {
        url_length: url.chars().count(),
        has_https: url.starts_with("https"),
        num_special: url.chars().filter(|c| !c.is_ascii_alphanumeric()).count(),
        num_digits: DIGIT.find_iter(url).count(),
        has_ip: IP_PREFIX.is_match(url),
        suspicious_count: count_keywords(&lower, &URL_KEYWORDS),
    };

    tracing::debug!(url, ?fv, "extracted features");
    fv
}

/// Number of distinct `keywords` that occur anywhere in `haystack`.
///
/// `haystack` is expected to be lowercased already.
pub fn count_keywords(haystack: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| haystack.contains(*kw)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let fv = extract("");
        assert_eq!(fv.url_length, 0);
        assert!(!fv.has_https);
        assert_eq!(fv.num_special, 0);
        assert_eq!(fv.num_digits, 0);
        assert!(!fv.has_ip);
        assert_eq!(fv.suspicious_count, 0);
    }

    #[test]
    fn test_has_https_is_case_sensitive_prefix() {
        assert!(extract("https://example.com").has_https);
        assert!(extract("httpsfoo").has_https);
        assert!(!extract("HTTPS://example.com").has_https);
        assert!(!extract("http://example.com").has_https);
        assert!(!extract(" https://example.com").has_https);
    }

    #[test]
    fn test_has_ip() {
        assert!(extract("192.168.1.1").has_ip);
        assert!(extract("10.0.0.254/login").has_ip);
        assert!(!extract("192.168.1").has_ip);
        assert!(!extract("example.com").has_ip);
        assert!(!extract("http://192.168.1.1").has_ip);
    }

    #[test]
    fn test_suspicious_count() {
        assert_eq!(extract("http://secure-login-bank.com").suspicious_count, 3);
        assert_eq!(extract("HTTP://SECURE-LOGIN.COM").suspicious_count, 2);
        assert_eq!(extract("https://example.com").suspicious_count, 0);
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        assert_eq!(extract("login-login-login.com").suspicious_count, 1);
    }

    #[test]
    fn test_counts() {
        let fv = extract("http://a1b2.com/x?y=3");
        assert_eq!(fv.url_length, 21);
        assert_eq!(fv.num_digits, 3);
        // ':', '/', '/', '.', '/', '?', '='
        assert_eq!(fv.num_special, 7);
    }

    #[test]
    fn test_non_ascii_counts_chars() {
        let fv = extract("https://bänk.de");
        assert_eq!(fv.url_length, 15);
        // ':', '/', '/', 'ä', '.'
        assert_eq!(fv.num_special, 5);
        assert_eq!(fv.suspicious_count, 0);
    }

    #[test]
    fn test_unicode_digits_agree_with_ip_pattern() {
        // Arabic-Indic digits are decimal digits for both fields.
        let fv = extract("١٩٢.١٦٨.١.١");
        assert!(fv.has_ip);
        assert_eq!(fv.num_digits, 8);
        assert_eq!(fv.url_length, 11);
        assert_eq!(fv.num_special, 11);
    }

    #[test]
    fn test_count_keywords() {
        assert_eq!(count_keywords("verify your account", &URL_KEYWORDS), 2);
        assert_eq!(count_keywords("", &URL_KEYWORDS), 0);
    }
}
