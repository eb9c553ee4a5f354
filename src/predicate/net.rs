//! Syntactic validity checks for URIs, email addresses and hostnames.
//!
//! These are syntax checks only: nothing here resolves names, sends mail or follows
//! links. A value passing a check is well-formed, not necessarily reachable.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

// Pragmatic, not RFC 5322: one @, no whitespace, a dotted domain. Good enough to catch
// transposed fields and mangled input, which is all a syntax check can promise anyway.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

// One RFC-1123 label: alphanumeric with interior hyphens.
static HOSTNAME_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?$").expect("label pattern should compile")
});

const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Returns true if the string parses as an absolute URI (a scheme followed by a
/// scheme-specific part).
///
/// # Examples
/// ```
/// use support_lib::predicate::is_valid_uri;
/// assert!(is_valid_uri("https://example.org/a?b=1"));
/// assert!(is_valid_uri("mailto:dev@example.org"));
/// assert!(!is_valid_uri("example.org/no-scheme"));
/// ```
pub fn is_valid_uri(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// Returns true if the string is a syntactically plausible email address: exactly one
/// `@`, no whitespace, and a dotted domain part.
///
/// # Examples
/// ```
/// use support_lib::predicate::is_valid_email;
/// assert!(is_valid_email("dev@example.org"));
/// assert!(!is_valid_email("dev@localhost"));
/// assert!(!is_valid_email("devexample.org"));
/// ```
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Returns true if the string is a valid RFC-1123 hostname: at most 253 characters in
/// total, dot-separated labels of 1 to 63 characters, each alphanumeric with interior
/// hyphens only.
///
/// # Examples
/// ```
/// use support_lib::predicate::is_valid_hostname;
/// assert!(is_valid_hostname("db-1.internal.example.org"));
/// assert!(!is_valid_hostname("-leading.example.org"));
/// assert!(!is_valid_hostname("spaced name"));
/// ```
pub fn is_valid_hostname(value: &str) -> bool {
    if value.is_empty() || value.len() > MAX_HOSTNAME_LEN {
        return false;
    }
    value
        .split('.')
        .all(|label| label.len() <= MAX_LABEL_LEN && HOSTNAME_LABEL.is_match(label))
}
