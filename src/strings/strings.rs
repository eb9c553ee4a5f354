//! The string helper functions.

use std::borrow::Cow;

use crate::require;

/// The suffix appended by [`limit_characters`] when it truncates.
pub const TRUNCATION_MARKER: &str = "...";

/// Uppercases exactly the first character of the string, leaving the rest untouched.
/// Returns the input unchanged (and borrowed) when it is empty, when its first character
/// is not a letter, or when the first character is already uppercase.
///
/// Characters whose uppercase form spans several characters (`ß` becomes `SS`) expand
/// accordingly; "exactly the first character" refers to the input side.
///
/// # Examples
/// ```
/// use support_lib::strings::capitalize;
/// assert_eq!(capitalize("falcon nest"), "Falcon nest");
/// assert_eq!(capitalize("7 wonders"), "7 wonders");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(value: &str) -> Cow<'_, str> {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() && !first.is_uppercase() => {
            let mut capitalized = String::with_capacity(value.len());
            capitalized.extend(first.to_uppercase());
            capitalized.push_str(chars.as_str());
            Cow::Owned(capitalized)
        }
        _ => Cow::Borrowed(value),
    }
}

/// Truncates the string to exactly `max` characters, ending in [`TRUNCATION_MARKER`].
/// A string of `max` characters or fewer is returned unchanged (and borrowed).
///
/// Lengths are counted in characters, not bytes, so multi-byte input truncates cleanly.
///
/// # Panics
/// Panics with a precondition violation if truncation is needed but `max` is smaller than
/// the marker itself.
///
/// # Examples
/// ```
/// use support_lib::strings::limit_characters;
/// assert_eq!(limit_characters("a very long label", 10), "a very ...");
/// assert_eq!(limit_characters("short", 10), "short");
/// ```
pub fn limit_characters(value: &str, max: usize) -> Cow<'_, str> {
    let count = value.chars().count();
    if count <= max {
        return Cow::Borrowed(value);
    }
    let marker_len = TRUNCATION_MARKER.len();
    require!(
        max >= marker_len,
        "max ({max}) must be at least the truncation marker length ({marker_len})"
    );

    let mut limited: String = value.chars().take(max - marker_len).collect();
    limited.push_str(TRUNCATION_MARKER);
    Cow::Owned(limited)
}

/// Counts non-overlapping occurrences of `token`, scanning left to right.
///
/// # Panics
/// Panics with a precondition violation if `token` is empty.
///
/// # Examples
/// ```
/// use support_lib::strings::count_token;
/// assert_eq!(count_token("aabbababaabb", "ab"), 4);
/// assert_eq!(count_token("aaaa", "aa"), 2);
/// ```
pub fn count_token(value: &str, token: &str) -> usize {
    require!(!token.is_empty(), "token must not be empty");
    value.matches(token).count()
}
