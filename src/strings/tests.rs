#![cfg(test)]

use std::borrow::Cow;

use super::*;
use crate::assert_panic_message;
use crate::testing::{cases, check_all};

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("falcon"), "Falcon", "A lowercase first letter should be uppercased.");
    assert_eq!(
        capitalize("falcon nest"),
        "Falcon nest",
        "Only the first character should change."
    );
    assert_eq!(capitalize("Falcon"), "Falcon", "An already-capitalized string should be unchanged.");
    assert_eq!(capitalize("7 wonders"), "7 wonders", "A digit-initial string should be unchanged.");
    assert_eq!(capitalize(""), "", "The empty string should be unchanged.");
    assert_eq!(capitalize("émile"), "Émile", "Accented letters should uppercase correctly.");
    assert_eq!(capitalize("ß-test"), "SS-test", "Multi-character uppercase forms should expand.");
}

#[test]
fn test_capitalize_borrows_on_the_identity_path() {
    assert!(
        matches!(capitalize("42nd street"), Cow::Borrowed(_)),
        "A non-letter-initial string should be returned without allocating."
    );
    assert!(
        matches!(capitalize("Falcon"), Cow::Borrowed(_)),
        "An already-uppercase string should be returned without allocating."
    );
}

#[test]
fn test_capitalize_properties_over_random_input() {
    check_all(cases::strings(200, 12), |s| {
        let result = capitalize(s);
        match s.chars().next() {
            // Identity case: not a letter (or empty) means the string comes back untouched.
            Some(first) if !first.is_alphabetic() => result == *s,
            None => result.is_empty(),
            // Letter case: the tail beyond the first character is untouched.
            Some(first) => {
                result.ends_with(&s[first.len_utf8()..])
                    && result.chars().next().is_some_and(|c| !c.is_lowercase())
            }
        }
    });
}

#[test]
fn test_limit_characters_returns_short_input_unchanged() {
    assert_eq!(limit_characters("short", 10), "short");
    assert_eq!(limit_characters("exact", 5), "exact", "A string of exactly max should be unchanged.");
    assert!(
        matches!(limit_characters("short", 10), Cow::Borrowed(_)),
        "A string within the limit should be returned without allocating."
    );
}

#[test]
fn test_limit_characters_truncates_to_exactly_max() {
    let limited = limit_characters("a very long label", 10);
    assert_eq!(limited, "a very ...", "Truncation should keep max minus marker characters.");
    assert_eq!(limited.chars().count(), 10, "The result should be exactly max characters.");
    assert!(limited.ends_with(TRUNCATION_MARKER), "The result should end in the marker.");

    assert_eq!(
        limit_characters("öööööööö", 6),
        "ööö...",
        "Limits should count characters, not bytes."
    );
    assert_eq!(
        limit_characters("abcdef", 3),
        TRUNCATION_MARKER,
        "A max of exactly the marker length should leave only the marker."
    );
}

#[test]
fn test_limit_characters_rejects_max_below_the_marker() {
    assert_panic_message!(
        {
            limit_characters("abcdef", 2);
        },
        "precondition violated"
    );
}

#[test]
fn test_count_token() {
    assert_eq!(
        count_token("aabbababaabb", "ab"),
        4,
        "Occurrences should be counted non-overlapping, left to right."
    );
    assert_eq!(count_token("aaaa", "aa"), 2, "Overlapping occurrences should not be counted.");
    assert_eq!(count_token("", "ab"), 0, "An empty haystack should contain no tokens.");
    assert_eq!(count_token("abc", "xyz"), 0, "An absent token should count zero.");
}

#[test]
fn test_count_token_rejects_an_empty_token() {
    assert_panic_message!(
        {
            count_token("anything", "");
        },
        "precondition violated: token must not be empty"
    );
}
