//! Randomized-input helpers for property-style tests.
//!
//! Nothing here shrinks counterexamples or replays seeds; these are deliberately small
//! helpers for checking a local fact over a few hundred generated inputs. The input set
//! always includes the edge cases a random draw might miss.

use std::fmt::Debug;

use rand::Rng;

// Deliberately awkward: multi-byte letters, a letter with a multi-character uppercase
// form, digits, whitespace and punctuation.
const ALPHABET: &[char] = &[
    'a', 'b', 'z', 'A', 'Z', 'ß', 'é', '中', '0', '9', ' ', '\t', '-', '_', '@', '.', '!',
];

/// Asserts a property over every case, reporting the first failing input.
///
/// # Panics
/// Panics (fails the test) on the first input the property rejects.
///
/// # Examples
/// ```
/// use support_lib::testing::{cases, check_all};
/// check_all(cases::strings(100, 8), |s| s.chars().count() <= 8);
/// ```
pub fn check_all<T: Debug>(cases: impl IntoIterator<Item = T>, property: impl Fn(&T) -> bool) {
    for case in cases {
        assert!(property(&case), "property failed for input: {case:?}");
    }
}

/// Generates `count` random strings of up to `max_len` characters, drawn from an alphabet
/// that mixes ASCII letters, multi-byte letters, digits, whitespace and punctuation. The
/// empty string is always included (as the first case) when `count` is nonzero.
pub fn strings(count: usize, max_len: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|i| {
            let len = if i == 0 { 0 } else { rng.random_range(0..=max_len) };
            (0..len)
                .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
                .collect()
        })
        .collect()
}
