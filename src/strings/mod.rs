//! Small string helpers: first-character capitalization, character-count truncation with
//! a marker, and non-overlapping token counting.
#![warn(missing_docs)]

pub mod strings;

mod tests;

#[doc(inline)]
pub use strings::{TRUNCATION_MARKER, capitalize, count_token, limit_characters};
