//! Precondition, postcondition and impossibility checking with templated panic messages.
//!
//! # Purpose
//! Three failure categories are distinguished by convention, each with its own message
//! prefix: a caller violating a precondition ([`require!`](crate::require)), an
//! implementation violating a postcondition ([`ensure!`](crate::ensure)), and reaching a
//! condition declared impossible ([`impossible!`](crate::impossible)). All three are
//! programming errors: they panic immediately rather than returning a value, and callers
//! are not expected to catch and continue.
//!
//! The [`check`] functions are the expression-level counterparts: they validate a value
//! against a predicate and return the value on success, so a check can sit inline in a
//! constructor or builder chain. A family of specialized checks composes the generic one
//! with a fixed predicate and message.
#![warn(missing_docs)]

pub mod check;

mod tests;

#[doc(inline)]
pub use check::{ensure_that, require_instance_of, require_that};
#[cfg(feature = "predicate")]
#[doc(inline)]
pub use check::{
    require_email, require_hostname, require_match, require_not_blank, require_not_empty,
    require_uri,
};
