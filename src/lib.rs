//! A collection of small utility libraries extending the standard library's base types,
//! I/O and contract-checking facilities.
//!
//! # Purpose
//! These are the helpers I keep rewriting in every project: precondition and postcondition
//! checks with templated panic messages, an [`Either`](either::Either) disjoint-union type
//! with functional combinators, syntactic validity predicates (URI, email, hostname), thin
//! adapters giving incompatible resource-closing APIs a uniform closeable interface, and a
//! handful of test-support pieces (a timed shared-resource lock, panic-assertion macros,
//! randomized-input helpers). Collecting them here means writing and testing each exactly
//! once.
//!
//! None of this is a framework. Every module is usable in isolation and none depends on
//! orchestration by another for correctness.
//!
//! # Error Handling
//! The crate distinguishes programming errors from expected failures. Contract violations
//! (a caller breaking a precondition, an implementation breaking a postcondition, reaching
//! a condition declared impossible) panic immediately with a category-prefixed message:
//! they are bugs, and callers are not expected to catch and continue. Expected failures are
//! values: strongly-typed error structs implementing [`Error`](std::error::Error) via derive
//! macros, returned through [`Result`]. [`Either`](either::Either) sits between the two as
//! an explicit opt-in for representing recoverable failure as a value.
//!
//! # Dependencies
//! Derive macros cover the repetitive `Display`/`Error`/`From` implementations. The
//! [`predicate`] module pulls in `url` and `regex` for the syntactic validity checks, and
//! the [`testing`] module uses `parking_lot` for its timed reentrant lock (std's mutex has
//! no bounded-wait acquire) and `rand` for input generation. Everything else is `std`.
//!
//! Each module sits behind a feature flag of the same name; all are enabled by default.

#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "contract")]
pub mod contract;
#[cfg(feature = "either")]
pub mod either;
#[cfg(feature = "error")]
pub mod error;
#[cfg(feature = "io")]
pub mod io;
#[cfg(feature = "predicate")]
pub mod predicate;
#[cfg(feature = "strings")]
pub mod strings;
#[cfg(feature = "testing")]
pub mod testing;
