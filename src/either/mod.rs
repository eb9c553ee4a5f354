//! A disjoint-union value type: exactly one of two possibilities, each with its own payload
//! type. See [`Either`] for the full story.
#![warn(missing_docs)]

pub mod either;


#[doc(inline)]
pub use either::Either;
