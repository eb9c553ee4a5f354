//! Wrapper error types for carrying one error through an interface that wants another.
#![warn(missing_docs)]

pub mod wrapped;


#[doc(inline)]
pub use wrapped::WrappedError;
