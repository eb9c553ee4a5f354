//! Test-support code: a timed lock for serializing access to a shared external resource
//! across tests, panic-assertion macros, and randomized-input helpers for property-style
//! tests.
//!
//! Everything here is meant to be used from `#[cfg(test)]` code, but ships as a regular
//! (feature-gated) module so downstream crates can use it in their own tests.
#![warn(missing_docs)]

pub mod cases;
pub mod lock;
pub mod panic;


#[doc(inline)]
pub use cases::check_all;
#[doc(inline)]
pub use lock::{LockTimeoutError, SharedResourceGuard, SharedResourceLock};
