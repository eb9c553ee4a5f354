//! I/O helpers: a uniform closeable capability for resources whose close-like operation
//! hides behind an incompatible name, and a byte-limited writer.
#![warn(missing_docs)]

pub mod bounded;
pub mod close;
pub mod error;

mod tests;

#[doc(inline)]
pub use bounded::BoundedWriter;
#[doc(inline)]
pub use close::{Close, Closer};
#[doc(inline)]
pub use error::{CapacityExceededError, CloseError};
