//! An error wrapper for interfaces that require a single, unconstrained error type.

use std::any::type_name;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Carries an arbitrary error through an interface that cannot speak its concrete type,
/// for example a closure seam constrained to one error type. The original cause is
/// retained and is recoverable.
///
/// Recovery comes in two strengths: [`cause`](WrappedError::cause) hands back the dynamic
/// error for display and logging, while [`unwrap_as`](WrappedError::unwrap_as) recovers
/// the concrete type at a site that knows what was wrapped, failing loudly if that
/// knowledge turns out to be wrong.
///
/// # Examples
/// ```
/// use std::num::ParseIntError;
/// use support_lib::error::WrappedError;
///
/// let cause = "x".parse::<u16>().unwrap_err();
/// let wrapped = WrappedError::new(cause.clone());
/// assert_eq!(wrapped.unwrap_as::<ParseIntError>(), &cause);
/// ```
#[derive(Debug)]
pub struct WrappedError {
    cause: Box<dyn Error + Send + Sync>,
}

impl WrappedError {
    /// Wraps the given error.
    pub fn new(cause: impl Into<Box<dyn Error + Send + Sync>>) -> WrappedError {
        WrappedError { cause: cause.into() }
    }

    /// The wrapped error, dynamically typed.
    pub fn cause(&self) -> &(dyn Error + Send + Sync) {
        self.cause.as_ref()
    }

    /// Recovers the wrapped error as its concrete type.
    ///
    /// # Panics
    /// Panics if the wrapped error is not an `E`. A mismatch means the wrap site and the
    /// unwrap site disagree about what was wrapped, which is a bug, not a runtime
    /// condition to handle.
    pub fn unwrap_as<E: Error + 'static>(&self) -> &E {
        match self.cause.downcast_ref::<E>() {
            Some(concrete) => concrete,
            None => panic!(
                "reached a condition declared impossible: wrapped cause is not a {}",
                type_name::<E>()
            ),
        }
    }

    /// Unwraps into the boxed cause.
    pub fn into_cause(self) -> Box<dyn Error + Send + Sync> {
        self.cause
    }
}

impl Display for WrappedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}

impl Error for WrappedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_ref() as &(dyn Error + 'static))
    }
}
