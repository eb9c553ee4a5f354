//! A uniform closeable capability for resources whose close-like operation has an
//! incompatible name.

use super::error::CloseError;

/// The uniform closeable capability. One `close` signature, whatever the underlying
/// resource calls the operation.
pub trait Close {
    /// Closes the resource. Closing an already-closed resource is a no-op.
    fn close(&mut self) -> Result<(), CloseError>;
}

/// Adapts a resource whose close-like operation hides behind an incompatible name (a
/// `free`, a `shutdown`, a `release`) to [`Close`], enabling its uniform use in scoped
/// acquisition. The caller supplies the close operation as a function of the resource.
///
/// Closing is idempotent: the close function runs at most once, and [`close`](Close::close)
/// after the resource is gone returns `Ok(())`. Dropping an unclosed adapter still runs
/// the close function but discards its error; call `close` explicitly where the error
/// matters.
///
/// # Examples
/// ```
/// use support_lib::io::{Close, CloseError, Closer};
///
/// struct Handle;
/// impl Handle {
///     fn free(self) -> Result<(), std::io::Error> { Ok(()) }
/// }
///
/// let mut guarded = Closer::new(Handle, |h: Handle| h.free().map_err(CloseError::new));
/// guarded.close().expect("freeing should succeed");
/// guarded.close().expect("closing again should be a no-op");
/// ```
pub struct Closer<T, F: FnOnce(T) -> Result<(), CloseError>> {
    resource: Option<(T, F)>,
}

impl<T, F: FnOnce(T) -> Result<(), CloseError>> Closer<T, F> {
    /// Wraps a resource together with its close operation.
    pub fn new(resource: T, close_fn: F) -> Closer<T, F> {
        Closer { resource: Some((resource, close_fn)) }
    }

    /// Returns true once the close function has run (or the resource was never present).
    pub fn is_closed(&self) -> bool {
        self.resource.is_none()
    }

    /// Borrows the wrapped resource.
    ///
    /// # Panics
    /// Panics if the resource has already been closed; using a closed resource is a
    /// programming error.
    pub fn get(&self) -> &T {
        match &self.resource {
            Some((resource, _)) => resource,
            None => panic!("resource accessed after close"),
        }
    }

    /// Mutably borrows the wrapped resource.
    ///
    /// # Panics
    /// Panics if the resource has already been closed.
    pub fn get_mut(&mut self) -> &mut T {
        match &mut self.resource {
            Some((resource, _)) => resource,
            None => panic!("resource accessed after close"),
        }
    }
}

impl<T, F: FnOnce(T) -> Result<(), CloseError>> Close for Closer<T, F> {
    fn close(&mut self) -> Result<(), CloseError> {
        match self.resource.take() {
            Some((resource, close_fn)) => close_fn(resource),
            None => Ok(()),
        }
    }
}

impl<T, F: FnOnce(T) -> Result<(), CloseError>> Drop for Closer<T, F> {
    fn drop(&mut self) {
        // Drop cannot report the error; explicit close() is the error-reporting path.
        let _ = self.close();
    }
}
