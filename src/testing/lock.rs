//! Serialized access to a shared external resource across test cases.

use std::time::Duration;

use derive_more::{Display, Error};
use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

/// The lock was not acquired within the bounded wait. Failing the test setup loudly beats
/// a test run hanging forever on a resource some other test never released.
#[derive(Debug, Display, Error)]
#[display("shared resource lock not acquired within {waited:?}")]
pub struct LockTimeoutError {
    /// How long the acquisition waited before giving up.
    pub waited: Duration,
}

/// A reentrant lock serializing access to one shared external resource (a test database,
/// a port, a directory on disk) across test cases.
///
/// Declare one `static` lock per shared resource and acquire it at the top of each test
/// touching that resource. Acquisition waits at most the given timeout and then fails
/// loudly instead of blocking indefinitely. The returned guard releases the lock when
/// dropped, on every exit path, including a panicking test body; nothing stays locked
/// behind a failed test.
///
/// The lock is reentrant, so a test helper that acquires it while its caller already
/// holds it does not deadlock the thread against itself.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use support_lib::testing::SharedResourceLock;
///
/// static TEST_DATABASE: SharedResourceLock = SharedResourceLock::new();
///
/// let _guard = TEST_DATABASE
///     .acquire(Duration::from_secs(5))
///     .expect("test database should not stay locked this long");
/// // ... exclusive use of the shared database ...
/// ```
#[derive(Debug, Default)]
pub struct SharedResourceLock {
    inner: ReentrantMutex<()>,
}

impl SharedResourceLock {
    /// Creates an unlocked lock. `const`, so it can back a `static`.
    pub const fn new() -> SharedResourceLock {
        SharedResourceLock { inner: ReentrantMutex::new(()) }
    }

    /// Acquires the lock, waiting at most `timeout`.
    ///
    /// Returns a guard that releases the lock on drop, or [`LockTimeoutError`] if another
    /// thread held the lock for the whole wait.
    pub fn acquire(&self, timeout: Duration) -> Result<SharedResourceGuard<'_>, LockTimeoutError> {
        match self.inner.try_lock_for(timeout) {
            Some(guard) => Ok(SharedResourceGuard { _guard: guard }),
            None => Err(LockTimeoutError { waited: timeout }),
        }
    }
}

/// Holds the lock; dropping it releases the lock.
#[must_use = "dropping the guard releases the lock immediately"]
#[derive(Debug)]
pub struct SharedResourceGuard<'a> {
    _guard: ReentrantMutexGuard<'a, ()>,
}
