//! A writer that enforces a byte limit.

use std::io::{self, Write};

use super::error::CapacityExceededError;

/// Wraps a [`Write`] implementation and refuses to let more than `limit` bytes through.
///
/// A write that would push the total past the limit fails with an [`io::Error`] wrapping
/// [`CapacityExceededError`] before a single byte of it reaches the inner writer; there is
/// no partial commit of an over-limit write. Writes that fit pass straight through.
///
/// # Examples
/// ```
/// use std::io::Write;
/// use support_lib::io::BoundedWriter;
///
/// let mut writer = BoundedWriter::new(Vec::new(), 4);
/// writer.write_all(b"abcd").expect("within the limit");
/// assert!(writer.write_all(b"e").is_err());
/// assert_eq!(writer.into_inner(), b"abcd");
/// ```
#[derive(Debug)]
pub struct BoundedWriter<W: Write> {
    inner: W,
    limit: u64,
    written: u64,
}

impl<W: Write> BoundedWriter<W> {
    /// Wraps `inner`, allowing at most `limit` bytes to be written through.
    pub fn new(inner: W, limit: u64) -> BoundedWriter<W> {
        BoundedWriter { inner, limit, written: 0 }
    }

    /// The configured byte limit.
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Bytes written through so far.
    pub const fn written(&self) -> u64 {
        self.written
    }

    /// Bytes still available under the limit.
    pub const fn remaining(&self) -> u64 {
        self.limit - self.written
    }

    /// Unwraps the inner writer, discarding the limit.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for BoundedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let requested = buf.len() as u64;
        if self.written.saturating_add(requested) > self.limit {
            return Err(io::Error::other(CapacityExceededError {
                limit: self.limit,
                written: self.written,
                requested,
            }));
        }
        let count = self.inner.write(buf)?;
        self.written += count as u64;
        Ok(count)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
