//! Error types for the I/O helpers.

use std::error::Error;

use derive_more::{Display, Error, From};

/// A resource's underlying close operation failed. All close failures collapse into this
/// one category; the original error is retained as the source.
#[derive(Debug, Display, Error, From)]
#[display("error closing resource")]
pub struct CloseError {
    source: Box<dyn Error + Send + Sync>,
}

impl CloseError {
    /// Wraps the underlying close failure.
    pub fn new(source: impl Into<Box<dyn Error + Send + Sync>>) -> CloseError {
        CloseError { source: source.into() }
    }

    /// The underlying close failure.
    pub fn cause(&self) -> &(dyn Error + Send + Sync) {
        self.source.as_ref()
    }
}

/// A write would push a [`BoundedWriter`](crate::io::BoundedWriter) past its byte limit.
/// Nothing from the rejected write was committed.
#[derive(Debug, Display, Error)]
#[display("write of {requested} bytes would exceed limit of {limit} bytes ({written} already written)")]
pub struct CapacityExceededError {
    /// The writer's configured byte limit.
    pub limit: u64,
    /// Bytes already committed before the rejected write.
    pub written: u64,
    /// Size of the rejected write.
    pub requested: u64,
}
