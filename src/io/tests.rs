#![cfg(test)]

use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;

use super::*;
use crate::assert_panics;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("device busy")]
struct BusyError;

#[test]
fn test_closer_runs_the_close_fn_once() {
    let closed = Rc::new(Cell::new(0));
    let tracker = Rc::clone(&closed);

    let mut guarded = Closer::new((), move |()| {
        tracker.set(tracker.get() + 1);
        Ok(())
    });
    assert!(!guarded.is_closed(), "A fresh adapter should not report closed.");

    guarded.close().expect("close should succeed");
    assert!(guarded.is_closed(), "The adapter should report closed after close().");
    assert_eq!(closed.get(), 1, "The close function should have run exactly once.");

    guarded.close().expect("closing again should be a no-op");
    drop(guarded);
    assert_eq!(
        closed.get(),
        1,
        "Neither a repeated close() nor the drop should run the close function again."
    );
}

#[test]
fn test_closer_closes_on_drop() {
    let closed = Rc::new(Cell::new(0));
    let tracker = Rc::clone(&closed);

    {
        let _guarded = Closer::new("handle", move |_| {
            tracker.set(tracker.get() + 1);
            Ok(())
        });
    }
    assert_eq!(closed.get(), 1, "Dropping an unclosed adapter should run the close function.");
}

#[test]
fn test_closer_wraps_the_underlying_failure() {
    let mut guarded = Closer::new((), |()| Err(CloseError::new(BusyError)));
    let error = guarded.close().expect_err("close should fail");
    assert_eq!(
        error.cause().to_string(),
        "device busy",
        "The underlying failure should be retained as the cause."
    );
}

#[test]
fn test_closer_access() {
    let mut guarded = Closer::new(vec![1, 2], |_| Ok(()));
    assert_eq!(*guarded.get(), vec![1, 2], "get should borrow the wrapped resource.");

    guarded.get_mut().push(3);
    assert_eq!(guarded.get().len(), 3, "get_mut should allow mutation in place.");

    guarded.close().expect("close should succeed");
    assert_panics!(
        {
            let mut closed = Closer::new(7_u8, |_| Ok(()));
            closed.close().expect("close should succeed");
            *closed.get()
        },
        "Accessing a closed resource should panic."
    );
}

#[test]
fn test_bounded_writer_passes_writes_under_the_limit() {
    let mut writer = BoundedWriter::new(Vec::new(), 10);
    writer.write_all(b"abc").expect("should fit");
    writer.write_all(b"defg").expect("should still fit");

    assert_eq!(writer.written(), 7, "written() should track committed bytes.");
    assert_eq!(writer.remaining(), 3, "remaining() should be limit minus written.");
    assert_eq!(writer.into_inner(), b"abcdefg", "All bytes should reach the inner writer.");
}

#[test]
fn test_bounded_writer_allows_exactly_the_limit() {
    let mut writer = BoundedWriter::new(Vec::new(), 4);
    writer.write_all(b"abcd").expect("a write of exactly the limit should succeed");
    assert_eq!(writer.remaining(), 0, "The limit should be fully consumed.");
}

#[test]
fn test_bounded_writer_rejects_over_limit_writes_without_partial_commit() {
    let mut writer = BoundedWriter::new(Vec::new(), 4);
    writer.write_all(b"abc").expect("should fit");

    let error = writer.write_all(b"de").expect_err("two more bytes should not fit");
    let cause = error
        .get_ref()
        .expect("the io error should carry a cause")
        .downcast_ref::<CapacityExceededError>()
        .expect("the cause should be a CapacityExceededError");
    assert_eq!(cause.limit, 4, "The error should report the configured limit.");
    assert_eq!(cause.written, 3, "The error should report the committed byte count.");
    assert_eq!(cause.requested, 2, "The error should report the rejected write's size.");

    assert_eq!(writer.written(), 3, "The rejected write should not count as written.");
    assert_eq!(
        writer.into_inner(),
        b"abc",
        "No byte of the rejected write should reach the inner writer."
    );
}
