//! Macros for asserting that an expression panics.

/// Asserts that the given block panics.
///
/// The panic is caught, so the surrounding test continues. An optional second argument
/// gives the assertion message shown when no panic occurs.
///
/// # Examples
/// ```
/// use support_lib::assert_panics;
/// assert_panics!({ Vec::<u8>::new()[0] }, "indexing an empty Vec should panic");
/// ```
#[macro_export]
macro_rules! assert_panics {
    ($run:block) => {
        $crate::assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
    };
}

/// Asserts that the given block panics with a message containing the given substring.
///
/// Panic payloads that are not strings (anything other than a `panic!` with a message)
/// fail the containment assertion.
///
/// # Examples
/// ```
/// use support_lib::assert_panic_message;
/// assert_panic_message!({ panic!("port 99999 out of range") }, "out of range");
/// ```
#[macro_export]
macro_rules! assert_panic_message {
    ($run:block, $needle:expr) => {{
        let payload = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run))
            .expect_err("assertion failed to panic");
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            String::new()
        };
        assert!(
            message.contains($needle),
            "panic message {:?} should contain {:?}",
            message,
            $needle
        );
    }};
}
