//! Check macros and value-returning check functions.

use std::any::{Any, type_name};

#[cfg(feature = "predicate")]
use regex::Regex;

#[cfg(feature = "predicate")]
use crate::predicate::{self, Emptiness};

/// Panics with a precondition-violation message unless the condition holds.
///
/// The message is a format template with positional arguments, prefixed with
/// `"precondition violated: "`. With no template, the stringified condition is used.
///
/// # Examples
/// ```
/// use support_lib::require;
/// fn reserve(seats: u32, available: u32) -> u32 {
///     require!(seats <= available, "requested {seats} seats but only {available} remain");
///     available - seats
/// }
/// assert_eq!(reserve(2, 5), 3);
/// ```
///
/// ```should_panic
/// use support_lib::require;
/// require!(1 > 2);
/// ```
#[macro_export]
macro_rules! require {
    ($cond:expr $(,)?) => {
        if !$cond {
            panic!("precondition violated: {}", stringify!($cond));
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            panic!("precondition violated: {}", format_args!($($arg)+));
        }
    };
}

/// Panics with a postcondition-violation message unless the condition holds.
///
/// The counterpart to [`require!`](crate::require) for the implementer's side of the
/// contract: a failure here means the implementation produced a wrong result, not that the
/// caller passed bad input. Prefixed with `"postcondition violated: "`.
///
/// # Examples
/// ```
/// use support_lib::ensure;
/// fn halve(n: u32) -> u32 {
///     let half = n / 2;
///     ensure!(half <= n, "half ({half}) must not exceed the input ({n})");
///     half
/// }
/// assert_eq!(halve(8), 4);
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        if !$cond {
            panic!("postcondition violated: {}", stringify!($cond));
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            panic!("postcondition violated: {}", format_args!($($arg)+));
        }
    };
}

/// Panics unconditionally: control flow reached a condition declared impossible.
///
/// Use in match arms and branches that are unreachable by construction but cannot be
/// proven so to the compiler. Unlike [`unreachable!`], the message prefix names the
/// failure category so a panic in production logs reads as "a bug, not bad input".
///
/// # Examples
/// ```should_panic
/// use support_lib::impossible;
/// let parity = 3 % 2;
/// match parity {
///     0 => println!("even"),
///     1 => println!("odd"),
///     other => impossible!("parity was {other}"),
/// }
/// ```
#[macro_export]
macro_rules! impossible {
    () => {
        panic!("reached a condition declared impossible")
    };
    ($($arg:tt)+) => {
        panic!("reached a condition declared impossible: {}", format_args!($($arg)+))
    };
}

/// Validates a value against a predicate and returns it, so the check can sit inline in
/// an expression. The value is passed by reference to the predicate and returned by value
/// on success.
///
/// # Panics
/// Panics with a precondition-violation message if the predicate rejects the value.
///
/// # Examples
/// ```
/// use support_lib::contract::require_that;
/// struct Config { retries: u32 }
/// impl Config {
///     fn new(retries: u32) -> Config {
///         Config { retries: require_that(retries, |r| *r <= 10, "retries must be at most 10") }
///     }
/// }
/// assert_eq!(Config::new(3).retries, 3);
/// ```
pub fn require_that<T, P: FnOnce(&T) -> bool>(value: T, predicate: P, message: &str) -> T {
    require!(predicate(&value), "{message}");
    value
}

/// The postcondition counterpart of [`require_that`]: validates a computed result against
/// a predicate and returns it.
///
/// # Panics
/// Panics with a postcondition-violation message if the predicate rejects the value.
pub fn ensure_that<T, P: FnOnce(&T) -> bool>(value: T, predicate: P, message: &str) -> T {
    ensure!(predicate(&value), "{message}");
    value
}

/// Downcasts a boxed [`Any`] to a concrete type, failing loudly on mismatch.
///
/// This is the type-instance check: use it where a value's concrete type is guaranteed by
/// construction and a mismatch means a bug, not bad input.
///
/// # Panics
/// Panics with a precondition-violation message naming the expected type if the value is
/// not a `T`.
///
/// # Examples
/// ```
/// use std::any::Any;
/// use support_lib::contract::require_instance_of;
/// let boxed: Box<dyn Any> = Box::new(7_u32);
/// assert_eq!(*require_instance_of::<u32>(boxed), 7);
/// ```
pub fn require_instance_of<T: Any>(value: Box<dyn Any>) -> Box<T> {
    match value.downcast::<T>() {
        Ok(concrete) => concrete,
        Err(_) => panic!("precondition violated: value is not an instance of {}", type_name::<T>()),
    }
}

/// Validates that a value is not empty (per [`Emptiness`]) and returns it. `label` names
/// the value in the failure message.
///
/// # Panics
/// Panics with a precondition-violation message if the value is empty.
///
/// # Examples
/// ```
/// use support_lib::contract::require_not_empty;
/// let hosts = require_not_empty(vec!["db-1"], "hosts");
/// assert_eq!(hosts.len(), 1);
/// ```
#[cfg(feature = "predicate")]
pub fn require_not_empty<T: Emptiness>(value: T, label: &str) -> T {
    require!(value.is_not_empty(), "{label} must not be empty");
    value
}

/// Validates that a string is not blank (empty or whitespace-only) and returns it.
///
/// # Panics
/// Panics with a precondition-violation message if the string is blank.
#[cfg(feature = "predicate")]
pub fn require_not_blank<S: AsRef<str>>(value: S, label: &str) -> S {
    require!(predicate::is_not_blank(value.as_ref()), "{label} must not be blank");
    value
}

/// Validates that a string matches a regular expression and returns it.
///
/// # Panics
/// Panics with a precondition-violation message if the string does not match.
///
/// # Examples
/// ```
/// use regex::Regex;
/// use support_lib::contract::require_match;
/// let digits = Regex::new(r"^\d+$").unwrap();
/// let id = require_match("10437", &digits, "id");
/// assert_eq!(id, "10437");
/// ```
#[cfg(feature = "predicate")]
pub fn require_match<S: AsRef<str>>(value: S, pattern: &Regex, label: &str) -> S {
    require!(
        pattern.is_match(value.as_ref()),
        "{label} {:?} must match {:?}",
        value.as_ref(),
        pattern.as_str()
    );
    value
}

/// Validates that a string is an absolute URI and returns it.
///
/// # Panics
/// Panics with a precondition-violation message if the string is not a valid URI.
#[cfg(feature = "predicate")]
pub fn require_uri<S: AsRef<str>>(value: S) -> S {
    require!(predicate::is_valid_uri(value.as_ref()), "{:?} must be a valid URI", value.as_ref());
    value
}

/// Validates that a string is a syntactically plausible email address and returns it.
///
/// # Panics
/// Panics with a precondition-violation message if the string is not a valid address.
#[cfg(feature = "predicate")]
pub fn require_email<S: AsRef<str>>(value: S) -> S {
    require!(
        predicate::is_valid_email(value.as_ref()),
        "{:?} must be a valid email address",
        value.as_ref()
    );
    value
}

/// Validates that a string is an RFC-1123 hostname and returns it.
///
/// # Panics
/// Panics with a precondition-violation message if the string is not a valid hostname.
#[cfg(feature = "predicate")]
pub fn require_hostname<S: AsRef<str>>(value: S) -> S {
    require!(
        predicate::is_valid_hostname(value.as_ref()),
        "{:?} must be a valid hostname",
        value.as_ref()
    );
    value
}
