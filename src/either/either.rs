//! The [`Either`] type and its combinators.

use derive_more::IsVariant;

/// A value that is exactly one of two possibilities: `Left`, conventionally carrying
/// failure or error information, or `Right`, conventionally carrying a success value.
///
/// Which variant an instance holds is fixed at construction and never changes; every
/// operation here is a pure function producing a new value. There is no implicit
/// conversion between the variants. Converting requires an explicit [`transform`] or
/// [`swap`].
///
/// Unlike [`Option`] or a tolerant nullable type, accessing the absent branch is a
/// programming error and panics immediately. Where the wrong variant is an *expected*
/// outcome, use [`either`], [`or`] or [`right_or`] instead of the panicking accessors.
///
/// Equality and hashing are variant-aware: two values are equal only when they are the
/// same variant holding equal payloads.
///
/// # Examples
/// ```
/// use support_lib::either::Either;
///
/// fn parse_port(raw: &str) -> Either<String, u16> {
///     match raw.parse() {
///         Ok(port) => Either::right_of(port),
///         Err(_) => Either::left_of(format!("not a port: {raw:?}")),
///     }
/// }
///
/// assert_eq!(parse_port("8080"), Either::right_of(8080));
/// assert!(parse_port("eighty").is_left());
/// ```
///
/// [`transform`]: Either::transform
/// [`swap`]: Either::swap
/// [`either`]: Either::either
/// [`or`]: Either::or
/// [`right_or`]: Either::right_or
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Either<L, R> {
    /// The left case, conventionally failure.
    Left(L),
    /// The right case, conventionally success.
    Right(R),
}

use Either::{Left, Right};

impl<L, R> Either<L, R> {
    /// Creates a left-variant value.
    ///
    /// # Examples
    /// ```
    /// use support_lib::either::Either;
    /// let e: Either<&str, u8> = Either::left_of("broken");
    /// assert!(e.is_left());
    /// ```
    pub const fn left_of(value: L) -> Either<L, R> {
        Left(value)
    }

    /// Creates a right-variant value.
    ///
    /// # Examples
    /// ```
    /// use support_lib::either::Either;
    /// let e: Either<&str, u8> = Either::right_of(7);
    /// assert!(e.is_right());
    /// ```
    pub const fn right_of(value: R) -> Either<L, R> {
        Right(value)
    }

    /// Consumes the value and returns the left payload.
    ///
    /// # Panics
    /// Panics if this is a right-variant value. Accessing the absent branch is a
    /// programming error, not a recoverable condition.
    ///
    /// # Examples
    /// ```
    /// use support_lib::either::Either;
    /// let e: Either<&str, u8> = Either::left_of("broken");
    /// assert_eq!(e.left(), "broken");
    /// ```
    pub fn left(self) -> L {
        match self {
            Left(value) => value,
            Right(_) => panic!("left() called on a Right value"),
        }
    }

    /// Consumes the value and returns the right payload.
    ///
    /// # Panics
    /// Panics if this is a left-variant value.
    ///
    /// # Examples
    /// ```
    /// use support_lib::either::Either;
    /// let e: Either<&str, u8> = Either::right_of(7);
    /// assert_eq!(e.right(), 7);
    /// ```
    pub fn right(self) -> R {
        match self {
            Left(_) => panic!("right() called on a Left value"),
            Right(value) => value,
        }
    }

    /// Returns self if this is a right-variant value, otherwise `alternative`.
    ///
    /// # Examples
    /// ```
    /// use support_lib::either::Either;
    /// let fallback = Either::right_of(0);
    /// assert_eq!(Either::<&str, u8>::right_of(7).or(fallback), Either::right_of(7));
    /// assert_eq!(Either::<&str, u8>::left_of("oops").or(fallback), Either::right_of(0));
    /// ```
    pub fn or(self, alternative: Either<L, R>) -> Either<L, R> {
        match self {
            Left(_) => alternative,
            right => right,
        }
    }

    /// Returns the right payload, or the error produced by applying `to_error` to the left
    /// payload. The caller supplies the error factory, so the left type never needs to be
    /// an error itself.
    ///
    /// # Examples
    /// ```
    /// use std::io;
    /// use support_lib::either::Either;
    ///
    /// let e: Either<String, u8> = Either::left_of("no such host".to_string());
    /// let res = e.right_or(|msg| io::Error::new(io::ErrorKind::NotFound, msg));
    /// assert_eq!(res.unwrap_err().kind(), io::ErrorKind::NotFound);
    /// ```
    pub fn right_or<E, F: FnOnce(L) -> E>(self, to_error: F) -> Result<R, E> {
        match self {
            Left(value) => Err(to_error(value)),
            Right(value) => Ok(value),
        }
    }

    /// The catamorphism over the union: applies exactly one of the two functions,
    /// depending on the variant, producing a common result type. This is the total
    /// pattern-match; it cannot panic and handles both branches by construction.
    ///
    /// # Examples
    /// ```
    /// use support_lib::either::Either;
    /// let e: Either<&str, u8> = Either::right_of(7);
    /// let summary = e.either(|err| format!("failed: {err}"), |n| format!("got {n}"));
    /// assert_eq!(summary, "got 7");
    /// ```
    pub fn either<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Left(value) => on_left(value),
            Right(value) => on_right(value),
        }
    }

    /// Maps each branch independently, producing a new `Either` with possibly different
    /// payload types per branch. Exactly one of the two functions runs.
    ///
    /// # Examples
    /// ```
    /// use support_lib::either::Either;
    /// let e: Either<&str, u8> = Either::right_of(7);
    /// assert_eq!(e.transform(str::len, u32::from), Either::right_of(7_u32));
    /// ```
    pub fn transform<L2, R2, FL, FR>(self, on_left: FL, on_right: FR) -> Either<L2, R2>
    where
        FL: FnOnce(L) -> L2,
        FR: FnOnce(R) -> R2,
    {
        match self {
            Left(value) => Left(on_left(value)),
            Right(value) => Right(on_right(value)),
        }
    }

    /// Exchanges which variant is left and which is right, preserving the payload.
    ///
    /// # Examples
    /// ```
    /// use support_lib::either::Either;
    /// let e: Either<&str, u8> = Either::left_of("now a success");
    /// assert!(e.swap().is_right());
    /// ```
    pub fn swap(self) -> Either<R, L> {
        match self {
            Left(value) => Right(value),
            Right(value) => Left(value),
        }
    }

    /// Converts into a [`Result`], mapping `Right` to `Ok` and `Left` to `Err`.
    ///
    /// # Examples
    /// ```
    /// use support_lib::either::Either;
    /// let e: Either<&str, u8> = Either::right_of(7);
    /// assert_eq!(e.into_result(), Ok(7));
    /// ```
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Left(value) => Err(value),
            Right(value) => Ok(value),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Either<L, R> {
        match result {
            Ok(value) => Right(value),
            Err(value) => Left(value),
        }
    }
}
