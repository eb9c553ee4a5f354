//! A uniform emptiness question over strings, collections and optional values.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Types that can be asked whether they hold anything at all.
///
/// The inherent `is_empty` methods on std types answer the same question, but each behind
/// its own concrete type; this trait gives generic code (and the
/// [`require_not_empty`](crate::contract::require_not_empty) check) one seam to ask
/// through. [`Option`] counts as empty when it is [`None`], whatever it might contain.
pub trait Emptiness {
    /// Returns true if the value holds nothing.
    fn is_empty(&self) -> bool;

    /// Returns true if the value holds anything.
    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }
}

impl Emptiness for str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl Emptiness for String {
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl<T> Emptiness for [T] {
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T> Emptiness for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> Emptiness for VecDeque<T> {
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<T> Emptiness for Option<T> {
    fn is_empty(&self) -> bool {
        self.is_none()
    }
}

impl<K, V, S> Emptiness for HashMap<K, V, S> {
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<T, S> Emptiness for HashSet<T, S> {
    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

impl<K, V> Emptiness for BTreeMap<K, V> {
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl<T> Emptiness for BTreeSet<T> {
    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }
}

impl<T: Emptiness + ?Sized> Emptiness for &T {
    fn is_empty(&self) -> bool {
        T::is_empty(self)
    }
}

/// Returns true if the string is empty or contains only whitespace.
///
/// # Examples
/// ```
/// use support_lib::predicate::is_blank;
/// assert!(is_blank(""));
/// assert!(is_blank("  \t\n"));
/// assert!(!is_blank("  x "));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.chars().all(char::is_whitespace)
}

/// Returns true if the string contains at least one non-whitespace character.
pub fn is_not_blank(value: &str) -> bool {
    !is_blank(value)
}
