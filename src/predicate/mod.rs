//! Predicates for emptiness and syntactic validity. Namely the [`Emptiness`] trait for a
//! uniform emptiness question across string and collection types, blank-string checks,
//! and validity checks for URIs, email addresses and hostnames.
//!
//! Each predicate answers a yes/no question and nothing else; the
//! [`contract`](crate::contract) module composes them into failing checks.
#![warn(missing_docs)]

pub mod emptiness;
pub mod net;


#[doc(inline)]
pub use emptiness::{Emptiness, is_blank, is_not_blank};
#[doc(inline)]
pub use net::{is_valid_email, is_valid_hostname, is_valid_uri};
