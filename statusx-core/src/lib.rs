//! Structured, serializable application errors.
//!
//! A [`StatusErr`] carries a stable classification (`key` plus numeric
//! `code`), a message, an optional description, a correlation id, the
//! trail of services it propagated through, and field-level validation
//! failures. It renders to a canonical one-line summary that can cross
//! process boundaries and be parsed back, and it can be recovered from any
//! error chain that carries one.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod chain;
pub mod class;
pub mod codec;
pub mod error;
pub mod field;
pub mod status;

pub use chain::{carry, from_err, from_ref, is, Carried, StatusError};
pub use class::{normalize_code, status_class};
pub use codec::parse;
pub use error::ParseError;
pub use field::{ErrorField, ErrorFields};
pub use status::{wrap, BoxError, StatusErr, UNKNOWN_CODE, UNKNOWN_KEY, UNKNOWN_MSG};
