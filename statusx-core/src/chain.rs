//! Locating a [`StatusErr`] inside an arbitrary error chain.
//!
//! A chain is walked through [`Error::source`]. At every link the matcher
//! checks, in order:
//! 1. the link is a [`StatusErr`];
//! 2. the link is a [`Carried`] error, whose [`StatusError::status_err`]
//!    answers for it;
//! 3. otherwise the walk moves on to the link's source.
//!
//! Foreign types declare that they carry a status error by implementing
//! [`StatusError`]. Wrapping them in [`Carried`] (see [`carry`]) makes the
//! capability visible behind a `dyn Error` without the walk knowing the
//! carrier's concrete type, while the carrier's own `source()` stays the
//! next link:
//!
//! ```
//! use std::error::Error;
//! use std::fmt;
//! use std::io;
//!
//! use statusx_core::{chain, StatusErr, StatusError};
//!
//! #[derive(Debug)]
//! struct Rejected {
//!     se: StatusErr,
//!     cause: io::Error,
//! }
//!
//! impl fmt::Display for Rejected {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "rejected: {}", self.cause)
//!     }
//! }
//!
//! impl Error for Rejected {
//!     fn source(&self) -> Option<&(dyn Error + 'static)> {
//!         Some(&self.cause)
//!     }
//! }
//!
//! impl StatusError for Rejected {
//!     fn status_err(&self) -> &StatusErr {
//!         &self.se
//!     }
//! }
//!
//! let err = chain::carry(Rejected {
//!     se: StatusErr::new("Forbidden", 403, "forbidden"),
//!     cause: io::Error::other("acl denied"),
//! });
//! assert!(chain::is(Some(&err)));
//! assert_eq!(chain::find(&err).map(|se| se.key.as_str()), Some("Forbidden"));
//! ```

use std::error::Error;
use std::fmt;

use crate::status::{BoxError, StatusErr};

/// An error that carries a [`StatusErr`].
pub trait StatusError: Error + 'static {
    /// Returns the carried status error.
    fn status_err(&self) -> &StatusErr;
}

/// A type-erased [`StatusError`] as a link in an error chain.
///
/// Displays as the carrier and forwards `source()` to the carrier's own
/// source, so wrapping does not add or hide links.
pub struct Carried(Box<dyn StatusError + Send + Sync>);

impl Carried {
    /// Erases `carrier` into a chain link.
    pub fn new(carrier: impl StatusError + Send + Sync) -> Self {
        Self(Box::new(carrier))
    }

    /// Returns the carried status error.
    #[must_use]
    pub fn status_err(&self) -> &StatusErr {
        self.0.status_err()
    }

    /// Returns the carrier.
    #[must_use]
    pub fn carrier(&self) -> &(dyn StatusError + Send + Sync) {
        &*self.0
    }
}

impl fmt::Debug for Carried {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Carried {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for Carried {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

/// Erases `carrier` into a [`Carried`] chain link.
pub fn carry(carrier: impl StatusError + Send + Sync) -> Carried {
    Carried::new(carrier)
}

/// Returns the first [`StatusErr`] in `err`'s chain, starting at `err` itself.
#[must_use]
pub fn find<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a StatusErr> {
    let mut current = Some(err);
    while let Some(link) = current {
        if let Some(se) = link.downcast_ref::<StatusErr>() {
            return Some(se);
        }
        if let Some(carried) = link.downcast_ref::<Carried>() {
            return Some(carried.status_err());
        }
        current = link.source();
    }
    None
}

/// Returns `true` if a [`StatusErr`] is reachable from `err`.
///
/// `None` is never a status error.
#[must_use]
pub fn is(err: Option<&(dyn Error + 'static)>) -> bool {
    err.and_then(find).is_some()
}

/// Extracts the [`StatusErr`] carried by `err`.
///
/// Returns `None` only for `None`. A chain without a status error is
/// wrapped by [`StatusErr::unknown`], which keeps the original failure as
/// its cause.
pub fn from_err<E: Into<BoxError>>(err: Option<E>) -> Option<StatusErr> {
    let err: BoxError = err?.into();
    if let Some(se) = find(&*err) {
        return Some(se.clone());
    }

    tracing::debug!(error = %err, "no status err in chain, wrapping as unknown");
    Some(StatusErr::unknown(err))
}

/// Borrowed form of [`from_err`].
///
/// Returns a copy of the first [`StatusErr`] in the chain. Otherwise an
/// `UnknownError` is synthesized; since `err` is only borrowed, its cause
/// holds `err`'s message rather than `err` itself.
#[must_use]
pub fn from_ref(err: &(dyn Error + 'static)) -> StatusErr {
    if let Some(se) = find(err) {
        return se.clone();
    }

    tracing::debug!(error = %err, "no status err in chain, wrapping as unknown");
    StatusErr::unknown(err.to_string())
}
