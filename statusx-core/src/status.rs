use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::chain::{self, StatusError};
use crate::class::{normalize_code, status_class};
use crate::codec;
use crate::error::ParseError;
use crate::field::{ErrorField, ErrorFields};

/// Boxed, thread-safe error used as a wrapped cause.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Key of the error synthesized for unclassified failures.
pub const UNKNOWN_KEY: &str = "UnknownError";
/// Class code of the error synthesized for unclassified failures.
pub const UNKNOWN_CODE: i64 = 500;
/// Message of the error synthesized for unclassified failures.
pub const UNKNOWN_MSG: &str = "unknown error";

/// The underlying failure together with the backtrace captured when it was wrapped.
struct Cause {
    error: BoxError,
    backtrace: Backtrace,
}

impl Cause {
    fn capture(error: BoxError) -> Self {
        Self {
            error,
            backtrace: Backtrace::capture(),
        }
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.error, f)
    }
}

/// A classified application error.
///
/// `key` and `code` identify the failure class; everything else is
/// context. Values are immutable in practice: every `with_*`/`append_*`
/// method returns a fresh copy and leaves the receiver untouched.
///
/// Two notions of sameness exist:
/// - [`StatusErr::classifies_as`] compares only `(key, code)`.
/// - `==` / [`StatusErr::same_as`] compares every public attribute.
///
/// Neither looks at the wrapped cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct StatusErr {
    /// Stable classification name.
    pub key: String,
    /// Unique numeric code; the leading three digits are the status class.
    pub code: i64,
    /// Short message, shown to end users only when `can_be_talk` is set.
    pub msg: String,
    /// Longer description.
    #[serde(default)]
    pub desc: String,
    /// Whether `msg` may be surfaced verbatim to an end user.
    #[serde(default)]
    pub can_be_talk: bool,
    /// Request or trace correlation id.
    #[serde(default)]
    pub id: String,
    /// Hops this error propagated through, oldest first.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Field-level validation failures.
    #[serde(default)]
    pub fields: ErrorFields,
    #[serde(skip)]
    cause: Option<Arc<Cause>>,
}

impl StatusErr {
    /// Creates an error with no cause, no sources, and no fields.
    ///
    /// A `code` in `100..=999` is widened by [`normalize_code`].
    pub fn new(key: impl Into<String>, code: i64, msg: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code: normalize_code(code),
            msg: msg.into(),
            desc: String::new(),
            can_be_talk: false,
            id: String::new(),
            sources: Vec::new(),
            fields: ErrorFields::new(),
            cause: None,
        }
    }

    /// Classifies `cause` under `key` and `code`.
    ///
    /// `msg` defaults to `key`, or the first entry of `messages`.
    /// `desc` defaults to the cause's message, or the remaining entries of
    /// `messages` joined by newlines.
    pub fn wrap(
        cause: impl Into<BoxError>,
        code: i64,
        key: impl Into<String>,
        messages: &[&str],
    ) -> Self {
        let cause: BoxError = cause.into();
        let key = key.into();

        let msg = messages.first().map_or_else(|| key.clone(), |m| (*m).to_owned());
        let desc = match messages.get(1..) {
            Some(rest) if !rest.is_empty() => rest.join("\n"),
            _ => cause.to_string(),
        };

        Self {
            desc,
            cause: Some(Arc::new(Cause::capture(cause))),
            ..Self::new(key, code, msg)
        }
    }

    /// Wraps an unclassified failure as `UnknownError`.
    pub fn unknown(cause: impl Into<BoxError>) -> Self {
        Self {
            cause: Some(Arc::new(Cause::capture(cause.into()))),
            ..Self::new(UNKNOWN_KEY, UNKNOWN_CODE, UNKNOWN_MSG)
        }
    }

    /// Returns a copy with `msg` replaced.
    #[must_use]
    pub fn with_msg(&self, msg: impl Into<String>) -> Self {
        let mut se = self.clone();
        se.msg = msg.into();
        se
    }

    /// Returns a copy with `desc` replaced.
    #[must_use]
    pub fn with_desc(&self, desc: impl Into<String>) -> Self {
        let mut se = self.clone();
        se.desc = desc.into();
        se
    }

    /// Returns a copy with `id` replaced.
    #[must_use]
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        let mut se = self.clone();
        se.id = id.into();
        se
    }

    /// Returns a talkable copy.
    #[must_use]
    pub fn enable_talk(&self) -> Self {
        let mut se = self.clone();
        se.can_be_talk = true;
        se
    }

    /// Returns a non-talkable copy.
    #[must_use]
    pub fn disable_talk(&self) -> Self {
        let mut se = self.clone();
        se.can_be_talk = false;
        se
    }

    /// Returns a copy with `source` appended to the trail, unless it is
    /// already the last hop.
    #[must_use]
    pub fn append_source(&self, source: impl Into<String>) -> Self {
        let source = source.into();
        let mut se = self.clone();
        if se.sources.last() != Some(&source) {
            se.sources.push(source);
        }
        se
    }

    /// Returns a copy with one more field failure.
    #[must_use]
    pub fn append_field(
        &self,
        location: impl Into<String>,
        field: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        self.append_fields([ErrorField::new(location, field, msg)])
    }

    /// Returns a copy with `fields` appended in order.
    #[must_use]
    pub fn append_fields(&self, fields: impl IntoIterator<Item = ErrorField>) -> Self {
        let mut se = self.clone();
        se.fields.extend(fields);
        se
    }

    /// Returns the wrapped cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref().map(|c| &*c.error)
    }

    /// Returns the backtrace captured when the cause was wrapped.
    #[must_use]
    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.cause.as_deref().map(|c| &c.backtrace)
    }

    /// Renders the canonical summary, `@StatusErr[key][code][msg]` plus `!`
    /// when talkable.
    #[must_use]
    pub fn summary(&self) -> String {
        codec::render(self)
    }

    /// Returns the status class of this error's code.
    #[must_use]
    pub fn status_code(&self) -> i64 {
        status_class(self.code)
    }

    /// Returns `true` if the status error found in `other`'s chain has the
    /// same `key` and `code`.
    ///
    /// This is a classification check, not equality: message, description,
    /// id, sources, and fields are ignored. A chain without a status error
    /// is compared as `UnknownError`.
    #[must_use]
    pub fn classifies_as(&self, other: &(dyn Error + 'static)) -> bool {
        match chain::find(other) {
            Some(se) => se.key == self.key && se.code == self.code,
            None => self.key == UNKNOWN_KEY && self.code == normalize_code(UNKNOWN_CODE),
        }
    }

    /// Returns `true` if every public attribute matches. The cause is ignored.
    #[must_use]
    pub fn same_as(&self, other: &StatusErr) -> bool {
        self.key == other.key
            && self.code == other.code
            && self.msg == other.msg
            && self.desc == other.desc
            && self.can_be_talk == other.can_be_talk
            && self.id == other.id
            && self.sources == other.sources
            && self.fields == other.fields
    }
}

/// Classifies an optional cause; `None` yields `None`.
///
/// See [`StatusErr::wrap`].
pub fn wrap<E: Into<BoxError>>(
    cause: Option<E>,
    code: i64,
    key: impl Into<String>,
    messages: &[&str],
) -> Option<StatusErr> {
    cause.map(|cause| StatusErr::wrap(cause, code, key, messages))
}

impl PartialEq for StatusErr {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for StatusErr {}

impl fmt::Display for StatusErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::render_full(self))
    }
}

impl Error for StatusErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|c| &*c.error as &(dyn Error + 'static))
    }
}

impl StatusError for StatusErr {
    fn status_err(&self) -> &StatusErr {
        self
    }
}

impl FromStr for StatusErr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse(s)
    }
}
