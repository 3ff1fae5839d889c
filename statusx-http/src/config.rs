//! Rendering policy for error responses.

use serde::{Deserialize, Serialize};

/// Controls what an [`ErrorResponse`](crate::ErrorResponse) reveals to clients.
///
/// Deserializes from partial input; missing members take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ResponseConfig {
    /// Include `desc` in response bodies.
    pub expose_desc: bool,

    /// Replacement for `msg` on errors that are not talkable.
    /// The error's `key` is used when unset.
    pub masked_msg: Option<String>,

    /// Fill an empty `id` with a random UUID before rendering.
    pub stamp_missing_id: bool,
}

impl ResponseConfig {
    /// Create a config with the defaults: no description, messages masked
    /// by key, missing ids stamped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expose_desc: false,
            masked_msg: None,
            stamp_missing_id: true,
        }
    }

    /// Set whether `desc` reaches the client.
    #[must_use]
    pub fn with_expose_desc(mut self, expose: bool) -> Self {
        self.expose_desc = expose;
        self
    }

    /// Set the replacement for non-talkable messages.
    #[must_use]
    pub fn with_masked_msg(mut self, msg: impl Into<String>) -> Self {
        self.masked_msg = Some(msg.into());
        self
    }

    /// Set whether empty ids are stamped.
    #[must_use]
    pub fn with_stamp_missing_id(mut self, stamp: bool) -> Self {
        self.stamp_missing_id = stamp;
        self
    }
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self::new()
    }
}
