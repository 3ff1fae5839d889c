//! Converts status errors into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use statusx_core::StatusErr;
use uuid::Uuid;

use crate::config::ResponseConfig;

/// A [`StatusErr`] on its way to an HTTP client.
///
/// The response status is the error's status class, or `500` when the
/// class is not a valid HTTP status. The body is the error's JSON form
/// filtered through a [`ResponseConfig`]: `msg` is masked unless the error
/// is talkable, and `desc` is dropped unless exposed.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    err: StatusErr,
    config: ResponseConfig,
}

impl ErrorResponse {
    /// Wrap `err` with the default [`ResponseConfig`].
    #[must_use]
    pub fn new(err: StatusErr) -> Self {
        Self {
            err,
            config: ResponseConfig::default(),
        }
    }

    /// Replace the rendering policy.
    #[must_use]
    pub fn with_config(mut self, config: ResponseConfig) -> Self {
        self.config = config;
        self
    }

    /// The wrapped error, unfiltered.
    #[must_use]
    pub fn error(&self) -> &StatusErr {
        &self.err
    }

    /// HTTP status derived from the error's status class.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        u16::try_from(self.err.status_code())
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// The error as the client will see it.
    #[must_use]
    pub fn body(&self) -> StatusErr {
        let mut se = self.err.clone();
        if !se.can_be_talk {
            se.msg = self
                .config
                .masked_msg
                .clone()
                .unwrap_or_else(|| se.key.clone());
        }
        if !self.config.expose_desc {
            se.desc.clear();
        }
        if self.config.stamp_missing_id && se.id.is_empty() {
            se.id = Uuid::new_v4().to_string();
        }
        se
    }
}

impl From<StatusErr> for ErrorResponse {
    fn from(err: StatusErr) -> Self {
        Self::new(err)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.body();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), id = %body.id, error = %self.err, "status error response");
        } else {
            tracing::debug!(status = status.as_u16(), id = %body.id, key = %body.key, "status error response");
        }

        (status, Json(body)).into_response()
    }
}
