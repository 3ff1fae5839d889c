//! HTTP edge adapter for statusx status errors.
//!
//! Turns a [`StatusErr`](statusx_core::StatusErr) into an axum response,
//! deciding what the client may see from the error's talk flag and a
//! [`ResponseConfig`].

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod response;

pub use config::ResponseConfig;
pub use response::ErrorResponse;
