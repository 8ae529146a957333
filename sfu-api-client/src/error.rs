/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Error types for the SFU API client.

use thiserror::Error;

/// Errors returned by [`SfuApiClient`](crate::SfuApiClient) methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a non-2xx status. `body` is the raw text.
    #[error("Server error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The service answered 2xx but the body carried an `error` message.
    #[error("Remote error ({status}): {message}")]
    Remote { status: u16, message: String },

    /// The body was not JSON, or lacked the expected field.
    #[error("Unexpected response body ({status})")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A configuration error (e.g. empty base URL).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status of the response that produced this error, if one arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. }
            | ApiError::Remote { status, .. }
            | ApiError::Decode { status, .. } => Some(*status),
            ApiError::Network(err) => err.status().map(|s| s.as_u16()),
            ApiError::Config(_) => None,
        }
    }
}
