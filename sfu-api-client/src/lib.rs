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

//! REST client for the SFU meeting API.
//!
//! Every call carries the service's shared secret verbatim in the
//! `authorization` header and returns the HTTP status alongside the decoded
//! body in an [`ApiReply`].
//!
//! # Example
//!
//! ```no_run
//! use sfu_api_client::SfuApiClient;
//!
//! # async fn example() -> Result<(), sfu_api_client::ApiError> {
//! let client = SfuApiClient::new("https://sfu.kidokool.com/api/v1", "kidokoolsfu_default_secret")?;
//!
//! let reply = client.create_meeting().await?;
//! println!("meeting: {}", reply.body.meeting);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod join;
pub mod meetings;
pub mod stats;
pub mod token;

pub use error::ApiError;
pub use sfu_api_types;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// A decoded response together with the HTTP status it arrived with.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply<T> {
    pub status: u16,
    pub body: T,
}

/// A typed REST client for the SFU `/api/v1` endpoints.
///
/// Holds no per-call state; every method issues exactly one request.
#[derive(Debug, Clone)]
pub struct SfuApiClient {
    base_url: String,
    http: Client,
}

impl SfuApiClient {
    /// Create a client for the given base URL (e.g.
    /// `"https://sfu.kidokool.com/api/v1"`) using the transport's default
    /// timeout.
    pub fn new(base_url: &str, secret: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, secret, None)
    }

    /// Like [`new`](Self::new), with an optional overall request timeout.
    pub fn with_timeout(
        base_url: &str,
        secret: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let base_url = base_url.trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ApiError::Config("base URL is empty".to_string()));
        }

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(secret)
            .map_err(|_| ApiError::Config("secret is not a valid header value".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.to_string(),
            http: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a GET request; auth and content-type come from the default headers.
    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        log::debug!("GET {}{}", self.base_url, path);
        self.http.get(self.url(path))
    }

    /// Build a POST request; auth and content-type come from the default headers.
    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        log::debug!("POST {}{}", self.base_url, path);
        self.http.post(self.url(path))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decode a response into `T`.
///
/// Non-2xx statuses are returned as [`ApiError::Status`] with the raw body
/// and no JSON parsing. A 2xx body carrying an `error` string is
/// [`ApiError::Remote`]; anything that does not fit `T` is
/// [`ApiError::Decode`].
pub(crate) async fn parse_reply<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<ApiReply<T>, ApiError> {
    parse_reply_if(response, |status| (200..=299).contains(&status)).await
}

/// Like [`parse_reply`], but only statuses for which `accept` holds are
/// decoded; every other status is [`ApiError::Status`] with the raw body.
pub(crate) async fn parse_reply_if<T: DeserializeOwned>(
    response: reqwest::Response,
    accept: impl Fn(u16) -> bool,
) -> Result<ApiReply<T>, ApiError> {
    let status = response.status().as_u16();
    let text = response.text().await?;
    log::debug!("status {status}, {} byte body", text.len());

    if !accept(status) {
        return Err(ApiError::Status { status, body: text });
    }

    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|source| ApiError::Decode { status, source })?;

    if let Some(message) = value.get("error").and_then(serde_json::Value::as_str) {
        return Err(ApiError::Remote {
            status,
            message: message.to_string(),
        });
    }

    let body = serde_json::from_value(value).map_err(|source| ApiError::Decode { status, source })?;
    Ok(ApiReply { status, body })
}
