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

//! Connection settings: built-in defaults, then environment, then flags.

use std::env;
use std::time::Duration;

use sfu_api_client::{ApiError, SfuApiClient};

use crate::cli_args::Opt;

pub const DEFAULT_API_URL: &str = "https://sfu.kidokool.com/api/v1";
pub const DEFAULT_API_SECRET: &str = "kidokoolsfu_default_secret";

/// Where and how to reach the SFU API.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL including the `/api/v1` prefix.
    pub api_url: String,
    /// Shared secret sent verbatim in the `authorization` header.
    pub api_secret: String,
    /// Request timeout. `None` leaves the transport default.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_secret: DEFAULT_API_SECRET.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Optional
    /// - `SFU_API_URL` (default: `"https://sfu.kidokool.com/api/v1"`)
    /// - `SFU_API_SECRET` (default: `"kidokoolsfu_default_secret"`)
    /// - `SFU_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let var = |key: &str| lookup(key).filter(|s| !s.is_empty());

        let defaults = Self::default();
        let timeout = var("SFU_TIMEOUT_SECS")
            .map(|raw| {
                raw.parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|_| "SFU_TIMEOUT_SECS must be a valid integer".to_string())
            })
            .transpose()?;

        Ok(Self {
            api_url: var("SFU_API_URL").unwrap_or(defaults.api_url),
            api_secret: var("SFU_API_SECRET").unwrap_or(defaults.api_secret),
            timeout,
        })
    }

    /// Apply command-line flags on top of this configuration.
    pub fn with_overrides(mut self, opt: &Opt) -> Self {
        if let Some(url) = &opt.url {
            self.api_url = url.clone();
        }
        if let Some(secret) = &opt.secret {
            self.api_secret = secret.clone();
        }
        if let Some(secs) = opt.timeout_secs {
            self.timeout = Some(Duration::from_secs(secs));
        }
        self
    }

    pub fn build_client(&self) -> Result<SfuApiClient, ApiError> {
        SfuApiClient::with_timeout(&self.api_url, &self.api_secret, self.timeout)
    }
}
