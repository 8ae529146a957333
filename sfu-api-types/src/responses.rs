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

//! Response bodies for the SFU REST API.
//!
//! Successful calls return a flat object keyed by the endpoint's result
//! (`meeting`, `join`, `token`). Rejected calls return [`RemoteError`].
//! The `/meetings` and `/stats` documents are owned by the service and are
//! handled as untyped JSON by the client.

use serde::{Deserialize, Serialize};

/// Response payload for `POST /api/v1/meeting`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MeetingResponse {
    /// URL or identifier of the newly created meeting room.
    pub meeting: String,
}

/// Response payload for `POST /api/v1/join`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct JoinResponse {
    /// Join URL for the requested room and participant.
    pub join: String,
}

/// Response payload for `POST /api/v1/token`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    /// Signed token; opaque to the client.
    pub token: String,
}

/// Error body, e.g. `{"error": "Unauthorized!"}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RemoteError {
    pub error: String,
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.error)
    }
}

impl std::error::Error for RemoteError {}
