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

//! Server statistics endpoint.

use crate::error::ApiError;
use crate::{parse_reply, ApiReply, SfuApiClient};

impl SfuApiClient {
    /// Fetch room and peer counters from the SFU.
    ///
    /// Calls `GET /stats`.
    pub async fn stats(&self) -> Result<ApiReply<serde_json::Value>, ApiError> {
        let response = self.get("/stats").send().await?;
        parse_reply(response).await
    }
}
