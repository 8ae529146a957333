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

//! Meeting endpoints: create and list.

use sfu_api_types::responses::MeetingResponse;

use crate::error::ApiError;
use crate::{parse_reply, parse_reply_if, ApiReply, SfuApiClient};

impl SfuApiClient {
    /// Create a new meeting room.
    ///
    /// Calls `POST /meeting` with an empty body.
    pub async fn create_meeting(&self) -> Result<ApiReply<MeetingResponse>, ApiError> {
        let response = self.post("/meeting").send().await?;
        parse_reply(response).await
    }

    /// List the meetings currently active on the SFU.
    ///
    /// Calls `GET /meetings`. The document shape belongs to the service, so
    /// it is returned as raw JSON. Any status other than 200 is
    /// [`ApiError::Status`] carrying the raw body.
    pub async fn list_meetings(&self) -> Result<ApiReply<serde_json::Value>, ApiError> {
        let response = self.get("/meetings").send().await?;
        parse_reply_if(response, |status| status == 200).await
    }
}
