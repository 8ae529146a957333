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

//! Join endpoint.

use sfu_api_types::{requests::JoinRequest, responses::JoinResponse};

use crate::error::ApiError;
use crate::{parse_reply, ApiReply, SfuApiClient};

impl SfuApiClient {
    /// Request a join URL for a room.
    ///
    /// Calls `POST /join`. The returned `join` string is a direct link the
    /// participant can open; when `request.token` is set the service embeds a
    /// signed token in it.
    pub async fn join(&self, request: &JoinRequest) -> Result<ApiReply<JoinResponse>, ApiError> {
        let response = self.post("/join").json(request).send().await?;
        parse_reply(response).await
    }
}
