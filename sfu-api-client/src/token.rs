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

//! Token endpoint.

use sfu_api_types::{requests::TokenRequest, responses::TokenResponse};

use crate::error::ApiError;
use crate::{parse_reply, ApiReply, SfuApiClient};

impl SfuApiClient {
    /// Mint an access token.
    ///
    /// Calls `POST /token`.
    pub async fn issue_token(
        &self,
        request: &TokenRequest,
    ) -> Result<ApiReply<TokenResponse>, ApiError> {
        let response = self.post("/token").json(request).send().await?;
        parse_reply(response).await
    }
}
