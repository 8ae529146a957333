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

//! Request bodies for the SFU REST API.
//!
//! Used by clients for serialization and by test servers for
//! deserialization. Field names follow the service's camelCase wire names.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1/token`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,

    /// Whether the token grants presenter rights. Sent as `"true"`/`"false"`.
    #[serde(with = "crate::string_bool")]
    pub presenter: bool,

    /// Token lifetime understood by the service, e.g. `"1h"`, `"30m"`.
    pub expire: String,
}

impl Default for TokenRequest {
    fn default() -> Self {
        Self {
            username: "username".to_string(),
            password: "password".to_string(),
            presenter: true,
            expire: "1h".to_string(),
        }
    }
}

/// Request body for `POST /api/v1/join`.
///
/// The service answers with a ready-to-open join URL built from these
/// fields.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    /// Room name.
    pub room: String,

    /// Room password. `None` is sent as `"false"`.
    #[serde(default, with = "crate::string_bool::password")]
    pub room_password: Option<String>,

    /// Participant display name.
    pub name: String,

    #[serde(with = "crate::string_bool")]
    pub avatar: bool,
    #[serde(with = "crate::string_bool")]
    pub audio: bool,
    #[serde(with = "crate::string_bool")]
    pub video: bool,
    #[serde(with = "crate::string_bool")]
    pub screen: bool,
    #[serde(with = "crate::string_bool")]
    pub chat: bool,
    #[serde(with = "crate::string_bool")]
    pub hide: bool,
    #[serde(with = "crate::string_bool")]
    pub notify: bool,

    /// Session duration: `"unlimited"` or `HH:MM:SS`.
    pub duration: String,

    /// Embedded token request. Omitted from the body when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenRequest>,
}

impl Default for JoinRequest {
    fn default() -> Self {
        Self {
            room: "test".to_string(),
            room_password: None,
            name: "kidokoolsfu".to_string(),
            avatar: false,
            audio: false,
            video: false,
            screen: false,
            chat: false,
            hide: false,
            notify: true,
            duration: "unlimited".to_string(),
            token: Some(TokenRequest::default()),
        }
    }
}
