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

use clap::{ArgAction, Args, Parser, Subcommand};
use sfu_api_client::sfu_api_types::{JoinRequest, TokenRequest};

/// SFU CLI
///
/// Issues a single request against the SFU REST API and prints the result.
///
/// The API URL and shared secret default to the public service and can be
/// overridden with `SFU_API_URL` / `SFU_API_SECRET` or the flags below.
#[derive(Parser, Debug)]
#[clap(name = "sfu-cli")]
pub struct Opt {
    /// Base URL of the API, including the `/api/v1` prefix.
    #[clap(long = "url", global = true)]
    pub url: Option<String>,

    /// Shared secret sent in the `authorization` header.
    #[clap(long = "secret", global = true)]
    pub secret: Option<String>,

    /// Overall request timeout. Unset means the transport default.
    #[clap(long = "timeout-secs", global = true)]
    pub timeout_secs: Option<u64>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a new meeting room.
    Meeting,

    /// Get a join URL for a room.
    Join(JoinArgs),

    /// List active meetings.
    Meetings,

    /// Issue an access token.
    Token(TokenArgs),

    /// Show room and peer counters.
    Stats,
}

#[derive(Args, Debug, Clone)]
pub struct TokenArgs {
    #[clap(long = "username", default_value = "username")]
    pub username: String,

    #[clap(long = "password", default_value = "password")]
    pub password: String,

    /// Grant presenter rights.
    #[clap(long = "presenter", default_value_t = true, action = ArgAction::Set)]
    pub presenter: bool,

    /// Token lifetime, e.g. `1h`, `30m`.
    #[clap(long = "expire", default_value = "1h")]
    pub expire: String,
}

impl From<&TokenArgs> for TokenRequest {
    fn from(args: &TokenArgs) -> Self {
        TokenRequest {
            username: args.username.clone(),
            password: args.password.clone(),
            presenter: args.presenter,
            expire: args.expire.clone(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct JoinArgs {
    #[clap(long = "room", default_value = "test")]
    pub room: String,

    /// Password of a protected room.
    #[clap(long = "room-password")]
    pub room_password: Option<String>,

    /// Display name of the participant.
    #[clap(long = "name", default_value = "kidokoolsfu")]
    pub name: String,

    #[clap(long = "avatar", default_value_t = false, action = ArgAction::Set)]
    pub avatar: bool,

    #[clap(long = "audio", default_value_t = false, action = ArgAction::Set)]
    pub audio: bool,

    #[clap(long = "video", default_value_t = false, action = ArgAction::Set)]
    pub video: bool,

    #[clap(long = "screen", default_value_t = false, action = ArgAction::Set)]
    pub screen: bool,

    #[clap(long = "chat", default_value_t = false, action = ArgAction::Set)]
    pub chat: bool,

    #[clap(long = "hide", default_value_t = false, action = ArgAction::Set)]
    pub hide: bool,

    #[clap(long = "notify", default_value_t = true, action = ArgAction::Set)]
    pub notify: bool,

    /// Session duration: `unlimited` or `HH:MM:SS`.
    #[clap(long = "duration", default_value = "unlimited")]
    pub duration: String,

    /// Leave the embedded token request out of the body.
    #[clap(long = "no-token")]
    pub no_token: bool,

    #[clap(flatten)]
    pub token: TokenArgs,
}

impl From<&JoinArgs> for JoinRequest {
    fn from(args: &JoinArgs) -> Self {
        JoinRequest {
            room: args.room.clone(),
            room_password: args.room_password.clone(),
            name: args.name.clone(),
            avatar: args.avatar,
            audio: args.audio,
            video: args.video,
            screen: args.screen,
            chat: args.chat,
            hide: args.hide,
            notify: args.notify,
            duration: args.duration.clone(),
            token: (!args.no_token).then(|| TokenRequest::from(&args.token)),
        }
    }
}
