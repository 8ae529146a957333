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

//! One function per subcommand. Each issues a single request and renders
//! the reply to `out`, starting with a `Status code: <n>` line whenever a
//! response arrived.

use std::io::Write;

use anyhow::{Context, Result};
use sfu_api_client::sfu_api_types::{JoinRequest, RemoteError, TokenRequest};
use sfu_api_client::{ApiError, ApiReply, SfuApiClient};
use tracing::debug;

use crate::cli_args::Command;

pub async fn run<W: Write>(command: &Command, client: &SfuApiClient, out: &mut W) -> Result<()> {
    debug!(base_url = client.base_url(), ?command, "running command");
    match command {
        Command::Meeting => create_meeting(client, out).await,
        Command::Join(args) => join(client, &JoinRequest::from(args), out).await,
        Command::Meetings => list_meetings(client, out).await,
        Command::Token(args) => issue_token(client, &TokenRequest::from(args), out).await,
        Command::Stats => stats(client, out).await,
    }
}

pub async fn create_meeting<W: Write>(client: &SfuApiClient, out: &mut W) -> Result<()> {
    let reply = with_status(out, client.create_meeting().await)?
        .context("failed to create meeting")?;
    writeln!(out, "meeting: {}", reply.body.meeting)?;
    Ok(())
}

pub async fn join<W: Write>(client: &SfuApiClient, request: &JoinRequest, out: &mut W) -> Result<()> {
    let reply = with_status(out, client.join(request).await)?
        .with_context(|| format!("failed to join room {}", request.room))?;
    writeln!(out, "join: {}", reply.body.join)?;
    Ok(())
}

pub async fn issue_token<W: Write>(
    client: &SfuApiClient,
    request: &TokenRequest,
    out: &mut W,
) -> Result<()> {
    let reply = with_status(out, client.issue_token(request).await)?
        .context("failed to issue token")?;
    writeln!(out, "token: {}", reply.body.token)?;
    Ok(())
}

/// Pretty-prints the meetings document. A rejected call is reported on
/// `out` and is not an error.
pub async fn list_meetings<W: Write>(client: &SfuApiClient, out: &mut W) -> Result<()> {
    match with_status(out, client.list_meetings().await)? {
        Ok(reply) => print_json(out, &reply.body),
        Err(ApiError::Status { body, .. }) => {
            writeln!(out, "Failed to retrieve data. Error: {body}")?;
            Ok(())
        }
        Err(ApiError::Remote { message, .. }) => {
            writeln!(out, "Error: {message}")?;
            Ok(())
        }
        Err(err) => Err(err).context("failed to list meetings"),
    }
}

/// Pretty-prints the stats document. An `{"error": ...}` answer, whatever
/// its status, is reported on `out` and is not an error.
pub async fn stats<W: Write>(client: &SfuApiClient, out: &mut W) -> Result<()> {
    match with_status(out, client.stats().await)? {
        Ok(reply) => print_json(out, &reply.body),
        Err(ApiError::Remote { message, .. }) => {
            writeln!(out, "Error: {message}")?;
            Ok(())
        }
        Err(ApiError::Status { body, .. }) => {
            let message = serde_json::from_str::<RemoteError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            writeln!(out, "Error: {message}")?;
            Ok(())
        }
        Err(err) => Err(err).context("failed to fetch stats"),
    }
}

/// Writes the status line for `result`, then hands it back untouched.
fn with_status<W: Write, T>(
    out: &mut W,
    result: Result<ApiReply<T>, ApiError>,
) -> Result<Result<ApiReply<T>, ApiError>> {
    let status = match &result {
        Ok(reply) => Some(reply.status),
        Err(err) => err.status(),
    };
    if let Some(status) = status {
        writeln!(out, "Status code: {status}")?;
    }
    Ok(result)
}

fn print_json<W: Write>(out: &mut W, value: &serde_json::Value) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}
