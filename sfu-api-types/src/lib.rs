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

//! Shared API types for the SFU REST API.
//!
//! This crate defines the wire contract between the SFU service's
//! `/api/v1` endpoints and their consumers. It is transport-agnostic:
//! no HTTP client, no runtime.

pub mod requests;
pub mod responses;
mod string_bool;

pub use requests::{JoinRequest, TokenRequest};
pub use responses::{JoinResponse, MeetingResponse, RemoteError, TokenResponse};
