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

//! Command-line front end for the SFU meeting REST API.
//!
//! The binary is a thin shell over [`commands::run`]; the command
//! implementations write to any [`std::io::Write`] so they can be driven
//! from tests.

pub mod cli_args;
pub mod commands;
pub mod config;
