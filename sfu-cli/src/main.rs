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

use anyhow::{anyhow, Context};
use clap::Parser;
use sfu_cli::cli_args::Opt;
use sfu_cli::commands;
use sfu_cli::config::Config;
use tracing::debug;
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only command output.
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    let opt = Opt::parse();

    let config = Config::from_env()
        .map_err(|e| anyhow!(e))
        .context("failed to load configuration")?
        .with_overrides(&opt);
    debug!(url = %config.api_url, timeout = ?config.timeout, "configuration loaded");

    let client = config.build_client().context("failed to build API client")?;
    let mut out = std::io::stdout();
    commands::run(&opt.command, &client, &mut out).await
}
