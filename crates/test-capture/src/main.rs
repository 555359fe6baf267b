// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test capture CLI entry point.

use clap::Parser;
use std::io;
use std::process::ExitCode;
use test_capture::{exit_codes, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::new(&cli.log))
        .with_target(false)
        .init();

    let code = match test_capture::execute(&cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("test-capture: {err}");
            exit_codes::ERROR
        }
    };
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
