// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Run a command with stdout and stderr captured and compare the output
#[derive(Parser, Debug, Clone)]
#[command(name = "test-capture")]
#[command(about = "Capture and compare command output")]
pub struct Cli {
    /// Capture stdout and stderr separately
    #[arg(long)]
    pub separate: bool,

    /// File holding the expected combined output (not with --separate)
    #[arg(long, value_name = "FILE", conflicts_with_all = ["separate", "expected_stdout", "expected_stderr"])]
    pub expected: Option<PathBuf>,

    /// File holding the expected stdout (implies --separate)
    #[arg(long, value_name = "FILE")]
    pub expected_stdout: Option<PathBuf>,

    /// File holding the expected stderr (implies --separate)
    #[arg(long, value_name = "FILE")]
    pub expected_stderr: Option<PathBuf>,

    /// Print a JSON report instead of the captured output
    #[arg(long)]
    pub json: bool,

    /// Tracing filter for diagnostics written to stderr
    #[arg(long, value_name = "FILTER", env = crate::env::TEST_CAPTURE_LOG, default_value = crate::env::DEFAULT_LOG_FILTER)]
    pub log: String,

    /// Command to run, followed by its arguments
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// Whether stdout and stderr go to separate buffers.
    pub fn separates(&self) -> bool {
        self.separate || self.expected_stdout.is_some() || self.expected_stderr.is_some()
    }

    /// Whether any expected-output file was given.
    pub fn has_expectations(&self) -> bool {
        self.expected.is_some() || self.expected_stdout.is_some() || self.expected_stderr.is_some()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
