// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Running a command under descriptor-level capture.

use crate::cli::Cli;
use crate::exit_codes;
use crate::report::Report;
use output_capture::{CaptureError, CaptureOptions, Expectation, OutputCapture};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::process::Command;

/// Errors that stop a run before a verdict is reached.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read expected output from {}: {source}", path.display())]
    Expected {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// A finished command and the session that captured it.
#[derive(Debug)]
pub struct RunOutcome {
    /// Exit code, or `None` if the command was killed by a signal
    pub status: Option<i32>,
    pub capture: OutputCapture,
}

/// Run `command` with stdout and stderr captured.
///
/// The child inherits the redirected descriptors. The returned session is
/// already disabled.
pub async fn run_captured(
    command: &[String],
    options: CaptureOptions,
) -> Result<RunOutcome, RunError> {
    let Some((program, args)) = command.split_first() else {
        return Err(RunError::Spawn {
            command: String::new(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty command"),
        });
    };

    let mut capture = OutputCapture::start(options.fd(true))?;
    let status = Command::new(program).args(args).status().await;
    // Restore before reporting anything, success or not.
    capture.disable()?;

    let status = status.map_err(|source| RunError::Spawn {
        command: command.join(" "),
        source,
    })?;
    Ok(RunOutcome {
        status: status.code(),
        capture,
    })
}

/// Run the command described by `cli` and return the process exit code.
pub async fn execute(cli: &Cli) -> Result<i32, RunError> {
    let expectation = load_expectation(cli).await?;
    let options = CaptureOptions::new().fd(true).separate(cli.separates());

    tracing::info!(command = ?cli.command, separate = options.separate, "running command");
    let outcome = run_captured(&cli.command, options).await?;
    tracing::info!(status = ?outcome.status, "command finished");

    if cli.json {
        let report = Report::new(&cli.command, &outcome)?;
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    }

    let Some(expectation) = expectation else {
        if !cli.json {
            echo(&outcome.capture, options.separate)?;
        }
        return Ok(outcome.status.unwrap_or(exit_codes::ERROR));
    };

    match outcome.capture.compare_all(&expectation) {
        Ok(()) => Ok(exit_codes::SUCCESS),
        Err(CaptureError::Mismatch(mismatch)) => {
            tracing::debug!(label = ?mismatch.label(), "output mismatch");
            writeln!(io::stderr(), "{mismatch}")?;
            Ok(exit_codes::MISMATCH)
        }
        Err(error) => Err(error.into()),
    }
}

async fn load_expectation(cli: &Cli) -> Result<Option<Expectation>, RunError> {
    if !cli.has_expectations() {
        return Ok(None);
    }
    let mut expectation = Expectation::new();
    if let Some(path) = &cli.expected {
        expectation = expectation.combined(read_expected(path).await?);
    }
    if let Some(path) = &cli.expected_stdout {
        expectation = expectation.stdout(read_expected(path).await?);
    }
    if let Some(path) = &cli.expected_stderr {
        expectation = expectation.stderr(read_expected(path).await?);
    }
    Ok(Some(expectation))
}

async fn read_expected(path: &Path) -> Result<Vec<u8>, RunError> {
    tokio::fs::read(path)
        .await
        .map_err(|source| RunError::Expected {
            path: path.to_path_buf(),
            source,
        })
}

fn echo(capture: &OutputCapture, separate: bool) -> Result<(), RunError> {
    if separate {
        io::stdout().write_all(&capture.stdout()?.into_bytes())?;
        io::stderr().write_all(&capture.stderr()?.into_bytes())?;
    } else {
        io::stdout().write_all(&capture.captured()?.into_bytes())?;
    }
    io::stdout().flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
