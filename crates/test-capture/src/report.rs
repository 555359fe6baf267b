// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON report of a captured run.

use crate::run::RunOutcome;
use output_capture::CaptureError;
use serde::{Deserialize, Serialize};

/// What a command printed, as emitted by `--json`.
///
/// Output is decoded as UTF-8, replacing invalid sequences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub command: Vec<String>,
    /// Exit code, `null` if the command was killed by a signal
    pub status: Option<i32>,
    pub separate: bool,
    pub combined: String,
    pub stdout: String,
    pub stderr: String,
}

impl Report {
    pub fn new(command: &[String], outcome: &RunOutcome) -> Result<Self, CaptureError> {
        let capture = &outcome.capture;
        Ok(Self {
            command: command.to_vec(),
            status: outcome.status,
            separate: capture.options().separate,
            combined: capture.captured()?.to_string_lossy().into_owned(),
            stdout: capture.stdout()?.to_string_lossy().into_owned(),
            stderr: capture.stderr()?.to_string_lossy().into_owned(),
        })
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
