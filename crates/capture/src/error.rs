// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for output capture.

use crate::console::Stream;
use similar::TextDiff;
use std::fmt;

/// Errors raised while capturing or comparing output.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("I/O error while capturing output: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(unix)]
    #[error("failed to redirect file descriptor: {0}")]
    Descriptor(#[from] nix::errno::Errno),

    #[error("descriptor capture is not supported on this platform")]
    Unsupported,

    #[error(transparent)]
    Mismatch(#[from] MismatchError),
}

/// Captured output did not match what was expected.
///
/// Both sides are stored after whitespace trimming. Single-line values
/// render as `expected != actual`; multi-line values render as a unified
/// diff.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MismatchError {
    label: Option<Stream>,
    expected: String,
    actual: String,
    binary: bool,
}

impl MismatchError {
    pub(crate) fn new(
        label: Option<Stream>,
        expected: impl Into<String>,
        actual: impl Into<String>,
        binary: bool,
    ) -> Self {
        Self {
            label,
            expected: expected.into(),
            actual: actual.into(),
            binary,
        }
    }

    /// Which separate stream mismatched; `None` for the combined buffer.
    pub fn label(&self) -> Option<Stream> {
        self.label
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn actual(&self) -> &str {
        &self.actual
    }

    /// Whether the comparison was made on raw bytes.
    pub fn is_binary(&self) -> bool {
        self.binary
    }
}

impl fmt::Display for MismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = self.label {
            write!(f, "{label}: ")?;
        }
        if self.expected.contains('\n') || self.actual.contains('\n') {
            let diff = TextDiff::from_lines(&self.expected, &self.actual);
            write!(
                f,
                "output differs\n{}",
                diff.unified_diff().header("expected", "actual")
            )
        } else {
            let prefix = if self.binary { "b" } else { "" };
            write!(
                f,
                "{prefix}{:?} != {prefix}{:?}",
                self.expected, self.actual
            )
        }
    }
}

impl std::error::Error for MismatchError {}
