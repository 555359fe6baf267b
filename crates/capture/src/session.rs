// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped output capture sessions.

use crate::compare::check;
use crate::console::Stream;
use crate::error::CaptureError;
use crate::expected::{Captured, Expectation, Expected};
use crate::redirect::{Redirect, Slot};

/// How a session captures output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaptureOptions {
    /// Capture stdout and stderr into distinct buffers instead of one
    /// combined buffer. The combined buffer then stays empty.
    pub separate: bool,

    /// Redirect file descriptors 1 and 2 instead of the console slots, so
    /// child processes and native code writing to them are captured too.
    pub fd: bool,
}

impl CaptureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separate(mut self, separate: bool) -> Self {
        self.separate = separate;
        self
    }

    pub fn fd(mut self, fd: bool) -> Self {
        self.fd = fd;
        self
    }
}

/// A capture session.
///
/// The session is enabled when started and restores the original streams
/// when disabled or dropped, including during a panic unwind. Sessions
/// redirect process-wide state: only one may be active at a time.
#[derive(Debug)]
pub struct OutputCapture {
    options: CaptureOptions,
    redirect: Redirect,
}

impl OutputCapture {
    /// Create the buffers and start capturing.
    pub fn start(options: CaptureOptions) -> Result<Self, CaptureError> {
        let mut capture = Self {
            options,
            redirect: Redirect::new(options.fd)?,
        };
        capture.enable()?;
        Ok(capture)
    }

    /// Capture everything `f` prints, returning the stopped session.
    pub fn scoped<F: FnOnce()>(options: CaptureOptions, f: F) -> Result<Self, CaptureError> {
        let mut capture = Self::start(options)?;
        f();
        capture.disable()?;
        Ok(capture)
    }

    pub fn options(&self) -> CaptureOptions {
        self.options
    }

    pub fn is_enabled(&self) -> bool {
        self.redirect.is_enabled()
    }

    /// Redirect output into the session's buffers.
    ///
    /// The original streams are saved on the first call of each enable
    /// cycle only; calling again re-applies the redirection.
    pub fn enable(&mut self) -> Result<(), CaptureError> {
        // Log before redirecting, or the event lands in the capture.
        tracing::debug!(
            mode = self.redirect.mode(),
            separate = self.options.separate,
            "enabling output capture"
        );
        self.redirect.enable(self.options.separate)
    }

    /// Restore the original streams. Does nothing when already disabled.
    pub fn disable(&mut self) -> Result<(), CaptureError> {
        if !self.redirect.is_enabled() {
            return Ok(());
        }
        self.redirect.disable()?;
        tracing::debug!(mode = self.redirect.mode(), "disabled output capture");
        Ok(())
    }

    /// Everything written to the combined buffer so far.
    pub fn captured(&self) -> Result<Captured, CaptureError> {
        self.redirect.read(Slot::Combined)
    }

    /// Everything written to the stdout-only buffer so far.
    pub fn stdout(&self) -> Result<Captured, CaptureError> {
        self.redirect.read(Slot::Stdout)
    }

    /// Everything written to the stderr-only buffer so far.
    pub fn stderr(&self) -> Result<Captured, CaptureError> {
        self.redirect.read(Slot::Stderr)
    }

    /// Check the combined output, expecting nothing in the separate buffers.
    pub fn compare(&self, expected: impl Into<Expected>) -> Result<(), CaptureError> {
        self.compare_all(&Expectation::new().combined(expected))
    }

    /// Check the separate buffers, expecting nothing in the combined one.
    pub fn compare_separate(
        &self,
        stdout: impl Into<Expected>,
        stderr: impl Into<Expected>,
    ) -> Result<(), CaptureError> {
        self.compare_all(&Expectation::new().stdout(stdout).stderr(stderr))
    }

    /// Check all three buffers, failing on the first mismatch.
    ///
    /// Leading and trailing whitespace is ignored on both sides.
    pub fn compare_all(&self, expectation: &Expectation) -> Result<(), CaptureError> {
        let checks = [
            (None, &expectation.combined, Slot::Combined),
            (Some(Stream::Stdout), &expectation.stdout, Slot::Stdout),
            (Some(Stream::Stderr), &expectation.stderr, Slot::Stderr),
        ];
        for (label, expected, slot) in checks {
            let actual = self.redirect.read(slot)?;
            check(label, expected, &actual)?;
        }
        Ok(())
    }
}

impl Drop for OutputCapture {
    fn drop(&mut self) {
        if let Err(error) = self.disable() {
            tracing::warn!(%error, "failed to restore output streams");
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
