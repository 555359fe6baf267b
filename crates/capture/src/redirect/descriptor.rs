// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture by pointing file descriptors 1 and 2 at temporary files.

use super::Slot;
use crate::buffer::FileBuffer;
use crate::error::CaptureError;
use nix::unistd::dup2;
use std::io::{self, Write};
use std::os::fd::{AsFd, AsRawFd, OwnedFd, RawFd};

#[derive(Debug)]
pub(crate) struct DescriptorRedirect {
    combined: FileBuffer,
    stdout: FileBuffer,
    stderr: FileBuffer,
    /// Duplicates of the descriptors that were live before enabling.
    original: Option<(OwnedFd, OwnedFd)>,
}

impl DescriptorRedirect {
    pub(crate) fn new() -> Result<Self, CaptureError> {
        Ok(Self {
            combined: FileBuffer::new()?,
            stdout: FileBuffer::new()?,
            stderr: FileBuffer::new()?,
            original: None,
        })
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.original.is_some()
    }

    pub(crate) fn enable(&mut self, separate: bool) -> Result<(), CaptureError> {
        // Anything std has buffered belongs to the descriptor it was meant for.
        flush_std()?;
        if self.original.is_none() {
            let out = io::stdout().as_fd().try_clone_to_owned()?;
            let err = io::stderr().as_fd().try_clone_to_owned()?;
            self.original = Some((out, err));
        }
        let (out, err) = if separate {
            (&self.stdout, &self.stderr)
        } else {
            (&self.combined, &self.combined)
        };
        dup2(out.file().as_raw_fd(), stdout_fd())?;
        dup2(err.file().as_raw_fd(), stderr_fd())?;
        Ok(())
    }

    pub(crate) fn disable(&mut self) -> Result<(), CaptureError> {
        let Some((out, err)) = self.original.take() else {
            return Ok(());
        };
        match restore(&out, &err) {
            // Dropping the duplicates closes them.
            Ok(()) => Ok(()),
            Err(error) => {
                self.original = Some((out, err));
                Err(error)
            }
        }
    }

    pub(crate) fn read(&self, slot: Slot) -> Result<Vec<u8>, CaptureError> {
        let buffer = match slot {
            Slot::Combined => &self.combined,
            Slot::Stdout => &self.stdout,
            Slot::Stderr => &self.stderr,
        };
        Ok(buffer.contents()?)
    }
}

fn restore(out: &OwnedFd, err: &OwnedFd) -> Result<(), CaptureError> {
    flush_std()?;
    dup2(out.as_raw_fd(), stdout_fd())?;
    dup2(err.as_raw_fd(), stderr_fd())?;
    Ok(())
}

fn flush_std() -> io::Result<()> {
    io::stdout().flush()?;
    io::stderr().flush()
}

fn stdout_fd() -> RawFd {
    io::stdout().as_raw_fd()
}

fn stderr_fd() -> RawFd {
    io::stderr().as_raw_fd()
}
