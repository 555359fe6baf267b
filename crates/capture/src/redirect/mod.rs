// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection strategies behind [`OutputCapture`](crate::OutputCapture).

mod attribute;
#[cfg(unix)]
mod descriptor;

use crate::error::CaptureError;
use crate::expected::Captured;

pub(crate) use attribute::AttributeRedirect;
#[cfg(unix)]
pub(crate) use descriptor::DescriptorRedirect;

/// One of the three capture buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Combined,
    Stdout,
    Stderr,
}

/// Strategy selected by [`CaptureOptions::fd`](crate::CaptureOptions::fd).
#[derive(Debug)]
pub(crate) enum Redirect {
    Attribute(AttributeRedirect),
    #[cfg(unix)]
    Descriptor(DescriptorRedirect),
}

impl Redirect {
    pub(crate) fn new(fd: bool) -> Result<Self, CaptureError> {
        if !fd {
            return Ok(Redirect::Attribute(AttributeRedirect::new()));
        }
        #[cfg(unix)]
        {
            Ok(Redirect::Descriptor(DescriptorRedirect::new()?))
        }
        #[cfg(not(unix))]
        {
            Err(CaptureError::Unsupported)
        }
    }

    pub(crate) fn mode(&self) -> &'static str {
        match self {
            Redirect::Attribute(_) => "attribute",
            #[cfg(unix)]
            Redirect::Descriptor(_) => "descriptor",
        }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        match self {
            Redirect::Attribute(redirect) => redirect.is_enabled(),
            #[cfg(unix)]
            Redirect::Descriptor(redirect) => redirect.is_enabled(),
        }
    }

    pub(crate) fn enable(&mut self, separate: bool) -> Result<(), CaptureError> {
        match self {
            Redirect::Attribute(redirect) => {
                redirect.enable(separate);
                Ok(())
            }
            #[cfg(unix)]
            Redirect::Descriptor(redirect) => redirect.enable(separate),
        }
    }

    pub(crate) fn disable(&mut self) -> Result<(), CaptureError> {
        match self {
            Redirect::Attribute(redirect) => {
                redirect.disable();
                Ok(())
            }
            #[cfg(unix)]
            Redirect::Descriptor(redirect) => redirect.disable(),
        }
    }

    pub(crate) fn read(&self, slot: Slot) -> Result<Captured, CaptureError> {
        match self {
            Redirect::Attribute(redirect) => Ok(Captured::Text(redirect.read(slot))),
            #[cfg(unix)]
            Redirect::Descriptor(redirect) => Ok(Captured::Bytes(redirect.read(slot)?)),
        }
    }
}
