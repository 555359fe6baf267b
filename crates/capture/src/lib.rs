// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture stdout and stderr for test assertions.
//!
//! [`OutputCapture`] redirects the process's standard streams for the
//! lifetime of a session and restores them when the session is disabled or
//! dropped. Two strategies are available:
//!
//! - attribute mode (default) swaps the [`console`] slots for in-memory
//!   buffers. Code under test prints through [`cprintln!`] and friends.
//! - descriptor mode (`fd`) duplicates file descriptors 1 and 2 onto
//!   temporary files, so child processes and anything else writing straight
//!   to the descriptors is captured too.
//!
//! ```no_run
//! use output_capture::{cprintln, CaptureOptions, OutputCapture};
//!
//! # fn main() -> Result<(), output_capture::CaptureError> {
//! let capture = OutputCapture::scoped(CaptureOptions::new(), || {
//!     cprintln!(" Bar! ");
//! })?;
//! capture.compare("Bar!")?;
//! # Ok(())
//! # }
//! ```

mod buffer;
mod compare;
pub mod console;
mod error;
mod expected;
mod redirect;
mod session;

pub use buffer::{FileBuffer, MemoryBuffer};
pub use console::{Stream, Target};
pub use error::{CaptureError, MismatchError};
pub use expected::{Captured, Expectation, Expected};
pub use session::{CaptureOptions, OutputCapture};

/// Serializes tests that touch the process-wide stream slots.
#[cfg(test)]
pub(crate) static STREAM_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());
