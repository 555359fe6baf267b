// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide standard stream slots.
//!
//! Rust's `print!` family always writes to the process streams, so code that
//! wants to be capturable without touching file descriptors writes through
//! these slots instead, either with [`stdout()`]/[`stderr()`] or with the
//! [`cprint!`](crate::cprint) family of macros. Attribute-mode capture swaps
//! the slot targets for in-memory buffers.

use crate::buffer::MemoryBuffer;
use parking_lot::RwLock;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, LazyLock};

/// One of the two standard output streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// Label used in diagnostics ("stdout" / "stderr").
    pub fn label(self) -> &'static str {
        match self {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

enum Sink {
    Process(Stream),
    Memory(MemoryBuffer),
}

/// Where a console slot currently sends its output.
///
/// Targets compare by identity: two handles are equal only if they were
/// cloned from the same target.
#[derive(Clone)]
pub struct Target(Arc<Sink>);

impl Target {
    fn process(stream: Stream) -> Self {
        Self(Arc::new(Sink::Process(stream)))
    }

    /// A target appending to the given buffer.
    pub fn memory(buffer: MemoryBuffer) -> Self {
        Self(Arc::new(Sink::Memory(buffer)))
    }

    /// Whether this target writes to a real process stream.
    pub fn is_process(&self) -> bool {
        matches!(*self.0, Sink::Process(_))
    }

    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        match &*self.0 {
            Sink::Process(Stream::Stdout) => io::stdout().lock().write_all(buf),
            Sink::Process(Stream::Stderr) => io::stderr().lock().write_all(buf),
            Sink::Memory(buffer) => {
                buffer.append(buf);
                Ok(())
            }
        }
    }

    fn flush(&self) -> io::Result<()> {
        match &*self.0 {
            Sink::Process(Stream::Stdout) => io::stdout().flush(),
            Sink::Process(Stream::Stderr) => io::stderr().flush(),
            Sink::Memory(_) => Ok(()),
        }
    }
}

impl PartialEq for Target {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Target {}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0 {
            Sink::Process(stream) => f.debug_tuple("Process").field(stream).finish(),
            Sink::Memory(buffer) => f
                .debug_struct("Memory")
                .field("len", &buffer.len())
                .finish(),
        }
    }
}

struct Slots {
    stdout: Target,
    stderr: Target,
}

impl Slots {
    fn get_mut(&mut self, stream: Stream) -> &mut Target {
        match stream {
            Stream::Stdout => &mut self.stdout,
            Stream::Stderr => &mut self.stderr,
        }
    }
}

static SLOTS: LazyLock<RwLock<Slots>> = LazyLock::new(|| {
    RwLock::new(Slots {
        stdout: Target::process(Stream::Stdout),
        stderr: Target::process(Stream::Stderr),
    })
});

/// The target currently installed for `stream`.
pub fn current(stream: Stream) -> Target {
    let slots = SLOTS.read();
    match stream {
        Stream::Stdout => slots.stdout.clone(),
        Stream::Stderr => slots.stderr.clone(),
    }
}

/// Install `target` for `stream`, returning the previous target.
pub fn replace(stream: Stream, target: Target) -> Target {
    std::mem::replace(SLOTS.write().get_mut(stream), target)
}

/// Write raw bytes to the current target of `stream`.
pub fn write(stream: Stream, buf: &[u8]) -> io::Result<()> {
    // Clone the handle so the slot lock is not held while writing.
    current(stream).write_all(buf)
}

/// Writer for the stdout slot.
pub fn stdout() -> ConsoleWriter {
    ConsoleWriter {
        stream: Stream::Stdout,
    }
}

/// Writer for the stderr slot.
pub fn stderr() -> ConsoleWriter {
    ConsoleWriter {
        stream: Stream::Stderr,
    }
}

/// [`io::Write`] implementation resolving the slot target on every call.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleWriter {
    stream: Stream,
}

impl ConsoleWriter {
    pub fn stream(&self) -> Stream {
        self.stream
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        write(self.stream, buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        current(self.stream).flush()
    }
}

#[doc(hidden)]
pub fn _print(stream: Stream, args: fmt::Arguments<'_>) {
    // Format first so a single print lands in one write.
    let text = args.to_string();
    let _ = write(stream, text.as_bytes());
}

/// Like [`print!`], but through the stdout console slot.
#[macro_export]
macro_rules! cprint {
    ($($arg:tt)*) => {
        $crate::console::_print($crate::console::Stream::Stdout, format_args!($($arg)*))
    };
}

/// Like [`println!`], but through the stdout console slot.
#[macro_export]
macro_rules! cprintln {
    () => {
        $crate::cprint!("\n")
    };
    ($($arg:tt)*) => {
        $crate::console::_print(
            $crate::console::Stream::Stdout,
            format_args!("{}\n", format_args!($($arg)*)),
        )
    };
}

/// Like [`eprint!`], but through the stderr console slot.
#[macro_export]
macro_rules! ceprint {
    ($($arg:tt)*) => {
        $crate::console::_print($crate::console::Stream::Stderr, format_args!($($arg)*))
    };
}

/// Like [`eprintln!`], but through the stderr console slot.
#[macro_export]
macro_rules! ceprintln {
    () => {
        $crate::ceprint!("\n")
    };
    ($($arg:tt)*) => {
        $crate::console::_print(
            $crate::console::Stream::Stderr,
            format_args!("{}\n", format_args!($($arg)*)),
        )
    };
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
