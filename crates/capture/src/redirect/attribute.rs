// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture by swapping the console slots for memory buffers.

use super::Slot;
use crate::buffer::MemoryBuffer;
use crate::console::{self, Stream, Target};

#[derive(Debug)]
pub(crate) struct AttributeRedirect {
    combined: Sink,
    stdout: Sink,
    stderr: Sink,
    original: Option<(Target, Target)>,
}

/// A buffer and the target that writes into it, created together so the
/// installed target keeps the same identity across re-enables.
#[derive(Debug)]
struct Sink {
    buffer: MemoryBuffer,
    target: Target,
}

impl Sink {
    fn new() -> Self {
        let buffer = MemoryBuffer::new();
        let target = Target::memory(buffer.clone());
        Self { buffer, target }
    }
}

impl AttributeRedirect {
    pub(crate) fn new() -> Self {
        Self {
            combined: Sink::new(),
            stdout: Sink::new(),
            stderr: Sink::new(),
            original: None,
        }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.original.is_some()
    }

    pub(crate) fn enable(&mut self, separate: bool) {
        if self.original.is_none() {
            self.original = Some((
                console::current(Stream::Stdout),
                console::current(Stream::Stderr),
            ));
        }
        let (out, err) = if separate {
            (&self.stdout.target, &self.stderr.target)
        } else {
            (&self.combined.target, &self.combined.target)
        };
        console::replace(Stream::Stdout, out.clone());
        console::replace(Stream::Stderr, err.clone());
    }

    pub(crate) fn disable(&mut self) {
        if let Some((out, err)) = self.original.take() {
            console::replace(Stream::Stdout, out);
            console::replace(Stream::Stderr, err);
        }
    }

    pub(crate) fn read(&self, slot: Slot) -> String {
        match slot {
            Slot::Combined => self.combined.buffer.text(),
            Slot::Stdout => self.stdout.buffer.text(),
            Slot::Stderr => self.stderr.buffer.text(),
        }
    }
}
