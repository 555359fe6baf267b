// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured and expected output values.

use std::borrow::Cow;

/// Output read back from a capture buffer.
///
/// Attribute-mode buffers hold text, descriptor-mode buffers hold raw bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Captured {
    Text(String),
    Bytes(Vec<u8>),
}

impl Captured {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Captured::Text(text) => text.as_bytes(),
            Captured::Bytes(bytes) => bytes,
        }
    }

    /// The captured text, if this came from a text buffer.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Captured::Text(text) => Some(text),
            Captured::Bytes(_) => None,
        }
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        match self {
            Captured::Text(text) => Cow::Borrowed(text),
            Captured::Bytes(bytes) => String::from_utf8_lossy(bytes),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Captured::Text(text) => text.into_bytes(),
            Captured::Bytes(bytes) => bytes,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Captured::Bytes(_))
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl PartialEq<str> for Captured {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Captured {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<[u8]> for Captured {
    fn eq(&self, other: &[u8]) -> bool {
        self.is_binary() && self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for Captured {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.is_binary() && self.as_bytes() == other.as_slice()
    }
}

/// Output a test expects to have been captured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expected {
    Text(String),
    Bytes(Vec<u8>),
}

impl Default for Expected {
    fn default() -> Self {
        Expected::Text(String::new())
    }
}

impl From<&str> for Expected {
    fn from(text: &str) -> Self {
        Expected::Text(text.to_string())
    }
}

impl From<String> for Expected {
    fn from(text: String) -> Self {
        Expected::Text(text)
    }
}

impl From<&String> for Expected {
    fn from(text: &String) -> Self {
        Expected::Text(text.clone())
    }
}

impl From<&[u8]> for Expected {
    fn from(bytes: &[u8]) -> Self {
        Expected::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Expected {
    fn from(bytes: &[u8; N]) -> Self {
        Expected::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Expected {
    fn from(bytes: Vec<u8>) -> Self {
        Expected::Bytes(bytes)
    }
}

/// Expected contents of all three capture buffers.
///
/// Unset buffers are expected to be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expectation {
    pub combined: Expected,
    pub stdout: Expected,
    pub stderr: Expected,
}

impl Expectation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn combined(mut self, expected: impl Into<Expected>) -> Self {
        self.combined = expected.into();
        self
    }

    pub fn stdout(mut self, expected: impl Into<Expected>) -> Self {
        self.stdout = expected.into();
        self
    }

    pub fn stderr(mut self, expected: impl Into<Expected>) -> Self {
        self.stderr = expected.into();
        self
    }
}
