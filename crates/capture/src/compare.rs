// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whitespace-insensitive comparison of captured output.

use crate::console::Stream;
use crate::error::MismatchError;
use crate::expected::{Captured, Expected};

/// Compare one buffer against its expectation, ignoring leading and
/// trailing whitespace on both sides.
///
/// Text is compared as text. As soon as either side is binary both sides
/// are compared as bytes, with text encoded as UTF-8 and only ASCII
/// whitespace trimmed.
pub(crate) fn check(
    label: Option<Stream>,
    expected: &Expected,
    actual: &Captured,
) -> Result<(), MismatchError> {
    match (expected, actual) {
        (Expected::Text(expected), Captured::Text(actual)) => {
            let (expected, actual) = (expected.trim(), actual.trim());
            if expected == actual {
                Ok(())
            } else {
                Err(MismatchError::new(label, expected, actual, false))
            }
        }
        _ => {
            let expected = trim_bytes(expected_bytes(expected));
            let actual = trim_bytes(actual.as_bytes());
            if expected == actual {
                Ok(())
            } else {
                Err(MismatchError::new(
                    label,
                    String::from_utf8_lossy(expected),
                    String::from_utf8_lossy(actual),
                    true,
                ))
            }
        }
    }
}

fn expected_bytes(expected: &Expected) -> &[u8] {
    match expected {
        Expected::Text(text) => text.as_bytes(),
        Expected::Bytes(bytes) => bytes,
    }
}

/// Strip ASCII whitespace from both ends, vertical tab included.
fn trim_bytes(bytes: &[u8]) -> &[u8] {
    let is_space = |b: &u8| b.is_ascii_whitespace() || *b == 0x0b;
    let Some(start) = bytes.iter().position(|b| !is_space(b)) else {
        return &[];
    };
    let end = bytes.iter().rposition(|b| !is_space(b)).map_or(start, |i| i + 1);
    &bytes[start..end]
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
