// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;

#[test]
fn test_memory_buffer_starts_empty() {
    let buffer = MemoryBuffer::new();
    assert!(buffer.is_empty());
    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.text(), "");
}

#[test]
fn test_memory_buffer_appends_in_order() {
    let buffer = MemoryBuffer::new();
    buffer.append(b"hello ");
    buffer.append(b"world");
    assert_eq!(buffer.contents(), b"hello world");
    assert_eq!(buffer.text(), "hello world");
}

#[test]
fn test_memory_buffer_clones_share_storage() {
    let buffer = MemoryBuffer::new();
    let clone = buffer.clone();
    clone.append(b"shared");
    assert_eq!(buffer.text(), "shared");
    assert_eq!(buffer.len(), 6);
}

#[test]
fn test_memory_buffer_invalid_utf8_is_lossy() {
    let buffer = MemoryBuffer::new();
    buffer.append(&[b'a', 0xff, b'b']);
    assert_eq!(buffer.text(), "a\u{fffd}b");
    assert_eq!(buffer.contents(), vec![b'a', 0xff, b'b']);
}

#[test]
fn test_file_buffer_reads_back_appends() {
    let buffer = FileBuffer::new().unwrap();
    assert!(buffer.contents().unwrap().is_empty());

    buffer.append(b"out").unwrap();
    buffer.append(b"err").unwrap();
    assert_eq!(buffer.contents().unwrap(), b"outerr");
}

#[test]
fn test_file_buffer_read_does_not_disturb_appends() {
    let buffer = FileBuffer::new().unwrap();
    buffer.append(b"first\n").unwrap();
    assert_eq!(buffer.contents().unwrap(), b"first\n");

    buffer.append(b"second\n").unwrap();
    assert_eq!(buffer.contents().unwrap(), b"first\nsecond\n");
    // Reading twice is stable
    assert_eq!(buffer.contents().unwrap(), b"first\nsecond\n");
}

proptest! {
    #[test]
    fn prop_memory_buffer_text_round_trips(s in ".*") {
        let buffer = MemoryBuffer::new();
        buffer.append(s.as_bytes());
        prop_assert_eq!(buffer.text(), s);
    }
}
