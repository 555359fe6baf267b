// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::console::{self, Target};
use crate::error::MismatchError;
use crate::{ceprintln, cprintln, STREAM_LOCK};
use std::panic::{self, AssertUnwindSafe};

fn originals() -> (Target, Target) {
    (
        console::current(Stream::Stdout),
        console::current(Stream::Stderr),
    )
}

fn interleaved() {
    cprintln!("hello");
    ceprintln!("out");
    cprintln!("there");
    ceprintln!("now");
}

fn mismatch(err: CaptureError) -> MismatchError {
    match err {
        CaptureError::Mismatch(mismatch) => mismatch,
        other => panic!("expected a mismatch, got {other:?}"),
    }
}

#[test]
fn test_options_builder() {
    let options = CaptureOptions::new().separate(true).fd(true);
    assert!(options.separate);
    assert!(options.fd);
    assert_eq!(CaptureOptions::new(), CaptureOptions::default());
}

#[test]
fn test_compare_strips() {
    let _lock = STREAM_LOCK.lock();
    let capture = OutputCapture::scoped(CaptureOptions::new(), || {
        cprintln!(" Bar! ");
    })
    .unwrap();
    capture.compare("Bar!").unwrap();
}

#[test]
fn test_stdout_and_stderr_are_interleaved() {
    let _lock = STREAM_LOCK.lock();
    let capture = OutputCapture::scoped(CaptureOptions::new(), interleaved).unwrap();

    assert_eq!(capture.captured().unwrap(), "hello\nout\nthere\nnow\n");
    capture.compare("hello\nout\nthere\nnow\n").unwrap();
    assert!(capture.stdout().unwrap().is_empty());
    assert!(capture.stderr().unwrap().is_empty());
}

#[test]
fn test_unicode() {
    let _lock = STREAM_LOCK.lock();
    let capture = OutputCapture::scoped(CaptureOptions::new(), || {
        cprintln!("\u{65e5}");
    })
    .unwrap();
    assert_eq!(capture.captured().unwrap(), "\u{65e5}\n");
    capture.compare("\u{65e5}\n").unwrap();
}

#[test]
fn test_separate_capture() {
    let _lock = STREAM_LOCK.lock();
    let capture =
        OutputCapture::scoped(CaptureOptions::new().separate(true), interleaved).unwrap();

    assert_eq!(capture.captured().unwrap(), "");
    assert_eq!(capture.stdout().unwrap(), "hello\nthere\n");
    assert_eq!(capture.stderr().unwrap(), "out\nnow\n");
    capture
        .compare_separate("hello\nthere\n", "out\nnow\n")
        .unwrap();
}

#[test]
fn test_separate_capture_requires_stream_expectations() {
    let _lock = STREAM_LOCK.lock();
    let capture =
        OutputCapture::scoped(CaptureOptions::new().separate(true), interleaved).unwrap();

    let err = mismatch(capture.compare("hello\nout\nthere\nnow").unwrap_err());
    assert_eq!(err.label(), None);
    assert_eq!(err.actual(), "");
}

#[test]
fn test_mismatch_is_labelled_with_stream() {
    let _lock = STREAM_LOCK.lock();
    let capture =
        OutputCapture::scoped(CaptureOptions::new().separate(true), interleaved).unwrap();

    let err = mismatch(
        capture
            .compare_separate("hello\nthere", "wrong")
            .unwrap_err(),
    );
    assert_eq!(err.label(), Some(Stream::Stderr));
    assert!(err.to_string().starts_with("stderr: "));

    let err = mismatch(capture.compare_separate("nope", "out\nnow").unwrap_err());
    assert_eq!(err.label(), Some(Stream::Stdout));
}

#[test]
fn test_compare_all() {
    let _lock = STREAM_LOCK.lock();
    let capture =
        OutputCapture::scoped(CaptureOptions::new().separate(true), interleaved).unwrap();

    let expectation = Expectation::new()
        .stdout("hello\nthere")
        .stderr("out\nnow");
    capture.compare_all(&expectation).unwrap();

    let err = mismatch(
        capture
            .compare_all(&expectation.clone().combined("anything"))
            .unwrap_err(),
    );
    assert_eq!(err.label(), None);
}

#[test]
fn test_captured_while_enabled() {
    let _lock = STREAM_LOCK.lock();
    let mut capture = OutputCapture::start(CaptureOptions::new()).unwrap();
    assert!(capture.is_enabled());

    cprintln!("one");
    assert_eq!(capture.captured().unwrap(), "one\n");
    cprintln!("two");
    assert_eq!(capture.captured().unwrap(), "one\ntwo\n");

    capture.disable().unwrap();
    assert!(!capture.is_enabled());
}

#[test]
fn test_original_restore() {
    let _lock = STREAM_LOCK.lock();
    let (out, err) = originals();
    {
        let _capture = OutputCapture::start(CaptureOptions::new()).unwrap();
        let (live_out, live_err) = originals();
        assert_ne!(live_out, out);
        assert_ne!(live_err, err);
        // Combined mode points both slots at the same buffer
        assert_eq!(live_out, live_err);
    }
    assert_eq!(originals(), (out, err));
}

#[test]
fn test_double_disable() {
    let _lock = STREAM_LOCK.lock();
    let (out, err) = originals();
    {
        let mut capture = OutputCapture::start(CaptureOptions::new()).unwrap();
        assert_ne!(originals(), (out.clone(), err.clone()));

        capture.disable().unwrap();
        assert_eq!(originals(), (out.clone(), err.clone()));

        capture.disable().unwrap();
        assert_eq!(originals(), (out.clone(), err.clone()));
    }
    assert_eq!(originals(), (out, err));
}

#[test]
fn test_double_enable() {
    let _lock = STREAM_LOCK.lock();
    let (out, err) = originals();
    {
        let mut capture = OutputCapture::start(CaptureOptions::new()).unwrap();
        capture.disable().unwrap();
        assert_eq!(originals(), (out.clone(), err.clone()));

        capture.enable().unwrap();
        let enabled = originals();
        assert_ne!(enabled, (out.clone(), err.clone()));

        capture.enable().unwrap();
        assert_eq!(originals(), enabled);
    }
    assert_eq!(originals(), (out, err));
}

#[test]
fn test_output_after_disable_is_not_captured() {
    let _lock = STREAM_LOCK.lock();
    let mut capture = OutputCapture::start(CaptureOptions::new()).unwrap();
    cprintln!("kept");
    capture.disable().unwrap();

    let later = crate::MemoryBuffer::new();
    let previous = console::replace(Stream::Stdout, Target::memory(later.clone()));
    cprintln!("dropped");
    console::replace(Stream::Stdout, previous);

    capture.compare("kept").unwrap();
    assert_eq!(later.text(), "dropped\n");
}

#[test]
fn test_restores_on_panic() {
    let _lock = STREAM_LOCK.lock();
    let (out, err) = originals();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let _ = OutputCapture::scoped(CaptureOptions::new(), || {
            cprintln!("before");
            panic!("boom");
        });
    }));

    assert!(result.is_err());
    assert_eq!(originals(), (out, err));
}

#[test]
fn test_nested_sessions_unwind_in_order() {
    let _lock = STREAM_LOCK.lock();
    let (out, err) = originals();
    {
        let outer = OutputCapture::start(CaptureOptions::new()).unwrap();
        cprintln!("outer");
        {
            let inner = OutputCapture::start(CaptureOptions::new()).unwrap();
            cprintln!("inner");
            inner.compare("inner").unwrap();
        }
        cprintln!("outer again");
        outer.compare("outer\nouter again").unwrap();
    }
    assert_eq!(originals(), (out, err));
}
