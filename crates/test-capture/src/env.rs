// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables read by test-capture.

/// `TEST_CAPTURE_LOG` — tracing filter directive (e.g. `debug`).
pub const TEST_CAPTURE_LOG: &str = "TEST_CAPTURE_LOG";

/// Filter used when neither `--log` nor `TEST_CAPTURE_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";
