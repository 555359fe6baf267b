// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run a command with its output captured at the descriptor level and
//! compare it against expected files.

pub mod cli;
pub mod env;
pub mod report;
pub mod run;

pub use cli::Cli;
pub use report::Report;
pub use run::{execute, run_captured, RunError, RunOutcome};

/// Process exit codes
pub mod exit_codes {
    /// Output matched (or the command succeeded when nothing was expected)
    pub const SUCCESS: i32 = 0;
    /// Captured output differed from the expected output
    pub const MISMATCH: i32 = 1;
    /// The command could not be run or an expected file could not be read
    pub const ERROR: i32 = 2;
}
