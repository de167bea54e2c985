// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for command submission and execution.
//!
//! "Could not run" and "ran and failed" are separate variants: `Spawn` and
//! `Transport` mean the command never reached its target, `CommandFailed`
//! means it did and returned a non-zero status.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutorError {
    /// A command with no program was submitted.
    #[error("cannot submit an empty command")]
    EmptyCommand,

    /// The process could not be started in the local OS context.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The remote transport (e.g. ssh) could not deliver the command.
    #[error("executor '{executor}' could not reach its target (status {code}): {stderr}")]
    Transport {
        executor: String,
        code: i32,
        stderr: String,
    },

    /// The command ran but exited with a non-zero status.
    #[error("command '{command}' failed with status {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    /// The command was killed by a signal.
    #[error("command '{command}' was terminated by a signal")]
    Signaled { command: String },

    /// The command exceeded its timeout and was killed.
    #[error("command '{command}' timed out after {timeout:?}")]
    TimedOut { command: String, timeout: Duration },

    /// Waiting on or talking to the child process failed.
    #[error("I/O error while running command: {0}")]
    Io(#[from] std::io::Error),
}
