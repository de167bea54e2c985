// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for command execution events.

use std::fmt::{Display, Formatter};
use std::time::Duration;

use tracing::Span;

use crate::executor::{Command, ExecutionOutcome};
use crate::observability::messages::StructuredLog;

/// A command was handed to an executor.
///
/// # Log Level
/// `debug!` - Routine, one per command
pub struct CommandSubmitted<'a> {
    pub executor: &'a str,
    pub command: &'a Command,
}

impl Display for CommandSubmitted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Executor '{}' submitting: {}", self.executor, self.command)
    }
}

impl StructuredLog for CommandSubmitted<'_> {
    fn log(&self) {
        tracing::debug!(
            executor = self.executor,
            command = %self.command,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "command",
            span_name = name,
            executor = self.executor,
            command = %self.command,
        )
    }
}

/// A command reached a final state.
///
/// # Log Level
/// `debug!` on a zero exit, `warn!` otherwise
pub struct CommandCompleted<'a> {
    pub executor: &'a str,
    pub command: &'a Command,
    pub outcome: ExecutionOutcome,
    pub duration: Duration,
}

impl Display for CommandCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Executor '{}' finished '{}': outcome={:?}, duration={:?}",
            self.executor, self.command, self.outcome, self.duration
        )
    }
}

impl StructuredLog for CommandCompleted<'_> {
    fn log(&self) {
        if self.outcome == ExecutionOutcome::Exited(0) {
            tracing::debug!(
                executor = self.executor,
                command = %self.command,
                outcome = ?self.outcome,
                duration_ms = self.duration.as_millis() as u64,
                "{}", self
            );
        } else {
            tracing::warn!(
                executor = self.executor,
                command = %self.command,
                outcome = ?self.outcome,
                duration_ms = self.duration.as_millis() as u64,
                "{}", self
            );
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "command",
            span_name = name,
            executor = self.executor,
            outcome = ?self.outcome,
        )
    }
}
