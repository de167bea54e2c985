// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::process::{Command as ProcessCommand, Stdio};

use crate::errors::ExecutorError;
use crate::executor::{Command, Execution, ExecutorKind};
use crate::observability::messages::executor::CommandSubmitted;
use crate::observability::messages::StructuredLog;
use crate::traits::Executor;

/// Runs commands as child processes of the harness itself.
#[derive(Debug, Clone)]
pub struct LocalExecutor {
    name: String,
}

impl LocalExecutor {
    pub fn new() -> Self {
        Self::named("local")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for LocalExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for LocalExecutor {
    fn submit(&self, command: &Command) -> Result<Execution, ExecutorError> {
        let program = command.program().ok_or(ExecutorError::EmptyCommand)?;

        CommandSubmitted {
            executor: &self.name,
            command,
        }
        .log();

        let child = ProcessCommand::new(program)
            .args(&command.args()[1..])
            .envs(command.envs().iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ExecutorError::Spawn {
                program: program.to_string(),
                source,
            })?;

        Ok(Execution::spawned(command.clone(), &self.name, child, None))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ExecutorKind {
        ExecutorKind::Local
    }
}
