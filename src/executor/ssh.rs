// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use std::process::{Command as ProcessCommand, Stdio};

use crate::config::consts::SSH_CONNECT_TIMEOUT_SECS;
use crate::errors::ExecutorError;
use crate::executor::{Command, Execution, ExecutorKind};
use crate::observability::messages::executor::CommandSubmitted;
use crate::observability::messages::StructuredLog;
use crate::traits::Executor;

/// Status the OpenSSH client exits with when the connection itself fails.
pub const SSH_TRANSPORT_FAILURE: i32 = 255;

/// Runs commands on a remote host through the `ssh` command line client.
///
/// Authentication is key based and non-interactive (`BatchMode=yes`); a
/// connection or authentication failure surfaces as
/// [`ExecutionOutcome::TransportFailed`](crate::executor::ExecutionOutcome::TransportFailed),
/// never as a failed remote command.
#[derive(Debug, Clone)]
pub struct SshExecutor {
    name: String,
    host: String,
    user: Option<String>,
    port: Option<u16>,
    identity_file: Option<PathBuf>,
    program: String,
}

impl SshExecutor {
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        Self {
            name: format!("ssh:{}", host),
            host,
            user: None,
            port: None,
            identity_file: None,
            program: "ssh".to_string(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_identity_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.identity_file = Some(path.into());
        self
    }

    /// Use a different ssh client binary.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Arguments handed to the ssh client for `command`.
    pub fn ssh_args(&self, command: &Command) -> Vec<String> {
        let mut args = vec![
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            "StrictHostKeyChecking=no".to_string(),
            "-o".to_string(),
            format!("ConnectTimeout={}", SSH_CONNECT_TIMEOUT_SECS),
        ];

        if let Some(port) = self.port {
            args.push("-p".to_string());
            args.push(port.to_string());
        }
        if let Some(identity) = &self.identity_file {
            args.push("-i".to_string());
            args.push(identity.display().to_string());
        }

        args.push(match &self.user {
            Some(user) => format!("{}@{}", user, self.host),
            None => self.host.clone(),
        });
        args.push("--".to_string());
        args.push(command.to_shell_line());
        args
    }
}

impl Executor for SshExecutor {
    fn submit(&self, command: &Command) -> Result<Execution, ExecutorError> {
        if command.program().is_none() {
            return Err(ExecutorError::EmptyCommand);
        }

        CommandSubmitted {
            executor: &self.name,
            command,
        }
        .log();

        let child = ProcessCommand::new(&self.program)
            .args(self.ssh_args(command))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ExecutorError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        Ok(Execution::spawned(
            command.clone(),
            &self.name,
            child,
            Some(SSH_TRANSPORT_FAILURE),
        ))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ExecutorKind {
        ExecutorKind::Ssh
    }
}
