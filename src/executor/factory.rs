// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::config::ExecutorConfig;
use crate::executor::{LocalExecutor, SshExecutor};
use crate::traits::Executor;

/// Execution backend selected by a host's `executor` variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutorKind {
    #[default]
    Local,
    Ssh,
}

impl ExecutorKind {
    /// Case-insensitive lookup; `remote` is accepted as an alias for `ssh`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Some(ExecutorKind::Local),
            "ssh" | "remote" => Some(ExecutorKind::Ssh),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutorKind::Local => "local",
            ExecutorKind::Ssh => "ssh",
        }
    }
}

impl fmt::Display for ExecutorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Factory for creating executors from host configuration
pub struct ExecutorFactory;

impl ExecutorFactory {
    /// Create the executor a host declares.
    ///
    /// Remote executors connect to `address` when the inventory provides one
    /// and fall back to the inventory hostname otherwise.
    pub fn create_executor(
        hostname: &str,
        address: Option<&str>,
        config: &ExecutorConfig,
    ) -> Arc<dyn Executor> {
        match config.kind {
            ExecutorKind::Local => Arc::new(LocalExecutor::named(format!("local:{}", hostname))),
            ExecutorKind::Ssh => {
                let mut ssh = SshExecutor::new(address.unwrap_or(hostname))
                    .with_name(format!("ssh:{}", hostname));
                if let Some(user) = &config.user {
                    ssh = ssh.with_user(user);
                }
                if let Some(port) = config.port {
                    ssh = ssh.with_port(port);
                }
                if let Some(identity) = &config.identity_file {
                    ssh = ssh.with_identity_file(identity);
                }
                Arc::new(ssh)
            }
        }
    }
}
