// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;

use crate::errors::ExecutorError;
use crate::executor::{Command, ExecutionOutcome};
use crate::traits::Executor;

/// State reported by `systemctl is-active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Running,
    Stopped,
    Failed,
    Unknown,
}

impl ServiceStatus {
    fn from_is_active(output: &str) -> Self {
        match output.trim() {
            "active" | "reloading" => ServiceStatus::Running,
            "inactive" => ServiceStatus::Stopped,
            "failed" => ServiceStatus::Failed,
            _ => ServiceStatus::Unknown,
        }
    }
}

/// A systemd unit on a node, driven through the node's executor.
#[derive(Clone)]
pub struct Service {
    name: String,
    executor: Arc<dyn Executor>,
}

impl Service {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> Result<(), ExecutorError> {
        self.systemctl("start")
    }

    pub fn stop(&self) -> Result<(), ExecutorError> {
        self.systemctl("stop")
    }

    pub fn restart(&self) -> Result<(), ExecutorError> {
        self.systemctl("restart")
    }

    /// Query the unit state.
    ///
    /// `is-active` exits non-zero for anything but an active unit, so the
    /// state is read from its output rather than its status. Transport
    /// failures are still errors.
    pub fn status(&self) -> Result<ServiceStatus, ExecutorError> {
        let mut execution = self.executor.submit(&self.command("is-active"))?;
        let (outcome, status) = {
            let output = execution.wait()?;
            (output.outcome, ServiceStatus::from_is_active(&output.stdout))
        };

        match outcome {
            ExecutionOutcome::Exited(_) => Ok(status),
            _ => execution.check().map(|_| ServiceStatus::Unknown),
        }
    }

    fn systemctl(&self, action: &str) -> Result<(), ExecutorError> {
        let mut execution = self.executor.submit(&self.command(action))?;
        execution.check().map(|_| ())
    }

    fn command(&self, action: &str) -> Command {
        Command::new(["systemctl", action, self.name.as_str()])
    }
}

impl fmt::Debug for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service")
            .field("name", &self.name)
            .field("executor", &self.executor.name())
            .finish()
    }
}

/// Factory for services
pub struct ServiceFactory;

impl ServiceFactory {
    /// Hosts without a `service` variable have no service to drive.
    pub fn create_service(executor: Arc<dyn Executor>, service_name: Option<&str>) -> Option<Service> {
        service_name
            .filter(|name| !name.trim().is_empty())
            .map(|name| Service {
                name: name.trim().to_string(),
                executor,
            })
    }
}
