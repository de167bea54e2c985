// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;

use crate::errors::ExecutorError;
use crate::executor::{Command, Execution};
use crate::traits::Executor;

/// A logical host and the executor that reaches it.
///
/// Nodes are owned by the instance; components keep an `Arc<Node>` to the
/// node they run on.
pub struct Node {
    hostname: String,
    ip: Option<String>,
    executor: Arc<dyn Executor>,
}

impl Node {
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn ip(&self) -> Option<&str> {
        self.ip.as_deref()
    }

    /// Address to connect to: the IP when known, the hostname otherwise.
    pub fn address(&self) -> &str {
        self.ip.as_deref().unwrap_or(&self.hostname)
    }

    pub fn executor(&self) -> &Arc<dyn Executor> {
        &self.executor
    }

    pub fn execute(&self, command: &Command) -> Result<Execution, ExecutorError> {
        self.executor.submit(command)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("hostname", &self.hostname)
            .field("ip", &self.ip)
            .field("executor", &self.executor.name())
            .finish()
    }
}

/// Factory for nodes
pub struct NodeFactory;

impl NodeFactory {
    pub fn create_node(hostname: &str, executor: Arc<dyn Executor>, ip: Option<&str>) -> Arc<Node> {
        Arc::new(Node {
            hostname: hostname.to_string(),
            ip: ip.map(str::to_string),
            executor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::ExecutionOutput;
    use crate::stub::StubExecutor;

    #[test]
    fn test_node_address_prefers_ip() {
        let executor: Arc<dyn Executor> = Arc::new(StubExecutor::new("stub"));

        let with_ip = NodeFactory::create_node("broker1", Arc::clone(&executor), Some("10.0.0.5"));
        assert_eq!(with_ip.hostname(), "broker1");
        assert_eq!(with_ip.ip(), Some("10.0.0.5"));
        assert_eq!(with_ip.address(), "10.0.0.5");

        let without_ip = NodeFactory::create_node("broker2", executor, None);
        assert_eq!(without_ip.ip(), None);
        assert_eq!(without_ip.address(), "broker2");
    }

    #[test]
    fn test_execute_goes_through_node_executor() {
        let stub = Arc::new(StubExecutor::new("stub").with_output(ExecutionOutput::exited(0, "root\n", "")));
        let node = NodeFactory::create_node("client1", stub.clone(), None);

        let mut execution = node.execute(&Command::new(["whoami"])).unwrap();

        assert!(execution.completed_successfully());
        assert_eq!(execution.executor(), "stub");
        assert_eq!(stub.command_lines(), vec!["whoami"]);
    }
}
