// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! External messaging clients.
//!
//! Each client is one executable of a client suite (`cli-proton-python`,
//! `cli-qpid`, `cli-rhea`) in one role, run on its node through the node's
//! executor.

mod factory;
mod options;

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

pub use factory::ClientFactory;
pub use options::ClientOptions;

use crate::components::protocols::Protocol;
use crate::components::{ClientImplementation, ImplementationKey};
use crate::config::ClientConfig;
use crate::errors::ExecutorError;
use crate::executor::{Command, Execution};
use crate::system::Node;
use crate::traits::Executor;

/// What a client does once connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientRole {
    Sender,
    Receiver,
    /// Opens connections without moving messages.
    Connector,
}

impl ClientRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientRole::Sender => "sender",
            ClientRole::Receiver => "receiver",
            ClientRole::Connector => "connector",
        }
    }
}

impl fmt::Display for ClientRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug)]
pub struct Client {
    name: String,
    implementation: ClientImplementation,
    role: ClientRole,
    node: Arc<Node>,
    executor: Arc<dyn Executor>,
    config: ClientConfig,
}

impl Client {
    /// A client named `<hostname>:<implementation>-<role>`.
    pub fn new(
        implementation: ClientImplementation,
        role: ClientRole,
        node: Arc<Node>,
        executor: Arc<dyn Executor>,
        config: ClientConfig,
    ) -> Self {
        Self {
            name: format!("{}:{}-{}", node.hostname(), implementation.as_str(), role),
            implementation,
            role,
            node,
            executor,
            config,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn implementation(&self) -> ClientImplementation {
        self.implementation
    }

    pub fn role(&self) -> ClientRole {
        self.role
    }

    pub fn is_sender(&self) -> bool {
        self.role == ClientRole::Sender
    }

    pub fn is_receiver(&self) -> bool {
        self.role == ClientRole::Receiver
    }

    pub fn node(&self) -> &Arc<Node> {
        &self.node
    }

    pub fn executor(&self) -> &Arc<dyn Executor> {
        &self.executor
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn supported_protocols(&self) -> &'static [Protocol] {
        self.implementation.supported_protocols()
    }

    /// Executable name, e.g. `cli-proton-python-sender`.
    pub fn executable(&self) -> String {
        format!("{}-{}", self.implementation.cli_prefix(), self.role)
    }

    pub fn command(&self, options: &ClientOptions) -> Command {
        let command = Command::new(std::iter::once(self.executable()).chain(options.to_args()));
        match options.command_timeout() {
            Some(timeout) => command.with_timeout(timeout),
            None => command,
        }
    }

    /// Start the client on its node. The caller waits on the execution.
    pub fn run(&self, options: &ClientOptions) -> Result<Execution, ExecutorError> {
        self.executor.submit(&self.command(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::ExecutionOutput;
    use crate::stub::StubExecutor;
    use crate::system::NodeFactory;
    use std::time::Duration;

    fn client(role: ClientRole, stub: Arc<StubExecutor>) -> Client {
        let node = NodeFactory::create_node("client1", stub.clone(), None);
        Client::new(ClientImplementation::Python, role, node, stub, ClientConfig::default())
    }

    #[test]
    fn test_names_and_roles() {
        let stub = Arc::new(StubExecutor::new("stub"));
        let sender = client(ClientRole::Sender, stub.clone());
        let receiver = client(ClientRole::Receiver, stub);

        assert_eq!(sender.name(), "client1:python-sender");
        assert_eq!(sender.executable(), "cli-proton-python-sender");
        assert!(sender.is_sender());
        assert!(!sender.is_receiver());
        assert!(receiver.is_receiver());
    }

    #[test]
    fn test_command_line() {
        let stub = Arc::new(StubExecutor::new("stub"));
        let sender = client(ClientRole::Sender, stub);
        let options = ClientOptions::new("amqp://10.0.0.5:5672", "q1")
            .with_count(10)
            .with_timeout(Duration::from_secs(5))
            .with_msg_content("hello world");

        let command = sender.command(&options);

        assert_eq!(
            command.to_shell_line(),
            "cli-proton-python-sender --broker-url amqp://10.0.0.5:5672 --address q1 --count 10 --timeout 5 --msg-content 'hello world'"
        );
        assert_eq!(command.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_run_submits_through_executor() {
        let stub = Arc::new(StubExecutor::new("stub").with_output(ExecutionOutput::exited(0, "", "")));
        let receiver = client(ClientRole::Receiver, stub.clone());

        let mut execution = receiver
            .run(&ClientOptions::new("amqp://broker1:5672", "q1").with_log_msgs("dict"))
            .unwrap();

        assert!(execution.completed_successfully());
        assert_eq!(
            stub.command_lines(),
            vec!["cli-proton-python-receiver --broker-url amqp://broker1:5672 --address q1 --log-msgs dict"]
        );
    }
}
