// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod factory;

use std::fmt;
use std::sync::Arc;

pub use factory::RouterFactory;

use crate::components::protocols::Protocol;
use crate::components::RouterImplementation;
use crate::config::RouterConfig;
use crate::system::{Node, Service};
use crate::traits::{Executor, ManagementClient};

/// An AMQP router bound to its node.
pub struct Router {
    name: String,
    implementation: RouterImplementation,
    node: Arc<Node>,
    executor: Arc<dyn Executor>,
    service: Option<Service>,
    config: RouterConfig,
    management: Option<Box<dyn ManagementClient>>,
}

impl Router {
    pub fn new(
        implementation: RouterImplementation,
        node: Arc<Node>,
        executor: Arc<dyn Executor>,
        service: Option<Service>,
        config: RouterConfig,
    ) -> Self {
        Self {
            name: node.hostname().to_string(),
            implementation,
            node,
            executor,
            service,
            config,
            management: None,
        }
    }

    pub fn with_management_client(mut self, client: Box<dyn ManagementClient>) -> Self {
        self.management = Some(client);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn implementation(&self) -> RouterImplementation {
        self.implementation
    }

    pub fn node(&self) -> &Arc<Node> {
        &self.node
    }

    pub fn executor(&self) -> &Arc<dyn Executor> {
        &self.executor
    }

    pub fn service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Management client, when one is attached. The default dispatch
    /// constructor attaches none.
    pub fn management_client(&self) -> Option<&dyn ManagementClient> {
        self.management.as_deref()
    }

    pub fn supported_protocols(&self) -> &'static [Protocol] {
        self.implementation.supported_protocols()
    }

    /// AMQP URL clients use to reach this router.
    pub fn endpoint_url(&self) -> String {
        format!("amqp://{}:{}", self.node.address(), self.config.port)
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("name", &self.name)
            .field("implementation", &self.implementation)
            .field("node", &self.node)
            .field("service", &self.service)
            .field("management", &self.management.is_some())
            .finish()
    }
}
