// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The registry of nodes and components discovered from an inventory.
//!
//! Test code builds an [`Instance`] once and then asks it for the components
//! it needs to drive:
//!
//! ```no_run
//! use iqa_harness::Instance;
//!
//! let instance = Instance::load("inventory.yml", &["web_port=8162".to_string()]).unwrap();
//!
//! for broker in instance.get_brokers(None) {
//!     println!("{} has {} queues", broker.name(), broker.queues(true).len());
//! }
//! let sender = instance.get_sender("client1");
//! ```
//!
//! All queries are linear scans over the component list.

mod discovery;


use std::sync::Arc;

pub use discovery::{DiscoveryStage, HostReport};

use crate::components::{
    Broker, Client, ClientImplementation, ClientRole, Component, ImplementationKey, Router,
};
use crate::config::ExecutorConfig;
use crate::executor::{ExecutorFactory, ExecutorKind};
use crate::system::{Node, NodeFactory};

#[derive(Debug, Default)]
pub struct Instance {
    nodes: Vec<Arc<Node>>,
    components: Vec<Component>,
    report: Vec<HostReport>,
}

impl Instance {
    /// An instance with no nodes or components, for manual registration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Arc<Node>] {
        &self.nodes
    }

    pub fn node(&self, hostname: &str) -> Option<&Arc<Node>> {
        self.nodes.iter().find(|node| node.hostname() == hostname)
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// What discovery did with each inventory host.
    pub fn report(&self) -> &[HostReport] {
        &self.report
    }

    /// Register a node that is not in the inventory.
    pub fn new_node(&mut self, hostname: &str, executor: ExecutorKind, ip: Option<&str>) -> Arc<Node> {
        let config = ExecutorConfig {
            kind: executor,
            ..ExecutorConfig::default()
        };
        let executor = ExecutorFactory::create_executor(hostname, ip, &config);
        let node = NodeFactory::create_node(hostname, executor, ip);
        self.nodes.push(Arc::clone(&node));
        node
    }

    pub fn new_component(&mut self, component: impl Into<Component>) -> &Component {
        let index = self.components.len();
        self.components.push(component.into());
        &self.components[index]
    }

    pub fn brokers(&self) -> Vec<&Broker> {
        self.components.iter().filter_map(Component::as_broker).collect()
    }

    pub fn routers(&self) -> Vec<&Router> {
        self.components.iter().filter_map(Component::as_router).collect()
    }

    pub fn clients(&self) -> Vec<&Client> {
        self.components.iter().filter_map(Component::as_client).collect()
    }

    /// Brokers, optionally only those on `hostname`.
    pub fn get_brokers(&self, hostname: Option<&str>) -> Vec<&Broker> {
        self.brokers()
            .into_iter()
            .filter(|broker| on_host(broker.node(), hostname))
            .collect()
    }

    /// Routers, optionally only those on `hostname`.
    pub fn get_routers(&self, hostname: Option<&str>) -> Vec<&Router> {
        self.routers()
            .into_iter()
            .filter(|router| on_host(router.node(), hostname))
            .collect()
    }

    /// Clients in `role`, optionally of one implementation (case-insensitive,
    /// aliases accepted).
    pub fn get_clients(&self, role: ClientRole, implementation: Option<&str>) -> Vec<&Client> {
        let wanted = implementation.map(ClientImplementation::parse);

        self.clients()
            .into_iter()
            .filter(|client| client.role() == role)
            .filter(|client| match wanted {
                None => true,
                Some(key) => key == Some(client.implementation()),
            })
            .collect()
    }

    /// First sender on `hostname`.
    pub fn get_sender(&self, hostname: &str) -> Option<&Client> {
        self.get_clients(ClientRole::Sender, None)
            .into_iter()
            .find(|client| client.node().hostname() == hostname)
    }

    /// First receiver on `hostname`.
    pub fn get_receiver(&self, hostname: &str) -> Option<&Client> {
        self.get_clients(ClientRole::Receiver, None)
            .into_iter()
            .find(|client| client.node().hostname() == hostname)
    }

    pub fn components_on(&self, hostname: &str) -> Vec<&Component> {
        self.components
            .iter()
            .filter(|component| component.hostname() == hostname)
            .collect()
    }
}

fn on_host(node: &Node, hostname: Option<&str>) -> bool {
    match hostname {
        Some(hostname) => node.hostname() == hostname,
        None => true,
    }
}
