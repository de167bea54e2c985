// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::Path;
use std::sync::Arc;

use crate::components::{Component, ComponentContext, ComponentFactories, ComponentKind};
use crate::config::{load_inventory, parse_extra_vars, ComponentClass, HostSpec};
use crate::errors::InstanceError;
use crate::executor::ExecutorFactory;
use crate::instance::Instance;
use crate::inventory::HostVars;
use crate::observability::messages::discovery::{
    ComponentRegistered, DiscoveryCompleted, HostDiscovered, HostSkipped, InventoryLoaded, NodeBound,
};
use crate::observability::messages::StructuredLog;
use crate::system::{NodeFactory, ServiceFactory};
use crate::traits::Inventory;

/// How far discovery got with a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiscoveryStage {
    Unclassified,
    ExecutorBound,
    NodeBound,
    ComponentConstructed,
}

/// Outcome of discovery for one inventory host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostReport {
    pub hostname: String,
    pub stage: DiscoveryStage,
    pub component_count: usize,
    /// Why the host ended without a component, if it did.
    pub skip_reason: Option<String>,
}

impl HostReport {
    fn new(hostname: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            stage: DiscoveryStage::Unclassified,
            component_count: 0,
            skip_reason: None,
        }
    }
}

impl Instance {
    /// Load an inventory file, apply `key=value` extra variables and discover.
    pub fn load<P: AsRef<Path>, S: AsRef<str>>(path: P, extra_vars: &[S]) -> Result<Self, InstanceError> {
        let path = path.as_ref();
        let extra_vars = parse_extra_vars(extra_vars)?;
        let inventory = load_inventory(path)?.with_extra_vars(extra_vars);

        InventoryLoaded {
            source: &path.display().to_string(),
            host_count: inventory.len(),
        }
        .log();

        Self::from_inventory(&inventory)
    }

    /// Discover with the default factories.
    pub fn from_inventory(inventory: &dyn Inventory) -> Result<Self, InstanceError> {
        Self::from_inventory_with(inventory, &ComponentFactories::with_defaults())
    }

    /// Discover every host that defines `component`.
    ///
    /// Each such host gets exactly one node. Client hosts add zero or more
    /// components, broker and router hosts exactly one. A host whose kind is
    /// not recognized keeps its node, is logged and shows up in the report
    /// with a skip reason.
    ///
    /// # Errors
    /// Malformed host variables, unknown executors and unknown
    /// implementations abort discovery.
    pub fn from_inventory_with(
        inventory: &dyn Inventory,
        factories: &ComponentFactories,
    ) -> Result<Self, InstanceError> {
        let mut instance = Instance::new();

        for hostname in inventory.hosts_containing("component") {
            let vars = inventory.host_vars(&hostname);
            let report = instance.discover_host(&hostname, &vars, factories)?;
            instance.report.push(report);
        }

        DiscoveryCompleted {
            node_count: instance.nodes.len(),
            component_count: instance.components.len(),
        }
        .log();

        Ok(instance)
    }

    fn discover_host(
        &mut self,
        hostname: &str,
        vars: &HostVars,
        factories: &ComponentFactories,
    ) -> Result<HostReport, InstanceError> {
        let mut report = HostReport::new(hostname);
        let spec = HostSpec::from_vars(hostname, vars)?;

        let class = match &spec.class {
            ComponentClass::Known(kind) => kind.as_str(),
            ComponentClass::Unrecognized(value) => value.as_str(),
        };
        HostDiscovered {
            hostname,
            component: class,
            implementation: spec.implementation(),
        }
        .log();

        let executor = ExecutorFactory::create_executor(hostname, spec.address.as_deref(), &spec.executor);
        report.stage = DiscoveryStage::ExecutorBound;

        let node = NodeFactory::create_node(hostname, Arc::clone(&executor), spec.address.as_deref());
        NodeBound {
            hostname,
            ip: node.ip(),
            executor: executor.name(),
        }
        .log();
        self.nodes.push(Arc::clone(&node));
        report.stage = DiscoveryStage::NodeBound;

        let components: Vec<Component> = match &spec.class {
            ComponentClass::Known(ComponentKind::Client) => {
                let ctx = ComponentContext::new(node, spec.client_config()?);
                factories
                    .clients
                    .create(spec.implementation(), ctx)?
                    .into_iter()
                    .map(Component::from)
                    .collect()
            }
            ComponentClass::Known(ComponentKind::Router) => {
                let service = ServiceFactory::create_service(executor, spec.service.as_deref());
                let ctx = ComponentContext::new(node, spec.router_config()?).with_service(service);
                vec![Component::from(factories.routers.create(spec.implementation(), ctx)?)]
            }
            ComponentClass::Known(ComponentKind::Broker) => {
                let service = ServiceFactory::create_service(executor, spec.service.as_deref());
                let ctx = ComponentContext::new(node, spec.broker_config()?).with_service(service);
                vec![Component::from(factories.brokers.create(spec.implementation(), ctx)?)]
            }
            ComponentClass::Unrecognized(value) => {
                report.skip_reason = Some(format!("unrecognized component '{}'", value));
                Vec::new()
            }
        };

        if components.is_empty() && report.skip_reason.is_none() {
            report.skip_reason = Some("no client roles selected".to_string());
        }
        if let Some(reason) = &report.skip_reason {
            HostSkipped { hostname, reason }.log();
        }

        for component in components {
            ComponentRegistered {
                hostname,
                kind: component.kind(),
                implementation: component.implementation(),
                name: component.name(),
            }
            .log();
            self.components.push(component);
            report.component_count += 1;
            report.stage = DiscoveryStage::ComponentConstructed;
        }

        Ok(report)
    }
}
