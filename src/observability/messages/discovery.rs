// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for inventory discovery.
//!
//! This module contains message types for logging events related to:
//! * Inventory loading
//! * Per-host classification and node binding
//! * Component registration and skipped hosts

use std::fmt::{Display, Formatter};

use tracing::Span;

use crate::components::ComponentKind;
use crate::observability::messages::StructuredLog;

/// An inventory was loaded.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use iqa_harness::observability::messages::discovery::InventoryLoaded;
///
/// let msg = InventoryLoaded {
///     source: "inventory.yml",
///     host_count: 4,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct InventoryLoaded<'a> {
    pub source: &'a str,
    pub host_count: usize,
}

impl Display for InventoryLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded inventory '{}': {} hosts",
            self.source, self.host_count
        )
    }
}

impl StructuredLog for InventoryLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            source = self.source,
            host_count = self.host_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "inventory",
            span_name = name,
            source = self.source,
            host_count = self.host_count,
        )
    }
}

/// A host carrying a `component` variable is being classified.
///
/// # Log Level
/// `debug!` - One per host
pub struct HostDiscovered<'a> {
    pub hostname: &'a str,
    pub component: &'a str,
    pub implementation: &'a str,
}

impl Display for HostDiscovered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Discovered host '{}': component={}, implementation={}",
            self.hostname, self.component, self.implementation
        )
    }
}

impl StructuredLog for HostDiscovered<'_> {
    fn log(&self) {
        tracing::debug!(
            hostname = self.hostname,
            component = self.component,
            implementation = self.implementation,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "host",
            span_name = name,
            hostname = self.hostname,
            component = self.component,
        )
    }
}

/// A node was created and bound to its executor.
///
/// # Log Level
/// `debug!` - One per host
pub struct NodeBound<'a> {
    pub hostname: &'a str,
    pub ip: Option<&'a str>,
    pub executor: &'a str,
}

impl Display for NodeBound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node '{}' bound to executor '{}' (ip={})",
            self.hostname,
            self.executor,
            self.ip.unwrap_or("-")
        )
    }
}

impl StructuredLog for NodeBound<'_> {
    fn log(&self) {
        tracing::debug!(
            hostname = self.hostname,
            ip = self.ip,
            executor = self.executor,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "node",
            span_name = name,
            hostname = self.hostname,
            executor = self.executor,
        )
    }
}

/// A component was constructed and added to the registry.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ComponentRegistered<'a> {
    pub hostname: &'a str,
    pub kind: ComponentKind,
    pub implementation: &'a str,
    pub name: &'a str,
}

impl Display for ComponentRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registered {} '{}' ({}) on '{}'",
            self.kind, self.name, self.implementation, self.hostname
        )
    }
}

impl StructuredLog for ComponentRegistered<'_> {
    fn log(&self) {
        tracing::info!(
            hostname = self.hostname,
            kind = %self.kind,
            implementation = self.implementation,
            name = self.name,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "component",
            span_name = name,
            hostname = self.hostname,
            kind = %self.kind,
        )
    }
}

/// A host kept its node but produced no component.
///
/// # Log Level
/// `warn!` - The inventory probably contains a typo
///
/// # Example
/// ```
/// use iqa_harness::observability::messages::discovery::HostSkipped;
///
/// let msg = HostSkipped {
///     hostname: "db1",
///     reason: "unrecognized component 'database'",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct HostSkipped<'a> {
    pub hostname: &'a str,
    pub reason: &'a str,
}

impl Display for HostSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Host '{}' registered without a component: {}",
            self.hostname, self.reason
        )
    }
}

impl StructuredLog for HostSkipped<'_> {
    fn log(&self) {
        tracing::warn!(hostname = self.hostname, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "host_skipped",
            span_name = name,
            hostname = self.hostname,
        )
    }
}

/// Discovery finished.
///
/// # Log Level
/// `info!` - Important operational event
pub struct DiscoveryCompleted {
    pub node_count: usize,
    pub component_count: usize,
}

impl Display for DiscoveryCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Discovery completed: {} nodes, {} components",
            self.node_count, self.component_count
        )
    }
}

impl StructuredLog for DiscoveryCompleted {
    fn log(&self) {
        tracing::info!(
            node_count = self.node_count,
            component_count = self.component_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "discovery",
            span_name = name,
            node_count = self.node_count,
            component_count = self.component_count,
        )
    }
}
