// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;

use crate::components::broker::Broker;
use crate::components::client::Client;
use crate::components::protocols::Protocol;
use crate::components::router::Router;
use crate::system::Node;
use crate::traits::Executor;

/// The kinds of component a host can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Broker,
    Router,
    Client,
}

impl ComponentKind {
    /// Case-insensitive lookup of the inventory `component` value.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "broker" => Some(ComponentKind::Broker),
            "router" => Some(ComponentKind::Router),
            "client" => Some(ComponentKind::Client),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Broker => "broker",
            ComponentKind::Router => "router",
            ComponentKind::Client => "client",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A component under test, bound to the node it runs on.
#[derive(Debug)]
pub enum Component {
    Broker(Broker),
    Router(Router),
    Client(Client),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Broker(_) => ComponentKind::Broker,
            Component::Router(_) => ComponentKind::Router,
            Component::Client(_) => ComponentKind::Client,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Component::Broker(broker) => broker.name(),
            Component::Router(router) => router.name(),
            Component::Client(client) => client.name(),
        }
    }

    /// Canonical implementation key, e.g. `artemis` or `python`.
    pub fn implementation(&self) -> &'static str {
        use crate::components::ImplementationKey;

        match self {
            Component::Broker(broker) => broker.implementation().as_str(),
            Component::Router(router) => router.implementation().as_str(),
            Component::Client(client) => client.implementation().as_str(),
        }
    }

    pub fn node(&self) -> &Arc<Node> {
        match self {
            Component::Broker(broker) => broker.node(),
            Component::Router(router) => router.node(),
            Component::Client(client) => client.node(),
        }
    }

    pub fn executor(&self) -> &Arc<dyn Executor> {
        match self {
            Component::Broker(broker) => broker.executor(),
            Component::Router(router) => router.executor(),
            Component::Client(client) => client.executor(),
        }
    }

    pub fn hostname(&self) -> &str {
        self.node().hostname()
    }

    pub fn supported_protocols(&self) -> &'static [Protocol] {
        match self {
            Component::Broker(broker) => broker.supported_protocols(),
            Component::Router(router) => router.supported_protocols(),
            Component::Client(client) => client.supported_protocols(),
        }
    }

    pub fn as_broker(&self) -> Option<&Broker> {
        match self {
            Component::Broker(broker) => Some(broker),
            _ => None,
        }
    }

    pub fn as_router(&self) -> Option<&Router> {
        match self {
            Component::Router(router) => Some(router),
            _ => None,
        }
    }

    pub fn as_client(&self) -> Option<&Client> {
        match self {
            Component::Client(client) => Some(client),
            _ => None,
        }
    }
}

impl From<Broker> for Component {
    fn from(broker: Broker) -> Self {
        Component::Broker(broker)
    }
}

impl From<Router> for Component {
    fn from(router: Router) -> Self {
        Component::Router(router)
    }
}

impl From<Client> for Component {
    fn from(client: Client) -> Self {
        Component::Client(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_component_kind() {
        let cases = vec![
            ("broker", Some(ComponentKind::Broker)),
            ("Router", Some(ComponentKind::Router)),
            (" CLIENT ", Some(ComponentKind::Client)),
            ("database", None),
            ("", None),
        ];

        for (input, expected) in cases {
            assert_eq!(ComponentKind::parse(input), expected, "parsing {:?}", input);
        }
    }
}
