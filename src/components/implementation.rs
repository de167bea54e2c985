// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Closed sets of implementation keys, one per component kind.
//!
//! Keys are what the inventory's `implementation` variable selects. Parsing is
//! case-insensitive and accepts the common package names as aliases.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::components::client::ClientRole;
use crate::components::protocols::Protocol;
use crate::components::ComponentKind;

/// An implementation key of one component kind.
pub trait ImplementationKey: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static {
    /// Kind of component this key selects an implementation for.
    const KIND: ComponentKind;

    fn parse(value: &str) -> Option<Self>;

    /// Canonical lowercase key.
    fn as_str(&self) -> &'static str;

    fn all() -> &'static [Self];
}

macro_rules! impl_display {
    ($key:ty) => {
        impl std::fmt::Display for $key {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.as_str())
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrokerImplementation {
    Artemis,
    Qpid,
}

impl BrokerImplementation {
    pub fn display_name(&self) -> &'static str {
        match self {
            BrokerImplementation::Artemis => "Artemis",
            BrokerImplementation::Qpid => "Qpid C++ Broker",
        }
    }

    pub fn supported_protocols(&self) -> &'static [Protocol] {
        match self {
            BrokerImplementation::Artemis => &[
                Protocol::Amqp10,
                Protocol::Mqtt,
                Protocol::Stomp,
                Protocol::Openwire,
            ],
            BrokerImplementation::Qpid => &[Protocol::Amqp10],
        }
    }
}

impl ImplementationKey for BrokerImplementation {
    const KIND: ComponentKind = ComponentKind::Broker;

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "artemis" => Some(BrokerImplementation::Artemis),
            "qpid" | "qpidd" | "qpid-cpp" => Some(BrokerImplementation::Qpid),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            BrokerImplementation::Artemis => "artemis",
            BrokerImplementation::Qpid => "qpid",
        }
    }

    fn all() -> &'static [Self] {
        &[BrokerImplementation::Artemis, BrokerImplementation::Qpid]
    }
}

impl_display!(BrokerImplementation);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouterImplementation {
    Dispatch,
}

impl RouterImplementation {
    pub fn display_name(&self) -> &'static str {
        match self {
            RouterImplementation::Dispatch => "Qpid Dispatch Router",
        }
    }

    pub fn supported_protocols(&self) -> &'static [Protocol] {
        match self {
            RouterImplementation::Dispatch => &[Protocol::Amqp10, Protocol::Tls12, Protocol::Tls13],
        }
    }
}

impl ImplementationKey for RouterImplementation {
    const KIND: ComponentKind = ComponentKind::Router;

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dispatch" | "qdrouterd" | "qpid-dispatch" => Some(RouterImplementation::Dispatch),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            RouterImplementation::Dispatch => "dispatch",
        }
    }

    fn all() -> &'static [Self] {
        &[RouterImplementation::Dispatch]
    }
}

impl_display!(RouterImplementation);

/// External command line clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientImplementation {
    /// `cli-proton-python`
    Python,
    /// `cli-qpid` (Qpid JMS)
    Java,
    /// `cli-rhea`
    NodeJs,
}

impl ClientImplementation {
    /// Executable prefix; the role is appended, e.g. `cli-rhea-receiver`.
    pub fn cli_prefix(&self) -> &'static str {
        match self {
            ClientImplementation::Python => "cli-proton-python",
            ClientImplementation::Java => "cli-qpid",
            ClientImplementation::NodeJs => "cli-rhea",
        }
    }

    pub fn supported_protocols(&self) -> &'static [Protocol] {
        &[Protocol::Amqp10]
    }

    /// Roles the implementation ships an executable for.
    pub fn roles(&self) -> &'static [ClientRole] {
        match self {
            ClientImplementation::Python | ClientImplementation::NodeJs => {
                &[ClientRole::Sender, ClientRole::Receiver, ClientRole::Connector]
            }
            ClientImplementation::Java => &[ClientRole::Sender, ClientRole::Receiver],
        }
    }
}

impl ImplementationKey for ClientImplementation {
    const KIND: ComponentKind = ComponentKind::Client;

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "python" | "cli-proton-python" => Some(ClientImplementation::Python),
            "java" | "cli-qpid" | "cli-qpid-jms" => Some(ClientImplementation::Java),
            "nodejs" | "node" | "cli-rhea" => Some(ClientImplementation::NodeJs),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ClientImplementation::Python => "python",
            ClientImplementation::Java => "java",
            ClientImplementation::NodeJs => "nodejs",
        }
    }

    fn all() -> &'static [Self] {
        &[
            ClientImplementation::Python,
            ClientImplementation::Java,
            ClientImplementation::NodeJs,
        ]
    }
}

impl_display!(ClientImplementation);
