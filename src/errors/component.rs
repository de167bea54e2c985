// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for component construction, factory lookups and broker operations.

use crate::components::ComponentKind;
use thiserror::Error;

/// Errors raised by component factories.
#[derive(Error, Debug)]
pub enum ComponentError {
    /// The implementation key is unknown or has no registered constructor.
    #[error("unknown {kind} implementation '{implementation}'")]
    UnknownImplementation {
        kind: ComponentKind,
        implementation: String,
    },

    /// A constructor was registered twice for the same key.
    #[error("{kind} implementation '{implementation}' is already registered")]
    DuplicateRegistration {
        kind: ComponentKind,
        implementation: String,
    },

    /// The management client for a component could not be set up.
    #[error("failed to set up management client for '{component}': {reason}")]
    ManagementSetup { component: String, reason: String },
}

/// Errors raised while resolving a broker snapshot.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DestinationError {
    /// A queue refers to an address missing from the same listing.
    #[error("queue '{queue}' refers to unknown address '{address}'")]
    UnknownAddress { queue: String, address: String },

    /// A routing type value returned by the broker is not recognized.
    #[error("'{name}' has unrecognized routing type '{value}'")]
    InvalidRoutingType { name: String, value: String },
}

/// Errors raised by broker operations.
#[derive(Error, Debug)]
pub enum BrokerError {
    /// Queues must bind to exactly one of ANYCAST or MULTICAST.
    #[error("queue '{queue}' cannot use routing type BOTH; use ANYCAST or MULTICAST")]
    InvalidRoutingType { queue: String },

    /// The broker implementation has no management client.
    #[error("broker '{broker}' has no management client")]
    ManagementUnavailable { broker: String },

    /// A management listing call reported failure.
    #[error("broker '{broker}': {operation} failed: {message}")]
    ListFailed {
        broker: String,
        operation: &'static str,
        message: String,
    },

    /// The management snapshot was internally inconsistent.
    #[error("broker '{broker}': inconsistent snapshot: {source}")]
    Inconsistent {
        broker: String,
        #[source]
        source: DestinationError,
    },
}
