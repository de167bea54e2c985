// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for broker destination refreshes and management calls.

use std::fmt::{Display, Formatter};

use tracing::Span;

use crate::components::broker::RoutingType;
use crate::observability::messages::StructuredLog;

/// A snapshot refresh is starting.
///
/// # Log Level
/// `debug!`
pub struct RefreshStarted<'a> {
    pub broker: &'a str,
}

impl Display for RefreshStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Refreshing addresses and queues of broker '{}'", self.broker)
    }
}

impl StructuredLog for RefreshStarted<'_> {
    fn log(&self) {
        tracing::debug!(broker = self.broker, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("refresh", span_name = name, broker = self.broker)
    }
}

/// An address was found in a management listing.
///
/// # Log Level
/// `debug!`
pub struct AddressFound<'a> {
    pub name: &'a str,
    pub routing_type: RoutingType,
}

impl Display for AddressFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Address found: {} - routingType: {}",
            self.name, self.routing_type
        )
    }
}

impl StructuredLog for AddressFound<'_> {
    fn log(&self) {
        tracing::debug!(
            address = self.name,
            routing_type = %self.routing_type,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("address", span_name = name, address = self.name)
    }
}

/// A queue was found in a management listing.
///
/// # Log Level
/// `debug!`
pub struct QueueFound<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub routing_type: RoutingType,
    pub message_count: u64,
}

impl Display for QueueFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Queue found: {} (address {}) - routingType: {}, messages: {}",
            self.name, self.address, self.routing_type, self.message_count
        )
    }
}

impl StructuredLog for QueueFound<'_> {
    fn log(&self) {
        tracing::debug!(
            queue = self.name,
            address = self.address,
            routing_type = %self.routing_type,
            message_count = self.message_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("queue", span_name = name, queue = self.name)
    }
}

/// A refresh finished and its snapshot was published.
///
/// # Log Level
/// `info!`
pub struct RefreshCompleted<'a> {
    pub broker: &'a str,
    pub address_count: usize,
    pub queue_count: usize,
}

impl Display for RefreshCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Broker '{}' refreshed: {} addresses, {} queues",
            self.broker, self.address_count, self.queue_count
        )
    }
}

impl StructuredLog for RefreshCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            broker = self.broker,
            address_count = self.address_count,
            queue_count = self.queue_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "refresh",
            span_name = name,
            broker = self.broker,
            address_count = self.address_count,
            queue_count = self.queue_count,
        )
    }
}

/// A refresh was abandoned; the previous snapshot stays in place.
///
/// # Log Level
/// `warn!` - Tests will observe stale data
///
/// # Example
/// ```
/// use iqa_harness::observability::messages::broker::RefreshFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "connection refused");
/// let msg = RefreshFailed {
///     broker: "broker1",
///     error: &error,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct RefreshFailed<'a> {
    pub broker: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for RefreshFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unable to refresh broker '{}', keeping previous snapshot: {}",
            self.broker, self.error
        )
    }
}

impl StructuredLog for RefreshFailed<'_> {
    fn log(&self) {
        tracing::warn!(broker = self.broker, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("refresh_failed", span_name = name, broker = self.broker)
    }
}

/// A management call could not be completed.
///
/// # Log Level
/// `warn!`
pub struct ManagementCallFailed<'a> {
    pub endpoint: &'a str,
    pub operation: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ManagementCallFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Management call '{}' against '{}' failed: {}",
            self.operation, self.endpoint, self.error
        )
    }
}

impl StructuredLog for ManagementCallFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            endpoint = self.endpoint,
            operation = self.operation,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "management",
            span_name = name,
            endpoint = self.endpoint,
            operation = self.operation,
        )
    }
}
