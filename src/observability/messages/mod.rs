// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human readable line and
//! [`StructuredLog`] to emit it at its documented level with every field
//! attached as a tracing field.
//!
//! # Organization
//!
//! * `discovery` - inventory traversal, node binding, component registration
//! * `broker` - address/queue refreshes
//! * `executor` - command lifecycle
//!
//! # Usage Pattern
//!
//! ```rust
//! use iqa_harness::observability::messages::discovery::DiscoveryCompleted;
//! use iqa_harness::observability::messages::StructuredLog;
//!
//! let msg = DiscoveryCompleted {
//!     node_count: 3,
//!     component_count: 5,
//! };
//!
//! let span = msg.span("discovery");
//! let _guard = span.enter();
//! msg.log();
//! ```

use tracing::Span;

pub mod broker;
pub mod discovery;
pub mod executor;

/// A message that knows its own log level and tracing fields.
pub trait StructuredLog {
    /// Emit the message at its level.
    fn log(&self);

    /// Build a span carrying the message fields.
    fn span(&self, name: &str) -> Span;
}
