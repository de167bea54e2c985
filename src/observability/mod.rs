// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging in the harness. Message types follow a struct-based pattern
//! with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep field names identical between the text and structured forms
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::discovery` - inventory traversal and component registration
//! * `messages::broker` - broker snapshot refreshes and management calls
//! * `messages::executor` - command submission and completion
//!
//! # Usage
//!
//! ```rust
//! use iqa_harness::observability::messages::discovery::HostSkipped;
//! use iqa_harness::observability::messages::StructuredLog;
//!
//! let msg = HostSkipped {
//!     hostname: "db1",
//!     reason: "unrecognized component 'database'",
//! };
//!
//! msg.log();
//! ```
//!
//! Subscribers are installed by the binary only; the library never
//! configures global logging state.

pub mod messages;
