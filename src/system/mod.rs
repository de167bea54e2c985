// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Hosts and the services running on them.

mod node;
mod service;

pub use node::{Node, NodeFactory};
pub use service::{Service, ServiceFactory, ServiceStatus};
