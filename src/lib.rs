// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod components;  // brokers, routers, clients + factories
pub mod config;      // host vars, typed configs, loader
pub mod errors;      // error handling
pub mod executor;    // local / ssh command execution
pub mod instance;    // discovery + registry
pub mod inventory;   // ansible-style inventories
pub mod management;  // broker management clients
pub mod observability;
pub mod system;      // nodes and services
pub mod traits;      // unified abstractions

#[cfg(test)]
pub mod stub;

pub use instance::Instance;
