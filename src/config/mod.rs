// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod component_config;
mod host;
mod loader;

pub mod consts;

pub use component_config::{BrokerConfig, ClientConfig, ExecutorConfig, RouterConfig};
pub use host::{ComponentClass, HostSpec};
pub use loader::{load_inventory, parse_extra_vars};
