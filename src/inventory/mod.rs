// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Host inventories.
//!
//! An inventory lists hosts and the variables attached to them. Discovery
//! only needs the [`Inventory`](crate::traits::Inventory) trait; this module
//! ships the YAML implementation used by the binary and by tests.

mod yaml;

use std::collections::BTreeMap;

pub use yaml::YamlInventory;

/// Resolved variables of a single host, ordered by name.
pub type HostVars = BTreeMap<String, serde_yaml::Value>;
