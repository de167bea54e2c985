// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::errors::ConfigError;
use crate::inventory::HostVars;
use crate::traits::Inventory;

/// The group every host implicitly belongs to.
const ALL_GROUP: &str = "all";

#[derive(Debug, Default, Deserialize)]
struct Group {
    #[serde(default)]
    hosts: Option<BTreeMap<String, Option<HostVars>>>,
    #[serde(default)]
    vars: Option<HostVars>,
    #[serde(default)]
    children: Option<BTreeMap<String, Option<Group>>>,
}

/// Variables contributed to one host, before precedence is applied.
#[derive(Debug, Default)]
struct HostLayers {
    /// (depth, group name, vars); deeper groups win, ties break by name.
    /// `all` sits alone at depth 0.
    groups: BTreeMap<(usize, String), HostVars>,
    host: HostVars,
}

/// Inventory in the Ansible YAML layout.
///
/// Top level keys are groups. A group may carry `hosts`, `vars` and
/// `children`; hosts may appear in several groups. Variables resolve with
/// increasing precedence: group vars from the outermost group inwards, then
/// host vars, then extra vars.
///
/// # Example
/// ```
/// use iqa_harness::inventory::YamlInventory;
/// use iqa_harness::traits::Inventory;
///
/// let inventory = YamlInventory::from_yaml_str(
///     r#"
/// all:
///   vars:
///     executor: ssh
///   hosts:
///     broker1:
///       component: broker
///       implementation: artemis
/// "#,
/// )
/// .unwrap();
///
/// assert!(inventory.hosts_containing("component").contains("broker1"));
/// assert_eq!(inventory.host_vars("broker1")["executor"], "ssh");
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlInventory {
    hosts: BTreeMap<String, HostVars>,
    extra_vars: HostVars,
}

impl YamlInventory {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let groups: Option<BTreeMap<String, Option<Group>>> = serde_yaml::from_str(content)?;

        let mut layers: BTreeMap<String, HostLayers> = BTreeMap::new();
        let mut all_vars = HostVars::new();
        for (name, group) in groups.unwrap_or_default() {
            let group = group.unwrap_or_default();
            // Other top level groups are implicit children of `all`.
            let depth = if name == ALL_GROUP {
                all_vars = group.vars.clone().unwrap_or_default();
                0
            } else {
                1
            };
            collect(&name, group, depth, &mut Vec::new(), &mut layers);
        }
        for entry in layers.values_mut() {
            entry
                .groups
                .entry((0, ALL_GROUP.to_string()))
                .or_insert_with(|| all_vars.clone());
        }

        let hosts = layers
            .into_iter()
            .map(|(host, layers)| {
                let mut vars = HostVars::new();
                for group_vars in layers.groups.into_values() {
                    vars.extend(group_vars);
                }
                vars.extend(layers.host);
                (host, vars)
            })
            .collect();

        Ok(Self {
            hosts,
            extra_vars: HostVars::new(),
        })
    }

    /// Variables that override every host's own variables.
    pub fn with_extra_vars(mut self, extra_vars: HostVars) -> Self {
        self.extra_vars.extend(extra_vars);
        self
    }

    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.hosts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

fn collect(
    name: &str,
    group: Group,
    depth: usize,
    ancestors: &mut Vec<(usize, String, HostVars)>,
    layers: &mut BTreeMap<String, HostLayers>,
) {
    ancestors.push((depth, name.to_string(), group.vars.unwrap_or_default()));

    for (host, vars) in group.hosts.unwrap_or_default() {
        let entry = layers.entry(host).or_default();
        for (group_depth, group_name, group_vars) in ancestors.iter() {
            entry
                .groups
                .entry((*group_depth, group_name.clone()))
                .or_insert_with(|| group_vars.clone());
        }
        entry.host.extend(vars.unwrap_or_default());
    }

    for (child_name, child) in group.children.unwrap_or_default() {
        collect(&child_name, child.unwrap_or_default(), depth + 1, ancestors, layers);
    }

    ancestors.pop();
}

impl Inventory for YamlInventory {
    fn hosts_containing(&self, var: &str) -> BTreeSet<String> {
        self.hosts
            .iter()
            .filter(|(_, vars)| vars.contains_key(var) || self.extra_vars.contains_key(var))
            .map(|(host, _)| host.clone())
            .collect()
    }

    fn host_vars(&self, host: &str) -> HostVars {
        match self.hosts.get(host) {
            Some(vars) => {
                let mut resolved = vars.clone();
                resolved.extend(self.extra_vars.clone());
                resolved
            }
            None => HostVars::new(),
        }
    }
}
