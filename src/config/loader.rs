// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::errors::ConfigError;
use crate::inventory::{HostVars, YamlInventory};

/// Load an Ansible style YAML inventory from disk.
///
/// # Example
/// ```yaml
/// all:
///   children:
///     brokers:
///       vars:
///         executor: ssh
///       hosts:
///         broker1:
///           component: broker
///           implementation: artemis
///           service: artemis
///           ansible_host: 10.0.0.5
/// ```
pub fn load_inventory<P: AsRef<Path>>(path: P) -> Result<YamlInventory, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    YamlInventory::from_yaml_str(&content)
}

/// Parse `key=value` pairs given on the command line.
///
/// Values are read as YAML scalars, so `web_port=8162` yields a number and
/// `durable=true` a boolean; anything that does not parse stays a string.
pub fn parse_extra_vars<S: AsRef<str>>(pairs: &[S]) -> Result<HostVars, ConfigError> {
    let mut vars = HostVars::new();

    for pair in pairs {
        let pair = pair.as_ref();
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| ConfigError::InvalidExtraVar(pair.to_string()))?;

        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::InvalidExtraVar(pair.to_string()));
        }

        vars.insert(key.to_string(), parse_scalar(raw));
    }

    Ok(vars)
}

fn parse_scalar(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::String(String::new());
    }

    match serde_yaml::from_str::<Value>(raw) {
        Ok(value @ (Value::Bool(_) | Value::Number(_) | Value::String(_))) => value,
        _ => Value::String(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Inventory;
    use std::io::Write;

    #[test]
    fn test_parse_extra_vars_scalars() {
        let vars = parse_extra_vars(&[
            "web_port=8162",
            "durable=true",
            "broker_name=amq",
            "empty=",
            "url=amqp://host:5672/q?x=1",
            "list=[1, 2]",
        ])
        .unwrap();

        assert_eq!(vars["web_port"], Value::Number(8162.into()));
        assert_eq!(vars["durable"], Value::Bool(true));
        assert_eq!(vars["broker_name"], Value::String("amq".to_string()));
        assert_eq!(vars["empty"], Value::String(String::new()));
        assert_eq!(vars["url"], Value::String("amqp://host:5672/q?x=1".to_string()));
        assert_eq!(vars["list"], Value::String("[1, 2]".to_string()));
    }

    #[test]
    fn test_parse_extra_vars_rejects_malformed_pairs() {
        for input in ["novalue", "=value", " =value"] {
            let result = parse_extra_vars(&[input]);
            assert!(
                matches!(result, Err(ConfigError::InvalidExtraVar(_))),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_load_inventory_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "all:\n  hosts:\n    broker1:\n      component: broker\n      implementation: artemis\n"
        )
        .unwrap();

        let inventory = load_inventory(file.path()).unwrap();
        let hosts = inventory.hosts_containing("component");

        assert_eq!(hosts.into_iter().collect::<Vec<_>>(), vec!["broker1"]);
    }

    #[test]
    fn test_load_inventory_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_inventory(dir.path().join("missing.yml"));

        match result {
            Err(ConfigError::Io { path, .. }) => assert!(path.ends_with("missing.yml")),
            other => panic!("expected Io error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_load_inventory_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "all: [unclosed").unwrap();

        assert!(matches!(
            load_inventory(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
