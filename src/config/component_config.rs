// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::components::client::ClientRole;
use crate::config::consts::{
    DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USER, DEFAULT_BROKER_NAME, DEFAULT_BROKER_WEB_PORT,
    DEFAULT_ROUTER_CONFIG_PATH, DEFAULT_ROUTER_PORT,
};
use crate::errors::ConfigError;
use crate::executor::ExecutorKind;
use crate::inventory::HostVars;

/// How commands reach a host.
///
/// `kind` comes from the `executor` variable; the remaining fields use the
/// Ansible connection variable names so existing inventories work unchanged.
///
/// # Example
/// ```yaml
/// executor: ssh
/// ansible_user: root
/// ansible_port: 2222
/// ansible_ssh_private_key_file: ~/.ssh/iqa
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExecutorConfig {
    #[serde(skip)]
    pub kind: ExecutorKind,
    #[serde(rename = "ansible_user")]
    pub user: Option<String>,
    #[serde(rename = "ansible_port")]
    pub port: Option<u16>,
    #[serde(rename = "ansible_ssh_private_key_file")]
    pub identity_file: Option<PathBuf>,
}

/// Broker variables.
///
/// # Fields
/// * `broker_name` - instance name, part of the management MBean name
/// * `web_port` - port of the web console serving the management API
/// * `admin_user` / `admin_password` - management credentials
/// * `extra` - every other variable, untouched
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerConfig {
    #[serde(default = "default_broker_name")]
    pub broker_name: String,
    #[serde(default = "default_web_port")]
    pub web_port: u16,
    #[serde(default = "default_admin_user")]
    pub admin_user: String,
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    #[serde(flatten)]
    pub extra: HostVars,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            broker_name: default_broker_name(),
            web_port: default_web_port(),
            admin_user: default_admin_user(),
            admin_password: default_admin_password(),
            extra: BTreeMap::new(),
        }
    }
}

/// Router variables.
#[derive(Debug, Clone, Deserialize)]
pub struct RouterConfig {
    #[serde(default = "default_router_port")]
    pub port: u16,
    #[serde(default = "default_router_config_path")]
    pub config_path: PathBuf,
    #[serde(flatten)]
    pub extra: HostVars,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            port: default_router_port(),
            config_path: default_router_config_path(),
            extra: BTreeMap::new(),
        }
    }
}

/// Client variables.
///
/// `clients` restricts which roles are created on the host; when absent,
/// every role the implementation provides is created.
///
/// # Example
/// ```yaml
/// component: client
/// implementation: python
/// clients: [sender, receiver]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub clients: Option<Vec<ClientRole>>,
    #[serde(flatten)]
    pub extra: HostVars,
}

fn default_broker_name() -> String {
    DEFAULT_BROKER_NAME.to_string()
}

fn default_web_port() -> u16 {
    DEFAULT_BROKER_WEB_PORT
}

fn default_admin_user() -> String {
    DEFAULT_ADMIN_USER.to_string()
}

fn default_admin_password() -> String {
    DEFAULT_ADMIN_PASSWORD.to_string()
}

fn default_router_port() -> u16 {
    DEFAULT_ROUTER_PORT
}

fn default_router_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_ROUTER_CONFIG_PATH)
}

/// Map a host's variables onto a typed configuration.
pub(crate) fn from_vars<T: DeserializeOwned>(host: &str, vars: &HostVars) -> Result<T, ConfigError> {
    let mapping: serde_yaml::Mapping = vars
        .iter()
        .map(|(key, value)| (serde_yaml::Value::String(key.clone()), value.clone()))
        .collect();

    serde_yaml::from_value(serde_yaml::Value::Mapping(mapping)).map_err(|source| {
        ConfigError::InvalidHostVars {
            host: host.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    fn vars(yaml: &str) -> HostVars {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_broker_config_defaults() {
        let config: BrokerConfig = from_vars("broker1", &HostVars::new()).unwrap();

        assert_eq!(config.broker_name, "amq");
        assert_eq!(config.web_port, 8161);
        assert_eq!(config.admin_user, "admin");
        assert_eq!(config.admin_password, "admin");
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_broker_config_overrides_and_keeps_extras() {
        let config: BrokerConfig = from_vars(
            "broker1",
            &vars("broker_name: 0.0.0.0\nweb_port: 18161\nadmin_password: secret\nbroker_path: /opt/artemis\n"),
        )
        .unwrap();

        assert_eq!(config.broker_name, "0.0.0.0");
        assert_eq!(config.web_port, 18161);
        assert_eq!(config.admin_user, "admin");
        assert_eq!(config.admin_password, "secret");
        assert_eq!(
            config.extra.get("broker_path"),
            Some(&Value::String("/opt/artemis".to_string()))
        );
    }

    #[test]
    fn test_router_config_defaults() {
        let config: RouterConfig = from_vars("router1", &HostVars::new()).unwrap();

        assert_eq!(config.port, 5672);
        assert_eq!(
            config.config_path,
            PathBuf::from("/etc/qpid-dispatch/qdrouterd.conf")
        );
    }

    #[test]
    fn test_client_config_roles() {
        let config: ClientConfig =
            from_vars("client1", &vars("clients: [sender, receiver]\n")).unwrap();

        assert_eq!(
            config.clients,
            Some(vec![ClientRole::Sender, ClientRole::Receiver])
        );
    }

    #[test]
    fn test_executor_config_uses_ansible_names() {
        let config: ExecutorConfig = from_vars(
            "broker1",
            &vars("ansible_user: root\nansible_port: 2222\nansible_ssh_private_key_file: /keys/id\nunrelated: 1\n"),
        )
        .unwrap();

        assert_eq!(config.kind, ExecutorKind::Local);
        assert_eq!(config.user.as_deref(), Some("root"));
        assert_eq!(config.port, Some(2222));
        assert_eq!(config.identity_file, Some(PathBuf::from("/keys/id")));
    }

    #[test]
    fn test_invalid_port_is_reported_with_host() {
        let result: Result<BrokerConfig, _> = from_vars("broker1", &vars("web_port: [1, 2]\n"));

        match result {
            Err(ConfigError::InvalidHostVars { host, .. }) => assert_eq!(host, "broker1"),
            other => panic!("expected InvalidHostVars, got {:?}", other),
        }
    }
}
