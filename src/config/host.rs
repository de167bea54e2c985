// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_yaml::Value;

use crate::components::ComponentKind;
use crate::config::component_config::{from_vars, BrokerConfig, ClientConfig, ExecutorConfig, RouterConfig};
use crate::config::consts::DEFAULT_EXECUTOR;
use crate::errors::ConfigError;
use crate::executor::ExecutorKind;
use crate::inventory::HostVars;

/// Classification of a host from its `component` variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentClass {
    Known(ComponentKind),
    /// The value did not name a component kind; the host still gets a node.
    Unrecognized(String),
}

impl ComponentClass {
    pub fn parse(value: &str) -> Self {
        match ComponentKind::parse(value) {
            Some(kind) => ComponentClass::Known(kind),
            None => ComponentClass::Unrecognized(value.to_string()),
        }
    }

    pub fn kind(&self) -> Option<ComponentKind> {
        match self {
            ComponentClass::Known(kind) => Some(*kind),
            ComponentClass::Unrecognized(_) => None,
        }
    }
}

/// A host's variables split into the classification fields and the rest.
///
/// Built once per host; `vars` holds everything that was not consumed by
/// classification and is what the per-kind configs are read from.
#[derive(Debug, Clone)]
pub struct HostSpec {
    pub hostname: String,
    pub class: ComponentClass,
    pub implementation: Option<String>,
    pub address: Option<String>,
    pub service: Option<String>,
    pub executor: ExecutorConfig,
    pub vars: HostVars,
}

impl HostSpec {
    /// Classify `hostname` from a copy of its inventory variables.
    ///
    /// Strips `component`, `implementation`, `executor` and `ansible_host`,
    /// plus `service` when the host is a broker or a router.
    pub fn from_vars(hostname: &str, host_vars: &HostVars) -> Result<Self, ConfigError> {
        let mut vars = host_vars.clone();

        let component = take_string(&mut vars, hostname, "component")?.unwrap_or_default();
        let implementation = take_string(&mut vars, hostname, "implementation")?;
        let executor_name = take_string(&mut vars, hostname, "executor")?
            .unwrap_or_else(|| DEFAULT_EXECUTOR.to_string());
        let address = take_string(&mut vars, hostname, "ansible_host")?;

        let kind = ExecutorKind::parse(&executor_name).ok_or_else(|| ConfigError::UnknownExecutor {
            host: hostname.to_string(),
            executor: executor_name.clone(),
        })?;

        let class = ComponentClass::parse(&component);
        let service = match class.kind() {
            Some(ComponentKind::Broker) | Some(ComponentKind::Router) => {
                take_string(&mut vars, hostname, "service")?
            }
            _ => None,
        };

        let mut executor: ExecutorConfig = from_vars(hostname, &vars)?;
        executor.kind = kind;

        Ok(Self {
            hostname: hostname.to_string(),
            class,
            implementation,
            address,
            service,
            executor,
            vars,
        })
    }

    /// Implementation key, empty when the host does not declare one.
    pub fn implementation(&self) -> &str {
        self.implementation.as_deref().unwrap_or("")
    }

    pub fn broker_config(&self) -> Result<BrokerConfig, ConfigError> {
        from_vars(&self.hostname, &self.vars)
    }

    pub fn router_config(&self) -> Result<RouterConfig, ConfigError> {
        from_vars(&self.hostname, &self.vars)
    }

    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        from_vars(&self.hostname, &self.vars)
    }
}

/// Remove `key` and return it as a string.
///
/// Scalars are accepted as written (`ansible_host: 10.0.0.5` may be parsed
/// as a string or, for bare numbers, a number); sequences and mappings are
/// rejected.
fn take_string(vars: &mut HostVars, host: &str, key: &str) -> Result<Option<String>, ConfigError> {
    match vars.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(Value::Number(value)) => Ok(Some(value.to_string())),
        Some(Value::Bool(value)) => Ok(Some(value.to_string())),
        Some(_) => Err(ConfigError::InvalidVariable {
            host: host.to_string(),
            key: key.to_string(),
            expected: "string",
        }),
    }
}
