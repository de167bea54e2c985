// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use crate::components::broker::BrokerFactory;
use crate::components::client::ClientFactory;
use crate::components::router::RouterFactory;
use crate::components::ImplementationKey;
use crate::errors::ComponentError;
use crate::system::{Node, Service};
use crate::traits::Executor;

/// Everything a constructor needs to bind a component to its host.
pub struct ComponentContext<C> {
    pub node: Arc<Node>,
    pub executor: Arc<dyn Executor>,
    pub service: Option<Service>,
    pub config: C,
}

impl<C> ComponentContext<C> {
    pub fn new(node: Arc<Node>, config: C) -> Self {
        let executor = Arc::clone(node.executor());
        Self {
            node,
            executor,
            service: None,
            config,
        }
    }

    pub fn with_service(mut self, service: Option<Service>) -> Self {
        self.service = service;
        self
    }
}

pub type Constructor<K, C, T> =
    Box<dyn Fn(K, ComponentContext<C>) -> Result<T, ComponentError> + Send + Sync>;

/// Maps implementation keys of one component kind to constructors.
///
/// `K` is the closed key enum, `C` the typed configuration handed to the
/// constructor and `T` what it builds.
pub struct ComponentFactory<K, C, T> {
    constructors: HashMap<K, Constructor<K, C, T>>,
}

impl<K: ImplementationKey, C, T> ComponentFactory<K, C, T> {
    /// A factory with nothing registered.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Register the constructor for `key`.
    ///
    /// # Errors
    /// `DuplicateRegistration` when `key` already has a constructor.
    pub fn register<F>(&mut self, key: K, constructor: F) -> Result<(), ComponentError>
    where
        F: Fn(K, ComponentContext<C>) -> Result<T, ComponentError> + Send + Sync + 'static,
    {
        if self.constructors.contains_key(&key) {
            return Err(ComponentError::DuplicateRegistration {
                kind: K::KIND,
                implementation: key.as_str().to_string(),
            });
        }
        self.constructors.insert(key, Box::new(constructor));
        Ok(())
    }

    /// Builder-style registration for tables of distinct keys.
    pub(crate) fn with_constructor<F>(mut self, key: K, constructor: F) -> Self
    where
        F: Fn(K, ComponentContext<C>) -> Result<T, ComponentError> + Send + Sync + 'static,
    {
        self.constructors.insert(key, Box::new(constructor));
        self
    }

    pub fn is_registered(&self, key: K) -> bool {
        self.constructors.contains_key(&key)
    }

    /// Registered keys, in declaration order.
    pub fn implementations(&self) -> Vec<K> {
        K::all()
            .iter()
            .copied()
            .filter(|key| self.constructors.contains_key(key))
            .collect()
    }

    /// Build the implementation named by `implementation` (case-insensitive).
    ///
    /// # Errors
    /// `UnknownImplementation` when the name is not a key of this kind or has
    /// no constructor; otherwise whatever the constructor returns.
    pub fn create(&self, implementation: &str, context: ComponentContext<C>) -> Result<T, ComponentError> {
        let unknown = || ComponentError::UnknownImplementation {
            kind: K::KIND,
            implementation: implementation.to_string(),
        };

        let key = K::parse(implementation).ok_or_else(unknown)?;
        let constructor = self.constructors.get(&key).ok_or_else(unknown)?;
        constructor(key, context)
    }
}

impl<K: ImplementationKey, C, T> Default for ComponentFactory<K, C, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The three factories discovery dispatches to.
pub struct ComponentFactories {
    pub brokers: BrokerFactory,
    pub routers: RouterFactory,
    pub clients: ClientFactory,
}

impl ComponentFactories {
    pub fn with_defaults() -> Self {
        Self {
            brokers: BrokerFactory::with_defaults(),
            routers: RouterFactory::with_defaults(),
            clients: ClientFactory::with_defaults(),
        }
    }
}

impl Default for ComponentFactories {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ComponentKind, RouterImplementation};
    use crate::stub::StubExecutor;
    use crate::system::NodeFactory;

    type NameFactory = ComponentFactory<RouterImplementation, String, String>;

    fn context(config: &str) -> ComponentContext<String> {
        let node = NodeFactory::create_node("router1", Arc::new(StubExecutor::new("stub")), None);
        ComponentContext::new(node, config.to_string())
    }

    #[test]
    fn test_create_registered_implementation() {
        let mut factory = NameFactory::new();
        factory
            .register(RouterImplementation::Dispatch, |key, ctx| {
                Ok(format!("{}@{}:{}", key, ctx.node.hostname(), ctx.config))
            })
            .unwrap();

        let built = factory.create("QDROUTERD", context("cfg")).unwrap();
        assert_eq!(built, "dispatch@router1:cfg");
        assert!(factory.is_registered(RouterImplementation::Dispatch));
        assert_eq!(factory.implementations(), vec![RouterImplementation::Dispatch]);
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut factory = NameFactory::new();
        factory
            .register(RouterImplementation::Dispatch, |_, _| Ok(String::new()))
            .unwrap();

        let result = factory.register(RouterImplementation::Dispatch, |_, _| Ok(String::new()));

        match result {
            Err(ComponentError::DuplicateRegistration { kind, implementation }) => {
                assert_eq!(kind, ComponentKind::Router);
                assert_eq!(implementation, "dispatch");
            }
            other => panic!("expected DuplicateRegistration, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_and_unregistered_keys_fail() {
        let factory = NameFactory::new();

        for implementation in ["nginx", "dispatch", ""] {
            match factory.create(implementation, context("cfg")) {
                Err(ComponentError::UnknownImplementation { kind, implementation: name }) => {
                    assert_eq!(kind, ComponentKind::Router);
                    assert_eq!(name, implementation);
                }
                other => panic!("expected UnknownImplementation, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_context_uses_node_executor() {
        let ctx = context("cfg");
        assert_eq!(ctx.executor.name(), "stub");
        assert!(ctx.service.is_none());
    }
}
