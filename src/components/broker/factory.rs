// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::components::broker::Broker;
use crate::components::factory::{ComponentContext, ComponentFactory};
use crate::components::BrokerImplementation;
use crate::config::BrokerConfig;
use crate::errors::ComponentError;
use crate::management::JolokiaClient;

pub type BrokerFactory = ComponentFactory<BrokerImplementation, BrokerConfig, Broker>;

impl ComponentFactory<BrokerImplementation, BrokerConfig, Broker> {
    /// Artemis (managed through Jolokia) and the Qpid C++ broker.
    pub fn with_defaults() -> Self {
        Self::new()
            .with_constructor(BrokerImplementation::Artemis, artemis)
            .with_constructor(BrokerImplementation::Qpid, plain)
    }
}

fn artemis(
    implementation: BrokerImplementation,
    ctx: ComponentContext<BrokerConfig>,
) -> Result<Broker, ComponentError> {
    let client = JolokiaClient::new(
        ctx.node.address(),
        ctx.config.web_port,
        &ctx.config.broker_name,
        &ctx.config.admin_user,
        &ctx.config.admin_password,
    )
    .map_err(|e| ComponentError::ManagementSetup {
        component: ctx.node.hostname().to_string(),
        reason: e.to_string(),
    })?;

    Ok(plain(implementation, ctx)?.with_management_client(Box::new(client)))
}

/// A broker without a management client.
fn plain(
    implementation: BrokerImplementation,
    ctx: ComponentContext<BrokerConfig>,
) -> Result<Broker, ComponentError> {
    Ok(Broker::new(
        implementation,
        ctx.node,
        ctx.executor,
        ctx.service,
        ctx.config,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentKind;
    use crate::stub::StubExecutor;
    use crate::system::NodeFactory;
    use std::sync::Arc;

    fn context() -> ComponentContext<BrokerConfig> {
        let node = NodeFactory::create_node("broker1", Arc::new(StubExecutor::new("stub")), Some("10.0.0.5"));
        ComponentContext::new(node, BrokerConfig::default())
    }

    #[test]
    fn test_defaults_register_every_broker() {
        let factory = BrokerFactory::with_defaults();
        assert_eq!(
            factory.implementations(),
            vec![BrokerImplementation::Artemis, BrokerImplementation::Qpid]
        );
    }

    #[test]
    fn test_artemis_gets_a_management_client() {
        let broker = BrokerFactory::with_defaults().create("Artemis", context()).unwrap();

        assert_eq!(broker.name(), "broker1");
        assert_eq!(broker.implementation(), BrokerImplementation::Artemis);
        assert_eq!(broker.node().ip(), Some("10.0.0.5"));
        assert!(broker.management_client().is_some());
    }

    #[test]
    fn test_qpid_has_no_management_client() {
        let broker = BrokerFactory::with_defaults().create("qpidd", context()).unwrap();

        assert_eq!(broker.implementation(), BrokerImplementation::Qpid);
        assert!(broker.management_client().is_none());
    }

    #[test]
    fn test_unknown_broker() {
        let result = BrokerFactory::with_defaults().create("activemq", context());

        assert!(matches!(
            result,
            Err(ComponentError::UnknownImplementation { kind: ComponentKind::Broker, .. })
        ));
    }
}
