// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::components::client::Client;
use crate::components::factory::{ComponentContext, ComponentFactory};
use crate::components::ClientImplementation;
use crate::config::ClientConfig;
use crate::errors::ComponentError;

/// Builds every client role a host runs; a host may yield none.
pub type ClientFactory = ComponentFactory<ClientImplementation, ClientConfig, Vec<Client>>;

impl ComponentFactory<ClientImplementation, ClientConfig, Vec<Client>> {
    pub fn with_defaults() -> Self {
        Self::new()
            .with_constructor(ClientImplementation::Python, clients)
            .with_constructor(ClientImplementation::Java, clients)
            .with_constructor(ClientImplementation::NodeJs, clients)
    }
}

/// One client per role the implementation ships, narrowed to the host's
/// `clients` list when present. Requested roles the implementation lacks are
/// dropped.
fn clients(
    implementation: ClientImplementation,
    ctx: ComponentContext<ClientConfig>,
) -> Result<Vec<Client>, ComponentError> {
    let roles = implementation
        .roles()
        .iter()
        .copied()
        .filter(|role| match &ctx.config.clients {
            Some(wanted) => wanted.contains(role),
            None => true,
        })
        .collect::<Vec<_>>();

    Ok(roles
        .into_iter()
        .map(|role| {
            Client::new(
                implementation,
                role,
                Arc::clone(&ctx.node),
                Arc::clone(&ctx.executor),
                ctx.config.clone(),
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::client::ClientRole;
    use crate::stub::StubExecutor;
    use crate::system::NodeFactory;

    fn context(clients: Option<Vec<ClientRole>>) -> ComponentContext<ClientConfig> {
        let node = NodeFactory::create_node("client1", Arc::new(StubExecutor::new("stub")), None);
        ComponentContext::new(
            node,
            ClientConfig {
                clients,
                ..ClientConfig::default()
            },
        )
    }

    fn roles(clients: &[Client]) -> Vec<ClientRole> {
        clients.iter().map(Client::role).collect()
    }

    #[test]
    fn test_all_roles_by_default() {
        let clients = ClientFactory::with_defaults().create("python", context(None)).unwrap();

        assert_eq!(
            roles(&clients),
            vec![ClientRole::Sender, ClientRole::Receiver, ClientRole::Connector]
        );
        assert!(clients.iter().all(|c| c.node().hostname() == "client1"));
    }

    #[test]
    fn test_roles_narrowed_by_host_config() {
        let clients = ClientFactory::with_defaults()
            .create("cli-rhea", context(Some(vec![ClientRole::Receiver])))
            .unwrap();

        assert_eq!(roles(&clients), vec![ClientRole::Receiver]);
        assert_eq!(clients[0].name(), "client1:nodejs-receiver");
    }

    #[test]
    fn test_unsupported_roles_yield_no_clients() {
        let clients = ClientFactory::with_defaults()
            .create("java", context(Some(vec![ClientRole::Connector])))
            .unwrap();

        assert!(clients.is_empty());
    }

    #[test]
    fn test_unknown_client() {
        assert!(matches!(
            ClientFactory::with_defaults().create("ruby", context(None)),
            Err(ComponentError::UnknownImplementation { .. })
        ));
    }
}
