// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message brokers and their destinations.
//!
//! A broker keeps the result of its last refresh as an immutable
//! [`DestinationSnapshot`]. Readers clone the `Arc` and never observe a
//! half-built listing; a refresh builds a complete snapshot first and then
//! swaps it in.

mod destination;
mod factory;

use std::fmt;
use std::sync::{Arc, RwLock};

pub use destination::{Address, DestinationSnapshot, Queue, RoutingType};
pub use factory::BrokerFactory;

use crate::components::protocols::Protocol;
use crate::components::BrokerImplementation;
use crate::config::BrokerConfig;
use crate::errors::BrokerError;
use crate::management::ManagementResult;
use crate::observability::messages::broker::{
    AddressFound, QueueFound, RefreshCompleted, RefreshFailed, RefreshStarted,
};
use crate::observability::messages::StructuredLog;
use crate::system::{Node, Service};
use crate::traits::{Executor, ManagementClient};

pub struct Broker {
    name: String,
    implementation: BrokerImplementation,
    node: Arc<Node>,
    executor: Arc<dyn Executor>,
    service: Option<Service>,
    config: BrokerConfig,
    management: Option<Box<dyn ManagementClient>>,
    snapshot: RwLock<Option<Arc<DestinationSnapshot>>>,
}

impl Broker {
    /// A broker named after its node's hostname, without a management client.
    pub fn new(
        implementation: BrokerImplementation,
        node: Arc<Node>,
        executor: Arc<dyn Executor>,
        service: Option<Service>,
        config: BrokerConfig,
    ) -> Self {
        Self {
            name: node.hostname().to_string(),
            implementation,
            node,
            executor,
            service,
            config,
            management: None,
            snapshot: RwLock::new(None),
        }
    }

    pub fn with_management_client(mut self, client: Box<dyn ManagementClient>) -> Self {
        self.management = Some(client);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn implementation(&self) -> BrokerImplementation {
        self.implementation
    }

    pub fn node(&self) -> &Arc<Node> {
        &self.node
    }

    pub fn executor(&self) -> &Arc<dyn Executor> {
        &self.executor
    }

    pub fn service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    pub fn config(&self) -> &BrokerConfig {
        &self.config
    }

    pub fn supported_protocols(&self) -> &'static [Protocol] {
        self.implementation.supported_protocols()
    }

    pub fn management_client(&self) -> Option<&dyn ManagementClient> {
        self.management.as_deref()
    }

    /// Current snapshot, refreshing first when asked to or when none exists.
    ///
    /// A failed refresh is logged and the previous snapshot, if any, is
    /// returned unchanged.
    pub fn snapshot(&self, refresh: bool) -> Option<Arc<DestinationSnapshot>> {
        if !refresh {
            if let Some(cached) = self.cached() {
                return Some(cached);
            }
        }

        match self.try_refresh() {
            Ok(snapshot) => Some(snapshot),
            Err(error) => {
                RefreshFailed {
                    broker: &self.name,
                    error: &error,
                }
                .log();
                self.cached()
            }
        }
    }

    pub fn queues(&self, refresh: bool) -> Vec<Queue> {
        self.snapshot(refresh)
            .map(|snapshot| snapshot.queues().to_vec())
            .unwrap_or_default()
    }

    pub fn addresses(&self, refresh: bool) -> Vec<Address> {
        self.snapshot(refresh)
            .map(|snapshot| snapshot.addresses().to_vec())
            .unwrap_or_default()
    }

    /// Rebuild the snapshot from the management client and publish it.
    ///
    /// On error nothing is published and the previous snapshot stays.
    pub fn try_refresh(&self) -> Result<Arc<DestinationSnapshot>, BrokerError> {
        RefreshStarted { broker: &self.name }.log();
        let client = self.require_management()?;

        let queues = client.list_queues();
        let addresses = client.list_addresses();

        let queues = match (queues.success, queues.data) {
            (true, data) => data.unwrap_or_default(),
            (false, _) => return Err(self.list_failed("list_queues", queues.error)),
        };
        let addresses = match (addresses.success, addresses.data) {
            (true, data) => data.unwrap_or_default(),
            (false, _) => return Err(self.list_failed("list_addresses", addresses.error)),
        };

        let snapshot = DestinationSnapshot::build(addresses, queues).map_err(|source| {
            BrokerError::Inconsistent {
                broker: self.name.clone(),
                source,
            }
        })?;

        for address in snapshot.addresses() {
            AddressFound {
                name: &address.name,
                routing_type: address.routing_type,
            }
            .log();
        }
        for queue in snapshot.queues() {
            QueueFound {
                name: &queue.name,
                address: &queue.address,
                routing_type: queue.routing_type,
                message_count: queue.message_count,
            }
            .log();
        }

        let snapshot = Arc::new(snapshot);
        self.publish(Arc::clone(&snapshot));

        RefreshCompleted {
            broker: &self.name,
            address_count: snapshot.addresses().len(),
            queue_count: snapshot.queues().len(),
        }
        .log();

        Ok(snapshot)
    }

    pub fn create_address(&self, address: &Address) -> Result<ManagementResult, BrokerError> {
        let client = self.require_management()?;
        Ok(client.create_address(&address.name, address.routing_type.management_value()))
    }

    /// Create `queue` on `address`.
    ///
    /// # Errors
    /// `InvalidRoutingType` when the queue asks for BOTH; nothing is sent to
    /// the broker in that case.
    pub fn create_queue(
        &self,
        queue: &Queue,
        address: &Address,
        durable: bool,
    ) -> Result<ManagementResult, BrokerError> {
        if queue.routing_type == RoutingType::Both {
            return Err(BrokerError::InvalidRoutingType {
                queue: queue.name.clone(),
            });
        }

        let client = self.require_management()?;
        Ok(client.create_queue(&address.name, &queue.name, durable, queue.routing_type.as_str()))
    }

    pub fn delete_address(&self, name: &str, force: bool) -> Result<ManagementResult, BrokerError> {
        let client = self.require_management()?;
        Ok(client.delete_address(name, force))
    }

    pub fn delete_queue(&self, name: &str, remove_consumers: bool) -> Result<ManagementResult, BrokerError> {
        let client = self.require_management()?;
        Ok(client.delete_queue(name, remove_consumers))
    }

    fn require_management(&self) -> Result<&dyn ManagementClient, BrokerError> {
        self.management_client()
            .ok_or_else(|| BrokerError::ManagementUnavailable {
                broker: self.name.clone(),
            })
    }

    fn list_failed(&self, operation: &'static str, error: Option<String>) -> BrokerError {
        BrokerError::ListFailed {
            broker: self.name.clone(),
            operation,
            message: error.unwrap_or_else(|| "no error reported".to_string()),
        }
    }

    fn cached(&self) -> Option<Arc<DestinationSnapshot>> {
        match self.snapshot.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn publish(&self, snapshot: Arc<DestinationSnapshot>) {
        let mut guard = match self.snapshot.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(snapshot);
    }
}

impl fmt::Debug for Broker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broker")
            .field("name", &self.name)
            .field("implementation", &self.implementation)
            .field("node", &self.node)
            .field("service", &self.service)
            .field("management", &self.management.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::management::ManagementResult;
    use crate::stub::{address_record, queue_record, StubExecutor, StubManagementClient};
    use crate::system::NodeFactory;

    fn broker(client: Option<StubManagementClient>) -> Broker {
        let executor: Arc<dyn Executor> = Arc::new(StubExecutor::new("stub"));
        let node = NodeFactory::create_node("broker1", Arc::clone(&executor), Some("10.0.0.5"));
        let broker = Broker::new(
            BrokerImplementation::Artemis,
            node,
            executor,
            None,
            BrokerConfig::default(),
        );
        match client {
            Some(client) => broker.with_management_client(Box::new(client)),
            None => broker,
        }
    }

    fn q1_client() -> StubManagementClient {
        StubManagementClient::new(
            vec![address_record("q1addr", "ANYCAST")],
            vec![queue_record("q1", "ANYCAST", "q1addr", 5)],
        )
    }

    #[test]
    fn test_refresh_links_q1_to_q1addr() {
        let broker = broker(Some(q1_client()));

        let addresses = broker.addresses(true);
        assert_eq!(addresses.len(), 1);
        assert_eq!(addresses[0].name, "q1addr");
        assert_eq!(addresses[0].queues.len(), 1);
        assert_eq!(addresses[0].queues[0].name, "q1");

        let queues = broker.queues(false);
        assert_eq!(queues[0].message_count, 5);
        assert_eq!(queues[0].address, "q1addr");
    }

    #[test]
    fn test_cached_snapshot_skips_management_calls() {
        let client = q1_client();
        let broker = broker(Some(client.clone()));

        let first = broker.snapshot(true).unwrap();
        assert_eq!(client.list_queues_calls(), 1);
        assert_eq!(client.list_addresses_calls(), 1);

        let second = broker.snapshot(false).unwrap();
        broker.queues(false);
        broker.addresses(false);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(client.list_queues_calls(), 1);
        assert_eq!(client.list_addresses_calls(), 1);

        broker.queues(true);
        assert_eq!(client.list_queues_calls(), 2);
        assert_eq!(client.list_addresses_calls(), 2);
    }

    #[test]
    fn test_first_read_without_refresh_populates_cache() {
        let client = q1_client();
        let broker = broker(Some(client.clone()));

        assert_eq!(broker.queues(false).len(), 1);
        assert_eq!(client.list_queues_calls(), 1);
    }

    #[test]
    fn test_failed_listing_keeps_previous_snapshot() {
        let client = q1_client();
        let broker = broker(Some(client.clone()));
        let before = broker.addresses(true);

        client.set_addresses(ManagementResult::failed("connection refused"));
        let after = broker.addresses(true);

        assert_eq!(before, after);
        assert!(matches!(
            broker.try_refresh(),
            Err(BrokerError::ListFailed { operation: "list_addresses", .. })
        ));
        assert_eq!(broker.addresses(false), before);
    }

    #[test]
    fn test_failed_queue_listing_keeps_previous_snapshot() {
        let client = q1_client();
        let broker = broker(Some(client.clone()));
        let before = broker.queues(true);

        client.set_queues(ManagementResult::failed("timeout"));

        assert_eq!(broker.queues(true), before);
        assert!(matches!(
            broker.try_refresh(),
            Err(BrokerError::ListFailed { operation: "list_queues", .. })
        ));
    }

    #[test]
    fn test_failure_without_cache_yields_empty() {
        let client = StubManagementClient::default();
        client.set_queues(ManagementResult::failed("down"));
        let broker = broker(Some(client));

        assert!(broker.queues(true).is_empty());
        assert!(broker.snapshot(false).is_none());
    }

    #[test]
    fn test_inconsistent_listing_keeps_previous_snapshot() {
        let client = q1_client();
        let broker = broker(Some(client.clone()));
        let before = broker.snapshot(true).unwrap();

        client.set_queues(ManagementResult::ok(vec![queue_record("q2", "ANYCAST", "gone", 0)]));

        assert!(matches!(
            broker.try_refresh(),
            Err(BrokerError::Inconsistent { .. })
        ));
        assert!(Arc::ptr_eq(&before, &broker.snapshot(false).unwrap()));
    }

    #[test]
    fn test_empty_refresh_counts_as_cached() {
        let client = StubManagementClient::default();
        let broker = broker(Some(client.clone()));

        assert!(broker.addresses(true).is_empty());
        assert!(broker.addresses(false).is_empty());
        assert_eq!(client.list_addresses_calls(), 1);
    }

    #[test]
    fn test_create_queue_rejects_both() {
        let client = q1_client();
        let broker = broker(Some(client.clone()));
        let address = Address::new("q1addr", RoutingType::Both);

        for name in ["q1", "", "anything"] {
            let queue = Queue::new(name, RoutingType::Both, "q1addr");
            assert!(matches!(
                broker.create_queue(&queue, &address, true),
                Err(BrokerError::InvalidRoutingType { .. })
            ));
        }
        assert!(client.calls().is_empty());
    }

    #[test]
    fn test_create_and_delete_pass_through() {
        let client = q1_client();
        let broker = broker(Some(client.clone()));
        let address = Address::new("events", RoutingType::Both);
        let queue = Queue::new("events.a", RoutingType::Multicast, "events");

        assert!(broker.create_address(&address).unwrap().success);
        assert!(broker.create_queue(&queue, &address, false).unwrap().success);
        assert!(broker.delete_queue("events.a", true).unwrap().success);
        assert!(broker.delete_address("events", false).unwrap().success);

        assert_eq!(
            client.calls(),
            vec![
                "create_address(events, ANYCAST, MULTICAST)",
                "create_queue(events, events.a, false, MULTICAST)",
                "delete_queue(events.a, true)",
                "delete_address(events, false)",
            ]
        );
    }

    #[test]
    fn test_broker_without_management_client() {
        let broker = broker(None);

        assert!(broker.queues(true).is_empty());
        assert!(matches!(
            broker.delete_queue("q1", false),
            Err(BrokerError::ManagementUnavailable { .. })
        ));
    }
}
