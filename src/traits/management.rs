use crate::management::{AddressRecord, ManagementResult, QueueRecord};

/// Administrative control-plane operations of a broker family.
///
/// Every call returns the uniform [`ManagementResult`] envelope; transport
/// failures are reported as `success == false` rather than as a separate
/// error type.
pub trait ManagementClient: Send + Sync {
    fn list_queues(&self) -> ManagementResult<Vec<QueueRecord>>;

    fn list_addresses(&self) -> ManagementResult<Vec<AddressRecord>>;

    /// `routing_type` is the broker's wire value, e.g. `"ANYCAST, MULTICAST"`.
    fn create_address(&self, name: &str, routing_type: &str) -> ManagementResult;

    fn create_queue(
        &self,
        address: &str,
        queue: &str,
        durable: bool,
        routing_type: &str,
    ) -> ManagementResult;

    fn delete_address(&self, name: &str, force: bool) -> ManagementResult;

    fn delete_queue(&self, name: &str, remove_consumers: bool) -> ManagementResult;
}
