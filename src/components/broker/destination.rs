// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::fmt;

use crate::errors::DestinationError;
use crate::management::{AddressRecord, QueueRecord};

/// Delivery semantics of an address or queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutingType {
    /// Point to point: each message goes to one consumer.
    Anycast,
    /// Publish/subscribe: each queue gets a copy.
    Multicast,
    /// Addresses only; a queue always picks one of the other two.
    Both,
}

impl RoutingType {
    /// Read a routing type as brokers report it.
    ///
    /// Accepts a single name, `BOTH`, and lists such as `ANYCAST, MULTICAST`
    /// or `[MULTICAST,ANYCAST]`, in any case.
    pub fn from_value(value: &str) -> Option<Self> {
        let mut anycast = false;
        let mut multicast = false;

        let list = value.trim().trim_start_matches('[').trim_end_matches(']');
        for part in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.to_ascii_uppercase().as_str() {
                "ANYCAST" => anycast = true,
                "MULTICAST" => multicast = true,
                "BOTH" => {
                    anycast = true;
                    multicast = true;
                }
                _ => return None,
            }
        }

        match (anycast, multicast) {
            (true, true) => Some(RoutingType::Both),
            (true, false) => Some(RoutingType::Anycast),
            (false, true) => Some(RoutingType::Multicast),
            (false, false) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingType::Anycast => "ANYCAST",
            RoutingType::Multicast => "MULTICAST",
            RoutingType::Both => "BOTH",
        }
    }

    /// Value the broker management API expects.
    pub fn management_value(&self) -> &'static str {
        match self {
            RoutingType::Both => "ANYCAST, MULTICAST",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for RoutingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A named destination and the queues bound to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub name: String,
    pub routing_type: RoutingType,
    pub queues: Vec<Queue>,
}

impl Address {
    pub fn new(name: impl Into<String>, routing_type: RoutingType) -> Self {
        Self {
            name: name.into(),
            routing_type,
            queues: Vec::new(),
        }
    }
}

/// A queue bound to exactly one address, referenced by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue {
    pub name: String,
    pub routing_type: RoutingType,
    pub address: String,
    pub message_count: u64,
}

impl Queue {
    pub fn new(name: impl Into<String>, routing_type: RoutingType, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            routing_type,
            address: address.into(),
            message_count: 0,
        }
    }
}

/// Addresses and queues from one refresh, fully linked.
///
/// Every queue's address is present in the snapshot, and each address lists
/// exactly the queues that name it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationSnapshot {
    addresses: Vec<Address>,
    queues: Vec<Queue>,
    index: HashMap<String, usize>,
}

impl DestinationSnapshot {
    pub fn build(
        address_records: Vec<AddressRecord>,
        queue_records: Vec<QueueRecord>,
    ) -> Result<Self, DestinationError> {
        let mut addresses = Vec::with_capacity(address_records.len());
        let mut index = HashMap::with_capacity(address_records.len());

        for record in address_records {
            let routing_type = parse_routing_type(&record.name, &record.routing_types)?;
            index.insert(record.name.clone(), addresses.len());
            addresses.push(Address::new(record.name, routing_type));
        }

        let mut queues = Vec::with_capacity(queue_records.len());
        for record in queue_records {
            let routing_type = parse_routing_type(&record.name, &record.routing_type)?;
            let position = *index
                .get(&record.address)
                .ok_or_else(|| DestinationError::UnknownAddress {
                    queue: record.name.clone(),
                    address: record.address.clone(),
                })?;

            let queue = Queue {
                name: record.name,
                routing_type,
                address: record.address,
                message_count: record.message_count,
            };
            addresses[position].queues.push(queue.clone());
            queues.push(queue);
        }

        Ok(Self {
            addresses,
            queues,
            index,
        })
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn queues(&self) -> &[Queue] {
        &self.queues
    }

    pub fn address(&self, name: &str) -> Option<&Address> {
        self.index.get(name).map(|&i| &self.addresses[i])
    }

    /// The address `queue` is bound to.
    pub fn address_of(&self, queue: &Queue) -> Option<&Address> {
        self.address(&queue.address)
    }
}

fn parse_routing_type(name: &str, value: &str) -> Result<RoutingType, DestinationError> {
    RoutingType::from_value(value).ok_or_else(|| DestinationError::InvalidRoutingType {
        name: name.to_string(),
        value: value.to_string(),
    })
}
