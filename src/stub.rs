// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Test doubles for the executor and management seams.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ExecutorError;
use crate::executor::{Command, Execution, ExecutionOutput, ExecutorKind};
use crate::management::{AddressRecord, ManagementResult, QueueRecord};
use crate::traits::{Executor, ManagementClient};

/// An executor that records every command and replays canned outputs.
///
/// Queued outputs are used first, in order; after that every command gets
/// the default output (a zero exit unless configured otherwise).
#[derive(Debug)]
pub struct StubExecutor {
    name: String,
    default_output: ExecutionOutput,
    queued: Mutex<VecDeque<ExecutionOutput>>,
    commands: Mutex<Vec<Command>>,
}

impl StubExecutor {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            default_output: ExecutionOutput::exited(0, "", ""),
            queued: Mutex::new(VecDeque::new()),
            commands: Mutex::new(Vec::new()),
        }
    }

    pub fn with_output(mut self, output: ExecutionOutput) -> Self {
        self.default_output = output;
        self
    }

    pub fn push_output(&self, output: ExecutionOutput) {
        self.queued.lock().unwrap().push_back(output);
    }

    pub fn commands(&self) -> Vec<Command> {
        self.commands.lock().unwrap().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.commands().iter().map(|c| c.to_shell_line()).collect()
    }
}

impl Executor for StubExecutor {
    fn submit(&self, command: &Command) -> Result<Execution, ExecutorError> {
        if command.program().is_none() {
            return Err(ExecutorError::EmptyCommand);
        }
        self.commands.lock().unwrap().push(command.clone());

        let output = self
            .queued
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.default_output.clone());

        Ok(Execution::completed(command.clone(), &self.name, output))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ExecutorKind {
        ExecutorKind::Local
    }
}

#[derive(Debug)]
struct StubState {
    queues: Mutex<ManagementResult<Vec<QueueRecord>>>,
    addresses: Mutex<ManagementResult<Vec<AddressRecord>>>,
    list_queues_calls: AtomicUsize,
    list_addresses_calls: AtomicUsize,
    calls: Mutex<Vec<String>>,
}

/// A management client with configurable listings and call counters.
///
/// Clones share state, so a test can keep one handle while the broker owns
/// another.
#[derive(Debug, Clone)]
pub struct StubManagementClient {
    state: Arc<StubState>,
}

impl Default for StubManagementClient {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl StubManagementClient {
    pub fn new(addresses: Vec<AddressRecord>, queues: Vec<QueueRecord>) -> Self {
        Self {
            state: Arc::new(StubState {
                queues: Mutex::new(ManagementResult::ok(queues)),
                addresses: Mutex::new(ManagementResult::ok(addresses)),
                list_queues_calls: AtomicUsize::new(0),
                list_addresses_calls: AtomicUsize::new(0),
                calls: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn set_queues(&self, result: ManagementResult<Vec<QueueRecord>>) {
        *self.state.queues.lock().unwrap() = result;
    }

    pub fn set_addresses(&self, result: ManagementResult<Vec<AddressRecord>>) {
        *self.state.addresses.lock().unwrap() = result;
    }

    pub fn list_queues_calls(&self) -> usize {
        self.state.list_queues_calls.load(Ordering::SeqCst)
    }

    pub fn list_addresses_calls(&self) -> usize {
        self.state.list_addresses_calls.load(Ordering::SeqCst)
    }

    /// Mutating calls, formatted as `operation(arg, ...)`.
    pub fn calls(&self) -> Vec<String> {
        self.state.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> ManagementResult {
        self.state.calls.lock().unwrap().push(call);
        ManagementResult::ok(serde_json::Value::Null)
    }
}

impl ManagementClient for StubManagementClient {
    fn list_queues(&self) -> ManagementResult<Vec<QueueRecord>> {
        self.state.list_queues_calls.fetch_add(1, Ordering::SeqCst);
        self.state.queues.lock().unwrap().clone()
    }

    fn list_addresses(&self) -> ManagementResult<Vec<AddressRecord>> {
        self.state.list_addresses_calls.fetch_add(1, Ordering::SeqCst);
        self.state.addresses.lock().unwrap().clone()
    }

    fn create_address(&self, name: &str, routing_type: &str) -> ManagementResult {
        self.record(format!("create_address({}, {})", name, routing_type))
    }

    fn create_queue(
        &self,
        address: &str,
        queue: &str,
        durable: bool,
        routing_type: &str,
    ) -> ManagementResult {
        self.record(format!(
            "create_queue({}, {}, {}, {})",
            address, queue, durable, routing_type
        ))
    }

    fn delete_address(&self, name: &str, force: bool) -> ManagementResult {
        self.record(format!("delete_address({}, {})", name, force))
    }

    fn delete_queue(&self, name: &str, remove_consumers: bool) -> ManagementResult {
        self.record(format!("delete_queue({}, {})", name, remove_consumers))
    }
}

pub fn address_record(name: &str, routing_types: &str) -> AddressRecord {
    AddressRecord {
        name: name.to_string(),
        routing_types: routing_types.to_string(),
    }
}

pub fn queue_record(name: &str, routing_type: &str, address: &str, message_count: u64) -> QueueRecord {
    QueueRecord {
        name: name.to_string(),
        routing_type: routing_type.to_string(),
        address: address.to_string(),
        message_count,
    }
}
