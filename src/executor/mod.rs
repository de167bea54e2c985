// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Command execution backends.
//!
//! Every node owns one executor. The executor decides *where* a command runs;
//! the returned [`Execution`] tracks *how* it ended:
//!
//! ```text
//! Command → Executor::submit → Execution → wait / check / completed_successfully
//! ```
//!
//! # Backends
//!
//! * [`LocalExecutor`] - child process of the harness
//! * [`SshExecutor`] - remote host through the OpenSSH client

mod command;
mod execution;
mod factory;
mod local;
mod ssh;

pub use command::{shell_quote, Command};
pub use execution::{Execution, ExecutionOutcome, ExecutionOutput};
pub use factory::{ExecutorFactory, ExecutorKind};
pub use local::LocalExecutor;
pub use ssh::{SshExecutor, SSH_TRANSPORT_FAILURE};
