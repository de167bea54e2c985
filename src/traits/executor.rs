use std::fmt::Debug;

use crate::errors::ExecutorError;
use crate::executor::{Command, Execution, ExecutorKind};

/// A backend able to run commands on behalf of a node.
///
/// - `submit`: start the command and hand back its [`Execution`]. An `Err`
///   means the command never started (spawn failure, empty command); a command
///   that started and then failed is reported through the execution outcome.
///
/// Implementations block only as long as it takes to start the command; the
/// caller decides when to wait on the returned execution.
pub trait Executor: Send + Sync + Debug {
    fn submit(&self, command: &Command) -> Result<Execution, ExecutorError>;

    /// Human readable name, carried by every execution it produces.
    fn name(&self) -> &str;

    fn kind(&self) -> ExecutorKind;
}
