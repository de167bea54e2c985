// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, Read};
use std::process::Child;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::errors::ExecutorError;
use crate::executor::Command;
use crate::observability::messages::executor::CommandCompleted;
use crate::observability::messages::StructuredLog;

/// How often a running process is polled while a timeout is pending.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Final state of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// The command ran and exited with the given status.
    Exited(i32),
    /// The transport (e.g. ssh) failed before the command could run.
    TransportFailed(i32),
    /// The process was killed by a signal, including via `terminate`.
    Signaled,
    /// The command exceeded its timeout and was killed.
    TimedOut,
}

/// Captured result of a completed execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutput {
    pub outcome: ExecutionOutcome,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

impl ExecutionOutput {
    pub fn exited(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            outcome: ExecutionOutcome::Exited(code),
            stdout: stdout.into(),
            stderr: stderr.into(),
            duration: Duration::ZERO,
        }
    }

    pub fn success(&self) -> bool {
        self.outcome == ExecutionOutcome::Exited(0)
    }
}

/// A submitted command and its completion state.
///
/// An execution starts out running (backed by a child process) and becomes
/// completed the first time it is waited on; from then on its output never
/// changes.
#[derive(Debug)]
pub struct Execution {
    command: Command,
    executor: String,
    child: Option<Child>,
    output: Option<ExecutionOutput>,
    /// Why collecting the process failed, reported by every later wait.
    failure: Option<String>,
    transport_failure_code: Option<i32>,
    started: Instant,
}

impl Execution {
    /// Wrap a freshly spawned process. A process exiting with
    /// `transport_failure_code` is reported as a transport failure.
    pub(crate) fn spawned(
        command: Command,
        executor: &str,
        child: Child,
        transport_failure_code: Option<i32>,
    ) -> Self {
        Self {
            command,
            executor: executor.to_string(),
            child: Some(child),
            output: None,
            failure: None,
            transport_failure_code,
            started: Instant::now(),
        }
    }

    /// An execution that is already complete, for executors that do not run
    /// a process of their own.
    pub fn completed(command: Command, executor: &str, output: ExecutionOutput) -> Self {
        Self {
            command,
            executor: executor.to_string(),
            child: None,
            output: Some(output),
            failure: None,
            transport_failure_code: None,
            started: Instant::now(),
        }
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Name of the executor that produced this execution.
    pub fn executor(&self) -> &str {
        &self.executor
    }

    /// Output, if the execution has already completed.
    pub fn output(&self) -> Option<&ExecutionOutput> {
        self.output.as_ref()
    }

    pub fn is_running(&mut self) -> Result<bool, ExecutorError> {
        match self.child.as_mut() {
            Some(child) => Ok(child.try_wait()?.is_none()),
            None => Ok(false),
        }
    }

    /// Block until the command completes (or its timeout expires) and return
    /// its output.
    pub fn wait(&mut self) -> Result<&ExecutionOutput, ExecutorError> {
        if let Some(mut child) = self.child.take() {
            let result = collect(
                &mut child,
                self.command.timeout(),
                self.started,
                self.transport_failure_code,
            );
            self.settle(child, result)?;
        }

        match &self.output {
            Some(output) => Ok(output),
            None => {
                let reason = self.failure.as_deref().unwrap_or("execution has no process");
                Err(ExecutorError::Io(io::Error::new(io::ErrorKind::Other, reason.to_string())))
            }
        }
    }

    /// Record the result of collecting `child`. On failure the process is
    /// killed and reaped, and the error is kept for later waits.
    fn settle(
        &mut self,
        mut child: Child,
        result: Result<ExecutionOutput, ExecutorError>,
    ) -> Result<(), ExecutorError> {
        match result {
            Ok(output) => {
                CommandCompleted {
                    executor: &self.executor,
                    command: &self.command,
                    outcome: output.outcome,
                    duration: output.duration,
                }
                .log();

                self.output = Some(output);
                Ok(())
            }
            Err(error) => {
                let _ = child.kill();
                let _ = child.wait();
                self.failure = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Wait and report whether the command exited with status zero.
    pub fn completed_successfully(&mut self) -> bool {
        matches!(self.wait(), Ok(output) if output.success())
    }

    /// Kill a running command. Completed executions are left untouched.
    pub fn terminate(&mut self) -> Result<(), ExecutorError> {
        if let Some(child) = self.child.as_mut() {
            // Fails only when the process already exited, which wait() handles.
            let _ = child.kill();
        }
        self.wait().map(|_| ())
    }

    /// Wait and turn every outcome other than a zero exit into an error.
    pub fn check(&mut self) -> Result<&ExecutionOutput, ExecutorError> {
        let command = self.command.to_string();
        let executor = self.executor.clone();
        let timeout = self.command.timeout().unwrap_or_default();

        let output = self.wait()?;
        match output.outcome {
            ExecutionOutcome::Exited(0) => Ok(output),
            ExecutionOutcome::Exited(code) => Err(ExecutorError::CommandFailed {
                command,
                code,
                stderr: output.stderr.trim().to_string(),
            }),
            ExecutionOutcome::TransportFailed(code) => Err(ExecutorError::Transport {
                executor,
                code,
                stderr: output.stderr.trim().to_string(),
            }),
            ExecutionOutcome::Signaled => Err(ExecutorError::Signaled { command }),
            ExecutionOutcome::TimedOut => Err(ExecutorError::TimedOut { command, timeout }),
        }
    }
}

fn collect(
    child: &mut Child,
    timeout: Option<Duration>,
    started: Instant,
    transport_failure_code: Option<i32>,
) -> Result<ExecutionOutput, ExecutorError> {
    // Pipes are drained on their own threads so a chatty process never blocks
    // on a full pipe while we poll for its exit.
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let mut timed_out = false;
    let status = match timeout {
        None => child.wait()?,
        Some(limit) => loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if started.elapsed() >= limit {
                let _ = child.kill();
                timed_out = true;
                break child.wait()?;
            }
            thread::sleep(POLL_INTERVAL);
        },
    };

    let outcome = if timed_out {
        ExecutionOutcome::TimedOut
    } else {
        match status.code() {
            Some(code) if Some(code) == transport_failure_code => ExecutionOutcome::TransportFailed(code),
            Some(code) => ExecutionOutcome::Exited(code),
            None => ExecutionOutcome::Signaled,
        }
    };

    Ok(ExecutionOutput {
        outcome,
        stdout: join(stdout),
        stderr: join(stderr),
        duration: started.elapsed(),
    })
}

fn drain<R: Read + Send + 'static>(mut reader: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn join(handle: Option<JoinHandle<String>>) -> String {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_execution_is_stable() {
        let mut execution = Execution::completed(
            Command::new(["true"]),
            "stub",
            ExecutionOutput::exited(0, "ok", ""),
        );

        assert!(!execution.is_running().unwrap());
        assert!(execution.completed_successfully());
        assert_eq!(execution.wait().unwrap().stdout, "ok");
        assert_eq!(execution.executor(), "stub");
    }

    #[test]
    fn test_check_maps_outcomes_to_errors() {
        let cases = vec![
            (ExecutionOutcome::Exited(0), "ok"),
            (ExecutionOutcome::Exited(2), "failed"),
            (ExecutionOutcome::TransportFailed(255), "transport"),
            (ExecutionOutcome::Signaled, "signaled"),
            (ExecutionOutcome::TimedOut, "timed_out"),
        ];

        for (outcome, expected) in cases {
            let output = ExecutionOutput {
                outcome,
                stdout: String::new(),
                stderr: "boom\n".to_string(),
                duration: Duration::ZERO,
            };
            let mut execution = Execution::completed(Command::new(["x"]), "stub", output);

            let actual = match execution.check() {
                Ok(_) => "ok",
                Err(ExecutorError::CommandFailed { code, stderr, .. }) => {
                    assert_eq!(code, 2);
                    assert_eq!(stderr, "boom");
                    "failed"
                }
                Err(ExecutorError::Transport { code, .. }) => {
                    assert_eq!(code, 255);
                    "transport"
                }
                Err(ExecutorError::Signaled { .. }) => "signaled",
                Err(ExecutorError::TimedOut { .. }) => "timed_out",
                Err(other) => panic!("unexpected error: {other}"),
            };
            assert_eq!(actual, expected, "outcome {:?}", outcome);
        }
    }

    #[test]
    fn test_transport_failure_is_not_success() {
        let output = ExecutionOutput {
            outcome: ExecutionOutcome::TransportFailed(255),
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::ZERO,
        };
        let mut execution = Execution::completed(Command::new(["whoami"]), "ssh", output);
        assert!(!execution.completed_successfully());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_collection_reaps_child_and_keeps_error() {
        let child = std::process::Command::new("sleep").arg("5").spawn().unwrap();
        let pid = child.id();
        let mut execution = Execution::spawned(Command::new(["sleep", "5"]), "local", child, None);

        let child = execution.child.take().unwrap();
        let interrupted = io::Error::new(io::ErrorKind::Other, "wait interrupted");
        let error = execution.settle(child, Err(ExecutorError::Io(interrupted))).unwrap_err();
        assert!(error.to_string().contains("wait interrupted"));

        let alive = std::process::Command::new("sh")
            .args(["-c", &format!("kill -0 {}", pid)])
            .status()
            .unwrap();
        assert!(!alive.success(), "process {} should be gone", pid);

        let later = execution.wait().unwrap_err();
        assert!(later.to_string().contains("wait interrupted"));
        assert!(execution.output().is_none());
        assert!(!execution.completed_successfully());
    }
}
