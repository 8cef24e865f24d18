//! # Process Execution
//!
//! Subprocess execution behind the [`ProcessRunner`] trait so the
//! orchestrator can be driven by a fake in tests.
//!
//! A command that cannot be spawned (binary not on `PATH`, permission
//! denied) is not an error here: it comes back as an unsuccessful
//! [`ExecutionResult`] whose stderr carries the spawn error, exactly like
//! a tool that ran and exited non-zero.

use async_trait::async_trait;
use std::ffi::OsString;
use std::time::Instant;
use tokio::process::Command;
use tracing::debug;

/// Outcome of one subprocess invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// The argv that was run
    pub command: Vec<OsString>,
    /// True only when the process ran and exited with status 0
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    /// Result for a command that never started.
    pub fn spawn_failure(command: Vec<OsString>, reason: impl std::fmt::Display) -> Self {
        Self {
            command,
            success: false,
            stdout: String::new(),
            stderr: reason.to_string(),
        }
    }
}

/// Runs an argv to completion.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, argv: &[OsString]) -> ExecutionResult;
}

/// [`ProcessRunner`] backed by `tokio::process::Command`.
///
/// The first token is the program, resolved through `PATH` by the OS. No
/// shell is involved and no timeout is applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    async fn run(&self, argv: &[OsString]) -> ExecutionResult {
        let Some((program, args)) = argv.split_first() else {
            return ExecutionResult::spawn_failure(Vec::new(), "empty command line");
        };

        let start_time = Instant::now();
        let output = match Command::new(program).args(args).output().await {
            Ok(output) => output,
            Err(e) => {
                debug!("Failed to spawn {}: {}", program.to_string_lossy(), e);
                return ExecutionResult::spawn_failure(
                    argv.to_vec(),
                    format!("failed to start {}: {}", program.to_string_lossy(), e),
                );
            }
        };
        debug!("{} exited with {} after {:?}", program.to_string_lossy(), output.status, start_time.elapsed());

        ExecutionResult {
            command: argv.to_vec(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
