//! Tool domain value objects: immutable command results
//!
//! Every invocation yields exactly one [`CommandResult`]. Process outcomes are
//! encoded in [`FailureKind`] rather than raised as errors, so the calling
//! agent always receives text it can reason about.
//!
//! | Kind | `succeeded` | Output text |
//! |------|:---:|-------------|
//! | `None` | yes | captured output |
//! | `NonZeroExit` | no | captured output + exit code line |
//! | `SpawnFailure` | no | spawn diagnostic only |
//! | `Interrupted` | no | output so far + interruption line |
//! | `TimedOut` | no | output so far + timeout line |

use serde::{Deserialize, Serialize};

/// Diagnostic appended when the child exits with a non-zero code
pub const NON_ZERO_EXIT_MESSAGE: &str = "Process did not complete successfully. Exit code:";

/// Diagnostic appended when waiting on the child is interrupted
pub const INTERRUPTED_MESSAGE: &str = "Process was interrupted before completion";

/// Classification of a process outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The process ran and exited with code 0
    None,
    /// The process could not be started at all
    SpawnFailure,
    /// The process ran and exited with a non-zero code
    NonZeroExit,
    /// Waiting for the process was interrupted (e.g. shutdown)
    Interrupted,
    /// The configured timeout elapsed and the process was killed
    TimedOut,
}

impl FailureKind {
    pub fn as_str(&self) -> &str {
        match self {
            FailureKind::None => "none",
            FailureKind::SpawnFailure => "spawn_failure",
            FailureKind::NonZeroExit => "non_zero_exit",
            FailureKind::Interrupted => "interrupted",
            FailureKind::TimedOut => "timed_out",
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, FailureKind::None)
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured metadata about a command execution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionMetadata {
    /// Exit code of the child, when it terminated (-1 if killed by a signal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    /// Wall-clock duration in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// Outcome of running one command line to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Combined stdout/stderr text, with a diagnostic line on failure
    pub output_text: String,
    /// Whether the process ran and exited with code 0
    pub succeeded: bool,
    /// What went wrong, if anything
    pub failure_kind: FailureKind,
    #[serde(default)]
    pub metadata: ExecutionMetadata,
}

impl CommandResult {
    /// Process exited with code 0
    pub fn success(captured: &str) -> Self {
        Self::build(captured.to_string(), FailureKind::None, Some(0))
    }

    /// Process exited with a non-zero code
    pub fn non_zero_exit(captured: &str, exit_code: i32) -> Self {
        let text = format!("{}{} {}", captured, NON_ZERO_EXIT_MESSAGE, exit_code);
        Self::build(text, FailureKind::NonZeroExit, Some(exit_code))
    }

    /// Process could not be spawned; no process output exists
    pub fn spawn_failure(error: impl std::fmt::Display) -> Self {
        Self::build(
            format!("Failed to spawn command: {}", error),
            FailureKind::SpawnFailure,
            None,
        )
    }

    /// Waiting was interrupted; keeps whatever was captured so far
    pub fn interrupted(captured: &str) -> Self {
        Self::build(
            format!("{}{}", captured, INTERRUPTED_MESSAGE),
            FailureKind::Interrupted,
            None,
        )
    }

    /// The timeout elapsed; keeps whatever was captured so far
    pub fn timed_out(captured: &str, timeout_secs: u64) -> Self {
        Self::build(
            format!("{}Process timed out after {} seconds", captured, timeout_secs),
            FailureKind::TimedOut,
            None,
        )
    }

    fn build(text: String, failure_kind: FailureKind, exit_code: Option<i32>) -> Self {
        Self {
            output_text: text.trim_end().to_string(),
            succeeded: !failure_kind.is_failure(),
            failure_kind,
            metadata: ExecutionMetadata {
                exit_code,
                duration_ms: None,
            },
        }
    }

    /// Add duration metadata
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.metadata.duration_ms = Some(duration_ms);
        self
    }

    pub fn is_success(&self) -> bool {
        self.succeeded
    }

    pub fn output(&self) -> &str {
        &self.output_text
    }
}
