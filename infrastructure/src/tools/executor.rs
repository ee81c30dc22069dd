//! Shell command executor implementing [`CommandRunnerPort`].
//!
//! [`ShellCommandExecutor`] runs a resolved advisor command line through
//! `sh -c` with stdout and stderr sharing one pipe, reads that pipe line by
//! line, waits for the child to exit and classifies the outcome into a
//! [`CommandResult`].
//!
//! # Execution Path
//!
//! ```text
//! execute(command_line)
//!   ├─ spawn `sh -c <command_line>` (ADVISOR_SERVER injected)
//!   │    └─ spawn error            → SpawnFailure
//!   ├─ drain the combined output pipe until EOF, then wait for exit
//!   │    ├─ cancellation token fired → Interrupted (child left running)
//!   │    └─ configured timeout hit  → TimedOut   (child killed)
//!   └─ exit status
//!        ├─ 0                        → None
//!        ├─ otherwise                → NonZeroExit
//!        └─ wait error               → Interrupted
//! ```

use advisor_mcp_application::ports::command_runner::CommandRunnerPort;
use advisor_mcp_domain::advisor::{ADVISOR_SERVER_ENV, AdvisorSettings};
use advisor_mcp_domain::tool::value_objects::CommandResult;
use async_trait::async_trait;
use std::io;
use std::os::fd::OwnedFd;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::net::unix::pipe;
use tokio::process::{Child, Command};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Shell used to interpret command lines
const DEFAULT_SHELL: &str = "sh";

/// Diagnostic appended when the output pipe fails mid-read
const OUTPUT_READ_ERROR_MESSAGE: &str = "Failed to read process output:";

enum WaitOutcome {
    Exited(io::Result<ExitStatus>),
    Interrupted,
    TimedOut(Duration),
}

/// Executor that spawns advisor commands on the local machine.
///
/// Holds only read-only configuration, so concurrent invocations each get
/// their own child handle and output buffer.
#[derive(Debug, Clone)]
pub struct ShellCommandExecutor {
    settings: AdvisorSettings,
    shell: String,
    cancellation: CancellationToken,
}

impl ShellCommandExecutor {
    pub fn new(settings: AdvisorSettings) -> Self {
        Self {
            settings,
            shell: DEFAULT_SHELL.to_string(),
            cancellation: CancellationToken::new(),
        }
    }

    /// Override the interpreting shell (must accept `-c <command>`)
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Stop waiting on in-flight children once `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn settings(&self) -> &AdvisorSettings {
        &self.settings
    }

    async fn run(&self, command_line: &str) -> CommandResult {
        info!(
            "Executing command: {} (advisor server: {})",
            command_line, self.settings.server_url
        );

        let (output, mut child) = match self.spawn(command_line) {
            Ok(spawned) => spawned,
            Err(e) => {
                warn!("Failed to spawn '{}': {}", self.shell, e);
                return CommandResult::spawn_failure(e);
            }
        };

        let mut captured = String::new();
        let timeout = self.settings.timeout;

        let outcome = tokio::select! {
            status = async {
                drain_output(output, &mut captured).await;
                child.wait().await
            } => WaitOutcome::Exited(status),
            _ = self.cancellation.cancelled() => WaitOutcome::Interrupted,
            elapsed = wait_for(timeout) => WaitOutcome::TimedOut(elapsed),
        };

        match outcome {
            WaitOutcome::Exited(status) => classify_exit(status, &captured),
            WaitOutcome::Interrupted => {
                warn!("Interrupted while waiting for command: {}", command_line);
                CommandResult::interrupted(&captured)
            }
            WaitOutcome::TimedOut(elapsed) => {
                warn!(
                    "Command timed out after {}s, killing: {}",
                    elapsed.as_secs(),
                    command_line
                );
                if let Err(e) = child.kill().await {
                    warn!("Failed to kill timed out command: {}", e);
                }
                CommandResult::timed_out(&captured, elapsed.as_secs())
            }
        }
    }

    /// Spawn the shell with stdout and stderr writing into the same pipe.
    ///
    /// The parent's write ends are dropped before returning, so the
    /// receiver sees EOF once the child (and anything it forked) exits.
    fn spawn(&self, command_line: &str) -> io::Result<(pipe::Receiver, Child)> {
        let (reader, writer) = io::pipe()?;
        let stderr_writer = writer.try_clone()?;
        let output = pipe::Receiver::from_owned_fd(OwnedFd::from(reader))?;

        let mut command = Command::new(&self.shell);
        command
            .arg("-c")
            .arg(command_line)
            .env(ADVISOR_SERVER_ENV, &self.settings.server_url)
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(stderr_writer);

        let child = command.spawn();
        drop(command);
        Ok((output, child?))
    }
}

/// Classify the result of waiting on a child that was fully drained
fn classify_exit(status: io::Result<ExitStatus>, captured: &str) -> CommandResult {
    match status {
        Ok(status) => {
            let exit_code = status.code().unwrap_or(-1);
            debug!("Command exited with code {}", exit_code);
            if exit_code == 0 {
                CommandResult::success(captured)
            } else {
                CommandResult::non_zero_exit(captured, exit_code)
            }
        }
        Err(e) => {
            warn!("Failed to wait for command: {}", e);
            CommandResult::interrupted(captured)
        }
    }
}

#[async_trait]
impl CommandRunnerPort for ShellCommandExecutor {
    async fn execute(&self, command_line: &str) -> CommandResult {
        let start = Instant::now();
        let result = self.run(command_line).await;
        result.with_duration(start.elapsed().as_millis() as u64)
    }
}

/// Resolves after `timeout`, or never when no timeout is configured
async fn wait_for(timeout: Option<Duration>) -> Duration {
    match timeout {
        Some(duration) => {
            tokio::time::sleep(duration).await;
            duration
        }
        None => std::future::pending().await,
    }
}

/// Read the combined output to EOF, appending whole lines in arrival order.
///
/// A read error ends the drain with a diagnostic line; the exit status still
/// decides the outcome.
async fn drain_output<R: AsyncRead + Unpin>(output: R, captured: &mut String) {
    let mut lines = BufReader::new(output).split(b'\n');

    loop {
        match lines.next_segment().await {
            Ok(Some(bytes)) => push_line(captured, &bytes),
            Ok(None) => break,
            Err(e) => {
                warn!("Failed to read command output: {}", e);
                captured.push_str(&format!("{} {}\n", OUTPUT_READ_ERROR_MESSAGE, e));
                break;
            }
        }
    }
}

fn push_line(captured: &mut String, bytes: &[u8]) {
    captured.push_str(&String::from_utf8_lossy(bytes));
    captured.push('\n');
}

/// Check whether the advisor executable can be found on `PATH`
pub fn is_advisor_installed(settings: &AdvisorSettings) -> bool {
    which::which(&settings.executable).is_ok()
}
