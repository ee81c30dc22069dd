//! Command runner port
//!
//! Defines the interface for running a resolved command line to completion.

use advisor_mcp_domain::tool::value_objects::CommandResult;
use async_trait::async_trait;

/// Port for command execution
///
/// Implementations (adapters) live in the infrastructure layer. They must
/// never fail: spawn errors, non-zero exits and interruptions are all
/// encoded in the returned [`CommandResult`].
#[async_trait]
pub trait CommandRunnerPort: Send + Sync {
    /// Run a command line through a system shell and classify the outcome
    async fn execute(&self, command_line: &str) -> CommandResult;
}
