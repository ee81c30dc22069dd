//! Domain error types

use thiserror::Error;

/// Caller errors detected while resolving an invocation into a command line.
///
/// These are raised before any process is spawned. Process outcomes
/// (spawn failure, non-zero exit, interruption) are never errors; they are
/// carried by [`CommandResult`](crate::tool::value_objects::CommandResult).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Missing required parameter '{parameter}' for tool '{tool}'")]
    MissingParameter { tool: String, parameter: String },
}

impl RegistryError {
    pub fn missing_parameter(tool: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            tool: tool.into(),
            parameter: parameter.into(),
        }
    }

    /// Stable error code, used in the invocation log and protocol errors
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::UnknownTool(_) => "UNKNOWN_TOOL",
            RegistryError::MissingParameter { .. } => "MISSING_PARAMETER",
        }
    }
}
