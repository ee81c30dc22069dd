//! Application layer for advisor-mcp
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    command_runner::CommandRunnerPort,
    invocation_logger::{InvocationEvent, InvocationLogger, NoInvocationLogger},
    tool_schema::ToolSchemaPort,
};
pub use use_cases::invoke_tool::InvokeToolUseCase;
