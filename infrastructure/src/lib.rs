//! Infrastructure layer for advisor-mcp
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: process execution, tool schema rendering,
//! configuration file loading and invocation logging.

pub mod config;
pub mod logging;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigIssue, ConfigLoader, FileAdvisorConfig, FileConfig, FileLoggingConfig,
    Severity,
};
pub use logging::JsonlInvocationLogger;
pub use tools::{JsonSchemaToolConverter, ShellCommandExecutor, is_advisor_installed};
