//! Configuration file loading for advisor-mcp
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ADVISOR_SERVER` environment variable
//! 2. `--config <path>` specified file
//! 3. Project root: `./advisor-mcp.toml` or `./.advisor-mcp.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/advisor-mcp/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigIssue, FileAdvisorConfig, FileConfig, FileLoggingConfig, Severity};
pub use loader::{ConfigError, ConfigLoader};
