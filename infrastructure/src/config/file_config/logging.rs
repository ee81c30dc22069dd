//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Also write diagnostics to this file (stderr is always used)
    pub file: Option<PathBuf>,
    /// JSONL audit log with one record per tool call
    pub invocation_log: Option<PathBuf>,
}
