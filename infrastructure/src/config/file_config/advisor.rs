//! Advisor configuration from TOML (`[advisor]` section)

use advisor_mcp_domain::advisor::{DEFAULT_ADVISOR_EXECUTABLE, DEFAULT_ADVISOR_SERVER_URL};
use advisor_mcp_domain::{AdvisorSettings, PathQuoting};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw advisor configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAdvisorConfig {
    /// Advisor server base URL (also read from `ADVISOR_SERVER`)
    pub server_url: String,
    /// Advisor executable name or path
    pub executable: String,
    /// Single-quote paths containing shell metacharacters
    pub quote_paths: bool,
    /// Kill the advisor process after this many seconds (unset = no limit)
    pub timeout_secs: Option<u64>,
}

impl Default for FileAdvisorConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_ADVISOR_SERVER_URL.to_string(),
            executable: DEFAULT_ADVISOR_EXECUTABLE.to_string(),
            quote_paths: true,
            timeout_secs: None,
        }
    }
}

impl FileAdvisorConfig {
    /// Convert to domain settings
    pub fn to_settings(&self) -> AdvisorSettings {
        let path_quoting = if self.quote_paths {
            PathQuoting::Escaped
        } else {
            PathQuoting::Verbatim
        };

        let settings = AdvisorSettings::new(self.server_url.trim())
            .with_executable(self.executable.trim())
            .with_path_quoting(path_quoting);

        match self.timeout_secs {
            Some(secs) if secs > 0 => settings.with_timeout(Duration::from_secs(secs)),
            _ => settings,
        }
    }
}
