//! Resolved advisor settings, injected at construction time

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{DEFAULT_ADVISOR_EXECUTABLE, DEFAULT_ADVISOR_SERVER_URL};

/// How a user-supplied path is placed into the shell command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathQuoting {
    /// Single-quote any path containing shell metacharacters
    #[default]
    Escaped,
    /// Interpolate the path as-is; the caller owns the trust boundary
    Verbatim,
}

/// Immutable configuration shared by the registry and the executor.
///
/// Read once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorSettings {
    /// Advisor server base URL, passed as `-u` and as `ADVISOR_SERVER`
    pub server_url: String,
    /// Advisor executable invoked by every command template
    pub executable: String,
    pub path_quoting: PathQuoting,
    /// Upper bound on a single process run (None = wait indefinitely)
    pub timeout: Option<Duration>,
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_ADVISOR_SERVER_URL.to_string(),
            executable: DEFAULT_ADVISOR_EXECUTABLE.to_string(),
            path_quoting: PathQuoting::default(),
            timeout: None,
        }
    }
}

impl AdvisorSettings {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Self::default()
        }
    }

    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    pub fn with_path_quoting(mut self, path_quoting: PathQuoting) -> Self {
        self.path_quoting = path_quoting;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AdvisorSettings::default();
        assert_eq!(settings.server_url, "http://localhost:8080");
        assert_eq!(settings.executable, "advisor");
        assert_eq!(settings.path_quoting, PathQuoting::Escaped);
        assert!(settings.timeout.is_none());
    }

    #[test]
    fn test_builders() {
        let settings = AdvisorSettings::new("http://advisor.internal:9000")
            .with_executable("/opt/advisor/bin/advisor")
            .with_path_quoting(PathQuoting::Verbatim)
            .with_timeout(Duration::from_secs(30));

        assert_eq!(settings.server_url, "http://advisor.internal:9000");
        assert_eq!(settings.executable, "/opt/advisor/bin/advisor");
        assert_eq!(settings.path_quoting, PathQuoting::Verbatim);
        assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
    }
}
