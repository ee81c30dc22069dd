//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types once at
//! startup.

mod advisor;
mod logging;

pub use advisor::FileAdvisorConfig;
pub use logging::FileLoggingConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted key of the offending field (e.g. `advisor.server_url`)
    pub field: &'static str,
    pub message: String,
}

impl ConfigIssue {
    fn error(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field,
            message: message.into(),
        }
    }

    fn warning(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field,
            message: message.into(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Advisor CLI settings
    pub advisor: FileAdvisorConfig,
    /// Diagnostics and audit logging
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let url = self.advisor.server_url.trim();
        if url.is_empty() {
            issues.push(ConfigIssue::error(
                "advisor.server_url",
                "advisor.server_url cannot be empty",
            ));
        } else if !url.starts_with("http://") && !url.starts_with("https://") {
            issues.push(ConfigIssue::warning(
                "advisor.server_url",
                format!(
                    "advisor.server_url '{}' has no http:// or https:// scheme",
                    url
                ),
            ));
        }

        if self.advisor.executable.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "advisor.executable",
                "advisor.executable cannot be empty",
            ));
        }

        if self.advisor.timeout_secs == Some(0) {
            issues.push(ConfigIssue::warning(
                "advisor.timeout_secs",
                "advisor.timeout_secs = 0 disables the timeout; remove the key instead",
            ));
        }

        issues
    }

    pub fn has_errors(&self) -> bool {
        self.validate()
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[advisor]
server_url = "http://advisor.example.com:8080"
executable = "/usr/local/bin/advisor"
quote_paths = true
timeout_secs = 900

[logging]
file = "/tmp/advisor-mcp.log"
invocation_log = "/tmp/advisor-mcp.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.advisor.server_url, "http://advisor.example.com:8080");
        assert_eq!(config.advisor.executable, "/usr/local/bin/advisor");
        assert_eq!(config.advisor.timeout_secs, Some(900));
        assert!(config.logging.file.is_some());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[advisor]
executable = "advisor-cli"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.advisor.executable, "advisor-cli");
        // Defaults should apply
        assert_eq!(config.advisor.server_url, "http://localhost:8080");
        assert!(config.advisor.quote_paths);
        assert!(config.logging.invocation_log.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert!(!config.has_errors());
    }

    #[test]
    fn test_validate_reports_all_issues() {
        let mut config = FileConfig::default();
        config.advisor.server_url = "  ".to_string();
        config.advisor.executable = String::new();
        config.advisor.timeout_secs = Some(0);

        let issues = config.validate();
        let fields: Vec<&str> = issues.iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec!["advisor.server_url", "advisor.executable", "advisor.timeout_secs"]
        );
        assert!(config.has_errors());
    }

    #[test]
    fn test_validate_url_without_scheme_is_warning() {
        let mut config = FileConfig::default();
        config.advisor.server_url = "advisor.example.com:8080".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(!config.has_errors());
    }
}
