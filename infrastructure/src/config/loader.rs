//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use advisor_mcp_domain::ADVISOR_SERVER_ENV;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application directory under the platform config dir
const APP_DIR: &str = "advisor-mcp";

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["advisor-mcp.toml", ".advisor-mcp.toml"];

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `ADVISOR_SERVER` environment variable (`advisor.server_url` only)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./advisor-mcp.toml` or `./.advisor-mcp.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/advisor-mcp/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        if let Some(path) = config_path
            && !path.exists()
        {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        Self::figment(config_path)
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Build the merged figment without extracting it
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Self::env_provider())
    }

    /// Load only default configuration (for --no-config)
    ///
    /// The `ADVISOR_SERVER` environment variable still applies.
    pub fn load_defaults() -> Result<FileConfig, ConfigError> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Self::env_provider())
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    fn env_provider() -> Env {
        Env::raw()
            .only(&[ADVISOR_SERVER_ENV])
            .map(|_| "advisor.server_url".into())
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/advisor-mcp/config.toml if set,
    /// otherwise falls back to the platform config directory
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn describe_sources(config_path: Option<&Path>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        let env_state = if std::env::var_os(ADVISOR_SERVER_ENV).is_some() {
            "[SET  ]"
        } else {
            "[     ]"
        };
        lines.push(format!("  {} Env:     {}", env_state, ADVISOR_SERVER_ENV));

        if let Some(path) = config_path {
            lines.push(format!("  [FOUND] Explicit: {}", path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push(format!(
                "  [     ] Project: ./{} or ./{}",
                PROJECT_CONFIG_FILES[0], PROJECT_CONFIG_FILES[1]
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let state = if path.exists() { "[FOUND]" } else { "[     ]" };
            lines.push(format!("  {} Global:  {}", state, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}
