//! Advisor tool catalogue
//!
//! The three operations exposed to agents, each backed by one subcommand of
//! the external `advisor` CLI:
//!
//! | Tool | Command | Needs build config |
//! |------|---------|:---:|
//! | `build-config-get` | `advisor build-config get -p <path>` | - |
//! | `upgrade-plan-get` | `advisor upgrade-plan get -p <path> -u <url>` | yes |
//! | `upgrade-plan-apply` | `advisor upgrade-plan apply -p <path> -u <url>` | yes |
//!
//! The build-config dependency is advisory only: it is written into the tool
//! descriptions for the calling agent and never checked in-process.

pub mod command;
pub mod settings;

use crate::tool::entities::{RiskLevel, ToolDefinition, ToolParameter};

pub use settings::{AdvisorSettings, PathQuoting};

/// The single required parameter shared by every advisor tool
pub const PATH_TO_SOURCE_CODE: &str = "pathToSourceCode";

/// Artifact written by `build-config-get`, relative to the source path
pub const BUILD_CONFIG_ARTIFACT: &str = "target/.advisor/build-config.json";

/// Environment variable carrying the advisor server URL into the child
pub const ADVISOR_SERVER_ENV: &str = "ADVISOR_SERVER";

pub const DEFAULT_ADVISOR_SERVER_URL: &str = "http://localhost:8080";

pub const DEFAULT_ADVISOR_EXECUTABLE: &str = "advisor";

const PATH_PARAMETER_DESCRIPTION: &str = "The directory path to the source code. \
    Use the path of the current IDE project if possible. \
    If you can not determine the path yourself, ask the user to provide it.";

/// One of the fixed advisor operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvisorTool {
    BuildConfigGet,
    UpgradePlanGet,
    UpgradePlanApply,
}

impl AdvisorTool {
    /// All tools in their published order
    pub const ALL: [AdvisorTool; 3] = [
        AdvisorTool::BuildConfigGet,
        AdvisorTool::UpgradePlanGet,
        AdvisorTool::UpgradePlanApply,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AdvisorTool::BuildConfigGet => "build-config-get",
            AdvisorTool::UpgradePlanGet => "upgrade-plan-get",
            AdvisorTool::UpgradePlanApply => "upgrade-plan-apply",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Subcommand words passed to the advisor executable
    pub fn subcommand(&self) -> &'static [&'static str] {
        match self {
            AdvisorTool::BuildConfigGet => &["build-config", "get"],
            AdvisorTool::UpgradePlanGet => &["upgrade-plan", "get"],
            AdvisorTool::UpgradePlanApply => &["upgrade-plan", "apply"],
        }
    }

    /// Whether the command template carries `-u <advisorServerUrl>`
    pub fn needs_server_url(&self) -> bool {
        !matches!(self, AdvisorTool::BuildConfigGet)
    }

    /// Whether a prior `build-config-get` must have written [`BUILD_CONFIG_ARTIFACT`]
    pub fn requires_build_config(&self) -> bool {
        self.needs_server_url()
    }

    pub fn risk_level(&self) -> RiskLevel {
        match self {
            AdvisorTool::UpgradePlanApply => RiskLevel::High,
            _ => RiskLevel::Low,
        }
    }

    pub fn description(&self) -> String {
        let dependency = format!(
            "This tool depends on {} to generate the build configuration file. \
             That tool must be executed first if the file in the relative project path: \
             {} does not exist. ",
            AdvisorTool::BuildConfigGet.name(),
            BUILD_CONFIG_ARTIFACT
        );

        match self {
            AdvisorTool::BuildConfigGet => "Generate the build configuration of the source code \
                repository. This configuration can be used to perform version upgrades of Spring \
                applications. Returns the output of the process."
                .to_string(),
            AdvisorTool::UpgradePlanGet => format!(
                "Get the upgrade plan of the source code repository. {}\
                 Returns the output of the process.",
                dependency
            ),
            AdvisorTool::UpgradePlanApply => format!(
                "Apply the first step of the upgrade plan of the source code repository. {}\
                 Verify with the user before performing the apply. \
                 Use this tool to perform all version upgrades of Spring applications. \
                 Returns the output of the process.",
                dependency
            ),
        }
    }

    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.risk_level()).with_parameter(
            ToolParameter::new(PATH_TO_SOURCE_CODE, PATH_PARAMETER_DESCRIPTION, true),
        )
    }
}

impl std::fmt::Display for AdvisorTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
