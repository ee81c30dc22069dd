//! Tool registry: the fixed catalogue of callable operations.
//!
//! Maps a stable tool name plus a validated `pathToSourceCode` argument to a
//! concrete command line. Pure and stateless apart from the immutable
//! [`AdvisorSettings`] it was built with; safe to share across threads.

use serde_json::Value;
use std::collections::HashMap;

use crate::advisor::{AdvisorSettings, AdvisorTool, PATH_TO_SOURCE_CODE, command};
use crate::core::error::RegistryError;
use crate::tool::entities::{ToolCall, ToolDefinition};
use crate::tool::traits::{DefaultToolValidator, ToolValidator};

/// Registry of the advisor tools, in published order
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
    settings: AdvisorSettings,
}

impl ToolRegistry {
    pub fn new(settings: AdvisorSettings) -> Self {
        Self {
            tools: AdvisorTool::ALL.iter().map(|t| t.definition()).collect(),
            settings,
        }
    }

    /// All definitions: build-config-get, upgrade-plan-get, upgrade-plan-apply
    pub fn list_tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    pub fn settings(&self) -> &AdvisorSettings {
        &self.settings
    }

    /// Resolve a tool name and its arguments into a command line.
    ///
    /// Fails with [`RegistryError::UnknownTool`] for unregistered names and
    /// [`RegistryError::MissingParameter`] when `pathToSourceCode` is absent,
    /// not a string, or empty.
    pub fn build_command(
        &self,
        tool_name: &str,
        arguments: &HashMap<String, Value>,
    ) -> Result<String, RegistryError> {
        let call = ToolCall {
            tool_name: tool_name.to_string(),
            arguments: arguments.clone(),
        };
        self.resolve(&call)
    }

    /// Same as [`build_command`](Self::build_command), taking a whole call
    pub fn resolve(&self, call: &ToolCall) -> Result<String, RegistryError> {
        let (tool, definition) = AdvisorTool::from_name(&call.tool_name)
            .zip(self.get(&call.tool_name))
            .ok_or_else(|| RegistryError::UnknownTool(call.tool_name.clone()))?;

        DefaultToolValidator.validate(call, definition)?;

        let path = call
            .get_non_empty_string(PATH_TO_SOURCE_CODE)
            .ok_or_else(|| RegistryError::missing_parameter(tool.name(), PATH_TO_SOURCE_CODE))?;

        Ok(command::render(tool, path, &self.settings))
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new(AdvisorSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::PathQuoting;

    fn args(path: &str) -> HashMap<String, Value> {
        HashMap::from([(PATH_TO_SOURCE_CODE.to_string(), Value::from(path))])
    }

    #[test]
    fn test_list_tools_fixed_order() {
        let registry = ToolRegistry::default();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(
            names,
            vec!["build-config-get", "upgrade-plan-get", "upgrade-plan-apply"]
        );
    }

    #[test]
    fn test_list_tools_contract() {
        let registry = ToolRegistry::default();
        assert_eq!(registry.list_tools().len(), 3);

        for tool in registry.list_tools() {
            assert!(!tool.description.is_empty());
            let required: Vec<&str> = tool.required_parameters().map(|p| p.name.as_str()).collect();
            assert_eq!(required, vec![PATH_TO_SOURCE_CODE]);
        }
    }

    #[test]
    fn test_list_tools_idempotent() {
        let registry = ToolRegistry::default();
        assert_eq!(registry.list_tools(), registry.list_tools());
        assert_eq!(
            registry.list_tools(),
            ToolRegistry::default().list_tools()
        );
    }

    #[test]
    fn test_build_command_unknown_tool() {
        let registry = ToolRegistry::default();
        let result = registry.build_command("nonexistent-tool", &args("/x"));
        assert_eq!(
            result,
            Err(RegistryError::UnknownTool("nonexistent-tool".to_string()))
        );
    }

    #[test]
    fn test_build_command_missing_parameter() {
        let registry = ToolRegistry::default();
        let result = registry.build_command("build-config-get", &HashMap::new());
        assert_eq!(
            result,
            Err(RegistryError::missing_parameter(
                "build-config-get",
                PATH_TO_SOURCE_CODE
            ))
        );
    }

    #[test]
    fn test_build_command_empty_or_wrong_type_parameter() {
        let registry = ToolRegistry::default();
        assert!(matches!(
            registry.build_command("upgrade-plan-get", &args("")),
            Err(RegistryError::MissingParameter { .. })
        ));

        let numeric = HashMap::from([(PATH_TO_SOURCE_CODE.to_string(), Value::from(7))]);
        assert!(matches!(
            registry.build_command("upgrade-plan-get", &numeric),
            Err(RegistryError::MissingParameter { .. })
        ));
    }

    #[test]
    fn test_build_command_exact_strings() {
        let registry = ToolRegistry::default();
        assert_eq!(
            registry.build_command("build-config-get", &args("/repo")).unwrap(),
            "advisor build-config get -p /repo"
        );
        assert_eq!(
            registry.build_command("upgrade-plan-get", &args("/repo")).unwrap(),
            "advisor upgrade-plan get -p /repo -u http://localhost:8080"
        );
        assert_eq!(
            registry.build_command("upgrade-plan-apply", &args("/repo")).unwrap(),
            "advisor upgrade-plan apply -p /repo -u http://localhost:8080"
        );
    }

    #[test]
    fn test_build_command_uses_configured_url() {
        let registry = ToolRegistry::new(
            AdvisorSettings::new("https://advisor.example.com")
                .with_path_quoting(PathQuoting::Verbatim),
        );
        assert_eq!(
            registry.build_command("upgrade-plan-apply", &args("/srv/app")).unwrap(),
            "advisor upgrade-plan apply -p /srv/app -u https://advisor.example.com"
        );
    }

    #[test]
    fn test_resolve_call() {
        let registry = ToolRegistry::default();
        let call = ToolCall::new("build-config-get").with_arg(PATH_TO_SOURCE_CODE, "/repo");
        assert_eq!(
            registry.resolve(&call).unwrap(),
            "advisor build-config get -p /repo"
        );
    }
}
