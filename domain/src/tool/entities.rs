//! Tool domain entities

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Risk level of a tool operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Low risk - only produces reports or build metadata (e.g., build-config-get)
    Low,
    /// High risk - rewrites the user's source tree (e.g., upgrade-plan-apply)
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::High => "high",
        }
    }

    /// Whether the calling agent should confirm with the user first
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, RiskLevel::High)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Definition of a tool that can be called by an external agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique, stable name of the tool (e.g., "build-config-get")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Risk level of this tool
    pub risk_level: RiskLevel,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// JSON type of the argument (always "string" for advisor tools)
    pub param_type: String,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            risk_level,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk_level.requires_confirmation()
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &ToolParameter> {
        self.parameters.iter().filter(|p| p.required)
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }
}

/// A call to a tool with arguments (one per invocation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    #[serde(default)]
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
        }
    }

    /// Build a call from a JSON arguments object.
    ///
    /// Anything other than an object (including `null`) yields an empty
    /// argument map, so a missing parameter is reported later by validation.
    pub fn from_json(tool_name: impl Into<String>, arguments: serde_json::Value) -> Self {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map.into_iter().collect(),
            _ => HashMap::new(),
        };
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a string argument only if it is present and not blank
    pub fn get_non_empty_string(&self, key: &str) -> Option<&str> {
        self.get_string(key).filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level() {
        assert!(!RiskLevel::Low.requires_confirmation());
        assert!(RiskLevel::High.requires_confirmation());
        assert_eq!(RiskLevel::High.to_string(), "high");
    }

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("build-config-get", "Generate build config", RiskLevel::Low)
            .with_parameter(
                ToolParameter::new("pathToSourceCode", "Source directory", true),
            )
            .with_parameter(ToolParameter::new("verbose", "Verbose output", false));

        assert_eq!(tool.name, "build-config-get");
        assert!(!tool.is_high_risk());
        assert_eq!(tool.parameters.len(), 2);
        assert_eq!(tool.parameters[0].param_type, "string");

        let required: Vec<&str> = tool.required_parameters().map(|p| p.name.as_str()).collect();
        assert_eq!(required, vec!["pathToSourceCode"]);
    }

    #[test]
    fn test_tool_call() {
        let call = ToolCall::new("upgrade-plan-get").with_arg("pathToSourceCode", "/repo");

        assert_eq!(call.tool_name, "upgrade-plan-get");
        assert_eq!(call.get_string("pathToSourceCode"), Some("/repo"));
        assert_eq!(call.get_string("missing"), None);
    }

    #[test]
    fn test_tool_call_non_empty_string() {
        let call = ToolCall::new("t")
            .with_arg("empty", "")
            .with_arg("blank", "   ")
            .with_arg("number", 42)
            .with_arg("ok", "/src");

        assert_eq!(call.get_non_empty_string("empty"), None);
        assert_eq!(call.get_non_empty_string("blank"), None);
        assert_eq!(call.get_non_empty_string("number"), None);
        assert_eq!(call.get_non_empty_string("ok"), Some("/src"));
    }

    #[test]
    fn test_tool_call_from_json() {
        let call = ToolCall::from_json(
            "build-config-get",
            serde_json::json!({"pathToSourceCode": "/repo"}),
        );
        assert_eq!(call.get_string("pathToSourceCode"), Some("/repo"));

        let call = ToolCall::from_json("build-config-get", serde_json::Value::Null);
        assert!(call.arguments.is_empty());
    }
}
