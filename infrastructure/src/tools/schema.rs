//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] that produces the tool
//! descriptors returned by the MCP `tools/list` method.

use advisor_mcp_application::ports::tool_schema::ToolSchemaPort;
use advisor_mcp_domain::tool::entities::ToolDefinition;

/// Default implementation producing MCP tool descriptors.
///
/// High-risk tools are annotated `destructiveHint: true` so clients can ask
/// for confirmation before calling them.
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let mut prop = serde_json::Map::new();
            prop.insert("type".to_string(), serde_json::json!(param.param_type));
            prop.insert(
                "description".to_string(),
                serde_json::json!(param.description),
            );
            properties.insert(param.name.clone(), serde_json::Value::Object(prop));

            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        let destructive = tool.risk_level.requires_confirmation();

        serde_json::json!({
            "name": tool.name,
            "description": tool.description,
            "inputSchema": {
                "type": "object",
                "properties": properties,
                "required": required,
            },
            "annotations": {
                "readOnlyHint": false,
                "destructiveHint": destructive,
                "openWorldHint": true,
            }
        })
    }
}
