//! Tool schema conversion port.
//!
//! Separates "which tools exist" (domain) from "how to serialize them for
//! the protocol" (infrastructure).

use advisor_mcp_domain::tool::entities::ToolDefinition;
use advisor_mcp_domain::tool::registry::ToolRegistry;

/// Port for converting tool definitions to JSON Schema descriptors.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to a `{name, description, inputSchema}` object.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert every registered tool, preserving registry order.
    fn all_tools_schema(&self, registry: &ToolRegistry) -> Vec<serde_json::Value> {
        registry
            .list_tools()
            .iter()
            .map(|t| self.tool_to_schema(t))
            .collect()
    }
}
