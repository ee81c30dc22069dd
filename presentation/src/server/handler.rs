//! Request dispatch for the stdio tool server.
//!
//! [`RequestHandler`] turns one raw JSON line into at most one
//! [`JsonRpcResponse`]. It owns no per-request state and is cheap to clone,
//! so the server loop hands a clone to every spawned request task.

use crate::server::protocol::{
    JsonRpcRequest, JsonRpcResponse, MessageKind, PROTOCOL_VERSION, RpcError, SERVER_NAME,
    ToolCallParams, classify_message, error_codes,
};
use advisor_mcp_application::{InvokeToolUseCase, ToolSchemaPort};
use advisor_mcp_domain::tool::entities::ToolCall;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, warn};

/// Dispatches MCP methods to the tool use case
#[derive(Clone)]
pub struct RequestHandler {
    use_case: InvokeToolUseCase,
    schema: Arc<dyn ToolSchemaPort>,
}

impl RequestHandler {
    pub fn new(use_case: InvokeToolUseCase, schema: Arc<dyn ToolSchemaPort>) -> Self {
        Self { use_case, schema }
    }

    /// Handle one newline-delimited message.
    ///
    /// Returns `None` for notifications and stray responses.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let json: Value = match serde_json::from_str(line) {
            Ok(json) => json,
            Err(e) => {
                warn!("Unparsable message: {}", e);
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    RpcError::parse_error(e),
                ));
            }
        };

        match classify_message(&json) {
            MessageKind::Request => {}
            MessageKind::Notification => {
                debug!("Ignoring notification: {}", json["method"]);
                return None;
            }
            MessageKind::Response => {
                debug!("Ignoring unsolicited response");
                return None;
            }
            MessageKind::Invalid => {
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    RpcError::new(error_codes::INVALID_REQUEST, "Invalid request"),
                ));
            }
        }

        let request: JsonRpcRequest = match serde_json::from_value(json) {
            Ok(request) => request,
            Err(e) => {
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    RpcError::new(error_codes::INVALID_REQUEST, e.to_string()),
                ));
            }
        };

        Some(self.handle_request(request).await)
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id.unwrap_or(Value::Null);
        debug!("Handling request {} ({})", id, request.method);

        let outcome = match request.method.as_str() {
            "initialize" => Ok(self.initialize()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(self.list_tools()),
            "tools/call" => self.call_tool(request.params).await,
            other => Err(RpcError::method_not_found(other)),
        };

        match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::failure(id, error),
        }
    }

    fn initialize(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": { "listChanged": true },
                "logging": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            }
        })
    }

    fn list_tools(&self) -> Value {
        json!({ "tools": self.schema.all_tools_schema(self.use_case.registry()) })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, RpcError> {
        let params: ToolCallParams = params
            .ok_or_else(|| RpcError::invalid_params("Missing tools/call params"))
            .and_then(|p| {
                serde_json::from_value(p).map_err(|e| RpcError::invalid_params(e.to_string()))
            })?;

        let call = ToolCall::from_json(params.name, params.arguments);
        let result = self.use_case.execute(&call).await.map_err(|e| {
            RpcError::invalid_params(e.to_string()).with_data(json!({ "code": e.code() }))
        })?;

        Ok(json!({
            "content": [{ "type": "text", "text": result.output_text }],
            "isError": !result.succeeded
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_mcp_application::CommandRunnerPort;
    use advisor_mcp_domain::tool::registry::ToolRegistry;
    use advisor_mcp_domain::tool::value_objects::CommandResult;
    use async_trait::async_trait;

    /// Echoes the command line back, failing for `upgrade-plan apply`
    struct EchoRunner;

    #[async_trait]
    impl CommandRunnerPort for EchoRunner {
        async fn execute(&self, command_line: &str) -> CommandResult {
            if command_line.contains("upgrade-plan apply") {
                CommandResult::non_zero_exit("apply failed\n", 1)
            } else {
                CommandResult::success(command_line)
            }
        }
    }

    /// Minimal schema port so the handler can be tested without infrastructure
    struct NameOnlySchema;

    impl ToolSchemaPort for NameOnlySchema {
        fn tool_to_schema(&self, tool: &advisor_mcp_domain::ToolDefinition) -> Value {
            json!({ "name": tool.name })
        }
    }

    fn handler() -> RequestHandler {
        let use_case =
            InvokeToolUseCase::new(Arc::new(ToolRegistry::default()), Arc::new(EchoRunner));
        RequestHandler::new(use_case, Arc::new(NameOnlySchema))
    }

    async fn call(line: Value) -> JsonRpcResponse {
        handler()
            .handle_line(&line.to_string())
            .await
            .expect("requests are answered")
    }

    #[tokio::test]
    async fn test_initialize_reports_server_info() {
        let response = call(json!({"jsonrpc": "2.0", "id": 1, "method": "initialize"})).await;
        let result = response.result.unwrap();

        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
        assert_eq!(result["capabilities"]["tools"]["listChanged"], true);
        assert_eq!(response.id, json!(1));
    }

    #[tokio::test]
    async fn test_tools_list_in_registry_order() {
        let response = call(json!({"jsonrpc": "2.0", "id": "a", "method": "tools/list"})).await;
        let tools = response.result.unwrap()["tools"].clone();

        assert_eq!(
            tools,
            json!([
                {"name": "build-config-get"},
                {"name": "upgrade-plan-get"},
                {"name": "upgrade-plan-apply"}
            ])
        );
    }

    #[tokio::test]
    async fn test_tools_call_success() {
        let response = call(json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": {"name": "build-config-get", "arguments": {"pathToSourceCode": "/repo"}}
        }))
        .await;
        let result = response.result.unwrap();

        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][0]["type"], "text");
        assert_eq!(
            result["content"][0]["text"],
            "advisor build-config get -p /repo"
        );
    }

    #[tokio::test]
    async fn test_tools_call_process_failure_is_tool_error() {
        let response = call(json!({
            "jsonrpc": "2.0",
            "id": 4,
            "method": "tools/call",
            "params": {"name": "upgrade-plan-apply", "arguments": {"pathToSourceCode": "/repo"}}
        }))
        .await;
        let result = response.result.unwrap();

        assert_eq!(result["isError"], true);
        assert_eq!(
            result["content"][0]["text"],
            "apply failed\nProcess did not complete successfully. Exit code: 1"
        );
    }

    #[tokio::test]
    async fn test_tools_call_registry_errors_are_invalid_params() {
        let unknown = call(json!({
            "jsonrpc": "2.0",
            "id": 5,
            "method": "tools/call",
            "params": {"name": "nonexistent-tool", "arguments": {"pathToSourceCode": "/x"}}
        }))
        .await;
        let error = unknown.error.unwrap();
        assert_eq!(error.code, error_codes::INVALID_PARAMS);
        assert_eq!(error.data, Some(json!({"code": "UNKNOWN_TOOL"})));

        let missing = call(json!({
            "jsonrpc": "2.0",
            "id": 6,
            "method": "tools/call",
            "params": {"name": "upgrade-plan-get"}
        }))
        .await;
        assert_eq!(
            missing.error.unwrap().data,
            Some(json!({"code": "MISSING_PARAMETER"}))
        );
    }

    #[tokio::test]
    async fn test_unknown_method_and_parse_error() {
        let response = call(json!({"jsonrpc": "2.0", "id": 7, "method": "resources/list"})).await;
        assert_eq!(response.error.unwrap().code, error_codes::METHOD_NOT_FOUND);

        let garbage = handler().handle_line("{not json").await.unwrap();
        assert_eq!(garbage.error.unwrap().code, error_codes::PARSE_ERROR);
        assert_eq!(garbage.id, Value::Null);
    }

    #[tokio::test]
    async fn test_notifications_are_not_answered() {
        let line = json!({"jsonrpc": "2.0", "method": "notifications/initialized"}).to_string();
        assert!(handler().handle_line(&line).await.is_none());
    }
}
