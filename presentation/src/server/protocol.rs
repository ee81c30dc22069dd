//! JSON-RPC protocol types for the stdio tool server.
//!
//! This module defines the message structures for the subset of the Model
//! Context Protocol that the server speaks over newline-delimited JSON-RPC
//! 2.0 on stdin/stdout.
//!
//! # Protocol Overview
//!
//! - **Requests**: Client → Server (e.g., `initialize`, `tools/list`, `tools/call`)
//! - **Responses**: Server → Client (result or error)
//! - **Notifications**: Client → Server (e.g., `notifications/initialized`), never answered

use serde::{Deserialize, Serialize};

pub const JSONRPC_VERSION: &str = "2.0";

/// MCP protocol revision announced in `initialize`
pub const PROTOCOL_VERSION: &str = "2024-11-05";

pub const SERVER_NAME: &str = "Spring Application Advisor MCP Server";

/// Standard JSON-RPC error codes
pub mod error_codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
}

/// Incoming JSON-RPC request or notification
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    /// Absent for notifications; number or string otherwise
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// Outgoing JSON-RPC response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: serde_json::Value, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: serde_json::Value, error: RpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl RpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn parse_error(detail: impl std::fmt::Display) -> Self {
        Self::new(error_codes::PARSE_ERROR, format!("Parse error: {}", detail))
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", method),
        )
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(error_codes::INVALID_PARAMS, message)
    }
}

/// `tools/call` parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    #[serde(default)]
    pub arguments: serde_json::Value,
}

/// Classification of an incoming JSON-RPC message.
#[derive(Debug, PartialEq, Eq)]
pub enum MessageKind {
    /// Has `id` + `method`: must be answered
    Request,
    /// Has `method`, no `id`: never answered
    Notification,
    /// Has `id`, no `method`: a reply to something we never send
    Response,
    /// Neither `id` nor `method`
    Invalid,
}

/// Classify a JSON-RPC message by inspecting `id` and `method` fields.
pub fn classify_message(json: &serde_json::Value) -> MessageKind {
    let has_id = json.get("id").is_some_and(|v| !v.is_null());
    let has_method = json.get("method").and_then(|v| v.as_str()).is_some();

    match (has_id, has_method) {
        (true, true) => MessageKind::Request,
        (false, true) => MessageKind::Notification,
        (true, false) => MessageKind::Response,
        (false, false) => MessageKind::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_request_with_numeric_and_string_ids() {
        assert_eq!(
            classify_message(&json!({"id": 1, "method": "tools/list"})),
            MessageKind::Request
        );
        assert_eq!(
            classify_message(&json!({"id": "abc", "method": "ping"})),
            MessageKind::Request
        );
    }

    #[test]
    fn classify_notification() {
        let msg = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        assert_eq!(classify_message(&msg), MessageKind::Notification);
    }

    #[test]
    fn classify_response_and_invalid() {
        assert_eq!(
            classify_message(&json!({"id": 1, "result": {}})),
            MessageKind::Response
        );
        assert_eq!(
            classify_message(&json!({"data": "something"})),
            MessageKind::Invalid
        );
    }

    #[test]
    fn response_serialization_omits_absent_fields() {
        let ok = serde_json::to_value(JsonRpcResponse::success(json!(7), json!({}))).unwrap();
        assert_eq!(ok, json!({"jsonrpc": "2.0", "id": 7, "result": {}}));

        let err = serde_json::to_value(JsonRpcResponse::failure(
            json!("x"),
            RpcError::method_not_found("resources/list"),
        ))
        .unwrap();
        assert_eq!(err["error"]["code"], -32601);
        assert!(err.get("result").is_none());
        assert!(err["error"].get("data").is_none());
    }

    #[test]
    fn tool_call_params_default_arguments() {
        let params: ToolCallParams =
            serde_json::from_value(json!({"name": "build-config-get"})).unwrap();
        assert_eq!(params.name, "build-config-get");
        assert!(params.arguments.is_null());
    }
}
