//! Stdio tool server
//!
//! Exposes the advisor tools to MCP clients over newline-delimited JSON-RPC
//! on stdin/stdout. Diagnostics go to stderr so stdout stays a clean
//! protocol channel.

pub mod error;
pub mod handler;
pub mod protocol;
pub mod stdio;

pub use error::ServerError;
pub use handler::RequestHandler;
pub use stdio::StdioServer;
