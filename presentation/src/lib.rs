//! Presentation layer for advisor-mcp
//!
//! This crate contains CLI definitions, output formatters and the stdio
//! protocol server that exposes the advisor tools to MCP clients.

pub mod cli;
pub mod output;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use server::{RequestHandler, ServerError, StdioServer};
