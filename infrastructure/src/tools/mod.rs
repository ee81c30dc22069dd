//! Tool adapters for the advisor CLI
//!
//! - [`ShellCommandExecutor`]: runs resolved command lines via `sh -c`
//! - [`JsonSchemaToolConverter`]: renders tool definitions as MCP descriptors

mod executor;
mod schema;

pub use executor::{ShellCommandExecutor, is_advisor_installed};
pub use schema::JsonSchemaToolConverter;
