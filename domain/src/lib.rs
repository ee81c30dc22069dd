//! Domain layer for advisor-mcp
//!
//! This crate contains the tool catalogue, invocation and result types.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Tool**: a named, schema-described operation callable by an agent
//! - **Invocation** ([`ToolCall`]): one request to run a tool with arguments
//! - **Command result** ([`CommandResult`]): the classified process outcome
//! - **Build configuration artifact**: `target/.advisor/build-config.json`,
//!   required by the upgrade-plan tools

pub mod advisor;
pub mod core;
pub mod tool;

// Re-export commonly used types
pub use advisor::{
    ADVISOR_SERVER_ENV, AdvisorSettings, AdvisorTool, BUILD_CONFIG_ARTIFACT,
    DEFAULT_ADVISOR_SERVER_URL, PATH_TO_SOURCE_CODE, PathQuoting,
};
pub use crate::core::error::RegistryError;
pub use tool::{
    entities::{RiskLevel, ToolCall, ToolDefinition, ToolParameter},
    registry::ToolRegistry,
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{CommandResult, ExecutionMetadata, FailureKind},
};
