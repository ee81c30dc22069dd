//! Tool domain module
//!
//! This module defines the core abstractions for the **Tool System**: how an
//! external agent discovers the advisor operations and what it gets back
//! when it calls one.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐    ┌───────────────┐
//! │ ToolRegistry │───▶│ ToolCall     │───▶│ command line │───▶│ CommandResult │
//! │ (catalogue)  │    │ (invocation) │    │ (sh -c)      │    │ (classified)  │
//! └──────────────┘    └──────────────┘    └──────────────┘    └───────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`ToolRegistry`]: Fixed, ordered catalogue + `build_command()`
//! - [`ToolDefinition`]: Schema for a single tool (name, params, risk level)
//! - [`ToolCall`]: An invocation request with arguments
//! - [`CommandResult`]: Execution outcome with a [`FailureKind`]
//! - [`ToolValidator`]: Pure domain trait for parameter validation
//!
//! # Architecture
//!
//! - **Domain** (this module): Pure definitions, no I/O
//! - **Application** (`CommandRunnerPort`): Port trait for process execution
//! - **Infrastructure** (`ShellCommandExecutor`): Concrete process spawning

pub mod entities;
pub mod registry;
pub mod traits;
pub mod value_objects;

pub use entities::{RiskLevel, ToolCall, ToolDefinition, ToolParameter};
pub use registry::ToolRegistry;
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{CommandResult, ExecutionMetadata, FailureKind};
