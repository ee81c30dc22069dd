//! Tool domain traits
//!
//! Contains pure domain logic traits for tool validation.
//! The async command runner port is defined in the application layer (ports).

use super::entities::{ToolCall, ToolDefinition};
use crate::core::error::RegistryError;

/// Validator for tool calls
///
/// This is a pure domain trait that validates tool calls
/// against their definitions without any I/O operations.
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), RegistryError>;
}

/// Default implementation of ToolValidator
///
/// Every required parameter must be present as a non-blank string.
/// Extra arguments are ignored.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), RegistryError> {
        for param in definition.required_parameters() {
            if call.get_non_empty_string(&param.name).is_none() {
                return Err(RegistryError::missing_parameter(
                    &definition.name,
                    &param.name,
                ));
            }
        }
        Ok(())
    }
}
