//! Invoke Tool use case.
//!
//! Turns one [`ToolCall`] into exactly one [`CommandResult`]:
//!
//! 1. Resolve name + arguments via the [`ToolRegistry`] (caller errors are
//!    returned here, before anything is spawned)
//! 2. Run the command line through the [`CommandRunnerPort`]
//! 3. Record the outcome through the [`InvocationLogger`]

use crate::ports::command_runner::CommandRunnerPort;
use crate::ports::invocation_logger::{InvocationEvent, InvocationLogger, NoInvocationLogger};
use advisor_mcp_domain::core::error::RegistryError;
use advisor_mcp_domain::tool::entities::ToolCall;
use advisor_mcp_domain::tool::registry::ToolRegistry;
use advisor_mcp_domain::tool::value_objects::CommandResult;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for invoking one advisor tool.
///
/// Holds no per-call state, so a single instance can serve any number of
/// concurrent invocations.
pub struct InvokeToolUseCase {
    registry: Arc<ToolRegistry>,
    runner: Arc<dyn CommandRunnerPort>,
    invocation_logger: Arc<dyn InvocationLogger>,
}

impl Clone for InvokeToolUseCase {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            runner: self.runner.clone(),
            invocation_logger: self.invocation_logger.clone(),
        }
    }
}

impl InvokeToolUseCase {
    pub fn new(registry: Arc<ToolRegistry>, runner: Arc<dyn CommandRunnerPort>) -> Self {
        Self {
            registry,
            runner,
            invocation_logger: Arc::new(NoInvocationLogger),
        }
    }

    pub fn with_invocation_logger(mut self, logger: Arc<dyn InvocationLogger>) -> Self {
        self.invocation_logger = logger;
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub async fn execute(&self, call: &ToolCall) -> Result<CommandResult, RegistryError> {
        let command_line = match self.registry.resolve(call) {
            Ok(command_line) => command_line,
            Err(e) => {
                warn!("Rejected call to '{}': {}", call.tool_name, e);
                self.invocation_logger.log(InvocationEvent::new(
                    "invocation_rejected",
                    serde_json::json!({
                        "tool": call.tool_name,
                        "error_code": e.code(),
                        "error": e.to_string(),
                    }),
                ));
                return Err(e);
            }
        };

        info!("Invoking tool '{}'", call.tool_name);
        debug!("Resolved command line: {}", command_line);

        let result = self.runner.execute(&command_line).await;

        if result.is_success() {
            info!("Tool '{}' completed successfully", call.tool_name);
        } else {
            warn!(
                "Tool '{}' failed ({})",
                call.tool_name, result.failure_kind
            );
        }

        self.invocation_logger.log(InvocationEvent::new(
            "invocation_completed",
            serde_json::json!({
                "tool": call.tool_name,
                "command": command_line,
                "succeeded": result.succeeded,
                "failure_kind": result.failure_kind,
                "exit_code": result.metadata.exit_code,
                "duration_ms": result.metadata.duration_ms,
            }),
        ));

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_mcp_domain::tool::value_objects::FailureKind;
    use advisor_mcp_domain::{AdvisorSettings, PATH_TO_SOURCE_CODE};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records command lines and answers with a canned result
    struct RecordingRunner {
        commands: Mutex<Vec<String>>,
        result: CommandResult,
    }

    impl RecordingRunner {
        fn new(result: CommandResult) -> Self {
            Self {
                commands: Mutex::new(Vec::new()),
                result,
            }
        }

        fn commands(&self) -> Vec<String> {
            self.commands.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandRunnerPort for RecordingRunner {
        async fn execute(&self, command_line: &str) -> CommandResult {
            self.commands.lock().unwrap().push(command_line.to_string());
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct CollectingLogger {
        events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl InvocationLogger for CollectingLogger {
        fn log(&self, event: InvocationEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    fn use_case(runner: Arc<RecordingRunner>) -> InvokeToolUseCase {
        let registry = Arc::new(ToolRegistry::new(AdvisorSettings::new("http://advisor:8080")));
        InvokeToolUseCase::new(registry, runner)
    }

    #[tokio::test]
    async fn test_execute_runs_resolved_command() {
        let runner = Arc::new(RecordingRunner::new(CommandResult::success("plan ready\n")));
        let use_case = use_case(runner.clone());

        let call = ToolCall::new("upgrade-plan-get").with_arg(PATH_TO_SOURCE_CODE, "/repo");
        let result = use_case.execute(&call).await.unwrap();

        assert!(result.succeeded);
        assert_eq!(result.output_text, "plan ready");
        assert_eq!(
            runner.commands(),
            vec!["advisor upgrade-plan get -p /repo -u http://advisor:8080".to_string()]
        );
    }

    #[tokio::test]
    async fn test_process_failures_are_results_not_errors() {
        let runner = Arc::new(RecordingRunner::new(CommandResult::non_zero_exit("bad\n", 3)));
        let use_case = use_case(runner);

        let call = ToolCall::new("build-config-get").with_arg(PATH_TO_SOURCE_CODE, "/repo");
        let result = use_case.execute(&call).await.unwrap();

        assert!(!result.succeeded);
        assert_eq!(result.failure_kind, FailureKind::NonZeroExit);
    }

    #[tokio::test]
    async fn test_unknown_tool_never_spawns() {
        let runner = Arc::new(RecordingRunner::new(CommandResult::success("")));
        let use_case = use_case(runner.clone());

        let call = ToolCall::new("nonexistent-tool").with_arg(PATH_TO_SOURCE_CODE, "/x");
        let err = use_case.execute(&call).await.unwrap_err();

        assert_eq!(err, RegistryError::UnknownTool("nonexistent-tool".to_string()));
        assert!(runner.commands().is_empty());
    }

    #[tokio::test]
    async fn test_missing_parameter_never_spawns() {
        let runner = Arc::new(RecordingRunner::new(CommandResult::success("")));
        let use_case = use_case(runner.clone());

        let err = use_case
            .execute(&ToolCall::new("upgrade-plan-apply"))
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryError::MissingParameter { .. }));
        assert!(runner.commands().is_empty());
    }

    #[tokio::test]
    async fn test_invocations_are_logged() {
        let runner = Arc::new(RecordingRunner::new(CommandResult::success("ok")));
        let logger = Arc::new(CollectingLogger::default());
        let use_case = use_case(runner).with_invocation_logger(logger.clone());

        let ok = ToolCall::new("build-config-get").with_arg(PATH_TO_SOURCE_CODE, "/repo");
        use_case.execute(&ok).await.unwrap();
        let _ = use_case.execute(&ToolCall::new("build-config-get")).await;

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, "invocation_completed");
        assert_eq!(events[0].1["command"], "advisor build-config get -p /repo");
        assert_eq!(events[0].1["failure_kind"], "none");
        assert_eq!(events[1].0, "invocation_rejected");
        assert_eq!(events[1].1["error_code"], "MISSING_PARAMETER");
    }
}
