//! Console output formatter for tool listings and results

use advisor_mcp_domain::tool::entities::ToolDefinition;
use advisor_mcp_domain::tool::value_objects::CommandResult;
use colored::Colorize;

/// Formats tool definitions and command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the tool catalogue
    pub fn format_tools(tools: &[ToolDefinition]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Advisor Tools"));
        output.push('\n');

        for tool in tools {
            let name = if tool.is_high_risk() {
                format!("{} (requires confirmation)", tool.name).red().bold()
            } else {
                tool.name.as_str().yellow().bold()
            };
            output.push_str(&format!("\n{}\n", name));
            output.push_str(&Self::indent(&Self::wrap(&tool.description, 72), "  "));
            output.push('\n');

            for param in &tool.parameters {
                let required = if param.required { "required" } else { "optional" };
                output.push_str(&format!(
                    "  {} {} ({}, {})\n",
                    "-".dimmed(),
                    param.name.cyan(),
                    param.param_type,
                    required
                ));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a command result
    pub fn format_result(tool_name: &str, result: &CommandResult) -> String {
        let mut output = String::new();

        let status = if result.succeeded {
            "succeeded".green().bold()
        } else {
            result.failure_kind.as_str().red().bold()
        };
        output.push_str(&format!("{} {} {}\n", "Tool:".cyan().bold(), tool_name, status));

        if let Some(ms) = result.metadata.duration_ms {
            output.push_str(&format!("{} {} ms\n", "Duration:".dimmed(), ms));
        }

        output.push_str(&Self::section_header("Output"));
        output.push_str(&result.output_text);
        output.push('\n');

        output
    }

    /// Format the tool catalogue as JSON
    pub fn format_tools_json(tools: &[ToolDefinition]) -> String {
        serde_json::to_string_pretty(tools).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format a command result as JSON
    pub fn format_result_json(result: &CommandResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Greedy word wrap at `width` columns
    fn wrap(text: &str, width: usize) -> String {
        let mut lines = Vec::new();
        let mut current = String::new();

        for word in text.split_whitespace() {
            if !current.is_empty() && current.len() + 1 + word.len() > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }

        lines.join("\n")
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
