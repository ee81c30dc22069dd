//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored output
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for advisor-mcp
#[derive(Parser, Debug)]
#[command(name = "advisor-mcp")]
#[command(author, version, about = "Spring Application Advisor tools for MCP clients")]
#[command(long_about = r#"
advisor-mcp exposes the Spring Application Advisor CLI as tools that an
AI agent can call over the Model Context Protocol (stdio transport).

Tools:
  build-config-get     Generate target/.advisor/build-config.json
  upgrade-plan-get     Show the upgrade plan (needs the build config)
  upgrade-plan-apply   Apply the next upgrade step (needs the build config)

Configuration is loaded from (in priority order):
1. ADVISOR_SERVER      Advisor server URL from the environment
2. --config <path>     Explicit config file
3. ./advisor-mcp.toml  Project-level config
4. ~/.config/advisor-mcp/config.toml   Global config

Example:
  advisor-mcp                                   # serve over stdio
  advisor-mcp --list-tools
  advisor-mcp --call build-config-get --path ~/src/petclinic
"#)]
pub struct Cli {
    /// List the available tools and exit
    #[arg(long, conflicts_with = "call")]
    pub list_tools: bool,

    /// Run a single tool and print its result
    #[arg(long, value_name = "TOOL", requires = "path")]
    pub call: Option<String>,

    /// Source code directory passed as pathToSourceCode
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<String>,

    /// Advisor server URL (overrides config and ADVISOR_SERVER)
    #[arg(short = 'u', long, value_name = "URL")]
    pub server_url: Option<String>,

    /// Output format for --list-tools and --call
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_serve_stdio() {
        let cli = Cli::parse_from(["advisor-mcp"]);
        assert!(!cli.list_tools);
        assert!(cli.call.is_none());
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_call_requires_path() {
        assert!(Cli::try_parse_from(["advisor-mcp", "--call", "build-config-get"]).is_err());

        let cli = Cli::try_parse_from([
            "advisor-mcp",
            "--call",
            "upgrade-plan-get",
            "--path",
            "/repo",
            "-u",
            "http://advisor:8080",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.call.as_deref(), Some("upgrade-plan-get"));
        assert_eq!(cli.path.as_deref(), Some("/repo"));
        assert_eq!(cli.server_url.as_deref(), Some("http://advisor:8080"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_list_tools_conflicts_with_call() {
        let result = Cli::try_parse_from([
            "advisor-mcp",
            "--list-tools",
            "--call",
            "build-config-get",
            "--path",
            "/repo",
        ]);
        assert!(result.is_err());
    }
}
