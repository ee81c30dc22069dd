//! Command line rendering for advisor tools.
//!
//! Templates are `<executable> <subcommand...> -p <path> [-u <url>]`. The
//! result is run through `sh -c`, so any path that is not plain gets
//! single-quoted unless the settings ask for verbatim interpolation.

use super::AdvisorTool;
use super::settings::{AdvisorSettings, PathQuoting};

/// Render the full command line for a tool and a source path.
pub fn render(tool: AdvisorTool, path: &str, settings: &AdvisorSettings) -> String {
    let quote = |value: &str| match settings.path_quoting {
        PathQuoting::Escaped => shell_escape(value),
        PathQuoting::Verbatim => value.to_string(),
    };

    let mut parts: Vec<String> = Vec::with_capacity(7);
    parts.push(quote(&settings.executable));
    parts.extend(tool.subcommand().iter().map(|s| s.to_string()));
    parts.push("-p".to_string());
    parts.push(quote_path(path, &quote));

    if tool.needs_server_url() {
        parts.push("-u".to_string());
        parts.push(quote(&settings.server_url));
    }

    parts.join(" ")
}

/// Keep a leading `~/` outside the quotes so the shell still expands it.
fn quote_path(path: &str, quote: &impl Fn(&str) -> String) -> String {
    match path.strip_prefix("~/") {
        Some(rest) if !rest.is_empty() => format!("~/{}", quote(rest)),
        _ => quote(path),
    }
}

/// POSIX shell escape.
///
/// Strings made of alphanumerics and `-_./:=@,+%` are returned unchanged;
/// anything else is wrapped in single quotes with embedded quotes escaped.
pub fn shell_escape(s: &str) -> String {
    if !s.is_empty()
        && s.chars().all(|c| {
            c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | '=' | '@' | ',' | '+' | '%')
        })
    {
        return s.to_string();
    }

    let mut escaped = String::with_capacity(s.len() + 4);
    escaped.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            escaped.push_str("'\\''");
        } else {
            escaped.push(ch);
        }
    }
    escaped.push('\'');
    escaped
}
