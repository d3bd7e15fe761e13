//! Resolution of connection settings from flags, environment, and prompts.
//!
//! Settings come from flags or environment first; on an interactive
//! terminal, missing values are prompted for (password-style for the
//! token). Everything stays in memory; nothing is written to disk.

use std::io::IsTerminal;

use dialoguer::{Input, Password};
use glens_gitlab::{Connection, GitlabClient};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Builds the API client for this invocation.
pub fn build_client(
    base_url: &str,
    token: Option<&str>,
    group: Option<&str>,
) -> CliResult<GitlabClient> {
    let token = resolve_required(token, "GitLab access token", true)?;
    let group = resolve_required(group, "Group id", false)?;

    // Empty flag/env values are rejected here, before any request is made.
    let conn = Connection::new(base_url, token, group)?;
    debug!(?conn, "resolved connection settings");
    GitlabClient::new(conn).map_err(Into::into)
}

fn resolve_required(value: Option<&str>, label: &str, secret: bool) -> CliResult<String> {
    if let Some(v) = value {
        return Ok(v.to_string());
    }
    if !is_interactive_terminal() {
        return Err(CliError::Validation(format!(
            "{label} is required. Pass it as a flag or environment variable."
        )));
    }
    prompt_value(label, secret)
}

/// Checks if both stdin and stdout are connected to a terminal.
fn is_interactive_terminal() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Prompts until non-blank input is provided.
fn prompt_value(label: &str, secret: bool) -> CliResult<String> {
    loop {
        let input: String = if secret {
            Password::new().with_prompt(label).interact()?
        } else {
            Input::new().with_prompt(label).interact_text()?
        };

        if input.trim().is_empty() {
            eprintln!("Error: {label} must not be empty");
            continue;
        }
        return Ok(input);
    }
}
