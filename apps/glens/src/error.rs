//! CLI error types and exit codes.

use glens_gitlab::Error as GitlabError;
use thiserror::Error;

/// Exit codes for the CLI
/// - 0: Success
/// - 1: General error
/// - 2: Authentication error
/// - 3: Network error
/// - 4: Validation error
/// - 5: Server error
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error(transparent)]
    Gitlab(#[from] GitlabError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Validation(_) => 4,
            CliError::Input(_) | CliError::Json(_) => 1,
            CliError::Gitlab(e) => match e {
                GitlabError::Validation(_) | GitlabError::NotFound(_) => 4,
                GitlabError::Auth(_) => 2,
                GitlabError::Network(_) => 3,
                GitlabError::Http { status, .. } => {
                    if *status >= 500 {
                        5
                    } else if *status == 401 || *status == 403 {
                        2
                    } else {
                        4
                    }
                }
                GitlabError::Json(_)
                | GitlabError::Url(_)
                | GitlabError::Aggregation(_)
                | GitlabError::Cancelled => 1,
            },
        }
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    /// Get a suggested action for this error
    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::Gitlab(GitlabError::Auth(_)) => Some(
                "Create a personal access token with read_api scope in your GitLab settings.",
            ),
            CliError::Gitlab(GitlabError::NotFound(_)) => {
                Some("The group id is shown in the group settings and in the group page URL.")
            }
            CliError::Gitlab(GitlabError::Network(_)) => {
                Some("Check your network connection and try again.")
            }
            _ => None,
        }
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(e: dialoguer::Error) -> Self {
        CliError::Input(format!("Dialog error: {e}"))
    }
}
