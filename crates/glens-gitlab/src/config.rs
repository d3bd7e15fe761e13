//! Connection settings for the GitLab API.

use url::Url;

use crate::error::{Error, Result};

/// Default public GitLab REST endpoint.
pub const DEFAULT_GITLAB_URL: &str = "https://gitlab.com/api/v4";

/// Immutable per-session connection settings.
///
/// Built once from user input and held in memory only; nothing is ever
/// written to disk.
#[derive(Clone)]
pub struct Connection {
    base_url: Url,
    token: String,
    group_id: String,
}

impl Connection {
    /// Creates and validates a connection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an empty token or group id before
    /// any request is made, and [`Error::Url`] for an unparseable base URL.
    pub fn new(
        base_url: &str,
        token: impl Into<String>,
        group_id: impl Into<String>,
    ) -> Result<Self> {
        let conn = Self {
            base_url: Url::parse(base_url)?,
            token: token.into(),
            group_id: group_id.into(),
        };
        conn.validate()?;
        Ok(conn)
    }

    fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(Error::Validation(
                "access token must not be empty".into(),
            ));
        }
        if self.group_id.trim().is_empty() {
            return Err(Error::Validation("group id must not be empty".into()));
        }
        Ok(())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// The group id or full path the session was configured with.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Joins an API path onto the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

// The token never appears in logs or debug output.
impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"<redacted>")
            .field("group_id", &self.group_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_rejected() {
        let err = Connection::new(DEFAULT_GITLAB_URL, "", "42").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn blank_group_id_is_rejected() {
        let err = Connection::new(DEFAULT_GITLAB_URL, "glpat-abc", "  ").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn valid_settings_are_accepted() {
        let conn = Connection::new(DEFAULT_GITLAB_URL, "glpat-abc", "42").unwrap();
        assert_eq!(conn.group_id(), "42");
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let conn = Connection::new("https://example.com/api/v4/", "t", "42").unwrap();
        assert_eq!(
            conn.endpoint("/groups/42/members"),
            "https://example.com/api/v4/groups/42/members"
        );
    }

    #[test]
    fn debug_redacts_token() {
        let conn = Connection::new(DEFAULT_GITLAB_URL, "glpat-secret", "42").unwrap();
        let rendered = format!("{conn:?}");
        assert!(!rendered.contains("glpat-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
