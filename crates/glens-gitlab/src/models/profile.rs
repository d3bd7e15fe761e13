//! Full user profile model for the detail view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the `/users/{id}` endpoint reports about one user.
///
/// Fetched lazily by the detail view only and never cached. GitLab leaves
/// most profile fields as empty strings rather than omitting them, so the
/// render layer treats empty and absent alike.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub web_url: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub pronouns: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub work_information: Option<String>,
    #[serde(default)]
    pub public_email: Option<String>,
    #[serde(default)]
    pub local_time: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub discord: Option<String>,
    #[serde(default)]
    pub skype: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_profile_parses() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"id": 3, "name": "Bob Marley", "username": "bobm", "state": "active"}"#,
        )
        .unwrap();
        assert_eq!(profile.username, "bobm");
        assert!(profile.job_title.is_none());
        assert!(!profile.bot);
        assert_eq!(profile.followers, 0);
    }
}
