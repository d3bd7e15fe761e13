//! Group model.

use serde::{Deserialize, Serialize};

/// A GitLab group reachable from the configured root group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: u64,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub web_url: String,
}
