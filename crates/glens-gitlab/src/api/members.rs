//! Membership API operations.

use reqwest::StatusCode;
use tracing::instrument;

use crate::client::GitlabClient;
use crate::error::{Error, Result};
use crate::models::GroupMember;

impl GitlabClient {
    /// Direct members of one group.
    #[instrument(skip(self))]
    pub async fn list_group_members(&self, group_id: u64) -> Result<Vec<GroupMember>> {
        self.get_json(&format!("groups/{group_id}/members")).await
    }

    /// All members of the configured group, including inherited ones.
    #[instrument(skip(self))]
    pub async fn list_all_group_members(&self) -> Result<Vec<GroupMember>> {
        let group_id = self.connection().group_id().to_owned();
        self.get_json(&format!("groups/{group_id}/members/all"))
            .await
    }

    /// Members of one project.
    ///
    /// A 404 means the project has no visible members and yields an empty
    /// list, not an error.
    #[instrument(skip(self))]
    pub async fn list_project_members(&self, project_id: u64) -> Result<Vec<GroupMember>> {
        let response = self.get(&format!("projects/{project_id}/members")).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if response.status().is_success() {
            response.json().await.map_err(Into::into)
        } else {
            Err(Error::from_status(response.status()))
        }
    }
}
