//! Project API operations.

use tracing::instrument;

use crate::client::GitlabClient;
use crate::error::Result;
use crate::models::Project;

impl GitlabClient {
    /// Projects under one group.
    #[instrument(skip(self))]
    pub async fn list_group_projects(&self, group_id: u64) -> Result<Vec<Project>> {
        self.get_json(&format!("groups/{group_id}/projects")).await
    }
}
