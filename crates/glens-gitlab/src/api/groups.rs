//! Group API operations.

use reqwest::StatusCode;
use tracing::instrument;

use crate::client::GitlabClient;
use crate::error::{Error, Result};
use crate::models::Group;

impl GitlabClient {
    /// Probes the configured group, validating the token and group id.
    ///
    /// 401 and 404 map to errors specific enough for the configuration
    /// flow to tell the user which input is wrong.
    #[instrument(skip(self))]
    pub async fn get_group(&self) -> Result<Group> {
        let group_id = self.connection().group_id().to_owned();
        let response = self.get(&format!("groups/{group_id}")).await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(Error::Auth(
                "invalid access token; check your GitLab access token".into(),
            )),
            StatusCode::NOT_FOUND => Err(Error::NotFound(format!(
                "group '{group_id}'; check your group ID"
            ))),
            status if status.is_success() => response.json().await.map_err(Into::into),
            status => Err(Error::from_status(status)),
        }
    }

    /// Lists the groups visible to the token, filtered to the configured
    /// group id.
    #[instrument(skip(self))]
    pub async fn list_groups(&self) -> Result<Vec<Group>> {
        let group_id = self.connection().group_id();
        self.get_json(&format!("groups?id={group_id}")).await
    }
}
