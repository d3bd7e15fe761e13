//! User profile API operations.

use tracing::instrument;

use crate::client::GitlabClient;
use crate::error::Result;
use crate::models::UserProfile;

impl GitlabClient {
    /// Full profile for one user.
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: u64) -> Result<UserProfile> {
        self.get_json(&format!("users/{user_id}")).await
    }
}
