//! Project model.

use serde::{Deserialize, Serialize};

/// A project under a group.
///
/// Whether a given user "owns" a project is not part of this payload; it is
/// derived per group membership, see
/// [`Ownership`](crate::models::Ownership).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub name_with_namespace: String,
}
