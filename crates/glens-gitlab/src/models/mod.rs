//! Data models for the GitLab API payloads.

mod group;
mod member;
mod profile;
mod project;

pub use group::Group;
pub use member::{AccessLevel, GroupMember, Ownership};
pub use profile::UserProfile;
pub use project::Project;
