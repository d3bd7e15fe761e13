//! Group member models and role mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A member of a group as returned by the membership endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMember {
    pub id: u64,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub web_url: String,
    pub access_level: u32,
    #[serde(default)]
    pub membership_state: String,
}

impl GroupMember {
    /// Named role for this member's raw access level.
    pub fn role(&self) -> AccessLevel {
        AccessLevel::from_raw(self.access_level)
    }
}

/// Named GitLab permission tiers.
///
/// The API reports roles as integer codes; anything outside the documented
/// table is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccessLevel {
    Guest,
    Reporter,
    Developer,
    Maintainer,
    Owner,
    Unknown,
}

impl AccessLevel {
    pub fn from_raw(level: u32) -> Self {
        match level {
            10 => AccessLevel::Guest,
            20 => AccessLevel::Reporter,
            30 => AccessLevel::Developer,
            40 => AccessLevel::Maintainer,
            50 => AccessLevel::Owner,
            _ => AccessLevel::Unknown,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AccessLevel::Guest => "Guest",
            AccessLevel::Reporter => "Reporter",
            AccessLevel::Developer => "Developer",
            AccessLevel::Maintainer => "Maintainer",
            AccessLevel::Owner => "Owner",
            AccessLevel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps table width formatting working.
        f.pad(self.name())
    }
}

/// Owner/member classification derived from the access level.
///
/// Not a field the API returns: a member owns a group iff their access
/// level reaches [`Ownership::OWNER_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ownership {
    Owner,
    Member,
}

impl Ownership {
    pub const OWNER_THRESHOLD: u32 = 50;

    pub fn from_access_level(level: u32) -> Self {
        if level >= Self::OWNER_THRESHOLD {
            Ownership::Owner
        } else {
            Ownership::Member
        }
    }
}
