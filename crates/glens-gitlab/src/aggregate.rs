//! Per-group membership aggregation.
//!
//! [`fetch_group_rosters`] fans member and project fetches out across every
//! group visible from the configured root; [`index_rosters`] folds the
//! results into a per-user membership view keyed by user id.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::try_join_all;
use serde::Serialize;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::client::GitlabClient;
use crate::error::{Error, Result};
use crate::models::{Group, GroupMember, Ownership, Project};

/// Cap on concurrently processed groups. Each group keeps two requests in
/// flight, so the upstream sees at most twice this many at once.
const MAX_CONCURRENT_GROUPS: usize = 8;

/// One group's membership and project listings.
#[derive(Debug, Clone, Serialize)]
pub struct GroupRoster {
    pub group: Group,
    pub members: Vec<RosterMember>,
    pub projects: Vec<Project>,
}

/// A group member tagged with the ownership derived from their access
/// level in that group.
#[derive(Debug, Clone, Serialize)]
pub struct RosterMember {
    pub ownership: Ownership,
    #[serde(flatten)]
    pub member: GroupMember,
}

/// One group membership row in a user's reduced view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupMembershipEntry {
    pub group_id: u64,
    pub group_name: String,
    pub group_path: String,
    pub group_web_url: String,
    pub ownership: Ownership,
}

/// Everything known about one user across the aggregated groups.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserMembership {
    pub groups: Vec<GroupMembershipEntry>,
    pub projects: Vec<Project>,
}

/// Per-user membership view keyed by raw user id.
///
/// A user who appears in no group has no entry; callers treat a missing
/// key as "no data", not as an error.
pub type MembershipIndex = HashMap<u64, UserMembership>;

/// Fetches every visible group's members and projects.
///
/// Groups are processed concurrently, at most [`MAX_CONCURRENT_GROUPS`] at
/// a time, with each group's member and project requests in flight
/// together. The output order matches the group-list order regardless of
/// completion order. The first failing fetch fails the whole aggregation;
/// there are no partial results.
pub async fn fetch_group_rosters(client: &GitlabClient) -> Result<Vec<GroupRoster>> {
    let groups = client.list_groups().await?;
    if groups.is_empty() {
        return Err(Error::Aggregation(
            "no groups visible for the configured group id".into(),
        ));
    }
    debug!(groups = groups.len(), "aggregating group rosters");

    let limit = Arc::new(Semaphore::new(MAX_CONCURRENT_GROUPS));
    try_join_all(groups.into_iter().map(|group| {
        let limit = Arc::clone(&limit);
        async move {
            let _permit = limit
                .acquire()
                .await
                .map_err(|_| Error::Aggregation("group fetch pool closed".into()))?;
            fetch_roster(client, group).await
        }
    }))
    .await
}

async fn fetch_roster(client: &GitlabClient, group: Group) -> Result<GroupRoster> {
    let (members, projects) = tokio::try_join!(
        client.list_group_members(group.id),
        client.list_group_projects(group.id),
    )?;
    debug!(
        group_id = group.id,
        members = members.len(),
        projects = projects.len(),
        "fetched group roster"
    );

    let members = members
        .into_iter()
        .map(|member| RosterMember {
            ownership: Ownership::from_access_level(member.access_level),
            member,
        })
        .collect();

    Ok(GroupRoster {
        group,
        members,
        projects,
    })
}

/// Folds per-group rosters into a per-user membership view.
///
/// Pure: no I/O, and deterministic for identical input. Iteration follows
/// the aggregator's output order, then each roster's member order, so the
/// arrays in the result are byte-identical across calls. A user's project
/// list is extended by the whole project list of every group they belong
/// to; duplicate projects across groups are kept.
pub fn index_rosters(rosters: &[GroupRoster]) -> MembershipIndex {
    let mut index = MembershipIndex::new();

    for roster in rosters {
        for entry in &roster.members {
            let membership = index.entry(entry.member.id).or_default();
            membership.groups.push(GroupMembershipEntry {
                group_id: roster.group.id,
                group_name: roster.group.name.clone(),
                group_path: roster.group.path.clone(),
                group_web_url: roster.group.web_url.clone(),
                ownership: entry.ownership,
            });
            membership.projects.extend(roster.projects.iter().cloned());
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: u64, name: &str) -> Group {
        Group {
            id,
            name: name.to_string(),
            path: name.to_lowercase(),
            web_url: format!("https://gitlab.example.com/groups/{id}"),
        }
    }

    fn project(id: u64, name: &str) -> Project {
        Project {
            id,
            name: name.to_string(),
            name_with_namespace: format!("acme / {name}"),
        }
    }

    fn member(id: u64, name: &str, username: &str, access_level: u32) -> RosterMember {
        RosterMember {
            ownership: Ownership::from_access_level(access_level),
            member: GroupMember {
                id,
                name: name.to_string(),
                username: username.to_string(),
                avatar_url: None,
                web_url: format!("https://gitlab.example.com/{username}"),
                access_level,
                membership_state: "active".to_string(),
            },
        }
    }

    fn roster(group: Group, members: Vec<RosterMember>, projects: Vec<Project>) -> GroupRoster {
        GroupRoster {
            group,
            members,
            projects,
        }
    }

    #[test]
    fn owner_and_member_views_for_one_group() {
        let rosters = vec![roster(
            group(1, "Platform"),
            vec![
                member(100, "Ada Lovelace", "ada", 50),
                member(200, "Bob Marley", "bobm", 30),
            ],
            vec![project(10, "api"), project(11, "web")],
        )];

        let index = index_rosters(&rosters);
        assert_eq!(index.len(), 2);

        let ada = &index[&100];
        assert_eq!(ada.groups.len(), 1);
        assert_eq!(ada.groups[0].group_id, 1);
        assert_eq!(ada.groups[0].ownership, Ownership::Owner);
        assert_eq!(ada.projects, vec![project(10, "api"), project(11, "web")]);

        let bob = &index[&200];
        assert_eq!(bob.groups[0].ownership, Ownership::Member);
        assert_eq!(bob.projects.len(), 2);
    }

    #[test]
    fn projects_accumulate_across_groups_without_dedup() {
        // The same project can be visible under both groups; the fold
        // keeps both copies.
        let shared = project(10, "api");
        let rosters = vec![
            roster(
                group(1, "Platform"),
                vec![member(100, "Ada Lovelace", "ada", 40)],
                vec![shared.clone(), project(11, "web")],
            ),
            roster(
                group(2, "Infra"),
                vec![member(100, "Ada Lovelace", "ada", 50)],
                vec![shared.clone()],
            ),
        ];

        let index = index_rosters(&rosters);
        let ada = &index[&100];

        assert_eq!(ada.groups.len(), 2);
        assert_eq!(ada.projects.len(), 3);
        assert_eq!(ada.projects, vec![shared.clone(), project(11, "web"), shared]);
        assert_eq!(ada.groups[0].ownership, Ownership::Member);
        assert_eq!(ada.groups[1].ownership, Ownership::Owner);
    }

    #[test]
    fn groups_follow_aggregator_order_not_id_order() {
        let rosters = vec![
            roster(
                group(9, "Zebra"),
                vec![member(100, "Ada Lovelace", "ada", 30)],
                vec![],
            ),
            roster(
                group(2, "Aardvark"),
                vec![member(100, "Ada Lovelace", "ada", 30)],
                vec![],
            ),
        ];

        let index = index_rosters(&rosters);
        let order: Vec<u64> = index[&100].groups.iter().map(|g| g.group_id).collect();
        assert_eq!(order, vec![9, 2]);
    }

    #[test]
    fn user_absent_from_every_group_has_no_entry() {
        let rosters = vec![roster(
            group(1, "Platform"),
            vec![member(100, "Ada Lovelace", "ada", 30)],
            vec![project(10, "api")],
        )];

        let index = index_rosters(&rosters);
        assert!(index.get(&999).is_none());
    }

    #[test]
    fn fold_is_deterministic() {
        let rosters = vec![
            roster(
                group(1, "Platform"),
                vec![
                    member(100, "Ada Lovelace", "ada", 50),
                    member(200, "Bob Marley", "bobm", 30),
                ],
                vec![project(10, "api"), project(11, "web")],
            ),
            roster(
                group(2, "Infra"),
                vec![member(200, "Bob Marley", "bobm", 40)],
                vec![project(12, "terraform")],
            ),
        ];

        let first = index_rosters(&rosters);
        let second = index_rosters(&rosters);

        for (id, membership) in &first {
            assert_eq!(membership.groups, second[id].groups);
            assert_eq!(membership.projects, second[id].projects);
        }
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn empty_roster_list_folds_to_empty_index() {
        assert!(index_rosters(&[]).is_empty());
    }
}
