//! Group member listing with per-user membership reach

use clap::Args;
use serde::Serialize;

use glens_gitlab::aggregate::{self, MembershipIndex, UserMembership};
use glens_gitlab::models::GroupMember;
use glens_gitlab::GitlabClient;

use crate::error::CliResult;
use crate::output::{matches_query, print_warning, truncate};

/// Arguments for the members command
#[derive(Args, Debug)]
pub struct MembersArgs {
    /// Case-insensitive substring filter over name and username
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One rendered row: a flat member record joined with the reduced
/// membership view by user id at render time.
#[derive(Serialize)]
struct MemberRow<'a> {
    #[serde(flatten)]
    member: &'a GroupMember,
    role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    membership: Option<&'a UserMembership>,
}

pub async fn execute(client: &GitlabClient, args: MembersArgs) -> CliResult<()> {
    // The flat listing and the aggregation pipeline are independent
    // fetches; neither waits for the other.
    let (members, rosters) = tokio::join!(
        client.list_all_group_members(),
        aggregate::fetch_group_rosters(client),
    );

    // Without the member list there is nothing to show.
    let members = members?;

    // The membership view only degrades the listing: the table still
    // renders without the reach columns.
    let index: Option<MembershipIndex> = match rosters {
        Ok(rosters) => Some(aggregate::index_rosters(&rosters)),
        Err(e) => {
            print_warning(&format!("group/project details unavailable: {e}"));
            None
        }
    };

    let query = args.search.unwrap_or_default();
    let rows: Vec<MemberRow> = members
        .iter()
        .filter(|m| matches_query(&m.name, &m.username, &query))
        .map(|m| MemberRow {
            member: m,
            role: m.role().name(),
            membership: index.as_ref().and_then(|ix| ix.get(&m.id)),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        if members.is_empty() {
            println!("No users found in this group.");
        } else {
            println!("No users match your search.");
        }
    } else {
        print_member_table(&rows, index.is_some());
    }

    println!();
    println!("Showing {} of {} users", rows.len(), members.len());

    Ok(())
}

fn print_member_table(rows: &[MemberRow], with_membership: bool) {
    println!(
        "{:<10} {:<25} {:<20} {:<12} {:<8} {:<8}",
        "ID", "NAME", "USERNAME", "ROLE", "GROUPS", "PROJECTS"
    );
    println!("{}", "-".repeat(88));

    for row in rows {
        // A user missing from the reduced view has no membership data
        // yet; that is not an error.
        let (groups, projects) = match row.membership {
            Some(m) => (m.groups.len().to_string(), m.projects.len().to_string()),
            None if with_membership => ("0".to_string(), "0".to_string()),
            None => ("-".to_string(), "-".to_string()),
        };

        println!(
            "{:<10} {:<25} {:<20} {:<12} {:<8} {:<8}",
            row.member.id,
            truncate(&row.member.name, 23),
            truncate(&row.member.username, 18),
            row.role,
            groups,
            projects
        );
    }
}
