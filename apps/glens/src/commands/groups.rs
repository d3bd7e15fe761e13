//! Group roster overview command

use clap::Args;
use glens_gitlab::aggregate::{self, GroupRoster};
use glens_gitlab::models::Ownership;
use glens_gitlab::GitlabClient;

use crate::error::CliResult;
use crate::output::truncate;

/// Arguments for the groups command
#[derive(Args, Debug)]
pub struct GroupsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(client: &GitlabClient, args: GroupsArgs) -> CliResult<()> {
    let rosters = aggregate::fetch_group_rosters(client).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rosters)?);
        return Ok(());
    }

    print_group_table(&rosters);
    println!();
    println!("Showing {} groups", rosters.len());

    Ok(())
}

fn print_group_table(rosters: &[GroupRoster]) {
    println!(
        "{:<10} {:<25} {:<20} {:<8} {:<8} {:<8}",
        "ID", "NAME", "PATH", "MEMBERS", "OWNERS", "PROJECTS"
    );
    println!("{}", "-".repeat(84));

    for roster in rosters {
        let owners = roster
            .members
            .iter()
            .filter(|m| m.ownership == Ownership::Owner)
            .count();

        println!(
            "{:<10} {:<25} {:<20} {:<8} {:<8} {:<8}",
            roster.group.id,
            truncate(&roster.group.name, 23),
            truncate(&roster.group.path, 18),
            roster.members.len(),
            owners,
            roster.projects.len()
        );
    }
}
