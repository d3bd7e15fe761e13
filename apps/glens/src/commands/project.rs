//! Project member listing command

use clap::Args;
use glens_gitlab::models::GroupMember;
use glens_gitlab::GitlabClient;

use crate::error::CliResult;
use crate::output::truncate;

/// Arguments for the project command
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Project ID
    pub id: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(client: &GitlabClient, args: ProjectArgs) -> CliResult<()> {
    let members = client.list_project_members(args.id).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&members)?);
        return Ok(());
    }

    if members.is_empty() {
        // Also the shape of a 404: a project without visible members is
        // not an error.
        println!("No visible members for project {}.", args.id);
        return Ok(());
    }

    print_member_table(&members);
    println!();
    println!("Showing {} members", members.len());

    Ok(())
}

fn print_member_table(members: &[GroupMember]) {
    println!(
        "{:<10} {:<25} {:<20} {:<12}",
        "ID", "NAME", "USERNAME", "ROLE"
    );
    println!("{}", "-".repeat(70));

    for member in members {
        println!(
            "{:<10} {:<25} {:<20} {:<12}",
            member.id,
            truncate(&member.name, 23),
            truncate(&member.username, 18),
            member.role()
        );
    }
}
