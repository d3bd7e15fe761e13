//! Configuration probe command

use clap::Args;
use glens_gitlab::GitlabClient;

use crate::error::CliResult;
use crate::output::{print_key_value, print_success};

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(client: &GitlabClient, args: CheckArgs) -> CliResult<()> {
    let group = client.get_group().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&group)?);
    } else {
        print_success(&format!("Token accepted; group '{}' is reachable.", group.name));
        print_key_value("ID", &group.id.to_string());
        print_key_value("Path", &group.path);
        print_key_value("URL", &group.web_url);
    }

    Ok(())
}
