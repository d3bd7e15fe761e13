//! glens - GitLab group membership explorer
//!
//! A terminal client for answering "who is in this group, and what do they
//! reach?" against the GitLab REST API:
//! - Validate a personal access token and group id
//! - List group members with their roles and per-user group/project reach
//! - Show the full profile behind any member
//! - List one project's members
//! - List the groups visible from the configured root

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod context;
mod error;
mod output;

use error::CliResult;

/// Explore GitLab group members, roles, and projects from the terminal
#[derive(Parser)]
#[command(name = "glens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// GitLab API base URL
    #[arg(
        long,
        global = true,
        env = "GLENS_GITLAB_URL",
        default_value = glens_gitlab::config::DEFAULT_GITLAB_URL
    )]
    gitlab_url: String,

    /// Personal access token with read_api scope
    #[arg(long, global = true, env = "GLENS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Group id or full path
    #[arg(long, global = true, env = "GLENS_GROUP_ID")]
    group: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the token and group id against the API
    Check(commands::check::CheckArgs),

    /// List the group's members with roles and membership reach
    Members(commands::members::MembersArgs),

    /// Show one user's full profile
    User(commands::user::UserArgs),

    /// List one project's members
    Project(commands::project::ProjectArgs),

    /// List the groups reachable from the configured group
    Groups(commands::groups::GroupsArgs),
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let client = context::build_client(&cli.gitlab_url, cli.token.as_deref(), cli.group.as_deref())?;

    // Ctrl-C cancels the client's in-flight requests instead of leaving
    // them running while the process unwinds.
    let cancel = client.cancellation_token().clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    match cli.command {
        Commands::Check(args) => commands::check::execute(&client, args).await,
        Commands::Members(args) => commands::members::execute(&client, args).await,
        Commands::User(args) => commands::user::execute(&client, args).await,
        Commands::Project(args) => commands::project::execute(&client, args).await,
        Commands::Groups(args) => commands::groups::execute(&client, args).await,
    }
}
