//! User profile detail command

use clap::Args;
use glens_gitlab::models::UserProfile;
use glens_gitlab::GitlabClient;

use crate::error::CliResult;

/// Arguments for the user command
#[derive(Args, Debug)]
pub struct UserArgs {
    /// User ID
    pub id: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(client: &GitlabClient, args: UserArgs) -> CliResult<()> {
    let user = client.get_user(args.id).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&user)?);
    } else {
        print_profile(&user);
    }

    Ok(())
}

// GitLab reports most profile fields as empty strings rather than
// omitting them; treat both as absent.
fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "N/A",
    }
}

fn print_profile(user: &UserProfile) {
    println!("User: {}", user.name);
    println!("{}", "\u{2501}".repeat(50));
    println!("ID:            {}", user.id);
    println!("Username:      @{}", user.username);
    println!("State:         {}", user.state);

    if user.bot {
        println!("Bot:           yes");
    }
    if !user.web_url.is_empty() {
        println!("Profile:       {}", user.web_url);
    }

    println!("Job title:     {}", or_na(user.job_title.as_deref()));
    println!("Location:      {}", or_na(user.location.as_deref()));
    println!("Pronouns:      {}", or_na(user.pronouns.as_deref()));
    println!("Organization:  {}", or_na(user.organization.as_deref()));
    println!("Bio:           {}", or_na(user.bio.as_deref()));

    if let Some(email) = user.public_email.as_deref().filter(|e| !e.is_empty()) {
        println!("Email:         {email}");
    }
    if let Some(site) = user.website_url.as_deref().filter(|s| !s.is_empty()) {
        println!("Website:       {site}");
    }
    if let Some(linkedin) = user.linkedin.as_deref().filter(|s| !s.is_empty()) {
        println!("LinkedIn:      {linkedin}");
    }
    if let Some(twitter) = user.twitter.as_deref().filter(|s| !s.is_empty()) {
        println!("Twitter:       {twitter}");
    }
    if let Some(discord) = user.discord.as_deref().filter(|s| !s.is_empty()) {
        println!("Discord:       {discord}");
    }
    if let Some(local_time) = user.local_time.as_deref().filter(|s| !s.is_empty()) {
        println!("Local time:    {local_time}");
    }
    if let Some(created) = user.created_at {
        println!("Joined:        {}", created.format("%Y-%m-%d"));
    }

    println!("Followers:     {}", user.followers);
    println!("Following:     {}", user.following);
}
