// src/main.rs

// Declare modules
pub mod color;
pub mod digest;
pub mod format;
pub mod github;
pub mod identicon;
pub mod pattern;
pub mod raster;

use crate::format::{format_account_age, format_number};
use crate::github::{GithubClient, SearchMode, UserProfile};
use crate::identicon::Identicon;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

/// Deterministic GitHub-style identicon generator.
///
/// Resolves INPUT to a numeric user ID through the GitHub users API
/// (unless --no-lookup is given), derives the identicon, and writes the
/// PNG to disk.
#[derive(Debug, Parser)]
#[command(name = "identicon", version)]
struct Cli {
    /// GitHub login or numeric user ID.
    input: String,

    /// Treat INPUT as the raw identifier and skip the directory lookup.
    #[arg(long)]
    no_lookup: bool,

    /// How to interpret INPUT when looking it up.
    #[arg(long, value_enum, default_value_t = SearchMode::Auto)]
    mode: SearchMode,

    /// Personal access token; falls back to the GITHUB_TOKEN environment
    /// variable.
    #[arg(long)]
    token: Option<String>,

    /// Where to write the rendered PNG.
    #[arg(short, long, default_value = "identicon.png")]
    output: PathBuf,

    /// Print the metadata record as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let (identifier, profile) = if cli.no_lookup {
        info!("Skipping lookup; using '{}' as the identifier.", cli.input);
        (cli.input.clone(), None)
    } else {
        let token = cli.token.clone().or_else(|| {
            std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty())
        });
        if token.is_none() {
            warn!("No token supplied; unauthenticated requests are rate-limited.");
        }
        let client = GithubClient::new(token.as_deref())
            .context("Failed to construct the GitHub client")?;
        let profile = client
            .fetch_user(&cli.input, cli.mode)
            .with_context(|| format!("Failed to resolve '{}'", cli.input))?;
        info!("Resolved '{}' to user ID {}.", profile.login, profile.id);
        (profile.id.clone(), Some(profile))
    };

    let icon = Identicon::generate(&identifier);
    info!(
        "Generated identicon for identifier '{}': digest {}, color {}, {} of 25 cells filled.",
        icon.identifier,
        icon.digest,
        icon.color.hex,
        icon.pattern.filled_count()
    );

    std::fs::write(&cli.output, &icon.png)
        .with_context(|| format!("Failed to write PNG to {}", cli.output.display()))?;
    info!("Wrote {} bytes to {}.", icon.png.len(), cli.output.display());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&icon)?);
    }

    if let Some(profile) = profile {
        print_summary(&profile);
    }

    Ok(())
}

/// Prints the resolved profile in a short human-readable block.
fn print_summary(profile: &UserProfile) {
    println!("{} (ID {})", profile.login, profile.id);
    if let Some(name) = &profile.name {
        println!("  name:      {name}");
    }
    if let Some(bio) = &profile.bio {
        println!("  bio:       {bio}");
    }
    if let Some((age, date)) = profile
        .created_at
        .as_deref()
        .and_then(format_account_age)
    {
        println!("  joined:    {date} ({age} ago)");
    }
    println!("  repos:     {}", format_number(profile.public_repos));
    println!("  followers: {}", format_number(profile.followers));
    println!("  following: {}", format_number(profile.following));
    for repo in profile.repos.iter().take(5) {
        let language = repo.language.as_deref().unwrap_or("-");
        println!(
            "    {}  [{}] {} stars",
            repo.name,
            language,
            format_number(repo.stars)
        );
    }
}
