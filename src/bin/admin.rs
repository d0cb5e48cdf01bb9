//! CLI administration tool for linkpro.
//!
//! Works directly on the configured store, so it can be used while the
//! server is stopped. Running it next to a live server is last-writer-wins.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/some/long/path --alias summer-sale
//!
//! # List all links
//! cargo run --bin admin -- list
//!
//! # Follow a short link through the countdown
//! cargo run --bin admin -- open summer-sale
//!
//! # Delete a link
//! cargo run --bin admin -- remove k3j9x2abcd12
//!
//! # View statistics
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `STORE_BACKEND`, `STORE_DIR`, `BASE_URL`,
//! `REDIRECT_COUNTDOWN_SECONDS`, `REDIRECT_DELAY_MS`, `ALIAS_MAX_ATTEMPTS`.

use linkpro::config::{self, Config};
use linkpro::domain::entities::{ShortLinkRecord, Tab};
use linkpro::domain::redirect_flow::RedirectState;
use linkpro::server::{build_state, open_store};
use linkpro::state::AppState;
use linkpro::utils::timestamp::to_iso_millis;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::io::Write;

/// CLI tool for managing linkpro short links.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Shorten {
        /// The URL to shorten
        url: String,

        /// Custom alias (letters, digits, '-' and '_')
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// List all links, newest first
    List,

    /// Show the link an alias points to
    Resolve { alias: String },

    /// Follow a short link through the countdown and count the click
    Open {
        alias: String,

        /// Skip the countdown
        #[arg(long)]
        now: bool,
    },

    /// Delete a link by id
    Remove {
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics
    Stats,

    /// Show or set the remembered tab
    Tab {
        /// One of: dashboard, shorten, analytics, seo
        tab: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let state = open(&config)?;

    match cli.command {
        Commands::Shorten { url, alias } => shorten(&state, &url, alias.as_deref())?,
        Commands::List => list(&state),
        Commands::Resolve { alias } => resolve(&state, &alias)?,
        Commands::Open { alias, now } => open_link(&state, &alias, now).await?,
        Commands::Remove { id, yes } => remove(&state, &id, yes)?,
        Commands::Stats => stats(&state),
        Commands::Tab { tab } => tab_preference(&state, tab)?,
    }

    Ok(())
}

fn open(config: &Config) -> Result<AppState> {
    let store = open_store(config)?;
    Ok(build_state(config, store))
}

fn shorten(state: &AppState, url: &str, alias: Option<&str>) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let record = state
        .links
        .create(url, alias)
        .map_err(|e| anyhow::anyhow!("Failed to shorten: {}", e))?;

    println!("{}", "✅ Link created".green().bold());
    println!();
    print_record(&record);
    println!();

    Ok(())
}

/// Lists all links.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   Alias          Clicks  Created                   Original URL
///   ───────────────────────────────────────────────────────────────────
///   summer-sale    9       2024-05-01T12:30:00.000Z  https://example.com/sale
/// ```
fn list(state: &AppState) {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let links = state.links.list();

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin shorten <url>",
            "cargo run --bin".bright_cyan()
        );
        return;
    }

    println!(
        "  {:<14} {:<7} {:<25} {}",
        "Alias".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<14} {:<7} {:<25} {}",
            link.alias.cyan(),
            link.clicks.to_string().bright_white(),
            to_iso_millis(&link.created_at).bright_black(),
            link.original_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();
}

fn resolve(state: &AppState, alias: &str) -> Result<()> {
    let record = state.links.resolve(alias).context("Short link not found")?;
    print_record(&record);
    Ok(())
}

/// Runs the countdown in the terminal and counts one click.
///
/// Fails for an unknown alias, like `resolve`.
async fn open_link(state: &AppState, alias: &str, now: bool) -> Result<()> {
    let skip = async move {
        if !now {
            std::future::pending::<()>().await;
        }
    };

    let target = state
        .redirects
        .run_countdown(alias, skip, |s| match s {
            RedirectState::Countdown(n) => {
                print!("\r  Redirecting in {}...", n.to_string().bright_yellow().bold());
                let _ = std::io::stdout().flush();
            }
            RedirectState::Redirecting => println!("\r  {}            ", "Redirecting".green()),
            RedirectState::NotFound | RedirectState::Resolving => {}
        })
        .await;

    let Some(target) = target else {
        anyhow::bail!("Short link not found: {alias}");
    };

    println!("  → {}", target.bright_cyan());
    Ok(())
}

/// Deletes a link with confirmation prompt (default: No).
fn remove(state: &AppState, id: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Link".bright_blue().bold());
    println!();

    let Some(record) = state.links.list().into_iter().find(|r| r.id == id) else {
        println!("{}", "⚠️  No link with this id".yellow());
        return Ok(());
    };

    print_record(&record);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    state.links.remove(id);
    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Displays dashboard totals.
fn stats(state: &AppState) {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let summary = state.links.summary();

    println!(
        "  Links:          {}",
        summary.total_links.to_string().bright_white().bold()
    );
    println!(
        "  Clicks:         {}",
        summary.total_clicks.to_string().bright_white().bold()
    );
    println!(
        "  Avg SEO score:  {}",
        summary.average_seo_score.to_string().bright_white().bold()
    );
    if let Some(top) = summary.top_link {
        println!(
            "  Top performer:  {} ({} clicks)",
            top.short_url.cyan(),
            top.clicks
        );
    }
    println!();
}

fn tab_preference(state: &AppState, tab: Option<String>) -> Result<()> {
    if let Some(tab) = tab {
        let tab: Tab = tab.parse()?;
        state.preferences.set_tab(tab);
    }

    println!("  Current tab: {}", state.preferences.current_tab().label().cyan());
    Ok(())
}

fn print_record(record: &ShortLinkRecord) {
    println!("  ID:           {}", record.id.bright_black());
    println!("  Short URL:    {}", record.short_url.bright_yellow().bold());
    println!("  Original URL: {}", record.original_url);
    println!("  Clicks:       {}", record.clicks);
    println!(
        "  Scores:       SEO {} / clickbait {}",
        record.seo_score, record.clickbait_score
    );
    if let Some(last) = &record.last_clicked {
        println!("  Last clicked: {}", to_iso_millis(last).bright_black());
    }
}
