//! CLI administration tool for smartlink.
//!
//! Inspects and toggles links, shows totals and runs database maintenance
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin smartlink-admin -- link list
//!
//! # Show one link with its destinations
//! cargo run --bin smartlink-admin -- link show q2sd8Jk1LmPz0aXw
//!
//! # Stop redirecting a link (asks for confirmation)
//! cargo run --bin smartlink-admin -- link disable q2sd8Jk1LmPz0aXw
//!
//! # View statistics
//! cargo run --bin smartlink-admin -- stats
//!
//! # Apply migrations
//! cargo run --bin smartlink-admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use smartlink::application::services::LinkService;
use smartlink::config::Config;
use smartlink::domain::entities::Link;
use smartlink::domain::platform::DeviceType;
use smartlink::infrastructure::persistence::PgLinkRepository;
use smartlink::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing smartlink.
#[derive(Parser)]
#[command(name = "smartlink-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Show a link with its destinations
    Show {
        /// Link token
        token: String,
    },

    /// Stop redirecting a link
    Disable {
        /// Link token
        token: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Resume redirecting a link
    Enable {
        /// Link token
        token: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

type Links = LinkService<PgLinkRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = server::connect_pool(&config).await?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::new(repo);

    match action {
        LinkAction::List => list_links(&service).await?,
        LinkAction::Show { token } => show_link(&service, &token).await?,
        LinkAction::Disable { token, yes } => disable_link(&service, &token, yes).await?,
        LinkAction::Enable { token } => enable_link(&service, &token).await?,
    }

    Ok(())
}

/// Lists all links with click counts and status.
///
/// # Output Format
///
/// ```text
/// 🔗 Links
///
///   Token              Name                       Clicks   Created            Status
///   ─────────────────────────────────────────────────────────────────────────────────
///   q2sd8Jk1LmPz0aXw   Spring campaign            42       2024-01-15 10:30   ACTIVE
/// ```
async fn list_links(service: &Links) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!("  Create one with: {}", "POST /api/create".bright_cyan());
        return Ok(());
    }

    println!(
        "  {:<18} {:<26} {:<8} {:<18} {:<8}",
        "Token".bright_white().bold(),
        "Name".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(82).bright_black());

    for link in &links {
        println!(
            "  {:<18} {:<26} {:<8} {:<18} {}",
            link.token.cyan(),
            truncate(&link.name, 26),
            link.click_count.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status_label(link)
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints every field of a link, destinations included.
async fn show_link(service: &Links, token: &str) -> Result<()> {
    let link = service
        .get_link(token)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "🔗 Link".bright_blue().bold());
    println!();
    println!("  Token:        {}", link.token.cyan());
    println!("  Name:         {}", link.name);
    println!("  Status:       {}", status_label(&link));
    println!(
        "  Clicks:       {}",
        link.click_count.to_string().bright_green().bold()
    );
    println!(
        "  Created:      {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "  Last click:   {}",
        link.last_clicked_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "never".to_string())
    );
    println!();
    println!("{}", "  Destinations:".bright_white().bold());

    for device in DeviceType::ALL {
        if let Some(url) = link.destinations.get(device) {
            println!("    {:<9} {}", device.as_str(), url);
        }
    }
    println!("    {:<9} {}", "fallback", link.fallback_url.bright_white());
    println!();

    Ok(())
}

/// Disables a link after confirmation (default: No).
async fn disable_link(service: &Links, token: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🔒 Disable Link".bright_blue().bold());
    println!();

    let link = service
        .get_link(token)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    if !link.is_active {
        println!("{}", "⚠️  This link is already disabled".yellow());
        return Ok(());
    }

    println!("  Token: {}", link.token.cyan());
    println!("  Name:  {}", link.name);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Disable this link? Visitors will get 404.")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .set_active(token, false)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to disable link: {}", e))?;

    println!();
    println!("{}", "✅ Link disabled".green().bold());
    println!();

    Ok(())
}

async fn enable_link(service: &Links, token: &str) -> Result<()> {
    service
        .set_active(token, true)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to enable link: {}", e))?;

    println!("{}", "✅ Link enabled".green().bold());

    Ok(())
}

/// Displays totals of links, active links and clicks.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM smart_links")
        .fetch_one(pool)
        .await?;

    let active_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM smart_links WHERE is_active")
            .fetch_one(pool)
            .await?;

    let clicks_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM link_clicks")
        .fetch_one(pool)
        .await?;

    println!(
        "  Links:         {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Active links:  {}",
        active_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:        {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database maintenance commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1")
                .fetch_one(pool)
                .await
                .context("Database check failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "🛠️  Applying migrations...".bright_blue());

            server::migrate(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}

fn status_label(link: &Link) -> ColoredString {
    if link.is_active {
        "ACTIVE".green()
    } else {
        "DISABLED".red()
    }
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let cut: String = value.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
