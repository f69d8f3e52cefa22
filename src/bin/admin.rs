//! CLI administration tool for the URL shortening service.
//!
//! Reads the same store the HTTP service writes, without going through the
//! API (and so without rate limiting or touching access counts).
//!
//! # Usage
//!
//! ```bash
//! # Inspect one mapping (prompts for the code if omitted)
//! cargo run --bin admin -- show a1b2c3d4
//!
//! # Most accessed short URLs
//! cargo run --bin admin -- top --limit 20
//!
//! # Totals
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! Uses the service's configuration variables (`DATABASE_URL` or `DB_*`).

use url_shortening_service::config;
use url_shortening_service::domain::repositories::UrlMappingRepository;
use url_shortening_service::infrastructure::persistence::PgUrlMappingRepository;
use url_shortening_service::server::connect_database;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting the URL shortening service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one short URL with its long URL and access count
    Show {
        /// Short code to look up
        short_url: Option<String>,
    },

    /// List the most accessed short URLs
    Top {
        #[arg(short, long, default_value_t = 10)]
        limit: i64,
    },

    /// Show totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_database(&config).await?;
    let repo = PgUrlMappingRepository::new(Arc::new(pool.clone()));

    match cli.command {
        Commands::Show { short_url } => show_mapping(&repo, short_url).await?,
        Commands::Top { limit } => list_top(&repo, limit).await?,
        Commands::Stats => handle_stats(&repo).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn show_mapping(repo: &PgUrlMappingRepository, short_url: Option<String>) -> Result<()> {
    let short_url = match short_url {
        Some(code) => code,
        None => Input::new().with_prompt("Short URL").interact_text()?,
    };

    let mapping = repo
        .find_by_short_url(short_url.trim())
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("Short URL '{}' not found", short_url.trim()))?;

    println!("{}", "🔗 URL Mapping".bright_blue().bold());
    println!();
    println!("  Short URL: {}", mapping.short_url.cyan());
    println!("  Long URL:  {}", mapping.long_url.bright_white());
    println!(
        "  Created:   {}",
        mapping
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!(
        "  Accesses:  {}",
        mapping.access_count.to_string().bright_green().bold()
    );
    if let Some(expiry) = mapping.expiry_date {
        println!("  Expires:   {}", expiry.format("%Y-%m-%d %H:%M").to_string());
    }
    println!();

    Ok(())
}

/// Prints the most accessed mappings.
///
/// ```text
/// 🏆 Top 3 short URLs
///
///   Code      Accesses   Created            Long URL
///   ──────────────────────────────────────────────────────────────────
///   a1b2c3d4  1024       2025-01-15 10:30   https://example.com/...
/// ```
async fn list_top(repo: &PgUrlMappingRepository, limit: i64) -> Result<()> {
    if limit <= 0 {
        anyhow::bail!("--limit must be positive, got {}", limit);
    }

    let mappings = repo
        .most_accessed(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list mappings: {}", e))?;

    println!(
        "{}",
        format!("🏆 Top {} short URLs", limit).bright_blue().bold()
    );
    println!();

    if mappings.is_empty() {
        println!("{}", "  No short URLs yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<9} {:<10} {:<18} {}",
        "Code".bright_white().bold(),
        "Accesses".bright_white().bold(),
        "Created".bright_white().bold(),
        "Long URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for mapping in &mappings {
        println!(
            "  {:<9} {:<10} {:<18} {}",
            mapping.short_url.cyan(),
            mapping.access_count.to_string().bright_green(),
            mapping
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            truncate(&mapping.long_url, 60)
        );
    }
    println!();

    Ok(())
}

async fn handle_stats(repo: &PgUrlMappingRepository) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let mappings = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;
    let accesses = repo
        .total_accesses()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to sum accesses: {}", e))?;

    println!(
        "  Short URLs: {}",
        mappings.to_string().bright_green().bold()
    );
    println!(
        "  Accesses:   {}",
        accesses.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let size: String =
                sqlx::query_scalar("SELECT pg_size_pretty(pg_total_relation_size('url_mappings'))")
                    .fetch_one(pool)
                    .await?;

            println!("  PostgreSQL:         {}", version.bright_white());
            println!("  url_mappings size:  {}", size.bright_white());
            println!();
        }
    }

    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_string(),
    }
}
