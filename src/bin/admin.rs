//! CLI administration tool for linkcut.
//!
//! Read-only inspection of the record store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show the 20 most recent error-log records
//! cargo run --bin admin -- errors
//!
//! # Show the 5 most recent
//! cargo run --bin admin -- errors --limit 5
//!
//! # Count URL and error-log records
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use linkcut::config::mask_connection_string;
use linkcut::domain::entities::ErrorLog;
use linkcut::infrastructure::persistence::{PgErrorLogRepository, PgUrlRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting linkcut.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// List recent error-log records
    Errors {
        /// Maximum number of records to show
        #[arg(short, long, default_value_t = 20, value_parser = clap::value_parser!(i64).range(1..=1000))]
        limit: i64,
    },

    /// Show record counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and report the server version
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url).await.with_context(|| {
        format!(
            "Failed to connect to database at {}",
            mask_connection_string(&database_url)
        )
    })?;
    let pool = Arc::new(pool);

    match cli.command {
        Commands::Errors { limit } => handle_errors(pool, limit).await?,
        Commands::Stats => handle_stats(pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Prints the newest error-log records, newest first.
async fn handle_errors(pool: Arc<PgPool>, limit: i64) -> Result<()> {
    println!("{}", "Recent errors".bright_blue().bold());
    println!();

    let repo = PgErrorLogRepository::new(pool);
    let records = repo
        .list_recent(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch error logs: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No errors recorded".green());
        println!();
        return Ok(());
    }

    for record in &records {
        print_error_log(record);
    }

    println!(
        "  Shown: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

fn print_error_log(record: &ErrorLog) {
    println!(
        "  {} {} {} {}",
        record
            .timestamp
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .bright_black(),
        record.method.cyan(),
        record.url.bright_white(),
        format!("#{}", record.id).bright_black()
    );
    println!("    {}", record.message.red());

    if let Some(stack) = record.stack.as_deref().filter(|s| !s.is_empty()) {
        for line in stack.lines() {
            println!("      {}", line.bright_black());
        }
    }

    println!();
}

/// Displays record counts.
async fn handle_stats(pool: Arc<PgPool>) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let urls = PgUrlRepository::new(pool.clone())
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count URLs: {}", e))?;
    let errors = PgErrorLogRepository::new(pool)
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count error logs: {}", e))?;

    println!("  URLs:       {}", urls.to_string().bright_green().bold());
    println!("  Error logs: {}", errors.to_string().bright_yellow().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await
                .context("Database query failed")?;

            println!("{}", "Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
